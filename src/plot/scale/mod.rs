//! Scales
//!
//! A scale controls how data values map onto one aesthetic: axis breaks and
//! labels, limits, transforms, and manual output values. [`Scale`] is the
//! general builder; the `scale_*` functions preset it for common cases.

mod transform;
mod types;

pub use transform::TransformKind;
pub use types::Scale;

pub fn scale_x_continuous() -> Scale {
    Scale::new("x")
}

pub fn scale_y_continuous() -> Scale {
    Scale::new("y")
}

pub fn scale_x_discrete() -> Scale {
    Scale::new("x").discrete(true)
}

pub fn scale_y_discrete() -> Scale {
    Scale::new("y").discrete(true)
}

pub fn scale_x_log10() -> Scale {
    Scale::new("x").trans(TransformKind::Log10)
}

pub fn scale_y_log10() -> Scale {
    Scale::new("y").trans(TransformKind::Log10)
}

/// Manual colour scale; `values` are CSS colours assigned to categories in order
pub fn scale_color_manual<S: AsRef<str>>(values: &[S]) -> Scale {
    Scale::new("color").values(values.iter().map(|v| v.as_ref()))
}

pub fn scale_fill_manual<S: AsRef<str>>(values: &[S]) -> Scale {
    Scale::new("fill").values(values.iter().map(|v| v.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log10_preset() {
        let spec = scale_x_log10().name("Price").build().unwrap();
        assert_eq!(
            spec.as_dict(),
            json!({"name": "Price", "aesthetic": "x", "trans": "log10"})
        );
    }

    #[test]
    fn test_discrete_preset() {
        let spec = scale_y_discrete().build().unwrap();
        assert_eq!(spec.get("discrete"), Some(&json!(true)));
    }

    #[test]
    fn test_manual_color() {
        let spec = scale_color_manual(&["red", "blue"]).build().unwrap();
        assert_eq!(
            spec.as_dict(),
            json!({"aesthetic": "color", "values": ["red", "blue"]})
        );
        assert!(scale_fill_manual(&["bogus"]).build().is_err());
    }
}
