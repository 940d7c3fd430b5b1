//! Figure-level size and title

use super::types::{check_positive, FeatureKind, FeatureSpec};
use crate::Result;

/// Figure size in pixels
pub fn ggsize(width: f64, height: f64) -> Result<FeatureSpec> {
    Ok(FeatureSpec::new(FeatureKind::GgSize, None)
        .with("width", check_positive("width", width)?)
        .with("height", check_positive("height", height)?))
}

/// Figure title with an optional subtitle
pub fn ggtitle(text: &str, subtitle: Option<&str>) -> FeatureSpec {
    FeatureSpec::new(FeatureKind::GgTitle, None)
        .with("text", text)
        .with_opt("subtitle", subtitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ggsize() {
        let size = ggsize(400.0, 300.0).unwrap();
        assert_eq!(size.kind(), FeatureKind::GgSize);
        assert_eq!(size.as_dict(), json!({"width": 400.0, "height": 300.0}));
    }

    #[test]
    fn test_ggsize_must_be_positive() {
        assert!(ggsize(0.0, 300.0).is_err());
        assert!(ggsize(400.0, -1.0).is_err());
        assert!(ggsize(f64::INFINITY, 300.0).is_err());
    }

    #[test]
    fn test_ggtitle() {
        assert_eq!(ggtitle("Cars", None).as_dict(), json!({"text": "Cars"}));
        assert_eq!(
            ggtitle("Cars", Some("by class")).as_dict(),
            json!({"text": "Cars", "subtitle": "by class"})
        );
    }
}
