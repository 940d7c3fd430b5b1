//! Fixed-ratio coordinate system implementation

use super::{CoordKind, CoordTrait};

/// Cartesian coordinates with a fixed aspect ratio between the axes
#[derive(Debug, Clone, Copy)]
pub struct Fixed;

impl CoordTrait for Fixed {
    fn coord_kind(&self) -> CoordKind {
        CoordKind::Fixed
    }

    fn name(&self) -> &'static str {
        "fixed"
    }

    fn allowed_properties(&self) -> &'static [&'static str] {
        &["ratio", "xlim", "ylim", "flip"]
    }
}

impl std::fmt::Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_fixed_accepts_ratio() {
        let mut props = Map::new();
        props.insert("ratio".to_string(), json!(1.5));
        props.insert("xlim".to_string(), json!([0, 10]));

        let resolved = Fixed.resolve_properties(&props).unwrap();
        assert_eq!(resolved.get("ratio"), Some(&json!(1.5)));
    }

    #[test]
    fn test_fixed_rejects_direction() {
        let mut props = Map::new();
        props.insert("direction".to_string(), json!(-1));

        let err = Fixed.resolve_properties(&props).unwrap_err();
        assert!(err.contains("direction"));
        assert!(err.contains("Allowed: ratio, xlim, ylim, flip"));
    }
}
