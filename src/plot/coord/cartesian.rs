//! Cartesian coordinate system implementation

use super::{CoordKind, CoordTrait};

/// Cartesian coordinate system - standard x/y coordinates
#[derive(Debug, Clone, Copy)]
pub struct Cartesian;

impl CoordTrait for Cartesian {
    fn coord_kind(&self) -> CoordKind {
        CoordKind::Cartesian
    }

    fn name(&self) -> &'static str {
        "cartesian"
    }

    fn allowed_properties(&self) -> &'static [&'static str] {
        &["xlim", "ylim", "flip"]
    }
}

impl std::fmt::Display for Cartesian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_cartesian_properties() {
        let cartesian = Cartesian;
        assert_eq!(cartesian.coord_kind(), CoordKind::Cartesian);
        assert_eq!(cartesian.name(), "cartesian");
        assert_eq!(cartesian.to_string(), "cartesian");
    }

    #[test]
    fn test_cartesian_accepts_limits() {
        let mut props = Map::new();
        props.insert("xlim".to_string(), json!([0.0, 100.0]));
        props.insert("flip".to_string(), json!(true));

        let resolved = Cartesian.resolve_properties(&props).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get("xlim"), Some(&json!([0.0, 100.0])));
    }

    #[test]
    fn test_cartesian_rejects_theta() {
        let mut props = Map::new();
        props.insert("theta".to_string(), json!("y"));

        let resolved = Cartesian.resolve_properties(&props);
        assert!(resolved.is_err());
        let err = resolved.unwrap_err();
        assert!(err.contains("theta"));
        assert!(err.contains("not valid"));
    }
}
