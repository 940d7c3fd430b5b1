//! Polar coordinate system implementation

use super::{CoordKind, CoordTrait};

/// Polar coordinate system - one axis becomes the angle, the other the radius
#[derive(Debug, Clone, Copy)]
pub struct Polar;

impl CoordTrait for Polar {
    fn coord_kind(&self) -> CoordKind {
        CoordKind::Polar
    }

    fn name(&self) -> &'static str {
        "polar"
    }

    fn allowed_properties(&self) -> &'static [&'static str] {
        &["xlim", "ylim", "theta", "start", "direction", "transform_bkgr"]
    }
}

impl std::fmt::Display for Polar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_polar_properties() {
        let polar = Polar;
        assert_eq!(polar.coord_kind(), CoordKind::Polar);
        assert_eq!(polar.name(), "polar");
    }

    #[test]
    fn test_polar_accepts_theta_and_direction() {
        let mut props = Map::new();
        props.insert("theta".to_string(), json!("y"));
        props.insert("start".to_string(), json!(0.0));
        props.insert("direction".to_string(), json!(1));
        props.insert("transform_bkgr".to_string(), json!(false));

        let resolved = Polar.resolve_properties(&props).unwrap();
        assert_eq!(resolved.len(), 4);
    }

    #[test]
    fn test_polar_rejects_ratio() {
        let mut props = Map::new();
        props.insert("ratio".to_string(), json!(2.0));

        let err = Polar.resolve_properties(&props).unwrap_err();
        assert!(err.contains("ratio"));
        assert!(err.contains("not valid"));
    }
}
