//! Segment geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};

/// Segment geom - straight lines from (x, y) to (xend, yend)
#[derive(Debug, Clone, Copy)]
pub struct Segment;

impl GeomTrait for Segment {
    fn geom_type(&self) -> GeomType {
        GeomType::Segment
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &["x", "y", "xend", "yend", "alpha", "color", "linetype", "size"],
            required: &["x", "y", "xend", "yend"],
        }
    }

    fn params(&self) -> &'static [&'static str] {
        &["arrow", "flat", "geodesic", "spacer"]
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "segment")
    }
}
