//! Path geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};

/// Path geom - connects observations in data order
#[derive(Debug, Clone, Copy)]
pub struct Path;

impl GeomTrait for Path {
    fn geom_type(&self) -> GeomType {
        GeomType::Path
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &["x", "y", "alpha", "color", "linetype", "size"],
            required: &["x", "y"],
        }
    }

    fn params(&self) -> &'static [&'static str] {
        &["flat", "geodesic"]
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "path")
    }
}
