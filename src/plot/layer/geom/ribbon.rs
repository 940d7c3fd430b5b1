//! Ribbon geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};

/// Ribbon geom - filled band between ymin and ymax
#[derive(Debug, Clone, Copy)]
pub struct Ribbon;

impl GeomTrait for Ribbon {
    fn geom_type(&self) -> GeomType {
        GeomType::Ribbon
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &["x", "ymin", "ymax", "alpha", "color", "fill", "linetype", "size"],
            required: &["x", "ymin", "ymax"],
        }
    }
}

impl std::fmt::Display for Ribbon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ribbon")
    }
}
