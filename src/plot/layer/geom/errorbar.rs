//! Error bar geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};

/// Error bar geom - vertical intervals with whiskers
#[derive(Debug, Clone, Copy)]
pub struct ErrorBar;

impl GeomTrait for ErrorBar {
    fn geom_type(&self) -> GeomType {
        GeomType::ErrorBar
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &["x", "ymin", "ymax", "alpha", "color", "linetype", "size", "width"],
            required: &["x", "ymin", "ymax"],
        }
    }
}

impl std::fmt::Display for ErrorBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "errorbar")
    }
}
