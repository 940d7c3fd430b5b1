//! Bar geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};
use crate::plot::layer::StatKind;

/// Bar geom - bar heights are counts unless `stat` is `identity`
#[derive(Debug, Clone, Copy)]
pub struct Bar;

impl GeomTrait for Bar {
    fn geom_type(&self) -> GeomType {
        GeomType::Bar
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            // y is produced by the count stat, so only x is required
            supported: &["x", "y", "alpha", "color", "fill", "size", "width", "weight"],
            required: &["x"],
        }
    }

    fn default_stat(&self) -> StatKind {
        StatKind::Count
    }
}

impl std::fmt::Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bar")
    }
}
