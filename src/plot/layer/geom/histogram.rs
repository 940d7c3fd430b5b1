//! Histogram geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};
use crate::plot::layer::StatKind;

/// Histogram geom - binned counts of a continuous variable
#[derive(Debug, Clone, Copy)]
pub struct Histogram;

impl GeomTrait for Histogram {
    fn geom_type(&self) -> GeomType {
        GeomType::Histogram
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &["x", "y", "alpha", "color", "fill", "size", "weight"],
            required: &["x"],
        }
    }

    fn default_stat(&self) -> StatKind {
        StatKind::Bin
    }

    fn params(&self) -> &'static [&'static str] {
        &["bins", "binwidth", "center", "boundary", "threshold"]
    }
}

impl std::fmt::Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "histogram")
    }
}
