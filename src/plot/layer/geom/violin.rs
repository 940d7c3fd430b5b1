//! Violin geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};
use crate::plot::layer::StatKind;

/// Violin geom - violin plots (mirrored density)
#[derive(Debug, Clone, Copy)]
pub struct Violin;

impl GeomTrait for Violin {
    fn geom_type(&self) -> GeomType {
        GeomType::Violin
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &[
                "x",
                "y",
                "violinwidth",
                "alpha",
                "color",
                "fill",
                "linetype",
                "size",
                "weight",
                "width",
            ],
            required: &["y"],
        }
    }

    fn default_stat(&self) -> StatKind {
        StatKind::YDensity
    }

    fn params(&self) -> &'static [&'static str] {
        &[
            "draw_quantiles",
            "scale",
            "trim",
            "tails_cutoff",
            "bw",
            "kernel",
            "n",
            "fs_max",
        ]
    }
}

impl std::fmt::Display for Violin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "violin")
    }
}
