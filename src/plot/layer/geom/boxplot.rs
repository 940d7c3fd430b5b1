//! Boxplot geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};
use crate::plot::layer::StatKind;

/// Boxplot geom - box and whisker plots
#[derive(Debug, Clone, Copy)]
pub struct Boxplot;

impl GeomTrait for Boxplot {
    fn geom_type(&self) -> GeomType {
        GeomType::Boxplot
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &[
                "x", "y", "lower", "middle", "upper", "ymin", "ymax", "alpha", "color", "fill",
                "linetype", "shape", "size", "width", "weight",
            ],
            // The five-number summary comes from the boxplot stat
            required: &["y"],
        }
    }

    fn default_stat(&self) -> StatKind {
        StatKind::Boxplot
    }

    fn params(&self) -> &'static [&'static str] {
        &[
            "coef",
            "fatten",
            "outlier_color",
            "outlier_fill",
            "outlier_shape",
            "outlier_size",
            "varwidth",
            "whisker_width",
        ]
    }
}

impl std::fmt::Display for Boxplot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boxplot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxplot_properties() {
        let boxplot = Boxplot;
        assert_eq!(boxplot.geom_type(), GeomType::Boxplot);
        assert_eq!(boxplot.default_stat(), StatKind::Boxplot);
        assert!(boxplot.aesthetics().is_supported("middle"));
        assert!(boxplot.params().contains(&"coef"));
        assert!(!boxplot.params().contains(&"bins"));
    }
}
