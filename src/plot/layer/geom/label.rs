//! Label geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};

/// Label geom - text drawn on a filled rectangle
#[derive(Debug, Clone, Copy)]
pub struct Label;

impl GeomTrait for Label {
    fn geom_type(&self) -> GeomType {
        GeomType::Label
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &[
                "x",
                "y",
                "label",
                "alpha",
                "color",
                "fill",
                "size",
                "family",
                "fontface",
                "hjust",
                "vjust",
                "angle",
                "lineheight",
            ],
            required: &["x", "y", "label"],
        }
    }

    fn params(&self) -> &'static [&'static str] {
        &[
            "label_format",
            "na_text",
            "nudge_x",
            "nudge_y",
            "size_unit",
            "label_padding",
            "label_r",
            "label_size",
        ]
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "label")
    }
}
