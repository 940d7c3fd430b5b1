//! Text geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};

/// Text geom - text labels at positions
#[derive(Debug, Clone, Copy)]
pub struct Text;

/// Aesthetics of text marks
const TEXT_AESTHETICS: &[&str] = &[
    "x",
    "y",
    "label",
    "alpha",
    "color",
    "size",
    "family",
    "fontface",
    "hjust",
    "vjust",
    "angle",
    "lineheight",
];

/// Label formatting and nudging
const TEXT_PARAMS: &[&str] = &["label_format", "na_text", "nudge_x", "nudge_y", "size_unit"];

impl GeomTrait for Text {
    fn geom_type(&self) -> GeomType {
        GeomType::Text
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: TEXT_AESTHETICS,
            required: &["x", "y", "label"],
        }
    }

    fn params(&self) -> &'static [&'static str] {
        TEXT_PARAMS
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "text")
    }
}
