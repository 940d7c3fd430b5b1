//! Flip coordinate system implementation

use super::{CoordKind, CoordTrait};

/// Flip coordinate system - swaps x and y axes
#[derive(Debug, Clone, Copy)]
pub struct Flip;

impl CoordTrait for Flip {
    fn coord_kind(&self) -> CoordKind {
        CoordKind::Flip
    }

    fn name(&self) -> &'static str {
        "flip"
    }

    fn allowed_properties(&self) -> &'static [&'static str] {
        &["xlim", "ylim"]
    }
}

impl std::fmt::Display for Flip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
