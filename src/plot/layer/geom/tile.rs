//! Tile geom implementation

use super::{GeomAesthetics, GeomTrait, GeomType};

/// Tile geom - rectangles centered at x/y, e.g. heatmaps
#[derive(Debug, Clone, Copy)]
pub struct Tile;

impl GeomTrait for Tile {
    fn geom_type(&self) -> GeomType {
        GeomType::Tile
    }

    fn aesthetics(&self) -> GeomAesthetics {
        GeomAesthetics {
            supported: &["x", "y", "alpha", "color", "fill", "linetype", "size", "width", "height"],
            required: &["x", "y"],
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile")
    }
}
