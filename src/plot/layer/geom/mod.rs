//! Geom trait and implementations
//!
//! Each geom is its own struct implementing [`GeomTrait`]; [`Geom`] wraps an
//! `Arc<dyn GeomTrait>` so layers can hold any of them. Geoms only describe
//! what the renderer accepts (aesthetics, default stat, extra parameters);
//! the drawing itself happens downstream.
//!
//! # Example
//!
//! ```rust,ignore
//! use plotspec::prelude::*;
//!
//! let layer = geom_boxplot().mapping(aes().x("cls").y("hwy")).build()?;
//! assert_eq!(layer.get("geom"), Some(&json!("boxplot")));
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{Layer, StatKind};
use crate::{PlotSpecError, Result};

mod area;
mod bar;
mod boxplot;
mod errorbar;
mod histogram;
mod label;
mod line;
mod path;
mod point;
mod polygon;
mod ribbon;
mod segment;
mod text;
mod tile;
mod types;
mod violin;

pub use area::Area;
pub use bar::Bar;
pub use boxplot::Boxplot;
pub use errorbar::ErrorBar;
pub use histogram::Histogram;
pub use label::Label;
pub use line::Line;
pub use path::Path;
pub use point::Point;
pub use polygon::Polygon;
pub use ribbon::Ribbon;
pub use segment::Segment;
pub use text::Text;
pub use tile::Tile;
pub use types::{GeomAesthetics, COMMON_AESTHETICS};
pub use violin::Violin;

/// Enum of all geom types for pattern matching and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeomType {
    Point,
    Line,
    Path,
    Bar,
    Histogram,
    Area,
    Boxplot,
    Violin,
    Text,
    Label,
    Segment,
    Ribbon,
    ErrorBar,
    Polygon,
    Tile,
}

impl GeomType {
    pub fn name(&self) -> &'static str {
        match self {
            GeomType::Point => "point",
            GeomType::Line => "line",
            GeomType::Path => "path",
            GeomType::Bar => "bar",
            GeomType::Histogram => "histogram",
            GeomType::Area => "area",
            GeomType::Boxplot => "boxplot",
            GeomType::Violin => "violin",
            GeomType::Text => "text",
            GeomType::Label => "label",
            GeomType::Segment => "segment",
            GeomType::Ribbon => "ribbon",
            GeomType::ErrorBar => "errorbar",
            GeomType::Polygon => "polygon",
            GeomType::Tile => "tile",
        }
    }
}

impl std::fmt::Display for GeomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for GeomType {
    type Err = PlotSpecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "point" => Ok(GeomType::Point),
            "line" => Ok(GeomType::Line),
            "path" => Ok(GeomType::Path),
            "bar" => Ok(GeomType::Bar),
            "histogram" => Ok(GeomType::Histogram),
            "area" => Ok(GeomType::Area),
            "boxplot" => Ok(GeomType::Boxplot),
            "violin" => Ok(GeomType::Violin),
            "text" => Ok(GeomType::Text),
            "label" => Ok(GeomType::Label),
            "segment" => Ok(GeomType::Segment),
            "ribbon" => Ok(GeomType::Ribbon),
            "errorbar" => Ok(GeomType::ErrorBar),
            "polygon" => Ok(GeomType::Polygon),
            "tile" => Ok(GeomType::Tile),
            other => Err(PlotSpecError::ValidationError(format!(
                "Unknown geom '{}'",
                other
            ))),
        }
    }
}

/// Core trait for geom behavior
pub trait GeomTrait: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Returns which geom this is (for pattern matching)
    fn geom_type(&self) -> GeomType;

    /// Aesthetics the geom supports and requires
    fn aesthetics(&self) -> GeomAesthetics;

    /// Stat the renderer applies when the layer does not name one
    fn default_stat(&self) -> StatKind {
        StatKind::Identity
    }

    /// Geom-specific, non-aesthetic parameters (e.g. `bins`)
    fn params(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Wrapper struct for geom trait objects
#[derive(Clone)]
pub struct Geom(Arc<dyn GeomTrait>);

impl Geom {
    pub fn point() -> Self {
        Self(Arc::new(Point))
    }

    pub fn line() -> Self {
        Self(Arc::new(Line))
    }

    pub fn path() -> Self {
        Self(Arc::new(Path))
    }

    pub fn bar() -> Self {
        Self(Arc::new(Bar))
    }

    pub fn histogram() -> Self {
        Self(Arc::new(Histogram))
    }

    pub fn area() -> Self {
        Self(Arc::new(Area))
    }

    pub fn boxplot() -> Self {
        Self(Arc::new(Boxplot))
    }

    pub fn violin() -> Self {
        Self(Arc::new(Violin))
    }

    pub fn text() -> Self {
        Self(Arc::new(Text))
    }

    pub fn label() -> Self {
        Self(Arc::new(Label))
    }

    pub fn segment() -> Self {
        Self(Arc::new(Segment))
    }

    pub fn ribbon() -> Self {
        Self(Arc::new(Ribbon))
    }

    pub fn errorbar() -> Self {
        Self(Arc::new(ErrorBar))
    }

    pub fn polygon() -> Self {
        Self(Arc::new(Polygon))
    }

    pub fn tile() -> Self {
        Self(Arc::new(Tile))
    }

    /// Create a Geom from a GeomType
    pub fn from_type(geom_type: GeomType) -> Self {
        match geom_type {
            GeomType::Point => Self::point(),
            GeomType::Line => Self::line(),
            GeomType::Path => Self::path(),
            GeomType::Bar => Self::bar(),
            GeomType::Histogram => Self::histogram(),
            GeomType::Area => Self::area(),
            GeomType::Boxplot => Self::boxplot(),
            GeomType::Violin => Self::violin(),
            GeomType::Text => Self::text(),
            GeomType::Label => Self::label(),
            GeomType::Segment => Self::segment(),
            GeomType::Ribbon => Self::ribbon(),
            GeomType::ErrorBar => Self::errorbar(),
            GeomType::Polygon => Self::polygon(),
            GeomType::Tile => Self::tile(),
        }
    }

    pub fn geom_type(&self) -> GeomType {
        self.0.geom_type()
    }

    pub fn name(&self) -> &'static str {
        self.0.geom_type().name()
    }

    pub fn aesthetics(&self) -> GeomAesthetics {
        self.0.aesthetics()
    }

    pub fn default_stat(&self) -> StatKind {
        self.0.default_stat()
    }

    pub fn params(&self) -> &'static [&'static str] {
        self.0.params()
    }
}

impl std::fmt::Debug for Geom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Geom({})", self.0)
    }
}

impl std::fmt::Display for Geom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for Geom {
    fn eq(&self, other: &Self) -> bool {
        self.geom_type() == other.geom_type()
    }
}

pub fn geom_point() -> Layer {
    Layer::new(Geom::point())
}

pub fn geom_line() -> Layer {
    Layer::new(Geom::line())
}

pub fn geom_path() -> Layer {
    Layer::new(Geom::path())
}

pub fn geom_bar() -> Layer {
    Layer::new(Geom::bar())
}

pub fn geom_histogram() -> Layer {
    Layer::new(Geom::histogram())
}

pub fn geom_area() -> Layer {
    Layer::new(Geom::area())
}

pub fn geom_boxplot() -> Layer {
    Layer::new(Geom::boxplot())
}

pub fn geom_violin() -> Layer {
    Layer::new(Geom::violin())
}

pub fn geom_text() -> Layer {
    Layer::new(Geom::text())
}

pub fn geom_label() -> Layer {
    Layer::new(Geom::label())
}

pub fn geom_segment() -> Layer {
    Layer::new(Geom::segment())
}

pub fn geom_ribbon() -> Layer {
    Layer::new(Geom::ribbon())
}

pub fn geom_errorbar() -> Layer {
    Layer::new(Geom::errorbar())
}

pub fn geom_polygon() -> Layer {
    Layer::new(Geom::polygon())
}

pub fn geom_tile() -> Layer {
    Layer::new(Geom::tile())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [GeomType; 15] = [
        GeomType::Point,
        GeomType::Line,
        GeomType::Path,
        GeomType::Bar,
        GeomType::Histogram,
        GeomType::Area,
        GeomType::Boxplot,
        GeomType::Violin,
        GeomType::Text,
        GeomType::Label,
        GeomType::Segment,
        GeomType::Ribbon,
        GeomType::ErrorBar,
        GeomType::Polygon,
        GeomType::Tile,
    ];

    #[test]
    fn test_names_round_trip_through_from_str() {
        for geom_type in ALL {
            let parsed: GeomType = geom_type.name().parse().unwrap();
            assert_eq!(parsed, geom_type);
            assert_eq!(Geom::from_type(geom_type).geom_type(), geom_type);
        }
    }

    #[test]
    fn test_display_matches_name() {
        for geom_type in ALL {
            let geom = Geom::from_type(geom_type);
            assert_eq!(geom.to_string(), geom_type.name());
        }
    }

    #[test]
    fn test_required_aesthetics_are_supported() {
        for geom_type in ALL {
            let aes = Geom::from_type(geom_type).aesthetics();
            for required in aes.required {
                assert!(
                    aes.is_supported(required),
                    "{} requires unsupported '{}'",
                    geom_type,
                    required
                );
            }
        }
    }

    #[test]
    fn test_default_stats() {
        assert_eq!(Geom::point().default_stat(), StatKind::Identity);
        assert_eq!(Geom::bar().default_stat(), StatKind::Count);
        assert_eq!(Geom::histogram().default_stat(), StatKind::Bin);
        assert_eq!(Geom::boxplot().default_stat(), StatKind::Boxplot);
        assert_eq!(Geom::violin().default_stat(), StatKind::YDensity);
    }

    #[test]
    fn test_unknown_geom() {
        assert!("bubble".parse::<GeomType>().is_err());
    }
}
