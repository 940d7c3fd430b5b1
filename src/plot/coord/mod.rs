//! Coordinate systems
//!
//! Each coordinate system is its own struct implementing [`CoordTrait`] and
//! declares which properties it accepts. [`CoordBuilder`] collects
//! properties and validates them on `build()`.
//!
//! # Example
//!
//! ```rust,ignore
//! let coord = coord_fixed().ratio(2.0).xlim(Some(0.0), Some(10.0)).build()?;
//! assert_eq!(coord.as_dict(), json!({"name": "fixed", "ratio": 2.0, "xlim": [0.0, 10.0]}));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;

use super::types::{check_finite, check_positive, FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

mod cartesian;
mod fixed;
mod flip;
mod polar;

pub use cartesian::Cartesian;
pub use fixed::Fixed;
pub use flip::Flip;
pub use polar::Polar;

/// Enum of all coordinate systems for pattern matching and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordKind {
    Cartesian,
    Flip,
    Fixed,
    Polar,
}

/// Core trait for coordinate system behavior
pub trait CoordTrait: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Returns which coordinate system this is (for pattern matching)
    fn coord_kind(&self) -> CoordKind;

    /// Canonical name, written as the `name` of the coord feature
    fn name(&self) -> &'static str;

    /// Property names this coordinate system accepts
    fn allowed_properties(&self) -> &'static [&'static str];

    /// Validate property names. NOT meant to be overridden.
    fn resolve_properties(
        &self,
        properties: &Map<String, Value>,
    ) -> std::result::Result<Map<String, Value>, String> {
        let allowed = self.allowed_properties();
        for key in properties.keys() {
            if !allowed.contains(&key.as_str()) {
                return Err(format!(
                    "Property '{}' is not valid for {} coordinates. Allowed: {}",
                    key,
                    self.name(),
                    allowed.join(", ")
                ));
            }
        }
        Ok(properties.clone())
    }
}

/// Wrapper struct for coordinate system trait objects
#[derive(Clone)]
pub struct Coord(Arc<dyn CoordTrait>);

impl Coord {
    pub fn cartesian() -> Self {
        Self(Arc::new(Cartesian))
    }

    pub fn flip() -> Self {
        Self(Arc::new(Flip))
    }

    pub fn fixed() -> Self {
        Self(Arc::new(Fixed))
    }

    pub fn polar() -> Self {
        Self(Arc::new(Polar))
    }

    pub fn from_kind(kind: CoordKind) -> Self {
        match kind {
            CoordKind::Cartesian => Self::cartesian(),
            CoordKind::Flip => Self::flip(),
            CoordKind::Fixed => Self::fixed(),
            CoordKind::Polar => Self::polar(),
        }
    }

    pub fn coord_kind(&self) -> CoordKind {
        self.0.coord_kind()
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn allowed_properties(&self) -> &'static [&'static str] {
        self.0.allowed_properties()
    }

    pub fn resolve_properties(
        &self,
        properties: &Map<String, Value>,
    ) -> std::result::Result<Map<String, Value>, String> {
        self.0.resolve_properties(properties)
    }
}

impl std::fmt::Debug for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coord({})", self.0)
    }
}

/// Which axis a polar coordinate system maps to the angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theta {
    X,
    Y,
}

/// Collects coordinate properties for one coordinate system
#[derive(Debug)]
pub struct CoordBuilder {
    coord: Coord,
    properties: Map<String, Value>,
    /// First invalid value seen, reported by `build()`
    error: Option<PlotSpecError>,
}

pub fn coord_cartesian() -> CoordBuilder {
    CoordBuilder::new(Coord::cartesian())
}

pub fn coord_flip() -> CoordBuilder {
    CoordBuilder::new(Coord::flip())
}

pub fn coord_fixed() -> CoordBuilder {
    CoordBuilder::new(Coord::fixed())
}

pub fn coord_polar() -> CoordBuilder {
    CoordBuilder::new(Coord::polar())
}

impl CoordBuilder {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            properties: Map::new(),
            error: None,
        }
    }

    /// Set any property; unknown properties fail on `build()`
    pub fn property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Data limits of the x axis; `None` leaves that end to the data
    pub fn xlim(self, low: Option<f64>, high: Option<f64>) -> Self {
        self.limits("xlim", low, high)
    }

    pub fn ylim(self, low: Option<f64>, high: Option<f64>) -> Self {
        self.limits("ylim", low, high)
    }

    /// Aspect ratio y/x
    pub fn ratio(mut self, ratio: f64) -> Self {
        if let Err(e) = check_positive("ratio", ratio) {
            self.error.get_or_insert(e);
        }
        self.property("ratio", ratio)
    }

    pub fn flip(self, flip: bool) -> Self {
        self.property("flip", flip)
    }

    pub fn theta(self, theta: Theta) -> Self {
        let name = match theta {
            Theta::X => "x",
            Theta::Y => "y",
        };
        self.property("theta", name)
    }

    /// Offset of the starting point from 12 o'clock, in radians
    pub fn start(mut self, start: f64) -> Self {
        if let Err(e) = check_finite("start", start) {
            self.error.get_or_insert(e);
        }
        self.property("start", start)
    }

    /// `true` for clockwise, `false` for anticlockwise
    pub fn clockwise(self, clockwise: bool) -> Self {
        self.property("direction", if clockwise { 1 } else { -1 })
    }

    fn limits(mut self, name: &str, low: Option<f64>, high: Option<f64>) -> Self {
        for v in [low, high].into_iter().flatten() {
            if let Err(e) = check_finite(name, v) {
                self.error.get_or_insert(e);
            }
        }
        if let (Some(l), Some(h)) = (low, high) {
            if l > h {
                self.error.get_or_insert(PlotSpecError::ValidationError(format!(
                    "'{}' lower limit {} exceeds upper limit {}",
                    name, l, h
                )));
            }
        }
        self.property(name, json!([low, high]))
    }

    pub fn build(self) -> Result<FeatureSpec> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let resolved = self
            .coord
            .resolve_properties(&self.properties)
            .map_err(PlotSpecError::ValidationError)?;

        let mut spec = FeatureSpec::new(FeatureKind::Coord, Some(self.coord.name()));
        for (key, value) in resolved {
            spec.set(&key, value);
        }
        Ok(spec)
    }
}
