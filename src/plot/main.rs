//! Plot specification and the `+` composition operator
//!
//! A [`PlotSpec`] collects the features added to it: layers and scales are
//! kept in order, a theme is combined with the current one, and every other
//! feature is stored under its kind's key, replacing an earlier value.
//!
//! # Example
//!
//! ```rust,ignore
//! let p = ggplot().data(json!({"x": [1, 2], "y": [3, 4]}))?.mapping(aes().x("x").y("y"))
//!     + geom_point().build()?
//!     + scale_x_log10().build()?
//!     + theme_bw();
//! ```

use std::ops::Add;

use serde_json::{json, Map, Value};

use super::aesthetic::Aes;
use super::layer::missing_aesthetics;
use super::theme::{combine_themes, Settings};
use super::types::{check_data, FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

/// A single plot: properties, layers and scales
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    props: FeatureSpec,
    layers: Vec<FeatureSpec>,
    scales: Vec<FeatureSpec>,
}

impl Default for PlotSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a plot, applying the process-wide global theme if one is set
pub fn ggplot() -> PlotSpec {
    Settings::current().ggplot()
}

impl Settings {
    /// Start a plot with these settings' theme
    pub fn ggplot(&self) -> PlotSpec {
        match self.theme() {
            Some(theme) => PlotSpec::new() + theme.clone(),
            None => PlotSpec::new(),
        }
    }
}

impl PlotSpec {
    /// An empty plot, ignoring any global theme
    pub fn new() -> Self {
        Self {
            props: FeatureSpec::new(FeatureKind::Plot, None),
            layers: Vec::new(),
            scales: Vec::new(),
        }
    }

    /// Attach a column dataset: an object of equally long arrays
    pub fn data(mut self, data: Value) -> Result<Self> {
        check_data(&data)?;
        self.props.set("data", data);
        Ok(self)
    }

    /// Default aesthetic mapping for all layers
    pub fn mapping(self, mapping: Aes) -> Self {
        self + FeatureSpec::from(mapping)
    }

    pub fn layers(&self) -> &[FeatureSpec] {
        &self.layers
    }

    pub fn scales(&self) -> &[FeatureSpec] {
        &self.scales
    }

    /// Property stored under `key` (`"theme"`, `"ggsize"`, `"coord"`, ...)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn theme(&self) -> Option<&Value> {
        self.props.get("theme")
    }

    pub(crate) fn remove_theme(&mut self) -> Option<Value> {
        self.props.remove("theme")
    }

    /// Check that every layer gets its required aesthetics from somewhere
    pub fn validate(&self) -> Result<()> {
        let plot_mapping = self.props.get("mapping");
        for (i, layer) in self.layers.iter().enumerate() {
            let missing = missing_aesthetics(layer, plot_mapping);
            if !missing.is_empty() {
                let geom = layer.get("geom").and_then(Value::as_str).unwrap_or("?");
                return Err(PlotSpecError::ValidationError(format!(
                    "Layer {} ({}) is missing required aesthetics: {}",
                    i + 1,
                    geom,
                    missing.join(", ")
                )));
            }
        }
        Ok(())
    }

    pub fn as_dict(&self) -> Value {
        let mut dict = Map::new();
        dict.insert("kind".to_string(), json!(FeatureKind::Plot.key()));
        for (key, value) in self.props.props() {
            dict.insert(key.clone(), value.clone());
        }
        for key in ["mapping", "data_meta"] {
            dict.entry(key).or_insert_with(|| json!({}));
        }
        dict.insert(
            "layers".to_string(),
            Value::Array(self.layers.iter().map(FeatureSpec::as_dict).collect()),
        );
        dict.insert(
            "scales".to_string(),
            Value::Array(self.scales.iter().map(FeatureSpec::as_dict).collect()),
        );
        Value::Object(dict)
    }

    /// Parse the output of [`PlotSpec::as_dict`]
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(PlotSpecError::ParseError(format!(
                    "Plot specification must be an object, got {}",
                    other
                )))
            }
        };

        match map.remove("kind") {
            None => {}
            Some(Value::String(kind)) if kind == FeatureKind::Plot.key() => {}
            Some(other) => {
                return Err(PlotSpecError::ParseError(format!(
                    "Expected a plot specification, got kind {}",
                    other
                )))
            }
        }

        let layers = take_features(&mut map, "layers", FeatureKind::Layer)?;
        let scales = take_features(&mut map, "scales", FeatureKind::Scale)?;
        Ok(Self {
            props: FeatureSpec::from_value(FeatureKind::Plot, Value::Object(map))?,
            layers,
            scales,
        })
    }
}

fn take_features(
    map: &mut Map<String, Value>,
    key: &str,
    kind: FeatureKind,
) -> Result<Vec<FeatureSpec>> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| FeatureSpec::from_value(kind, item))
            .collect(),
        Some(other) => Err(PlotSpecError::ParseError(format!(
            "'{}' must be an array, got {}",
            key, other
        ))),
    }
}

impl Add<FeatureSpec> for PlotSpec {
    type Output = PlotSpec;

    fn add(mut self, feature: FeatureSpec) -> PlotSpec {
        match feature.kind() {
            FeatureKind::Layer => self.layers.push(feature),
            FeatureKind::Scale => self.scales.push(feature),
            FeatureKind::Theme => {
                let theme = combine_themes(self.props.get("theme"), &feature);
                self.props.set("theme", theme);
            }
            kind => self.props.set(kind.key(), feature.as_dict()),
        }
        self
    }
}

impl Add<Aes> for PlotSpec {
    type Output = PlotSpec;

    fn add(self, mapping: Aes) -> PlotSpec {
        self + FeatureSpec::from(mapping)
    }
}
