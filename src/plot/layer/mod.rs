//! Layers
//!
//! A layer pairs a geom with its mapping, stat, position adjustment and
//! constant aesthetics. [`Layer::build`] validates the combination against
//! what the geom supports and produces a `layer` feature.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::aesthetic::{normalize_aesthetic, Aes};
use super::types::{check_color, check_data, FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

pub mod geom;
pub mod position;

use geom::{Geom, GeomType};
use position::LayerPosition;

/// Statistical transforms the renderer can apply to a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Identity,
    Count,
    Count2d,
    Bin,
    Bin2d,
    BinHex,
    DotPlot,
    Smooth,
    Contour,
    Contourf,
    Boxplot,
    DensityRidges,
    YDensity,
    Sina,
    YDotPlot,
    Density,
    Density2d,
    Density2df,
    PointDensity,
    Qq,
    Qq2,
    #[serde(rename = "qq_line")]
    QqLine,
    #[serde(rename = "qq2_line")]
    Qq2Line,
    Ecdf,
    Sum,
    Summary,
    SummaryBin,
}

impl StatKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Identity => "identity",
            StatKind::Count => "count",
            StatKind::Count2d => "count2d",
            StatKind::Bin => "bin",
            StatKind::Bin2d => "bin2d",
            StatKind::BinHex => "binhex",
            StatKind::DotPlot => "dotplot",
            StatKind::Smooth => "smooth",
            StatKind::Contour => "contour",
            StatKind::Contourf => "contourf",
            StatKind::Boxplot => "boxplot",
            StatKind::DensityRidges => "densityridges",
            StatKind::YDensity => "ydensity",
            StatKind::Sina => "sina",
            StatKind::YDotPlot => "ydotplot",
            StatKind::Density => "density",
            StatKind::Density2d => "density2d",
            StatKind::Density2df => "density2df",
            StatKind::PointDensity => "pointdensity",
            StatKind::Qq => "qq",
            StatKind::Qq2 => "qq2",
            StatKind::QqLine => "qq_line",
            StatKind::Qq2Line => "qq2_line",
            StatKind::Ecdf => "ecdf",
            StatKind::Sum => "sum",
            StatKind::Summary => "summary",
            StatKind::SummaryBin => "summarybin",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for StatKind {
    type Err = PlotSpecError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_value(Value::String(s.to_string()))
            .map_err(|_| PlotSpecError::ValidationError(format!("Unknown stat name: '{}'", s)))
    }
}

/// Layer builder returned by the `geom_*` functions
#[derive(Debug, Clone)]
pub struct Layer {
    geom: Geom,
    stat: Option<StatKind>,
    mapping: Option<Aes>,
    data: Option<Value>,
    position: Option<LayerPosition>,
    show_legend: Option<bool>,
    /// Constant aesthetics, e.g. `color = "red"`
    settings: Vec<(String, Value)>,
    /// Geom-specific parameters, e.g. `bins = 10`
    params: Vec<(String, Value)>,
}

impl Layer {
    pub fn new(geom: Geom) -> Self {
        Self {
            geom,
            stat: None,
            mapping: None,
            data: None,
            position: None,
            show_legend: None,
            settings: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn geom(&self) -> &Geom {
        &self.geom
    }

    pub fn stat(mut self, stat: StatKind) -> Self {
        self.stat = Some(stat);
        self
    }

    pub fn mapping(mut self, mapping: Aes) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Layer-specific data, replacing the plot data for this layer
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Position adjustment: a tag (`PositionKind::Dodge`) or a built spec
    pub fn position(mut self, position: impl Into<LayerPosition>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }

    /// Set an aesthetic to a constant value
    pub fn set(mut self, aesthetic: &str, value: impl Into<Value>) -> Self {
        let name = normalize_aesthetic(aesthetic).to_string();
        self.settings.retain(|(n, _)| *n != name);
        self.settings.push((name, value.into()));
        self
    }

    /// Set a geom-specific parameter
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.retain(|(n, _)| n != name);
        self.params.push((name.to_string(), value.into()));
        self
    }

    /// Validate and assemble the `layer` feature
    pub fn build(self) -> Result<FeatureSpec> {
        let aesthetics = self.geom.aesthetics();
        let geom_name = self.geom.name();

        if let Some(mapping) = &self.mapping {
            for name in mapping.aesthetics() {
                if !aesthetics.is_supported(name) {
                    return Err(PlotSpecError::ValidationError(format!(
                        "Aesthetic '{}' is not supported by geom '{}'",
                        name, geom_name
                    )));
                }
            }
        }

        for (name, value) in &self.settings {
            if !aesthetics.is_supported(name) {
                return Err(PlotSpecError::ValidationError(format!(
                    "Aesthetic '{}' is not supported by geom '{}'",
                    name, geom_name
                )));
            }
            validate_constant(name, value)?;
        }

        for (name, _) in &self.params {
            if !self.geom.params().contains(&name.as_str()) {
                return Err(PlotSpecError::ValidationError(format!(
                    "Parameter '{}' is not valid for geom '{}'",
                    name, geom_name
                )));
            }
        }

        if let Some(position) = &self.position {
            position.validate()?;
        }
        if let Some(data) = &self.data {
            check_data(data)?;
        }

        let mapping = self.mapping.map(|m| m.as_dict()).unwrap_or_else(|| json!({}));
        let mut spec = FeatureSpec::new(FeatureKind::Layer, None)
            .with("geom", geom_name)
            .with_opt("stat", self.stat.map(|s| s.name()))
            .with("mapping", mapping)
            .with("data_meta", Value::Object(Map::new()))
            .with_opt("data", self.data)
            .with_opt("position", self.position.map(|p| p.to_value()))
            .with_opt("show_legend", self.show_legend);

        for (name, value) in self.settings {
            spec.set(&name, value);
        }
        for (name, value) in self.params {
            spec.set(&name, value);
        }
        Ok(spec)
    }
}

fn validate_constant(name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Null => Err(PlotSpecError::ValidationError(format!(
            "Constant aesthetic '{}' must not be null",
            name
        ))),
        Value::String(color) if name == "color" || name == "fill" => check_color(name, color),
        _ => Ok(()),
    }
}

/// Required aesthetics of a built layer that neither the layer nor the plot
/// provides. Layers with a geom this crate does not know are not checked.
pub fn missing_aesthetics(layer: &FeatureSpec, plot_mapping: Option<&Value>) -> Vec<&'static str> {
    let geom_type = match layer.get("geom").and_then(Value::as_str).map(str::parse::<GeomType>) {
        Some(Ok(geom_type)) => geom_type,
        _ => return Vec::new(),
    };

    let in_mapping = |mapping: Option<&Value>, name: &str| {
        mapping
            .and_then(Value::as_object)
            .is_some_and(|m| m.contains_key(name))
    };

    let present = |name: &str| {
        layer.contains(name)
            || in_mapping(layer.get("mapping"), name)
            || in_mapping(plot_mapping, name)
    };

    let geom = Geom::from_type(geom_type);
    let aesthetics = geom.aesthetics();
    let mut missing = aesthetics.missing(&present);

    // With the identity stat, y must come from the data on geoms whose default stat computes it
    let stat = match layer.get("stat").and_then(Value::as_str) {
        Some(name) => name.parse::<StatKind>().ok(),
        None => Some(geom.default_stat()),
    };
    if stat == Some(StatKind::Identity)
        && geom.default_stat() != StatKind::Identity
        && !aesthetics.is_required("y")
        && !present("y")
    {
        missing.push("y");
    }
    missing
}
