//! Subplot figures
//!
//! A [`SubPlotsSpec`] arranges figures (plots or nested subplots) according to
//! a layout feature. Only figure-level features (`theme`, `ggsize`,
//! `ggtitle`) can be added to it.

mod grid;

pub use grid::{gggrid, GridOptions, Share};

use std::ops::Add;

use serde_json::{json, Map, Value};

use super::main::PlotSpec;
use super::theme::combine_themes;
use super::types::{FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

/// A cell of a subplots grid
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Plot(PlotSpec),
    SubPlots(SubPlotsSpec),
}

impl Figure {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Figure::Plot(_) => FeatureKind::Plot,
            Figure::SubPlots(_) => FeatureKind::SubPlots,
        }
    }

    pub fn theme(&self) -> Option<&Value> {
        match self {
            Figure::Plot(plot) => plot.theme(),
            Figure::SubPlots(subplots) => subplots.get("theme"),
        }
    }

    pub(crate) fn remove_theme(&mut self) -> Option<Value> {
        match self {
            Figure::Plot(plot) => plot.remove_theme(),
            Figure::SubPlots(subplots) => subplots.props.remove("theme"),
        }
    }

    pub fn as_dict(&self) -> Value {
        match self {
            Figure::Plot(plot) => plot.as_dict(),
            Figure::SubPlots(subplots) => subplots.as_dict(),
        }
    }

    /// Parse a serialized plot or subplots specification, dispatching on `kind`
    pub fn from_value(value: Value) -> Result<Self> {
        let kind = value.get("kind").and_then(Value::as_str);
        match kind {
            Some("plot") => Ok(Figure::Plot(PlotSpec::from_value(value)?)),
            Some("subplots") => Ok(Figure::SubPlots(SubPlotsSpec::from_value(value)?)),
            Some(other) => Err(PlotSpecError::ValidationError(format!(
                "Unknown figure kind '{}'. Expected 'plot' or 'subplots'",
                other
            ))),
            None => Err(PlotSpecError::ValidationError(format!(
                "Figure specification has no 'kind': {}",
                value
            ))),
        }
    }
}

impl From<PlotSpec> for Figure {
    fn from(plot: PlotSpec) -> Self {
        Figure::Plot(plot)
    }
}

impl From<SubPlotsSpec> for Figure {
    fn from(subplots: SubPlotsSpec) -> Self {
        Figure::SubPlots(subplots)
    }
}

/// Figures arranged by a layout
#[derive(Debug, Clone, PartialEq)]
pub struct SubPlotsSpec {
    figures: Vec<Option<Figure>>,
    layout: FeatureSpec,
    props: FeatureSpec,
}

impl SubPlotsSpec {
    /// `None` figures are empty cells
    pub fn new(figures: Vec<Option<Figure>>, layout: FeatureSpec) -> Result<Self> {
        if layout.kind() != FeatureKind::Layout {
            return Err(PlotSpecError::ValidationError(format!(
                "Subplots layout must be a layout feature, got '{}'",
                layout.kind()
            )));
        }
        Ok(Self {
            figures,
            layout,
            props: FeatureSpec::new(FeatureKind::SubPlots, None),
        })
    }

    pub fn figures(&self) -> &[Option<Figure>] {
        &self.figures
    }

    pub fn layout(&self) -> &FeatureSpec {
        &self.layout
    }

    /// Figure-level property (`"theme"`, `"ggsize"`, `"ggtitle"`)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn as_dict(&self) -> Value {
        let mut dict = Map::new();
        dict.insert("kind".to_string(), json!(FeatureKind::SubPlots.key()));
        dict.insert("layout".to_string(), self.layout.as_dict());
        dict.insert(
            "figures".to_string(),
            Value::Array(
                self.figures
                    .iter()
                    .map(|figure| figure.as_ref().map_or(Value::Null, Figure::as_dict))
                    .collect(),
            ),
        );
        for (key, value) in self.props.props() {
            dict.insert(key.clone(), value.clone());
        }
        Value::Object(dict)
    }

    /// Parse the output of [`SubPlotsSpec::as_dict`]
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(PlotSpecError::ParseError(format!(
                    "Subplots specification must be an object, got {}",
                    other
                )))
            }
        };

        match map.remove("kind") {
            Some(Value::String(kind)) if kind == FeatureKind::SubPlots.key() => {}
            other => {
                return Err(PlotSpecError::ParseError(format!(
                    "Expected a subplots specification, got kind {}",
                    other.unwrap_or(Value::Null)
                )))
            }
        }

        let layout = match map.remove("layout") {
            Some(layout) => FeatureSpec::from_value(FeatureKind::Layout, layout)?,
            None => {
                return Err(PlotSpecError::ParseError(
                    "Subplots specification has no 'layout'".to_string(),
                ))
            }
        };

        let figures = match map.remove("figures") {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Null => Ok(None),
                    item => Figure::from_value(item).map(Some),
                })
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(PlotSpecError::ParseError(format!(
                    "'figures' must be an array, got {}",
                    other.unwrap_or(Value::Null)
                )))
            }
        };

        let mut subplots = Self::new(figures, layout)?;
        subplots.props = FeatureSpec::from_value(FeatureKind::SubPlots, Value::Object(map))?;
        Ok(subplots)
    }
}

impl Add<FeatureSpec> for SubPlotsSpec {
    type Output = Result<SubPlotsSpec>;

    fn add(mut self, feature: FeatureSpec) -> Result<SubPlotsSpec> {
        match feature.kind() {
            FeatureKind::Theme => {
                let theme = combine_themes(self.props.get("theme"), &feature);
                self.props.set("theme", theme);
            }
            FeatureKind::GgSize | FeatureKind::GgTitle => {
                self.props.set(feature.kind().key(), feature.as_dict());
            }
            other => {
                return Err(PlotSpecError::ValidationError(format!(
                    "Unsupported operand type(s) for +: 'subplots' and '{}'",
                    other
                )))
            }
        }
        Ok(self)
    }
}
