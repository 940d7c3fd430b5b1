//! Facet types
//!
//! This module defines faceting configuration for small multiples.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plot::types::{FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

/// Faceting specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Facet {
    /// One panel per combination of `variables`, wrapped into rows
    Wrap {
        variables: Vec<String>,
        ncol: Option<usize>,
        nrow: Option<usize>,
        scales: Option<FacetScales>,
    },
    /// Panels laid out by `x` across columns and `y` down rows
    Grid {
        x: Option<String>,
        y: Option<String>,
        scales: Option<FacetScales>,
    },
}

/// Scale sharing options for facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetScales {
    Fixed,
    Free,
    FreeX,
    FreeY,
}

impl FacetScales {
    pub fn name(&self) -> &'static str {
        match self {
            FacetScales::Fixed => "fixed",
            FacetScales::Free => "free",
            FacetScales::FreeX => "free_x",
            FacetScales::FreeY => "free_y",
        }
    }
}

impl std::str::FromStr for FacetScales {
    type Err = PlotSpecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fixed" => Ok(FacetScales::Fixed),
            "free" => Ok(FacetScales::Free),
            "free_x" => Ok(FacetScales::FreeX),
            "free_y" => Ok(FacetScales::FreeY),
            other => Err(PlotSpecError::ValidationError(format!(
                "Unknown facet scales '{}'. Expected one of: fixed, free, free_x, free_y",
                other
            ))),
        }
    }
}

impl Facet {
    /// Get all variables used for faceting
    ///
    /// For Wrap facets, returns the variables list.
    /// For Grid facets, returns the x variable followed by the y variable.
    pub fn get_variables(&self) -> Vec<String> {
        match self {
            Facet::Wrap { variables, .. } => variables.clone(),
            Facet::Grid { x, y, .. } => x.iter().chain(y.iter()).cloned().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Facet::Wrap { .. } => "wrap",
            Facet::Grid { .. } => "grid",
        }
    }

    /// Validate and convert into a `facet` feature
    pub fn to_spec(&self) -> Result<FeatureSpec> {
        if self.get_variables().is_empty() {
            return Err(PlotSpecError::ValidationError(format!(
                "facet_{} needs at least one variable",
                self.name()
            )));
        }

        let spec = FeatureSpec::new(FeatureKind::Facet, Some(self.name()));
        let spec = match self {
            Facet::Wrap {
                variables,
                ncol,
                nrow,
                scales,
            } => {
                for (param, count) in [("ncol", ncol), ("nrow", nrow)] {
                    if *count == Some(0) {
                        return Err(PlotSpecError::ValidationError(format!(
                            "'{}' must be at least 1",
                            param
                        )));
                    }
                }
                let facets = match variables.as_slice() {
                    [single] => Value::from(single.as_str()),
                    many => Value::from(many.to_vec()),
                };
                spec.with("facets", facets)
                    .with_opt("ncol", *ncol)
                    .with_opt("nrow", *nrow)
                    .with_opt("scales", scales.map(|s| s.name()))
            }
            Facet::Grid { x, y, scales } => spec
                .with_opt("x", x.clone())
                .with_opt("y", y.clone())
                .with_opt("scales", scales.map(|s| s.name())),
        };
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_variables() {
        let grid = Facet::Grid {
            x: Some("cyl".to_string()),
            y: Some("drv".to_string()),
            scales: None,
        };
        assert_eq!(grid.get_variables(), vec!["cyl", "drv"]);
    }

    #[test]
    fn test_scales_names_match_serde() {
        for scales in [
            FacetScales::Fixed,
            FacetScales::Free,
            FacetScales::FreeX,
            FacetScales::FreeY,
        ] {
            assert_eq!(serde_json::to_value(scales).unwrap(), json!(scales.name()));
            assert_eq!(scales.name().parse::<FacetScales>().unwrap(), scales);
        }
        assert!("loose".parse::<FacetScales>().is_err());
    }

    #[test]
    fn test_single_wrap_variable_written_as_string() {
        let wrap = Facet::Wrap {
            variables: vec!["class".to_string()],
            ncol: None,
            nrow: None,
            scales: None,
        };
        assert_eq!(
            wrap.to_spec().unwrap().as_dict(),
            json!({"name": "wrap", "facets": "class"})
        );
    }

    #[test]
    fn test_empty_grid_rejected() {
        let grid = Facet::Grid {
            x: None,
            y: None,
            scales: Some(FacetScales::Free),
        };
        assert!(matches!(
            grid.to_spec(),
            Err(PlotSpecError::ValidationError(_))
        ));
    }
}
