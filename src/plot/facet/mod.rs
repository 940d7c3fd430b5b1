//! Faceting: split a plot into small multiples by data columns

mod types;

pub use types::{Facet, FacetScales};

use super::types::FeatureSpec;
use crate::Result;

/// Builder for `facet_wrap`
#[derive(Debug, Clone)]
pub struct FacetWrap {
    variables: Vec<String>,
    ncol: Option<usize>,
    nrow: Option<usize>,
    scales: Option<FacetScales>,
}

/// Wrap panels for every combination of `facets` into a 2-d grid
pub fn facet_wrap<S: AsRef<str>>(facets: &[S]) -> FacetWrap {
    FacetWrap {
        variables: facets.iter().map(|f| f.as_ref().to_string()).collect(),
        ncol: None,
        nrow: None,
        scales: None,
    }
}

impl FacetWrap {
    pub fn ncol(mut self, ncol: usize) -> Self {
        self.ncol = Some(ncol);
        self
    }

    pub fn nrow(mut self, nrow: usize) -> Self {
        self.nrow = Some(nrow);
        self
    }

    pub fn scales(mut self, scales: FacetScales) -> Self {
        self.scales = Some(scales);
        self
    }

    pub fn build(self) -> Result<FeatureSpec> {
        Facet::Wrap {
            variables: self.variables,
            ncol: self.ncol,
            nrow: self.nrow,
            scales: self.scales,
        }
        .to_spec()
    }
}

/// Builder for `facet_grid`
#[derive(Debug, Clone, Default)]
pub struct FacetGrid {
    x: Option<String>,
    y: Option<String>,
    scales: Option<FacetScales>,
}

/// Lay out panels by `x` across columns and `y` down rows; at least one is required
pub fn facet_grid(x: Option<&str>, y: Option<&str>) -> FacetGrid {
    FacetGrid {
        x: x.map(str::to_string),
        y: y.map(str::to_string),
        scales: None,
    }
}

impl FacetGrid {
    pub fn scales(mut self, scales: FacetScales) -> Self {
        self.scales = Some(scales);
        self
    }

    pub fn build(self) -> Result<FeatureSpec> {
        Facet::Grid {
            x: self.x,
            y: self.y,
            scales: self.scales,
        }
        .to_spec()
    }
}
