//! Regular grid of figures (`gggrid`)

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{Figure, SubPlotsSpec};
use crate::plot::theme::Settings;
use crate::plot::types::{check_non_negative, FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

/// How axis limits are shared between the cells of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Share {
    /// Share limits between all subplots
    All,
    /// Every subplot keeps its own limits
    None,
    /// Share limits between subplots in the same row
    Row,
    /// Share limits between subplots in the same column
    Col,
    /// Any other value, handed to the renderer as given
    Other(String),
}

impl Share {
    pub fn name(&self) -> &str {
        match self {
            Share::All => "all",
            Share::None => "none",
            Share::Row => "row",
            Share::Col => "col",
            Share::Other(name) => name,
        }
    }
}

impl From<bool> for Share {
    fn from(share: bool) -> Self {
        if share {
            Share::All
        } else {
            Share::None
        }
    }
}

impl From<&str> for Share {
    fn from(s: &str) -> Self {
        match s {
            "all" => Share::All,
            "none" => Share::None,
            "row" => Share::Row,
            "col" => Share::Col,
            other => Share::Other(other.to_string()),
        }
    }
}

impl std::str::FromStr for Share {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Share::from(s))
    }
}

impl std::fmt::Display for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Share {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Optional layout settings of a grid; unset options use the renderer's defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOptions {
    pub sharex: Option<Share>,
    pub sharey: Option<Share>,
    /// Relative width of each column, left to right
    pub widths: Option<Vec<f64>>,
    /// Relative height of each row, top-down
    pub heights: Option<Vec<f64>>,
    /// Horizontal cell spacing in px (renderer default 4.0)
    pub hspace: Option<f64>,
    /// Vertical cell spacing in px (renderer default 4.0)
    pub vspace: Option<f64>,
    /// Stretch each plot to its cell (renderer default) or keep its aspect ratio
    pub fit: Option<bool>,
    /// Align the inner (geom) areas of plots
    pub align: Option<bool>,
}

impl GridOptions {
    pub fn sharex(mut self, share: impl Into<Share>) -> Self {
        self.sharex = Some(share.into());
        self
    }

    pub fn sharey(mut self, share: impl Into<Share>) -> Self {
        self.sharey = Some(share.into());
        self
    }

    pub fn widths(mut self, widths: &[f64]) -> Self {
        self.widths = Some(widths.to_vec());
        self
    }

    pub fn heights(mut self, heights: &[f64]) -> Self {
        self.heights = Some(heights.to_vec());
        self
    }

    pub fn hspace(mut self, hspace: f64) -> Self {
        self.hspace = Some(hspace);
        self
    }

    pub fn vspace(mut self, vspace: f64) -> Self {
        self.vspace = Some(vspace);
        self
    }

    pub fn fit(mut self, fit: bool) -> Self {
        self.fit = Some(fit);
        self
    }

    pub fn align(mut self, align: bool) -> Self {
        self.align = Some(align);
        self
    }

    fn validate(&self) -> Result<()> {
        for (param, values) in [("widths", &self.widths), ("heights", &self.heights)] {
            for v in values.iter().flatten() {
                check_non_negative(param, *v)?;
            }
        }
        for (param, value) in [("hspace", self.hspace), ("vspace", self.vspace)] {
            if let Some(v) = value {
                check_non_negative(param, v)?;
            }
        }
        Ok(())
    }

    fn layout(&self, ncol: usize, nrow: usize) -> FeatureSpec {
        FeatureSpec::new(FeatureKind::Layout, Some("grid"))
            .with("ncol", ncol)
            .with("nrow", nrow)
            .with_opt("sharex", self.sharex.as_ref().map(Share::name))
            .with_opt("sharey", self.sharey.as_ref().map(Share::name))
            .with_opt("widths", self.widths.clone())
            .with_opt("heights", self.heights.clone())
            .with_opt("hspace", self.hspace)
            .with_opt("vspace", self.vspace)
            .with_opt("fit", self.fit)
            .with_opt("align", self.align)
    }
}

/// Combine several figures on one figure, organized in a regular grid.
///
/// `None` entries are empty cells. Without `ncol` the figures are laid out in
/// one row; otherwise the list is padded with empty cells to fill the last row.
/// Uses the process-wide global theme, see [`Settings::gggrid`].
pub fn gggrid(
    plots: Vec<Option<Figure>>,
    ncol: Option<usize>,
    options: GridOptions,
) -> Result<SubPlotsSpec> {
    Settings::current().gggrid(plots, ncol, options)
}

impl Settings {
    /// [`gggrid`] with these settings' theme as the global theme
    pub fn gggrid(
        &self,
        plots: Vec<Option<Figure>>,
        ncol: Option<usize>,
        options: GridOptions,
    ) -> Result<SubPlotsSpec> {
        if plots.is_empty() {
            return Err(PlotSpecError::ValidationError(
                "Subplots list is empty".to_string(),
            ));
        }
        options.validate()?;

        let (plots, ncol, nrow) = match ncol {
            None => {
                let ncol = plots.len();
                (plots, ncol, 1)
            }
            Some(0) => {
                return Err(PlotSpecError::ValidationError(
                    "'ncol' must be at least 1".to_string(),
                ))
            }
            Some(ncol) => {
                let mut plots = plots;
                let nrow = plots.len().div_ceil(ncol);
                plots.resize(ncol * nrow, None);
                (plots, ncol, nrow)
            }
        };
        tracing::debug!(ncol, nrow, cells = plots.len(), "Composing grid");

        let global_theme = self.theme().map(FeatureSpec::as_dict);
        let figures = plots
            .into_iter()
            .map(|figure| figure.map(|f| strip_theme_if_global(f, global_theme.as_ref())))
            .collect();

        let spec = SubPlotsSpec::new(figures, options.layout(ncol, nrow))?;
        match self.theme() {
            Some(theme) => spec + theme.clone(),
            None => Ok(spec),
        }
    }
}

/// Drop a figure's theme when it is the global one, which the grid carries itself
fn strip_theme_if_global(mut figure: Figure, global_theme: Option<&Value>) -> Figure {
    if let Some(global) = global_theme {
        if figure.theme() == Some(global) {
            tracing::debug!(kind = %figure.kind(), "Stripping global theme from figure");
            figure.remove_theme();
        }
    }
    figure
}
