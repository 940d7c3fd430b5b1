//! JSON writer
//!
//! Serializes figures into the JSON mapping consumed by the rendering engine.
//! Every plot in the figure, including plots nested in subplots, is checked
//! for missing required aesthetics before anything is written.

use serde_json::Value;

use super::Writer;
use crate::plot::Figure;
use crate::{PlotSpecError, Result};

/// JSON text writer
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Compact output
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented, human-readable output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn validate(&self, figure: &Figure) -> Result<()> {
        match figure {
            Figure::Plot(plot) => plot.validate(),
            Figure::SubPlots(subplots) => subplots
                .figures()
                .iter()
                .flatten()
                .try_for_each(|figure| self.validate(figure)),
        }
    }

    fn serialize(&self, value: &Value) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        text.map_err(|e| PlotSpecError::WriterError(format!("Failed to serialize figure: {}", e)))
    }
}

impl Writer for JsonWriter {
    type Output = String;

    fn write(&self, figure: &Figure) -> Result<String> {
        self.validate(figure)?;
        let dict = figure.as_dict();
        tracing::debug!(kind = %figure.kind(), pretty = self.pretty, "Writing figure");
        self.serialize(&dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::aesthetic::aes;
    use crate::plot::layer::geom::geom_point;
    use crate::plot::{GridOptions, PlotSpec, Settings};
    use serde_json::json;

    fn point_plot() -> PlotSpec {
        PlotSpec::new()
            + geom_point()
                .mapping(aes().x("a").y("b"))
                .build()
                .unwrap()
    }

    #[test]
    fn test_compact_output() {
        let text = JsonWriter::new().write(&point_plot().into()).unwrap();
        assert!(!text.contains('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["kind"], json!("plot"));
        assert_eq!(parsed["layers"][0]["geom"], json!("point"));
    }

    #[test]
    fn test_pretty_output() {
        let text = JsonWriter::new()
            .pretty(true)
            .write(&point_plot().into())
            .unwrap();
        assert!(text.contains("\n  "));
    }

    #[test]
    fn test_nested_plots_are_validated() {
        let incomplete = PlotSpec::new() + geom_point().mapping(aes().x("a")).build().unwrap();
        let grid = Settings::new()
            .gggrid(
                vec![Some(point_plot().into()), Some(incomplete.into())],
                None,
                GridOptions::default(),
            )
            .unwrap();

        let err = JsonWriter::new().write(&grid.into()).unwrap_err();
        assert!(matches!(err, PlotSpecError::ValidationError(_)));
    }
}
