//! Themes
//!
//! A theme feature is either a named preset (`theme_bw()`) or a set of
//! free-form options built with [`theme()`]. When added to a plot a preset
//! replaces the current theme, while options merge into it.
//!
//! # Example
//!
//! ```rust,ignore
//! let t = theme()
//!     .legend_position(LegendPosition::Bottom)
//!     .axis_title(element_blank())
//!     .build()?;
//! ```

mod element;
mod global;

pub use element::{
    element_blank, element_line, element_rect, element_text, ElementBlank, ElementLine,
    ElementRect, ElementText, FontFace, ThemeElement,
};
pub use global::{clear_global_theme, global_theme, set_global_theme, Settings};

use serde_json::{json, Map, Value};

use super::types::{check_finite, merge_dicts_recursively, FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

/// Theme of a figure after adding `incoming` to its `current` theme.
///
/// A named preset replaces whatever was there; an options theme merges into it.
pub(crate) fn combine_themes(current: Option<&Value>, incoming: &FeatureSpec) -> Value {
    match current {
        Some(current) if incoming.name().is_none() => {
            merge_dicts_recursively(current, &incoming.as_dict())
        }
        _ => incoming.as_dict(),
    }
}

fn preset(name: &str) -> FeatureSpec {
    FeatureSpec::new(FeatureKind::Theme, Some(name))
}

/// Grey background and white gridlines
pub fn theme_grey() -> FeatureSpec {
    preset("grey")
}

/// Light grey lines of various widths on white background
pub fn theme_light() -> FeatureSpec {
    preset("light")
}

/// Axis lines, no gridlines
pub fn theme_classic() -> FeatureSpec {
    preset("classic")
}

/// No background annotations
pub fn theme_minimal() -> FeatureSpec {
    preset("minimal")
}

/// Dark lines of various widths on white background
pub fn theme_bw() -> FeatureSpec {
    preset("bw")
}

/// Completely empty theme
pub fn theme_void() -> FeatureSpec {
    preset("void")
}

/// Basic settings applied only
pub fn theme_none() -> FeatureSpec {
    preset("none")
}

/// Where the legend goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendPosition {
    Left,
    Right,
    Top,
    Bottom,
    /// No legend
    None,
    /// Inside the plotting area, in relative coordinates
    Inside(f64, f64),
}

impl LegendPosition {
    fn to_value(self) -> Result<Value> {
        Ok(match self {
            LegendPosition::Left => json!("left"),
            LegendPosition::Right => json!("right"),
            LegendPosition::Top => json!("top"),
            LegendPosition::Bottom => json!("bottom"),
            LegendPosition::None => json!("none"),
            LegendPosition::Inside(x, y) => {
                json!([check_finite("legend_position", x)?, check_finite("legend_position", y)?])
            }
        })
    }
}

/// Builder for a theme made of individual options
#[derive(Debug, Default)]
pub struct Theme {
    options: Map<String, Value>,
    error: Option<PlotSpecError>,
}

/// Start an empty options theme
pub fn theme() -> Theme {
    Theme::default()
}

impl Theme {
    /// Set any option to an element or a plain value
    pub fn option(mut self, key: &str, element: impl ThemeElement) -> Self {
        match element.to_value() {
            Ok(value) if value.is_null() => {
                self.options.remove(key);
            }
            Ok(value) => {
                self.options.insert(key.to_string(), value);
            }
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    pub fn legend_position(mut self, position: LegendPosition) -> Self {
        match position.to_value() {
            Ok(value) => self.option("legend_position", value),
            Err(e) => {
                self.error.get_or_insert(e);
                self
            }
        }
    }

    /// All lines
    pub fn line(self, element: impl ThemeElement) -> Self {
        self.option("line", element)
    }

    /// All rectangles
    pub fn rect(self, element: impl ThemeElement) -> Self {
        self.option("rect", element)
    }

    /// All text
    pub fn text(self, element: impl ThemeElement) -> Self {
        self.option("text", element)
    }

    /// Every part of both axes
    pub fn axis(self, element: impl ThemeElement) -> Self {
        self.option("axis", element)
    }

    pub fn axis_title(self, element: impl ThemeElement) -> Self {
        self.option("axis_title", element)
    }

    pub fn axis_text(self, element: impl ThemeElement) -> Self {
        self.option("axis_text", element)
    }

    pub fn axis_line(self, element: impl ThemeElement) -> Self {
        self.option("axis_line", element)
    }

    pub fn axis_ticks(self, element: impl ThemeElement) -> Self {
        self.option("axis_ticks", element)
    }

    pub fn panel_background(self, element: impl ThemeElement) -> Self {
        self.option("panel_background", element)
    }

    pub fn panel_grid(self, element: impl ThemeElement) -> Self {
        self.option("panel_grid", element)
    }

    pub fn plot_background(self, element: impl ThemeElement) -> Self {
        self.option("plot_background", element)
    }

    pub fn plot_title(self, element: impl ThemeElement) -> Self {
        self.option("plot_title", element)
    }

    pub fn legend_title(self, element: impl ThemeElement) -> Self {
        self.option("legend_title", element)
    }

    pub fn legend_text(self, element: impl ThemeElement) -> Self {
        self.option("legend_text", element)
    }

    pub fn strip_text(self, element: impl ThemeElement) -> Self {
        self.option("strip_text", element)
    }

    pub fn build(self) -> Result<FeatureSpec> {
        if let Some(error) = self.error {
            return Err(error);
        }
        FeatureSpec::from_value(FeatureKind::Theme, Value::Object(self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_carry_name() {
        for (spec, name) in [
            (theme_grey(), "grey"),
            (theme_light(), "light"),
            (theme_classic(), "classic"),
            (theme_minimal(), "minimal"),
            (theme_bw(), "bw"),
            (theme_void(), "void"),
            (theme_none(), "none"),
        ] {
            assert_eq!(spec.kind(), FeatureKind::Theme);
            assert_eq!(spec.as_dict(), json!({ "name": name }));
        }
    }

    #[test]
    fn test_options_theme_has_no_name() {
        let spec = theme()
            .legend_position(LegendPosition::Bottom)
            .axis_title(element_blank())
            .panel_grid(element_line().color("light_gray").size(0.5))
            .build();
        // "light_gray" is not a CSS colour
        assert!(spec.is_err());

        let spec = theme()
            .legend_position(LegendPosition::Bottom)
            .axis_title(element_blank())
            .panel_grid(element_line().color("lightgray").size(0.5))
            .build()
            .unwrap();
        assert_eq!(spec.name(), None);
        assert_eq!(
            spec.as_dict(),
            json!({
                "legend_position": "bottom",
                "axis_title": {"blank": true},
                "panel_grid": {"color": "lightgray", "size": 0.5}
            })
        );
    }

    #[test]
    fn test_inside_legend_position() {
        let spec = theme()
            .legend_position(LegendPosition::Inside(0.9, 0.1))
            .build()
            .unwrap();
        assert_eq!(spec.get("legend_position"), Some(&json!([0.9, 0.1])));

        assert!(theme()
            .legend_position(LegendPosition::Inside(f64::NAN, 0.0))
            .build()
            .is_err());
    }

    #[test]
    fn test_preset_replaces_current_theme() {
        let current = json!({"name": "grey", "axis_title": {"blank": true}});
        assert_eq!(combine_themes(Some(&current), &theme_bw()), json!({"name": "bw"}));
    }

    #[test]
    fn test_options_merge_into_current_theme() {
        let current = json!({"name": "grey", "axis_text": {"size": 10.0}});
        let incoming = theme()
            .axis_text(element_text().angle(45.0))
            .build()
            .unwrap();
        assert_eq!(
            combine_themes(Some(&current), &incoming),
            json!({"name": "grey", "axis_text": {"size": 10.0, "angle": 45.0}})
        );
        assert_eq!(combine_themes(None, &incoming), incoming.as_dict());
    }

    #[test]
    fn test_plain_value_option() {
        let spec = theme().option("exponent_format", json!("pow")).build().unwrap();
        assert_eq!(spec.as_dict(), json!({"exponent_format": "pow"}));
    }
}
