//! Core value types shared by every builder
//!
//! A [`FeatureSpec`] is one kind-tagged directive (a layer, a position
//! adjustment, a theme, ...). Its options live in a JSON object; unset options
//! are never stored, so the renderer applies its own defaults for them.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{PlotSpecError, Result};

/// Kind tag of a feature specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// A whole plot
    Plot,
    /// One geom layer
    Layer,
    /// Aesthetic mapping
    Mapping,
    /// Position adjustment
    Pos,
    /// Scale for one aesthetic
    Scale,
    /// Coordinate system
    Coord,
    /// Faceting
    Facet,
    /// Theme options or preset
    Theme,
    /// Figure size in px
    GgSize,
    /// Figure title
    GgTitle,
    /// Subplots layout
    Layout,
    /// Subplots figure
    SubPlots,
}

impl FeatureKind {
    /// Key under which features of this kind are stored in a figure
    pub fn key(&self) -> &'static str {
        match self {
            FeatureKind::Plot => "plot",
            FeatureKind::Layer => "layer",
            FeatureKind::Mapping => "mapping",
            FeatureKind::Pos => "pos",
            FeatureKind::Scale => "scale",
            FeatureKind::Coord => "coord",
            FeatureKind::Facet => "facet",
            FeatureKind::Theme => "theme",
            FeatureKind::GgSize => "ggsize",
            FeatureKind::GgTitle => "ggtitle",
            FeatureKind::Layout => "layout",
            FeatureKind::SubPlots => "subplots",
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A named, kind-tagged mapping from option name to value
///
/// The optional name is kept as the `name` option, the way the renderer
/// expects it (`{"name": "dodge", "width": 0.6}`).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSpec {
    kind: FeatureKind,
    props: Map<String, Value>,
}

impl FeatureSpec {
    /// Create an empty feature of the given kind
    pub fn new(kind: FeatureKind, name: Option<&str>) -> Self {
        let mut props = Map::new();
        if let Some(name) = name {
            props.insert("name".to_string(), Value::String(name.to_string()));
        }
        Self { kind, props }
    }

    /// Wrap an already serialized feature (a JSON object)
    pub fn from_value(kind: FeatureKind, value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let props = map.into_iter().filter(|(_, v)| !v.is_null()).collect();
                Ok(Self { kind, props })
            }
            other => Err(PlotSpecError::ParseError(format!(
                "{} specification must be an object, got {}",
                kind, other
            ))),
        }
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.props.get("name").and_then(Value::as_str)
    }

    pub fn props(&self) -> &Map<String, Value> {
        &self.props
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Set an option. A `null` value leaves the option unset.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        if value.is_null() {
            self.props.remove(key);
        } else {
            self.props.insert(key.to_string(), value);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.props.remove(key)
    }

    /// Builder form of [`FeatureSpec::set`]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an option only when a value was supplied
    pub fn with_opt<T: Into<Value>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Serialize into the renderer's mapping form
    pub fn as_dict(&self) -> Value {
        Value::Object(self.props.clone())
    }
}

impl Serialize for FeatureSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.props.serialize(serializer)
    }
}

/// Merge `update` into `base`: nested objects merge key by key, anything else
/// in `update` replaces the value in `base`.
pub fn merge_dicts_recursively(base: &Value, update: &Value) -> Value {
    match (base, update) {
        (Value::Object(base_map), Value::Object(update_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in update_map {
                let next = match merged.get(key) {
                    Some(existing) => merge_dicts_recursively(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        (_, update) => update.clone(),
    }
}

/// Reject NaN and infinities
pub(crate) fn check_finite(param: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlotSpecError::ValidationError(format!(
            "'{}' must be a finite number, got {}",
            param, value
        )))
    }
}

/// Reject negative values as well as non-finite ones
pub(crate) fn check_non_negative(param: &str, value: f64) -> Result<f64> {
    let value = check_finite(param, value)?;
    if value < 0.0 {
        return Err(PlotSpecError::ValidationError(format!(
            "'{}' must not be negative, got {}",
            param, value
        )));
    }
    Ok(value)
}

/// Require a strictly positive, finite value
pub(crate) fn check_positive(param: &str, value: f64) -> Result<f64> {
    let value = check_finite(param, value)?;
    if value <= 0.0 {
        return Err(PlotSpecError::ValidationError(format!(
            "'{}' must be positive, got {}",
            param, value
        )));
    }
    Ok(value)
}

/// Inline data must be an object of equally long column arrays
pub(crate) fn check_data(data: &Value) -> Result<()> {
    let columns = data.as_object().ok_or_else(|| {
        PlotSpecError::ValidationError(format!(
            "Data must be an object of columns, got {}",
            data
        ))
    })?;

    let mut first: Option<(&str, usize)> = None;
    for (name, column) in columns {
        let len = column
            .as_array()
            .ok_or_else(|| {
                PlotSpecError::ValidationError(format!("Data column '{}' must be an array", name))
            })?
            .len();
        match first {
            None => first = Some((name.as_str(), len)),
            Some((first_name, first_len)) if first_len != len => {
                return Err(PlotSpecError::ValidationError(format!(
                    "Data columns differ in length: '{}' has {} values, '{}' has {}",
                    first_name, first_len, name, len
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Validate a CSS colour string (`"red"`, `"#ff0000"`, `"rgb(255, 0, 0)"`)
pub(crate) fn check_color(param: &str, value: &str) -> Result<()> {
    csscolorparser::parse(value).map(|_| ()).map_err(|e| {
        PlotSpecError::ValidationError(format!(
            "'{}' is not a valid colour for '{}': {}",
            value, param, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_stored_as_option() {
        let spec = FeatureSpec::new(FeatureKind::Pos, Some("dodge"));
        assert_eq!(spec.kind(), FeatureKind::Pos);
        assert_eq!(spec.name(), Some("dodge"));
        assert_eq!(spec.as_dict(), json!({"name": "dodge"}));
    }

    #[test]
    fn test_null_options_are_omitted() {
        let spec = FeatureSpec::new(FeatureKind::Pos, Some("jitter"))
            .with("width", Value::Null)
            .with_opt::<f64>("height", None)
            .with_opt("seed", Some(42));
        assert_eq!(spec.as_dict(), json!({"name": "jitter", "seed": 42}));
    }

    #[test]
    fn test_setting_null_unsets_existing_option() {
        let mut spec = FeatureSpec::new(FeatureKind::GgSize, None).with("width", 100);
        spec.set("width", Value::Null);
        assert!(!spec.contains("width"));
    }

    #[test]
    fn test_from_value_drops_nulls() {
        let spec =
            FeatureSpec::from_value(FeatureKind::Theme, json!({"name": "bw", "axis": null}))
                .unwrap();
        assert_eq!(spec.as_dict(), json!({"name": "bw"}));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = FeatureSpec::from_value(FeatureKind::Theme, json!([1, 2])).unwrap_err();
        assert!(matches!(err, PlotSpecError::ParseError(_)));
    }

    #[test]
    fn test_serialize_matches_as_dict() {
        let spec = FeatureSpec::new(FeatureKind::Pos, Some("nudge")).with("x", 0.5);
        assert_eq!(serde_json::to_value(&spec).unwrap(), spec.as_dict());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_value(FeatureKind::GgSize).unwrap(), json!("ggsize"));
        assert_eq!(serde_json::to_value(FeatureKind::SubPlots).unwrap(), json!("subplots"));
        assert_eq!(FeatureKind::SubPlots.to_string(), "subplots");
    }

    #[test]
    fn test_merge_nested_objects() {
        let base = json!({"legend_position": "right", "axis": {"blank": true, "size": 2}});
        let update = json!({"axis": {"size": 3}, "panel_grid": "blank"});
        assert_eq!(
            merge_dicts_recursively(&base, &update),
            json!({
                "legend_position": "right",
                "axis": {"blank": true, "size": 3},
                "panel_grid": "blank"
            })
        );
    }

    #[test]
    fn test_merge_scalar_replaces_object() {
        let base = json!({"axis": {"size": 2}});
        let update = json!({"axis": "blank"});
        assert_eq!(merge_dicts_recursively(&base, &update), json!({"axis": "blank"}));
    }

    #[test]
    fn test_numeric_checks() {
        assert!(check_finite("width", 0.5).is_ok());
        assert!(check_finite("width", f64::NAN).is_err());
        assert!(check_non_negative("hspace", 0.0).is_ok());
        assert!(check_non_negative("hspace", -1.0).is_err());
        assert!(check_positive("width", 0.0).is_err());
    }

    #[test]
    fn test_data_columns_must_match() {
        assert!(check_data(&json!({"x": [1, 2], "y": ["a", "b"]})).is_ok());
        assert!(check_data(&json!({})).is_ok());

        let err = check_data(&json!({"x": [1, 2], "y": [1]})).unwrap_err();
        assert!(err.to_string().contains("differ in length"));
        assert!(check_data(&json!({"x": 1})).is_err());
        assert!(check_data(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_color_check() {
        assert!(check_color("fill", "red").is_ok());
        assert!(check_color("fill", "#1f77b4").is_ok());
        assert!(check_color("fill", "not-a-colour").is_err());
    }
}
