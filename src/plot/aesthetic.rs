//! Aesthetic mappings
//!
//! `aes()` maps aesthetic channels (`x`, `fill`, ...) to data columns. The
//! result is a `mapping` feature that can be attached to a plot (default for
//! all layers) or to a single layer.

use serde_json::Value;

use super::types::{FeatureKind, FeatureSpec};

/// Canonical aesthetic name (`colour` is accepted as an alias of `color`)
pub fn normalize_aesthetic(name: &str) -> &str {
    match name {
        "colour" => "color",
        other => other,
    }
}

/// Aesthetic mapping builder
#[derive(Debug, Clone, PartialEq)]
pub struct Aes {
    spec: FeatureSpec,
}

/// Start an empty aesthetic mapping
pub fn aes() -> Aes {
    Aes {
        spec: FeatureSpec::new(FeatureKind::Mapping, None),
    }
}

impl Aes {
    /// Map any aesthetic to a column
    pub fn map(mut self, aesthetic: &str, column: &str) -> Self {
        self.spec.set(
            normalize_aesthetic(aesthetic),
            Value::String(column.to_string()),
        );
        self
    }

    pub fn x(self, column: &str) -> Self {
        self.map("x", column)
    }

    pub fn y(self, column: &str) -> Self {
        self.map("y", column)
    }

    pub fn color(self, column: &str) -> Self {
        self.map("color", column)
    }

    pub fn fill(self, column: &str) -> Self {
        self.map("fill", column)
    }

    pub fn alpha(self, column: &str) -> Self {
        self.map("alpha", column)
    }

    pub fn size(self, column: &str) -> Self {
        self.map("size", column)
    }

    pub fn shape(self, column: &str) -> Self {
        self.map("shape", column)
    }

    pub fn linetype(self, column: &str) -> Self {
        self.map("linetype", column)
    }

    pub fn group(self, column: &str) -> Self {
        self.map("group", column)
    }

    pub fn label(self, column: &str) -> Self {
        self.map("label", column)
    }

    /// Mapped aesthetic names, sorted by name
    pub fn aesthetics(&self) -> Vec<&str> {
        self.spec.props().keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spec.props().is_empty()
    }

    pub fn as_dict(&self) -> Value {
        self.spec.as_dict()
    }
}

impl From<Aes> for FeatureSpec {
    fn from(aes: Aes) -> Self {
        aes.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aes_builds_mapping() {
        let mapping = aes().x("X").y("Y").fill("g");
        assert_eq!(mapping.as_dict(), json!({"x": "X", "y": "Y", "fill": "g"}));
        let spec: FeatureSpec = mapping.into();
        assert_eq!(spec.kind(), FeatureKind::Mapping);
        assert_eq!(spec.name(), None);
    }

    #[test]
    fn test_colour_alias() {
        let mapping = aes().map("colour", "c");
        assert_eq!(mapping.as_dict(), json!({"color": "c"}));
        assert_eq!(mapping.aesthetics(), vec!["color"]);
    }

    #[test]
    fn test_empty_mapping() {
        let mapping = aes();
        assert!(mapping.is_empty());
        assert_eq!(mapping.as_dict(), json!({}));
    }

    #[test]
    fn test_remapping_replaces_column() {
        let mapping = aes().x("a").x("b");
        assert_eq!(mapping.as_dict(), json!({"x": "b"}));
    }

    #[test]
    fn test_aesthetics_sorted_by_name() {
        let mapping = aes().y("b").fill("g").x("a");
        assert_eq!(mapping.aesthetics(), vec!["fill", "x", "y"]);
    }
}
