//! Theme elements: the styled values a theme option can take

use serde_json::{json, Value};

use crate::plot::types::{check_color, check_finite, check_non_negative};
use crate::Result;

/// A value that can be assigned to a theme option
pub trait ThemeElement {
    fn to_value(&self) -> Result<Value>;
}

/// Removes the themed part from the figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementBlank;

pub fn element_blank() -> ElementBlank {
    ElementBlank
}

impl ThemeElement for ElementBlank {
    fn to_value(&self) -> Result<Value> {
        Ok(json!({"blank": true}))
    }
}

/// Font face of an [`ElementText`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Plain,
    Italic,
    Bold,
    BoldItalic,
}

impl FontFace {
    pub fn name(&self) -> &'static str {
        match self {
            FontFace::Plain => "plain",
            FontFace::Italic => "italic",
            FontFace::Bold => "bold",
            FontFace::BoldItalic => "bold_italic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementText {
    color: Option<String>,
    family: Option<String>,
    face: Option<FontFace>,
    size: Option<f64>,
    angle: Option<f64>,
    hjust: Option<f64>,
    vjust: Option<f64>,
}

pub fn element_text() -> ElementText {
    ElementText::default()
}

impl ElementText {
    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn family(mut self, family: &str) -> Self {
        self.family = Some(family.to_string());
        self
    }

    pub fn face(mut self, face: FontFace) -> Self {
        self.face = Some(face);
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Rotation in degrees
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Horizontal justification in [0, 1]
    pub fn hjust(mut self, hjust: f64) -> Self {
        self.hjust = Some(hjust);
        self
    }

    pub fn vjust(mut self, vjust: f64) -> Self {
        self.vjust = Some(vjust);
        self
    }
}

impl ThemeElement for ElementText {
    fn to_value(&self) -> Result<Value> {
        if let Some(color) = &self.color {
            check_color("color", color)?;
        }
        if let Some(size) = self.size {
            check_non_negative("size", size)?;
        }
        for (param, value) in [
            ("angle", self.angle),
            ("hjust", self.hjust),
            ("vjust", self.vjust),
        ] {
            if let Some(v) = value {
                check_finite(param, v)?;
            }
        }

        let mut element = serde_json::Map::new();
        insert_opt(&mut element, "color", self.color.clone());
        insert_opt(&mut element, "family", self.family.clone());
        insert_opt(&mut element, "face", self.face.map(|f| f.name()));
        insert_opt(&mut element, "size", self.size);
        insert_opt(&mut element, "angle", self.angle);
        insert_opt(&mut element, "hjust", self.hjust);
        insert_opt(&mut element, "vjust", self.vjust);
        Ok(Value::Object(element))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementLine {
    color: Option<String>,
    size: Option<f64>,
    linetype: Option<Value>,
}

pub fn element_line() -> ElementLine {
    ElementLine::default()
}

impl ElementLine {
    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Line type by code (`0`..`6`) or name (`"dashed"`)
    pub fn linetype(mut self, linetype: impl Into<Value>) -> Self {
        self.linetype = Some(linetype.into());
        self
    }
}

impl ThemeElement for ElementLine {
    fn to_value(&self) -> Result<Value> {
        if let Some(color) = &self.color {
            check_color("color", color)?;
        }
        if let Some(size) = self.size {
            check_non_negative("size", size)?;
        }

        let mut element = serde_json::Map::new();
        insert_opt(&mut element, "color", self.color.clone());
        insert_opt(&mut element, "size", self.size);
        insert_opt(&mut element, "linetype", self.linetype.clone());
        Ok(Value::Object(element))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementRect {
    fill: Option<String>,
    color: Option<String>,
    size: Option<f64>,
    linetype: Option<Value>,
}

pub fn element_rect() -> ElementRect {
    ElementRect::default()
}

impl ElementRect {
    pub fn fill(mut self, fill: &str) -> Self {
        self.fill = Some(fill.to_string());
        self
    }

    /// Border colour
    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn linetype(mut self, linetype: impl Into<Value>) -> Self {
        self.linetype = Some(linetype.into());
        self
    }
}

impl ThemeElement for ElementRect {
    fn to_value(&self) -> Result<Value> {
        if let Some(fill) = &self.fill {
            check_color("fill", fill)?;
        }
        if let Some(color) = &self.color {
            check_color("color", color)?;
        }
        if let Some(size) = self.size {
            check_non_negative("size", size)?;
        }

        let mut element = serde_json::Map::new();
        insert_opt(&mut element, "fill", self.fill.clone());
        insert_opt(&mut element, "color", self.color.clone());
        insert_opt(&mut element, "size", self.size);
        insert_opt(&mut element, "linetype", self.linetype.clone());
        Ok(Value::Object(element))
    }
}

/// Plain values (`"bottom"`, `[0.5, 0.5]`, ...) are themselves valid options
impl ThemeElement for Value {
    fn to_value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

fn insert_opt<T: Into<Value>>(map: &mut serde_json::Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(v) = value {
        map.insert(key.to_string(), v.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert_eq!(element_blank().to_value().unwrap(), json!({"blank": true}));
    }

    #[test]
    fn test_text_only_set_fields() {
        let text = element_text().face(FontFace::Bold).size(14.0);
        assert_eq!(
            text.to_value().unwrap(),
            json!({"face": "bold", "size": 14.0})
        );
        assert_eq!(element_text().to_value().unwrap(), json!({}));
    }

    #[test]
    fn test_colors_validated() {
        assert!(element_line().color("#333").to_value().is_ok());
        assert!(element_line().color("dark-ish").to_value().is_err());
        assert!(element_rect().fill("nope").to_value().is_err());
        assert!(element_text().color("nope").to_value().is_err());
    }

    #[test]
    fn test_rect() {
        let rect = element_rect().fill("white").color("black").size(1.0);
        assert_eq!(
            rect.to_value().unwrap(),
            json!({"fill": "white", "color": "black", "size": 1.0})
        );
    }

    #[test]
    fn test_negative_size_rejected() {
        assert!(element_text().size(-1.0).to_value().is_err());
    }
}
