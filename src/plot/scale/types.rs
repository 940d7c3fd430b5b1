//! The general scale builder

use serde_json::Value;

use super::transform::TransformKind;
use crate::plot::aesthetic::normalize_aesthetic;
use crate::plot::types::{check_color, check_finite, check_non_negative, FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

/// Aesthetics whose manual values are colours
const COLOR_AESTHETICS: &[&str] = &["color", "fill"];

/// Scale for one aesthetic
///
/// Every option is optional; unset options are left to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    aesthetic: String,
    name: Option<String>,
    breaks: Option<Vec<Value>>,
    labels: Option<Vec<String>>,
    limits: Option<Vec<Value>>,
    expand: Option<Vec<f64>>,
    trans: Option<TransformKind>,
    values: Option<Vec<Value>>,
    na_value: Option<Value>,
    discrete: bool,
}

impl Scale {
    pub fn new(aesthetic: &str) -> Self {
        Self {
            aesthetic: normalize_aesthetic(aesthetic).to_string(),
            name: None,
            breaks: None,
            labels: None,
            limits: None,
            expand: None,
            trans: None,
            values: None,
            na_value: None,
            discrete: false,
        }
    }

    pub fn aesthetic(&self) -> &str {
        &self.aesthetic
    }

    /// Title of the axis or legend
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn breaks<T: Into<Value>>(mut self, breaks: impl IntoIterator<Item = T>) -> Self {
        self.breaks = Some(breaks.into_iter().map(Into::into).collect());
        self
    }

    pub fn labels<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.labels = Some(labels.iter().map(|s| s.as_ref().to_string()).collect());
        self
    }

    /// Continuous `[low, high]` (either end may be null) or a list of categories
    pub fn limits<T: Into<Value>>(mut self, limits: impl IntoIterator<Item = T>) -> Self {
        self.limits = Some(limits.into_iter().map(Into::into).collect());
        self
    }

    /// `[multiplicative]` or `[multiplicative, additive]` expansion
    pub fn expand(mut self, expand: &[f64]) -> Self {
        self.expand = Some(expand.to_vec());
        self
    }

    pub fn trans(mut self, trans: TransformKind) -> Self {
        self.trans = Some(trans);
        self
    }

    /// Output values for a manual scale
    pub fn values<T: Into<Value>>(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Output value for missing data
    pub fn na_value(mut self, value: impl Into<Value>) -> Self {
        self.na_value = Some(value.into());
        self
    }

    /// Treat the data as categorical
    pub fn discrete(mut self, discrete: bool) -> Self {
        self.discrete = discrete;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.aesthetic.is_empty() {
            return Err(PlotSpecError::ValidationError(
                "Scale aesthetic must not be empty".to_string(),
            ));
        }

        if let (Some(breaks), Some(labels)) = (&self.breaks, &self.labels) {
            if breaks.len() != labels.len() {
                return Err(PlotSpecError::ValidationError(format!(
                    "Scale for '{}' has {} breaks but {} labels",
                    self.aesthetic,
                    breaks.len(),
                    labels.len()
                )));
            }
        }

        if let Some(expand) = &self.expand {
            if expand.is_empty() || expand.len() > 2 {
                return Err(PlotSpecError::ValidationError(format!(
                    "'expand' takes 1 or 2 values, got {}",
                    expand.len()
                )));
            }
            for v in expand {
                check_non_negative("expand", *v)?;
            }
        }

        if let Some(limits) = &self.limits {
            self.validate_limits(limits)?;
        }

        if let Some(values) = &self.values {
            if COLOR_AESTHETICS.contains(&self.aesthetic.as_str()) {
                for value in values {
                    let color = value.as_str().ok_or_else(|| {
                        PlotSpecError::ValidationError(format!(
                            "Manual '{}' values must be colour strings, got {}",
                            self.aesthetic, value
                        ))
                    })?;
                    check_color(&self.aesthetic, color)?;
                }
            }
        }
        Ok(())
    }

    fn validate_limits(&self, limits: &[Value]) -> Result<()> {
        // Discrete limits list the categories to show, in order
        if self.discrete {
            return Ok(());
        }
        if limits.len() > 2 {
            return Err(PlotSpecError::ValidationError(format!(
                "Continuous 'limits' take at most 2 values, got {}",
                limits.len()
            )));
        }

        let trans = self.trans.unwrap_or(TransformKind::Identity);
        let mut bounds = Vec::with_capacity(2);
        for limit in limits {
            match limit {
                Value::Null => {}
                Value::Number(n) => {
                    let v = check_finite("limits", n.as_f64().unwrap_or(f64::NAN))?;
                    if !trans.is_value_in_domain(v) {
                        return Err(PlotSpecError::ValidationError(format!(
                            "Limit {} is outside the domain of the {} transform",
                            v, trans
                        )));
                    }
                    bounds.push(v);
                }
                other => {
                    return Err(PlotSpecError::ValidationError(format!(
                        "Continuous 'limits' must be numbers or null, got {}",
                        other
                    )))
                }
            }
        }
        if let [low, high] = bounds[..] {
            if low > high {
                return Err(PlotSpecError::ValidationError(format!(
                    "Lower limit {} exceeds upper limit {}",
                    low, high
                )));
            }
        }
        Ok(())
    }

    pub fn build(self) -> Result<FeatureSpec> {
        self.validate()?;

        let spec = FeatureSpec::new(FeatureKind::Scale, self.name.as_deref())
            .with("aesthetic", self.aesthetic.as_str())
            .with_opt("breaks", self.breaks)
            .with_opt("labels", self.labels)
            .with_opt("limits", self.limits)
            .with_opt("expand", self.expand)
            .with_opt("trans", self.trans.map(|t| t.name()))
            .with_opt("values", self.values)
            .with_opt("na_value", self.na_value);
        Ok(if self.discrete {
            spec.with("discrete", true)
        } else {
            spec
        })
    }
}
