//! Continuous scale transforms
//!
//! The renderer applies the transform; here we only name it and know its
//! domain so that limits can be checked up front.

use serde::{Deserialize, Serialize};

use crate::{PlotSpecError, Result};

/// Enum of all transforms for pattern matching and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Identity,
    Log10,
    Log2,
    Symlog,
    Sqrt,
    Reverse,
}

impl TransformKind {
    /// Canonical name for parsing and display
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Identity => "identity",
            TransformKind::Log10 => "log10",
            TransformKind::Log2 => "log2",
            TransformKind::Symlog => "symlog",
            TransformKind::Sqrt => "sqrt",
            TransformKind::Reverse => "reverse",
        }
    }

    /// Open/closed bounds of values the transform accepts
    pub fn allowed_domain(&self) -> (f64, f64) {
        match self {
            TransformKind::Log10 | TransformKind::Log2 => (0.0, f64::INFINITY),
            TransformKind::Sqrt => (0.0, f64::INFINITY),
            _ => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    pub fn is_value_in_domain(&self, value: f64) -> bool {
        match self {
            // log(0) is undefined
            TransformKind::Log10 | TransformKind::Log2 => value.is_finite() && value > 0.0,
            TransformKind::Sqrt => value.is_finite() && value >= 0.0,
            _ => value.is_finite(),
        }
    }
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for TransformKind {
    type Err = PlotSpecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "identity" => Ok(TransformKind::Identity),
            "log10" => Ok(TransformKind::Log10),
            "log2" => Ok(TransformKind::Log2),
            "symlog" => Ok(TransformKind::Symlog),
            "sqrt" => Ok(TransformKind::Sqrt),
            "reverse" => Ok(TransformKind::Reverse),
            other => Err(PlotSpecError::ValidationError(format!(
                "Unknown transform '{}'. Expected one of: identity, log10, log2, symlog, sqrt, reverse",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_domain() {
        let t = TransformKind::Log10;
        let (min, max) = t.allowed_domain();
        assert_eq!(min, 0.0);
        assert!(max.is_infinite());
        assert!(t.is_value_in_domain(1.0));
        assert!(!t.is_value_in_domain(0.0));
        assert!(!t.is_value_in_domain(-1.0));
    }

    #[test]
    fn test_sqrt_accepts_zero() {
        assert!(TransformKind::Sqrt.is_value_in_domain(0.0));
        assert!(!TransformKind::Sqrt.is_value_in_domain(-0.5));
    }

    #[test]
    fn test_identity_rejects_nan() {
        assert!(!TransformKind::Identity.is_value_in_domain(f64::NAN));
        assert!(TransformKind::Reverse.is_value_in_domain(-1e9));
    }

    #[test]
    fn test_parse() {
        assert_eq!("symlog".parse::<TransformKind>().unwrap(), TransformKind::Symlog);
        assert_eq!(
            serde_json::to_value(TransformKind::Log2).unwrap(),
            serde_json::json!("log2")
        );
        assert!("exp".parse::<TransformKind>().is_err());
    }
}
