//! Position adjustments
//!
//! Each `position_*` function returns a builder. Only the parameters that are
//! explicitly set end up in the built `pos` feature; the renderer supplies the
//! defaults for everything else and performs all dodge/jitter/stack math.
//!
//! ```rust,ignore
//! let pos = position_jitter().width(0.2).seed(42).build()?;
//! assert_eq!(pos.as_dict(), json!({"name": "jitter", "width": 0.2, "seed": 42}));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::plot::types::{check_finite, FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

/// Position adjustment tags understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKind {
    Identity,
    Dodge,
    /// Vertical dodge (deprecated)
    DodgeV,
    Jitter,
    Nudge,
    JitterDodge,
    Stack,
    Fill,
}

impl PositionKind {
    pub fn name(&self) -> &'static str {
        match self {
            PositionKind::Identity => "identity",
            PositionKind::Dodge => "dodge",
            PositionKind::DodgeV => "dodgev",
            PositionKind::Jitter => "jitter",
            PositionKind::Nudge => "nudge",
            PositionKind::JitterDodge => "jitterdodge",
            PositionKind::Stack => "stack",
            PositionKind::Fill => "fill",
        }
    }
}

impl std::fmt::Display for PositionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PositionKind {
    type Err = PlotSpecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "identity" => Ok(PositionKind::Identity),
            "dodge" => Ok(PositionKind::Dodge),
            "dodgev" => Ok(PositionKind::DodgeV),
            "jitter" => Ok(PositionKind::Jitter),
            "nudge" => Ok(PositionKind::Nudge),
            "jitterdodge" => Ok(PositionKind::JitterDodge),
            "stack" => Ok(PositionKind::Stack),
            "fill" => Ok(PositionKind::Fill),
            other => Err(PlotSpecError::ValidationError(format!(
                "Unknown position '{}'. Expected one of: identity, dodge, jitter, nudge, jitterdodge, stack, fill, dodgev (deprecated)",
                other
            ))),
        }
    }
}

/// Units of a nudge offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NudgeUnit {
    /// 1 unit is a difference of 1 in data space
    Identity,
    /// 1 unit is the diameter of a point with `size=1`
    Size,
    /// Screen pixels
    Px,
}

impl NudgeUnit {
    pub fn name(&self) -> &'static str {
        match self {
            NudgeUnit::Identity => "identity",
            NudgeUnit::Size => "size",
            NudgeUnit::Px => "px",
        }
    }
}

impl std::str::FromStr for NudgeUnit {
    type Err = PlotSpecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "identity" => Ok(NudgeUnit::Identity),
            "size" => Ok(NudgeUnit::Size),
            "px" => Ok(NudgeUnit::Px),
            other => Err(PlotSpecError::ValidationError(format!(
                "Unknown nudge unit '{}'. Expected one of: identity, size, px",
                other
            ))),
        }
    }
}

/// Which objects a stack shifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackMode {
    /// Shift whole groups by the height of the previous groups
    Groups,
    /// Shift every object
    All,
}

impl StackMode {
    pub fn name(&self) -> &'static str {
        match self {
            StackMode::Groups => "groups",
            StackMode::All => "all",
        }
    }
}

impl std::str::FromStr for StackMode {
    type Err = PlotSpecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "groups" => Ok(StackMode::Groups),
            "all" => Ok(StackMode::All),
            other => Err(PlotSpecError::ValidationError(format!(
                "Unknown stack mode '{}'. Expected one of: groups, all",
                other
            ))),
        }
    }
}

/// Behaviour shared by all position builders
pub trait PositionTrait {
    /// Tag written as the `name` of the built spec
    fn position_kind(&self) -> PositionKind;

    /// Explicitly supplied parameters, validated. Unset parameters are absent.
    fn params(&self) -> Result<Vec<(&'static str, Value)>>;

    /// Assemble the `pos` feature. NOT meant to be overridden.
    fn build(&self) -> Result<FeatureSpec> {
        let mut spec = FeatureSpec::new(FeatureKind::Pos, Some(self.position_kind().name()));
        for (key, value) in self.params()? {
            spec.set(key, value);
        }
        Ok(spec)
    }
}

fn push_number(
    params: &mut Vec<(&'static str, Value)>,
    name: &'static str,
    value: Option<f64>,
) -> Result<()> {
    if let Some(v) = value {
        params.push((name, json!(check_finite(name, v)?)));
    }
    Ok(())
}

/// Dodge overlapping objects side to side
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionDodge {
    width: Option<f64>,
}

pub fn position_dodge() -> PositionDodge {
    PositionDodge::default()
}

impl PositionDodge {
    /// Dodging width, relative (typically 0..1)
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

impl PositionTrait for PositionDodge {
    fn position_kind(&self) -> PositionKind {
        PositionKind::Dodge
    }

    fn params(&self) -> Result<Vec<(&'static str, Value)>> {
        let mut params = Vec::new();
        push_number(&mut params, "width", self.width)?;
        Ok(params)
    }
}

/// Vertical dodge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionDodgeV {
    height: Option<f64>,
}

#[deprecated(note = "position_dodgev() will be removed in future releases")]
pub fn position_dodgev() -> PositionDodgeV {
    tracing::warn!("The function position_dodgev() is deprecated and will be removed in future releases.");
    PositionDodgeV::default()
}

impl PositionDodgeV {
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

impl PositionTrait for PositionDodgeV {
    fn position_kind(&self) -> PositionKind {
        PositionKind::DodgeV
    }

    fn params(&self) -> Result<Vec<(&'static str, Value)>> {
        let mut params = Vec::new();
        push_number(&mut params, "height", self.height)?;
        Ok(params)
    }
}

/// Random noise, mostly for discrete positions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionJitter {
    width: Option<f64>,
    height: Option<f64>,
    seed: Option<i64>,
}

pub fn position_jitter() -> PositionJitter {
    PositionJitter::default()
}

impl PositionJitter {
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Fixed random seed for reproducible jitter
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl PositionTrait for PositionJitter {
    fn position_kind(&self) -> PositionKind {
        PositionKind::Jitter
    }

    fn params(&self) -> Result<Vec<(&'static str, Value)>> {
        let mut params = Vec::new();
        push_number(&mut params, "width", self.width)?;
        push_number(&mut params, "height", self.height)?;
        if let Some(seed) = self.seed {
            params.push(("seed", json!(seed)));
        }
        Ok(params)
    }
}

/// Shift by a fixed offset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionNudge {
    x: Option<f64>,
    y: Option<f64>,
    unit: Option<NudgeUnit>,
}

pub fn position_nudge() -> PositionNudge {
    PositionNudge::default()
}

impl PositionNudge {
    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn unit(mut self, unit: NudgeUnit) -> Self {
        self.unit = Some(unit);
        self
    }
}

impl PositionTrait for PositionNudge {
    fn position_kind(&self) -> PositionKind {
        PositionKind::Nudge
    }

    fn params(&self) -> Result<Vec<(&'static str, Value)>> {
        let mut params = Vec::new();
        push_number(&mut params, "x", self.x)?;
        push_number(&mut params, "y", self.y)?;
        if let Some(unit) = self.unit {
            params.push(("unit", json!(unit.name())));
        }
        Ok(params)
    }
}

/// Dodge, then jitter within each dodged group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionJitterDodge {
    dodge_width: Option<f64>,
    jitter_width: Option<f64>,
    jitter_height: Option<f64>,
    seed: Option<i64>,
}

pub fn position_jitterdodge() -> PositionJitterDodge {
    PositionJitterDodge::default()
}

impl PositionJitterDodge {
    pub fn dodge_width(mut self, width: f64) -> Self {
        self.dodge_width = Some(width);
        self
    }

    pub fn jitter_width(mut self, width: f64) -> Self {
        self.jitter_width = Some(width);
        self
    }

    pub fn jitter_height(mut self, height: f64) -> Self {
        self.jitter_height = Some(height);
        self
    }

    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl PositionTrait for PositionJitterDodge {
    fn position_kind(&self) -> PositionKind {
        PositionKind::JitterDodge
    }

    fn params(&self) -> Result<Vec<(&'static str, Value)>> {
        let mut params = Vec::new();
        push_number(&mut params, "dodge_width", self.dodge_width)?;
        push_number(&mut params, "jitter_width", self.jitter_width)?;
        push_number(&mut params, "jitter_height", self.jitter_height)?;
        if let Some(seed) = self.seed {
            params.push(("seed", json!(seed)));
        }
        Ok(params)
    }
}

/// Stack overlapping objects; `fill` additionally normalizes each stack
#[derive(Debug, Clone, PartialEq)]
pub struct PositionStack {
    kind: PositionKind,
    vjust: Option<f64>,
    mode: Option<StackMode>,
}

pub fn position_stack() -> PositionStack {
    PositionStack {
        kind: PositionKind::Stack,
        vjust: None,
        mode: None,
    }
}

pub fn position_fill() -> PositionStack {
    PositionStack {
        kind: PositionKind::Fill,
        vjust: None,
        mode: None,
    }
}

impl PositionStack {
    /// Vertical adjustment for geoms with a position rather than a dimension:
    /// 0 aligns with the bottom, 0.5 the middle, 1 the top
    pub fn vjust(mut self, vjust: f64) -> Self {
        self.vjust = Some(vjust);
        self
    }

    pub fn mode(mut self, mode: StackMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl PositionTrait for PositionStack {
    fn position_kind(&self) -> PositionKind {
        self.kind
    }

    fn params(&self) -> Result<Vec<(&'static str, Value)>> {
        let mut params = Vec::new();
        push_number(&mut params, "vjust", self.vjust)?;
        if let Some(mode) = self.mode {
            params.push(("mode", json!(mode.name())));
        }
        Ok(params)
    }
}

/// Position of a layer: a bare tag or a full position spec
#[derive(Debug, Clone, PartialEq)]
pub enum LayerPosition {
    Named(PositionKind),
    Spec(FeatureSpec),
}

impl LayerPosition {
    pub fn to_value(&self) -> Value {
        match self {
            LayerPosition::Named(kind) => json!(kind.name()),
            LayerPosition::Spec(spec) => spec.as_dict(),
        }
    }

    /// Position features must be of kind `pos`
    pub fn validate(&self) -> Result<()> {
        match self {
            LayerPosition::Spec(spec) if spec.kind() != FeatureKind::Pos => {
                Err(PlotSpecError::ValidationError(format!(
                    "Layer position must be a 'pos' feature, got '{}'",
                    spec.kind()
                )))
            }
            _ => Ok(()),
        }
    }
}

impl From<PositionKind> for LayerPosition {
    fn from(kind: PositionKind) -> Self {
        LayerPosition::Named(kind)
    }
}

impl From<FeatureSpec> for LayerPosition {
    fn from(spec: FeatureSpec) -> Self {
        LayerPosition::Spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_and_fill_without_arguments() {
        assert_eq!(position_stack().build().unwrap().as_dict(), json!({"name": "stack"}));
        assert_eq!(position_fill().build().unwrap().as_dict(), json!({"name": "fill"}));
    }

    #[test]
    fn test_built_spec_is_pos_kind() {
        let spec = position_dodge().build().unwrap();
        assert_eq!(spec.kind(), FeatureKind::Pos);
        assert_eq!(spec.name(), Some("dodge"));
    }

    #[test]
    fn test_dodge_width() {
        let spec = position_dodge().width(0.6).build().unwrap();
        assert_eq!(spec.as_dict(), json!({"name": "dodge", "width": 0.6}));
    }

    #[test]
    fn test_jitter_omits_unset_parameters() {
        let spec = position_jitter().height(0.2).build().unwrap();
        assert_eq!(spec.as_dict(), json!({"name": "jitter", "height": 0.2}));

        let spec = position_jitter().width(0.2).height(0.1).seed(42).build().unwrap();
        assert_eq!(
            spec.as_dict(),
            json!({"name": "jitter", "width": 0.2, "height": 0.1, "seed": 42})
        );
    }

    #[test]
    fn test_nudge_with_unit() {
        let spec = position_nudge().y(0.05).unit(NudgeUnit::Px).build().unwrap();
        assert_eq!(spec.as_dict(), json!({"name": "nudge", "y": 0.05, "unit": "px"}));
    }

    #[test]
    fn test_jitterdodge_parameters() {
        assert_eq!(
            position_jitterdodge().build().unwrap().as_dict(),
            json!({"name": "jitterdodge"})
        );
        let spec = position_jitterdodge()
            .dodge_width(0.75)
            .jitter_width(0.1)
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(
            spec.as_dict(),
            json!({"name": "jitterdodge", "dodge_width": 0.75, "jitter_width": 0.1, "seed": 7})
        );
    }

    #[test]
    fn test_stack_mode_and_vjust() {
        let spec = position_stack().vjust(0.5).mode(StackMode::All).build().unwrap();
        assert_eq!(spec.as_dict(), json!({"name": "stack", "vjust": 0.5, "mode": "all"}));
        let spec = position_fill().mode(StackMode::Groups).build().unwrap();
        assert_eq!(spec.as_dict(), json!({"name": "fill", "mode": "groups"}));
    }

    #[test]
    #[allow(deprecated)]
    fn test_dodgev_uses_own_tag() {
        assert_eq!(position_dodgev().build().unwrap().as_dict(), json!({"name": "dodgev"}));
        let spec = position_dodgev().height(0.3).build().unwrap();
        assert_eq!(spec.as_dict(), json!({"name": "dodgev", "height": 0.3}));
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let err = position_dodge().width(f64::NAN).build().unwrap_err();
        assert!(matches!(err, PlotSpecError::ValidationError(_)));
        assert!(err.to_string().contains("width"));
        assert!(position_nudge().x(f64::INFINITY).build().is_err());
        assert!(position_stack().vjust(f64::NEG_INFINITY).build().is_err());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("jitterdodge".parse::<PositionKind>().unwrap(), PositionKind::JitterDodge);
        assert_eq!("size".parse::<NudgeUnit>().unwrap(), NudgeUnit::Size);
        assert_eq!("groups".parse::<StackMode>().unwrap(), StackMode::Groups);
        assert_eq!("dodgev".parse::<PositionKind>().unwrap(), PositionKind::DodgeV);
        let err = "sideways".parse::<PositionKind>().unwrap_err();
        assert!(err.to_string().contains("dodgev"));
        assert!("cm".parse::<NudgeUnit>().is_err());
        assert!("some".parse::<StackMode>().is_err());
    }

    #[test]
    fn test_kind_serde_names_match_tags() {
        for kind in [
            PositionKind::Identity,
            PositionKind::Dodge,
            PositionKind::DodgeV,
            PositionKind::Jitter,
            PositionKind::Nudge,
            PositionKind::JitterDodge,
            PositionKind::Stack,
            PositionKind::Fill,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.name()));
        }
    }

    #[test]
    fn test_layer_position_values() {
        let named = LayerPosition::from(PositionKind::Dodge);
        assert_eq!(named.to_value(), json!("dodge"));
        let spec = LayerPosition::from(position_nudge().x(1.0).build().unwrap());
        assert_eq!(spec.to_value(), json!({"name": "nudge", "x": 1.0}));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_layer_position_rejects_other_kinds() {
        let theme = FeatureSpec::new(FeatureKind::Theme, Some("bw"));
        assert!(LayerPosition::from(theme).validate().is_err());
    }
}
