//! Global theme
//!
//! Figures pick up a default theme from [`Settings`]. Library users can pass
//! their own `Settings`; the free functions `ggplot()` and `gggrid()` use a
//! snapshot of the process-wide default managed here.

use std::sync::RwLock;

use crate::plot::types::{FeatureKind, FeatureSpec};
use crate::{PlotSpecError, Result};

static GLOBAL_THEME: RwLock<Option<FeatureSpec>> = RwLock::new(None);

/// Defaults applied when figures are constructed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    theme: Option<FeatureSpec>,
}

impl Settings {
    /// Settings with no global theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process-wide settings
    pub fn current() -> Self {
        Self {
            theme: global_theme(),
        }
    }

    pub fn with_theme(mut self, theme: FeatureSpec) -> Result<Self> {
        check_theme(&theme)?;
        self.theme = Some(theme);
        Ok(self)
    }

    pub fn theme(&self) -> Option<&FeatureSpec> {
        self.theme.as_ref()
    }
}

fn check_theme(theme: &FeatureSpec) -> Result<()> {
    if theme.kind() != FeatureKind::Theme {
        return Err(PlotSpecError::ValidationError(format!(
            "Only a theme can be used as the global theme, got '{}'",
            theme.kind()
        )));
    }
    Ok(())
}

/// Install the process-wide default theme
pub fn set_global_theme(theme: FeatureSpec) -> Result<()> {
    check_theme(&theme)?;
    tracing::debug!(theme = %theme.as_dict(), "Setting global theme");
    let mut guard = GLOBAL_THEME.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(theme);
    Ok(())
}

pub fn clear_global_theme() {
    let mut guard = GLOBAL_THEME.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}

pub fn global_theme() -> Option<FeatureSpec> {
    GLOBAL_THEME
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}
