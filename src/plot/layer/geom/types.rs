//! Core types for the geom trait system
//!
//! These types are used by all geom implementations and are shared across the module.

/// Aesthetics a geom understands
///
/// `required` aesthetics must be mapped (on the layer or the plot) or set as
/// a constant before the renderer can draw the layer. Everything in
/// `supported` may be mapped or set; anything else is rejected.
#[derive(Debug, Clone, Copy)]
pub struct GeomAesthetics {
    pub supported: &'static [&'static str],
    pub required: &'static [&'static str],
}

/// Aesthetics every layer accepts regardless of geom
pub const COMMON_AESTHETICS: &[&str] = &["group"];

impl GeomAesthetics {
    /// Check if an aesthetic may be mapped or set on this geom
    pub fn is_supported(&self, name: &str) -> bool {
        self.supported.contains(&name) || COMMON_AESTHETICS.contains(&name)
    }

    /// Check if an aesthetic is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(&name)
    }

    /// Required aesthetics missing from `present`
    pub fn missing(&self, present: impl Fn(&str) -> bool) -> Vec<&'static str> {
        self.required
            .iter()
            .copied()
            .filter(|name| !present(name))
            .collect()
    }
}
