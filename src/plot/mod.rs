//! Plot specification builders
//!
//! Everything here produces [`FeatureSpec`]s or the aggregates they are
//! added to ([`PlotSpec`], [`SubPlotsSpec`]).
//!
//! # Architecture
//!
//! - `types` - FeatureSpec, FeatureKind and shared validation helpers
//! - `aesthetic` - aes() mappings
//! - `layer` - Layer builder, geoms, stats and position adjustments
//! - `scale`, `coord`, `facet`, `theme`, `misc` - the other plot features
//! - `main` - PlotSpec and the `+` operator
//! - `subplots` - Figure, SubPlotsSpec and gggrid

pub mod aesthetic;
pub mod coord;
pub mod facet;
pub mod layer;
pub mod main;
pub mod misc;
pub mod scale;
pub mod subplots;
pub mod theme;
pub mod types;

pub use main::PlotSpec;
pub use subplots::{Figure, GridOptions, Share, SubPlotsSpec};
pub use theme::Settings;
pub use types::{merge_dicts_recursively, FeatureKind, FeatureSpec};
