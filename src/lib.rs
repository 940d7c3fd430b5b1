/*!
# plotspec - declarative chart specifications

A grammar-of-graphics builder layer. Plots are composed from small, tagged
feature specifications (layers, position adjustments, scales, coordinate
systems, facets, themes) and serialized into the JSON mapping consumed by an
external rendering engine.

## Example

```rust,ignore
use plotspec::prelude::*;
use serde_json::json;

let data = json!({"x": [1, 2, 3], "y": [3, 1, 2], "g": ["a", "b", "a"]});

let p = ggplot().data(data)?.mapping(aes().x("x").y("y"))
    + geom_bar()
        .mapping(aes().fill("g"))
        .position(position_dodge().width(0.6).build()?)
        .build()?
    + ggsize(400.0, 300.0)?;

let grid = gggrid(vec![Some(p.clone().into()), Some(p.into())], Some(1), GridOptions::default())?;
let json = grid.as_dict();
```

## Core Components

- [`plot`] - feature specifications, plots, layers, themes and subplot grids
- [`writer`] - serialization of finished figures
*/

pub mod plot;
pub mod writer;

pub use plot::{
    Figure, FeatureKind, FeatureSpec, GridOptions, PlotSpec, Settings, Share, SubPlotsSpec,
};

/// Everything needed to compose a figure, in one import.
pub mod prelude {
    pub use crate::plot::aesthetic::aes;
    pub use crate::plot::coord::{coord_cartesian, coord_fixed, coord_flip, coord_polar};
    pub use crate::plot::facet::{facet_grid, facet_wrap, FacetScales};
    pub use crate::plot::layer::geom::*;
    pub use crate::plot::layer::position::*;
    pub use crate::plot::layer::StatKind;
    pub use crate::plot::main::ggplot;
    pub use crate::plot::misc::{ggsize, ggtitle};
    pub use crate::plot::scale::*;
    pub use crate::plot::subplots::gggrid;
    pub use crate::plot::theme::*;
    pub use crate::plot::{Figure, FeatureSpec, GridOptions, PlotSpec, Settings, Share};
}

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum PlotSpecError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Output generation error: {0}")]
    WriterError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, PlotSpecError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
