//! Output writers
//!
//! A writer turns a finished [`Figure`] into the form handed to a renderer.
//!
//! # Example
//!
//! ```rust,ignore
//! use plotspec::writer::{JsonWriter, Writer};
//!
//! let writer = JsonWriter::new().pretty(true);
//! let json = writer.write(&figure)?;
//! ```

mod json;

pub use json::JsonWriter;

use crate::plot::Figure;
use crate::Result;

/// Trait for figure writers
pub trait Writer {
    /// Type produced by the writer
    type Output;

    /// Validate and serialize a figure
    fn write(&self, figure: &Figure) -> Result<Self::Output>;
}
