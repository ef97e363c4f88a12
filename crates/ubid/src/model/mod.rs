//! Data model types for UBIDs.
//!
//! - [`CodeArea`]: a decoded UBID (bounding box plus centroid cell)
//! - [`GridCell`]: a single cell of the underlying grid, re-exported from
//!   [`crate::grid`]

pub mod area;

pub use crate::grid::GridCell;
pub use area::CodeArea;
