//! Unique Building Identifiers (UBIDs).
//!
//! A UBID names a building footprint by the grid cell containing its center
//! of mass plus the number of cells between that cell and each edge of the
//! footprint's bounding box:
//!
//! ```text
//! 849VCWC8+R9-3-2-1-4
//! └─ centroid ─┘ N E S W
//! ```
//!
//! The grid is the Open Location Code ("plus code") grid by default; any
//! other grid can be plugged in through [`GridCodec`].
//!
//! # Quick Start
//!
//! ```rust
//! use ubid::{decode, encode, encode_code_area, is_valid};
//!
//! // Footprint bounding box, centroid, and the code length of the centroid cell.
//! let code = encode(20.3696, 2.7816, 20.3709, 2.7829, 20.3700625, 2.7821875, 10).unwrap();
//! assert_eq!(code, "7FG49QCJ+2V-7-6-4-5");
//! assert!(is_valid(code.as_str()));
//!
//! // Decoding returns the cell-aligned box around the footprint...
//! let area = decode(code.as_str()).unwrap();
//! assert!(area.latitude_lo < 20.3696 && area.latitude_hi > 20.3709);
//! assert_eq!(area.center_of_mass.code_length, 10);
//!
//! // ...and resizing removes the half-cell padding added by snapping.
//! let resized = area.resize();
//! assert_eq!(encode_code_area(&resized).unwrap(), code);
//! ```
//!
//! # Modules
//!
//! - [`model`]: The decoded value type ([`CodeArea`])
//! - [`codec`]: Decoding, encoding and the UBID grammar
//! - [`grid`]: The grid backend trait and the Open Location Code grid
//! - [`validate`]: Non-failing validity checks
//! - [`error`]: Error types
//! - [`limits`]: Bounds enforced while parsing
//!
//! # Precision
//!
//! Encoding snaps both corners of the bounding box outwards to the grid cell
//! containing them, so `decode(encode(box))` is the smallest cell-aligned box
//! containing `box`. [`CodeArea::resize`] moves each edge back by half a cell,
//! which brings every edge within one cell of the original box.
//!
//! All operations are pure and synchronous; they can be called from any
//! number of threads without coordination.

pub mod codec;
pub mod error;
pub mod grid;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{decode, encode, encode_code_area, UbidCodec, UbidParts};
pub use error::{DecodeError, EncodeError, ErrorCode, GridError};
pub use grid::{GridCell, GridCodec, OpenLocationCode};
pub use model::CodeArea;
pub use validate::{is_valid, validate_code_area};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the UBID grammar this crate implements.
pub const CODE_VERSION: u32 = 3;

/// Separator between the fields of a UBID.
pub const SEPARATOR: char = '-';
