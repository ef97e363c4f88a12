//! The point-to-cell grid that UBIDs are expressed in.
//!
//! A UBID names a footprint relative to one cell of an open location grid.
//! The grid itself is pluggable through [`GridCodec`]; the crate ships the
//! Open Location Code ("plus code") grid as [`OpenLocationCode`].

pub mod olc;

pub use olc::OpenLocationCode;

use crate::error::GridError;

/// Latitude bound of the grid, in degrees.
pub const LATITUDE_MAX: f64 = 90.0;

/// Longitude bound of the grid, in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// A rectangular grid cell, as returned by decoding a grid code.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Southern edge latitude.
    pub latitude_lo: f64,
    /// Western edge longitude.
    pub longitude_lo: f64,
    /// Northern edge latitude.
    pub latitude_hi: f64,
    /// Eastern edge longitude.
    pub longitude_hi: f64,
    /// Center latitude, clamped to the grid bounds.
    pub latitude_center: f64,
    /// Center longitude, clamped to the grid bounds.
    pub longitude_center: f64,
    /// Number of significant symbols in the code that produced this cell.
    pub code_length: usize,
}

impl GridCell {
    /// Creates a cell from its corners, deriving the center.
    pub fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            latitude_center: (latitude_lo + (latitude_hi - latitude_lo) / 2.0).min(LATITUDE_MAX),
            longitude_center: (longitude_lo + (longitude_hi - longitude_lo) / 2.0)
                .min(LONGITUDE_MAX),
            code_length,
        }
    }

    /// Cell height in degrees of latitude.
    #[inline]
    pub fn height(&self) -> f64 {
        self.latitude_hi - self.latitude_lo
    }

    /// Cell width in degrees of longitude.
    #[inline]
    pub fn width(&self) -> f64 {
        self.longitude_hi - self.longitude_lo
    }
}

/// A grid that maps points to short codes and codes back to cells.
///
/// Implementations must be deterministic: encoding the same point at the
/// same length always yields the same code, and decoding that code yields a
/// cell containing the point.
pub trait GridCodec {
    /// Encodes a point as a code of `code_length` significant symbols.
    fn encode(&self, latitude: f64, longitude: f64, code_length: usize)
        -> Result<String, GridError>;

    /// Decodes a code into the cell it names.
    fn decode(&self, code: &str) -> Result<GridCell, GridError>;

    /// Returns true if `code` is syntactically valid for this grid.
    fn is_valid(&self, code: &str) -> bool;

    /// Returns true if `code` can be decoded without a reference location.
    ///
    /// Grids without the notion of shortened codes can rely on the default.
    fn is_full(&self, code: &str) -> bool {
        self.is_valid(code)
    }
}

impl<G: GridCodec + ?Sized> GridCodec for &G {
    fn encode(
        &self,
        latitude: f64,
        longitude: f64,
        code_length: usize,
    ) -> Result<String, GridError> {
        (**self).encode(latitude, longitude, code_length)
    }

    fn decode(&self, code: &str) -> Result<GridCell, GridError> {
        (**self).decode(code)
    }

    fn is_valid(&self, code: &str) -> bool {
        (**self).is_valid(code)
    }

    fn is_full(&self, code: &str) -> bool {
        (**self).is_full(code)
    }
}
