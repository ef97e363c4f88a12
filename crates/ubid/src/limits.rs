//! Numeric bounds enforced while parsing UBIDs.

/// Largest accepted offset field, in grid cells.
///
/// This is the number of rows of the finest Open Location Code grid between
/// the poles (180 degrees at 1/25,000,000 degree). No footprint on the globe
/// needs more cells than that in any direction, and the bound keeps
/// `offset * cell_size` well inside `f64` range.
pub const MAX_OFFSET: u64 = 4_500_000_000;

/// Minimum number of grid symbols before the `+` in a UBID.
pub const MIN_PREFIX_SYMBOLS: usize = 4;

/// Maximum number of grid symbols before the `+` in a UBID.
pub const MAX_PREFIX_SYMBOLS: usize = 8;
