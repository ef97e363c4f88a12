//! Coordinates to UBID text.

use crate::codec::grammar::UbidParts;
use crate::error::EncodeError;
use crate::grid::GridCodec;
use crate::model::CodeArea;

/// Number of whole cells spanned by `distance`, rounded half away from zero.
///
/// Negative counts (a corner on the near side of the centroid cell) clamp to
/// zero so the bounding box always covers the centroid cell.
#[inline]
fn cell_offset(distance: f64, cell_size: f64) -> u64 {
    (distance / cell_size).round().max(0.0) as u64
}

/// Encodes a bounding box and centroid as a UBID against `grid`.
///
/// Both corners are snapped outwards to the grid cell containing them before
/// the offsets are measured, so decoding the result yields the smallest
/// cell-aligned box that contains the input.
#[allow(clippy::too_many_arguments)]
pub(crate) fn encode_box<G: GridCodec>(
    grid: &G,
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    latitude_center: f64,
    longitude_center: f64,
    code_length: usize,
) -> Result<String, EncodeError> {
    let northeast_code = grid.encode(latitude_hi, longitude_hi, code_length)?;
    let southwest_code = grid.encode(latitude_lo, longitude_lo, code_length)?;
    let centroid_code = grid.encode(latitude_center, longitude_center, code_length)?;

    let northeast = grid.decode(&northeast_code)?;
    let southwest = grid.decode(&southwest_code)?;
    let centroid = grid.decode(&centroid_code)?;

    let height = centroid.height();
    let width = centroid.width();

    let parts = UbidParts {
        olc: &centroid_code,
        north: cell_offset(northeast.latitude_hi - centroid.latitude_hi, height),
        east: cell_offset(northeast.longitude_hi - centroid.longitude_hi, width),
        south: cell_offset(centroid.latitude_lo - southwest.latitude_lo, height),
        west: cell_offset(centroid.longitude_lo - southwest.longitude_lo, width),
    };
    Ok(parts.to_string())
}

/// Re-encodes a code area from its bounding box and the center and length of
/// its centroid cell.
pub(crate) fn encode_area<G: GridCodec>(grid: &G, area: &CodeArea) -> Result<String, EncodeError> {
    if let Some(reason) = area.validate() {
        return Err(EncodeError::InvalidCodeArea { reason });
    }
    let center = &area.center_of_mass;
    encode_box(
        grid,
        area.latitude_lo,
        area.longitude_lo,
        area.latitude_hi,
        area.longitude_hi,
        center.latitude_center,
        center.longitude_center,
        center.code_length,
    )
}
