//! UBID text to [`CodeArea`].

use crate::codec::grammar;
use crate::error::DecodeError;
use crate::grid::GridCodec;
use crate::model::CodeArea;
use crate::CODE_VERSION;

/// Decodes a UBID against `grid`.
///
/// The offsets are Chebyshev distances in cells of the centroid's size, so
/// the bounding box is the centroid cell grown by `north` cells upwards,
/// `east` cells to the right, and so on.
pub(crate) fn decode_area<G: GridCodec>(
    grid: &G,
    code: Option<&str>,
) -> Result<CodeArea, DecodeError> {
    let code = code.ok_or(DecodeError::Missing)?;
    let parts = grammar::parse(code)?;

    let center_of_mass = grid.decode(parts.olc).map_err(DecodeError::Grid)?;

    let height = center_of_mass.height();
    let width = center_of_mass.width();

    let latitude_hi = center_of_mass.latitude_hi + parts.north as f64 * height;
    let longitude_hi = center_of_mass.longitude_hi + parts.east as f64 * width;
    let latitude_lo = center_of_mass.latitude_lo - parts.south as f64 * height;
    let longitude_lo = center_of_mass.longitude_lo - parts.west as f64 * width;

    Ok(CodeArea::new(
        latitude_lo,
        longitude_lo,
        latitude_hi,
        longitude_hi,
        center_of_mass,
        CODE_VERSION,
    ))
}
