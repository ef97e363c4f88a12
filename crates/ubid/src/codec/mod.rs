//! UBID encoding and decoding.
//!
//! [`UbidCodec`] binds the codec to a grid backend. The free functions use
//! the Open Location Code grid.

mod decoder;
mod encoder;
pub mod grammar;

#[cfg(test)]
pub(crate) mod testing;

pub use grammar::{parse, UbidParts};

use crate::error::{DecodeError, EncodeError};
use crate::grid::{GridCodec, OpenLocationCode};
use crate::model::CodeArea;

/// A UBID codec over a particular grid.
///
/// The codec holds no state besides the grid, so a single instance can be
/// shared freely between threads when the grid allows it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UbidCodec<G = OpenLocationCode> {
    grid: G,
}

impl<G: GridCodec> UbidCodec<G> {
    /// Creates a codec over `grid`.
    pub fn new(grid: G) -> Self {
        Self { grid }
    }

    /// Returns the grid backend.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Decodes a UBID into its code area.
    ///
    /// `None` stands for an absent code and is rejected like malformed input.
    pub fn decode<'a>(&self, code: impl Into<Option<&'a str>>) -> Result<CodeArea, DecodeError> {
        decoder::decode_area(&self.grid, code.into())
    }

    /// Encodes a footprint's bounding box and centroid as a UBID.
    ///
    /// Errors from the grid (such as an unsupported `code_length`) are
    /// returned unchanged in [`EncodeError::Grid`].
    #[allow(clippy::too_many_arguments)]
    pub fn encode(
        &self,
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        latitude_center: f64,
        longitude_center: f64,
        code_length: usize,
    ) -> Result<String, EncodeError> {
        encoder::encode_box(
            &self.grid,
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            latitude_center,
            longitude_center,
            code_length,
        )
    }

    /// Encodes a code area using its bounding box and the center and code
    /// length of its centroid cell.
    ///
    /// To reproduce the code an area was decoded from, pass the
    /// [resized](CodeArea::resize) area.
    pub fn encode_code_area(&self, area: &CodeArea) -> Result<String, EncodeError> {
        encoder::encode_area(&self.grid, area)
    }

    /// Returns true if `code` is a UBID that this codec can decode.
    pub fn is_valid<'a>(&self, code: impl Into<Option<&'a str>>) -> bool {
        crate::validate::is_valid_with(&self.grid, code.into())
    }
}

/// Decodes a UBID on the Open Location Code grid.
pub fn decode<'a>(code: impl Into<Option<&'a str>>) -> Result<CodeArea, DecodeError> {
    UbidCodec::new(OpenLocationCode).decode(code)
}

/// Encodes a bounding box and centroid as a UBID on the Open Location Code
/// grid.
#[allow(clippy::too_many_arguments)]
pub fn encode(
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    latitude_center: f64,
    longitude_center: f64,
    code_length: usize,
) -> Result<String, EncodeError> {
    UbidCodec::new(OpenLocationCode).encode(
        latitude_lo,
        longitude_lo,
        latitude_hi,
        longitude_hi,
        latitude_center,
        longitude_center,
        code_length,
    )
}

/// Encodes a code area on the Open Location Code grid.
pub fn encode_code_area(area: &CodeArea) -> Result<String, EncodeError> {
    UbidCodec::new(OpenLocationCode).encode_code_area(area)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::codec::testing::SquareGrid;
    use crate::error::GridError;

    #[test]
    fn test_free_functions_use_open_location_code() {
        let code = encode(20.3696, 2.7816, 20.3709, 2.7829, 20.3700625, 2.7821875, 10).unwrap();
        assert_eq!(code, "7FG49QCJ+2V-7-6-4-5");

        let area = decode(code.as_str()).unwrap();
        assert_eq!(area, UbidCodec::<OpenLocationCode>::default().decode(code.as_str()).unwrap());
        assert_eq!(encode_code_area(&area.resize()).unwrap(), code);
    }

    #[test]
    fn test_decode_absent_code() {
        assert_eq!(decode(None::<&str>), Err(DecodeError::Missing));
        assert!(matches!(decode(""), Err(DecodeError::Malformed { .. })));
    }

    #[test]
    fn test_encode_error_is_unchanged() {
        assert_eq!(
            encode(0.0, 0.0, 1.0, 1.0, 0.5, 0.5, 1),
            Err(EncodeError::Grid(GridError::InvalidCodeLength { length: 1 }))
        );
    }

    #[test]
    fn test_codec_over_substitute_grid() {
        let codec = UbidCodec::new(SquareGrid::new(0.5));
        let code = codec.encode(9.3, 19.1, 10.6, 20.7, 10.1, 20.1, SquareGrid::CODE_LENGTH).unwrap();
        assert!(codec.is_valid(code.as_str()));

        let area = codec.decode(code.as_str()).unwrap();
        assert_eq!(area.latitude_lo, 9.0);
        assert_eq!(area.latitude_hi, 11.0);
        assert_eq!(area.longitude_lo, 19.0);
        assert_eq!(area.longitude_hi, 21.0);
        assert_eq!(codec.encode_code_area(&area.resize()).unwrap(), code);
    }

    #[test]
    fn test_codec_by_reference() {
        let grid = SquareGrid::new(0.25);
        let codec = UbidCodec::new(&grid);
        assert!(codec.decode("23222422+-0-0-0-0").is_ok());
        assert_eq!(codec.grid().encode(10.1, 20.1, 8).unwrap(), "23222422+");
    }

    fn footprint() -> impl Strategy<Value = (f64, f64, f64, f64, f64, f64, usize)> {
        (
            -80.0f64..80.0,
            -170.0f64..170.0,
            0.0f64..0.01,
            0.0f64..0.01,
            0.0f64..=1.0,
            0.0f64..=1.0,
            prop::sample::select(vec![8usize, 10, 11, 12]),
        )
            .prop_map(|(lat, lng, dlat, dlng, tlat, tlng, len)| {
                (lat, lng, lat + dlat, lng + dlng, lat + tlat * dlat, lng + tlng * dlng, len)
            })
    }

    proptest! {
        #[test]
        fn prop_encoded_codes_are_valid(fp in footprint()) {
            let (lat_lo, lng_lo, lat_hi, lng_hi, lat_c, lng_c, len) = fp;
            let code = encode(lat_lo, lng_lo, lat_hi, lng_hi, lat_c, lng_c, len).unwrap();
            prop_assert!(crate::is_valid(code.as_str()), "{}", code);

            let area = decode(code.as_str()).unwrap();
            prop_assert!(area.latitude_lo <= area.latitude_hi);
            prop_assert!(area.longitude_lo <= area.longitude_hi);
        }

        #[test]
        fn prop_resized_area_approximates_footprint(fp in footprint()) {
            let (lat_lo, lng_lo, lat_hi, lng_hi, lat_c, lng_c, len) = fp;
            let code = encode(lat_lo, lng_lo, lat_hi, lng_hi, lat_c, lng_c, len).unwrap();
            let area = decode(code.as_str()).unwrap();
            let resized = area.resize();

            let h = area.center_of_mass.height() * (1.0 + 1e-6);
            let w = area.center_of_mass.width() * (1.0 + 1e-6);
            prop_assert!((resized.latitude_lo - lat_lo).abs() <= h);
            prop_assert!((resized.latitude_hi - lat_hi).abs() <= h);
            prop_assert!((resized.longitude_lo - lng_lo).abs() <= w);
            prop_assert!((resized.longitude_hi - lng_hi).abs() <= w);

            // The unresized area covers the footprint.
            prop_assert!(area.latitude_lo <= lat_lo + 1e-9 && lat_hi <= area.latitude_hi + 1e-9);
            prop_assert!(area.longitude_lo <= lng_lo + 1e-9 && lng_hi <= area.longitude_hi + 1e-9);
        }

        #[test]
        fn prop_reencoding_resized_area_is_stable(fp in footprint()) {
            let (lat_lo, lng_lo, lat_hi, lng_hi, lat_c, lng_c, len) = fp;
            let code = encode(lat_lo, lng_lo, lat_hi, lng_hi, lat_c, lng_c, len).unwrap();
            let area = decode(code.as_str()).unwrap();

            let reencoded = encode_code_area(&area.resize()).unwrap();
            prop_assert_eq!(&reencoded, &code);
            prop_assert_eq!(decode(reencoded.as_str()).unwrap(), area);
        }
    }
}
