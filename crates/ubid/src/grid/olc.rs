//! Open Location Code ("plus code") grid.
//!
//! Codes are built from a pair section (up to 10 symbols, alternating
//! latitude and longitude digits in base 20) followed by an optional grid
//! section (up to 5 more symbols, each splitting the cell into 5 rows by 4
//! columns). A `+` always follows the eighth symbol; shorter codes are padded
//! with `0` up to the separator.
//!
//! All arithmetic is done on integer multiples of the finest cell, which
//! keeps encoding exact and independent of the requested length.

use crate::error::GridError;
use crate::grid::{GridCell, GridCodec, LATITUDE_MAX};

/// Symbols of the code, in digit order.
pub const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Separator between the eighth and ninth symbols.
pub const SEPARATOR: u8 = b'+';

/// Number of symbols before the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Padding symbol for codes shorter than the separator position.
pub const PADDING: u8 = b'0';

/// Minimum number of significant symbols in an encoded code.
pub const MIN_DIGIT_COUNT: usize = 2;

/// Maximum number of significant symbols; longer codes are truncated.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Length of the pair section.
pub const PAIR_CODE_LENGTH: usize = 10;

const ENCODING_BASE: i64 = 20;
const PAIR_FIRST_PLACE_VALUE: i64 = 160_000;
const PAIR_PRECISION: i64 = 8_000;

const GRID_CODE_LENGTH: u32 = 5;
const GRID_COLUMNS: i64 = 4;
const GRID_ROWS: i64 = 5;
const GRID_LAT_FIRST_PLACE_VALUE: i64 = 625;
const GRID_LNG_FIRST_PLACE_VALUE: i64 = 256;

/// Finest-cell subdivisions per degree of latitude.
const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * 3_125;
/// Finest-cell subdivisions per degree of longitude.
const FINAL_LNG_PRECISION: i64 = PAIR_PRECISION * 1_024;

const LATITUDE_MAX_INT: i64 = 90;
const LONGITUDE_MAX_INT: i64 = 180;

/// Decoded corners are rounded to this many subdivisions per degree.
const DEGREE_ROUNDING: f64 = 1e14;

/// Scaled coordinates are rounded to this many subdivisions of a finest cell
/// before flooring.
const CELL_ROUNDING: f64 = 1e6;

/// The Open Location Code grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenLocationCode;

/// Returns the digit value of a code symbol (case-insensitive).
#[inline]
fn digit_value(symbol: u8) -> Option<i64> {
    let upper = symbol.to_ascii_uppercase();
    CODE_ALPHABET
        .iter()
        .position(|&s| s == upper)
        .map(|p| p as i64)
}

#[inline]
fn round_degrees(value: f64) -> f64 {
    (value * DEGREE_ROUNDING).round() / DEGREE_ROUNDING
}

/// Returns the index of the finest cell containing `degrees`.
///
/// Decimal inputs such as `129.7` are stored slightly below their true value,
/// which would otherwise floor into the neighbouring cell.
#[inline]
fn finest_cell(degrees: f64, precision: i64) -> i64 {
    ((degrees * precision as f64 * CELL_ROUNDING).round() / CELL_ROUNDING).floor() as i64
}

/// Converts a location to finest-cell integer coordinates.
///
/// Latitude is clipped into `[-90, 90)`; longitude wraps into `[-180, 180)`.
fn location_to_integers(latitude: f64, longitude: f64) -> (i64, i64) {
    let lat_span = 2 * LATITUDE_MAX_INT * FINAL_LAT_PRECISION;
    let lng_span = 2 * LONGITUDE_MAX_INT * FINAL_LNG_PRECISION;

    let latitude = latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX);
    let lat_val =
        finest_cell(latitude, FINAL_LAT_PRECISION) + LATITUDE_MAX_INT * FINAL_LAT_PRECISION;
    let lat_val = lat_val.clamp(0, lat_span - 1);

    let lng_val = finest_cell(longitude, FINAL_LNG_PRECISION).rem_euclid(lng_span);
    let lng_val = (lng_val + LONGITUDE_MAX_INT * FINAL_LNG_PRECISION).rem_euclid(lng_span);

    (lat_val, lng_val)
}

impl OpenLocationCode {
    /// Returns true if `code` is a valid shortened code (fewer than eight
    /// symbols before the separator).
    pub fn is_short(&self, code: &str) -> bool {
        if !self.is_valid(code) {
            return false;
        }
        matches!(code.bytes().position(|b| b == SEPARATOR), Some(sep) if sep < SEPARATOR_POSITION)
    }

    fn encode_integers(mut lat_val: i64, mut lng_val: i64, code_length: usize) -> String {
        let mut digits = [0u8; MAX_DIGIT_COUNT];

        if code_length > PAIR_CODE_LENGTH {
            for slot in digits[PAIR_CODE_LENGTH..].iter_mut().rev() {
                let lat_digit = lat_val % GRID_ROWS;
                let lng_digit = lng_val % GRID_COLUMNS;
                *slot = CODE_ALPHABET[(lat_digit * GRID_COLUMNS + lng_digit) as usize];
                lat_val /= GRID_ROWS;
                lng_val /= GRID_COLUMNS;
            }
        } else {
            lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH);
            lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH);
        }

        for pair in digits[..PAIR_CODE_LENGTH].chunks_exact_mut(2).rev() {
            pair[0] = CODE_ALPHABET[(lat_val % ENCODING_BASE) as usize];
            pair[1] = CODE_ALPHABET[(lng_val % ENCODING_BASE) as usize];
            lat_val /= ENCODING_BASE;
            lng_val /= ENCODING_BASE;
        }

        let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
        if code_length >= SEPARATOR_POSITION {
            code.extend(digits[..SEPARATOR_POSITION].iter().map(|&b| b as char));
            code.push(SEPARATOR as char);
            code.extend(digits[SEPARATOR_POSITION..code_length].iter().map(|&b| b as char));
        } else {
            code.extend(digits[..code_length].iter().map(|&b| b as char));
            code.extend(std::iter::repeat_n(
                PADDING as char,
                SEPARATOR_POSITION - code_length,
            ));
            code.push(SEPARATOR as char);
        }
        code
    }
}

impl GridCodec for OpenLocationCode {
    fn encode(
        &self,
        latitude: f64,
        longitude: f64,
        code_length: usize,
    ) -> Result<String, GridError> {
        if code_length < MIN_DIGIT_COUNT
            || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
        {
            return Err(GridError::InvalidCodeLength {
                length: code_length,
            });
        }
        if !latitude.is_finite() {
            return Err(GridError::InvalidCoordinate {
                axis: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() {
            return Err(GridError::InvalidCoordinate {
                axis: "longitude",
                value: longitude,
            });
        }

        let (lat_val, lng_val) = location_to_integers(latitude, longitude);
        Ok(Self::encode_integers(
            lat_val,
            lng_val,
            code_length.min(MAX_DIGIT_COUNT),
        ))
    }

    fn decode(&self, code: &str) -> Result<GridCell, GridError> {
        if !self.is_valid(code) {
            return Err(GridError::InvalidCode {
                code: code.to_string(),
            });
        }
        if !self.is_full(code) {
            return Err(GridError::NotFullCode {
                code: code.to_string(),
            });
        }

        let mut digits: Vec<i64> = code
            .bytes()
            .filter(|&b| b != SEPARATOR && b != PADDING)
            .filter_map(digit_value)
            .collect();
        digits.truncate(MAX_DIGIT_COUNT);

        let mut normal_lat = -LATITUDE_MAX_INT * PAIR_PRECISION;
        let mut normal_lng = -LONGITUDE_MAX_INT * PAIR_PRECISION;
        let pair_digits = digits.len().min(PAIR_CODE_LENGTH);
        let pair_count = pair_digits / 2;
        let mut place_value = PAIR_FIRST_PLACE_VALUE;
        for (i, pair) in digits[..pair_digits].chunks_exact(2).enumerate() {
            normal_lat += pair[0] * place_value;
            normal_lng += pair[1] * place_value;
            if i + 1 < pair_count {
                place_value /= ENCODING_BASE;
            }
        }
        let mut lat_precision = place_value as f64 / PAIR_PRECISION as f64;
        let mut lng_precision = place_value as f64 / PAIR_PRECISION as f64;

        let mut grid_lat = 0i64;
        let mut grid_lng = 0i64;
        if digits.len() > PAIR_CODE_LENGTH {
            let grid_digits = &digits[PAIR_CODE_LENGTH..];
            let mut row_place_value = GRID_LAT_FIRST_PLACE_VALUE;
            let mut col_place_value = GRID_LNG_FIRST_PLACE_VALUE;
            for (i, &digit) in grid_digits.iter().enumerate() {
                grid_lat += (digit / GRID_COLUMNS) * row_place_value;
                grid_lng += (digit % GRID_COLUMNS) * col_place_value;
                if i + 1 < grid_digits.len() {
                    row_place_value /= GRID_ROWS;
                    col_place_value /= GRID_COLUMNS;
                }
            }
            lat_precision = row_place_value as f64 / FINAL_LAT_PRECISION as f64;
            lng_precision = col_place_value as f64 / FINAL_LNG_PRECISION as f64;
        }

        let lat = normal_lat as f64 / PAIR_PRECISION as f64
            + grid_lat as f64 / FINAL_LAT_PRECISION as f64;
        let lng = normal_lng as f64 / PAIR_PRECISION as f64
            + grid_lng as f64 / FINAL_LNG_PRECISION as f64;

        Ok(GridCell::new(
            round_degrees(lat),
            round_degrees(lng),
            round_degrees(lat + lat_precision),
            round_degrees(lng + lng_precision),
            digits.len(),
        ))
    }

    fn is_valid(&self, code: &str) -> bool {
        let bytes = code.as_bytes();
        let Some(sep) = bytes.iter().position(|&b| b == SEPARATOR) else {
            return false;
        };
        if bytes.iter().rposition(|&b| b == SEPARATOR) != Some(sep) {
            return false;
        }
        if bytes.len() == 1 {
            return false;
        }
        if sep > SEPARATOR_POSITION || sep % 2 == 1 {
            return false;
        }

        if let Some(pad) = bytes.iter().position(|&b| b == PADDING) {
            // Padding is only allowed in full-length prefixes, never first.
            if sep < SEPARATOR_POSITION || pad == 0 {
                return false;
            }
            let run = bytes[pad..].iter().take_while(|&&b| b == PADDING).count();
            if bytes[pad + run..].contains(&PADDING) {
                return false;
            }
            if run % 2 == 1 || run > SEPARATOR_POSITION - 2 {
                return false;
            }
            if bytes[bytes.len() - 1] != SEPARATOR {
                return false;
            }
        }

        // A single symbol after the separator is never valid.
        if bytes.len() - sep - 1 == 1 {
            return false;
        }

        bytes
            .iter()
            .filter(|&&b| b != SEPARATOR && b != PADDING)
            .all(|&b| digit_value(b).is_some())
    }

    fn is_full(&self, code: &str) -> bool {
        if !self.is_valid(code) || self.is_short(code) {
            return false;
        }
        let bytes = code.as_bytes();

        let first_lat = digit_value(bytes[0]).map(|v| v * ENCODING_BASE);
        if first_lat.is_none_or(|v| v >= 2 * LATITUDE_MAX_INT) {
            return false;
        }
        if bytes.len() > 1 {
            let first_lng = digit_value(bytes[1]).map(|v| v * ENCODING_BASE);
            if first_lng.is_none_or(|v| v >= 2 * LONGITUDE_MAX_INT) {
                return false;
            }
        }
        true
    }
}
