//! A substitute grid for tests.
//!
//! Cells are squares of a fixed power-of-two size, so all cell corners are
//! exact in binary floating point. Codes spell the row and column index as
//! four base-20 symbols each, followed by `+`.

use crate::error::GridError;
use crate::grid::olc::CODE_ALPHABET;
use crate::grid::{GridCell, GridCodec, LATITUDE_MAX, LONGITUDE_MAX};

const INDEX_SYMBOLS: usize = 4;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SquareGrid {
    size: f64,
}

impl SquareGrid {
    /// The only code length this grid supports.
    pub(crate) const CODE_LENGTH: usize = 2 * INDEX_SYMBOLS;

    pub(crate) fn new(size: f64) -> Self {
        Self { size }
    }

    fn write_index(code: &mut String, mut index: usize) {
        let mut symbols = [0u8; INDEX_SYMBOLS];
        for slot in symbols.iter_mut().rev() {
            *slot = CODE_ALPHABET[index % 20];
            index /= 20;
        }
        code.extend(symbols.iter().map(|&b| b as char));
    }

    fn read_index(symbols: &[u8]) -> Option<usize> {
        symbols.iter().try_fold(0usize, |acc, b| {
            let digit = CODE_ALPHABET.iter().position(|s| s == b)?;
            Some(acc * 20 + digit)
        })
    }
}

impl GridCodec for SquareGrid {
    fn encode(
        &self,
        latitude: f64,
        longitude: f64,
        code_length: usize,
    ) -> Result<String, GridError> {
        if code_length != Self::CODE_LENGTH {
            return Err(GridError::InvalidCodeLength {
                length: code_length,
            });
        }
        let row = ((latitude + LATITUDE_MAX) / self.size).floor() as usize;
        let col = ((longitude + LONGITUDE_MAX) / self.size).floor() as usize;

        let mut code = String::with_capacity(Self::CODE_LENGTH + 1);
        Self::write_index(&mut code, row);
        Self::write_index(&mut code, col);
        code.push('+');
        Ok(code)
    }

    fn decode(&self, code: &str) -> Result<GridCell, GridError> {
        let invalid = || GridError::InvalidCode {
            code: code.to_string(),
        };
        if !self.is_valid(code) {
            return Err(invalid());
        }
        let bytes = code.as_bytes();
        let row = Self::read_index(&bytes[..INDEX_SYMBOLS]).ok_or_else(invalid)?;
        let col = Self::read_index(&bytes[INDEX_SYMBOLS..Self::CODE_LENGTH]).ok_or_else(invalid)?;

        let latitude_lo = row as f64 * self.size - LATITUDE_MAX;
        let longitude_lo = col as f64 * self.size - LONGITUDE_MAX;
        Ok(GridCell::new(
            latitude_lo,
            longitude_lo,
            latitude_lo + self.size,
            longitude_lo + self.size,
            Self::CODE_LENGTH,
        ))
    }

    fn is_valid(&self, code: &str) -> bool {
        let bytes = code.as_bytes();
        bytes.len() == Self::CODE_LENGTH + 1
            && bytes[Self::CODE_LENGTH] == b'+'
            && bytes[..Self::CODE_LENGTH]
                .iter()
                .all(|b| CODE_ALPHABET.contains(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_grid_roundtrip() {
        let grid = SquareGrid::new(0.25);
        let code = grid.encode(10.1, 20.1, SquareGrid::CODE_LENGTH).unwrap();
        assert_eq!(code, "23222422+");

        let cell = grid.decode(&code).unwrap();
        assert_eq!(cell.latitude_lo, 10.0);
        assert_eq!(cell.longitude_hi, 20.25);
        assert_eq!(cell.latitude_center, 10.125);
    }
}
