//! Scanner for the UBID text format.
//!
//! ```text
//! ubid   = prefix "+" symbol* "-" offset "-" offset "-" offset "-" offset
//! prefix = 4*8 symbol
//! symbol = one of "23456789CFGHJMPQRVWX"
//! offset = "0" / nonzero-digit *digit
//! ```
//!
//! The whole input must match; offsets are bounded by [`MAX_OFFSET`].

use std::fmt;

use crate::error::DecodeError;
use crate::grid::olc::{CODE_ALPHABET, SEPARATOR as GRID_SEPARATOR};
use crate::limits::{MAX_OFFSET, MAX_PREFIX_SYMBOLS, MIN_PREFIX_SYMBOLS};
use crate::SEPARATOR;

/// A UBID split into its fields.
///
/// Offsets count grid cells from the centroid cell to the corresponding edge
/// of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UbidParts<'a> {
    /// Grid code of the cell containing the centroid.
    pub olc: &'a str,
    /// Cells from the centroid cell's northern edge to the box's.
    pub north: u64,
    /// Cells from the centroid cell's eastern edge to the box's.
    pub east: u64,
    /// Cells from the centroid cell's southern edge to the box's.
    pub south: u64,
    /// Cells from the centroid cell's western edge to the box's.
    pub west: u64,
}

impl<'a> UbidParts<'a> {
    /// Parses a UBID into its fields without consulting the grid.
    pub fn parse(code: &'a str) -> Result<Self, DecodeError> {
        parse(code)
    }
}

impl fmt::Display for UbidParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.olc,
            self.north,
            self.east,
            self.south,
            self.west,
            sep = SEPARATOR
        )
    }
}

/// Cursor over the bytes of a UBID.
#[derive(Debug, Clone)]
struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(code: &'a str) -> Self {
        Self {
            data: code.as_bytes(),
            pos: 0,
        }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consumes up to `max` grid symbols and returns how many were read.
    fn skip_symbols(&mut self, max: usize) -> usize {
        let mut count = 0;
        while count < max {
            match self.peek() {
                Some(b) if CODE_ALPHABET.contains(&b) => {
                    self.pos += 1;
                    count += 1;
                }
                _ => break,
            }
        }
        count
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), DecodeError> {
        if self.peek() != Some(byte) {
            return Err(DecodeError::Malformed {
                expected,
                position: self.pos,
            });
        }
        self.pos += 1;
        Ok(())
    }

    /// Reads a non-negative decimal without leading zeros.
    fn read_offset(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                return Ok(0);
            }
            Some(b'1'..=b'9') => {}
            _ => {
                return Err(DecodeError::Malformed {
                    expected: "offset digit",
                    position: self.pos,
                })
            }
        }

        let mut value: u64 = 0;
        while let Some(b @ b'0'..=b'9') = self.peek() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(b - b'0')))
                .filter(|v| *v <= MAX_OFFSET)
                .ok_or(DecodeError::OffsetOutOfRange {
                    field,
                    max: MAX_OFFSET,
                })?;
            self.pos += 1;
        }
        Ok(value)
    }

    fn read_separated_offset(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        self.expect(SEPARATOR as u8, "'-' separator")?;
        self.read_offset(field)
    }
}

/// Splits a UBID into its grid code and four offsets.
pub fn parse(code: &str) -> Result<UbidParts<'_>, DecodeError> {
    let mut scanner = Scanner::new(code);

    if scanner.skip_symbols(MAX_PREFIX_SYMBOLS) < MIN_PREFIX_SYMBOLS {
        return Err(DecodeError::Malformed {
            expected: "grid symbol",
            position: scanner.position(),
        });
    }
    scanner.expect(GRID_SEPARATOR, "'+' after grid prefix")?;
    scanner.skip_symbols(usize::MAX);
    // Only ASCII has been consumed, so this is a char boundary.
    let olc = &code[..scanner.position()];

    let north = scanner.read_separated_offset("north")?;
    let east = scanner.read_separated_offset("east")?;
    let south = scanner.read_separated_offset("south")?;
    let west = scanner.read_separated_offset("west")?;

    if !scanner.is_empty() {
        return Err(DecodeError::Malformed {
            expected: "end of code",
            position: scanner.position(),
        });
    }

    Ok(UbidParts {
        olc,
        north,
        east,
        south,
        west,
    })
}
