//! Validation of UBID text and code areas.
//!
//! Validation never fails with an error: it answers yes or no, or names the
//! problem. Use [`crate::decode`] when the reason for rejecting a UBID
//! matters.

use crate::codec::grammar;
use crate::grid::{GridCodec, OpenLocationCode};
use crate::model::CodeArea;

/// Returns true if `code` is a UBID on `grid` that decodes successfully.
///
/// The code must match the UBID grammar, and its grid code must be valid and
/// full (decodable without a reference location).
pub(crate) fn is_valid_with<G: GridCodec>(grid: &G, code: Option<&str>) -> bool {
    let Some(code) = code else {
        return false;
    };
    match grammar::parse(code) {
        Ok(parts) => grid.is_valid(parts.olc) && grid.is_full(parts.olc),
        Err(_) => false,
    }
}

/// Returns true if `code` is a valid UBID on the Open Location Code grid.
///
/// `None` (an absent code) is never valid.
pub fn is_valid<'a>(code: impl Into<Option<&'a str>>) -> bool {
    is_valid_with(&OpenLocationCode, code.into())
}

/// Validates a code area before encoding.
///
/// This checks shape constraints the type system cannot express:
/// - Finite bounding box coordinates
/// - A supported code version
/// - A centroid cell with finite center, positive size and code length
pub fn validate_code_area(area: &CodeArea) -> Option<&'static str> {
    area.validate()
}
