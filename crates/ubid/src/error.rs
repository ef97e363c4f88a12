//! Error types for UBID decoding, encoding and the grid backend.

use thiserror::Error;

/// Error kinds a caller can branch on without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The UBID text is absent, malformed, or names an unusable grid cell.
    InvalidUbid,
    /// A code area handed to the encoder is not well formed.
    InvalidCodeArea,
    /// The grid backend refused the request (e.g. bad code length).
    GridCodec,
}

impl ErrorCode {
    /// Returns the canonical name of the error kind (e.g., "InvalidUBID").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidUbid => "InvalidUBID",
            ErrorCode::InvalidCodeArea => "InvalidCodeArea",
            ErrorCode::GridCodec => "GridCodec",
        }
    }
}

/// Error raised by a grid backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid code length: {length}")]
    InvalidCodeLength { length: usize },

    #[error("{axis} {value} is not a finite number")]
    InvalidCoordinate { axis: &'static str, value: f64 },

    #[error("invalid grid code: {code:?}")]
    InvalidCode { code: String },

    #[error("grid code {code:?} is not a full code")]
    NotFullCode { code: String },
}

/// Error during UBID decoding.
///
/// Every variant is an `InvalidUBID` in terms of [`ErrorCode`]; the variants
/// only differ in how much they can say about the cause.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("invalid UBID: no code given")]
    Missing,

    #[error("invalid UBID: expected {expected} at byte {position}")]
    Malformed {
        expected: &'static str,
        position: usize,
    },

    #[error("invalid UBID: {field} offset exceeds maximum {max}")]
    OffsetOutOfRange { field: &'static str, max: u64 },

    #[error("invalid UBID: {0}")]
    Grid(GridError),
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidUbid
    }
}

/// Error during UBID encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("invalid UBID code area: {reason}")]
    InvalidCodeArea { reason: &'static str },
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EncodeError::Grid(_) => ErrorCode::GridCodec,
            EncodeError::InvalidCodeArea { .. } => ErrorCode::InvalidCodeArea,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_are_invalid_ubid() {
        let errors = [
            DecodeError::Missing,
            DecodeError::Malformed { expected: "separator", position: 3 },
            DecodeError::OffsetOutOfRange { field: "north", max: 10 },
            DecodeError::Grid(GridError::NotFullCode { code: "9QCJ+2V".to_string() }),
        ];
        for err in errors {
            assert_eq!(err.code(), ErrorCode::InvalidUbid);
            assert!(err.to_string().starts_with("invalid UBID"), "{}", err);
        }
    }

    #[test]
    fn test_grid_error_is_transparent() {
        let grid = GridError::InvalidCodeLength { length: 3 };
        let err = EncodeError::from(grid.clone());
        assert_eq!(err.to_string(), grid.to_string());
        assert_eq!(err.code(), ErrorCode::GridCodec);
        assert_eq!(err, EncodeError::Grid(grid));
    }

    #[test]
    fn test_error_code_names() {
        assert_eq!(ErrorCode::InvalidUbid.code(), "InvalidUBID");
        assert_eq!(ErrorCode::InvalidCodeArea.code(), "InvalidCodeArea");
        assert_eq!(
            EncodeError::InvalidCodeArea { reason: "x" }.code(),
            ErrorCode::InvalidCodeArea
        );
    }
}
