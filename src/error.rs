//! Errors returned by the strict parsing and decoding functions.
//!
//! Simulating a color never fails; these only come out of the functions that
//! turn outside input into the types of this crate.

use thiserror::Error;

/// Error type for parsing and decoding colors and simulation variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name does not match any simulation variant.
    #[error("unknown simulation variant: {0:?}")]
    UnknownVariant(String),

    /// The color space identifier is not one of the supported spaces.
    #[error("unsupported color space id: {0}")]
    UnsupportedSpace(u8),

    /// A hex color had the wrong number of digits.
    #[error("invalid hex color length {0} (expected 3, 6 or 8 digits)")]
    InvalidHexLength(usize),

    /// A hex color contained a character that is not a hexadecimal digit.
    #[error("invalid hex digit: {0:?}")]
    InvalidHexDigit(char),
}

/// Result type for the fallible functions of this crate.
pub type Result<T> = std::result::Result<T, Error>;
