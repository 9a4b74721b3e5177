use thiserror::Error;

/// Errors returned by PNM header parsing and reading.
///
/// Note: this error type lives in an internal module; the example is
/// illustrative and not compiled as a public doctest.
///
/// # Examples
/// ```text
/// use rxmer_core::header::error::HeaderError;
///
/// let err = HeaderError::UnknownFileType { value: 0x2a };
/// assert!(err.to_string().contains("unknown PNM file type"));
/// ```
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("failed to read capture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("header too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid file magic: {found:02x?}")]
    BadMagic { found: [u8; 3] },
    #[error("unknown PNM file type: {value}")]
    UnknownFileType { value: u8 },
}
