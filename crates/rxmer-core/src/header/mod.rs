//! PNM capture-file header parsing.
//!
//! A capture file starts with a fixed 17-byte header: file magic, file-type
//! octet, format version, capture timestamp, downstream channel id and the
//! cable-modem MAC. Everything after the header is the measurement payload,
//! carried opaquely for the measurement modules to decode.
//!
//! Field offsets are defined in `layout`, safe reads in `reader`.
//!
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::HeaderError;
pub use parser::{HeaderSummary, PnmFileType, PnmHeader, parse_pnm_header};

/// Provider of a raw RxMER payload.
///
/// [`PnmHeader`] is the file-backed implementation; tests substitute in-memory
/// stubs. `None` means no payload has been acquired at all, which decodes to
/// an empty sequence rather than an error.
pub trait PnmDataSource {
    fn pnm_data(&self) -> Option<&[u8]>;
}
