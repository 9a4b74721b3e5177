//! Core library for decoding DOCSIS PNM downstream RxMER captures.
//!
//! This crate implements the offline decode pipeline used by the CLI: the
//! header module parses the PNM capture-file header and hands the raw payload
//! to the measurement layer, which decodes per-subcarrier RxMER readings and
//! renders their JSON views. Decoding is byte-oriented and side-effect free;
//! all I/O is isolated in [`PnmHeader::from_path`]. Wire-format conventions
//! are captured in readers so parsers stay minimal.
//!
//! Invariants:
//! - Measured readings always lie in `[0.0, 63.5]` dB; the reserved octet
//!   `0xFF` decodes to an explicit no-measurement state.
//! - A decoded sequence preserves the exact subcarrier order of the payload.
//! - The sequence JSON view carries each per-value object as an encoded
//!   string; that nesting is part of the wire contract.
//!
//! Version française (résumé):
//! Cette crate fournit le décodage hors ligne des captures RxMER : en-tête ->
//! charge utile -> lectures calibrées en quarts de dB -> vue JSON imbriquée.
//! Les E/S restent dans le module d'en-tête, les conventions de format dans
//! les `reader`. Garanties : ordre des sous-porteuses préservé, plage
//! `[0.0, 63.5]` dB, octet réservé `0xFF` traité comme absence de mesure.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use rxmer_core::decode_rxmer_file;
//!
//! let data = decode_rxmer_file(Path::new("capture.pnm"))?;
//! println!("subcarriers: {}", data.len());
//! # Ok::<(), rxmer_core::DecodeError>(())
//! ```

use std::path::Path;

use thiserror::Error;

mod header;
mod rxmer;

pub use header::{
    HeaderError, HeaderSummary, PnmDataSource, PnmFileType, PnmHeader, parse_pnm_header,
};
pub use rxmer::layout::{MAX_REPORTED_DB, NO_MEASUREMENT};
pub use rxmer::{RxMerData, RxMerDataView, RxMerError, RxMerProcessor, RxMerSample, RxMerValue};

/// Errors returned by the whole-file decode entry point.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("header error: {0}")]
    Header(#[from] HeaderError),
    #[error("not a downstream RxMER capture: file type is {found}")]
    UnexpectedFileType { found: PnmFileType },
}

/// Decodes a PNM downstream RxMER capture file into its measurement sequence.
///
/// The file must carry the `ds_rx_mer` file type; other capture types are
/// rejected rather than misread. A capture without payload bytes decodes to
/// an empty sequence.
pub fn decode_rxmer_file(path: &Path) -> Result<RxMerData, DecodeError> {
    let header = PnmHeader::from_path(path)?;
    if header.file_type() != PnmFileType::DsRxMer {
        return Err(DecodeError::UnexpectedFileType {
            found: header.file_type(),
        });
    }

    let mut processor = RxMerProcessor::new(&header);
    processor.run();
    Ok(processor.into_data().unwrap_or_default())
}
