use std::fs;
use std::path::Path;

use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::PnmDataSource;
use super::error::HeaderError;
use super::layout;
use super::reader::HeaderReader;

/// Capture file types keyed by the header's file-type octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PnmFileType {
    SymbolCapture,
    OfdmChannelEstimate,
    ConstellationDisplay,
    DsRxMer,
    DsHistogram,
    UsPreEqualization,
    FecSummary,
    SpectrumAnalysis,
}

impl PnmFileType {
    pub fn from_octet(value: u8) -> Option<Self> {
        match value {
            1 => Some(PnmFileType::SymbolCapture),
            2 => Some(PnmFileType::OfdmChannelEstimate),
            3 => Some(PnmFileType::ConstellationDisplay),
            4 => Some(PnmFileType::DsRxMer),
            5 => Some(PnmFileType::DsHistogram),
            6 => Some(PnmFileType::UsPreEqualization),
            7 => Some(PnmFileType::FecSummary),
            8 => Some(PnmFileType::SpectrumAnalysis),
            _ => None,
        }
    }

    pub fn octet(self) -> u8 {
        match self {
            PnmFileType::SymbolCapture => 1,
            PnmFileType::OfdmChannelEstimate => 2,
            PnmFileType::ConstellationDisplay => 3,
            PnmFileType::DsRxMer => 4,
            PnmFileType::DsHistogram => 5,
            PnmFileType::UsPreEqualization => 6,
            PnmFileType::FecSummary => 7,
            PnmFileType::SpectrumAnalysis => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PnmFileType::SymbolCapture => "symbol_capture",
            PnmFileType::OfdmChannelEstimate => "ofdm_channel_estimate",
            PnmFileType::ConstellationDisplay => "constellation_display",
            PnmFileType::DsRxMer => "ds_rx_mer",
            PnmFileType::DsHistogram => "ds_histogram",
            PnmFileType::UsPreEqualization => "us_pre_equalization",
            PnmFileType::FecSummary => "fec_summary",
            PnmFileType::SpectrumAnalysis => "spectrum_analysis",
        }
    }
}

impl std::fmt::Display for PnmFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed PNM capture-file header plus the measurement payload that follows
/// it. The payload is kept as raw bytes; decoding belongs to the measurement
/// modules.
#[derive(Debug, Clone)]
pub struct PnmHeader {
    file_type: PnmFileType,
    major_version: u8,
    minor_version: u8,
    capture_time: u32,
    channel_id: u8,
    cm_mac: String,
    data: Vec<u8>,
}

impl PnmHeader {
    /// Reads and parses a capture file from disk.
    pub fn from_path(path: &Path) -> Result<Self, HeaderError> {
        let bytes = fs::read(path)?;
        parse_pnm_header(&bytes)
    }

    pub fn file_type(&self) -> PnmFileType {
        self.file_type
    }

    pub fn major_version(&self) -> u8 {
        self.major_version
    }

    pub fn minor_version(&self) -> u8 {
        self.minor_version
    }

    /// Capture timestamp as seconds since the Unix epoch.
    pub fn capture_time(&self) -> u32 {
        self.capture_time
    }

    pub fn channel_id(&self) -> u8 {
        self.channel_id
    }

    pub fn cm_mac(&self) -> &str {
        &self.cm_mac
    }

    pub fn summary(&self) -> HeaderSummary {
        HeaderSummary {
            file_type: self.file_type,
            major_version: self.major_version,
            minor_version: self.minor_version,
            capture_time: capture_time_to_rfc3339(self.capture_time),
            channel_id: self.channel_id,
            cm_mac: self.cm_mac.clone(),
            data_bytes: self.data.len() as u64,
        }
    }
}

impl PnmDataSource for PnmHeader {
    fn pnm_data(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

/// Serializable header overview for reports and the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderSummary {
    pub file_type: PnmFileType,
    pub major_version: u8,
    pub minor_version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_time: Option<String>,
    pub channel_id: u8,
    pub cm_mac: String,
    pub data_bytes: u64,
}

pub fn parse_pnm_header(bytes: &[u8]) -> Result<PnmHeader, HeaderError> {
    let reader = HeaderReader::new(bytes);
    reader.require_len(layout::HEADER_LEN)?;

    let magic = reader.read_magic()?;
    if &magic != layout::FILE_MAGIC {
        return Err(HeaderError::BadMagic { found: magic });
    }

    let file_type_octet = reader.read_u8(layout::FILE_TYPE_OFFSET)?;
    let file_type = PnmFileType::from_octet(file_type_octet).ok_or(HeaderError::UnknownFileType {
        value: file_type_octet,
    })?;

    let major_version = reader.read_u8(layout::MAJOR_VERSION_OFFSET)?;
    let minor_version = reader.read_u8(layout::MINOR_VERSION_OFFSET)?;
    let capture_time = reader.read_u32_be(layout::CAPTURE_TIME_RANGE.clone())?;
    let channel_id = reader.read_u8(layout::CHANNEL_ID_OFFSET)?;
    let cm_mac = reader.read_mac_string()?;

    Ok(PnmHeader {
        file_type,
        major_version,
        minor_version,
        capture_time,
        channel_id,
        cm_mac,
        data: bytes[layout::HEADER_LEN..].to_vec(),
    })
}

fn capture_time_to_rfc3339(epoch: u32) -> Option<String> {
    OffsetDateTime::from_unix_timestamp(i64::from(epoch))
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}

#[cfg(test)]
mod tests {
    use super::{PnmFileType, parse_pnm_header};
    use crate::header::PnmDataSource;
    use crate::header::error::HeaderError;
    use crate::header::layout;

    fn sample_header_bytes(file_type: u8, payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0u8; layout::HEADER_LEN];
        bytes[layout::FILE_MAGIC_RANGE.clone()].copy_from_slice(layout::FILE_MAGIC);
        bytes[layout::FILE_TYPE_OFFSET] = file_type;
        bytes[layout::MAJOR_VERSION_OFFSET] = 1;
        bytes[layout::MINOR_VERSION_OFFSET] = 0;
        bytes[layout::CAPTURE_TIME_RANGE.clone()]
            .copy_from_slice(&1_700_000_000u32.to_be_bytes());
        bytes[layout::CHANNEL_ID_OFFSET] = 33;
        bytes[layout::CM_MAC_RANGE.clone()]
            .copy_from_slice(&[0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn parse_valid_header() {
        let bytes = sample_header_bytes(4, &[0, 4, 254, 255]);
        let header = parse_pnm_header(&bytes).unwrap();

        assert_eq!(header.file_type(), PnmFileType::DsRxMer);
        assert_eq!(header.major_version(), 1);
        assert_eq!(header.minor_version(), 0);
        assert_eq!(header.capture_time(), 1_700_000_000);
        assert_eq!(header.channel_id(), 33);
        assert_eq!(header.cm_mac(), "00:1a:2b:3c:4d:5e");
        assert_eq!(header.pnm_data(), Some(&[0u8, 4, 254, 255][..]));
    }

    #[test]
    fn summary_formats_capture_time_as_rfc3339() {
        let bytes = sample_header_bytes(4, &[1, 2, 3]);
        let summary = parse_pnm_header(&bytes).unwrap().summary();

        assert_eq!(summary.capture_time.as_deref(), Some("2023-11-14T22:13:20Z"));
        assert_eq!(summary.data_bytes, 3);
        assert_eq!(summary.cm_mac, "00:1a:2b:3c:4d:5e");
    }

    #[test]
    fn parse_bad_magic() {
        let mut bytes = sample_header_bytes(4, &[]);
        bytes[0] = b'X';
        let err = parse_pnm_header(&bytes).unwrap_err();
        assert!(matches!(err, HeaderError::BadMagic { .. }));
    }

    #[test]
    fn parse_unknown_file_type() {
        let bytes = sample_header_bytes(0x2a, &[]);
        let err = parse_pnm_header(&bytes).unwrap_err();
        assert!(matches!(err, HeaderError::UnknownFileType { value: 0x2a }));
    }

    #[test]
    fn parse_short_header() {
        let bytes = vec![0u8; layout::HEADER_LEN - 1];
        let err = parse_pnm_header(&bytes).unwrap_err();
        assert!(err.to_string().contains("header too short"));
    }

    #[test]
    fn file_type_octets_round_trip() {
        for octet in 1u8..=8 {
            let file_type = PnmFileType::from_octet(octet).unwrap();
            assert_eq!(file_type.octet(), octet);
        }
        assert_eq!(PnmFileType::from_octet(0), None);
        assert_eq!(PnmFileType::from_octet(9), None);
    }

    #[test]
    fn file_type_serializes_like_display() {
        let json = serde_json::to_value(PnmFileType::DsRxMer).unwrap();
        assert_eq!(json, serde_json::json!("ds_rx_mer"));
        assert_eq!(PnmFileType::DsRxMer.to_string(), "ds_rx_mer");
    }
}
