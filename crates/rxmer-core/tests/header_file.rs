use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rxmer_core::{
    DecodeError, HeaderError, PnmDataSource, PnmFileType, PnmHeader, decode_rxmer_file,
};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

#[test]
fn header_reads_fixture_fields() {
    let path = repo_root()
        .join("tests")
        .join("golden")
        .join("basic")
        .join("input.pnm");
    let header = PnmHeader::from_path(&path).unwrap();

    assert_eq!(header.file_type(), PnmFileType::DsRxMer);
    assert_eq!(header.major_version(), 1);
    assert_eq!(header.minor_version(), 0);
    assert_eq!(header.channel_id(), 33);
    assert_eq!(header.cm_mac(), "00:1a:2b:3c:4d:5e");
    assert_eq!(header.pnm_data().map(|d| d.len()), Some(4));

    let summary = header.summary();
    assert_eq!(summary.capture_time.as_deref(), Some("2024-05-01T12:00:00Z"));
    assert_eq!(summary.data_bytes, 4);
}

#[test]
fn header_rejects_truncated_file() {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("rxmer_truncated_{unique}.pnm"));

    fs::write(&path, b"PNN\x04").unwrap();
    let err = match PnmHeader::from_path(&path) {
        Ok(_) => panic!("expected truncated capture to be rejected"),
        Err(err) => err,
    };
    let _ = fs::remove_file(&path);

    assert!(matches!(err, HeaderError::TooShort { .. }));
}

#[test]
fn decode_rejects_other_capture_types() {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("rxmer_histogram_{unique}.pnm"));

    // Valid header, but a downstream histogram capture instead of RxMER.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"PNN");
    bytes.extend_from_slice(&[5, 1, 0]);
    bytes.extend_from_slice(&1_714_564_800u32.to_be_bytes());
    bytes.push(33);
    bytes.extend_from_slice(&[0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
    bytes.extend_from_slice(&[1, 2, 3, 4]);
    fs::write(&path, bytes).unwrap();

    let err = match decode_rxmer_file(&path) {
        Ok(_) => panic!("expected non-RxMER capture to be rejected"),
        Err(err) => err,
    };
    let _ = fs::remove_file(&path);

    assert!(matches!(
        err,
        DecodeError::UnexpectedFileType {
            found: PnmFileType::DsHistogram
        }
    ));
}

#[test]
fn header_rejects_missing_file() {
    let path = repo_root()
        .join("tests")
        .join("golden")
        .join("basic")
        .join("does_not_exist.pnm");
    let err = match PnmHeader::from_path(&path) {
        Ok(_) => panic!("expected missing capture to be rejected"),
        Err(err) => err,
    };

    assert!(matches!(err, HeaderError::Io(_)));
}
