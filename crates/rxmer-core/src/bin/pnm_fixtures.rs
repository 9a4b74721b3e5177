use std::fs;
use std::path::{Path, PathBuf};

const FILE_MAGIC: &[u8; 3] = b"PNN";
const FILE_MAGIC_RANGE: std::ops::Range<usize> = 0..3;
const FILE_TYPE_OFFSET: usize = 3;
const MAJOR_VERSION_OFFSET: usize = 4;
const MINOR_VERSION_OFFSET: usize = 5;
const CAPTURE_TIME_RANGE: std::ops::Range<usize> = 6..10;
const CHANNEL_ID_OFFSET: usize = 10;
const CM_MAC_RANGE: std::ops::Range<usize> = 11..17;
const HEADER_LEN: usize = 17;

const FILE_TYPE_DS_RX_MER: u8 = 4;
const NO_MEASUREMENT: u8 = 0xFF;

// 2024-05-01T12:00:00Z
const CAPTURE_TIME: u32 = 1_714_564_800;
const CHANNEL_ID: u8 = 33;
const CM_MAC: [u8; 6] = [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e];

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");
    write_fixture(&root.join("basic").join("input.pnm"), &[0, 4, 254, 255])?;
    write_fixture(&root.join("empty_payload").join("input.pnm"), &[])?;
    write_fixture(
        &root.join("exclusion_band").join("input.pnm"),
        &exclusion_band_payload(),
    )?;
    Ok(())
}

// Plateau of mid-30s dB readings with a run of reserved octets in the middle,
// the shape a PLC exclusion band leaves in a real capture.
fn exclusion_band_payload() -> Vec<u8> {
    let mut payload = Vec::new();
    payload.extend_from_slice(&[150, 152, 151, 153, 150, 149, 152, 154]);
    payload.extend(std::iter::repeat(NO_MEASUREMENT).take(8));
    payload.extend_from_slice(&[148, 147, 149, 150, 146, 148, 151, 152]);
    payload
}

fn write_fixture(path: &Path, payload: &[u8]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }

    let bytes = build_capture(payload);
    fs::write(path, bytes).map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
    Ok(())
}

fn build_capture(payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_LEN];
    bytes[FILE_MAGIC_RANGE.clone()].copy_from_slice(FILE_MAGIC);
    bytes[FILE_TYPE_OFFSET] = FILE_TYPE_DS_RX_MER;
    bytes[MAJOR_VERSION_OFFSET] = 1;
    bytes[MINOR_VERSION_OFFSET] = 0;
    bytes[CAPTURE_TIME_RANGE.clone()].copy_from_slice(&CAPTURE_TIME.to_be_bytes());
    bytes[CHANNEL_ID_OFFSET] = CHANNEL_ID;
    bytes[CM_MAC_RANGE.clone()].copy_from_slice(&CM_MAC);
    bytes.extend_from_slice(payload);
    bytes
}
