use super::error::HeaderError;
use super::layout;

pub struct HeaderReader<'a> {
    bytes: &'a [u8],
}

impl<'a> HeaderReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), HeaderError> {
        if self.bytes.len() < needed {
            return Err(HeaderError::TooShort {
                needed,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, HeaderError> {
        self.bytes.get(offset).copied().ok_or(HeaderError::TooShort {
            needed: offset + 1,
            actual: self.bytes.len(),
        })
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, HeaderError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(HeaderError::TooShort {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], HeaderError> {
        self.bytes.get(range.clone()).ok_or(HeaderError::TooShort {
            needed: range.end,
            actual: self.bytes.len(),
        })
    }

    pub fn read_magic(&self) -> Result<[u8; 3], HeaderError> {
        let bytes = self.read_slice(layout::FILE_MAGIC_RANGE.clone())?;
        Ok([bytes[0], bytes[1], bytes[2]])
    }

    /// Reads the cable-modem MAC address as lowercase colon-separated hex.
    pub fn read_mac_string(&self) -> Result<String, HeaderError> {
        let bytes = self.read_slice(layout::CM_MAC_RANGE.clone())?;
        let octets: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Ok(octets.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderReader;

    #[test]
    fn read_u32_be_decodes_network_order() {
        let bytes = [0u8, 0, 0, 0, 0, 0, 0x66, 0x32, 0x3f, 0xc0];
        let reader = HeaderReader::new(&bytes);
        assert_eq!(reader.read_u32_be(6..10).unwrap(), 0x6632_3fc0);
    }

    #[test]
    fn reads_past_the_end_report_too_short() {
        let reader = HeaderReader::new(&[0u8; 4]);
        let err = reader.read_u8(9).unwrap_err();
        assert!(err.to_string().contains("header too short"));
    }

    #[test]
    fn mac_string_is_colon_separated_lowercase() {
        let mut bytes = vec![0u8; 17];
        bytes[11..17].copy_from_slice(&[0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
        let reader = HeaderReader::new(&bytes);
        assert_eq!(reader.read_mac_string().unwrap(), "00:1a:2b:3c:4d:5e");
    }
}
