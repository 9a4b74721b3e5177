pub const FILE_MAGIC_RANGE: std::ops::Range<usize> = 0..3;
pub const FILE_TYPE_OFFSET: usize = 3;
pub const MAJOR_VERSION_OFFSET: usize = 4;
pub const MINOR_VERSION_OFFSET: usize = 5;
pub const CAPTURE_TIME_RANGE: std::ops::Range<usize> = 6..10;
pub const CHANNEL_ID_OFFSET: usize = 10;
pub const CM_MAC_RANGE: std::ops::Range<usize> = 11..17;

pub const FILE_MAGIC: &[u8; 3] = b"PNN";

pub const HEADER_LEN: usize = CM_MAC_RANGE.end;
