//! Downstream RxMER measurement decoding.
//!
//! The value decoder turns raw capture octets into calibrated quarter-dB
//! readings and singles out the reserved no-measurement octet. Sequences keep
//! payload order and render the nested JSON view; the processor ties a parsed
//! header to its decoded sequence with an explicit processed/unprocessed
//! state.
//!
//! Scaling constants and the reserved octet are defined in `layout`.
//!
pub mod data;
pub mod error;
pub mod layout;
pub mod processor;
pub mod value;

pub use data::{RxMerData, RxMerDataView};
pub use error::RxMerError;
pub use processor::RxMerProcessor;
pub use value::{RxMerSample, RxMerValue};
