use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::error::RxMerError;
use super::layout;

/// One subcarrier sample before decoding.
///
/// `RawByte` carries the quarter-dB octet as captured on the wire.
/// `CalibratedDb` carries a value that has already been scaled to decibels
/// by an upstream stage and only needs range normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RxMerSample {
    RawByte(u8),
    CalibratedDb(f64),
}

/// Decoded RxMER reading for one subcarrier.
///
/// The wire format reserves the octet `0xFF` for subcarriers that carry no
/// measurement (excluded bands, PLC placeholders); every other octet encodes
/// quarter-dB steps, so decoded readings always lie in `[0.0, 63.5]` dB.
///
/// # Examples
/// ```
/// use rxmer_core::{RxMerSample, RxMerValue};
///
/// let value = RxMerValue::decode(RxMerSample::RawByte(0x41))?;
/// assert_eq!(value.db(), Some(16.25));
/// assert!(value.is_measurement());
/// # Ok::<(), rxmer_core::RxMerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RxMerValue {
    Measured(f64),
    NoMeasurement,
}

impl RxMerValue {
    /// Decodes one sample into a reading.
    ///
    /// Raw bytes never fail: `0xFF` becomes [`RxMerValue::NoMeasurement`] and
    /// everything else is scaled by quarter-dB steps. Calibrated inputs are
    /// clamped into the reportable range; non-finite inputs are rejected.
    pub fn decode(sample: RxMerSample) -> Result<Self, RxMerError> {
        match sample {
            RxMerSample::RawByte(byte) => Ok(Self::from_raw_byte(byte)),
            RxMerSample::CalibratedDb(db) if db.is_finite() => Ok(RxMerValue::Measured(
                db.clamp(layout::MIN_REPORTED_DB, layout::MAX_REPORTED_DB),
            )),
            RxMerSample::CalibratedDb(db) => Err(RxMerError::InvalidValue { value: db }),
        }
    }

    pub fn from_raw_byte(byte: u8) -> Self {
        if byte == layout::NO_MEASUREMENT {
            return RxMerValue::NoMeasurement;
        }
        RxMerValue::Measured(f64::from(byte) / layout::STEPS_PER_DB)
    }

    pub fn is_measurement(&self) -> bool {
        matches!(self, RxMerValue::Measured(_))
    }

    /// True only when the reading sits exactly at the 63.5 dB ceiling.
    pub fn is_max_value(&self) -> bool {
        matches!(self, RxMerValue::Measured(db) if *db == layout::MAX_REPORTED_DB)
    }

    pub fn db(&self) -> Option<f64> {
        match *self {
            RxMerValue::Measured(db) => Some(db),
            RxMerValue::NoMeasurement => None,
        }
    }

    pub fn to_json(&self) -> Result<String, RxMerError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for RxMerValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RxMerValue", 3)?;
        match *self {
            RxMerValue::Measured(db) => state.serialize_field("value", &db)?,
            // The reserved octet is reported verbatim, not as a decibel figure.
            RxMerValue::NoMeasurement => {
                state.serialize_field("value", &u32::from(layout::NO_MEASUREMENT))?;
            }
        }
        state.serialize_field("isMaxValue", &self.is_max_value())?;
        state.serialize_field("isMeasurement", &self.is_measurement())?;
        state.end()
    }
}
