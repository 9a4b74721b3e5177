use log::debug;
use serde::Serialize;

use super::error::RxMerError;
use super::value::RxMerValue;

/// Ordered, immutable sequence of decoded subcarrier readings.
///
/// The sequence preserves payload order exactly; subcarrier index is the
/// position in the sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RxMerData {
    values: Vec<RxMerValue>,
}

impl RxMerData {
    pub fn new(values: Vec<RxMerValue>) -> Self {
        debug!("RxMER data length: {}", values.len());
        Self { values }
    }

    /// Decodes every payload octet in order. One octet, one reading.
    pub fn from_payload(payload: &[u8]) -> Self {
        Self::new(
            payload
                .iter()
                .copied()
                .map(RxMerValue::from_raw_byte)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[RxMerValue] {
        &self.values
    }

    /// Builds the serializable view. Each reading is rendered to its own JSON
    /// string; the sequence document carries those strings, not inline
    /// objects. Downstream consumers parse the strings themselves.
    pub fn view(&self) -> Result<RxMerDataView, RxMerError> {
        let values = self
            .values
            .iter()
            .map(RxMerValue::to_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RxMerDataView { values })
    }

    pub fn to_json(&self) -> Result<String, RxMerError> {
        Ok(serde_json::to_string(&self.view()?)?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RxMerDataView {
    pub values: Vec<String>,
}
