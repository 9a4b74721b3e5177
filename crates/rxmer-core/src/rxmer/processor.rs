use log::debug;

use crate::header::PnmDataSource;

use super::data::{RxMerData, RxMerDataView};
use super::error::RxMerError;

/// Two-state decoder driving a header's payload into [`RxMerData`].
///
/// A processor starts unprocessed. [`RxMerProcessor::process`] (or its alias
/// [`RxMerProcessor::run`]) moves it to the processed state; the JSON
/// accessors return [`RxMerError::NotProcessed`] before that transition.
pub struct RxMerProcessor<'a, S: PnmDataSource> {
    header: &'a S,
    data: Option<RxMerData>,
}

impl<'a, S: PnmDataSource> RxMerProcessor<'a, S> {
    pub fn new(header: &'a S) -> Self {
        Self { header, data: None }
    }

    /// Decodes the header's payload. A header without a payload yields an
    /// empty sequence, not an error. Reprocessing replaces the previous
    /// result.
    pub fn process(&mut self) {
        let data = match self.header.pnm_data() {
            Some(payload) => {
                debug!("processing RxMER payload: {} bytes", payload.len());
                RxMerData::from_payload(payload)
            }
            None => {
                debug!("header carries no RxMER payload");
                RxMerData::new(Vec::new())
            }
        };
        self.data = Some(data);
    }

    pub fn run(&mut self) {
        self.process();
    }

    pub fn data(&self) -> Option<&RxMerData> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<RxMerData> {
        self.data
    }

    pub fn view(&self) -> Result<RxMerDataView, RxMerError> {
        self.data.as_ref().ok_or(RxMerError::NotProcessed)?.view()
    }

    pub fn to_json(&self) -> Result<String, RxMerError> {
        self.data
            .as_ref()
            .ok_or(RxMerError::NotProcessed)?
            .to_json()
    }
}
