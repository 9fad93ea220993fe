use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use super::calibrationcase::{
    CalibrationCase,
    CalibrationCaseJsonProp
};
use super::calibrationerror::CalibrationError;

/// The historical cases the residual curve is fitted against. Loaded once at
/// startup and immutable afterwards.
#[derive(Debug)]
pub struct CalibrationSet {
    cases: Vec<CalibrationCase>,
}

impl CalibrationSet {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CalibrationSet, CalibrationError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CalibrationSet, CalibrationError> {
        let props: Vec<CalibrationCaseJsonProp> = serde_json::from_reader(reader)?;
        let cases: Vec<CalibrationCase> = props
            .into_iter()
            .map(CalibrationCaseJsonProp::into_case)
            .collect();
        tracing::info!(cases = cases.len(), "calibration dataset loaded");
        Ok(CalibrationSet { cases })
    }

    pub fn cases(&self) -> &[CalibrationCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
