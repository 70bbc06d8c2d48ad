//! Conversion of raw prediction records into planning candidates.
//!
//! Records arrive with every field nullable. Anything the planner cannot
//! route is rejected here, before planning, and logged.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RecordError;
use crate::model::{CandidateBin, Coordinate};

/// A prediction row as served by the predictions API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BinRecord {
    pub bin_id: Option<String>,
    pub location_name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub predicted_fill_percent: Option<f64>,
    /// ISO-8601 timestamp, passed through untouched.
    pub predicted_full_at: Option<String>,
    /// ISO-8601 timestamp, passed through untouched.
    pub recorded_at: Option<String>,
}

impl BinRecord {
    pub fn validate(&self) -> Result<CandidateBin, RecordError> {
        let bin_id = match self.bin_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => return Err(RecordError::MissingBinId),
        };
        let lat = self.lat.ok_or(RecordError::MissingLatitude)?;
        let lon = self.lon.ok_or(RecordError::MissingLongitude)?;
        let location = Coordinate::new(lat, lon);
        if !location.is_finite() {
            return Err(RecordError::NonFiniteCoordinate);
        }
        let fill = self.predicted_fill_percent.ok_or(RecordError::MissingFill)?;
        if !fill.is_finite() {
            return Err(RecordError::NonFiniteFill);
        }

        Ok(CandidateBin {
            bin_id,
            location,
            predicted_fill_percent: fill,
        })
    }
}

impl TryFrom<&BinRecord> for CandidateBin {
    type Error = RecordError;

    fn try_from(record: &BinRecord) -> Result<Self, Self::Error> {
        record.validate()
    }
}

/// A record dropped during intake.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position in the input slice.
    pub index: usize,
    pub bin_id: Option<String>,
    pub error: RecordError,
}

/// Outcome of [`into_candidates`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intake {
    pub candidates: Vec<CandidateBin>,
    pub rejected: Vec<RejectedRecord>,
}

/// Validate records in order, splitting them into candidates and rejects.
pub fn into_candidates(records: &[BinRecord]) -> Intake {
    let mut intake = Intake::default();

    for (index, record) in records.iter().enumerate() {
        match record.validate() {
            Ok(candidate) => intake.candidates.push(candidate),
            Err(error) => {
                warn!(index, bin_id = ?record.bin_id, %error, "dropping prediction record");
                intake.rejected.push(RejectedRecord {
                    index,
                    bin_id: record.bin_id.clone(),
                    error,
                });
            }
        }
    }

    intake
}

/// Keep the first record per bin id.
///
/// Expects records ordered latest first, so the newest prediction of each
/// bin survives. Records without an id are kept for [`into_candidates`] to
/// reject.
pub fn latest_per_bin(records: Vec<BinRecord>) -> Vec<BinRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    records
        .into_iter()
        .filter(|record| match &record.bin_id {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .collect()
}
