//! Per-year results of a fetch run, so partial failures are visible without
//! reading the log.

use crate::fetcher::error::FetchError;
use crate::types::gust_record::GustRecord;
use crate::types::year::Year;

#[derive(Debug)]
pub enum YearOutcome {
    /// A success response carrying `records` observations.
    Fetched { records: usize, attempts: u32 },
    /// A success response with no observations. Not retried.
    Empty { attempts: u32 },
    /// Every attempt failed; the year contributes nothing.
    Exhausted {
        attempts: u32,
        last_error: Option<FetchError>,
    },
    /// The year has no calendar representation; no request was sent.
    OutOfRange,
}

impl YearOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, YearOutcome::Fetched { .. } | YearOutcome::Empty { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            YearOutcome::Fetched { attempts, .. }
            | YearOutcome::Empty { attempts }
            | YearOutcome::Exhausted { attempts, .. } => *attempts,
            YearOutcome::OutOfRange => 0,
        }
    }
}

#[derive(Debug)]
pub struct YearReport {
    pub year: Year,
    pub outcome: YearOutcome,
}

/// Everything a fetch run produced: the accumulated records, in year order
/// then API order, and one outcome per requested year.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub records: Vec<GustRecord>,
    pub years: Vec<YearReport>,
}

impl FetchReport {
    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    /// Years that contributed nothing because every attempt failed or the
    /// year could not be queried.
    pub fn failed_years(&self) -> Vec<Year> {
        self.years
            .iter()
            .filter(|report| !report.outcome.is_success())
            .map(|report| report.year)
            .collect()
    }

    pub fn outcome_for(&self, year: Year) -> Option<&YearOutcome> {
        self.years
            .iter()
            .find(|report| report.year == year)
            .map(|report| &report.outcome)
    }

    pub fn into_records(self) -> Vec<GustRecord> {
        self.records
    }
}
