use crate::types::year::Year;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar-year date range a single CDO request is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    year: Year,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QueryWindow {
    /// January 1st through December 31st of `year`.
    ///
    /// Returns `None` for years outside chrono's representable range.
    pub fn for_year(year: Year) -> Option<Self> {
        Some(Self {
            year,
            start: NaiveDate::from_ymd_opt(year.get(), 1, 1)?,
            end: NaiveDate::from_ymd_opt(year.get(), 12, 31)?,
        })
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// `startdate` query value.
    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// `enddate` query value.
    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}
