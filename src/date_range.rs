//! Calendar date range selected in the location picker.
//!
//! Both ends are plain calendar-date strings. Nothing here enforces a format or
//! an ordering; [`DateRange::chronology`] only reports what it finds.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date format used for both ends of the range.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A start/end pair of calendar-date strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// How the two ends of a range relate, as far as they can be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chronology {
    /// Both dates parse and start <= end
    Ordered { days: u32 },
    /// Both dates parse but start > end
    Reversed,
    /// At least one end is not a `YYYY-MM-DD` date
    Unparsable,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// A range covering only `date`.
    pub fn single_day(date: impl Into<String>) -> Self {
        let date = date.into();
        Self {
            start: date.clone(),
            end: date,
        }
    }

    /// A range covering only today's UTC date.
    pub fn today() -> Self {
        Self::single_day(today_string())
    }

    /// Parses the start date, if well-formed.
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.start)
    }

    /// Parses the end date, if well-formed.
    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.end)
    }

    /// Reports the ordering of the two ends without enforcing it.
    ///
    /// `days` counts both ends inclusively, so a single-day range has `days == 1`.
    pub fn chronology(&self) -> Chronology {
        match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) if start <= end => Chronology::Ordered {
                days: (end - start).num_days() as u32 + 1,
            },
            (Some(_), Some(_)) => Chronology::Reversed,
            _ => Chronology::Unparsable,
        }
    }

    /// Lists every date in the range, at most `limit` of them.
    ///
    /// Empty unless the range is [`Chronology::Ordered`].
    pub fn days(&self, limit: usize) -> Vec<NaiveDate> {
        match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) if start <= end => start
                .iter_days()
                .take_while(|d| *d <= end)
                .take(limit)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::today()
    }
}

/// Today's UTC calendar date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` string.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}
