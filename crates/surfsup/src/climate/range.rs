use serde::Serialize;
use std::fmt;
use time::{macros::format_description, Date};
use utoipa::ToSchema;

use super::{Coverage, Error};
use crate::db::ObservationStore;

/// Parse a zero-padded `YYYY-MM-DD` calendar date.
///
/// Range checks compare these labels as text, so anything that is not exactly
/// ten characters in the canonical layout is rejected before parsing.
pub fn parse_date(label: &str) -> Result<Date, Error> {
    let canonical = label.len() == 10
        && label.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !canonical {
        return Err(Error::MalformedDate(label.to_owned()));
    }

    Date::parse(label, format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::MalformedDate(label.to_owned()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RangeViolation {
    StartAfterCoverage,
    StartBeforeCoverage,
    EndAfterCoverage,
    EndBeforeCoverage,
    StartAfterEnd,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RangeViolation::StartAfterCoverage => "start date is after the latest observation",
            RangeViolation::StartBeforeCoverage => "start date is before the oldest observation",
            RangeViolation::EndAfterCoverage => "end date is after the latest observation",
            RangeViolation::EndBeforeCoverage => "end date is before the oldest observation",
            RangeViolation::StartAfterEnd => "start date is after end date",
        };
        f.write_str(reason)
    }
}

/// Validated query window. `start <= end` and both lie inside the store's
/// coverage at the time of validation. The labels are kept exactly as the
/// caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start_label: String,
    end_label: String,
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn start_label(&self) -> &str {
        &self.start_label
    }

    pub fn end_label(&self) -> &str {
        &self.end_label
    }
}

/// A caller-supplied date, kept both as the label it arrived as and as the
/// calendar date it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInput<'a> {
    label: &'a str,
    date: Date,
}

impl<'a> DateInput<'a> {
    pub fn parse(label: &'a str) -> Result<Self, Error> {
        let date = parse_date(label)?;
        Ok(Self { label, date })
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn date(&self) -> Date {
        self.date
    }
}

impl Coverage {
    fn violation(&self, start: &str, end: &str, violation: RangeViolation) -> Error {
        Error::OutOfRange {
            violation,
            start: start.to_owned(),
            end: end.to_owned(),
            oldest: self.oldest_label(),
            recent: self.recent_label(),
        }
    }

    /// Open-ended range from `start` through the most recent observation.
    /// A start equal to either coverage boundary is accepted.
    pub fn bound_start(&self, start: DateInput<'_>) -> Result<DateRange, Error> {
        let oldest = self.oldest_label();
        let recent = self.recent_label();

        if recent.as_str() < start.label {
            return Err(self.violation(start.label, &recent, RangeViolation::StartAfterCoverage));
        }
        if oldest.as_str() > start.label {
            return Err(self.violation(start.label, &recent, RangeViolation::StartBeforeCoverage));
        }

        Ok(DateRange {
            start_label: start.label.to_owned(),
            end_label: recent,
            start: start.date,
            end: self.recent,
        })
    }

    pub fn bound_range(&self, start: DateInput<'_>, end: DateInput<'_>) -> Result<DateRange, Error> {
        let oldest = self.oldest_label();
        let recent = self.recent_label();

        let violation = if recent.as_str() < start.label {
            Some(RangeViolation::StartAfterCoverage)
        } else if oldest.as_str() > start.label {
            Some(RangeViolation::StartBeforeCoverage)
        } else if recent.as_str() < end.label {
            Some(RangeViolation::EndAfterCoverage)
        } else if oldest.as_str() > end.label {
            Some(RangeViolation::EndBeforeCoverage)
        } else if start.label > end.label {
            Some(RangeViolation::StartAfterEnd)
        } else {
            None
        };
        if let Some(violation) = violation {
            return Err(self.violation(start.label, end.label, violation));
        }

        Ok(DateRange {
            start_label: start.label.to_owned(),
            end_label: end.label.to_owned(),
            start: start.date,
            end: end.date,
        })
    }
}

/// Validate a start date against the store, ending the range at the most
/// recent observation. Malformed input is rejected before the store is read.
pub async fn validate_single_start(
    store: &dyn ObservationStore,
    start: &str,
) -> Result<DateRange, Error> {
    let start = DateInput::parse(start)?;
    Coverage::resolve(store).await?.bound_start(start)
}

pub async fn validate_range(
    store: &dyn ObservationStore,
    start: &str,
    end: &str,
) -> Result<DateRange, Error> {
    let start = DateInput::parse(start)?;
    let end = DateInput::parse(end)?;
    Coverage::resolve(store).await?.bound_range(start, end)
}
