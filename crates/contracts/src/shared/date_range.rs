use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// How the end date of a picker range maps onto purchase timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndBound {
    /// The whole end day is included (`end 23:59:59.999999999`)
    #[default]
    WholeDay,
    /// Only the literal `end 00:00:00` instant is included
    Instant,
}

/// Inclusive timestamp window `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Both bounds are inclusive
    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        *ts >= self.start && *ts <= self.end
    }
}

/// Диапазон дат, выбранный пользователем (границы включительно)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = String;

    fn try_from(raw: RawDateRange) -> std::result::Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end).map_err(|e| e.to_string())
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            bail!("Invalid date range: start {} is after end {}", start, end);
        }
        Ok(Self { start, end })
    }

    /// Parse a pair of `YYYY-MM-DD` strings
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid start date: '{}'", start))?;
        let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid end date: '{}'", end))?;
        Self::new(start, end)
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Clamp both bounds into `bounds`, the way a picker limited by
    /// min/max dates does. `None` when the ranges do not overlap.
    pub fn clamp_to(&self, bounds: &DateRange) -> Option<Self> {
        if !self.overlaps(bounds) {
            return None;
        }
        Some(Self {
            start: self.start.max(bounds.start),
            end: self.end.min(bounds.end),
        })
    }

    pub fn to_window(&self, end_bound: EndBound) -> TimeWindow {
        let start = self.start.and_time(NaiveTime::MIN);
        let end_midnight = self.end.and_time(NaiveTime::MIN);
        let end = match end_bound {
            EndBound::WholeDay => end_midnight + Duration::days(1) - Duration::nanoseconds(1),
            EndBound::Instant => end_midnight,
        };
        TimeWindow::new(start, end)
    }
}
