//! Calendar month used to key consumption records and footprints.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

static MONTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("month pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid month format '{0}': expected YYYY-MM")]
pub struct MonthParseError(pub String);

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NaiveDate);

impl Month {
    /// Parses `YYYY-MM`.
    pub fn parse(input: &str) -> Result<Self, MonthParseError> {
        let input = input.trim();
        if !MONTH_PATTERN.is_match(input) {
            return Err(MonthParseError(input.to_string()));
        }
        NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d")
            .map(Month)
            .map_err(|_| MonthParseError(input.to_string()))
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Month(date.with_day(1).unwrap_or(date))
    }

    pub fn current() -> Self {
        Month::from_date(Local::now().date_naive())
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    /// Chart label, e.g. `Mar 2025`.
    pub fn label(self) -> String {
        self.0.format("%b %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::parse(s)
    }
}

impl From<Month> for NaiveDate {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Month::parse(&raw).map_err(serde::de::Error::custom)
    }
}
