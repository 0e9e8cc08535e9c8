use chrono::{Datelike, NaiveDate};

use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::core::event::parse_date;

/// Range selector for event queries, anchored on a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub fn name(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    /// Builds the membership predicate for `target`.
    ///
    /// Day matching compares strings and never parses. Week and month need a
    /// parseable target and fail with `InvalidDate` otherwise.
    pub fn matcher(self, target: &str) -> Result<PeriodMatcher, CalendarError> {
        match self {
            Period::Day => Ok(PeriodMatcher::Day(target.to_string())),
            Period::Week => {
                let week = parse_date(target)
                    .ok_or(CalendarError::InvalidDate)?
                    .iso_week();
                Ok(PeriodMatcher::Week {
                    year: week.year(),
                    week: week.week(),
                })
            }
            Period::Month => {
                let date = parse_date(target).ok_or(CalendarError::InvalidDate)?;
                Ok(PeriodMatcher::Month {
                    year: date.year(),
                    month: date.month(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodMatcher {
    Day(String),
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl PeriodMatcher {
    /// Stored dates that fail to parse never match a week or month.
    pub fn contains(&self, date: &str) -> bool {
        match self {
            PeriodMatcher::Day(target) => target == date,
            PeriodMatcher::Week { year, week } => parse_date(date)
                .map(|d: NaiveDate| d.iso_week())
                .is_some_and(|w| w.year() == *year && w.week() == *week),
            PeriodMatcher::Month { year, month } => {
                parse_date(date).is_some_and(|d| d.year() == *year && d.month() == *month)
            }
        }
    }
}
