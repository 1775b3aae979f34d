//! Canonical month labels used to key every dashboard dataset.
//!
//! Datasets store one value per three-letter label (`"Jan"`..`"Dec"`). When
//! the month picker has no selection the dashboard shows January, not the
//! current month. That default is observable in every chart description and
//! is kept on purpose.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Month {
    #[default]
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Three-letter label as it appears in the dataset document.
    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Exact, case-sensitive lookup. `"jan"` and `"January"` are rejected.
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|month| month.label() == raw)
    }

    /// Resolve an optional label coming from UI state.
    ///
    /// `None` falls back to January; a label outside the twelve canonical
    /// ones is an error rather than a silent default.
    pub fn from_selection(raw: Option<&str>) -> Result<Self, InvalidMonthLabel> {
        match raw {
            None => Ok(Self::default()),
            Some(label) => label.parse(),
        }
    }

    /// Month of a picked calendar date; no pick means January.
    pub fn from_picked_date(picked: Option<Date>) -> Self {
        picked.map(Self::of_date).unwrap_or_default()
    }

    pub fn of_date(date: Date) -> Self {
        Self::from(date.month())
    }

    pub fn number(self) -> u8 {
        time::Month::from(self) as u8
    }
}

/// Value of an `<input type="month">`, e.g. `2024-07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedMonth(Date);

impl PickedMonth {
    /// Parse the browser's `YYYY-MM` form. Anything else, including a full
    /// date, is an `InvalidMonthLabel` carrying the raw input.
    pub fn parse_input(raw: &str) -> Result<Self, InvalidMonthLabel> {
        let raw = raw.trim();
        Date::parse(
            &format!("{raw}-01"),
            format_description!("[year]-[month]-[day]"),
        )
        .map(Self)
        .map_err(|_| InvalidMonthLabel {
            label: raw.to_string(),
        })
    }

    pub fn month(self) -> Month {
        Month::of_date(self.0)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// First day of the picked month.
    pub fn date(self) -> Date {
        self.0
    }

    /// Inverse of [`PickedMonth::parse_input`], for binding back to the input.
    pub fn input_value(self) -> String {
        format!("{:04}-{:02}", self.year(), self.month().number())
    }
}

impl From<time::Month> for Month {
    fn from(month: time::Month) -> Self {
        match month {
            time::Month::January => Month::Jan,
            time::Month::February => Month::Feb,
            time::Month::March => Month::Mar,
            time::Month::April => Month::Apr,
            time::Month::May => Month::May,
            time::Month::June => Month::Jun,
            time::Month::July => Month::Jul,
            time::Month::August => Month::Aug,
            time::Month::September => Month::Sep,
            time::Month::October => Month::Oct,
            time::Month::November => Month::Nov,
            time::Month::December => Month::Dec,
        }
    }
}

impl From<Month> for time::Month {
    fn from(month: Month) -> Self {
        match month {
            Month::Jan => time::Month::January,
            Month::Feb => time::Month::February,
            Month::Mar => time::Month::March,
            Month::Apr => time::Month::April,
            Month::May => time::Month::May,
            Month::Jun => time::Month::June,
            Month::Jul => time::Month::July,
            Month::Aug => time::Month::August,
            Month::Sep => time::Month::September,
            Month::Oct => time::Month::October,
            Month::Nov => time::Month::November,
            Month::Dec => time::Month::December,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Month {
    type Err = InvalidMonthLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::from_label(raw).ok_or_else(|| InvalidMonthLabel {
            label: raw.to_string(),
        })
    }
}

/// A month string outside `Jan`..`Dec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMonthLabel {
    pub label: String,
}

impl fmt::Display for InvalidMonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid month label `{}` (expected one of Jan..Dec)",
            self.label
        )
    }
}

impl std::error::Error for InvalidMonthLabel {}
