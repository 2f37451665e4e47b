//! Month names and birth-date arithmetic.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Oldest year offered by the birth-year picker.
pub const EARLIEST_YEAR: i32 = 1900;

// ============================================================================
// MONTH
// ============================================================================

/// One of the twelve canonical three-letter month abbreviations.
///
/// Serializes as the abbreviation itself (`"Jan"` … `"Dec"`), which is
/// also the only accepted text form: matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
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
    /// All months in calendar order.
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

    /// The canonical abbreviation, e.g. `"Mar"`.
    pub const fn abbreviation(self) -> &'static str {
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

    /// Zero-based index (`Jan` = 0).
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// One-based month number (`Jan` = 1).
    pub const fn number(self) -> u32 {
        self.index() + 1
    }

    /// Looks up a month by zero-based index.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The month `date` falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self::ALL[date.month0() as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Text that is not one of `Jan` … `Dec`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown month '{input}', expected one of Jan, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec")]
pub struct ParseMonthError {
    input: String,
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|month| month.abbreviation() == s)
            .ok_or_else(|| ParseMonthError {
                input: s.to_string(),
            })
    }
}

// ============================================================================
// DAYS IN MONTH
// ============================================================================

/// Number of days in `month` of `year`, leap years included.
///
/// Computed as the day before the first of the following month. Returns
/// `None` when the year is outside the supported calendar range.
pub fn days_in_month(year: i32, month: Month) -> Option<u32> {
    let (next_year, next_month) = match month {
        Month::Dec => (year.checked_add(1)?, 1),
        other => (year, other.number() + 1),
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

/// Day choices for the birth-day picker: `1..=days_in_month`.
///
/// Empty when the year is out of range.
pub fn day_options(year: i32, month: Month) -> RangeInclusive<u32> {
    1..=days_in_month(year, month).unwrap_or(0)
}

/// Year choices for the birth-year picker, newest first.
pub fn year_options(today: NaiveDate) -> impl DoubleEndedIterator<Item = i32> {
    (EARLIEST_YEAR..=today.year()).rev()
}

/// Keeps a selected day inside the month after the month or year changed.
///
/// `clamp_day(31, 2023, Month::Feb)` is `28`; days already in range are
/// returned unchanged.
pub fn clamp_day(day: u32, year: i32, month: Month) -> u32 {
    match days_in_month(year, month) {
        Some(last) => day.min(last),
        None => day,
    }
}

// ============================================================================
// BIRTH DATE
// ============================================================================

/// A calendar-valid (year, month, day) triple.
///
/// Ordering is lexicographic over (year, month, day), which is also
/// chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate {
    year: i32,
    month: Month,
    day: u32,
}

impl BirthDate {
    /// Builds a birth date if `day` exists in `month` of `year`.
    pub fn new(year: i32, month: Month, day: u32) -> Option<Self> {
        let last = days_in_month(year, month)?;
        (year > 0 && (1..=last).contains(&day)).then_some(Self { year, month, day })
    }

    /// The birth date corresponding to a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: Month::of(date),
            day: date.day(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// True when this date is strictly later than `today`.
    pub fn is_after(&self, today: NaiveDate) -> bool {
        *self > Self::from_date(today)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_round_trip_through_text() {
        for (index, month) in Month::ALL.into_iter().enumerate() {
            assert_eq!(month.index() as usize, index);
            assert_eq!(month.abbreviation().parse::<Month>(), Ok(month));
            assert_eq!(Month::from_index(index as u32), Some(month));
        }
        assert_eq!(Month::from_index(12), None);
    }

    #[rstest]
    #[case("jan")]
    #[case("JAN")]
    #[case("January")]
    #[case(" Jan")]
    #[case("")]
    fn test_month_parse_is_exact(#[case] input: &str) {
        let error = input.parse::<Month>().unwrap_err();
        assert!(error.to_string().contains("unknown month"));
    }

    #[rstest]
    #[case(2024, Month::Feb, 29)]
    #[case(2023, Month::Feb, 28)]
    #[case(1900, Month::Feb, 28)]
    #[case(2000, Month::Feb, 29)]
    #[case(2023, Month::Jan, 31)]
    #[case(2023, Month::Apr, 30)]
    #[case(2023, Month::Dec, 31)]
    fn test_days_in_month(#[case] year: i32, #[case] month: Month, #[case] days: u32) {
        assert_eq!(days_in_month(year, month), Some(days));
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(i32::MAX, Month::Dec), None);
        assert_eq!(day_options(i32::MAX, Month::Dec).count(), 0);
    }

    #[test]
    fn test_day_options() {
        assert_eq!(day_options(2024, Month::Feb), 1..=29);
        assert_eq!(day_options(2023, Month::Feb).last(), Some(28));
    }

    #[test]
    fn test_year_options_newest_first() {
        let years: Vec<i32> = year_options(date(2024, 6, 15)).collect();
        assert_eq!(years.first(), Some(&2024));
        assert_eq!(years.last(), Some(&EARLIEST_YEAR));
        assert_eq!(years.len(), (2024 - EARLIEST_YEAR + 1) as usize);
    }

    #[rstest]
    #[case(31, 2023, Month::Feb, 28)]
    #[case(31, 2024, Month::Feb, 29)]
    #[case(31, 2024, Month::Apr, 30)]
    #[case(15, 2024, Month::Feb, 15)]
    fn test_clamp_day(#[case] day: u32, #[case] year: i32, #[case] month: Month, #[case] expected: u32) {
        assert_eq!(clamp_day(day, year, month), expected);
    }

    #[test]
    fn test_birth_date_bounds() {
        assert!(BirthDate::new(2024, Month::Feb, 29).is_some());
        assert!(BirthDate::new(2023, Month::Feb, 29).is_none());
        assert!(BirthDate::new(2023, Month::Mar, 0).is_none());
        assert!(BirthDate::new(0, Month::Mar, 1).is_none());
    }

    #[rstest]
    #[case(2024, Month::Jun, 16, true)]
    #[case(2024, Month::Jun, 15, false)]
    #[case(2024, Month::Jun, 14, false)]
    #[case(2024, Month::Jul, 1, true)]
    #[case(2024, Month::May, 31, false)]
    #[case(2025, Month::Jan, 1, true)]
    #[case(1990, Month::Dec, 31, false)]
    fn test_is_after(#[case] year: i32, #[case] month: Month, #[case] day: u32, #[case] future: bool) {
        let birth = BirthDate::new(year, month, day).unwrap();
        assert_eq!(birth.is_after(date(2024, 6, 15)), future);
    }

    #[test]
    fn test_month_serializes_as_abbreviation() {
        assert_eq!(serde_json::to_string(&Month::Sep).unwrap(), "\"Sep\"");
        assert_eq!(Month::of(date(2024, 9, 1)), Month::Sep);
    }
}
