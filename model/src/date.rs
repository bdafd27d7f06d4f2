use chrono::{Datelike, Local, NaiveDate};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

const MONTHS_IN_YEAR: i32 = 12;
const LONG_END_DAY: i32 = 31;
const SHORT_END_DAY: i32 = 30;
const LEAP_FEB_END_DAY: i32 = 29;
const FEB_END_DAY: i32 = 28;
const FEBRUARY: i32 = 2;
const SHORT_MONTHS: [i32; 4] = [4, 6, 9, 11];

pub type Result<T, E = DateError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("`{0}` is not a month/day/year date.")]
    Malformed(String),
}

/// A calendar date stored as separate month, day and year values.
///
/// A [Date] may hold values that don't exist in the Gregorian calendar:
/// parsing never checks bounds, callers are expected to ask [Date::is_valid]
/// before trusting it.
/// Dates are ordered chronologically: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// The current local date, as given by the system clock.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    /// Reorder a date-picker formatted string (`yyyy-mm-dd`) into `m/d/y` and parse it.
    pub fn from_local_format(local: &str) -> Result<Self> {
        let mut parts = local.split('-').collect::<Vec<_>>();
        parts.rotate_left(1);
        parts.join("/").parse()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn is_leap_year(&self) -> bool {
        self.year % 4 == 0 && (self.year % 100 != 0 || self.year % 400 == 0)
    }

    /// Whether this date exists in the Gregorian calendar.
    pub fn is_valid(&self) -> bool {
        if self.year < 0 {
            return false;
        }
        if !(1..=MONTHS_IN_YEAR).contains(&self.month) || !(1..=LONG_END_DAY).contains(&self.day)
        {
            return false;
        }
        if SHORT_MONTHS.contains(&self.month) && self.day > SHORT_END_DAY {
            return false;
        }
        if self.month == FEBRUARY {
            let end_day = if self.is_leap_year() {
                LEAP_FEB_END_DAY
            } else {
                FEB_END_DAY
            };
            return self.day <= end_day;
        }

        true
    }

    /// Move this date forward by `months`, carrying into the year.
    /// When the target month is too short for the current day, the day is
    /// rounded down to the end of that month (Jan 31 + 1 month = Feb 28 or 29).
    pub fn add_months(&mut self, months: u32) {
        let zero_based_month = self.month - 1 + months as i32;
        self.year += zero_based_month.div_euclid(MONTHS_IN_YEAR);
        self.month = zero_based_month.rem_euclid(MONTHS_IN_YEAR) + 1;
        while !self.is_valid() && self.day >= FEB_END_DAY {
            self.day -= 1;
        }
    }

    /// Same as [Date::add_months], on a copy.
    pub fn plus_months(mut self, months: u32) -> Self {
        self.add_months(months);
        self
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parse `m/d/y`. Values are not checked against the calendar.
    fn from_str(s: &str) -> Result<Self> {
        let parts = s.trim().split('/').collect::<Vec<_>>();
        let [month, day, year] = parts.as_slice() else {
            return Err(DateError::Malformed(s.to_owned()));
        };
        let parse = |value: &str| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| DateError::Malformed(s.to_owned()))
        };

        Ok(Self::new(parse(*year)?, parse(*month)?, parse(*day)?))
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

#[cfg(test)]
mod tests {
    mod parse {
        use crate::date::{Date, DateError};

        #[test]
        fn success() {
            assert_eq!(Ok(Date::new(1990, 1, 31)), "1/31/1990".parse());
        }

        #[test]
        fn out_of_range_values_are_kept() {
            let date = "13/42/2000".parse::<Date>().unwrap();
            assert_eq!(13, date.month());
            assert_eq!(42, date.day());
            assert!(!date.is_valid());
        }

        #[test]
        fn fail_when_missing_field() {
            assert_eq!(
                Err(DateError::Malformed("1/31".to_owned())),
                "1/31".parse::<Date>()
            );
        }

        #[test]
        fn fail_when_not_a_number() {
            assert!("jan/31/1990".parse::<Date>().is_err());
        }

        #[test]
        fn from_local_format() {
            assert_eq!(Ok(Date::new(2003, 2, 9)), Date::from_local_format("2003-02-09"));
        }

        #[test]
        fn display() {
            assert_eq!("2/9/2003", Date::new(2003, 2, 9).to_string());
        }
    }

    mod is_valid {
        use crate::date::Date;
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            date = {
                (2024, 2, 29), (2023, 2, 29), (2000, 2, 29), (1900, 2, 29), (2023, 2, 28),
                (2023, 4, 31), (2023, 4, 30), (2023, 12, 31), (2023, 13, 1), (2023, 0, 1),
                (2023, 1, 0), (2023, 1, 32), (-1, 1, 1), (2023, 11, 31), (2023, 7, 31)
            },
            expected_result = {
                true, false, true, false, true,
                false, true, true, false, false,
                false, false, false, false, true
            }
        )]
        fn should_check_validity(date: (i32, i32, i32), expected_result: bool) {
            let (year, month, day) = date;
            assert_eq!(expected_result, Date::new(year, month, day).is_valid());
        }

        #[test]
        fn matches_chrono_for_every_day_of_a_leap_cycle() {
            for year in [1900, 2000, 2023, 2024] {
                for month in 1..=12 {
                    for day in 1..=31 {
                        let exists = chrono::NaiveDate::from_ymd_opt(year, month as u32, day as u32)
                            .is_some();
                        assert_eq!(exists, Date::new(year, month, day).is_valid());
                    }
                }
            }
        }
    }

    mod add_months {
        use crate::date::Date;
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            start = {
                (2024, 1, 15), (2024, 1, 31), (2023, 1, 31), (2024, 9, 15),
                (2024, 10, 31), (2024, 11, 30), (2024, 12, 31), (2024, 2, 29)
            },
            months = {3, 1, 1, 3, 12, 3, 14, 12},
            expected_result = {
                (2024, 4, 15), (2024, 2, 29), (2023, 2, 28), (2024, 12, 15),
                (2025, 10, 31), (2025, 2, 28), (2026, 2, 28), (2025, 2, 28)
            }
        )]
        fn should_add_months(start: (i32, i32, i32), months: u32, expected_result: (i32, i32, i32)) {
            let (year, month, day) = start;
            let mut date = Date::new(year, month, day);
            date.add_months(months);

            let (year, month, day) = expected_result;
            assert_eq!(Date::new(year, month, day), date);
        }

        #[test]
        fn result_is_always_valid() {
            for month in 1..=12 {
                for day in 1..=31 {
                    let start = Date::new(2023, month, day);
                    if !start.is_valid() {
                        continue;
                    }
                    for months in 0..30 {
                        assert!(start.plus_months(months).is_valid());
                    }
                }
            }
        }
    }

    mod ordering {
        use crate::date::Date;
        use std::cmp::Ordering;

        #[test]
        fn compares_year_then_month_then_day() {
            let date = Date::new(2024, 6, 15);
            assert_eq!(Ordering::Greater, date.cmp(&Date::new(2023, 12, 31)));
            assert_eq!(Ordering::Less, date.cmp(&Date::new(2024, 7, 1)));
            assert_eq!(Ordering::Less, date.cmp(&Date::new(2024, 6, 16)));
            assert_eq!(Ordering::Equal, date.cmp(&Date::new(2024, 6, 15)));
        }
    }
}
