//! age.rs
//!
//! Calendar-exact age: the whole years, months and days elapsed between a
//! date of birth and a reference date.
//!
//! Chrono does not provide a year/month/day diff (unlike Python’s
//! relativedelta), so the calendar-aware borrowing rules are implemented
//! manually:
//!   • day underflow borrows from the month before the reference month
//!   • month underflow borrows from the years
//!   • leap years and varying month lengths are respected throughout

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Elapsed age, broken into calendar units.
///
/// Built fresh on every [`compute_age`] call. `months` is always in
/// `0..=11`; `days` is always shorter than the month the day borrow drew
/// from, so it never exceeds 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Why a birth date was rejected before any arithmetic ran.
///
/// Both kinds are ordinary recoverable values for the host to display;
/// nothing in the calculation panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeError {
    #[error("please select a date of birth")]
    MissingBirthDate,
    #[error("date of birth cannot be in the future")]
    FutureBirthDate,
}

/// Computes the age at `today` for someone born on `birthdate`.
///
/// `birthdate` is optional because the host input may simply be empty; an
/// empty input fails with [`AgeError::MissingBirthDate`] before anything
/// else is checked. A birth date later than `today` (compared at
/// calendar-date granularity) fails with [`AgeError::FutureBirthDate`].
pub fn compute_age(birthdate: Option<NaiveDate>, today: NaiveDate) -> Result<Age, AgeError> {
    let birthdate = birthdate.ok_or(AgeError::MissingBirthDate)?;
    if birthdate > today {
        return Err(AgeError::FutureBirthDate);
    }

    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow by borrowing whole months, starting with the one
    // right before `today`. One borrow is almost always enough; a second
    // is needed when that month is shorter than the deficit (a late-January
    // birth date seen from March 1st).
    let (mut borrow_year, mut borrow_month) = (today.year(), today.month());
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        days += days_in_month(borrow_year, borrow_month) as i32;
        months -= 1;
    }

    // Fix month underflow. The day borrow leaves `months >= -12`, so a
    // single year borrow restores the 0..=11 range.
    if months < 0 {
        months += 12;
        years -= 1;
    }

    // Unreachable while the future-date check above holds.
    if years < 0 {
        return Err(AgeError::FutureBirthDate);
    }

    Ok(Age {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Returns the number of days in a given year/month (handles leap years).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
