//! Calendar-exact age calculation.
//!
//! Given a date of birth and a reference date, [`compute_age`] returns the
//! elapsed whole years, months and days, and [`format_age`] turns the
//! result into the pluralized strings a host UI displays. The arithmetic
//! is pure and synchronous, so it is naturally reentrant; the only failure
//! modes are the two input validations in [`AgeError`].

mod age;
mod format;

pub use age::{Age, AgeError, compute_age, days_in_month, is_leap_year};
pub use format::{FormattedAge, format_age};
