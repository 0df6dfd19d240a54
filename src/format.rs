//! Display strings for an [`Age`], pluralized the way the result pane
//! shows them.

use std::fmt;

use serde::Serialize;

use crate::age::Age;

/// The three text fragments a host UI renders, one per calendar unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedAge {
    pub years: String,
    pub months: String,
    pub days: String,
}

/// Formats every unit as `"N Unit"`, singular exactly when the count is 1.
pub fn format_age(age: &Age) -> FormattedAge {
    FormattedAge {
        years: unit(age.years, "Year"),
        months: unit(age.months, "Month"),
        days: unit(age.days, "Day"),
    }
}

fn unit(n: u32, name: &str) -> String {
    format!("{n} {name}{}", plural(n))
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = format_age(self);
        write!(f, "{}, {}, and {}", parts.years, parts.months, parts.days)
    }
}
