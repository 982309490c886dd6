use std::fmt;

use crate::constants::{
    DAYS_PER_MONTH, HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, SECONDS_PER_MINUTE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// The unit above this one and how many of this unit make one of it.
    fn next(self) -> Option<(TimeUnit, f64)> {
        match self {
            TimeUnit::Second => Some((TimeUnit::Minute, SECONDS_PER_MINUTE)),
            TimeUnit::Minute => Some((TimeUnit::Hour, MINUTES_PER_HOUR)),
            TimeUnit::Hour => Some((TimeUnit::Day, HOURS_PER_DAY)),
            TimeUnit::Day => Some((TimeUnit::Month, DAYS_PER_MONTH)),
            TimeUnit::Month => Some((TimeUnit::Year, MONTHS_PER_YEAR)),
            TimeUnit::Year => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Second => "Second",
            TimeUnit::Minute => "Minute",
            TimeUnit::Hour => "Hour",
            TimeUnit::Day => "Day",
            TimeUnit::Month => "Month",
            TimeUnit::Year => "Year",
        };
        f.write_str(name)
    }
}

/// Expresses a duration in the largest unit it fills at least once.
///
/// Months are 30 days and years are 12 months, so a year here is 360 days.
/// The magnitude is rounded half-to-even.
pub fn convert_duration(seconds: f64) -> (i64, TimeUnit) {
    let mut value = seconds;
    let mut unit = TimeUnit::Second;

    while let Some((larger, factor)) = unit.next() {
        if value < factor {
            break;
        }
        value /= factor;
        unit = larger;
    }

    (value.round_ties_even() as i64, unit)
}

/// Label shown next to the simulation: how much simulated time one displayed second covers.
pub fn time_rate_label(time_step: f64) -> String {
    let (magnitude, unit) = convert_duration(time_step);
    format!("{} {}(s) Passes Every Second", magnitude, unit)
}
