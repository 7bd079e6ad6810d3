//! Days of the week and their weekday/weekend classification.

use std::fmt;

use crate::error::{Error, Result};

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in canonical order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Zero-based position, Monday = 0.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn day_type(self) -> DayType {
        match self {
            Day::Saturday | Day::Sunday => DayType::Weekend,
            Day::Monday | Day::Tuesday | Day::Wednesday | Day::Thursday | Day::Friday => {
                DayType::Weekday
            }
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        Day::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or(Error::InvalidDay(ordinal))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Whether a day falls on a weekday or the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn as_str(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `day`: Saturday and Sunday are the weekend.
///
/// ```
/// use u_basics::calendar::{day_type, Day, DayType};
///
/// assert_eq!(day_type(Day::Saturday), DayType::Weekend);
/// assert_eq!(day_type(Day::Monday).to_string(), "Weekday");
/// ```
pub fn day_type(day: Day) -> DayType {
    day.day_type()
}
