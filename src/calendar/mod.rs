//! Day-of-week classification.

mod day;

pub use day::{day_type, Day, DayType};
