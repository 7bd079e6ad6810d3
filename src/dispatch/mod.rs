//! Text-or-number dispatch.
//!
//! [`Value`] is a tagged variant; [`process_value`] matches on the tag, never
//! on the content, so numeric-looking text is still measured as text.

mod types;

pub use types::{process_value, Value};
