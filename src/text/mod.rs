//! Case conversion.
//!
//! Maps every character of a string to upper or lower case. The direction is
//! chosen with [`CaseMode`], which defaults to [`CaseMode::Upper`].

mod case;

pub use case::{to_lower, to_upper, transform_case, CaseMode};
