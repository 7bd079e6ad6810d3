//! Rating-based filtering.
//!
//! Keeps the items whose rating meets an inclusive threshold, preserving
//! input order. The default threshold is `4.0`.

mod config;
mod filter;
mod types;

pub use config::RatingFilter;
#[cfg(feature = "parallel")]
pub use filter::par_filter_by_rating;
pub use filter::filter_by_rating;
pub use types::{Rated, RatedItem};
