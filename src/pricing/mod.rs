//! Maximum-by-price selection.
//!
//! [`most_expensive`] scans once, left to right, and replaces the running
//! maximum only on a strictly greater price. Ties therefore resolve to the
//! first product with the maximum price.

mod reduce;
mod types;

#[cfg(feature = "parallel")]
pub use reduce::par_most_expensive;
pub use reduce::most_expensive;
pub use types::{Priced, Product};
