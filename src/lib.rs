//! Small, self-contained utilities.
//!
//! Each module is independent of the others and carries no shared state:
//!
//! - **Text**: upper/lower case conversion with an upper-case default.
//! - **Rating**: order-preserving filter keeping items rated `4` or higher.
//! - **Collections**: linear-time concatenation of any number of slices.
//! - **Vehicle**: a `Car` that embeds a `Vehicle` and shares its description
//!   through the `VehicleInfo` capability trait.
//! - **Dispatch**: a text-or-number variant, measured or doubled by tag.
//! - **Pricing**: single-pass selection of the first most expensive product.
//! - **Calendar**: days of the week classified as weekday or weekend.
//! - **Deferred**: a square computed after a non-blocking delay, failing on
//!   negative input.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the data types.
//! - `parallel`: rayon-backed variants of the rating filter and the
//!   most-expensive reducer.

pub mod calendar;
pub mod collections;
pub mod deferred;
pub mod dispatch;
pub mod error;
pub mod pricing;
pub mod rating;
pub mod text;
pub mod vehicle;

#[cfg(all(test, feature = "parallel"))]
mod test_utils;

pub use error::{Error, Result};
