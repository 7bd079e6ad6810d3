//! Delayed, failable computation.
//!
//! [`square_async`] waits for a configurable latency on the tokio timer and
//! then squares its input, failing for negative numbers. The wait yields to
//! the runtime, so other tasks keep running while it elapses.
//!
//! The delay is injected through [`DeferredConfig`]; tests typically use
//! [`DeferredConfig::immediate`] or a paused tokio clock.

mod config;
mod square;

pub use config::DeferredConfig;
pub use square::{square_async, square_with_default_delay, NEGATIVE_INPUT_MESSAGE};
