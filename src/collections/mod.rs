//! Sequence concatenation.
//!
//! [`concatenate_arrays`] joins any number of slices in argument order into a
//! freshly allocated `Vec`. The [`concat_arrays!`](crate::concat_arrays) macro
//! offers the variadic call form.

mod concat;

pub use concat::concatenate_arrays;
