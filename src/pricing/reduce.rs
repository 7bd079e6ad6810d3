//! Single-pass first-max reduction.

use tracing::trace;

use super::types::Priced;

/// Returns the first product with the highest price, or `None` for an empty
/// slice.
///
/// Each element is examined exactly once. Prices are compared with `>`, so a
/// `NaN` price never replaces the running maximum, and a `NaN` in first
/// position is never replaced.
///
/// # Examples
///
/// ```
/// use u_basics::pricing::{most_expensive, Product};
///
/// let products = vec![
///     Product::new("X", 10.0),
///     Product::new("Y", 20.0),
///     Product::new("Z", 20.0),
/// ];
/// assert_eq!(most_expensive(&products).map(|p| p.name.as_str()), Some("Y"));
/// assert!(most_expensive::<Product>(&[]).is_none());
/// ```
pub fn most_expensive<T: Priced>(products: &[T]) -> Option<&T> {
    let (first, rest) = products.split_first()?;
    let best = rest.iter().fold(first, |max, product| {
        if product.price() > max.price() {
            product
        } else {
            max
        }
    });
    trace!(count = products.len(), "most expensive selected");
    Some(best)
}

/// Parallel form of [`most_expensive`] with the same first-max tie-break.
#[cfg(feature = "parallel")]
pub fn par_most_expensive<T: Priced + Sync>(products: &[T]) -> Option<&T> {
    use rayon::prelude::*;

    // Left operand always precedes the right one in input order.
    let best = products.par_iter().reduce_with(|max, product| {
        if product.price() > max.price() {
            product
        } else {
            max
        }
    })?;
    trace!(count = products.len(), "most expensive selected");
    Some(best)
}
