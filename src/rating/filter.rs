//! Order-preserving rating filter.

use tracing::trace;

use super::config::RatingFilter;
use super::types::Rated;

impl RatingFilter {
    /// Returns clones of the items that pass the threshold, in input order.
    pub fn apply<T: Rated + Clone>(&self, items: &[T]) -> Vec<T> {
        let kept: Vec<T> = items
            .iter()
            .filter(|item| self.accepts(item.rating()))
            .cloned()
            .collect();
        trace!(
            input = items.len(),
            kept = kept.len(),
            min_rating = self.min_rating,
            "rating filter applied"
        );
        kept
    }
}

/// Keeps the items rated `4` or higher, preserving their relative order.
///
/// The input is not modified.
///
/// # Examples
///
/// ```
/// use u_basics::rating::{filter_by_rating, RatedItem};
///
/// let items = vec![
///     RatedItem::new("A", 3.0),
///     RatedItem::new("B", 4.0),
///     RatedItem::new("C", 5.0),
/// ];
/// let kept = filter_by_rating(&items);
/// assert_eq!(kept, vec![RatedItem::new("B", 4.0), RatedItem::new("C", 5.0)]);
/// ```
pub fn filter_by_rating<T: Rated + Clone>(items: &[T]) -> Vec<T> {
    RatingFilter::default().apply(items)
}

/// Parallel form of [`filter_by_rating`]. Output order matches the input.
#[cfg(feature = "parallel")]
pub fn par_filter_by_rating<T: Rated + Clone + Send + Sync>(items: &[T]) -> Vec<T> {
    use rayon::prelude::*;

    let filter = RatingFilter::default();
    let kept: Vec<T> = items
        .par_iter()
        .filter(|item| filter.accepts(item.rating()))
        .cloned()
        .collect();
    trace!(
        input = items.len(),
        kept = kept.len(),
        min_rating = filter.min_rating,
        "rating filter applied"
    );
    kept
}
