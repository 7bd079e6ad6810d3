//! Filter threshold configuration.

/// Inclusive lower bound on ratings.
///
/// # Examples
///
/// ```
/// use u_basics::rating::{RatedItem, RatingFilter};
///
/// let items = vec![RatedItem::new("A", 2.5), RatedItem::new("B", 3.0)];
/// let kept = RatingFilter::default().with_min_rating(3.0).apply(&items);
/// assert_eq!(kept, vec![RatedItem::new("B", 3.0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingFilter {
    /// Items with `rating >= min_rating` are kept.
    pub min_rating: f64,
}

impl Default for RatingFilter {
    fn default() -> Self {
        Self { min_rating: 4.0 }
    }
}

impl RatingFilter {
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Returns `true` when `rating` passes the threshold.
    pub fn accepts(&self, rating: f64) -> bool {
        rating >= self.min_rating
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_rating.is_nan() {
            return Err("min_rating must not be NaN".into());
        }
        Ok(())
    }
}
