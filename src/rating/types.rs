//! Rated items.

/// Anything that carries a numeric rating.
pub trait Rated {
    /// Returns the rating. Any real value is allowed.
    fn rating(&self) -> f64;
}

/// A titled item with a rating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatedItem {
    pub title: String,
    pub rating: f64,
}

impl RatedItem {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

impl Rated for RatedItem {
    fn rating(&self) -> f64 {
        self.rating
    }
}

impl<T: Rated + ?Sized> Rated for &T {
    fn rating(&self) -> f64 {
        (**self).rating()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_serde_shape() {
        let item = RatedItem::new("B", 4.0);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"title":"B","rating":4.0}"#);
        let back: RatedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
