//! Priced products.

/// Anything that carries a price.
pub trait Priced {
    fn price(&self) -> f64;
}

/// A named product with a price.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Priced for Product {
    fn price(&self) -> f64 {
        self.price
    }
}
