use serde::{Deserialize, Serialize};

/// One line of the storefront cart. A product appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i32,
    pub product: String,
    /// Unit price in rupees, fixed by the first add.
    pub price: f64,
    pub quantity: i32,
}

impl CartItem {
    /// Price of the whole line.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Product added to the cart with a unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub product: String,
    pub price: f64,
}

impl NewCartItem {
    pub fn new(product: impl Into<String>, price: f64) -> Self {
        Self {
            product: product.into(),
            price,
        }
    }
}

/// Sum of every line in `items`.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}
