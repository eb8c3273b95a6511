use serde::Deserialize;
use thiserror::Error;

use crate::domain::cart::NewCartItem;

/// Result type returned by the cart form helpers.
pub type CartFormResult<T> = Result<T, CartFormError>;

/// Errors that can occur while processing cart requests.
#[derive(Debug, Error, PartialEq)]
pub enum CartFormError {
    #[error("Product and price are required")]
    MissingProductOrPrice,
    #[error("Price must be a positive number")]
    InvalidPrice,
    #[error("Product is required")]
    MissingProduct,
}

/// JSON body of `POST /add-to-cart`.
#[derive(Debug, Default, Deserialize)]
pub struct AddToCartForm {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl AddToCartForm {
    pub fn into_new_item(self) -> CartFormResult<NewCartItem> {
        let product = required_product(self.product).ok_or(CartFormError::MissingProductOrPrice)?;
        let price = self.price.ok_or(CartFormError::MissingProductOrPrice)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(CartFormError::InvalidPrice);
        }

        Ok(NewCartItem::new(product, price))
    }
}

/// JSON body of `POST /remove-from-cart`.
#[derive(Debug, Default, Deserialize)]
pub struct RemoveFromCartForm {
    #[serde(default)]
    pub product: Option<String>,
}

impl RemoveFromCartForm {
    pub fn into_product(self) -> CartFormResult<String> {
        required_product(self.product).ok_or(CartFormError::MissingProduct)
    }
}

// Product names are matched exactly, so only blank names are rejected.
fn required_product(product: Option<String>) -> Option<String> {
    product.filter(|name| !name.trim().is_empty())
}
