use crate::domain::cart::CartItem;
use crate::forms::cart::{AddToCartForm, RemoveFromCartForm};
use crate::repository::{CartReader, CartWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns the current storefront cart.
pub fn load_cart<R>(repo: &R) -> ServiceResult<Vec<CartItem>>
where
    R: CartReader + ?Sized,
{
    repo.list_cart_items().map_err(ServiceError::from)
}

/// Adds one unit of a product and returns the updated cart.
pub fn add_to_cart<R>(repo: &R, form: AddToCartForm) -> ServiceResult<Vec<CartItem>>
where
    R: CartReader + CartWriter + ?Sized,
{
    let item = form
        .into_new_item()
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

    repo.add_cart_item(&item).map_err(ServiceError::from)?;
    log::info!("Added {} to the cart", item.product);

    load_cart(repo)
}

/// Removes one unit of a product and returns the updated cart. Removing a
/// product that is not in the cart leaves it unchanged.
pub fn remove_from_cart<R>(repo: &R, form: RemoveFromCartForm) -> ServiceResult<Vec<CartItem>>
where
    R: CartReader + CartWriter + ?Sized,
{
    let product = form
        .into_product()
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

    if !repo.remove_cart_item(&product).map_err(ServiceError::from)? {
        log::debug!("{product} was not in the cart");
    }

    load_cart(repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockCart;

    fn line(product: &str, price: f64, quantity: i32) -> CartItem {
        CartItem {
            id: 1,
            product: product.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn add_to_cart_returns_updated_cart() {
        let mut repo = MockCart::new();
        repo.expect_add_cart_item()
            .times(1)
            .withf(|item| item.product == "Calpol" && item.price == 40.0)
            .returning(|_| Ok(()));
        repo.expect_list_cart_items()
            .times(1)
            .returning(|| Ok(vec![line("Calpol", 40.0, 1)]));

        let form = AddToCartForm {
            product: Some("Calpol".to_string()),
            price: Some(40.0),
        };

        let cart = add_to_cart(&repo, form).expect("expected success");

        assert_eq!(cart, vec![line("Calpol", 40.0, 1)]);
    }

    #[test]
    fn add_to_cart_rejects_missing_price_without_touching_store() {
        let mut repo = MockCart::new();
        repo.expect_add_cart_item().never();
        repo.expect_list_cart_items().never();

        let form = AddToCartForm {
            product: Some("Calpol".to_string()),
            price: None,
        };

        match add_to_cart(&repo, form) {
            Err(ServiceError::InvalidInput(message)) => {
                assert_eq!(message, "Product and price are required");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn remove_unknown_product_still_returns_cart() {
        let mut repo = MockCart::new();
        repo.expect_remove_cart_item()
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_list_cart_items()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let form = RemoveFromCartForm {
            product: Some("Aspirin".to_string()),
        };

        assert!(remove_from_cart(&repo, form).expect("success").is_empty());
    }

    #[test]
    fn load_cart_reports_storage_failure() {
        let mut repo = MockCart::new();
        repo.expect_list_cart_items().times(1).returning(|| {
            Err(RepositoryError::Database(
                diesel::result::Error::BrokenTransactionManager,
            ))
        });

        assert!(matches!(
            load_cart(&repo),
            Err(ServiceError::StorageUnavailable(_))
        ));
    }
}
