use diesel::prelude::*;

use crate::domain::cart::{CartItem as DomainCartItem, NewCartItem as DomainNewCartItem};
use crate::models::cart::{CartItem as DbCartItem, NewCartItem as DbNewCartItem};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CartReader, CartWriter, DieselRepository};

impl CartReader for DieselRepository {
    fn list_cart_items(&self) -> RepositoryResult<Vec<DomainCartItem>> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;
        let rows = cart_items::table
            .order(cart_items::id.asc())
            .load::<DbCartItem>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCartItem::from).collect())
    }
}

impl CartWriter for DieselRepository {
    fn add_cart_item(&self, item: &DomainNewCartItem) -> RepositoryResult<()> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;
        let insertable = DbNewCartItem::from(item);

        diesel::insert_into(cart_items::table)
            .values(&insertable)
            .on_conflict(cart_items::product)
            .do_update()
            .set(cart_items::quantity.eq(cart_items::quantity + 1))
            .execute(&mut conn)?;

        Ok(())
    }

    fn remove_cart_item(&self, product: &str) -> RepositoryResult<bool> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            let target = cart_items::table.filter(cart_items::product.eq(product));

            let decremented = diesel::update(target.clone().filter(cart_items::quantity.gt(1)))
                .set(cart_items::quantity.eq(cart_items::quantity - 1))
                .execute(conn)?;
            if decremented > 0 {
                return Ok(true);
            }

            let deleted = diesel::delete(target).execute(conn)?;
            Ok::<bool, diesel::result::Error>(deleted > 0)
        })
        .map_err(Into::into)
    }
}
