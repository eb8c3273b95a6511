use diesel::prelude::*;

use crate::{
    domain::order::{
        NewOrder as DomainNewOrder, Order as DomainOrder, UpdateOrder as DomainUpdateOrder,
    },
    models::order::{NewOrder as DbNewOrder, Order as DbOrder, UpdateOrder as DbUpdateOrder},
    repository::{DieselRepository, OrderReader, OrderWriter, errors::RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_orders_by_user(&self, user_id: i32) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let rows = orders::table
            .filter(orders::user_id.eq(user_id))
            .order(orders::id.asc())
            .load::<DbOrder>(&mut conn)?;

        Ok(rows.into_iter().map(DomainOrder::from).collect())
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let insertable = DbNewOrder::from(new_order);

        let created = diesel::insert_into(orders::table)
            .values(&insertable)
            .get_result::<DbOrder>(&mut conn)?;

        Ok(created.into())
    }

    fn update_order(&self, order_id: i32, updates: &DomainUpdateOrder) -> RepositoryResult<usize> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateOrder::from(updates);

        let affected = diesel::update(orders::table.filter(orders::id.eq(order_id)))
            .set(&db_updates)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
