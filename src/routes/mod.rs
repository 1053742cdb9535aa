use axum::Router;

use crate::db::DbPool;

pub mod categories;
pub mod customers;
pub mod discounts;
pub mod doc;
pub mod health;
pub mod order_items;
pub mod order_statuses;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod shipping;
pub mod storages;

// Build the /shop router without binding state; it is provided at the top level.
pub fn create_shop_router() -> Router<DbPool> {
    Router::new()
        .nest("/products", products::router())
        .nest("/categories", categories::router())
        .nest("/storages", storages::router())
        .nest("/customers", customers::router())
        .nest("/orders", orders::router())
        .nest("/order-statuses", order_statuses::router())
        .nest("/payments", payments::router())
        .nest("/shipping", shipping::router())
        .nest("/order-items", order_items::router())
        .nest("/reviews", reviews::router())
        .nest("/discounts", discounts::router())
}
