use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::orders::CreateOrderRequest,
    error::{AppError, AppResult},
    models::Order,
    services::order_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", delete(delete_order))
}

#[utoipa::path(get, path = "/shop/orders", responses((status = 200, body = Vec<Order>)), tag = "Orders")]
pub async fn list_orders(State(pool): State<DbPool>) -> AppResult<Json<Vec<Order>>> {
    let items = order_service::list_orders(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/shop/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, body = Order),
        (status = 409, description = "Unknown customer or status"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = order_service::create_order(&pool, payload).await?;
    Ok(Json(order))
}

// Deleting an order clears its items, payment, and shipping record.
#[utoipa::path(delete, path = "/shop/orders/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Order not found")), tag = "Orders")]
pub async fn delete_order(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !order_service::delete_order(&pool, id).await? {
        return Err(AppError::NotFound("Order"));
    }
    Ok(Json(true))
}
