use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::orders::CreateOrderItemRequest,
    error::{AppError, AppResult},
    models::OrderItem,
    services::order_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_order_items).post(create_order_item))
        .route("/{id}", delete(delete_order_item))
}

#[utoipa::path(get, path = "/shop/order-items", responses((status = 200, body = Vec<OrderItem>)), tag = "Orders")]
pub async fn list_order_items(State(pool): State<DbPool>) -> AppResult<Json<Vec<OrderItem>>> {
    let items = order_service::list_order_items(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(post, path = "/shop/order-items", request_body = CreateOrderItemRequest, responses((status = 200, body = OrderItem), (status = 409, description = "Unknown order or product")), tag = "Orders")]
pub async fn create_order_item(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateOrderItemRequest>,
) -> AppResult<Json<OrderItem>> {
    let item = order_service::create_order_item(&pool, payload).await?;
    Ok(Json(item))
}

#[utoipa::path(delete, path = "/shop/order-items/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Order item not found")), tag = "Orders")]
pub async fn delete_order_item(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !order_service::delete_order_item(&pool, id).await? {
        return Err(AppError::NotFound("Order item"));
    }
    Ok(Json(true))
}
