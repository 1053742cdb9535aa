use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::orders::CreateOrderStatusRequest,
    error::{AppError, AppResult},
    models::OrderStatus,
    services::order_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_order_statuses).post(create_order_status))
        .route("/{id}", delete(delete_order_status))
}

#[utoipa::path(get, path = "/shop/order-statuses", responses((status = 200, body = Vec<OrderStatus>)), tag = "Orders")]
pub async fn list_order_statuses(
    State(pool): State<DbPool>,
) -> AppResult<Json<Vec<OrderStatus>>> {
    let items = order_service::list_order_statuses(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(post, path = "/shop/order-statuses", request_body = CreateOrderStatusRequest, responses((status = 200, body = OrderStatus)), tag = "Orders")]
pub async fn create_order_status(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateOrderStatusRequest>,
) -> AppResult<Json<OrderStatus>> {
    let status = order_service::create_order_status(&pool, payload).await?;
    Ok(Json(status))
}

#[utoipa::path(delete, path = "/shop/order-statuses/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Order status not found")), tag = "Orders")]
pub async fn delete_order_status(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !order_service::delete_order_status(&pool, id).await? {
        return Err(AppError::NotFound("Order status"));
    }
    Ok(Json(true))
}
