use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::orders::CreateShippingRequest,
    error::{AppError, AppResult},
    models::Shipping,
    services::order_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_shippings).post(create_shipping))
        .route("/{id}", delete(delete_shipping))
}

#[utoipa::path(get, path = "/shop/shipping", responses((status = 200, body = Vec<Shipping>)), tag = "Shipping")]
pub async fn list_shippings(State(pool): State<DbPool>) -> AppResult<Json<Vec<Shipping>>> {
    let items = order_service::list_shippings(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/shop/shipping",
    request_body = CreateShippingRequest,
    responses(
        (status = 200, body = Shipping),
        (status = 409, description = "Order already has shipping or unknown"),
    ),
    tag = "Shipping"
)]
pub async fn create_shipping(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateShippingRequest>,
) -> AppResult<Json<Shipping>> {
    let shipping = order_service::create_shipping(&pool, payload).await?;
    Ok(Json(shipping))
}

#[utoipa::path(delete, path = "/shop/shipping/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Shipping not found")), tag = "Shipping")]
pub async fn delete_shipping(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !order_service::delete_shipping(&pool, id).await? {
        return Err(AppError::NotFound("Shipping"));
    }
    Ok(Json(true))
}
