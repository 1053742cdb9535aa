use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::reviews::CreateDiscountRequest,
    error::{AppError, AppResult},
    models::Discount,
    services::review_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_discounts).post(create_discount))
        .route("/{id}", delete(delete_discount))
}

#[utoipa::path(get, path = "/shop/discounts", responses((status = 200, body = Vec<Discount>)), tag = "Discounts")]
pub async fn list_discounts(State(pool): State<DbPool>) -> AppResult<Json<Vec<Discount>>> {
    let items = review_service::list_discounts(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(post, path = "/shop/discounts", request_body = CreateDiscountRequest, responses((status = 200, body = Discount), (status = 409, description = "Unknown product")), tag = "Discounts")]
pub async fn create_discount(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateDiscountRequest>,
) -> AppResult<Json<Discount>> {
    let discount = review_service::create_discount(&pool, payload).await?;
    Ok(Json(discount))
}

#[utoipa::path(delete, path = "/shop/discounts/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Discount not found")), tag = "Discounts")]
pub async fn delete_discount(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !review_service::delete_discount(&pool, id).await? {
        return Err(AppError::NotFound("Discount"));
    }
    Ok(Json(true))
}
