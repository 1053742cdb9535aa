use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::reviews::CreateReviewRequest,
    error::{AppError, AppResult},
    models::Review,
    services::review_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route("/{id}", delete(delete_review))
}

#[utoipa::path(get, path = "/shop/reviews", responses((status = 200, body = Vec<Review>)), tag = "Reviews")]
pub async fn list_reviews(State(pool): State<DbPool>) -> AppResult<Json<Vec<Review>>> {
    let items = review_service::list_reviews(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(post, path = "/shop/reviews", request_body = CreateReviewRequest, responses((status = 200, body = Review), (status = 409, description = "Unknown product or customer")), tag = "Reviews")]
pub async fn create_review(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<Json<Review>> {
    let review = review_service::create_review(&pool, payload).await?;
    Ok(Json(review))
}

#[utoipa::path(delete, path = "/shop/reviews/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Review not found")), tag = "Reviews")]
pub async fn delete_review(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !review_service::delete_review(&pool, id).await? {
        return Err(AppError::NotFound("Review"));
    }
    Ok(Json(true))
}
