use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::catalog::CreateCategoryRequest,
    error::{AppError, AppResult},
    models::Category,
    services::catalog_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", delete(delete_category))
}

#[utoipa::path(get, path = "/shop/categories", responses((status = 200, body = Vec<Category>)), tag = "Categories")]
pub async fn list_categories(State(pool): State<DbPool>) -> AppResult<Json<Vec<Category>>> {
    let items = catalog_service::list_categories(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(post, path = "/shop/categories", request_body = CreateCategoryRequest, responses((status = 200, body = Category)), tag = "Categories")]
pub async fn create_category(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<Json<Category>> {
    let category = catalog_service::create_category(&pool, payload).await?;
    Ok(Json(category))
}

// Deleting a category takes its products down with it.
#[utoipa::path(delete, path = "/shop/categories/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Category not found")), tag = "Categories")]
pub async fn delete_category(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !catalog_service::delete_category(&pool, id).await? {
        return Err(AppError::NotFound("Category"));
    }
    Ok(Json(true))
}
