use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::catalog::CreateStorageRequest,
    error::{AppError, AppResult},
    models::Storage,
    services::catalog_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_storages).post(create_storage))
        .route("/{id}", delete(delete_storage))
}

#[utoipa::path(get, path = "/shop/storages", responses((status = 200, body = Vec<Storage>)), tag = "Storages")]
pub async fn list_storages(State(pool): State<DbPool>) -> AppResult<Json<Vec<Storage>>> {
    let items = catalog_service::list_storages(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(post, path = "/shop/storages", request_body = CreateStorageRequest, responses((status = 200, body = Storage)), tag = "Storages")]
pub async fn create_storage(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateStorageRequest>,
) -> AppResult<Json<Storage>> {
    let storage = catalog_service::create_storage(&pool, payload).await?;
    Ok(Json(storage))
}

#[utoipa::path(delete, path = "/shop/storages/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Storage not found")), tag = "Storages")]
pub async fn delete_storage(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !catalog_service::delete_storage(&pool, id).await? {
        return Err(AppError::NotFound("Storage"));
    }
    Ok(Json(true))
}
