use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::catalog::CreateProductRequest,
    error::{AppError, AppResult},
    models::Product,
    services::catalog_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/shop/products",
    responses(
        (status = 200, description = "List products", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(pool): State<DbPool>) -> AppResult<Json<Vec<Product>>> {
    let items = catalog_service::list_products(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/shop/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Create product", body = Product),
        (status = 409, description = "Constraint violation"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Json<Product>> {
    let product = catalog_service::create_product(&pool, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/shop/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product", body = bool),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !catalog_service::delete_product(&pool, id).await? {
        return Err(AppError::NotFound("Product"));
    }
    Ok(Json(true))
}
