use crate::{
    db::DbPool,
    dto::catalog::{CreateCategoryRequest, CreateProductRequest, CreateStorageRequest},
    error::AppResult,
    models::{Category, Product, Storage},
};

pub async fn list_categories(pool: &DbPool) -> AppResult<Vec<Category>> {
    let items = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_category(
    pool: &DbPool,
    payload: CreateCategoryRequest,
) -> AppResult<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING *",
    )
    .bind(payload.name)
    .fetch_one(pool)
    .await?;
    Ok(category)
}

/// Removes the category and, through the store's cascade rules, every
/// product filed under it. False means no such row existed.
pub async fn delete_category(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_storages(pool: &DbPool) -> AppResult<Vec<Storage>> {
    let items = sqlx::query_as::<_, Storage>("SELECT * FROM storages ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_storage(pool: &DbPool, payload: CreateStorageRequest) -> AppResult<Storage> {
    let storage = sqlx::query_as::<_, Storage>(
        "INSERT INTO storages (address, quantity) VALUES ($1, $2) RETURNING *",
    )
    .bind(payload.address)
    .bind(payload.quantity)
    .fetch_one(pool)
    .await?;
    Ok(storage)
}

pub async fn delete_storage(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM storages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_products(pool: &DbPool) -> AppResult<Vec<Product>> {
    let items = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_product(pool: &DbPool, payload: CreateProductRequest) -> AppResult<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, description, price, color, weight, category_id, storage_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.color)
    .bind(payload.weight)
    .bind(payload.category_id)
    .bind(payload.storage_id)
    .fetch_one(pool)
    .await?;
    Ok(product)
}

pub async fn delete_product(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
