use crate::{
    db::DbPool,
    dto::reviews::{CreateDiscountRequest, CreateReviewRequest},
    error::AppResult,
    models::{Discount, Review},
};

pub async fn list_reviews(pool: &DbPool) -> AppResult<Vec<Review>> {
    let items = sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_review(pool: &DbPool, payload: CreateReviewRequest) -> AppResult<Review> {
    let review = sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (product_id, customer_id, review_text, rating, review_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(payload.product_id)
    .bind(payload.customer_id)
    .bind(payload.review_text)
    .bind(payload.rating)
    .bind(payload.review_date)
    .fetch_one(pool)
    .await?;
    Ok(review)
}

pub async fn delete_review(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_discounts(pool: &DbPool) -> AppResult<Vec<Discount>> {
    let items = sqlx::query_as::<_, Discount>("SELECT * FROM discounts ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_discount(
    pool: &DbPool,
    payload: CreateDiscountRequest,
) -> AppResult<Discount> {
    let discount = sqlx::query_as::<_, Discount>(
        r#"
        INSERT INTO discounts (product_id, discount_percent, start_date, end_date)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(payload.product_id)
    .bind(payload.discount_percent)
    .bind(payload.start_date)
    .bind(payload.end_date)
    .fetch_one(pool)
    .await?;
    Ok(discount)
}

pub async fn delete_discount(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM discounts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
