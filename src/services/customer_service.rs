use crate::{
    db::DbPool,
    dto::customers::CreateCustomerRequest,
    error::AppResult,
    models::Customer,
};

pub async fn list_customers(pool: &DbPool) -> AppResult<Vec<Customer>> {
    let items = sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

/// Email is unique across customers; a duplicate surfaces as a
/// ConstraintViolation and leaves the existing row untouched.
pub async fn create_customer(
    pool: &DbPool,
    payload: CreateCustomerRequest,
) -> AppResult<Customer> {
    let customer = sqlx::query_as::<_, Customer>(
        r#"
        INSERT INTO customers (first_name, last_name, email, phone, address, registration_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(payload.first_name)
    .bind(payload.last_name)
    .bind(payload.email)
    .bind(payload.phone)
    .bind(payload.address)
    .bind(payload.registration_date)
    .fetch_one(pool)
    .await?;
    Ok(customer)
}

pub async fn delete_customer(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
