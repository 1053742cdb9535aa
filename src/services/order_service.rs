use crate::{
    db::DbPool,
    dto::orders::{
        CreateOrderItemRequest, CreateOrderRequest, CreateOrderStatusRequest,
        CreatePaymentRequest, CreateShippingRequest,
    },
    error::AppResult,
    models::{Order, OrderItem, OrderStatus, Payment, Shipping},
};

pub async fn list_order_statuses(pool: &DbPool) -> AppResult<Vec<OrderStatus>> {
    let items = sqlx::query_as::<_, OrderStatus>("SELECT * FROM order_statuses ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_order_status(
    pool: &DbPool,
    payload: CreateOrderStatusRequest,
) -> AppResult<OrderStatus> {
    let status = sqlx::query_as::<_, OrderStatus>(
        "INSERT INTO order_statuses (description) VALUES ($1) RETURNING *",
    )
    .bind(payload.description)
    .fetch_one(pool)
    .await?;
    Ok(status)
}

/// Removes the status and every order still carrying it, cascading on
/// through those orders' items, payments, and shipping records.
pub async fn delete_order_status(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM order_statuses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_orders(pool: &DbPool) -> AppResult<Vec<Order>> {
    let items = sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_order(pool: &DbPool, payload: CreateOrderRequest) -> AppResult<Order> {
    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (customer_id, order_date, total_amount, status_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(payload.customer_id)
    .bind(payload.order_date)
    .bind(payload.total_amount)
    .bind(payload.status_id)
    .fetch_one(pool)
    .await?;
    Ok(order)
}

pub async fn delete_order(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_payments(pool: &DbPool) -> AppResult<Vec<Payment>> {
    let items = sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

/// The unique order_id column holds this to one payment per order; a second
/// insert for the same order is a ConstraintViolation.
pub async fn create_payment(pool: &DbPool, payload: CreatePaymentRequest) -> AppResult<Payment> {
    let payment = sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments (order_id, payment_method, payment_amount, payment_date)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(payload.order_id)
    .bind(payload.payment_method)
    .bind(payload.payment_amount)
    .bind(payload.payment_date)
    .fetch_one(pool)
    .await?;
    Ok(payment)
}

pub async fn delete_payment(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM payments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_shippings(pool: &DbPool) -> AppResult<Vec<Shipping>> {
    let items = sqlx::query_as::<_, Shipping>("SELECT * FROM shippings ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_shipping(
    pool: &DbPool,
    payload: CreateShippingRequest,
) -> AppResult<Shipping> {
    let shipping = sqlx::query_as::<_, Shipping>(
        r#"
        INSERT INTO shippings
            (order_id, shipping_address, shipping_method, shipping_cost, shipping_date, shipping_time)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(payload.order_id)
    .bind(payload.shipping_address)
    .bind(payload.shipping_method)
    .bind(payload.shipping_cost)
    .bind(payload.shipping_date)
    .bind(payload.shipping_time)
    .fetch_one(pool)
    .await?;
    Ok(shipping)
}

pub async fn delete_shipping(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM shippings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_order_items(pool: &DbPool) -> AppResult<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>("SELECT * FROM order_items ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn create_order_item(
    pool: &DbPool,
    payload: CreateOrderItemRequest,
) -> AppResult<OrderItem> {
    let item = sqlx::query_as::<_, OrderItem>(
        r#"
        INSERT INTO order_items (order_id, product_id, quantity, price)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(payload.order_id)
    .bind(payload.product_id)
    .bind(payload.quantity)
    .bind(payload.price)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

pub async fn delete_order_item(pool: &DbPool, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM order_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
