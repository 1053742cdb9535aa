use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderStatusRequest {
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    pub order_id: i32,
    pub payment_method: String,
    pub payment_amount: Decimal,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShippingRequest {
    pub order_id: i32,
    pub shipping_address: String,
    pub shipping_method: String,
    pub shipping_cost: Decimal,
    pub shipping_date: DateTime<Utc>,
    pub shipping_time: NaiveTime,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderItemRequest {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}
