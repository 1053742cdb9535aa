use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub product_id: i32,
    pub customer_id: i32,
    pub review_text: Option<String>,
    pub rating: i32,
    pub review_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDiscountRequest {
    pub product_id: i32,
    pub discount_percent: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
