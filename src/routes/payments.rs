use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::orders::CreatePaymentRequest,
    error::{AppError, AppResult},
    models::Payment,
    services::order_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route("/{id}", delete(delete_payment))
}

#[utoipa::path(get, path = "/shop/payments", responses((status = 200, body = Vec<Payment>)), tag = "Payments")]
pub async fn list_payments(State(pool): State<DbPool>) -> AppResult<Json<Vec<Payment>>> {
    let items = order_service::list_payments(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/shop/payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 200, body = Payment),
        (status = 409, description = "Order already paid or unknown"),
    ),
    tag = "Payments"
)]
pub async fn create_payment(
    State(pool): State<DbPool>,
    Json(payload): Json<CreatePaymentRequest>,
) -> AppResult<Json<Payment>> {
    let payment = order_service::create_payment(&pool, payload).await?;
    Ok(Json(payment))
}

#[utoipa::path(delete, path = "/shop/payments/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Payment not found")), tag = "Payments")]
pub async fn delete_payment(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !order_service::delete_payment(&pool, id).await? {
        return Err(AppError::NotFound("Payment"));
    }
    Ok(Json(true))
}
