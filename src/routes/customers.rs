use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    db::DbPool,
    dto::customers::CreateCustomerRequest,
    error::{AppError, AppResult},
    models::Customer,
    services::customer_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/{id}", delete(delete_customer))
}

#[utoipa::path(get, path = "/shop/customers", responses((status = 200, body = Vec<Customer>)), tag = "Customers")]
pub async fn list_customers(State(pool): State<DbPool>) -> AppResult<Json<Vec<Customer>>> {
    let items = customer_service::list_customers(&pool).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/shop/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, body = Customer),
        (status = 409, description = "Email already registered"),
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateCustomerRequest>,
) -> AppResult<Json<Customer>> {
    let customer = customer_service::create_customer(&pool, payload).await?;
    Ok(Json(customer))
}

#[utoipa::path(delete, path = "/shop/customers/{id}", params(("id" = i32, Path)), responses((status = 200, body = bool), (status = 404, description = "Customer not found")), tag = "Customers")]
pub async fn delete_customer(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<bool>> {
    if !customer_service::delete_customer(&pool, id).await? {
        return Err(AppError::NotFound("Customer"));
    }
    Ok(Json(true))
}
