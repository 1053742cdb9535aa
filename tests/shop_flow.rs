use axum_shop_api::{
    db::{DbPool, create_pool},
    dto::{
        catalog::{CreateCategoryRequest, CreateProductRequest, CreateStorageRequest},
        customers::CreateCustomerRequest,
        orders::{
            CreateOrderItemRequest, CreateOrderRequest, CreateOrderStatusRequest,
            CreatePaymentRequest, CreateShippingRequest,
        },
        reviews::{CreateDiscountRequest, CreateReviewRequest},
    },
    error::AppError,
    services::{catalog_service, customer_service, order_service, review_service},
};
use chrono::{NaiveTime, Utc};
use rust_decimal::Decimal;

// Integration flow: build the whole catalog graph, then knock out the parents
// and watch the cascade rules clean up behind them.
#[tokio::test]
async fn crud_cascade_and_constraint_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run shop flow tests."
            );
            return Ok(());
        }
    };

    let pool = setup(&database_url).await?;

    // Create followed by list yields exactly the stored row.
    let category = catalog_service::create_category(
        &pool,
        CreateCategoryRequest {
            name: "Books".into(),
        },
    )
    .await?;
    assert!(category.id >= 1);
    let categories = catalog_service::list_categories(&pool).await?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Books");
    assert!(categories[0].created_at <= Utc::now());

    // Deleting an absent id reports false and changes nothing.
    assert!(!catalog_service::delete_product(&pool, 999).await?);
    assert!(catalog_service::list_products(&pool).await?.is_empty());

    let storage = catalog_service::create_storage(
        &pool,
        CreateStorageRequest {
            address: "12 Depot Lane".into(),
            quantity: 100,
        },
    )
    .await?;

    let product = catalog_service::create_product(
        &pool,
        CreateProductRequest {
            name: "Go Guide".into(),
            description: Some("A practical tour of Go".into()),
            price: Decimal::new(2999, 2),
            color: None,
            weight: None,
            category_id: Some(category.id),
            storage_id: Some(storage.id),
        },
    )
    .await?;
    assert_eq!(product.category_id, Some(category.id));
    assert_eq!(product.price, Decimal::new(2999, 2));

    // A dangling foreign key is rejected and the insert rolled back.
    let err = catalog_service::create_product(
        &pool,
        CreateProductRequest {
            name: "Ghost".into(),
            description: None,
            price: Decimal::new(100, 2),
            color: None,
            weight: None,
            category_id: Some(9999),
            storage_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    assert_eq!(catalog_service::list_products(&pool).await?.len(), 1);

    // Customer email is unique; the first row is untouched by the conflict.
    let customer =
        customer_service::create_customer(&pool, customer_request("ada@example.com")).await?;
    let err = customer_service::create_customer(&pool, customer_request("ada@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    let customers = customer_service::list_customers(&pool).await?;
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, customer.id);

    // Assemble an order with payment, shipping, item, review, and discount.
    let status = order_service::create_order_status(
        &pool,
        CreateOrderStatusRequest {
            description: "pending".into(),
        },
    )
    .await?;
    let order = order_service::create_order(
        &pool,
        CreateOrderRequest {
            customer_id: customer.id,
            order_date: Utc::now(),
            total_amount: Decimal::new(2999, 2),
            status_id: status.id,
        },
    )
    .await?;

    order_service::create_payment(&pool, payment_request(order.id)).await?;
    let err = order_service::create_payment(&pool, payment_request(order.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    assert_eq!(order_service::list_payments(&pool).await?.len(), 1);

    order_service::create_shipping(&pool, shipping_request(order.id)).await?;
    let err = order_service::create_shipping(&pool, shipping_request(order.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    order_service::create_order_item(
        &pool,
        CreateOrderItemRequest {
            order_id: order.id,
            product_id: product.id,
            quantity: 1,
            price: Decimal::new(2999, 2),
        },
    )
    .await?;
    review_service::create_review(
        &pool,
        CreateReviewRequest {
            product_id: product.id,
            customer_id: customer.id,
            review_text: Some("Solid intro".into()),
            rating: 5,
            review_date: Utc::now(),
        },
    )
    .await?;
    review_service::create_discount(
        &pool,
        CreateDiscountRequest {
            product_id: product.id,
            discount_percent: Decimal::new(1000, 2),
            start_date: Utc::now(),
            end_date: Utc::now(),
        },
    )
    .await?;

    // Deleting the category removes the product and everything hanging off
    // it; the order itself belongs to the customer and stays.
    assert!(catalog_service::delete_category(&pool, category.id).await?);
    assert!(catalog_service::list_products(&pool).await?.is_empty());
    assert!(review_service::list_reviews(&pool).await?.is_empty());
    assert!(review_service::list_discounts(&pool).await?.is_empty());
    assert!(order_service::list_order_items(&pool).await?.is_empty());
    assert_eq!(order_service::list_orders(&pool).await?.len(), 1);

    // Deleting the customer cascades to the order, its payment and shipping.
    assert!(customer_service::delete_customer(&pool, customer.id).await?);
    assert!(order_service::list_orders(&pool).await?.is_empty());
    assert!(order_service::list_payments(&pool).await?.is_empty());
    assert!(order_service::list_shippings(&pool).await?.is_empty());

    // Deleting an existing row removes exactly that row and reports true.
    assert!(catalog_service::delete_storage(&pool, storage.id).await?);
    assert!(!catalog_service::delete_storage(&pool, storage.id).await?);
    assert_eq!(order_service::list_order_statuses(&pool).await?.len(), 1);

    Ok(())
}

async fn setup(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = create_pool(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs.
    sqlx::query(
        "TRUNCATE TABLE discounts, reviews, order_items, shippings, payments, orders, \
         order_statuses, customers, products, storages, categories RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

fn customer_request(email: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.to_string(),
        phone: None,
        address: None,
        registration_date: Utc::now(),
    }
}

fn payment_request(order_id: i32) -> CreatePaymentRequest {
    CreatePaymentRequest {
        order_id,
        payment_method: "card".into(),
        payment_amount: Decimal::new(2999, 2),
        payment_date: Utc::now(),
    }
}

fn shipping_request(order_id: i32) -> CreateShippingRequest {
    CreateShippingRequest {
        order_id,
        shipping_address: "221B Baker Street".into(),
        shipping_method: "courier".into(),
        shipping_cost: Decimal::new(500, 2),
        shipping_date: Utc::now(),
        shipping_time: NaiveTime::from_hms_opt(14, 30, 0).expect("valid time"),
    }
}
