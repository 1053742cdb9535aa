use axum_shop_api::{config::AppConfig, db::create_pool};
use chrono::Utc;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Skip when a catalog already exists; the seed is for empty local stores.
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM categories")
        .fetch_one(&pool)
        .await?;
    if existing.0 > 0 {
        println!("Store already seeded, nothing to do");
        return Ok(());
    }

    let category_id = seed_category(&pool, "Books").await?;
    let storage_id = seed_storage(&pool, "12 Depot Lane", 500).await?;
    seed_products(&pool, category_id, storage_id).await?;
    seed_order_statuses(&pool).await?;
    seed_customer(&pool, "demo@example.com").await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_category(pool: &sqlx::PgPool, name: &str) -> anyhow::Result<i32> {
    let row: (i32,) = sqlx::query_as("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await?;
    println!("Seeded category {name}");
    Ok(row.0)
}

async fn seed_storage(pool: &sqlx::PgPool, address: &str, quantity: i32) -> anyhow::Result<i32> {
    let row: (i32,) =
        sqlx::query_as("INSERT INTO storages (address, quantity) VALUES ($1, $2) RETURNING id")
            .bind(address)
            .bind(quantity)
            .fetch_one(pool)
            .await?;
    println!("Seeded storage at {address}");
    Ok(row.0)
}

async fn seed_products(
    pool: &sqlx::PgPool,
    category_id: i32,
    storage_id: i32,
) -> anyhow::Result<()> {
    let products = vec![
        ("Go Guide", "A practical tour of Go", "29.99"),
        ("Rust in Action", "Systems programming by example", "39.50"),
        ("SQL Cookbook", "Query recipes that hold up", "24.00"),
    ];

    for (name, desc, price) in products {
        sqlx::query(
            r#"
            INSERT INTO products (name, description, price, category_id, storage_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(name)
        .bind(desc)
        .bind(price.parse::<Decimal>()?)
        .bind(category_id)
        .bind(storage_id)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}

async fn seed_order_statuses(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    for description in ["pending", "paid", "shipped", "delivered"] {
        sqlx::query("INSERT INTO order_statuses (description) VALUES ($1)")
            .bind(description)
            .execute(pool)
            .await?;
    }
    println!("Seeded order statuses");
    Ok(())
}

async fn seed_customer(pool: &sqlx::PgPool, email: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO customers (first_name, last_name, email, registration_date)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind("Demo")
    .bind("Customer")
    .bind(email)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    println!("Seeded customer {email}");
    Ok(())
}
