use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Open the Postgres pool shared by every request. Connections are checked
/// out per query and handed back on every exit path, including errors.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}
