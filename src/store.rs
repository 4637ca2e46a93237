use anyhow::{Context, bail};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::listing::Listing;

/// Handle to the single-file SQLite store. Owned by the driving loop and
/// closed explicitly when the scrape finishes, normally or not.
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn connect(database_path: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true);
        // One connection is all the sequential loop ever uses.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database at {database_path}"))?;
        Ok(Self { pool })
    }

    /// Creates the listing's table if it doesn't exist. Safe to call on
    /// every run; data from earlier runs is kept and appended to.
    pub async fn ensure_table(&self, listing: Listing) -> anyhow::Result<()> {
        let columns = listing
            .columns()
            .iter()
            .map(|name| format!("{name} TEXT"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            listing.table_name(),
            columns
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    /// Appends one row, binding fields positionally. Each insert is its own
    /// autocommitted statement.
    pub async fn insert_row(&self, listing: Listing, fields: &[String]) -> anyhow::Result<()> {
        let columns = listing.columns();
        if fields.len() != columns.len() {
            bail!(
                "row has {} fields but table {} has {} columns",
                fields.len(),
                listing.table_name(),
                columns.len()
            );
        }
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} VALUES ({})",
            listing.table_name(),
            placeholders
        );
        let mut query = sqlx::query(&sql);
        for field in fields {
            query = query.bind(field);
        }
        query.execute(&self.pool).await?;
        Ok(())
    }

    pub async fn count_rows(&self, listing: Listing) -> anyhow::Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", listing.table_name());
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
