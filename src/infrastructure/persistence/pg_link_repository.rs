//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `links` table.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    code: String,
    url: String,
    clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.code, r.url, r.clicks, r.last_clicked, r.created_at)
    }
}

/// PostgreSQL repository for link storage and click accounting.
///
/// Uses bound parameters for every query. Uniqueness of `code` is enforced by
/// the table's primary key and click increments are single `UPDATE` statements.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, url)
            VALUES ($1, $2)
            RETURNING code, url, clicks, last_clicked, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, url, clicks, last_clicked, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, url, clicks, last_clicked, created_at
            FROM links
            ORDER BY created_at DESC, code
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_click(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked = NOW()
            WHERE code = $1
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn totals(&self) -> Result<(i64, i64), AppError> {
        let totals: (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(clicks), 0)::BIGINT FROM links")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(totals)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
