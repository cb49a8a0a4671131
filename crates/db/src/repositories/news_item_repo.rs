//! Repository for the `news_items` / `news_item_translations` tables.

use murasaki_core::language::Language;
use murasaki_core::types::DbId;
use sqlx::PgPool;

use crate::models::news_item::{CreateNewsItem, NewsItem, NewsItemAdminRow, UpdateNewsItem};

/// Column list for news item queries (translation row flattened onto the
/// identity id).
const COLUMNS: &str = "news_item_id AS id, language_code, title, body, live, date, image";

/// Provides CRUD and translation-pair operations for news items.
pub struct NewsItemRepo;

impl NewsItemRepo {
    /// Create a new news item identity plus its first translation row.
    pub async fn create(pool: &PgPool, input: &CreateNewsItem) -> Result<NewsItem, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as("INSERT INTO news_items DEFAULT VALUES RETURNING id")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO news_item_translations
                (news_item_id, language_code, title, body, live, image)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.body.as_deref().unwrap_or(""))
            .bind(input.live.unwrap_or(false))
            .bind(&input.image)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(item)
    }

    /// Add a translation row to an existing identity. The unique constraint
    /// rejects a second row in the same language.
    pub async fn create_translation(
        pool: &PgPool,
        id: DbId,
        input: &CreateNewsItem,
    ) -> Result<NewsItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_item_translations
                (news_item_id, language_code, title, body, live, image)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.body.as_deref().unwrap_or(""))
            .bind(input.live.unwrap_or(false))
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Fetch one language's row, `None` when that language has no row.
    pub async fn get(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<NewsItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_item_translations
             WHERE news_item_id = $1 AND language_code = $2"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .bind(language.code())
            .fetch_optional(pool)
            .await
    }

    /// Fetch the requested language's row, falling back to the complement
    /// when only the other language has content.
    pub async fn get_with_fallback(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<NewsItem>, sqlx::Error> {
        if let Some(item) = Self::get(pool, id, language).await? {
            return Ok(Some(item));
        }
        Self::get(pool, id, language.complement()).await
    }

    pub async fn has_translation(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM news_item_translations
                WHERE news_item_id = $1 AND language_code = $2
            )",
        )
        .bind(id)
        .bind(language.code())
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    pub async fn translation_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM news_item_translations WHERE news_item_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Partial update of one language's row. `date` is fixed at creation
    /// and never touched here.
    pub async fn update_translation(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNewsItem,
    ) -> Result<Option<NewsItem>, sqlx::Error> {
        let query = format!(
            "UPDATE news_item_translations SET
                title = COALESCE($3, title),
                body = COALESCE($4, body),
                live = COALESCE($5, live),
                image = COALESCE($6, image)
             WHERE news_item_id = $1 AND language_code = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.live)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// One-shot translation seed: copy the just-saved row into the
    /// complementary language if that side is still empty.
    ///
    /// Returns `true` when a row was created. Never overwrites an existing
    /// translation; later edits to either side do not propagate. The
    /// check-then-insert pair is not atomic against a concurrent identical
    /// seed; the unique constraint turns that race into an error for one
    /// of the two savers.
    pub async fn seed_missing_translation(
        pool: &PgPool,
        id: DbId,
        saved: Language,
    ) -> Result<bool, sqlx::Error> {
        let other = saved.complement();
        if Self::has_translation(pool, id, other).await? {
            return Ok(false);
        }

        let result = sqlx::query(
            "INSERT INTO news_item_translations
                (news_item_id, language_code, title, body, live, date, image)
             SELECT news_item_id, $3, title, body, live, date, image
             FROM news_item_translations
             WHERE news_item_id = $1 AND language_code = $2",
        )
        .bind(id)
        .bind(saved.code())
        .bind(other.code())
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Live rows of one language, newest first.
    pub async fn list_live(
        pool: &PgPool,
        language: Language,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NewsItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_item_translations
             WHERE language_code = $1 AND live = TRUE
             ORDER BY date DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, NewsItem>(&query)
            .bind(language.code())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_live(pool: &PgPool, language: Language) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM news_item_translations
             WHERE language_code = $1 AND live = TRUE",
        )
        .bind(language.code())
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Back-office listing: one language's rows, newest first, with the
    /// per-identity translation count.
    pub async fn list_admin(
        pool: &PgPool,
        language: Language,
    ) -> Result<Vec<NewsItemAdminRow>, sqlx::Error> {
        sqlx::query_as::<_, NewsItemAdminRow>(
            "SELECT news_item_id AS id, language_code, title, live, date, image,
                    (SELECT COUNT(*) FROM news_item_translations x
                      WHERE x.news_item_id = t.news_item_id) AS translation_count
             FROM news_item_translations t
             WHERE t.language_code = $1
             ORDER BY t.date DESC",
        )
        .bind(language.code())
        .fetch_all(pool)
        .await
    }

    /// Delete the identity (translations cascade). Returns `false` when the
    /// id does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
