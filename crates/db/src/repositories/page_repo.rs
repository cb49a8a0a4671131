//! Repository for the `pages` / `page_translations` tables.
//!
//! Pages are singletons per page type: never created or deleted by
//! editors, only materialized lazily the first time a section is
//! requested.

use murasaki_core::language::Language;
use murasaki_core::page_type::PageType;
use murasaki_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::{Page, PageAdminRow, UpdatePage};

const COLUMNS: &str = "page_id AS id, language_code, title, intro, page_type";

/// Provides lookup, lazy creation, and translation-pair operations for
/// the singleton nav pages.
pub struct PageRepo;

impl PageRepo {
    /// The page of a given type in one language, `None` when that
    /// language's row is absent.
    pub async fn find_by_type(
        pool: &PgPool,
        page_type: PageType,
        language: Language,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_translations
             WHERE page_type = $1 AND language_code = $2
             LIMIT 1"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(page_type.as_str())
            .bind(language.code())
            .fetch_optional(pool)
            .await
    }

    /// Fetch the page for a section, creating it on first request.
    ///
    /// When the page type has no identity yet, both language rows are
    /// created in one transaction, titled with the section's display name;
    /// editors then localize them through the admin. When the identity
    /// exists but the requested language's row does not, the complement
    /// row is returned instead of an error. The first-request
    /// check-then-create pair can race with itself; at this traffic scale
    /// that is accepted.
    pub async fn get_or_create(
        pool: &PgPool,
        page_type: PageType,
        language: Language,
    ) -> Result<Page, sqlx::Error> {
        if let Some(page) = Self::find_by_type(pool, page_type, language).await? {
            return Ok(page);
        }
        if let Some(page) = Self::find_by_type(pool, page_type, language.complement()).await? {
            return Ok(page);
        }

        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as("INSERT INTO pages DEFAULT VALUES RETURNING id")
            .fetch_one(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO page_translations (page_id, language_code, title, page_type)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let mut requested = None;
        for lang in [Language::En, Language::Ja] {
            let row = sqlx::query_as::<_, Page>(&insert)
                .bind(id)
                .bind(lang.code())
                .bind(page_type.default_title())
                .bind(page_type.as_str())
                .fetch_one(&mut *tx)
                .await?;
            if lang == language {
                requested = Some(row);
            }
        }

        tx.commit().await?;

        // Both languages were just inserted, so the requested one is set.
        requested.ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn get(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_translations
             WHERE page_id = $1 AND language_code = $2"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(language.code())
            .fetch_optional(pool)
            .await
    }

    pub async fn has_translation(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM page_translations
                WHERE page_id = $1 AND language_code = $2
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
            sqlx::query_as("SELECT COUNT(*) FROM page_translations WHERE page_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Edit one language's title/intro. `page_type` is a cross-language
    /// key and is never updated.
    pub async fn update_translation(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE page_translations SET
                title = COALESCE($3, title),
                intro = COALESCE($4, intro)
             WHERE page_id = $1 AND language_code = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(&input.intro)
            .fetch_optional(pool)
            .await
    }

    /// One-shot translation seed, as for the other content kinds.
    /// `page_type` is copied along so both rows keep denoting the same
    /// navigation slot.
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
            "INSERT INTO page_translations (page_id, language_code, title, intro, page_type)
             SELECT page_id, $3, title, intro, page_type
             FROM page_translations
             WHERE page_id = $1 AND language_code = $2",
        )
        .bind(id)
        .bind(saved.code())
        .bind(other.code())
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Back-office listing: one language's rows in nav order.
    pub async fn list_admin(
        pool: &PgPool,
        language: Language,
    ) -> Result<Vec<PageAdminRow>, sqlx::Error> {
        sqlx::query_as::<_, PageAdminRow>(
            "SELECT page_id AS id, language_code, title, page_type,
                    (SELECT COUNT(*) FROM page_translations x
                      WHERE x.page_id = t.page_id) AS translation_count
             FROM page_translations t
             WHERE t.language_code = $1
             ORDER BY t.page_id ASC",
        )
        .bind(language.code())
        .fetch_all(pool)
        .await
    }
}
