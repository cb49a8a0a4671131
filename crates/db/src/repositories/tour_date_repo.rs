//! Repository for the `tour_dates` / `tour_date_translations` tables.

use murasaki_core::language::Language;
use murasaki_core::types::DbId;
use sqlx::PgPool;

use crate::models::tour_date::{CreateTourDate, TourDate, TourDateAdminRow, UpdateTourDate};

const COLUMNS: &str = "tour_date_id AS id, language_code, title, venue, description, date, live";

pub struct TourDateRepo;

impl TourDateRepo {
    pub async fn create(pool: &PgPool, input: &CreateTourDate) -> Result<TourDate, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as("INSERT INTO tour_dates DEFAULT VALUES RETURNING id")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO tour_date_translations
                (tour_date_id, language_code, title, venue, description, date, live)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let tour_date = sqlx::query_as::<_, TourDate>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.venue.as_deref().unwrap_or(""))
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(input.date)
            .bind(input.live.unwrap_or(false))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(tour_date)
    }

    pub async fn create_translation(
        pool: &PgPool,
        id: DbId,
        input: &CreateTourDate,
    ) -> Result<TourDate, sqlx::Error> {
        let query = format!(
            "INSERT INTO tour_date_translations
                (tour_date_id, language_code, title, venue, description, date, live)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourDate>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.venue.as_deref().unwrap_or(""))
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(input.date)
            .bind(input.live.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    pub async fn get(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<TourDate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tour_date_translations
             WHERE tour_date_id = $1 AND language_code = $2"
        );
        sqlx::query_as::<_, TourDate>(&query)
            .bind(id)
            .bind(language.code())
            .fetch_optional(pool)
            .await
    }

    pub async fn get_with_fallback(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<TourDate>, sqlx::Error> {
        if let Some(tour_date) = Self::get(pool, id, language).await? {
            return Ok(Some(tour_date));
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
                SELECT 1 FROM tour_date_translations
                WHERE tour_date_id = $1 AND language_code = $2
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
            sqlx::query_as("SELECT COUNT(*) FROM tour_date_translations WHERE tour_date_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Partial update; the concert date is editor-owned and updatable,
    /// unlike the auto-set dates of the media kinds.
    pub async fn update_translation(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTourDate,
    ) -> Result<Option<TourDate>, sqlx::Error> {
        let query = format!(
            "UPDATE tour_date_translations SET
                title = COALESCE($3, title),
                venue = COALESCE($4, venue),
                description = COALESCE($5, description),
                date = COALESCE($6, date),
                live = COALESCE($7, live)
             WHERE tour_date_id = $1 AND language_code = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourDate>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(&input.venue)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.live)
            .fetch_optional(pool)
            .await
    }

    /// One-shot translation seed (see `NewsItemRepo::seed_missing_translation`).
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
            "INSERT INTO tour_date_translations
                (tour_date_id, language_code, title, venue, description, date, live)
             SELECT tour_date_id, $3, title, venue, description, date, live
             FROM tour_date_translations
             WHERE tour_date_id = $1 AND language_code = $2",
        )
        .bind(id)
        .bind(saved.code())
        .bind(other.code())
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_live(
        pool: &PgPool,
        language: Language,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TourDate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tour_date_translations
             WHERE language_code = $1 AND live = TRUE
             ORDER BY date DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, TourDate>(&query)
            .bind(language.code())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_live(pool: &PgPool, language: Language) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM tour_date_translations
             WHERE language_code = $1 AND live = TRUE",
        )
        .bind(language.code())
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    pub async fn list_admin(
        pool: &PgPool,
        language: Language,
    ) -> Result<Vec<TourDateAdminRow>, sqlx::Error> {
        sqlx::query_as::<_, TourDateAdminRow>(
            "SELECT tour_date_id AS id, language_code, title, venue, date, live,
                    (SELECT COUNT(*) FROM tour_date_translations x
                      WHERE x.tour_date_id = t.tour_date_id) AS translation_count
             FROM tour_date_translations t
             WHERE t.language_code = $1
             ORDER BY t.date DESC",
        )
        .bind(language.code())
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tour_dates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
