//! Repository for the `photos` / `photo_translations` tables.

use murasaki_core::language::Language;
use murasaki_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::{CreatePhoto, Photo, PhotoAdminRow, UpdatePhoto};

const COLUMNS: &str = "photo_id AS id, language_code, title, description, image, live, date";

pub struct PhotoRepo;

impl PhotoRepo {
    pub async fn create(pool: &PgPool, input: &CreatePhoto) -> Result<Photo, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as("INSERT INTO photos DEFAULT VALUES RETURNING id")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO photo_translations
                (photo_id, language_code, title, description, image, live)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let photo = sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.image)
            .bind(input.live.unwrap_or(true))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(photo)
    }

    pub async fn create_translation(
        pool: &PgPool,
        id: DbId,
        input: &CreatePhoto,
    ) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_translations
                (photo_id, language_code, title, description, image, live)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.image)
            .bind(input.live.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    pub async fn get(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_translations
             WHERE photo_id = $1 AND language_code = $2"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(language.code())
            .fetch_optional(pool)
            .await
    }

    pub async fn get_with_fallback(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<Photo>, sqlx::Error> {
        if let Some(photo) = Self::get(pool, id, language).await? {
            return Ok(Some(photo));
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
                SELECT 1 FROM photo_translations
                WHERE photo_id = $1 AND language_code = $2
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
            sqlx::query_as("SELECT COUNT(*) FROM photo_translations WHERE photo_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    pub async fn update_translation(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePhoto,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "UPDATE photo_translations SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                image = COALESCE($5, image),
                live = COALESCE($6, live)
             WHERE photo_id = $1 AND language_code = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
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
            "INSERT INTO photo_translations
                (photo_id, language_code, title, description, image, live, date)
             SELECT photo_id, $3, title, description, image, live, date
             FROM photo_translations
             WHERE photo_id = $1 AND language_code = $2",
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
    ) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_translations
             WHERE language_code = $1 AND live = TRUE
             ORDER BY date DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(language.code())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_live(pool: &PgPool, language: Language) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM photo_translations
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
    ) -> Result<Vec<PhotoAdminRow>, sqlx::Error> {
        sqlx::query_as::<_, PhotoAdminRow>(
            "SELECT photo_id AS id, language_code, title, image, live, date,
                    (SELECT COUNT(*) FROM photo_translations x
                      WHERE x.photo_id = t.photo_id) AS translation_count
             FROM photo_translations t
             WHERE t.language_code = $1
             ORDER BY t.date DESC",
        )
        .bind(language.code())
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
