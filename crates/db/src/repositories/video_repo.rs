//! Repository for the `videos` / `video_translations` tables.

use murasaki_core::language::Language;
use murasaki_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, UpdateVideo, Video, VideoAdminRow};

const COLUMNS: &str = "video_id AS id, language_code, title, description, video, live, date";

pub struct VideoRepo;

impl VideoRepo {
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as("INSERT INTO videos DEFAULT VALUES RETURNING id")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO video_translations
                (video_id, language_code, title, description, video, live)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.video)
            .bind(input.live.unwrap_or(true))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(video)
    }

    pub async fn create_translation(
        pool: &PgPool,
        id: DbId,
        input: &CreateVideo,
    ) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_translations
                (video_id, language_code, title, description, video, live)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.video)
            .bind(input.live.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    pub async fn get(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM video_translations
             WHERE video_id = $1 AND language_code = $2"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(language.code())
            .fetch_optional(pool)
            .await
    }

    pub async fn get_with_fallback(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<Video>, sqlx::Error> {
        if let Some(video) = Self::get(pool, id, language).await? {
            return Ok(Some(video));
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
                SELECT 1 FROM video_translations
                WHERE video_id = $1 AND language_code = $2
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
            sqlx::query_as("SELECT COUNT(*) FROM video_translations WHERE video_id = $1")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    pub async fn update_translation(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE video_translations SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                video = COALESCE($5, video),
                live = COALESCE($6, live)
             WHERE video_id = $1 AND language_code = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video)
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
            "INSERT INTO video_translations
                (video_id, language_code, title, description, video, live, date)
             SELECT video_id, $3, title, description, video, live, date
             FROM video_translations
             WHERE video_id = $1 AND language_code = $2",
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
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM video_translations
             WHERE language_code = $1 AND live = TRUE
             ORDER BY date DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(language.code())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_live(pool: &PgPool, language: Language) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM video_translations
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
    ) -> Result<Vec<VideoAdminRow>, sqlx::Error> {
        sqlx::query_as::<_, VideoAdminRow>(
            "SELECT video_id AS id, language_code, title, video, live, date,
                    (SELECT COUNT(*) FROM video_translations x
                      WHERE x.video_id = t.video_id) AS translation_count
             FROM video_translations t
             WHERE t.language_code = $1
             ORDER BY t.date DESC",
        )
        .bind(language.code())
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
