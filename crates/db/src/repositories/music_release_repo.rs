//! Repository for the `music_releases` / `music_release_translations`
//! tables. Releases have no timestamps; listings run newest-identity
//! first.

use murasaki_core::language::Language;
use murasaki_core::types::DbId;
use sqlx::PgPool;

use crate::models::music_release::{
    CreateMusicRelease, MusicRelease, MusicReleaseAdminRow, UpdateMusicRelease,
};

const COLUMNS: &str = "music_release_id AS id, language_code, title, description, image, live";

pub struct MusicReleaseRepo;

impl MusicReleaseRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMusicRelease,
    ) -> Result<MusicRelease, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) =
            sqlx::query_as("INSERT INTO music_releases DEFAULT VALUES RETURNING id")
                .fetch_one(&mut *tx)
                .await?;

        let query = format!(
            "INSERT INTO music_release_translations
                (music_release_id, language_code, title, description, image, live)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let release = sqlx::query_as::<_, MusicRelease>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.image)
            .bind(input.live.unwrap_or(false))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(release)
    }

    pub async fn create_translation(
        pool: &PgPool,
        id: DbId,
        input: &CreateMusicRelease,
    ) -> Result<MusicRelease, sqlx::Error> {
        let query = format!(
            "INSERT INTO music_release_translations
                (music_release_id, language_code, title, description, image, live)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MusicRelease>(&query)
            .bind(id)
            .bind(input.language.code())
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(&input.image)
            .bind(input.live.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    pub async fn get(
        pool: &PgPool,
        id: DbId,
        language: Language,
    ) -> Result<Option<MusicRelease>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM music_release_translations
             WHERE music_release_id = $1 AND language_code = $2"
        );
        sqlx::query_as::<_, MusicRelease>(&query)
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
                SELECT 1 FROM music_release_translations
                WHERE music_release_id = $1 AND language_code = $2
            )",
        )
        .bind(id)
        .bind(language.code())
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    pub async fn translation_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM music_release_translations WHERE music_release_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    pub async fn update_translation(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMusicRelease,
    ) -> Result<Option<MusicRelease>, sqlx::Error> {
        let query = format!(
            "UPDATE music_release_translations SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                image = COALESCE($5, image),
                live = COALESCE($6, live)
             WHERE music_release_id = $1 AND language_code = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MusicRelease>(&query)
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
            "INSERT INTO music_release_translations
                (music_release_id, language_code, title, description, image, live)
             SELECT music_release_id, $3, title, description, image, live
             FROM music_release_translations
             WHERE music_release_id = $1 AND language_code = $2",
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
    ) -> Result<Vec<MusicRelease>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM music_release_translations
             WHERE language_code = $1 AND live = TRUE
             ORDER BY music_release_id DESC"
        );
        sqlx::query_as::<_, MusicRelease>(&query)
            .bind(language.code())
            .fetch_all(pool)
            .await
    }

    pub async fn list_admin(
        pool: &PgPool,
        language: Language,
    ) -> Result<Vec<MusicReleaseAdminRow>, sqlx::Error> {
        sqlx::query_as::<_, MusicReleaseAdminRow>(
            "SELECT music_release_id AS id, language_code, title, image, live,
                    (SELECT COUNT(*) FROM music_release_translations x
                      WHERE x.music_release_id = t.music_release_id) AS translation_count
             FROM music_release_translations t
             WHERE t.language_code = $1
             ORDER BY t.music_release_id DESC",
        )
        .bind(language.code())
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM music_releases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
