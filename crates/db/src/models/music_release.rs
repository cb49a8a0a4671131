//! Music release models. Releases are listed on the music page; they have
//! no public detail route.

use murasaki_core::language::Language;
use murasaki_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MusicRelease {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub live: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateMusicRelease {
    pub language: Language,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub live: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMusicRelease {
    pub language: Language,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub live: Option<bool>,
}

/// Back-office listing row.
#[derive(Debug, FromRow, Serialize)]
pub struct MusicReleaseAdminRow {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub image: Option<String>,
    pub live: bool,
    pub translation_count: i64,
}
