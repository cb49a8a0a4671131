//! Gallery video models. The video itself is externally hosted; we store
//! the embeddable URL.

use murasaki_core::language::Language;
use murasaki_core::types::{DbId, Timestamp};
use murasaki_core::urls::{video_path, Routable};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub description: String,
    pub video: String,
    pub live: bool,
    pub date: Timestamp,
}

impl Routable for Video {
    fn url_for(&self, language: Language) -> String {
        video_path(self.id, language)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateVideo {
    pub language: Language,
    pub title: String,
    pub description: Option<String>,
    pub video: String,
    pub live: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVideo {
    pub language: Language,
    pub title: Option<String>,
    pub description: Option<String>,
    pub video: Option<String>,
    pub live: Option<bool>,
}

/// Back-office listing row.
#[derive(Debug, FromRow, Serialize)]
pub struct VideoAdminRow {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub video: String,
    pub live: bool,
    pub date: Timestamp,
    pub translation_count: i64,
}
