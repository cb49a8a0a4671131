//! Gallery photo models.

use murasaki_core::language::Language;
use murasaki_core::types::{DbId, Timestamp};
use murasaki_core::urls::{photo_path, Routable};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub live: bool,
    pub date: Timestamp,
}

impl Routable for Photo {
    fn url_for(&self, language: Language) -> String {
        photo_path(self.id, language)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePhoto {
    pub language: Language,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub live: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePhoto {
    pub language: Language,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub live: Option<bool>,
}

/// Back-office listing row.
#[derive(Debug, FromRow, Serialize)]
pub struct PhotoAdminRow {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub image: String,
    pub live: bool,
    pub date: Timestamp,
    pub translation_count: i64,
}
