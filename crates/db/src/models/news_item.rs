//! News item models.

use murasaki_core::language::Language;
use murasaki_core::types::{DbId, Timestamp};
use murasaki_core::urls::{news_item_path, Routable};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One language's row of a news item.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsItem {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub body: String,
    pub live: bool,
    pub date: Timestamp,
    /// Path relative to the media root, shared in meaning across languages.
    pub image: Option<String>,
}

impl Routable for NewsItem {
    fn url_for(&self, language: Language) -> String {
        news_item_path(self.id, language)
    }
}

/// DTO for creating a news item (or an existing item's missing translation).
///
/// `date` is set by the database at insert time and is not accepted from
/// the editor.
#[derive(Debug, Deserialize)]
pub struct CreateNewsItem {
    pub language: Language,
    pub title: String,
    pub body: Option<String>,
    pub live: Option<bool>,
    pub image: Option<String>,
}

/// DTO for partial edits of one language's row. `date` stays fixed.
#[derive(Debug, Deserialize)]
pub struct UpdateNewsItem {
    pub language: Language,
    pub title: Option<String>,
    pub body: Option<String>,
    pub live: Option<bool>,
    pub image: Option<String>,
}

/// Back-office listing row.
#[derive(Debug, FromRow, Serialize)]
pub struct NewsItemAdminRow {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub live: bool,
    pub date: Timestamp,
    pub image: Option<String>,
    pub translation_count: i64,
}
