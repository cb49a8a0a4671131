//! Singleton nav-page models.

use murasaki_core::language::Language;
use murasaki_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One language's row of a nav page.
///
/// `page_type` is stored per translation row but is a cross-language key:
/// every translation of the same page identity carries the same value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub intro: String,
    pub page_type: String,
}

/// DTO for editing one language's row of a page.
///
/// There is deliberately no create or delete DTO: pages are singletons,
/// created lazily on first request and never removed. `page_type` is not
/// editable.
#[derive(Debug, Deserialize)]
pub struct UpdatePage {
    pub language: Language,
    pub title: Option<String>,
    pub intro: Option<String>,
}

/// Back-office listing row.
#[derive(Debug, FromRow, Serialize)]
pub struct PageAdminRow {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub page_type: String,
    pub translation_count: i64,
}
