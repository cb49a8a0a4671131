//! Shared query parameter types for API handlers.

use murasaki_core::language::Language;
use serde::Deserialize;

/// Listing-page parameter (`?page=N`).
///
/// Kept as a raw string so a malformed value falls back to page 1 in
/// `pagination::parse_page_param` instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct PageParam {
    pub page: Option<String>,
}

/// Admin listing parameter (`?language=en|ja`, default `en`).
#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    pub language: Option<Language>,
}

impl AdminListParams {
    pub fn language(&self) -> Language {
        self.language.unwrap_or(Language::En)
    }
}
