//! Tour date models.

use chrono::NaiveDate;
use murasaki_core::language::Language;
use murasaki_core::types::DbId;
use murasaki_core::urls::{tour_date_path, Routable};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One language's row of a tour date. Unlike the dated media kinds, `date`
/// is the concert date and is set by the editor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourDate {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub venue: String,
    pub description: String,
    pub date: NaiveDate,
    pub live: bool,
}

impl Routable for TourDate {
    fn url_for(&self, language: Language) -> String {
        tour_date_path(self.id, language)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTourDate {
    pub language: Language,
    pub title: String,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub live: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTourDate {
    pub language: Language,
    pub title: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub live: Option<bool>,
}

/// Back-office listing row.
#[derive(Debug, FromRow, Serialize)]
pub struct TourDateAdminRow {
    pub id: DbId,
    pub language_code: String,
    pub title: String,
    pub venue: String,
    pub date: NaiveDate,
    pub live: bool,
    pub translation_count: i64,
}
