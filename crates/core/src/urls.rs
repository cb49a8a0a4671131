//! Canonical paths for every public route.
//!
//! All resolution takes the target language as an explicit argument; there
//! is no ambient "current language" anywhere in the system, so computing a
//! sibling-language path needs no save/restore dance. Paths are identical
//! across languages except for the leading language segment.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::page_type::PageType;
use crate::types::DbId;

/// Path of a singleton page. The home page sits at the language root.
pub fn page_path(page_type: PageType, language: Language) -> String {
    match page_type {
        PageType::Home => format!("/{}/", language.code()),
        other => format!("/{}/{}/", language.code(), other.as_str()),
    }
}

pub fn news_item_path(id: DbId, language: Language) -> String {
    format!("/{}/news/{id}/", language.code())
}

pub fn tour_date_path(id: DbId, language: Language) -> String {
    format!("/{}/tour/{id}/", language.code())
}

pub fn photo_path(id: DbId, language: Language) -> String {
    format!("/{}/gallery/photos/{id}/", language.code())
}

pub fn video_path(id: DbId, language: Language) -> String {
    format!("/{}/gallery/videos/{id}/", language.code())
}

/// The two gallery listing sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GallerySection {
    Photos,
    Videos,
}

impl GallerySection {
    pub fn as_str(&self) -> &'static str {
        match self {
            GallerySection::Photos => "photos",
            GallerySection::Videos => "videos",
        }
    }
}

/// Listing path of a gallery section.
pub fn gallery_path(section: GallerySection, language: Language) -> String {
    format!("/{}/gallery/{}/", language.code(), section.as_str())
}

/// Implemented by entity kinds whose detail pages exist in both languages.
///
/// `url_for` must not depend on any state beyond the entity's identity, so
/// the switch-language control can resolve the sibling path for free.
pub trait Routable {
    fn url_for(&self, language: Language) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_path_is_the_language_root() {
        assert_eq!(page_path(PageType::Home, Language::En), "/en/");
        assert_eq!(page_path(PageType::Home, Language::Ja), "/ja/");
    }

    #[test]
    fn section_page_paths_carry_the_section_name() {
        assert_eq!(page_path(PageType::Band, Language::En), "/en/band/");
        assert_eq!(page_path(PageType::News, Language::Ja), "/ja/news/");
        assert_eq!(page_path(PageType::Shop, Language::En), "/en/shop/");
    }

    #[test]
    fn detail_paths_differ_only_in_the_language_segment() {
        assert_eq!(news_item_path(7, Language::En), "/en/news/7/");
        assert_eq!(news_item_path(7, Language::Ja), "/ja/news/7/");
        assert_eq!(tour_date_path(3, Language::Ja), "/ja/tour/3/");
        assert_eq!(photo_path(12, Language::En), "/en/gallery/photos/12/");
        assert_eq!(video_path(5, Language::Ja), "/ja/gallery/videos/5/");
    }

    #[test]
    fn gallery_listing_paths() {
        assert_eq!(
            gallery_path(GallerySection::Photos, Language::En),
            "/en/gallery/photos/"
        );
        assert_eq!(
            gallery_path(GallerySection::Videos, Language::Ja),
            "/ja/gallery/videos/"
        );
    }
}
