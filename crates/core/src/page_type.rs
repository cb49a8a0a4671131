//! The fixed set of top-level site sections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the singleton pages reachable from the nav bar.
///
/// The value doubles as a cross-language key: every translation of a given
/// page identity carries the same page type, so the type alone identifies
/// the navigation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Home,
    Band,
    Music,
    Tour,
    News,
    Shop,
}

/// All page types, in nav order.
pub const ALL_PAGE_TYPES: &[PageType] = &[
    PageType::Home,
    PageType::Band,
    PageType::Music,
    PageType::Tour,
    PageType::News,
    PageType::Shop,
];

impl PageType {
    /// Stored form (the `page_type` column value).
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Home => "home",
            PageType::Band => "band",
            PageType::Music => "music",
            PageType::Tour => "tour",
            PageType::News => "news",
            PageType::Shop => "shop",
        }
    }

    /// Display name, used as the seed title when a page is created lazily.
    pub fn default_title(&self) -> &'static str {
        match self {
            PageType::Home => "Home",
            PageType::Band => "Band",
            PageType::Music => "Music",
            PageType::Tour => "Tour",
            PageType::News => "News",
            PageType::Shop => "Shop",
        }
    }

    pub fn from_code(code: &str) -> Result<PageType, CoreError> {
        match code {
            "home" => Ok(PageType::Home),
            "band" => Ok(PageType::Band),
            "music" => Ok(PageType::Music),
            "tour" => Ok(PageType::Tour),
            "news" => Ok(PageType::News),
            "shop" => Ok(PageType::Shop),
            other => Err(CoreError::Validation(format!(
                "Unknown page type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
