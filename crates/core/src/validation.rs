//! Field validation for editor-supplied content.
//!
//! Length caps match the column constraints of the content tables. All
//! checks return [`CoreError::Validation`], which the HTTP layer maps to
//! a 400 response.

use crate::error::CoreError;

/// Maximum title length for singleton pages and music releases.
pub const PAGE_TITLE_MAX: usize = 200;
/// Maximum title/venue length for news items and tour dates.
pub const NEWS_TITLE_MAX: usize = 300;
/// Maximum title length for gallery photos and videos.
pub const GALLERY_TITLE_MAX: usize = 512;

fn validate_title(title: &str, max: usize) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > max {
        return Err(CoreError::Validation(format!(
            "Title must be at most {max} characters"
        )));
    }
    Ok(())
}

pub fn validate_page_title(title: &str) -> Result<(), CoreError> {
    validate_title(title, PAGE_TITLE_MAX)
}

pub fn validate_news_title(title: &str) -> Result<(), CoreError> {
    validate_title(title, NEWS_TITLE_MAX)
}

pub fn validate_gallery_title(title: &str) -> Result<(), CoreError> {
    validate_title(title, GALLERY_TITLE_MAX)
}

/// Venue is optional on tour dates but capped like the title.
pub fn validate_venue(venue: &str) -> Result<(), CoreError> {
    if venue.len() > NEWS_TITLE_MAX {
        return Err(CoreError::Validation(format!(
            "Venue must be at most {NEWS_TITLE_MAX} characters"
        )));
    }
    Ok(())
}

/// Embedded videos are referenced by an absolute http(s) URL.
pub fn validate_video_url(url: &str) -> Result<(), CoreError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Video must be an http(s) URL".into(),
        ))
    }
}

/// Image fields store a path relative to the media root.
///
/// Rejects absolute paths and parent traversal so a stored value can be
/// safely joined under the media root for thumbnailing and serving.
pub fn validate_image_path(path: &str) -> Result<(), CoreError> {
    if path.is_empty() {
        return Err(CoreError::Validation("Image path must not be empty".into()));
    }
    if path.starts_with('/') {
        return Err(CoreError::Validation(
            "Image path must be relative to the media root".into(),
        ));
    }
    if path.split('/').any(|seg| seg == "..") {
        return Err(CoreError::Validation(
            "Image path must not contain '..' segments".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_must_be_non_empty() {
        assert!(validate_page_title("").is_err());
        assert!(validate_news_title("   ").is_err());
        assert!(validate_gallery_title("Live at Budokan").is_ok());
    }

    #[test]
    fn title_caps_differ_per_kind() {
        let long = "a".repeat(301);
        assert!(validate_news_title(&long).is_err());
        assert!(validate_gallery_title(&long).is_ok());
        assert!(validate_page_title(&"a".repeat(201)).is_err());
    }

    #[test]
    fn empty_venue_is_fine() {
        assert!(validate_venue("").is_ok());
        assert!(validate_venue(&"v".repeat(301)).is_err());
    }

    #[test]
    fn video_urls_must_be_http() {
        assert!(validate_video_url("https://youtu.be/abc123").is_ok());
        assert!(validate_video_url("http://example.com/v").is_ok());
        assert!(validate_video_url("ftp://example.com/v").is_err());
        assert!(validate_video_url("youtu.be/abc123").is_err());
    }

    #[test]
    fn image_paths_stay_under_the_media_root() {
        assert!(validate_image_path("news/cover.jpg").is_ok());
        assert!(validate_image_path("/etc/passwd").is_err());
        assert!(validate_image_path("news/../../secret.png").is_err());
        assert!(validate_image_path("").is_err());
    }
}
