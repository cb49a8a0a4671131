//! Admin-listing thumbnail tags.
//!
//! The admin tables show a small preview next to rows that carry an image.
//! Only the image header is read (never the pixel data), and any failure --
//! missing field, missing file, unreadable header -- degrades to a literal
//! `-` cell instead of an error.

use std::path::Path;

/// Per-dimension cap for the rendered tag.
pub const THUMBNAIL_MAX: u32 = 100;

/// Render an `<img>` tag for an image stored relative to `media_root`,
/// or `-` when there is nothing presentable.
///
/// The tag's width/height are the file's real dimensions, each bounded to
/// [`THUMBNAIL_MAX`]. A dimension reported as zero falls back to the cap.
pub fn thumbnail_tag(media_root: &Path, media_url: &str, image: Option<&str>) -> String {
    let Some(rel) = image.filter(|p| !p.is_empty()) else {
        return "-".to_string();
    };

    match image::image_dimensions(media_root.join(rel)) {
        Ok((w, h)) => {
            let width = bounded(w);
            let height = bounded(h);
            let base = media_url.trim_end_matches('/');
            format!("<img src=\"{base}/{rel}\" width=\"{width}\" height=\"{height}\" />")
        }
        Err(_) => "-".to_string(),
    }
}

fn bounded(dim: u32) -> u32 {
    if dim == 0 {
        THUMBNAIL_MAX
    } else {
        dim.min(THUMBNAIL_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn media_dir_with_png(rel: &str, width: u32, height: u32) -> TempDir {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).expect("create parent");
        image::RgbaImage::new(width, height)
            .save(&path)
            .expect("write test png");
        dir
    }

    #[test]
    fn large_image_is_bounded_to_the_cap() {
        let dir = media_dir_with_png("news/cover.png", 800, 600);
        let tag = thumbnail_tag(dir.path(), "/media", Some("news/cover.png"));
        assert_eq!(
            tag,
            "<img src=\"/media/news/cover.png\" width=\"100\" height=\"100\" />"
        );
    }

    #[test]
    fn small_image_keeps_its_real_dimensions() {
        let dir = media_dir_with_png("news/icon.png", 40, 60);
        let tag = thumbnail_tag(dir.path(), "/media", Some("news/icon.png"));
        assert_eq!(
            tag,
            "<img src=\"/media/news/icon.png\" width=\"40\" height=\"60\" />"
        );
    }

    #[test]
    fn only_the_oversized_dimension_is_clamped() {
        let dir = media_dir_with_png("wide.png", 300, 50);
        let tag = thumbnail_tag(dir.path(), "/media/", Some("wide.png"));
        assert_eq!(tag, "<img src=\"/media/wide.png\" width=\"100\" height=\"50\" />");
    }

    #[test]
    fn missing_image_field_renders_a_dash() {
        let dir = TempDir::new().unwrap();
        assert_eq!(thumbnail_tag(dir.path(), "/media", None), "-");
        assert_eq!(thumbnail_tag(dir.path(), "/media", Some("")), "-");
    }

    #[test]
    fn missing_file_renders_a_dash() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            thumbnail_tag(dir.path(), "/media", Some("news/gone.png")),
            "-"
        );
    }

    #[test]
    fn unreadable_file_renders_a_dash() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not an image").unwrap();
        assert_eq!(
            thumbnail_tag(dir.path(), "/media", Some("broken.png")),
            "-"
        );
    }
}
