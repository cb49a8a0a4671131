//! Request-language resolution.
//!
//! Public routes carry their language as the leading path segment; the
//! helpers here parse that segment and, for bare paths, pick a language
//! from the `Accept-Language` header so the redirect lands somewhere
//! sensible.

use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::HeaderMap;
use murasaki_core::language::Language;

use crate::error::AppError;

/// Parse the `{lang}` path segment. Anything outside the supported pair is
/// an unknown route, not a bad request.
pub fn parse_path_language(raw: &str) -> Result<Language, AppError> {
    Language::from_code(raw)
        .map_err(|_| AppError::NotFound(format!("No content under language prefix '{raw}'")))
}

/// Pick the UI language for a request that carries no language prefix.
pub fn detect_language(headers: &HeaderMap) -> Language {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(preferred_language)
        .unwrap_or(Language::En)
}

/// First supported primary subtag wins; everything else falls back to
/// English. Quality weights are ignored beyond the order the client sent.
fn preferred_language(accept: &str) -> Language {
    for part in accept.split(',') {
        let tag = part.split(';').next().unwrap_or("").trim();
        let primary = tag.split('-').next().unwrap_or("");
        match primary {
            "ja" => return Language::Ja,
            "en" => return Language::En,
            _ => {}
        }
    }
    Language::En
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(accept: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(accept).unwrap());
        headers
    }

    #[test]
    fn path_language_accepts_the_pair() {
        assert!(parse_path_language("en").is_ok());
        assert!(parse_path_language("ja").is_ok());
    }

    #[test]
    fn path_language_rejects_everything_else() {
        assert!(parse_path_language("fr").is_err());
        assert!(parse_path_language("news").is_err());
    }

    #[test]
    fn detects_japanese_with_region_and_weights() {
        let headers = headers_with("ja-JP,ja;q=0.9,en-US;q=0.8");
        assert_eq!(detect_language(&headers), Language::Ja);
    }

    #[test]
    fn detects_english() {
        let headers = headers_with("en-GB,en;q=0.9");
        assert_eq!(detect_language(&headers), Language::En);
    }

    #[test]
    fn first_supported_tag_wins() {
        let headers = headers_with("fr-FR,ja;q=0.5");
        assert_eq!(detect_language(&headers), Language::Ja);
    }

    #[test]
    fn unsupported_or_missing_header_falls_back_to_english() {
        assert_eq!(detect_language(&headers_with("fr,de;q=0.8")), Language::En);
        assert_eq!(detect_language(&HeaderMap::new()), Language::En);
    }
}
