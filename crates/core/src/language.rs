//! The site's language pair and the switch-language link builder.
//!
//! The site is published in exactly two languages, English and Japanese.
//! Every piece of content is stored per language, and every public page
//! carries a control linking to the same content in the other language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the two supported content languages.
///
/// The pairing is deliberately hard-coded: `complement()` only makes sense
/// for a two-language site. Growing beyond en/ja means replacing the
/// complement logic with a configured language list and an editor-selected
/// seed target, not extending this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ja,
}

impl Language {
    /// ISO 639-1 code, as stored in `language_code` columns and URL prefixes.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// The other half of the pair.
    pub fn complement(&self) -> Language {
        match self {
            Language::En => Language::Ja,
            Language::Ja => Language::En,
        }
    }

    /// The language's name in its own script, used as the link label.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "日本語",
        }
    }

    pub fn from_code(code: &str) -> Result<Language, CoreError> {
        match code {
            "en" => Ok(Language::En),
            "ja" => Ok(Language::Ja),
            other => Err(CoreError::Validation(format!(
                "Unsupported language code '{other}'. Supported: en, ja"
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

/// Payload for the switch-language control rendered on every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchLanguage {
    /// Path to the same content in the target language.
    pub url: String,
    /// Link text, in the target language's own script.
    pub label: &'static str,
    /// Target language code.
    pub code: &'static str,
}

/// Build the switch-language payload for a page viewed in `current`.
///
/// `url_for` resolves the page's own path in an explicit language; callers
/// bind it to either a static section path or a specific entity's path.
pub fn switch_link(url_for: impl Fn(Language) -> String, current: Language) -> SwitchLanguage {
    let target = current.complement();
    SwitchLanguage {
        url: url_for(target),
        label: target.native_name(),
        code: target.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Language ------------------------------------------------------------

    #[test]
    fn complement_swaps_the_pair() {
        assert_eq!(Language::En.complement(), Language::Ja);
        assert_eq!(Language::Ja.complement(), Language::En);
    }

    #[test]
    fn complement_is_an_involution() {
        for lang in [Language::En, Language::Ja] {
            assert_eq!(lang.complement().complement(), lang);
        }
    }

    #[test]
    fn from_code_roundtrip() {
        assert_eq!(Language::from_code("en").unwrap(), Language::En);
        assert_eq!(Language::from_code("ja").unwrap(), Language::Ja);
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert!(Language::from_code("fr").is_err());
        assert!(Language::from_code("").is_err());
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Ja).unwrap(), "\"ja\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    // -- switch_link ---------------------------------------------------------

    #[test]
    fn switch_link_from_english_targets_japanese() {
        let link = switch_link(|l| format!("/{l}/news/"), Language::En);
        assert_eq!(
            link,
            SwitchLanguage {
                url: "/ja/news/".to_string(),
                label: "日本語",
                code: "ja",
            }
        );
    }

    #[test]
    fn switch_link_from_japanese_targets_english() {
        let link = switch_link(|l| format!("/{l}/news/"), Language::Ja);
        assert_eq!(
            link,
            SwitchLanguage {
                url: "/en/news/".to_string(),
                label: "English",
                code: "en",
            }
        );
    }
}
