//! Languages and the language provider collaborator.
//!
//! The selection never stores languages itself. It asks a [`LanguageProvider`]
//! for the configured list, the site default and the language of the active
//! request. [`LanguageManager`] is the in-memory provider used by the CLI.

use serde::{Deserialize, Serialize};

/// Special code for content whose language is not specified.
pub const LANGCODE_NOT_SPECIFIED: &str = "und";

/// Special code for content where a language does not apply.
pub const LANGCODE_NOT_APPLICABLE: &str = "zxx";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    pub name: String,
    /// Locked languages are system languages the site cannot remove.
    #[serde(default)]
    pub locked: bool,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            locked: false,
        }
    }

    pub fn locked(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            locked: true,
        }
    }
}

/// The two locked languages every site carries.
pub fn locked_languages() -> Vec<Language> {
    vec![
        Language::locked(LANGCODE_NOT_SPECIFIED, "Not specified"),
        Language::locked(LANGCODE_NOT_APPLICABLE, "Not applicable"),
    ]
}

pub trait LanguageProvider {
    /// All languages in display order. Locked languages come last and are
    /// only included when `include_locked` is set.
    fn languages(&self, include_locked: bool) -> Vec<Language>;

    fn default_language(&self) -> Language;

    /// Language of the interface text for the current request.
    fn current_language(&self) -> Language;
}

/// In-memory language provider.
#[derive(Debug, Clone)]
pub struct LanguageManager {
    languages: Vec<Language>,
    default_code: String,
    current_code: String,
}

impl LanguageManager {
    /// Build a manager over configurable languages. Locked languages are
    /// appended automatically unless the list already defines them.
    ///
    /// `default_code` and `current_code` are expected to name languages from
    /// the list; unknown codes fall back to a bare language carrying the code.
    pub fn new(
        languages: Vec<Language>,
        default_code: impl Into<String>,
        current_code: impl Into<String>,
    ) -> Self {
        let mut languages = languages;
        for locked in locked_languages() {
            if !languages.iter().any(|l| l.code == locked.code) {
                languages.push(locked);
            }
        }
        Self {
            languages,
            default_code: default_code.into(),
            current_code: current_code.into(),
        }
    }

    /// Same languages, different interface language. Used per request.
    pub fn with_current(&self, current_code: impl Into<String>) -> Self {
        Self {
            current_code: current_code.into(),
            ..self.clone()
        }
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    fn lookup(&self, code: &str) -> Language {
        self.get(code)
            .cloned()
            .unwrap_or_else(|| Language::new(code, code))
    }
}

impl LanguageProvider for LanguageManager {
    fn languages(&self, include_locked: bool) -> Vec<Language> {
        let (mut unlocked, locked): (Vec<Language>, Vec<Language>) =
            self.languages.iter().cloned().partition(|l| !l.locked);
        if include_locked {
            unlocked.extend(locked);
        }
        unlocked
    }

    fn default_language(&self) -> Language {
        self.lookup(&self.default_code)
    }

    fn current_language(&self) -> Language {
        self.lookup(&self.current_code)
    }
}
