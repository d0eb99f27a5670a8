//! Language restriction modes and their resolution.
//!
//! A restriction is stored as a plain string. Four values are symbolic
//! (`""`, `site_default`, `current_interface`, `authors_default`); every
//! other string is a literal language code, locked codes included. Parsing is
//! total: an unrecognized mode is never an error, it just names a language.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::context::ResolutionContext;

pub const SITE_DEFAULT: &str = "site_default";
pub const CURRENT_INTERFACE: &str = "current_interface";
pub const AUTHORS_DEFAULT: &str = "authors_default";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum LanguageRestriction {
    /// No filtering.
    #[default]
    Unrestricted,
    SiteDefault,
    CurrentInterface,
    AuthorsDefault,
    Langcode(String),
}

impl LanguageRestriction {
    pub fn parse(value: &str) -> Self {
        match value {
            "" => Self::Unrestricted,
            SITE_DEFAULT => Self::SiteDefault,
            CURRENT_INTERFACE => Self::CurrentInterface,
            AUTHORS_DEFAULT => Self::AuthorsDefault,
            code => Self::Langcode(code.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unrestricted => "",
            Self::SiteDefault => SITE_DEFAULT,
            Self::CurrentInterface => CURRENT_INTERFACE,
            Self::AuthorsDefault => AUTHORS_DEFAULT,
            Self::Langcode(code) => code,
        }
    }

    /// Concrete language code for this request, empty for no filter.
    pub fn resolve(&self, ctx: &ResolutionContext) -> String {
        match self {
            Self::Unrestricted => String::new(),
            Self::SiteDefault => ctx.site_default_langcode.clone(),
            Self::CurrentInterface => ctx.current_interface_langcode.clone(),
            // Falls back to the interface language, never to the site default.
            Self::AuthorsDefault if ctx.acting_user_preferred_langcode.is_empty() => {
                ctx.current_interface_langcode.clone()
            }
            Self::AuthorsDefault => ctx.acting_user_preferred_langcode.clone(),
            Self::Langcode(code) => code.clone(),
        }
    }
}

impl From<&str> for LanguageRestriction {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for LanguageRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LanguageRestriction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LanguageRestriction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Resolve a configured restriction value against the request context.
///
/// Returns an empty string when no language filter applies.
pub fn resolve_language_code(configured_value: &str, ctx: &ResolutionContext) -> String {
    LanguageRestriction::parse(configured_value).resolve(ctx)
}
