use serde::Serialize;

use super::{account::AccountProvider, language::LanguageProvider};

/// Request-scoped facts needed to turn a restriction mode into a language code.
///
/// Built fresh for every evaluation and never shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionContext {
    pub current_interface_langcode: String,
    pub site_default_langcode: String,
    /// Empty when the acting user has no stored preference.
    pub acting_user_preferred_langcode: String,
}

impl ResolutionContext {
    pub fn new(
        current_interface_langcode: impl Into<String>,
        site_default_langcode: impl Into<String>,
        acting_user_preferred_langcode: impl Into<String>,
    ) -> Self {
        Self {
            current_interface_langcode: current_interface_langcode.into(),
            site_default_langcode: site_default_langcode.into(),
            acting_user_preferred_langcode: acting_user_preferred_langcode.into(),
        }
    }

    /// Snapshot the collaborators' current state.
    pub fn capture(languages: &dyn LanguageProvider, account: &dyn AccountProvider) -> Self {
        Self {
            current_interface_langcode: languages.current_language().code,
            site_default_langcode: languages.default_language().code,
            acting_user_preferred_langcode: account.preferred_langcode(),
        }
    }
}
