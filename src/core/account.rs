//! The acting user collaborator.

use serde::{Deserialize, Serialize};

pub trait AccountProvider {
    /// The user's preferred language code, empty when none is stored.
    fn preferred_langcode(&self) -> String;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub name: String,
    #[serde(default)]
    pub preferred_langcode: String,
}

impl Account {
    pub fn new(name: impl Into<String>, preferred_langcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferred_langcode: preferred_langcode.into(),
        }
    }

    /// A user without any stored language preference.
    pub fn anonymous() -> Self {
        Self::new("anonymous", "")
    }
}

impl AccountProvider for Account {
    fn preferred_langcode(&self) -> String {
        self.preferred_langcode.clone()
    }
}
