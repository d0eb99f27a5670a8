//! Restriction option listing and localization of labels.

use serde::{Serialize, Serializer, ser::SerializeMap};

use super::{
    language::Language,
    restriction::{AUTHORS_DEFAULT, CURRENT_INTERFACE, SITE_DEFAULT},
};

/// Presentation-layer string lookup.
///
/// `params` pairs a placeholder (e.g. `@language`) with its value.
pub trait Localize {
    fn localize(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// Substitutes placeholders without translating anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderLocalizer;

impl Localize for PlaceholderLocalizer {
    fn localize(&self, key: &str, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .fold(key.to_string(), |text, (placeholder, value)| {
                text.replace(placeholder, value)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub key: String,
    pub label: String,
}

/// Ordered option key to label mapping for select-style form elements.
///
/// Inserting an existing key replaces its label but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions(Vec<SelectOption>);

impl SelectOptions {
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        let key = key.into();
        let label = label.into();
        match self.0.iter_mut().find(|o| o.key == key) {
            Some(existing) => existing.label = label,
            None => self.0.push(SelectOption { key, label }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|o| o.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SelectOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for option in &self.0 {
            map.serialize_entry(&option.key, &option.label)?;
        }
        map.end()
    }
}

/// Options offered for the `language_restriction` setting.
///
/// The four symbolic modes come first, then every language in the order
/// given. Locked languages are bracketed as `- name -`.
pub fn list_restriction_options(
    available_languages: &[Language],
    site_default_name: &str,
    localize: &dyn Localize,
) -> SelectOptions {
    let mut options = SelectOptions::default();
    options.insert("", localize.localize("No restrictions", &[]));
    options.insert(
        SITE_DEFAULT,
        localize.localize(
            "Site's default language (@language)",
            &[("@language", site_default_name)],
        ),
    );
    options.insert(
        CURRENT_INTERFACE,
        localize.localize("Interface text language selected for page", &[]),
    );
    options.insert(
        AUTHORS_DEFAULT,
        localize.localize("Author's preferred language", &[]),
    );

    for language in available_languages {
        let label = if language.locked {
            localize.localize("- @name -", &[("@name", language.name.as_str())])
        } else {
            language.name.clone()
        };
        options.insert(language.code.as_str(), label);
    }

    options
}
