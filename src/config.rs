use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    Account, DefaultSelection, Entity, EntityKeys, EntityType, Language, SelectionConfiguration,
    language::locked_languages,
};

pub const CONFIG_FILE_NAME: &str = ".reflangrc.json";

/// Project file: the site's languages, its users, the entities a reference
/// field can point at, and that field's selection settings.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    #[serde(default = "default_default_language")]
    pub default_language: String,
    /// Interface language of the simulated request. Defaults to the site default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_language: Option<String>,
    #[serde(default)]
    pub users: Vec<Account>,
    /// Name of the acting user. Anonymous when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<String>,
    #[serde(default = "default_entity_types")]
    pub entity_types: Vec<EntityType>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default = "default_selection")]
    pub selection: SelectionConfiguration,
}

fn default_languages() -> Vec<Language> {
    vec![Language::new("en", "English"), Language::new("fr", "French")]
}

fn default_default_language() -> String {
    "en".to_string()
}

fn default_entity_types() -> Vec<EntityType> {
    vec![EntityType {
        id: "node".to_string(),
        label: "Content".to_string(),
        keys: EntityKeys {
            id: "nid".to_string(),
            bundle: Some("type".to_string()),
            label: Some("title".to_string()),
            langcode: Some("langcode".to_string()),
        },
        bundles: vec!["article".to_string(), "page".to_string()],
    }]
}

fn default_selection() -> SelectionConfiguration {
    SelectionConfiguration {
        target_type: "node".to_string(),
        ..DefaultSelection::base_configuration()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            default_language: default_default_language(),
            interface_language: None,
            users: Vec::new(),
            current_user: None,
            entity_types: default_entity_types(),
            entities: Vec::new(),
            selection: default_selection(),
        }
    }
}

impl Config {
    /// Validate cross references between sections.
    ///
    /// The language restriction itself is not checked: any string is a
    /// valid restriction and unknown values act as literal language codes.
    pub fn validate(&self) -> Result<()> {
        let mut codes = HashSet::new();
        for language in &self.languages {
            if !codes.insert(language.code.as_str()) {
                bail!("Duplicate language code in 'languages': \"{}\"", language.code);
            }
        }
        let known_language =
            |code: &str| codes.contains(code) || locked_languages().iter().any(|l| l.code == code);

        if !known_language(&self.default_language) {
            bail!(
                "Unknown language in 'defaultLanguage': \"{}\"",
                self.default_language
            );
        }
        if let Some(code) = &self.interface_language
            && !known_language(code)
        {
            bail!("Unknown language in 'interfaceLanguage': \"{}\"", code);
        }

        if let Some(name) = &self.current_user
            && !self.users.iter().any(|u| &u.name == name)
        {
            bail!("Unknown user in 'currentUser': \"{}\"", name);
        }

        let type_ids: HashSet<&str> = self.entity_types.iter().map(|t| t.id.as_str()).collect();
        if !type_ids.contains(self.selection.target_type.as_str()) {
            bail!(
                "Unknown entity type in 'selection.targetType': \"{}\"",
                self.selection.target_type
            );
        }
        for entity in &self.entities {
            if !type_ids.contains(entity.entity_type.as_str()) {
                bail!(
                    "Entity \"{}\" has unknown entity type \"{}\"",
                    entity.id,
                    entity.entity_type
                );
            }
        }

        Ok(())
    }

    pub fn interface_language(&self) -> &str {
        self.interface_language
            .as_deref()
            .unwrap_or(&self.default_language)
    }

    /// Look up a user by name.
    pub fn user(&self, name: &str) -> Result<Account> {
        self.users
            .iter()
            .find(|u| u.name == name)
            .cloned()
            .with_context(|| format!("Unknown user: \"{}\"", name))
    }

    /// The configured acting user, or an anonymous account.
    pub fn acting_user(&self) -> Result<Account> {
        match &self.current_user {
            Some(name) => self.user(name),
            None => Ok(Account::anonymous()),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
