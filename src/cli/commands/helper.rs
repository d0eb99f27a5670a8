use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config, load_config_file},
    core::{
        Account, DefaultSelection, LanguageManager, LanguageRestrictSelection, MemoryEntityStore,
        PlaceholderLocalizer,
    },
};

/// Everything a command needs to build the selection for one request.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--restriction fr`)
/// 2. `.reflangrc.json` (or the file given with `--config`)
/// 3. Built-in defaults
pub struct SelectionContext {
    pub config: Config,
    pub languages: LanguageManager,
    pub account: Account,
    pub store: MemoryEntityStore,
}

impl SelectionContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let (mut config, config_path) = match &common.config {
            Some(path) => (load_config_file(path)?, Some(path.clone())),
            None => {
                let cwd = env::current_dir().context("Failed to read current directory")?;
                let loaded = load_config(&cwd)?;
                (loaded.config, loaded.path)
            }
        };

        if let Some(restriction) = &common.restriction {
            config.selection.language_restriction = restriction.clone();
        }

        let interface_language = common
            .interface_language
            .clone()
            .unwrap_or_else(|| config.interface_language().to_string());

        let account = match &common.user {
            Some(name) => config.user(name)?,
            None => config.acting_user()?,
        };

        debug!(
            config = ?config_path,
            interface_language = %interface_language,
            user = %account.name,
            "loaded selection context"
        );

        let languages = LanguageManager::new(
            config.languages.clone(),
            config.default_language.as_str(),
            interface_language,
        );
        let store = MemoryEntityStore::new(config.entity_types.clone(), config.entities.clone());

        Ok(Self {
            config,
            languages,
            account,
            store,
        })
    }

    /// The language restricted selection for the configured reference field.
    pub fn selection(&self) -> LanguageRestrictSelection<'_> {
        let base = DefaultSelection::new(
            self.config.selection.clone(),
            &self.store,
            &self.store,
            &PlaceholderLocalizer,
        );
        LanguageRestrictSelection::new(base, &self.languages, &self.account)
    }
}
