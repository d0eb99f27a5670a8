use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod options;
mod resolve;
mod select;
mod validate;

const BIN_NAME: &str = "reflang";

/// A small multilingual site: three languages, two users, translated
/// content and an untranslatable user entity type.
pub const SITE_CONFIG: &str = r#"{
  "languages": [
    { "code": "en", "name": "English" },
    { "code": "fr", "name": "French" },
    { "code": "de", "name": "German" }
  ],
  "defaultLanguage": "en",
  "interfaceLanguage": "de",
  "users": [
    { "name": "editor", "preferredLangcode": "fr" },
    { "name": "newbie" }
  ],
  "currentUser": "editor",
  "entityTypes": [
    {
      "id": "node",
      "label": "Content",
      "keys": { "id": "nid", "bundle": "type", "label": "title", "langcode": "langcode" },
      "bundles": ["article", "page"]
    },
    {
      "id": "user",
      "label": "User",
      "keys": { "id": "uid", "label": "name" }
    }
  ],
  "entities": [
    { "entityType": "node", "id": "1", "bundle": "article", "label": "Hello", "langcode": "en" },
    { "entityType": "node", "id": "2", "bundle": "article", "label": "Bonjour", "langcode": "fr" },
    { "entityType": "node", "id": "3", "bundle": "article", "label": "Hallo", "langcode": "de" },
    { "entityType": "node", "id": "4", "bundle": "page", "label": "About", "langcode": "en" },
    { "entityType": "node", "id": "5", "bundle": "page", "label": "A propos", "langcode": "fr" },
    { "entityType": "node", "id": "6", "bundle": "page", "label": "Impressum", "langcode": "de" },
    { "entityType": "user", "id": "10", "label": "admin" },
    { "entityType": "user", "id": "11", "label": "editor" }
  ],
  "selection": {
    "targetType": "node",
    "languageRestriction": "current_interface"
  }
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery from walking above the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with [`SITE_CONFIG`] as its `.reflangrc.json`.
    pub fn site() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(".reflangrc.json", SITE_CONFIG)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// Run a subcommand with extra arguments.
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        let output = self.command().args(args).output()?;
        Ok(output)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
