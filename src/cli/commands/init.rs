//! Init command - write a starter project file.
//!
//! The starter file declares two languages, a `node` entity type with a
//! language key, no entities and an unrestricted selection.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::InitCommand,
    exit_status::ExitStatus,
    report::{FAILURE_MARK, SUCCESS_MARK},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !cmd.force {
        eprintln!(
            "{} {} already exists (use {} to overwrite)",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME,
            "--force".cyan()
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    println!(
        "Set {} to restrict referenceable entities by language.",
        "selection.languageRestriction".cyan()
    );

    Ok(ExitStatus::Success)
}
