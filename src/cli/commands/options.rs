//! Options command - list the values `languageRestriction` accepts.
//!
//! The option list is what the configuration form offers. Values outside
//! the list still work and are treated as literal language codes.

use anyhow::{Context, Result};

use super::super::{args::OptionsCommand, exit_status::ExitStatus, report};
use super::helper::SelectionContext;

pub fn options(cmd: OptionsCommand) -> Result<ExitStatus> {
    let ctx = SelectionContext::new(&cmd.common)?;
    let selection = ctx.selection();
    let options = selection.restriction_options();

    if cmd.json {
        let json = serde_json::to_string_pretty(&options).context("Failed to serialize options")?;
        println!("{}", json);
    } else {
        let selected = ctx.config.selection.language_restriction.as_str();
        report::print_options(&options, Some(selected))?;
    }

    Ok(ExitStatus::Success)
}
