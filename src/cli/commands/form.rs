use anyhow::{Context, Result};

use super::super::{args::FormCommand, exit_status::ExitStatus, report};
use super::helper::SelectionContext;
use crate::core::SelectionHandler;

pub fn form(cmd: FormCommand) -> Result<ExitStatus> {
    let ctx = SelectionContext::new(&cmd.common)?;
    let form = ctx.selection().build_configuration_form();

    if cmd.json {
        let json = serde_json::to_string_pretty(&form).context("Failed to serialize form")?;
        println!("{}", json);
    } else {
        report::print_form(&form)?;
    }

    Ok(ExitStatus::Success)
}
