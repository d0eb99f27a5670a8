use anyhow::Result;

use super::super::{args::ResolveCommand, exit_status::ExitStatus, report};
use super::helper::SelectionContext;
use crate::core::resolve_language_code;

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let ctx = SelectionContext::new(&cmd.common)?;
    let resolution = ctx.selection().resolution_context();
    let restriction = ctx.config.selection.language_restriction.as_str();
    let langcode = resolve_language_code(restriction, &resolution);

    report::print_resolution(restriction, &langcode, &resolution, cmd.common.verbose)?;

    Ok(ExitStatus::Success)
}
