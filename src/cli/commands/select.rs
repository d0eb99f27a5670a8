//! Select command - list the entities the reference field may point at.

use anyhow::Result;

use super::super::{args::SelectCommand, exit_status::ExitStatus, report};
use super::helper::SelectionContext;
use crate::core::SelectionHandler;

pub fn select(cmd: SelectCommand) -> Result<ExitStatus> {
    let ctx = SelectionContext::new(&cmd.common)?;
    let selection = ctx.selection();
    let search = cmd.search.search.as_deref();

    let entities = selection.get_referenceable_entities(search, cmd.search.operator, cmd.limit)?;
    let total = selection.count_referenceable_entities(search, cmd.search.operator)?;

    report::print_referenceable(&entities, total, &selection.language_restriction())?;

    Ok(ExitStatus::Success)
}
