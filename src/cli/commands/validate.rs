//! Validate command - check entity ids against the selection.
//!
//! Exits with failure when any id is rejected, so scripts can guard
//! reference values before saving them.

use anyhow::Result;

use super::super::{args::ValidateCommand, exit_status::ExitStatus, report};
use super::helper::SelectionContext;
use crate::core::SelectionHandler;

pub fn validate(cmd: ValidateCommand) -> Result<ExitStatus> {
    let ctx = SelectionContext::new(&cmd.common)?;
    let accepted = ctx.selection().validate_referenceable_entities(&cmd.ids)?;

    report::print_validation(&cmd.ids, &accepted)?;

    if accepted.len() == cmd.ids.len() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
