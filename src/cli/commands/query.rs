use anyhow::{Context, Result};

use super::super::{args::QueryCommand, exit_status::ExitStatus};
use super::helper::SelectionContext;
use crate::core::SelectionHandler;

pub fn query(cmd: QueryCommand) -> Result<ExitStatus> {
    let ctx = SelectionContext::new(&cmd.common)?;
    let query = ctx
        .selection()
        .build_entity_query(cmd.search.search.as_deref(), cmd.search.operator)?;

    if cmd.json {
        let json = serde_json::to_string_pretty(&query).context("Failed to serialize query")?;
        println!("{}", json);
    } else {
        println!("{}", query);
    }

    Ok(ExitStatus::Success)
}
