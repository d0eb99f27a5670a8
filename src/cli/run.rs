//! Dispatch parsed arguments to their command handlers.
//!
//! # Returns
//! - `Ok(ExitStatus)` once the command has printed its output
//! - `Err` if the command fails (e.g., unreadable config, unknown entity type)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        form::form, init::init, options::options, query::query, resolve::resolve, select::select,
        validate::validate,
    },
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init(cmd)) => init(cmd),
        Some(Command::Options(cmd)) => options(cmd),
        Some(Command::Form(cmd)) => form(cmd),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Query(cmd)) => query(cmd),
        Some(Command::Select(cmd)) => select(cmd),
        Some(Command::Validate(cmd)) => validate(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
