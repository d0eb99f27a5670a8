//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Write a default `.reflangrc.json`
//! - `options`: List the language restriction options
//! - `form`: Show the selection configuration form
//! - `resolve`: Resolve the configured restriction to a language code
//! - `query`: Show the entity query the selection builds
//! - `select`: List referenceable entities
//! - `validate`: Check whether entity ids are referenceable

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::MatchOperator;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Options(cmd)) => cmd.common.verbose,
            Some(Command::Form(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Query(cmd)) => cmd.common.verbose,
            Some(Command::Select(cmd)) => cmd.common.verbose,
            Some(Command::Validate(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project file to use instead of searching for .reflangrc.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Language restriction (overrides config file); any value not a mode is a language code
    #[arg(long)]
    pub restriction: Option<String>,

    /// Interface language of the request (overrides config file)
    #[arg(long)]
    pub interface_language: Option<String>,

    /// Acting user name (overrides config file)
    #[arg(long)]
    pub user: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Label search arguments.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Match entity labels against this string
    #[arg(long = "match")]
    pub search: Option<String>,

    /// Match operator: =, <>, CONTAINS, STARTS_WITH, ENDS_WITH
    #[arg(long, default_value = "CONTAINS", value_parser = parse_operator)]
    pub operator: MatchOperator,
}

fn parse_operator(value: &str) -> Result<MatchOperator, String> {
    value.parse().map_err(|err: anyhow::Error| err.to_string())
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct OptionsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print as a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FormCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct QueryCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SelectCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Maximum number of entities to list (0 = no limit)
    #[arg(long, default_value_t = 0)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Entity ids to check
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .reflangrc.json configuration file
    Init(InitCommand),
    /// List the language restriction options
    Options(OptionsCommand),
    /// Show the selection configuration form
    Form(FormCommand),
    /// Resolve the language restriction for the current request
    Resolve(ResolveCommand),
    /// Show the entity query built by the selection
    Query(QueryCommand),
    /// List the entities a reference field may point at
    Select(SelectCommand),
    /// Check whether entity ids are referenceable
    Validate(ValidateCommand),
}
