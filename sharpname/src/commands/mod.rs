mod case;
mod check;
mod completions;
mod enum_value;
mod names;
mod paths;

use case::CaseCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use enum_value::EnumValueCommand;
use eyre::Result;
use names::NamesCommand;
use paths::PathsCommand;

/// Extension trait for exiting on descriptor-set errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sharpname_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sharpname")]
#[command(version)]
#[command(about = "Resolve C# identifiers, namespaces and output paths from schema descriptors")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Case(cmd) => cmd.run(),
            Commands::EnumValue(cmd) => cmd.run(),
            Commands::Names(cmd) => cmd.run(),
            Commands::Paths(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single name to PascalCase or camelCase
    Case(CaseCommand),

    /// Name enum values, stripping the enum's own prefix
    EnumValue(EnumValueCommand),

    /// List namespaces, class names and enum value names of a descriptor set
    Names(NamesCommand),

    /// Resolve output file paths of a descriptor set
    Paths(PathsCommand),

    /// Validate a descriptor set
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
