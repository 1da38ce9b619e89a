use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sharpname_schema::{DEFAULT_FILENAME, DescriptorSet};

use super::UnwrapOrExit;
use crate::reports::{NamesReport, Report, TerminalOutput};

#[derive(Args)]
pub struct NamesCommand {
    /// Path to the descriptor set (defaults to ./sharpname.toml)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Print the names as JSON
    #[arg(long)]
    pub json: bool,
}

impl NamesCommand {
    pub fn run(&self) -> Result<()> {
        let set = DescriptorSet::from_file(&self.config).unwrap_or_exit();
        let report = NamesReport::new(&set);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
