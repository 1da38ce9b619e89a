use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sharpname_schema::{DEFAULT_FILENAME, DescriptorSet};

use super::UnwrapOrExit;
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the descriptor set (defaults to ./sharpname.toml)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let set = DescriptorSet::from_file(&self.config).unwrap_or_exit();
        CheckReport::new(self.config.clone(), &set).render(&mut TerminalOutput::new());
        Ok(())
    }
}
