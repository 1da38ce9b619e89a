use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sharpname_schema::{DEFAULT_FILENAME, DescriptorSet, OutputOptions};

use super::UnwrapOrExit;
use crate::reports::{PathsReport, Report, TerminalOutput};

#[derive(Args)]
pub struct PathsCommand {
    /// Path to the descriptor set (defaults to ./sharpname.toml)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Extension of generated files, e.g. ".g.cs"
    #[arg(long)]
    pub extension: Option<String>,

    /// Place files in one directory per namespace segment
    /// (`--generate-directories=false` forces flat output)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub generate_directories: Option<bool>,

    /// Namespace whose segments are left out of the directories
    #[arg(long)]
    pub base_namespace: Option<String>,
}

impl PathsCommand {
    pub fn run(&self) -> Result<()> {
        let set = DescriptorSet::from_file(&self.config).unwrap_or_exit();
        let options = self.options(&set.options);

        let report = PathsReport::new(&set, &options);
        report.render(&mut TerminalOutput::new());

        if report.failures() > 0 {
            std::process::exit(1);
        }
        Ok(())
    }

    /// Options from the descriptor set, overridden by command line flags.
    fn options(&self, defaults: &OutputOptions) -> OutputOptions {
        OutputOptions {
            file_extension: self
                .extension
                .clone()
                .unwrap_or_else(|| defaults.file_extension.clone()),
            generate_directories: self
                .generate_directories
                .unwrap_or(defaults.generate_directories),
            base_namespace: self
                .base_namespace
                .clone()
                .unwrap_or_else(|| defaults.base_namespace.clone()),
        }
    }
}
