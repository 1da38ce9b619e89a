use clap::Args;
use eyre::Result;
use sharpname_core::underscores_to_camel_case;

#[derive(Args)]
pub struct CaseCommand {
    /// Name to convert, e.g. "foo_bar" or "my.package"
    pub input: String,

    /// Lowercase the first letter (camelCase) instead of PascalCase
    #[arg(long)]
    pub camel: bool,

    /// Keep '.' separators, as done for package names
    #[arg(long)]
    pub preserve_period: bool,
}

impl CaseCommand {
    pub fn run(&self) -> Result<()> {
        println!(
            "{}",
            underscores_to_camel_case(&self.input, !self.camel, self.preserve_period)
        );
        Ok(())
    }
}
