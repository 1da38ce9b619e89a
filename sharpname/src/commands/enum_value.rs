use clap::Args;
use eyre::Result;
use sharpname_codegen::enum_value_name;

#[derive(Args)]
pub struct EnumValueCommand {
    /// Name of the enclosing enum, e.g. "Color"
    pub enum_name: String,

    /// Raw value names, e.g. "COLOR_RED"
    #[arg(required = true)]
    pub values: Vec<String>,
}

impl EnumValueCommand {
    pub fn run(&self) -> Result<()> {
        for value in &self.values {
            println!("{}", enum_value_name(&self.enum_name, value));
        }
        Ok(())
    }
}
