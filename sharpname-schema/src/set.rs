use std::{collections::HashSet, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    EnumDescriptor, Error, FileDescriptor, MessageDescriptor, OutputOptions, Result,
    validate::ParseContext,
};

/// Default descriptor set file name.
pub const DEFAULT_FILENAME: &str = "sharpname.toml";

/// Root of a descriptor set file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DescriptorSet {
    /// Output options
    #[serde(default)]
    pub options: OutputOptions,

    /// Schema files, in declaration order
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

impl FromStr for DescriptorSet {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl DescriptorSet {
    /// Parse a descriptor set file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a descriptor set from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let set: Self = toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        set.validate(content, filename)?;
        tracing::debug!(filename, files = set.files.len(), "loaded descriptor set");
        Ok(set)
    }

    /// Look up a file by its slash-separated name.
    pub fn file(&self, name: &str) -> Option<&FileDescriptor> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Total number of message and enum types across all files.
    pub fn type_count(&self) -> usize {
        self.files.iter().map(|f| f.types().len()).sum()
    }

    /// Validate the descriptor set after parsing
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);
        let mut seen = HashSet::new();

        for file in &self.files {
            if file.name.is_empty() {
                return Err(ctx.validation_error("file name cannot be empty", ""));
            }
            if !seen.insert(file.name.as_str()) {
                return Err(Error::duplicate_file(
                    &file.name,
                    src,
                    filename,
                    ctx.find_span(&file.name),
                    ctx.find_last_span(&file.name),
                ));
            }

            let file_ctx = ctx.push(&file.name);
            file_ctx.validate_package(&file.package)?;
            for message in &file.messages {
                validate_message(&file_ctx, message)?;
            }
            for enum_type in &file.enums {
                validate_enum(&file_ctx, enum_type)?;
            }
        }
        Ok(())
    }
}

fn validate_message<'a>(ctx: &ParseContext<'a>, message: &'a MessageDescriptor) -> Result<()> {
    ctx.validate_name(&message.name, "message")?;

    let nested = ctx.push(&message.name);
    for inner in &message.messages {
        validate_message(&nested, inner)?;
    }
    for enum_type in &message.enums {
        validate_enum(&nested, enum_type)?;
    }
    Ok(())
}

fn validate_enum<'a>(ctx: &ParseContext<'a>, enum_type: &'a EnumDescriptor) -> Result<()> {
    ctx.validate_name(&enum_type.name, "enum")?;

    let nested = ctx.push(&enum_type.name);
    for value in &enum_type.values {
        nested.validate_name(&value.name, "enum value")?;
    }
    Ok(())
}
