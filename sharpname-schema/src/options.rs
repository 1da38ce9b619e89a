use serde::Deserialize;

/// Output options from the `[options]` table of a descriptor set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Extension appended to the file name base, including the leading dot
    pub file_extension: String,

    /// Place each output file in a directory derived from its namespace
    pub generate_directories: bool,

    /// Namespace that maps to the output root when generating directories
    pub base_namespace: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            file_extension: ".cs".to_string(),
            generate_directories: false,
            base_namespace: String::new(),
        }
    }
}
