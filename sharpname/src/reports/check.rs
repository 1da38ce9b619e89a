//! Check command report data structures.

use std::path::PathBuf;

use sharpname_schema::DescriptorSet;

use super::output::{Output, Report};

/// Summary of a valid descriptor set.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub file_count: usize,
    pub type_count: usize,
    pub value_count: usize,
}

impl CheckReport {
    pub fn new(config_path: PathBuf, set: &DescriptorSet) -> Self {
        let value_count = set
            .files
            .iter()
            .flat_map(|file| file.types())
            .filter_map(|ty| ty.as_enum().map(|e| e.values.len()))
            .sum();

        Self {
            config_path,
            file_count: set.files.len(),
            type_count: set.type_count(),
            value_count,
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value_indented("files", &self.file_count.to_string());
        out.key_value_indented("types", &self.type_count.to_string());
        out.key_value_indented("enum values", &self.value_count.to_string());
    }
}
