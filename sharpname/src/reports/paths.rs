//! Paths command report data structures.

use miette::Diagnostic;
use sharpname_codegen::{NamespaceError, output_file_with};
use sharpname_schema::{DescriptorSet, OutputOptions};

use super::output::{Output, Report};

/// Output paths resolved for every file of a descriptor set.
#[derive(Debug)]
pub struct PathsReport {
    pub entries: Vec<PathEntry>,
}

/// Output path of one schema file, or why it could not be resolved.
#[derive(Debug)]
pub struct PathEntry {
    pub file: String,
    pub output: Result<String, NamespaceError>,
}

impl PathsReport {
    pub fn new(set: &DescriptorSet, options: &OutputOptions) -> Self {
        let entries = set
            .files
            .iter()
            .map(|file| {
                let output = output_file_with(file, options);
                tracing::debug!(file = %file.name, ?output, "resolved output path");
                PathEntry {
                    file: file.name.clone(),
                    output,
                }
            })
            .collect();

        Self { entries }
    }

    /// Number of files whose path could not be resolved.
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.output.is_err()).count()
    }
}

impl Report for PathsReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            match &entry.output {
                Ok(path) => out.preformatted(&format!("{} -> {}", entry.file, path)),
                Err(err) => render_error(out, &entry.file, err),
            }
        }
    }
}

fn render_error(out: &mut dyn Output, file: &str, err: &NamespaceError) {
    out.error(&format!("{}: {}", file, err));
    if let Some(code) = err.code() {
        out.error_detail("code", &code.to_string());
    }
    if let Some(help) = err.help() {
        out.error_detail("help", &help.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::reports::output::BufferOutput;

    const SET: &str = r#"
        [[files]]
        name = "a/b/thing.proto"
        package = "a.b"

        [[files]]
        name = "google/protobuf/timestamp.proto"
        package = "google.protobuf"
        csharp_namespace = "Google.Protobuf.WellKnownTypes"
    "#;

    #[test]
    fn test_render_flat() {
        let set = DescriptorSet::from_str(SET).unwrap();
        let report = PathsReport::new(&set, &set.options);

        assert_eq!(report.failures(), 0);
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        a/b/thing.proto -> Thing.cs
        google/protobuf/timestamp.proto -> Timestamp.cs
        ");
    }

    #[test]
    fn test_render_with_failures() {
        let set = DescriptorSet::from_str(SET).unwrap();
        let options = OutputOptions {
            file_extension: ".g.cs".to_string(),
            generate_directories: true,
            base_namespace: "A".to_string(),
        };
        let report = PathsReport::new(&set, &options);

        assert_eq!(report.failures(), 1);
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        a/b/thing.proto -> B/Thing.g.cs
        error: google/protobuf/timestamp.proto: Namespace Google.Protobuf.WellKnownTypes is not a prefix namespace of base namespace A
          code: sharpname::namespace_mismatch
          help: set the base namespace to a leading part of 'Google.Protobuf.WellKnownTypes', or leave it empty
        ");
    }
}
