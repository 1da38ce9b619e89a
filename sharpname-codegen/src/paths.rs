//! Output file paths for generated sources.

use sharpname_schema::{FileDescriptor, OutputOptions};

use crate::{
    NamespaceError,
    names::{file_name_base, file_namespace},
};

/// Relative path of the file generated for `file`.
///
/// The file name is [`file_name_base`] followed by `file_extension`. Without
/// `generate_directories` that is the whole path. Otherwise the file goes
/// in a directory per namespace segment, starting below `base_namespace`:
/// namespace `Foo.Bar.Baz` with base `Foo` yields `Bar/Baz/<name>`.
///
/// The base namespace must be the whole namespace or a leading run of its
/// dot-separated segments; `Foo.B` is not a base of `Foo.Bar`. An empty
/// base namespace always matches.
///
/// # Errors
///
/// Returns [`NamespaceError`] when directories are requested and the base
/// namespace is not a leading part of the file's namespace.
pub fn output_file(
    file: &FileDescriptor,
    file_extension: &str,
    generate_directories: bool,
    base_namespace: &str,
) -> Result<String, NamespaceError> {
    let relative = format!("{}{}", file_name_base(file), file_extension);
    if !generate_directories {
        return Ok(relative);
    }

    let namespace = file_namespace(file);
    let suffix = if base_namespace.is_empty() {
        namespace.as_str()
    } else {
        namespace_suffix(&namespace, base_namespace)
            .ok_or_else(|| NamespaceError::new(namespace.as_str(), base_namespace))?
    };

    if suffix.is_empty() {
        Ok(relative)
    } else {
        Ok(format!("{}/{}", suffix.replace('.', "/"), relative))
    }
}

/// [`output_file`] with the options of a descriptor set.
pub fn output_file_with(
    file: &FileDescriptor,
    options: &OutputOptions,
) -> Result<String, NamespaceError> {
    output_file(
        file,
        &options.file_extension,
        options.generate_directories,
        &options.base_namespace,
    )
}

/// What is left of `namespace` after removing `base` and the `.` after it.
/// `None` unless `base` ends on a segment boundary of `namespace`.
fn namespace_suffix<'a>(namespace: &'a str, base: &str) -> Option<&'a str> {
    let rest = namespace.strip_prefix(base)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, package: &str) -> FileDescriptor {
        FileDescriptor::new(name, package)
    }

    #[test]
    fn test_without_directories() {
        let f = file("google/protobuf/foo_bar.proto", "google.protobuf");
        assert_eq!(output_file(&f, ".cs", false, "").unwrap(), "FooBar.cs");
        // The base namespace is not checked when no directories are generated.
        assert_eq!(output_file(&f, ".cs", false, "Nope").unwrap(), "FooBar.cs");
    }

    #[test]
    fn test_directories_without_base() {
        let f = file("google/protobuf/foo_bar.proto", "google.protobuf");
        assert_eq!(
            output_file(&f, ".cs", true, "").unwrap(),
            "Google/Protobuf/FooBar.cs"
        );
    }

    #[test]
    fn test_directories_with_base() {
        let f = file("a/b/thing.proto", "a.b");
        assert_eq!(output_file(&f, ".g.txt", true, "A").unwrap(), "B/Thing.g.txt");
    }

    #[test]
    fn test_base_equal_to_namespace() {
        let f = file("a/b/thing.proto", "a.b");
        assert_eq!(output_file(&f, ".cs", true, "A.B").unwrap(), "Thing.cs");
    }

    #[test]
    fn test_base_is_case_sensitive() {
        let f = file("a/b/thing.proto", "a.b");
        let err = output_file(&f, ".g.txt", true, "a").unwrap_err();
        assert_eq!(err, NamespaceError::new("A.B", "a"));
    }

    #[test]
    fn test_base_must_end_on_segment_boundary() {
        let f = file("foo.proto", "foo.bar");
        let err = output_file(&f, ".cs", true, "Foo.B").unwrap_err();
        assert_eq!(err.namespace, "Foo.Bar");
        assert_eq!(err.base_namespace, "Foo.B");

        assert!(output_file(&f, ".cs", true, "Foo.").is_err());
        assert!(output_file(&f, ".cs", true, "Foo.Bar.Baz").is_err());
    }

    #[test]
    fn test_namespace_override() {
        let f = file("google/protobuf/timestamp.proto", "google.protobuf")
            .with_namespace("Google.Protobuf.WellKnownTypes");
        assert_eq!(
            output_file(&f, ".cs", true, "Google.Protobuf").unwrap(),
            "WellKnownTypes/Timestamp.cs"
        );
    }

    #[test]
    fn test_empty_namespace() {
        let f = file("bare.proto", "");
        assert_eq!(output_file(&f, ".cs", true, "").unwrap(), "Bare.cs");
        assert!(output_file(&f, ".cs", true, "Foo").is_err());
    }

    #[test]
    fn test_empty_base_never_fails() {
        let packages = ["", "a", "a.b.c", "foo_bar.baz", "my.scope._3"];
        for package in packages {
            for directories in [true, false] {
                let f = file("x/y.proto", package);
                assert!(output_file(&f, ".cs", directories, "").is_ok(), "{package}");
            }
        }
    }

    #[test]
    fn test_fails_iff_base_is_not_a_segment_prefix() {
        let f = file("x.proto", "alpha.beta.gamma");
        let cases = [
            ("Alpha", true),
            ("Alpha.Beta", true),
            ("Alpha.Beta.Gamma", true),
            ("Alph", false),
            ("Alpha.Be", false),
            ("Beta", false),
            ("Alpha.Beta.Gamma.Delta", false),
        ];
        for (base, ok) in cases {
            assert_eq!(output_file(&f, ".cs", true, base).is_ok(), ok, "{base}");
        }
    }

    #[test]
    fn test_with_options() {
        let f = file("a/b/thing.proto", "a.b");
        let options = OutputOptions {
            file_extension: ".g.cs".to_string(),
            generate_directories: true,
            base_namespace: "A".to_string(),
        };
        assert_eq!(output_file_with(&f, &options).unwrap(), "B/Thing.g.cs");
        assert_eq!(
            output_file_with(&f, &OutputOptions::default()).unwrap(),
            "Thing.cs"
        );
    }
}
