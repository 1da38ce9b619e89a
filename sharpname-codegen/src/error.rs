use miette::Diagnostic;
use thiserror::Error;

/// The base namespace is not a dot-aligned leading part of a file's namespace.
///
/// Raised by [`output_file`](crate::output_file) when generating
/// directories. This is a configuration mismatch and is not retried.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("Namespace {namespace} is not a prefix namespace of base namespace {base_namespace}")]
#[diagnostic(
    code(sharpname::namespace_mismatch),
    help("set the base namespace to a leading part of '{namespace}', or leave it empty")
)]
pub struct NamespaceError {
    /// Namespace computed for the schema file
    pub namespace: String,
    /// Base namespace the caller asked for
    pub base_namespace: String,
}

impl NamespaceError {
    pub fn new(namespace: impl Into<String>, base_namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            base_namespace: base_namespace.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_both_namespaces() {
        let err = NamespaceError::new("Foo.Bar", "Foo.B");
        assert_eq!(
            err.to_string(),
            "Namespace Foo.Bar is not a prefix namespace of base namespace Foo.B"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let err = NamespaceError::new("Foo.Bar", "Baz");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("sharpname::namespace_mismatch"));
    }
}
