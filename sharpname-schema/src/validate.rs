//! Validation of names declared in a descriptor set.

use miette::SourceSpan;
use sharpname_core::validate_identifier;

use crate::{Error, Result};

/// Parsing and validation context that carries source information.
///
/// Encapsulates the source content, filename, and current path through the
/// descriptor hierarchy so nested validation can report where a bad name
/// lives.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "sharpname.toml");
/// let file_ctx = ctx.push("foo/bar.proto");
/// file_ctx.validate_name("Outer", "message")?;
/// ```
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
    /// Path segments for nested validation (e.g., ["foo/bar.proto", "Outer"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Get the current path, segments joined with `::`.
    pub fn path_string(&self) -> String {
        self.path.join("::")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "enum value in 'foo.proto::Color'" or just "file".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the first span of a quoted name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_quoted_span(self.src, name, false)
    }

    /// Find the last span of a quoted name in the source.
    pub fn find_last_span(&self, name: &str) -> Option<SourceSpan> {
        find_quoted_span(self.src, name, true)
    }

    /// Create a validation error pointing at `name`.
    pub fn validation_error(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_span(name))
    }

    /// Validate that a type or value name is a plain identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            None => Ok(()),
            Some(reason) => Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            )),
        }
    }

    /// Validate a dotted package name; every segment must be an identifier.
    /// An empty package is allowed.
    pub fn validate_package(&self, package: &str) -> Result<()> {
        if package.is_empty() {
            return Ok(());
        }
        for segment in package.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(Error::invalid_identifier(
                    package,
                    self.context_for("package"),
                    reason,
                    self.src,
                    self.filename,
                    self.find_span(package),
                ));
            }
        }
        Ok(())
    }
}

/// Find the span of `"name"` in the TOML source, pointing inside the quotes.
fn find_quoted_span(src: &str, name: &str, last: bool) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", name);
    let found = if last {
        src.rfind(&pattern)
    } else {
        src.find(&pattern)
    };
    let pos = found?;
    // +1 to skip the opening quote
    Some(SourceSpan::from((pos + 1, name.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = r#"
[[files]]
name = "a.proto"
package = "foo.bar"

[[files]]
name = "a.proto"
"#;

    #[test]
    fn test_find_spans() {
        let ctx = ParseContext::new(SRC, "sharpname.toml");
        let first = ctx.find_span("a.proto").unwrap();
        let last = ctx.find_last_span("a.proto").unwrap();

        assert_eq!(&SRC[first.offset()..first.offset() + first.len()], "a.proto");
        assert!(last.offset() > first.offset());
        assert!(ctx.find_span("missing").is_none());
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new(SRC, "sharpname.toml");
        assert_eq!(ctx.context_for("file"), "file");

        let nested = ctx.push("a.proto").push("Color");
        assert_eq!(nested.path_string(), "a.proto::Color");
        assert_eq!(nested.context_for("enum value"), "enum value in 'a.proto::Color'");
    }

    #[test]
    fn test_validate_name() {
        let ctx = ParseContext::new(SRC, "sharpname.toml");
        assert!(ctx.validate_name("Outer", "message").is_ok());
        assert!(ctx.validate_name("FOO_BAR", "enum value").is_ok());

        let err = ctx.validate_name("2Fast", "message").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "2Fast"));
    }

    #[test]
    fn test_validate_package() {
        let ctx = ParseContext::new(SRC, "sharpname.toml");
        assert!(ctx.validate_package("").is_ok());
        assert!(ctx.validate_package("foo.bar").is_ok());
        assert!(ctx.validate_package("foo..bar").is_err());
        assert!(ctx.validate_package("foo.1bar").is_err());
    }
}
