//! Descriptor types for schema files, types and enum values.

use serde::Deserialize;

/// A schema file such as `google/protobuf/foo_bar.proto`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    /// Slash-separated path of the file, including its extension
    pub name: String,

    /// Dot-separated package name; empty when the file has no package
    #[serde(default)]
    pub package: String,

    /// File-level options
    #[serde(flatten)]
    pub options: FileOptions,

    /// Top-level message types
    #[serde(default)]
    pub messages: Vec<MessageDescriptor>,

    /// Top-level enum types
    #[serde(default)]
    pub enums: Vec<EnumDescriptor>,
}

/// Options declared on a schema file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileOptions {
    /// Explicit namespace that replaces the one derived from the package
    pub csharp_namespace: Option<String>,
}

/// A message type, possibly containing nested types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageDescriptor {
    pub name: String,

    #[serde(default)]
    pub messages: Vec<MessageDescriptor>,

    #[serde(default)]
    pub enums: Vec<EnumDescriptor>,
}

/// An enum type and its values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumDescriptor {
    pub name: String,

    #[serde(default)]
    pub values: Vec<EnumValueDescriptor>,
}

/// A single enum value, written as a bare string in the descriptor set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EnumValueDescriptor {
    pub name: String,
}

impl FileDescriptor {
    /// Create a file with no types and default options.
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            options: FileOptions::default(),
            messages: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Set the namespace override.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.options.csharp_namespace = Some(namespace.into());
        self
    }

    /// Every type declared in this file, depth-first in declaration order.
    ///
    /// Messages come first, each followed by its nested messages and enums,
    /// then the top-level enums.
    pub fn types(&self) -> Vec<TypeDescriptor<'_>> {
        let mut out = Vec::new();
        for message in &self.messages {
            collect_message(self, &self.package, message, &mut out);
        }
        for enum_type in &self.enums {
            out.push(TypeDescriptor::new(
                self,
                qualify(&self.package, &enum_type.name),
                TypeKind::Enum(enum_type),
            ));
        }
        out
    }

    /// Look up a type by its fully qualified dotted name.
    pub fn find_type(&self, full_name: &str) -> Option<TypeDescriptor<'_>> {
        self.types().into_iter().find(|ty| ty.full_name() == full_name)
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope, name)
    }
}

fn collect_message<'a>(
    file: &'a FileDescriptor,
    scope: &str,
    message: &'a MessageDescriptor,
    out: &mut Vec<TypeDescriptor<'a>>,
) {
    let full_name = qualify(scope, &message.name);
    out.push(TypeDescriptor::new(
        file,
        full_name.clone(),
        TypeKind::Message(message),
    ));
    for nested in &message.messages {
        collect_message(file, &full_name, nested, out);
    }
    for enum_type in &message.enums {
        out.push(TypeDescriptor::new(
            file,
            qualify(&full_name, &enum_type.name),
            TypeKind::Enum(enum_type),
        ));
    }
}

/// The kind of a schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind<'a> {
    Message(&'a MessageDescriptor),
    Enum(&'a EnumDescriptor),
}

/// A message or enum type together with its fully qualified name and the
/// file that declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor<'a> {
    file: &'a FileDescriptor,
    full_name: String,
    kind: TypeKind<'a>,
}

impl<'a> TypeDescriptor<'a> {
    /// Create a type view. `full_name` is expected to start with the file's
    /// package, e.g. `foo.bar.Outer.Inner` for package `foo.bar`.
    pub fn new(
        file: &'a FileDescriptor,
        full_name: impl Into<String>,
        kind: TypeKind<'a>,
    ) -> Self {
        Self {
            file,
            full_name: full_name.into(),
            kind,
        }
    }

    /// The file declaring this type.
    pub fn file(&self) -> &'a FileDescriptor {
        self.file
    }

    /// Fully qualified dotted name (`package.Outer.Inner`).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Simple name as declared.
    pub fn name(&self) -> &'a str {
        match self.kind {
            TypeKind::Message(message) => &message.name,
            TypeKind::Enum(enum_type) => &enum_type.name,
        }
    }

    pub fn kind(&self) -> TypeKind<'a> {
        self.kind
    }

    /// The enum descriptor, if this type is an enum.
    pub fn as_enum(&self) -> Option<&'a EnumDescriptor> {
        match self.kind {
            TypeKind::Enum(enum_type) => Some(enum_type),
            TypeKind::Message(_) => None,
        }
    }

    /// Whether this type is declared inside another type.
    pub fn is_nested(&self) -> bool {
        let scope = self
            .full_name
            .strip_suffix(self.name())
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or("");
        !scope.is_empty() && scope != self.file.package
    }
}
