//! Namespaces and fully qualified class names.

use sharpname_core::{underscores_to_camel_case, underscores_to_pascal_case};
use sharpname_schema::{FileDescriptor, TypeDescriptor};

/// Prefix that roots a name in the global namespace.
///
/// Generated code refers to types from arbitrary scopes, where a local type
/// could shadow the intended one, so every reference is fully rooted.
pub const GLOBAL_PREFIX: &str = "global::";

/// Replacement for the `.` between a message and a type nested in it.
/// Nested types live in a static `Types` class of the enclosing message.
pub const NESTED_TYPES: &str = ".Types.";

/// Suffix of the per-file reflection class.
pub const REFLECTION_SUFFIX: &str = "Reflection";

/// Suffix of the per-file extensions class.
pub const EXTENSIONS_SUFFIX: &str = "Extensions";

/// Namespace for everything generated from `file`.
///
/// Uses the file's `csharp_namespace` option verbatim when set; otherwise
/// the package is PascalCased segment by segment (`foo_bar.baz` ->
/// `FooBar.Baz`).
pub fn file_namespace(file: &FileDescriptor) -> String {
    match &file.options.csharp_namespace {
        Some(namespace) => namespace.clone(),
        None => underscores_to_camel_case(&file.package, true, true),
    }
}

/// Fully qualified class name of a message or enum.
///
/// The package part of the full name is replaced by the file namespace and
/// nested types go through [`NESTED_TYPES`]:
/// `foo.bar.Outer.Inner` in package `foo.bar` becomes
/// `global::Foo.Bar.Outer.Types.Inner`.
pub fn class_name(ty: &TypeDescriptor<'_>) -> String {
    let file = ty.file();
    let full_name = ty.full_name();

    // A full name outside its own package is kept whole.
    let local = if file.package.is_empty() {
        full_name
    } else {
        full_name
            .strip_prefix(file.package.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(full_name)
    };

    rooted(&file_namespace(file), &local.replace('.', NESTED_TYPES))
}

/// PascalCased file name without directories or extension
/// (`google/protobuf/foo_bar.proto` -> `FooBar`).
pub fn file_name_base(file: &FileDescriptor) -> String {
    let base = file.name.rsplit('/').next().unwrap_or(&file.name);
    underscores_to_pascal_case(strip_extension(base))
}

/// Unqualified name of the reflection class generated for `file`.
///
/// Collisions with a type of the same name declared in the file are not
/// detected.
// TODO: append `_` when a top-level message or enum already uses the name.
pub fn reflection_class_unqualified_name(file: &FileDescriptor) -> String {
    format!("{}{}", file_name_base(file), REFLECTION_SUFFIX)
}

/// Fully qualified name of the reflection class generated for `file`.
pub fn reflection_class_name(file: &FileDescriptor) -> String {
    rooted(
        &file_namespace(file),
        &reflection_class_unqualified_name(file),
    )
}

/// Unqualified name of the class holding the extensions declared in `file`.
///
/// Like the reflection class, this can collide with a declared type.
pub fn extension_class_unqualified_name(file: &FileDescriptor) -> String {
    format!("{}{}", file_name_base(file), EXTENSIONS_SUFFIX)
}

fn rooted(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        format!("{}{}", GLOBAL_PREFIX, name)
    } else {
        format!("{}{}.{}", GLOBAL_PREFIX, namespace, name)
    }
}

fn strip_extension(name: &str) -> &str {
    name.rfind('.').map_or(name, |dot| &name[..dot])
}
