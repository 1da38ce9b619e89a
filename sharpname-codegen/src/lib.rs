// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Name resolution for generated C# sources.
//!
//! Given schema descriptors from `sharpname-schema`, this crate produces
//! the identifiers and paths a code emitter needs:
//!
//! - [`enums`] - enum value names with the enum's own prefix stripped
//! - [`names`] - file namespaces, `global::` rooted class names and the
//!   per-file companion class names
//! - [`paths`] - output file paths, optionally nested by namespace
//!
//! All functions are pure and can be called from any thread.

pub mod enums;
mod error;
pub mod names;
pub mod paths;

pub use enums::enum_value_name;
pub use error::NamespaceError;
pub use names::{
    class_name, extension_class_unqualified_name, file_name_base, file_namespace,
    reflection_class_name, reflection_class_unqualified_name,
};
pub use paths::{output_file, output_file_with};
// Re-exported so callers only need one dependency for the naming surface.
pub use sharpname_core::{underscores_to_camel_case, underscores_to_pascal_case};
