// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Schema descriptors for the sharpname identifier generator.
//!
//! The types here are read-only views over an interface-definition schema:
//! files with a package and options, the message and enum types they
//! declare, and enum values. A [`DescriptorSet`] is loaded from a TOML file
//! (`sharpname.toml` by default) together with the output [`OutputOptions`].

mod descriptor;
mod error;
mod options;
mod set;
mod validate;

pub use descriptor::{
    EnumDescriptor, EnumValueDescriptor, FileDescriptor, FileOptions, MessageDescriptor,
    TypeDescriptor, TypeKind,
};
pub use error::{Error, Result};
pub use options::OutputOptions;
pub use set::{DEFAULT_FILENAME, DescriptorSet};
