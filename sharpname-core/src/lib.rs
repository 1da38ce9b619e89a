//! Core utilities for the sharpname identifier generator.
//!
//! This crate provides the character-level building blocks used by
//! `sharpname-codegen`: case conversion of schema names and identifier
//! predicates. It has no knowledge of schema files.

mod case;
mod ident;

// Case conversion
pub use case::{
    ESCAPE_SENTINEL, shouty_to_pascal_case, underscores_to_camel_case, underscores_to_pascal_case,
};
// Identifier predicates
pub use ident::{is_valid_identifier, validate_identifier};
