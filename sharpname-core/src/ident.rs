//! Identifier predicates shared by the schema validator and the name resolvers.

/// Check whether `name` is a plain identifier: a letter or underscore
/// followed by letters, digits and underscores.
pub fn is_valid_identifier(name: &str) -> bool {
    validate_identifier(name).is_none()
}

/// Validate that a name is a plain identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("name must contain only letters, numbers, and underscores")
    }
}
