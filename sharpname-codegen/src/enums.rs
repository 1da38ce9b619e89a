//! Enum value naming.
//!
//! Schemas commonly repeat the enum's name in front of every value
//! (`COLOR_RED` in enum `Color`). Generated code scopes values by their
//! enum already, so the repeated prefix is stripped before casing.

use sharpname_core::shouty_to_pascal_case;
use sharpname_schema::EnumDescriptor;

/// Name of an enum value in generated code.
///
/// The enum name is compared against the value ignoring case and
/// underscores, so `FO_O` matches the `FOO` in `FOO_BAR` and `Foo` matches
/// `F_O_O_BAR`. When the value is nothing but the prefix (`FOO`, `FOO___`)
/// the whole value is used instead. A result that would start with a digit
/// gets a leading `_`.
///
/// # Examples
///
/// ```
/// use sharpname_codegen::enum_value_name;
///
/// assert_eq!(enum_value_name("Foo", "FOO_BAR"), "Bar");
/// assert_eq!(enum_value_name("Foo", "FOO"), "Foo");
/// assert_eq!(enum_value_name("Foo", "FOO_2_BAR"), "_2Bar");
/// ```
pub fn enum_value_name(enum_name: &str, value_name: &str) -> String {
    let stripped = try_remove_prefix(enum_name, value_name);
    let source = if stripped.is_empty() {
        value_name
    } else {
        stripped
    };

    let result = shouty_to_pascal_case(source);
    match result.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", result),
        Some(_) => result,
    }
}

/// Names of every value of an enum, paired with the raw value names.
pub fn enum_value_names(enum_type: &EnumDescriptor) -> Vec<(&str, String)> {
    enum_type
        .values
        .iter()
        .map(|value| {
            let name = enum_value_name(&enum_type.name, &value.name);
            (value.name.as_str(), name)
        })
        .collect()
}

/// Remove `prefix` from the front of `value`, together with any underscores
/// following it. Returns `value` unchanged when it does not start with the
/// prefix, and an empty string when nothing follows the prefix.
fn try_remove_prefix<'a>(prefix: &str, value: &'a str) -> &'a str {
    match matched_prefix_len(prefix, value) {
        Some(cut) => value[cut..].trim_start_matches('_'),
        None => value,
    }
}

/// Byte length of the shortest leading part of `value` whose normalized
/// form equals the normalized `prefix`.
fn matched_prefix_len(prefix: &str, value: &str) -> Option<usize> {
    let target = normalize(prefix);
    let mut expected = target.chars().peekable();
    if expected.peek().is_none() {
        return Some(0);
    }

    for (i, c) in value.char_indices() {
        if c == '_' {
            continue;
        }
        if expected.next() != Some(c.to_ascii_uppercase()) {
            return None;
        }
        if expected.peek().is_none() {
            return Some(i + c.len_utf8());
        }
    }

    // Value ran out before the prefix did.
    None
}

/// Uppercase with underscores removed.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '_')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
