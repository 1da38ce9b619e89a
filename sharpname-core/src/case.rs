//! Case conversion for schema names.
//!
//! Schema names arrive as `snake_case`, `SHOUTY_CASE` or mixed-case tokens
//! (`foo_bar`, `FOO_BAR`, `my.package`). The converters here turn them into
//! PascalCase or camelCase identifiers. Only ASCII letters and digits are
//! ever emitted, plus `.` and `_` in the narrow cases documented below.

/// Trailing marker that requests an escaped identifier.
///
/// A name ending in `#` is converted as usual and then gets a trailing `_`,
/// which callers use to step around reserved words.
pub const ESCAPE_SENTINEL: char = '#';

/// Character classes recognised by the conversion scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Period,
    Underscore,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        match c {
            'a'..='z' => Self::Lower,
            'A'..='Z' => Self::Upper,
            '0'..='9' => Self::Digit,
            '.' => Self::Period,
            '_' => Self::Underscore,
            _ => Self::Other,
        }
    }
}

/// Accumulator for a single left-to-right scan.
struct Scan {
    out: String,
    cap_next: bool,
}

impl Scan {
    fn new(capacity: usize, cap_next: bool) -> Self {
        Self {
            out: String::with_capacity(capacity),
            cap_next,
        }
    }

    /// Emit a character and end the current word boundary.
    fn letter(&mut self, c: char) {
        self.out.push(c);
        self.cap_next = false;
    }

    /// Mark a word boundary, optionally keeping the separator.
    fn boundary(&mut self, keep: Option<char>) {
        if let Some(c) = keep {
            self.out.push(c);
        }
        self.cap_next = true;
    }
}

/// Convert an underscore-separated name to camelCase or PascalCase.
///
/// - `cap_next_letter` capitalizes the first letter (PascalCase); when false
///   a leading uppercase letter is lowered (camelCase).
/// - `preserve_period` keeps `.` separators, so a dotted package such as
///   `foo_bar.baz` becomes `FooBar.Baz`.
///
/// Digits act as word separators: the letter after a digit is capitalized.
/// Separators are consumed, except for an `_` sitting between a kept `.`
/// and a digit (`my.scope._3` -> `My.Scope._3`), which would otherwise
/// produce a segment starting with a digit.
///
/// If the input starts with `_` and the converted result would start with a
/// digit, a single `_` is prepended so the result stays a valid identifier.
///
/// # Examples
///
/// ```
/// use sharpname_core::underscores_to_camel_case;
///
/// assert_eq!(underscores_to_camel_case("foo_bar", true, false), "FooBar");
/// assert_eq!(underscores_to_camel_case("FooBar", false, false), "fooBar");
/// assert_eq!(underscores_to_camel_case("_123_foo", true, false), "_123Foo");
/// assert_eq!(underscores_to_camel_case("my.scope._3", true, true), "My.Scope._3");
/// ```
pub fn underscores_to_camel_case(
    input: &str,
    cap_next_letter: bool,
    preserve_period: bool,
) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut scan = Scan::new(input.len(), cap_next_letter);

    for (i, &c) in chars.iter().enumerate() {
        match CharClass::of(c) {
            CharClass::Lower if scan.cap_next => scan.letter(c.to_ascii_uppercase()),
            CharClass::Lower => scan.letter(c),
            CharClass::Upper if i == 0 && !cap_next_letter => scan.letter(c.to_ascii_lowercase()),
            CharClass::Upper => scan.letter(c),
            CharClass::Digit => {
                scan.out.push(c);
                scan.cap_next = true;
            }
            CharClass::Underscore if preserve_period && shields_digit(&chars, i) => {
                scan.out.push(c);
            }
            CharClass::Period if preserve_period => scan.boundary(Some(c)),
            CharClass::Period | CharClass::Underscore | CharClass::Other => scan.boundary(None),
        }
    }

    if chars.last() == Some(&ESCAPE_SENTINEL) {
        scan.out.push('_');
    }

    // Leading separators are all consumed by the scan, so the digit check
    // has to happen on the result.
    if scan.out.starts_with(|c: char| c.is_ascii_digit()) && input.starts_with('_') {
        scan.out.insert(0, '_');
    }

    scan.out
}

/// Convert an underscore-separated name to PascalCase.
pub fn underscores_to_pascal_case(input: &str) -> String {
    underscores_to_camel_case(input, true, false)
}

/// `_` at `i` sits between a `.` and a digit.
fn shields_digit(chars: &[char], i: usize) -> bool {
    i > 0 && chars[i - 1] == '.' && chars.get(i + 1).is_some_and(char::is_ascii_digit)
}

/// Convert a `SHOUTY_CASE` name to PascalCase (`FOO_BAR` -> `FooBar`).
///
/// Non-alphanumeric characters are dropped and start a new word. Within a
/// word, letters following an uppercase letter are lowered while letters
/// following a lowercase letter are kept, so mixed-case input such as
/// `Foo_BarBaz` survives as `FooBarBaz`. A letter after a digit starts a
/// new word.
pub fn shouty_to_pascal_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut previous = '_';

    for c in input.chars() {
        if !c.is_ascii_alphanumeric() {
            previous = c;
            continue;
        }
        if !previous.is_ascii_alphanumeric() || previous.is_ascii_digit() {
            result.push(c.to_ascii_uppercase());
        } else if previous.is_ascii_lowercase() {
            result.push(c);
        } else {
            result.push(c.to_ascii_lowercase());
        }
        previous = c;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(underscores_to_camel_case("Foo_Bar", true, false), "FooBar");
        assert_eq!(underscores_to_camel_case("foo_bar_baz", true, false), "FooBarBaz");
        assert_eq!(underscores_to_pascal_case("foo_bar"), "FooBar");
        assert_eq!(underscores_to_pascal_case(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(underscores_to_camel_case("FooBar", false, false), "fooBar");
        assert_eq!(underscores_to_camel_case("foo_bar", false, false), "fooBar");
        assert_eq!(underscores_to_camel_case("foo_123", false, false), "foo123");
    }

    #[test]
    fn test_uppercase_after_first_is_kept() {
        assert_eq!(underscores_to_camel_case("fooBAR", true, false), "FooBAR");
        assert_eq!(underscores_to_camel_case("HTTPServer", false, false), "hTTPServer");
    }

    #[test]
    fn test_digit_starts_new_word() {
        assert_eq!(underscores_to_camel_case("foo2bar", false, false), "foo2Bar");
        assert_eq!(underscores_to_camel_case("v1beta", true, false), "V1Beta");
    }

    #[test]
    fn test_leading_underscores_dropped() {
        assert_eq!(underscores_to_camel_case("_Foo_123", true, false), "Foo123");
        // The first letter after the consumed underscores is capitalized
        // even in camelCase mode.
        assert_eq!(underscores_to_camel_case("___fooBar", false, false), "FooBar");
    }

    #[test]
    fn test_leading_underscore_kept_before_digit() {
        assert_eq!(underscores_to_camel_case("_123_foo", true, false), "_123Foo");
        assert_eq!(underscores_to_camel_case("___123_foo", true, false), "_123Foo");
        assert_eq!(underscores_to_camel_case("_2", false, false), "_2");
    }

    #[test]
    fn test_digit_led_input_is_not_guarded() {
        assert_eq!(underscores_to_camel_case("1abc", true, false), "1Abc");
    }

    #[test]
    fn test_preserve_period() {
        assert_eq!(underscores_to_camel_case("foo_bar.baz", true, true), "FooBar.Baz");
        assert_eq!(underscores_to_camel_case("foo_bar.baz", true, false), "FooBarBaz");
        assert_eq!(underscores_to_camel_case("google.protobuf", true, true), "Google.Protobuf");
    }

    #[test]
    fn test_underscore_between_period_and_digit() {
        assert_eq!(underscores_to_camel_case("my.scope._3", true, true), "My.Scope._3");
        assert_eq!(underscores_to_camel_case("my.Scope.fd_3", true, true), "My.Scope.Fd3");
        assert_eq!(underscores_to_camel_case("my._scope.Fd", true, true), "My.Scope.Fd");
    }

    #[test]
    fn test_underscore_between_period_and_digit_without_periods() {
        assert_eq!(underscores_to_camel_case("my.scope._3", true, false), "MyScope3");
    }

    #[test]
    fn test_escape_sentinel() {
        assert_eq!(underscores_to_camel_case("string#", false, false), "string_");
        assert_eq!(underscores_to_camel_case("class#", true, false), "Class_");
        assert_eq!(underscores_to_camel_case("#", true, false), "_");
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        assert_eq!(underscores_to_camel_case("foo-bar", true, false), "FooBar");
        assert_eq!(underscores_to_camel_case("café_au_lait", false, false), "cafAuLait");
    }

    #[test]
    fn test_never_starts_with_digit_for_identifier_like_input() {
        let inputs = [
            "_1", "__1_a", "_9lives", "a1", "_a_1", "___", "_0.x", "foo", "Foo_2_bar",
        ];
        for input in inputs {
            for cap in [true, false] {
                for period in [true, false] {
                    let out = underscores_to_camel_case(input, cap, period);
                    assert!(
                        !out.starts_with(|c: char| c.is_ascii_digit()),
                        "{input:?} ({cap}, {period}) -> {out:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_camel_case_first_letter_is_lowercase() {
        for input in ["Foo", "fooBar", "FOO", "Foo_Bar", "x"] {
            let out = underscores_to_camel_case(input, false, false);
            let first = out.chars().next().unwrap();
            assert!(first.is_ascii_lowercase(), "{input:?} -> {out:?}");
        }
    }

    #[test]
    fn test_shouty_to_pascal_case() {
        assert_eq!(shouty_to_pascal_case("FOO_BAR"), "FooBar");
        assert_eq!(shouty_to_pascal_case("BAR"), "Bar");
        assert_eq!(shouty_to_pascal_case("Foo_BarBaz"), "FooBarBaz");
        assert_eq!(shouty_to_pascal_case("FOO__BAR"), "FooBar");
        assert_eq!(shouty_to_pascal_case("2_BAR"), "2Bar");
        assert_eq!(shouty_to_pascal_case("V2BETA"), "V2Beta");
        assert_eq!(shouty_to_pascal_case("___"), "");
    }
}
