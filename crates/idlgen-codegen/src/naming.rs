//! Identifier normalization for generated enum members and classes.
//!
//! Only two rules are applied: a leading digit gets an underscore prefix and
//! hyphens become underscores. Any other character passes through unchanged.

/// Convert a raw wire-format identifier into a target identifier.
///
/// `"1-off"` becomes `"_1_off"`. Applying it twice gives the same result as
/// applying it once.
pub fn converted_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len() + 1);
    if raw.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.push('_');
    }
    name.push_str(raw);
    name.replace('-', "_")
}

/// Upper-case the first character of an enum name, leaving the rest as is.
pub fn class_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
