//! Key parsing for choice-type members (`value[x]`).
//!
//! A choice member is written as the field stem followed by the upper-camel
//! type name: `valueQuantity`, `deceasedBoolean`, `_valueString`.

/// Returns the type suffix of `key` when it belongs to the choice `stem`.
///
/// A leading `_` is accepted so companion keys map to the same suffix. The
/// suffix must start with an ASCII uppercase letter; `values` is not a member
/// of the `value` choice. Whether the suffix names an allowed type is decided
/// by the caller.
pub fn choice_suffix<'k>(stem: &str, key: &'k str) -> Option<&'k str> {
    let key = key.strip_prefix('_').unwrap_or(key);
    let suffix = key.strip_prefix(stem)?;
    suffix
        .chars()
        .next()
        .filter(char::is_ascii_uppercase)
        .map(|_| suffix)
}

/// Builds the member name for `stem` holding a value of `type_name`.
///
/// `type_name` is the FHIR type name (`string`, `Quantity`); its first letter
/// is upper-cased.
pub fn choice_key(stem: &str, type_name: &str) -> String {
    let mut key = String::with_capacity(stem.len() + type_name.len());
    key.push_str(stem);
    let mut chars = type_name.chars();
    if let Some(first) = chars.next() {
        key.extend(first.to_uppercase());
        key.push_str(chars.as_str());
    }
    key
}

/// Returns `true` when `suffix` is the key form of `type_name`.
pub fn suffix_matches(type_name: &str, suffix: &str) -> bool {
    let mut name = type_name.chars();
    let mut key = suffix.chars();
    match (name.next(), key.next()) {
        (Some(n), Some(k)) => n.to_ascii_uppercase() == k && name.as_str() == key.as_str(),
        _ => false,
    }
}

/// Upper-cases the first letter of a FHIR type name (`dateTime` -> `DateTime`).
pub fn type_suffix(type_name: &str) -> String {
    choice_key("", type_name)
}
