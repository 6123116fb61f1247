use crate::error::NamingError;
use std::borrow::Cow;

/// Derive a PascalCase declaration name from a component id.
///
/// Words are split on any non-alphanumeric character and on lower-to-upper
/// case boundaries: `call-to-action` and `callToAction` both become
/// `CallToAction`.
pub fn to_type_name(id: &str) -> Result<String, NamingError> {
    let mut name = String::with_capacity(id.len());

    for word in split_words(id) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }

    if name.is_empty() {
        return Err(NamingError::Empty(id.to_string()));
    }
    if !is_identifier(&name) {
        return Err(NamingError::InvalidIdentifier {
            id: id.to_string(),
            type_name: name,
        });
    }

    Ok(name)
}

fn split_words(id: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev: Option<char> = None;

    for (i, c) in id.char_indices() {
        if !c.is_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&id[s..i]);
            }
        } else {
            let boundary = matches!(prev, Some(p) if (p.is_lowercase() || p.is_numeric()) && c.is_uppercase());
            match start {
                Some(s) if boundary => {
                    words.push(&id[s..i]);
                    start = Some(i);
                }
                Some(_) => {}
                None => start = Some(i),
            }
        }
        prev = Some(c);
    }

    if let Some(s) = start {
        words.push(&id[s..]);
    }

    words
}

/// Whether `s` can be used unquoted as a TypeScript identifier
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Property key as it must appear in an object type
pub fn property_key(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(string_literal(name))
    }
}

/// Double-quoted TypeScript string literal, escaped the way JSON escapes
pub fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
