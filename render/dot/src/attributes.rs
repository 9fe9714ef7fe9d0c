//! DOT attribute lists

use std::borrow::Cow;
use std::fmt;

/// An ordered list of DOT attributes for one statement.
///
/// Displays as a bracketed attribute list such as
/// `[shape=box, style="dashed,filled"]`, or as nothing at all when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DotAttributes {
    attributes: Vec<(&'static str, String)>,
}

impl DotAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: String) {
        self.attributes.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Display for DotAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attributes.is_empty() {
            return Ok(());
        }

        f.write_str("[")?;
        for (i, (name, value)) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, quote(value))?;
        }
        f.write_str("]")
    }
}

/// Quote a value unless DOT accepts it bare.
///
/// Bare values are identifiers (letters, digits, underscores, not starting
/// with a digit) and numerals.
fn quote(value: &str) -> Cow<'_, str> {
    if is_identifier(value) || is_numeral(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!(
            "\"{}\"",
            value.replace('\\', "\\\\").replace('"', "\\\"")
        ))
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_numeral(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut parts = digits.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    match fraction {
        None => !whole.is_empty() && all_digits(whole),
        Some(fraction) => {
            (!whole.is_empty() || !fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_numeral, quote};

    #[test]
    fn numerals() {
        assert!(is_numeral("1"));
        assert!(is_numeral("0.5"));
        assert!(is_numeral("-.25"));
        assert!(is_numeral("3."));
        assert!(!is_numeral("."));
        assert!(!is_numeral("-"));
        assert!(!is_numeral("1e5"));
    }

    #[test]
    fn quoting() {
        assert_eq!(quote("box"), "box");
        assert_eq!(quote("0.75"), "0.75");
        assert_eq!(quote("dashed,filled"), "\"dashed,filled\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
