/*
 * special.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reserved condition tokens with fixed predicate semantics.

use drench_value::Value;

/// A reserved rule-condition token.
///
/// Recognition is exact and case-sensitive on the trimmed key: `<True>` is
/// an ordinary literal condition, not a token. (The `<emptyList>` directive
/// key, by contrast, is matched case-insensitively — a longstanding
/// asymmetry that callers depend on.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// `<true>` — matches boolean true, and nothing else.
    True,
    /// `<false>` — matches boolean false, and nothing else.
    False,
    /// `<null>` — matches the null sentinel, and nothing else.
    Null,
    /// `<string>` — matches any string value.
    String,
}

impl SpecialToken {
    /// Recognize a trimmed declaration key as a token.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "<true>" => Some(SpecialToken::True),
            "<false>" => Some(SpecialToken::False),
            "<null>" => Some(SpecialToken::Null),
            "<string>" => Some(SpecialToken::String),
            _ => None,
        }
    }

    /// Get the canonical token string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialToken::True => "<true>",
            SpecialToken::False => "<false>",
            SpecialToken::Null => "<null>",
            SpecialToken::String => "<string>",
        }
    }

    /// Check whether a resolved value satisfies this token's predicate.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            SpecialToken::True => matches!(value, Value::Bool(true)),
            SpecialToken::False => matches!(value, Value::Bool(false)),
            SpecialToken::Null => value.is_null(),
            SpecialToken::String => value.is_string(),
        }
    }
}

/// Replace every literal `<string>` occurrence in `template` with the
/// matched string.
///
/// This is the escape hatch that lets a single rule format arbitrary string
/// values, e.g. the template `"<string>"` wraps every string in quotes.
pub(crate) fn substitute_string(template: &str, matched: &str) -> String {
    template.replace(SpecialToken::String.as_str(), matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(SpecialToken::parse("<true>"), Some(SpecialToken::True));
        assert_eq!(SpecialToken::parse("<false>"), Some(SpecialToken::False));
        assert_eq!(SpecialToken::parse("<null>"), Some(SpecialToken::Null));
        assert_eq!(SpecialToken::parse("<string>"), Some(SpecialToken::String));

        assert_eq!(SpecialToken::parse("<True>"), None);
        assert_eq!(SpecialToken::parse("<STRING>"), None);
        assert_eq!(SpecialToken::parse("true"), None);
        assert_eq!(SpecialToken::parse(" <true>"), None); // callers trim first
    }

    #[test]
    fn test_predicates_are_strict() {
        assert!(SpecialToken::True.matches(&Value::Bool(true)));
        assert!(!SpecialToken::True.matches(&Value::from("true")));
        assert!(!SpecialToken::True.matches(&Value::Int(1)));

        assert!(SpecialToken::False.matches(&Value::Bool(false)));
        assert!(!SpecialToken::False.matches(&Value::Int(0)));
        assert!(!SpecialToken::False.matches(&Value::from("")));

        assert!(SpecialToken::Null.matches(&Value::Null));
        assert!(!SpecialToken::Null.matches(&Value::Int(0)));
        assert!(!SpecialToken::Null.matches(&Value::Bool(false)));

        assert!(SpecialToken::String.matches(&Value::from("")));
        assert!(SpecialToken::String.matches(&Value::from("<true>")));
        assert!(!SpecialToken::String.matches(&Value::Bool(true)));
    }

    #[test]
    fn test_substitute_string() {
        assert_eq!(substitute_string("\"<string>\"", "foobar"), "\"foobar\"");
        assert_eq!(
            substitute_string("<string>-<string>", "x"),
            "x-x" // every occurrence is replaced
        );
        assert_eq!(substitute_string("no placeholder", "x"), "no placeholder");
    }
}
