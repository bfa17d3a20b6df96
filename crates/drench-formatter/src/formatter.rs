/*
 * formatter.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The formatter contract and the identity formatter.

use drench_value::Value;

/// Canonical directive value selecting [`EmptyListStrategy::KeepLine`].
pub const KEEP_LINE: &str = "<keepline>";

/// Canonical directive value selecting [`EmptyListStrategy::RemoveLine`].
pub const REMOVE_LINE: &str = "<removeline>";

/// Policy for a templated line whose variable resolved to an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListStrategy {
    /// Emit the line, with the empty value formatted in place.
    #[default]
    KeepLine,

    /// Drop the line from the hydrated output entirely.
    RemoveLine,
}

impl EmptyListStrategy {
    /// Parse a directive value, case-insensitively.
    ///
    /// Returns `None` for anything but the two canonical tokens; callers
    /// keep their current strategy in that case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            KEEP_LINE => Some(EmptyListStrategy::KeepLine),
            REMOVE_LINE => Some(EmptyListStrategy::RemoveLine),
            _ => None,
        }
    }
}

/// Formats resolved variable values during hydration.
///
/// The hydration driver builds one formatter per target environment and
/// calls [`format`](Formatter::format) for every resolved value. Before
/// emitting a line bound to an empty list it consults
/// [`empty_list_strategy`](Formatter::empty_list_strategy) instead.
pub trait Formatter {
    /// Map a resolved value to its output representation.
    ///
    /// Total: every input produces a value, never an error.
    fn format(&self, value: &Value) -> Value;

    /// Policy for lines whose variable resolved to an empty list.
    fn empty_list_strategy(&self) -> EmptyListStrategy;
}

/// Identity formatter: values pass through untouched, empty-list lines are
/// always kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn format(&self, value: &Value) -> Value {
        value.clone()
    }

    fn empty_list_strategy(&self) -> EmptyListStrategy {
        EmptyListStrategy::KeepLine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_default() {
        assert_eq!(EmptyListStrategy::default(), EmptyListStrategy::KeepLine);
    }

    #[test]
    fn test_strategy_parse_any_casing() {
        for raw in ["<keepline>", "<keepLine>", "<KEEPLINE>"] {
            assert_eq!(
                EmptyListStrategy::parse(raw),
                Some(EmptyListStrategy::KeepLine)
            );
        }
        for raw in ["<removeline>", "<removeLine>", "<REMOVELINE>"] {
            assert_eq!(
                EmptyListStrategy::parse(raw),
                Some(EmptyListStrategy::RemoveLine)
            );
        }
    }

    #[test]
    fn test_strategy_parse_rejects_near_misses() {
        for raw in ["<AkeepLineB>", "<removeLi>", "<r>", "keepLine", "removeLine", ""] {
            assert_eq!(EmptyListStrategy::parse(raw), None);
        }
    }

    #[test]
    fn test_raw_formatter_is_identity() {
        let formatter = RawFormatter;

        for value in [
            Value::Null,
            Value::Bool(false),
            Value::Int(0),
            Value::from("foobar"),
            Value::List(vec![]),
        ] {
            assert_eq!(formatter.format(&value), value);
        }

        assert_eq!(formatter.empty_list_strategy(), EmptyListStrategy::KeepLine);
    }
}
