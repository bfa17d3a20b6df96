/*
 * rules.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Rule-based value formatting.
//!
//! A [`RulesFormatter`] is built once from an ordered declaration table and
//! used read-only afterwards. Table keys are rule conditions: either one of
//! the reserved tokens from [`crate::special`] or a literal string compared
//! by strict equality. Table values are the corresponding results. Rules
//! are evaluated in declaration order, first match wins; a value no rule
//! matches passes through unchanged.
//!
//! One pseudo-entry is not a rule: a key that trims and case-folds to
//! `<emptylist>` configures the formatter's empty-list strategy and is
//! consumed at construction time. Declaring it twice is an error.

use indexmap::IndexMap;

use drench_value::Value;

use crate::error::{FormatterError, FormatterResult};
use crate::formatter::{EmptyListStrategy, Formatter};
use crate::special::{SpecialToken, substitute_string};

/// Normalized key of the empty-list directive pseudo-entry.
const EMPTY_LIST_DIRECTIVE: &str = "<emptylist>";

/// Left-hand side of a rule.
#[derive(Debug, Clone, PartialEq)]
enum Condition {
    /// Matches by strict equality: same type, same value, no coercion.
    Literal(Value),

    /// Matches by the token's fixed predicate.
    Special(SpecialToken),
}

impl Condition {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Condition::Literal(expected) => expected == value,
            Condition::Special(token) => token.matches(value),
        }
    }
}

/// Right-hand side of a rule.
#[derive(Debug, Clone, PartialEq)]
enum RuleResult {
    /// Replace the matched value with this one.
    Literal(Value),

    /// Replace every `<string>` occurrence in the template with the matched
    /// string. Only built for `<string>` rules with string results.
    Substitute(String),
}

impl RuleResult {
    fn apply(&self, value: &Value) -> Value {
        match self {
            RuleResult::Literal(replacement) => replacement.clone(),
            RuleResult::Substitute(template) => {
                // The is-string condition gates this arm, so `value` is a
                // string whenever a Substitute result is applied.
                let matched = value.as_str().unwrap_or_default();
                Value::String(substitute_string(template, matched))
            }
        }
    }
}

/// A single `condition -> result` pair.
#[derive(Debug, Clone, PartialEq)]
struct Rule {
    condition: Condition,
    result: RuleResult,
}

/// Rule-table formatter: first matching rule wins, in declaration order.
#[derive(Debug, Clone)]
pub struct RulesFormatter {
    rules: Vec<Rule>,
    empty_list_strategy: EmptyListStrategy,
}

impl RulesFormatter {
    /// Build a formatter from an ordered declaration table.
    ///
    /// At most one `<emptyList>` pseudo-entry (any casing) may configure the
    /// empty-list strategy; a second occurrence fails with
    /// [`FormatterError::DuplicateDirective`]. Every other entry becomes a
    /// rule, in table order.
    pub fn new(table: &IndexMap<String, Value>) -> FormatterResult<Self> {
        let mut formatter = RulesFormatter {
            rules: Vec::with_capacity(table.len()),
            empty_list_strategy: EmptyListStrategy::default(),
        };

        let mut directive_seen = false;
        for (key, value) in table {
            if key.trim().to_lowercase() == EMPTY_LIST_DIRECTIVE {
                if directive_seen {
                    return Err(FormatterError::DuplicateDirective { key: key.clone() });
                }
                directive_seen = true;
                formatter.apply_directive(key.trim(), value);
                continue;
            }

            formatter.push_rule(key, value);
        }

        Ok(formatter)
    }

    fn apply_directive(&mut self, key: &str, value: &Value) {
        let Some(raw) = value.as_str() else {
            tracing::warn!(key, "Ignoring non-string empty-list directive value");
            return;
        };

        self.set_empty_list_strategy(raw.trim());
    }

    /// Set the strategy from a directive value token.
    ///
    /// An unrecognized token leaves the current strategy unchanged.
    fn set_empty_list_strategy(&mut self, raw: &str) {
        match EmptyListStrategy::parse(raw) {
            Some(strategy) => self.empty_list_strategy = strategy,
            None => {
                tracing::warn!(value = raw, "Ignoring unrecognized empty-list strategy");
            }
        }
    }

    fn push_rule(&mut self, key: &str, value: &Value) {
        let trimmed = key.trim();

        let rule = match SpecialToken::parse(trimmed) {
            Some(SpecialToken::String) => Rule {
                condition: Condition::Special(SpecialToken::String),
                result: string_rule_result(value),
            },
            Some(token) => Rule {
                condition: Condition::Special(token),
                result: RuleResult::Literal(value.clone()),
            },
            None => Rule {
                condition: Condition::Literal(Value::String(trimmed.to_string())),
                result: RuleResult::Literal(value.clone()),
            },
        };

        self.rules.push(rule);
    }
}

/// Result for a `<string>` rule: a string result becomes a substitution
/// template, anything else stays a literal replacement.
fn string_rule_result(value: &Value) -> RuleResult {
    match value.as_str() {
        Some(template) => RuleResult::Substitute(template.to_string()),
        None => {
            tracing::debug!("Non-string result for <string> rule, keeping it literal");
            RuleResult::Literal(value.clone())
        }
    }
}

impl Formatter for RulesFormatter {
    fn format(&self, value: &Value) -> Value {
        for rule in &self.rules {
            if rule.condition.matches(value) {
                return rule.result.apply(value);
            }
        }

        value.clone()
    }

    fn empty_list_strategy(&self) -> EmptyListStrategy {
        self.empty_list_strategy
    }
}
