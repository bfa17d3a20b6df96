/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Declarative value formatting for configuration hydration.
//!
//! When a templated configuration file is hydrated, every placeholder is
//! replaced by a resolved variable value. This crate decides what that value
//! looks like in the output: a [`Formatter`] maps each resolved
//! [`Value`](drench_value::Value) to its final representation, and exposes
//! the policy for lines whose variable resolved to an empty list.
//!
//! Two formatters are provided:
//!
//! - [`RawFormatter`]: identity formatting, empty-list lines always kept.
//! - [`RulesFormatter`]: built once from an ordered declaration table of
//!   `condition -> result` rules, evaluated first-match-wins.
//!
//! Rule conditions are either literal strings (matched by strict equality)
//! or one of four reserved tokens with fixed predicates: `<true>`,
//! `<false>`, `<null>`, `<string>`. A `<emptyList>` pseudo-entry in the same
//! table configures the empty-list policy instead of contributing a rule.
//!
//! # Architecture
//!
//! The engine is **independent of any configuration file format**. Whatever
//! subsystem parses formatter declarations hands them over as an
//! `IndexMap<String, Value>`; conversion from serialized formats happens in
//! that layer (see `drench-value`'s JSON conversion), not in this crate.
//!
//! # Example
//!
//! ```ignore
//! use drench_formatter::{EmptyListStrategy, Formatter, RulesFormatter};
//! use drench_value::Value;
//! use indexmap::IndexMap;
//!
//! let mut table = IndexMap::new();
//! table.insert("<true>".to_string(), Value::from("yes"));
//! table.insert("<string>".to_string(), Value::from("\"<string>\""));
//! table.insert("<emptyList>".to_string(), Value::from("<removeLine>"));
//!
//! let formatter = RulesFormatter::new(&table)?;
//! assert_eq!(formatter.format(&Value::Bool(true)), Value::from("yes"));
//! assert_eq!(formatter.format(&Value::from("dev")), Value::from("\"dev\""));
//! assert_eq!(formatter.empty_list_strategy(), EmptyListStrategy::RemoveLine);
//! ```

pub mod error;
pub mod formatter;
pub mod rules;
pub mod special;

// Re-export main types at crate root
pub use error::{FormatterError, FormatterResult};
pub use formatter::{EmptyListStrategy, Formatter, RawFormatter};
pub use rules::RulesFormatter;
pub use special::SpecialToken;
