//! # drench-value
//!
//! The dynamically-typed value model shared by the variable-resolution and
//! formatting layers of drench.
//!
//! Resolved template variables carry values of mixed origin: booleans,
//! nulls, strings, numbers, or lists. [`Value`] represents them with strict,
//! type-aware equality — `Int(0)`, `Bool(false)` and `String("0")` are three
//! distinct values that never compare equal — which is what the formatting
//! rules downstream rely on.
//!
//! ## Example
//!
//! ```rust
//! use drench_value::Value;
//!
//! let port = Value::from(8080);
//! assert_eq!(port.render(), "8080");
//! assert_ne!(port, Value::from("8080"));
//! ```

mod value;

pub use value::Value;
