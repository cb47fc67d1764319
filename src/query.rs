//! Predicate expressions, dialects, rendering and binding.
//!
//! # Examples
//!
//! ```rust
//! use sqlwhere::query::{Dialect, Operator, Where};
//!
//! let cond = Where::leaf("id", Operator::IsIn, vec![1, 2, 3]);
//! assert_eq!(cond.render(Dialect::Generic).unwrap(), "id IN (?, ?, ?)");
//! ```

pub use sqlwhere_query::*;
