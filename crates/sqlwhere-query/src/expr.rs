//! Predicate expressions.
//!
//! A [`Where`] is built from leaf comparisons and combined with
//! [`Where::and`], [`Where::or`] and [`Where::not`] (or the `&`, `|` and `!`
//! operators). Combining simplifies against the constant predicates
//! [`Where::all`] and [`Where::none`] and keeps chains of the same connector
//! flat.
//!
//! ```rust
//! use sqlwhere_query::{Operator, Where};
//!
//! let a = Where::leaf("a", Operator::Equals, 1);
//! let b = Where::leaf("b", Operator::Equals, 2);
//!
//! let cond = !(&a & &b) | Where::leaf("c", Operator::IsNull, true);
//! assert!(!cond.is_leaf());
//! assert!((&a | &Where::all()).is_all());
//! ```

mod algebra;
mod node;

pub use node::Where;
pub(crate) use node::{Leaf, Node};
