//! # sqlwhere-query
//!
//! Composable, immutable SQL `WHERE` predicates.
//!
//! A [`Where`] is built from leaf comparisons on columns and combined with
//! negation, conjunction and disjunction. It renders into dialect-specific
//! SQL with `?` placeholders, and separately produces the ordered list of
//! values to bind to those placeholders.
//!
//! ## Features
//!
//! - **Boolean algebra** - `not`, `and`, `or` (and `!`, `&`, `|`) with
//!   simplification against the constant predicates [`Where::all`] and
//!   [`Where::none`]
//! - **Persistent tree** - nodes are shared through `Arc`; combining never
//!   copies or mutates the operands
//! - **Dialect-aware `LIKE`** - case-sensitive and case-insensitive pattern
//!   matching for SQLite, MySQL and PostgreSQL
//! - **Safe binding** - values never end up in the SQL text; `LIKE` wildcards
//!   in user text are escaped
//!
//! ## Architecture
//!
//! - [`value`]: dynamically typed values carried by leaves and bound to
//!   placeholders
//! - [`types`]: comparison operators and logical connectors
//! - [`expr`]: the [`Where`] tree and its algebra
//! - [`dialect`]: the supported SQL dialects
//! - [`backend`]: rendering, binding and [`CompiledWhere`]
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlwhere_query::prelude::*;
//!
//! let cond = Where::leaf("age", Operator::GreaterOrEqual, 18)
//!     & Where::leaf("name", Operator::CiStartsWith, "jo")
//!     & !Where::leaf("id", Operator::IsIn, vec![1, 2]);
//!
//! assert_eq!(
//!     cond.render(Dialect::Postgres).unwrap(),
//!     "age >= ? AND UPPER(name::text) LIKE UPPER(?) AND id NOT IN (?, ?)"
//! );
//! assert_eq!(
//!     cond.bind_values().unwrap().into_inner(),
//!     vec![Value::from(18), Value::from("jo%"), Value::from(1), Value::from(2)]
//! );
//! ```
//!
//! ## Backend Differences
//!
//! | Operator family | SQLite | MySQL | PostgreSQL | Generic |
//! |-----------------|--------|-------|------------|---------|
//! | `StartsWith`, `EndsWith`, `Contains` | `LIKE ? ESCAPE '\'` | `LIKE BINARY ?` | `LIKE ?` | `LIKE ?` |
//! | `Ci*` | `LIKE ? ESCAPE '\'` | `LIKE ?` | `UPPER(col::text) LIKE UPPER(?)` | `LIKE ?` |
//! | Placeholders | `?` | `?` | `?` | `?` |
//!
//! ## Feature Flags
//!
//! - `with-chrono`: Enable chrono date/time types in `Value`
//! - `with-uuid`: Enable UUID type in `Value`
//! - `with-json`: Enable JSON type in `Value`

// Core modules
pub mod error;
pub mod types;
pub mod value;

// Expression module
pub mod expr;

// Dialects and SQL generation
pub mod backend;
pub mod dialect;

/// Prelude module for convenient imports.
///
/// ```rust
/// use sqlwhere_query::prelude::*;
/// ```
pub mod prelude {
	pub use crate::backend::{BindSink, CompiledWhere, escape_like};
	pub use crate::dialect::Dialect;
	pub use crate::error::WhereError;
	pub use crate::expr::Where;
	pub use crate::types::{Connector, Operator};
	pub use crate::value::{IntoValue, Value, Values};
	pub use crate::{where_all, where_any};
}

// Re-export commonly used types at crate root
pub use error::Result;
pub use prelude::*;
