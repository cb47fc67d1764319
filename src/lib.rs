//! # sqlwhere
//!
//! Composable, immutable SQL `WHERE` predicates.
//!
//! Build conditions from column comparisons, combine them with `&`, `|` and
//! `!`, then render them for SQLite, MySQL or PostgreSQL together with the
//! ordered values to bind to their `?` placeholders.
//!
//! ## Feature Flags
//!
//! - `conf` (default) - database settings resolving the dialect from an
//!   engine name, loaded from TOML
//! - `with-chrono` - chrono date/time values
//! - `with-uuid` - UUID values
//! - `with-json` - JSON values
//! - `full` - all of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlwhere::prelude::*;
//!
//! let adults = Where::leaf("age", Operator::GreaterOrEqual, 18);
//! let named = Where::leaf("name", Operator::CiStartsWith, "A");
//! let pending = Where::leaf("status", Operator::IsNull, true);
//!
//! let compiled = (adults & (named | pending)).compile(Dialect::Sqlite).unwrap();
//!
//! assert_eq!(
//!     compiled.to_clause(),
//!     r" WHERE age >= ? AND (name LIKE ? ESCAPE '\' OR status IS NULL)"
//! );
//! assert_eq!(compiled.values.into_inner(), vec![Value::from(18), Value::from("A%")]);
//! ```
//!
//! Constant predicates simplify away, so optional filters can be folded
//! without special cases:
//!
//! ```rust
//! use sqlwhere::prelude::*;
//!
//! let name_filter: Option<&str> = None;
//! let cond = Where::leaf("active", Operator::Equals, true)
//!     & name_filter.map_or_else(Where::all, |n| Where::leaf("name", Operator::Equals, n));
//!
//! assert_eq!(cond.render(Dialect::Postgres).unwrap(), "active = ?");
//! ```

#[cfg(feature = "conf")]
pub mod conf;
pub mod query;

pub use sqlwhere_query::{
	BindSink, CompiledWhere, Connector, Dialect, IntoValue, Operator, Value, Values, Where,
	WhereError, escape_like, where_all, where_any,
};

#[cfg(feature = "conf")]
pub use sqlwhere_conf::{ConfError, DatabaseConfig, DatabaseSettings};

/// Prelude module for convenient imports.
///
/// ```rust
/// use sqlwhere::prelude::*;
/// ```
pub mod prelude {
	pub use sqlwhere_query::prelude::*;

	#[cfg(feature = "conf")]
	pub use sqlwhere_conf::{DatabaseConfig, DatabaseSettings};
}
