//! Database settings module.
//!
//! # Examples
//!
//! ```rust
//! use sqlwhere::conf::DatabaseConfig;
//! use sqlwhere::query::Dialect;
//!
//! let db = DatabaseConfig::sqlite(":memory:");
//! assert_eq!(db.dialect().unwrap(), Dialect::Sqlite);
//! ```

pub use sqlwhere_conf::*;
