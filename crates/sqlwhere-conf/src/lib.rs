//! # sqlwhere-conf
//!
//! Database settings for sqlwhere.
//!
//! A [`DatabaseConfig`] describes one database connection in the style of a
//! Django `DATABASES` entry and resolves the [`Dialect`](sqlwhere_query::Dialect)
//! WHERE clauses must be rendered for. [`DatabaseSettings`] groups several of
//! them by alias and loads them from TOML.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlwhere_conf::DatabaseConfig;
//! use sqlwhere_query::{Operator, Where};
//!
//! let db = DatabaseConfig::postgresql("app", "app", "secret", "localhost", 5432);
//! let cond = Where::leaf("email", Operator::CiEndsWith, "@example.com");
//!
//! assert_eq!(
//!     cond.render(db.dialect().unwrap()).unwrap(),
//!     "UPPER(email::text) LIKE UPPER(?)"
//! );
//! ```

pub mod database_config;
pub mod database_settings;
pub mod error;

pub use database_config::DatabaseConfig;
pub use database_settings::{DEFAULT_DB_ALIAS, DatabaseSettings};
pub use error::{ConfError, Result};
