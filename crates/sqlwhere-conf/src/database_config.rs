//! Database configuration
//!
//! This module provides the `DatabaseConfig` struct describing one database
//! connection, and the [`Dialect`] its WHERE clauses are rendered for.

use serde::{Deserialize, Serialize};
use sqlwhere_query::Dialect;

use crate::error::Result;

/// Database configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
	/// Database engine/backend, e.g. `"sqlite3"` or `"app.db.backends.postgresql"`
	pub engine: String,

	/// Database name or path
	pub name: String,

	/// Database user (if applicable)
	#[serde(default)]
	pub user: Option<String>,

	/// Database password (if applicable)
	#[serde(default)]
	pub password: Option<String>,

	/// Database host (if applicable)
	#[serde(default)]
	pub host: Option<String>,

	/// Database port (if applicable)
	#[serde(default)]
	pub port: Option<u16>,

	/// Dialect to render for, overriding the one named by `engine`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub dialect: Option<Dialect>,
}

impl DatabaseConfig {
	/// Create a SQLite database configuration
	///
	/// # Examples
	///
	/// ```
	/// use sqlwhere_conf::DatabaseConfig;
	/// use sqlwhere_query::Dialect;
	///
	/// let db = DatabaseConfig::sqlite("myapp.db");
	///
	/// assert_eq!(db.engine, "sqlite3");
	/// assert_eq!(db.dialect().unwrap(), Dialect::Sqlite);
	/// assert!(db.user.is_none());
	/// ```
	pub fn sqlite(name: impl Into<String>) -> Self {
		Self::local("sqlite3", name)
	}

	/// Create a PostgreSQL database configuration
	///
	/// # Examples
	///
	/// ```
	/// use sqlwhere_conf::DatabaseConfig;
	///
	/// let db = DatabaseConfig::postgresql("mydb", "admin", "password123", "localhost", 5432);
	///
	/// assert_eq!(db.engine, "postgresql");
	/// assert_eq!(db.port, Some(5432));
	/// ```
	pub fn postgresql(
		name: impl Into<String>,
		user: impl Into<String>,
		password: impl Into<String>,
		host: impl Into<String>,
		port: u16,
	) -> Self {
		Self::server("postgresql", name, user, password, host, port)
	}

	/// Create a MySQL database configuration
	pub fn mysql(
		name: impl Into<String>,
		user: impl Into<String>,
		password: impl Into<String>,
		host: impl Into<String>,
		port: u16,
	) -> Self {
		Self::server("mysql", name, user, password, host, port)
	}

	/// Create a configuration for the generic dialect
	///
	/// SQL for such a database is rendered without any vendor-specific
	/// syntax.
	pub fn generic(name: impl Into<String>) -> Self {
		Self::local("generic", name)
	}

	fn local(engine: &str, name: impl Into<String>) -> Self {
		Self {
			engine: engine.to_string(),
			name: name.into(),
			user: None,
			password: None,
			host: None,
			port: None,
			dialect: None,
		}
	}

	fn server(
		engine: &str,
		name: impl Into<String>,
		user: impl Into<String>,
		password: impl Into<String>,
		host: impl Into<String>,
		port: u16,
	) -> Self {
		Self {
			user: Some(user.into()),
			password: Some(password.into()),
			host: Some(host.into()),
			port: Some(port),
			..Self::local(engine, name)
		}
	}

	/// Render for `dialect` whatever the engine is
	///
	/// ```
	/// use sqlwhere_conf::DatabaseConfig;
	/// use sqlwhere_query::Dialect;
	///
	/// let db = DatabaseConfig::postgresql("app", "u", "p", "h", 5432).with_dialect(Dialect::Generic);
	/// assert_eq!(db.dialect().unwrap(), Dialect::Generic);
	/// ```
	pub fn with_dialect(mut self, dialect: Dialect) -> Self {
		self.dialect = Some(dialect);
		self
	}

	/// Resolve the SQL dialect
	///
	/// An explicit `dialect` wins; otherwise the engine name is parsed.
	///
	/// # Errors
	///
	/// Unknown engines are rejected with [`ConfError::Dialect`](crate::ConfError::Dialect).
	pub fn dialect(&self) -> Result<Dialect> {
		match self.dialect {
			Some(dialect) => Ok(dialect),
			None => Ok(self.engine.parse::<Dialect>()?),
		}
	}

	/// Parse a single database table from TOML
	///
	/// ```
	/// use sqlwhere_conf::DatabaseConfig;
	///
	/// let db = DatabaseConfig::from_toml_str(r#"
	///     engine = "mysql"
	///     name = "shop"
	///     host = "db.internal"
	/// "#).unwrap();
	/// assert_eq!(db.host.as_deref(), Some("db.internal"));
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self::sqlite("db.sqlite3")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use crate::error::ConfError;
	use rstest::rstest;
	use sqlwhere_query::WhereError;

	#[rstest]
	fn test_settings_db_config_sqlite() {
		let db = DatabaseConfig::sqlite("test.db");
		assert_eq!(db.engine, "sqlite3");
		assert_eq!(db.name, "test.db");
		assert!(db.user.is_none());
		assert_eq!(db, DatabaseConfig::sqlite("test.db"));
	}

	#[rstest]
	fn test_settings_db_config_postgresql() {
		let db = DatabaseConfig::postgresql("testdb", "user", "pass", "localhost", 5432);
		assert_eq!(db.engine, "postgresql");
		assert_eq!(db.name, "testdb");
		assert_eq!(db.user, Some("user".to_string()));
		assert_eq!(db.port, Some(5432));
	}

	#[rstest]
	#[case(DatabaseConfig::sqlite("a.db"), Dialect::Sqlite)]
	#[case(DatabaseConfig::mysql("a", "u", "p", "h", 3306), Dialect::MySql)]
	#[case(DatabaseConfig::postgresql("a", "u", "p", "h", 5432), Dialect::Postgres)]
	#[case(DatabaseConfig::generic("a"), Dialect::Generic)]
	fn test_dialect(#[case] db: DatabaseConfig, #[case] expected: Dialect) {
		assert_eq!(db.dialect().unwrap(), expected);
	}

	#[rstest]
	fn test_dialect_from_dotted_engine() {
		let db = DatabaseConfig {
			engine: "app.db.backends.postgresql".to_string(),
			..DatabaseConfig::default()
		};
		assert_eq!(db.dialect().unwrap(), Dialect::Postgres);
	}

	#[rstest]
	fn test_unknown_engine_is_rejected() {
		let db = DatabaseConfig {
			engine: "oracle".to_string(),
			..DatabaseConfig::default()
		};
		match db.dialect() {
			Err(ConfError::Dialect(WhereError::UnsupportedDialect(engine))) => {
				assert_eq!(engine, "oracle")
			}
			other => panic!("expected an unsupported dialect error, got {:?}", other),
		}
	}

	#[rstest]
	fn test_explicit_dialect_overrides_engine() {
		let db = DatabaseConfig {
			engine: "oracle".to_string(),
			..DatabaseConfig::generic("legacy")
		};
		assert!(db.dialect().is_err());
		assert_eq!(
			db.with_dialect(Dialect::MySql).dialect().unwrap(),
			Dialect::MySql
		);
	}

	#[rstest]
	#[case("sqlite", Dialect::Sqlite)]
	#[case("mysql", Dialect::MySql)]
	#[case("postgres", Dialect::Postgres)]
	#[case("generic", Dialect::Generic)]
	fn test_dialect_from_toml(#[case] name: &str, #[case] expected: Dialect) {
		let db = DatabaseConfig::from_toml_str(&format!(
			"engine = \"custom.backend\"\nname = \"app\"\ndialect = \"{}\"",
			name
		))
		.unwrap();
		assert_eq!(db.dialect, Some(expected));
		assert_eq!(db.dialect().unwrap(), expected);
	}

	#[rstest]
	fn test_dialect_survives_toml_round_trip() {
		let db = DatabaseConfig::mysql("shop", "root", "secret", "db", 3306)
			.with_dialect(Dialect::Postgres);
		let text = toml::to_string(&db).unwrap();

		assert!(text.contains("dialect = \"postgres\""));
		assert_eq!(DatabaseConfig::from_toml_str(&text).unwrap(), db);
	}

	#[rstest]
	fn test_unset_dialect_is_not_serialized() {
		let text = toml::to_string(&DatabaseConfig::sqlite("app.db")).unwrap();
		assert!(!text.contains("dialect"));
	}

	#[rstest]
	fn test_mistyped_dialect_is_a_toml_error() {
		let err = DatabaseConfig::from_toml_str("engine = \"sqlite\"\nname = \"a\"\ndialect = \"oracle\"")
			.unwrap_err();
		assert!(matches!(err, ConfError::Toml(_)));
	}

	#[rstest]
	fn test_from_toml_str_defaults_optional_fields() {
		let db = DatabaseConfig::from_toml_str("engine = \"sqlite\"\nname = \"app.db\"").unwrap();
		assert_eq!(
			db,
			DatabaseConfig {
				engine: "sqlite".to_string(),
				..DatabaseConfig::sqlite("app.db")
			}
		);
	}

	#[rstest]
	fn test_from_toml_str_rejects_missing_name() {
		let err = DatabaseConfig::from_toml_str("engine = \"sqlite\"").unwrap_err();
		assert!(matches!(err, ConfError::Toml(_)));
	}
}
