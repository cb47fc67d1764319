//! Named database configurations.

use serde::{Deserialize, Serialize};
use sqlwhere_query::Dialect;
use std::collections::BTreeMap;
use std::path::Path;

use crate::database_config::DatabaseConfig;
use crate::error::{ConfError, Result};

/// Alias used when no database is named explicitly
pub const DEFAULT_DB_ALIAS: &str = "default";

/// Database configurations keyed by alias
///
/// Loaded from a TOML document with one `[databases.<alias>]` table per
/// database:
///
/// ```
/// use sqlwhere_conf::DatabaseSettings;
/// use sqlwhere_query::Dialect;
///
/// let settings = DatabaseSettings::from_toml_str(r#"
///     [databases.default]
///     engine = "postgresql"
///     name = "app"
///
///     [databases.cache]
///     engine = "sqlite3"
///     name = ":memory:"
/// "#).unwrap();
///
/// assert_eq!(settings.default_dialect().unwrap(), Dialect::Postgres);
/// assert_eq!(settings.dialect_for("cache").unwrap(), Dialect::Sqlite);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
	#[serde(default)]
	pub databases: BTreeMap<String, DatabaseConfig>,
}

impl DatabaseSettings {
	/// Parse settings from a TOML string
	///
	/// Every configured engine must resolve to a dialect.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let settings: Self = toml::from_str(content)?;
		for (alias, db) in &settings.databases {
			let dialect = db.dialect()?;
			tracing::debug!(alias = %alias, engine = %db.engine, %dialect, "loaded database settings");
		}
		Ok(settings)
	}

	/// Read and parse settings from a TOML file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let content = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&content)
	}

	/// Register a database under `alias`, replacing any previous entry
	pub fn insert(&mut self, alias: impl Into<String>, config: DatabaseConfig) {
		self.databases.insert(alias.into(), config);
	}

	/// Look up a database by alias
	pub fn get(&self, alias: &str) -> Result<&DatabaseConfig> {
		self.databases
			.get(alias)
			.ok_or_else(|| ConfError::UnknownDatabase(alias.to_string()))
	}

	/// Dialect of the database registered under `alias`
	pub fn dialect_for(&self, alias: &str) -> Result<Dialect> {
		self.get(alias)?.dialect()
	}

	/// Dialect of the `default` database
	pub fn default_dialect(&self) -> Result<Dialect> {
		self.dialect_for(DEFAULT_DB_ALIAS)
	}
}
