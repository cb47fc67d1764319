//! Target SQL dialects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WhereError};

/// SQL dialect a WHERE clause is rendered for.
///
/// The dialect only changes how `LIKE`-based operators are written:
///
/// | Operator family | SQLite | MySQL | PostgreSQL | Generic |
/// |-----------------|--------|-------|------------|---------|
/// | case-sensitive patterns | `LIKE ? ESCAPE '\'` | `LIKE BINARY ?` | `LIKE ?` | `LIKE ?` |
/// | case-insensitive (`Ci*`) | `LIKE ? ESCAPE '\'` | `LIKE ?` | `UPPER(col::text) LIKE UPPER(?)` | `LIKE ?` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
	Sqlite,
	MySql,
	Postgres,
	Generic,
}

impl Dialect {
	/// Canonical lowercase name.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Sqlite => "sqlite",
			Self::MySql => "mysql",
			Self::Postgres => "postgres",
			Self::Generic => "generic",
		}
	}

	/// Resolve the dialect from a connection URL scheme.
	///
	/// ```rust
	/// use sqlwhere_query::Dialect;
	///
	/// assert_eq!(Dialect::from_url("postgresql://localhost/app").unwrap(), Dialect::Postgres);
	/// assert_eq!(Dialect::from_url("sqlite::memory:").unwrap(), Dialect::Sqlite);
	/// assert_eq!(Dialect::from_url("mysql://root@localhost/app").unwrap(), Dialect::MySql);
	/// assert!(Dialect::from_url("mongodb://localhost").is_err());
	/// ```
	pub fn from_url(url: &str) -> Result<Self> {
		let dialect = if url.starts_with("postgres://") || url.starts_with("postgresql://") {
			Self::Postgres
		} else if url.starts_with("sqlite:") || url.starts_with(":memory:") {
			Self::Sqlite
		} else if url.starts_with("mysql://") || url.starts_with("mariadb://") {
			Self::MySql
		} else {
			tracing::warn!(url = %redact_url(url), "rejecting database URL with unknown scheme");
			return Err(WhereError::UnsupportedDialect(format!(
				"unsupported database URL scheme: {}",
				redact_url(url)
			)));
		};
		Ok(dialect)
	}

	/// Resolve the dialect from a driver name.
	///
	/// Accepts Qt-style plugin names (`QSQLITE`, `QMYSQL`, `QPSQL`, ...) and
	/// the names drivers report for themselves (`"SQLite"`, `"PostgreSQL"`).
	///
	/// ```rust
	/// use sqlwhere_query::Dialect;
	///
	/// assert_eq!(Dialect::from_driver_name("QPSQL").unwrap(), Dialect::Postgres);
	/// assert_eq!(Dialect::from_driver_name("SQLite").unwrap(), Dialect::Sqlite);
	/// assert!(Dialect::from_driver_name("QOCI").is_err());
	/// ```
	pub fn from_driver_name(driver: &str) -> Result<Self> {
		match driver.trim().to_ascii_uppercase().as_str() {
			"QSQLITE" | "QSQLITE2" => Ok(Self::Sqlite),
			"QMYSQL" | "QMYSQL3" | "QMARIADB" => Ok(Self::MySql),
			"QPSQL" | "QPSQL7" => Ok(Self::Postgres),
			_ => driver.parse(),
		}
	}
}

/// Keep only the scheme so credentials never end up in logs or errors.
fn redact_url(url: &str) -> String {
	match url.split_once(':') {
		Some((scheme, _)) => format!("{}:...", scheme),
		None => url.to_string(),
	}
}

impl FromStr for Dialect {
	type Err = WhereError;

	/// Parse a dialect or engine name, case-insensitively.
	///
	/// Dotted engine paths such as `"app.db.backends.postgresql"` resolve
	/// through their last segment.
	fn from_str(s: &str) -> Result<Self> {
		let name = s.rsplit('.').next().unwrap_or(s).trim().to_ascii_lowercase();
		match name.as_str() {
			"sqlite" | "sqlite3" => Ok(Self::Sqlite),
			"mysql" | "mariadb" => Ok(Self::MySql),
			"postgres" | "postgresql" | "psql" | "pg" => Ok(Self::Postgres),
			"generic" | "ansi" => Ok(Self::Generic),
			_ => {
				tracing::warn!(dialect = s, "rejecting unknown dialect name");
				Err(WhereError::UnsupportedDialect(s.to_string()))
			}
		}
	}
}

impl fmt::Display for Dialect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("sqlite", Dialect::Sqlite)]
	#[case("SQLite3", Dialect::Sqlite)]
	#[case("mysql", Dialect::MySql)]
	#[case("MariaDB", Dialect::MySql)]
	#[case("postgresql", Dialect::Postgres)]
	#[case("pg", Dialect::Postgres)]
	#[case("generic", Dialect::Generic)]
	#[case("app.db.backends.postgresql", Dialect::Postgres)]
	#[case("app.db.backends.sqlite3", Dialect::Sqlite)]
	fn test_parse_dialect(#[case] input: &str, #[case] expected: Dialect) {
		assert_eq!(input.parse::<Dialect>().unwrap(), expected);
	}

	#[rstest]
	#[case("oracle")]
	#[case("")]
	#[case("app.db.backends.mssql")]
	fn test_parse_unknown_dialect(#[case] input: &str) {
		let err = input.parse::<Dialect>().unwrap_err();
		assert_eq!(err, WhereError::UnsupportedDialect(input.to_string()));
	}

	#[rstest]
	#[case("postgres://u:p@localhost/db", Dialect::Postgres)]
	#[case("sqlite://app.db", Dialect::Sqlite)]
	#[case(":memory:", Dialect::Sqlite)]
	#[case("mariadb://localhost/db", Dialect::MySql)]
	fn test_from_url(#[case] url: &str, #[case] expected: Dialect) {
		assert_eq!(Dialect::from_url(url).unwrap(), expected);
	}

	#[rstest]
	#[case("QSQLITE", Dialect::Sqlite)]
	#[case("qmysql3", Dialect::MySql)]
	#[case("QMARIADB", Dialect::MySql)]
	#[case("QPSQL7", Dialect::Postgres)]
	#[case("PostgreSQL", Dialect::Postgres)]
	#[case("MySQL", Dialect::MySql)]
	fn test_from_driver_name(#[case] driver: &str, #[case] expected: Dialect) {
		assert_eq!(Dialect::from_driver_name(driver).unwrap(), expected);
	}

	#[rstest]
	fn test_from_driver_name_rejects_unknown_driver() {
		assert_eq!(
			Dialect::from_driver_name("QODBC"),
			Err(WhereError::UnsupportedDialect("QODBC".to_string()))
		);
	}

	#[rstest]
	fn test_from_url_hides_credentials() {
		let err = Dialect::from_url("oracle://scott:tiger@db").unwrap_err();
		let message = err.to_string();
		assert!(message.contains("oracle:"));
		assert!(!message.contains("tiger"));
	}

	#[rstest]
	fn test_display_round_trips_through_parse() {
		for dialect in [
			Dialect::Sqlite,
			Dialect::MySql,
			Dialect::Postgres,
			Dialect::Generic,
		] {
			assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
		}
	}
}
