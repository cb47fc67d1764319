use sqlwhere_query::WhereError;

/// Error type for database settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Dialect error: {0}")]
	Dialect(#[from] WhereError),

	#[error("Unknown database alias: {0}")]
	UnknownDatabase(String),
}

/// Result type for database settings
pub type Result<T> = std::result::Result<T, ConfError>;
