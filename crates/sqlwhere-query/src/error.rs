use thiserror::Error;

use crate::types::Operator;

/// Errors raised while rendering or binding a [`Where`](crate::Where) expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhereError {
	/// The value carried by a leaf does not have the shape its operator needs
	#[error("Invalid predicate on column '{column}' ({operator}): {reason}")]
	InvalidPredicate {
		column: String,
		operator: Operator,
		reason: String,
	},

	/// A dialect name, engine or URL that does not map to a supported database
	#[error("Unsupported dialect: {0}")]
	UnsupportedDialect(String),
}

impl WhereError {
	pub(crate) fn invalid(
		column: impl Into<String>,
		operator: Operator,
		reason: impl Into<String>,
	) -> Self {
		Self::InvalidPredicate {
			column: column.into(),
			operator,
			reason: reason.into(),
		}
	}
}

/// Result type for predicate rendering and binding
pub type Result<T> = std::result::Result<T, WhereError>;
