//! Comparison operators and logical connectors.

use std::fmt;

/// A comparison applied by a leaf expression to one column.
///
/// The `Ci*` variants are the case-insensitive forms of their siblings.
/// [`Operator::None`] never compares anything: it marks the two constant
/// predicates returned by [`Where::all`](crate::Where::all) and
/// [`Where::none`](crate::Where::none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	/// No comparison (constant predicate)
	None,
	/// `column = value`
	Equals,
	/// `column = value`, ignoring case
	CiEquals,
	/// `column != value`
	NotEquals,
	/// `column != value`, ignoring case
	CiNotEquals,
	/// `column > value`
	GreaterThan,
	/// `column < value`
	LessThan,
	/// `column >= value`
	GreaterOrEqual,
	/// `column <= value`
	LessOrEqual,
	/// Column starts with the given text
	StartsWith,
	/// Column starts with the given text, ignoring case
	CiStartsWith,
	/// Column ends with the given text
	EndsWith,
	/// Column ends with the given text, ignoring case
	CiEndsWith,
	/// Column contains the given text
	Contains,
	/// Column contains the given text, ignoring case
	CiContains,
	/// Column is one of a list of values
	IsIn,
	/// Column is null (`true`) or not null (`false`)
	IsNull,
}

impl Operator {
	/// Returns the operator name used in debug output.
	pub fn name(&self) -> &'static str {
		match self {
			Self::None => "None",
			Self::Equals => "Equals",
			Self::CiEquals => "CiEquals",
			Self::NotEquals => "NotEquals",
			Self::CiNotEquals => "CiNotEquals",
			Self::GreaterThan => "GreaterThan",
			Self::LessThan => "LessThan",
			Self::GreaterOrEqual => "GreaterOrEqual",
			Self::LessOrEqual => "LessOrEqual",
			Self::StartsWith => "StartsWith",
			Self::CiStartsWith => "CiStartsWith",
			Self::EndsWith => "EndsWith",
			Self::CiEndsWith => "CiEndsWith",
			Self::Contains => "Contains",
			Self::CiContains => "CiContains",
			Self::IsIn => "IsIn",
			Self::IsNull => "IsNull",
		}
	}

	/// Returns the operator with the opposite truth value, for operators that
	/// have one.
	///
	/// Negating a leaf through its opposite keeps the SQL short
	/// (`a <= b` instead of `NOT (a > b)`).
	///
	/// ```rust
	/// use sqlwhere_query::Operator;
	///
	/// assert_eq!(Operator::GreaterThan.opposite(), Some(Operator::LessOrEqual));
	/// assert_eq!(Operator::Contains.opposite(), None);
	/// ```
	pub fn opposite(&self) -> Option<Self> {
		match self {
			Self::Equals => Some(Self::NotEquals),
			Self::NotEquals => Some(Self::Equals),
			Self::CiEquals => Some(Self::CiNotEquals),
			Self::CiNotEquals => Some(Self::CiEquals),
			Self::GreaterThan => Some(Self::LessOrEqual),
			Self::LessOrEqual => Some(Self::GreaterThan),
			Self::LessThan => Some(Self::GreaterOrEqual),
			Self::GreaterOrEqual => Some(Self::LessThan),
			Self::None
			| Self::StartsWith
			| Self::CiStartsWith
			| Self::EndsWith
			| Self::CiEndsWith
			| Self::Contains
			| Self::CiContains
			| Self::IsIn
			| Self::IsNull => None,
		}
	}

	/// Returns the SQL symbol of a plain comparison operator.
	pub fn comparison_symbol(&self) -> Option<&'static str> {
		match self {
			Self::Equals => Some("="),
			Self::NotEquals => Some("!="),
			Self::GreaterThan => Some(">"),
			Self::LessThan => Some("<"),
			Self::GreaterOrEqual => Some(">="),
			Self::LessOrEqual => Some("<="),
			_ => None,
		}
	}

	/// Returns `true` for operators rendered with `LIKE`.
	pub fn is_like(&self) -> bool {
		matches!(
			self,
			Self::CiEquals
				| Self::CiNotEquals
				| Self::StartsWith
				| Self::CiStartsWith
				| Self::EndsWith
				| Self::CiEndsWith
				| Self::Contains
				| Self::CiContains
		)
	}

	/// Returns `true` for operators whose bound value is a `LIKE` pattern
	/// built from escaped user text.
	pub fn is_pattern(&self) -> bool {
		matches!(
			self,
			Self::StartsWith
				| Self::CiStartsWith
				| Self::EndsWith
				| Self::CiEndsWith
				| Self::Contains
				| Self::CiContains
		)
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Logical connector joining the children of a combined expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
	/// Every child must hold
	And,
	/// At least one child must hold
	Or,
}

impl Connector {
	/// Separator placed between children in rendered SQL.
	pub fn sql_separator(&self) -> &'static str {
		match self {
			Self::And => " AND ",
			Self::Or => " OR ",
		}
	}

	/// Separator placed between children in debug output.
	pub fn debug_separator(&self) -> &'static str {
		match self {
			Self::And => " && ",
			Self::Or => " || ",
		}
	}
}
