//! Dialect-aware rendering of [`Where`] trees into SQL text.

use super::sql_writer::SqlWriter;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::expr::{Leaf, Node, Where};
use crate::types::Operator;

/// Render `expr` into `writer`, depth first.
pub(crate) fn write_where(writer: &mut SqlWriter, expr: &Where, dialect: Dialect) -> Result<()> {
	match &*expr.node {
		Node::Leaf(leaf) => write_leaf(writer, leaf, dialect),
		Node::Combine(combine) => {
			if combine.negate {
				writer.push("NOT (");
			}
			writer.push_list(
				&combine.children,
				combine.connector.sql_separator(),
				|w, child| {
					if child.is_leaf() {
						write_where(w, child, dialect)
					} else {
						w.push("(");
						write_where(w, child, dialect)?;
						w.push(")");
						Ok(())
					}
				},
			)?;
			if combine.negate {
				writer.push(")");
			}
			Ok(())
		}
	}
}

fn write_leaf(writer: &mut SqlWriter, leaf: &Leaf, dialect: Dialect) -> Result<()> {
	leaf.check_shape()?;
	match leaf.operator {
		Operator::None => {
			if leaf.negate {
				writer.push("1 = 0");
			}
		}
		Operator::Equals
		| Operator::NotEquals
		| Operator::GreaterThan
		| Operator::LessThan
		| Operator::GreaterOrEqual
		| Operator::LessOrEqual => {
			writer.push(&leaf.column);
			if let Some(symbol) = leaf.operator.comparison_symbol() {
				writer.push_keyword(symbol);
			}
			writer.push_space();
			writer.push_placeholder();
		}
		Operator::IsIn => {
			let count = leaf.value.as_list().map_or(0, <[_]>::len);
			// `IN ()` is not portable; an empty list matches no row
			if count == 0 {
				writer.push(if leaf.negate { "1 = 1" } else { "1 = 0" });
				return Ok(());
			}
			writer.push(&leaf.column);
			writer.push_keyword(if leaf.negate { "NOT IN" } else { "IN" });
			writer.push(" (");
			writer.push_list(0..count, ", ", |w, _| -> Result<()> {
				w.push_placeholder();
				Ok(())
			})?;
			writer.push(")");
		}
		Operator::IsNull => {
			writer.push(&leaf.column);
			let is_null = leaf.value.as_bool().unwrap_or(true);
			writer.push_keyword(if is_null { "IS NULL" } else { "IS NOT NULL" });
		}
		Operator::StartsWith | Operator::EndsWith | Operator::Contains => {
			let keyword = match (dialect, leaf.negate) {
				(Dialect::MySql, false) => "LIKE BINARY",
				(Dialect::MySql, true) => "NOT LIKE BINARY",
				(Dialect::Sqlite | Dialect::Postgres | Dialect::Generic, false) => "LIKE",
				(Dialect::Sqlite | Dialect::Postgres | Dialect::Generic, true) => "NOT LIKE",
			};
			write_like(writer, &leaf.column, keyword, dialect, false);
		}
		Operator::CiEquals
		| Operator::CiStartsWith
		| Operator::CiEndsWith
		| Operator::CiContains => {
			let keyword = if leaf.negate { "NOT LIKE" } else { "LIKE" };
			write_like(writer, &leaf.column, keyword, dialect, true);
		}
		Operator::CiNotEquals => {
			let keyword = if leaf.negate { "LIKE" } else { "NOT LIKE" };
			write_like(writer, &leaf.column, keyword, dialect, true);
		}
	}
	Ok(())
}

fn write_like(
	writer: &mut SqlWriter,
	column: &str,
	keyword: &str,
	dialect: Dialect,
	case_insensitive: bool,
) {
	match dialect {
		Dialect::Postgres if case_insensitive => {
			writer.push("UPPER(");
			writer.push(column);
			writer.push("::text)");
			writer.push_keyword(keyword);
			writer.push(" UPPER(");
			writer.push_placeholder();
			writer.push(")");
		}
		Dialect::Sqlite => {
			writer.push(column);
			writer.push_keyword(keyword);
			writer.push_space();
			writer.push_placeholder();
			writer.push(" ESCAPE '\\'");
		}
		Dialect::MySql | Dialect::Postgres | Dialect::Generic => {
			writer.push(column);
			writer.push_keyword(keyword);
			writer.push_space();
			writer.push_placeholder();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn render(expr: &Where, dialect: Dialect) -> (String, usize) {
		let mut writer = SqlWriter::new();
		write_where(&mut writer, expr, dialect).unwrap();
		writer.finish()
	}

	#[rstest]
	#[case(Operator::Equals, "x = ?")]
	#[case(Operator::NotEquals, "x != ?")]
	#[case(Operator::GreaterThan, "x > ?")]
	#[case(Operator::LessThan, "x < ?")]
	#[case(Operator::GreaterOrEqual, "x >= ?")]
	#[case(Operator::LessOrEqual, "x <= ?")]
	fn test_comparison(#[case] op: Operator, #[case] expected: &str) {
		let expr = Where::leaf("x", op, 1);
		for dialect in [Dialect::Sqlite, Dialect::MySql, Dialect::Postgres, Dialect::Generic] {
			assert_eq!(render(&expr, dialect), (expected.to_string(), 1));
		}
	}

	#[rstest]
	#[case(Dialect::Sqlite, r"x LIKE ? ESCAPE '\'")]
	#[case(Dialect::MySql, "x LIKE BINARY ?")]
	#[case(Dialect::Postgres, "x LIKE ?")]
	#[case(Dialect::Generic, "x LIKE ?")]
	fn test_case_sensitive_pattern(#[case] dialect: Dialect, #[case] expected: &str) {
		let expr = Where::leaf("x", Operator::Contains, "a");
		assert_eq!(render(&expr, dialect).0, expected);
	}

	#[rstest]
	#[case(Dialect::Sqlite, r"x LIKE ? ESCAPE '\'")]
	#[case(Dialect::MySql, "x LIKE ?")]
	#[case(Dialect::Postgres, "UPPER(x::text) LIKE UPPER(?)")]
	#[case(Dialect::Generic, "x LIKE ?")]
	fn test_case_insensitive_pattern(#[case] dialect: Dialect, #[case] expected: &str) {
		let expr = Where::leaf("x", Operator::CiEndsWith, "a");
		assert_eq!(render(&expr, dialect).0, expected);
	}

	#[rstest]
	fn test_none_sentinel_and_all_sentinel() {
		assert_eq!(render(&Where::none(), Dialect::Generic), ("1 = 0".to_string(), 0));
		assert_eq!(render(&Where::all(), Dialect::Generic), (String::new(), 0));
	}

	#[rstest]
	fn test_empty_is_in_renders_constant() {
		let expr = Where::leaf("x", Operator::IsIn, Vec::<i32>::new());
		for dialect in [Dialect::Sqlite, Dialect::MySql, Dialect::Postgres, Dialect::Generic] {
			assert_eq!(render(&expr, dialect), ("1 = 0".to_string(), 0));
			assert_eq!(render(&expr.not(), dialect), ("1 = 1".to_string(), 0));
		}
	}

	#[rstest]
	fn test_invalid_shape_is_reported() {
		let expr = Where::leaf("x", Operator::IsIn, 3);
		let mut writer = SqlWriter::new();
		assert!(write_where(&mut writer, &expr, Dialect::Sqlite).is_err());
	}
}
