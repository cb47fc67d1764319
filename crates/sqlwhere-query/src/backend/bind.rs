//! Parameter binding in placeholder order.

use crate::error::Result;
use crate::expr::{Leaf, Node, Where};
use crate::types::Operator;
use crate::value::{Value, Values};

/// Receiver of bound parameter values.
///
/// Values arrive in the order of the `?` placeholders of the rendered SQL.
/// Implement this for a driver's query builder to bind straight into it.
pub trait BindSink {
	/// Append the next positional value.
	fn bind(&mut self, value: Value);
}

impl BindSink for Vec<Value> {
	fn bind(&mut self, value: Value) {
		self.push(value);
	}
}

impl BindSink for Values {
	fn bind(&mut self, value: Value) {
		self.push(value);
	}
}

/// Escape the `LIKE` wildcards `%` and `_` with a backslash.
///
/// Backslashes already present are kept as they are.
///
/// ```rust
/// use sqlwhere_query::escape_like;
///
/// assert_eq!(escape_like("50%_off"), r"50\%\_off");
/// assert_eq!(escape_like("plain"), "plain");
/// ```
pub fn escape_like(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		if c == '%' || c == '_' {
			escaped.push('\\');
		}
		escaped.push(c);
	}
	escaped
}

/// Push the values of `expr` into `sink`, depth first.
pub(crate) fn bind_where<S>(sink: &mut S, expr: &Where) -> Result<()>
where
	S: BindSink + ?Sized,
{
	match &*expr.node {
		Node::Leaf(leaf) => bind_leaf(sink, leaf),
		Node::Combine(combine) => combine
			.children
			.iter()
			.try_for_each(|child| bind_where(sink, child)),
	}
}

fn bind_leaf<S>(sink: &mut S, leaf: &Leaf) -> Result<()>
where
	S: BindSink + ?Sized,
{
	leaf.check_shape()?;
	match leaf.operator {
		Operator::None | Operator::IsNull => {}
		Operator::IsIn => {
			for item in leaf.value.as_list().unwrap_or_default() {
				sink.bind(item.clone());
			}
		}
		Operator::StartsWith
		| Operator::CiStartsWith
		| Operator::EndsWith
		| Operator::CiEndsWith
		| Operator::Contains
		| Operator::CiContains => {
			let text = leaf.value.as_text().unwrap_or_default();
			let escaped = escape_like(&text);
			let pattern = match leaf.operator {
				Operator::StartsWith | Operator::CiStartsWith => format!("{}%", escaped),
				Operator::EndsWith | Operator::CiEndsWith => format!("%{}", escaped),
				_ => format!("%{}%", escaped),
			};
			sink.bind(Value::from(pattern));
		}
		Operator::Equals
		| Operator::CiEquals
		| Operator::NotEquals
		| Operator::CiNotEquals
		| Operator::GreaterThan
		| Operator::LessThan
		| Operator::GreaterOrEqual
		| Operator::LessOrEqual => sink.bind(leaf.value.clone()),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case("", "")]
	#[case("abc", "abc")]
	#[case("%", r"\%")]
	#[case("a_b", r"a\_b")]
	#[case(r"back\slash", r"back\slash")]
	#[case("100%_", r"100\%\_")]
	fn test_escape_like(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_like(input), expected);
	}

	#[rstest]
	#[case(Operator::StartsWith, "50\\%%")]
	#[case(Operator::CiStartsWith, "50\\%%")]
	#[case(Operator::EndsWith, "%50\\%")]
	#[case(Operator::CiEndsWith, "%50\\%")]
	#[case(Operator::Contains, "%50\\%%")]
	#[case(Operator::CiContains, "%50\\%%")]
	fn test_pattern_binding(#[case] op: Operator, #[case] expected: &str) {
		let expr = Where::leaf("x", op, "50%");
		let mut sink = Vec::new();
		bind_where(&mut sink, &expr).unwrap();
		assert_eq!(sink, vec![Value::from(expected)]);
	}

	#[rstest]
	fn test_ci_equality_binds_raw_value() {
		let expr = Where::leaf("x", Operator::CiEquals, "a_b");
		let mut sink = Values::new();
		bind_where(&mut sink, &expr).unwrap();
		assert_eq!(sink.into_inner(), vec![Value::from("a_b")]);
	}

	#[rstest]
	fn test_sentinels_and_is_null_bind_nothing() {
		let mut sink = Vec::new();
		bind_where(&mut sink, &Where::all()).unwrap();
		bind_where(&mut sink, &Where::none()).unwrap();
		bind_where(&mut sink, &Where::leaf("x", Operator::IsNull, false)).unwrap();
		assert!(sink.is_empty());
	}

	#[rstest]
	fn test_is_in_binds_each_element() {
		let expr = Where::leaf("id", Operator::IsIn, vec![3, 1, 2]);
		let mut sink = Vec::new();
		bind_where(&mut sink, &expr).unwrap();
		assert_eq!(sink, vec![Value::from(3), Value::from(1), Value::from(2)]);
	}
}
