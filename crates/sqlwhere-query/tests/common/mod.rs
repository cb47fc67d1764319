//! Shared strategies for the integration tests

use proptest::prelude::*;

use sqlwhere_query::prelude::*;

fn column() -> impl Strategy<Value = &'static str> {
	prop::sample::select(vec!["id", "name", "age"])
}

/// Any well-formed leaf, including the two constant predicates
pub fn arb_leaf() -> impl Strategy<Value = Where> {
	let comparison = prop::sample::select(vec![
		Operator::Equals,
		Operator::NotEquals,
		Operator::GreaterThan,
		Operator::LessThan,
		Operator::GreaterOrEqual,
		Operator::LessOrEqual,
	]);
	let text = prop::sample::select(vec![
		Operator::CiEquals,
		Operator::CiNotEquals,
		Operator::StartsWith,
		Operator::CiStartsWith,
		Operator::EndsWith,
		Operator::CiEndsWith,
		Operator::Contains,
		Operator::CiContains,
	]);

	prop_oneof![
		(column(), comparison, any::<i32>()).prop_map(|(c, op, v)| Where::leaf(c, op, v)),
		(column(), text, "[a-z%_]{0,8}").prop_map(|(c, op, v)| Where::leaf(c, op, v)),
		(column(), prop::collection::vec(any::<i64>(), 0..5))
			.prop_map(|(c, v)| Where::leaf(c, Operator::IsIn, v)),
		(column(), any::<bool>()).prop_map(|(c, v)| Where::leaf(c, Operator::IsNull, v)),
		Just(Where::all()),
		Just(Where::none()),
	]
}

/// Trees of up to four levels built with `and`, `or` and `not`
pub fn arb_where() -> impl Strategy<Value = Where> {
	arb_leaf().prop_recursive(4, 32, 4, |inner| {
		prop_oneof![
			(inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(&b)),
			(inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(&b)),
			inner.prop_map(|w| w.not()),
		]
	})
}
