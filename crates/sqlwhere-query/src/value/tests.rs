//! Tests for the value module.

use super::{IntoValue, Value, Values};

mod value_tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	fn test_value_is_null() {
		assert!(Value::Int(None).is_null());
		assert!(Value::String(None).is_null());
		assert!(Value::List(None).is_null());

		assert!(!Value::Int(Some(42)).is_null());
		assert!(!Value::from("hello").is_null());
		assert!(!Value::from(vec![1]).is_null());
	}

	#[rstest]
	fn test_value_default() {
		let default = Value::default();
		assert_eq!(default, Value::String(None));
		assert!(default.is_null());
	}

	#[rstest]
	#[case::string(Value::from("abc"), Some("abc"))]
	#[case::char(Value::from('x'), Some("x"))]
	#[case::null_string(Value::String(None), None)]
	#[case::integer(Value::from(5), None)]
	#[case::list(Value::from(vec!["a"]), None)]
	fn test_value_as_text(#[case] value: Value, #[case] expected: Option<&str>) {
		assert_eq!(value.as_text().as_deref(), expected);
	}

	#[rstest]
	fn test_value_as_bool() {
		assert_eq!(Value::from(true).as_bool(), Some(true));
		assert_eq!(Value::Bool(None).as_bool(), None);
		assert_eq!(Value::from(1).as_bool(), None);
	}

	#[rstest]
	fn test_value_as_list() {
		let list = Value::from([1, 2, 3]);
		assert!(list.is_list());
		assert_eq!(
			list.as_list(),
			Some(&[Value::Int(Some(1)), Value::Int(Some(2)), Value::Int(Some(3))][..])
		);
		assert!(Value::List(None).is_list());
		assert_eq!(Value::List(None).as_list(), None);
	}

	#[rstest]
	#[case::int(Value::from(18), "18")]
	#[case::string(Value::from("alice"), "alice")]
	#[case::null(Value::Double(None), "NULL")]
	#[case::bool(Value::from(false), "false")]
	#[case::list(Value::from(vec![1, 2]), "[1, 2]")]
	#[case::bytes(Value::bytes(vec![0xde, 0xad]), "0xdead")]
	fn test_value_display(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	#[case::int(Value::from(42i64), "42")]
	#[case::bool(Value::from(true), "TRUE")]
	#[case::quote(Value::from("it's"), "'it''s'")]
	#[case::char(Value::from('a'), "'a'")]
	#[case::bytes(Value::bytes(vec![0x01, 0xff]), "X'01FF'")]
	#[case::null(Value::Bool(None), "NULL")]
	#[case::list(Value::from(vec!["a", "b"]), "('a', 'b')")]
	fn test_value_to_sql_literal(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.to_sql_literal(), expected);
	}

	#[rstest]
	fn test_value_type_name() {
		assert_eq!(Value::from(1u8).type_name(), "unsigned integer");
		assert_eq!(Value::from(1.5).type_name(), "float");
		assert_eq!(Value::from(vec![1]).type_name(), "list");
	}
}

mod into_value_tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case::i8(42i8, Value::TinyInt(Some(42)))]
	#[case::i16(42i16, Value::SmallInt(Some(42)))]
	#[case::i32(42i32, Value::Int(Some(42)))]
	#[case::i64(42i64, Value::BigInt(Some(42)))]
	#[case::u64(42u64, Value::BigUnsigned(Some(42)))]
	fn test_int_into_value(#[case] input: impl IntoValue, #[case] expected: Value) {
		assert_eq!(input.into_value(), expected);
	}

	#[rstest]
	fn test_option_into_value() {
		assert_eq!(Some(true).into_value(), Value::Bool(Some(true)));
		assert_eq!(Option::<i32>::None.into_value(), Value::Int(None));
		assert_eq!(Option::<String>::None.into_value(), Value::String(None));
		assert_eq!(Option::<&str>::None.into_value(), Value::String(None));
	}

	#[rstest]
	fn test_string_into_value() {
		let owned = "hello".to_string();
		assert_eq!(
			(&owned).into_value(),
			Value::String(Some(Box::new("hello".to_string())))
		);
		assert_eq!(owned.into_value(), Value::from("hello"));
	}

	#[rstest]
	fn test_vec_into_list() {
		let list = vec!["a", "b"].into_value();
		assert_eq!(
			list,
			Value::List(Some(Box::new(vec![Value::from("a"), Value::from("b")])))
		);
	}

	#[rstest]
	fn test_value_into_value_is_identity() {
		let value = Value::from(7);
		assert_eq!(value.clone().into_value(), value);
	}
}

mod values_tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	fn test_values_push_and_iterate() {
		let mut values = Values::new();
		assert!(values.is_empty());

		values.push(Value::from(1));
		values.push(Value::from("two"));

		assert_eq!(values.len(), 2);
		let collected: Vec<&Value> = values.iter().collect();
		assert_eq!(collected, vec![&Value::from(1), &Value::from("two")]);
		assert_eq!(values.into_inner(), vec![Value::from(1), Value::from("two")]);
	}
}
