//! Value types for bound parameters.
//!
//! - [`Value`]: a single dynamically typed value
//! - [`IntoValue`]: conversion from Rust types
//! - [`Values`]: the ordered parameters produced for one WHERE clause

mod core;

pub use self::core::Value;

/// Conversion into a [`Value`].
///
/// Implemented for Rust scalars, their `Option` forms (typed NULL), strings,
/// and for `Vec<T>` / `[T; N]` which become [`Value::List`].
pub trait IntoValue {
	/// Convert into a Value.
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

macro_rules! impl_into_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::$variant(Some(self))
				}
			}

			impl IntoValue for Option<$ty> {
				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}

			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					v.into_value()
				}
			}

			impl From<Option<$ty>> for Value {
				fn from(v: Option<$ty>) -> Self {
					v.into_value()
				}
			}
		)*
	};
}

impl_into_value! {
	bool => Bool,
	i8 => TinyInt,
	i16 => SmallInt,
	i32 => Int,
	i64 => BigInt,
	u8 => TinyUnsigned,
	u16 => SmallUnsigned,
	u32 => Unsigned,
	u64 => BigUnsigned,
	f32 => Float,
	f64 => Double,
	char => Char,
}

macro_rules! impl_into_boxed_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::$variant(Some(Box::new(self)))
				}
			}

			impl IntoValue for Option<$ty> {
				fn into_value(self) -> Value {
					Value::$variant(self.map(Box::new))
				}
			}

			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					v.into_value()
				}
			}

			impl From<Option<$ty>> for Value {
				fn from(v: Option<$ty>) -> Self {
					v.into_value()
				}
			}
		)*
	};
}

impl_into_boxed_value! {
	String => String,
}

#[cfg(feature = "with-chrono")]
impl_into_boxed_value! {
	chrono::NaiveDate => ChronoDate,
	chrono::NaiveDateTime => ChronoDateTime,
	chrono::DateTime<chrono::Utc> => ChronoDateTimeUtc,
}

#[cfg(feature = "with-uuid")]
impl_into_boxed_value! {
	uuid::Uuid => Uuid,
}

#[cfg(feature = "with-json")]
impl_into_boxed_value! {
	serde_json::Value => Json,
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.to_string())))
	}
}

impl IntoValue for Option<&str> {
	fn into_value(self) -> Value {
		Value::String(self.map(|s| Box::new(s.to_string())))
	}
}

impl IntoValue for &String {
	fn into_value(self) -> Value {
		self.as_str().into_value()
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		v.into_value()
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		v.into_value()
	}
}

impl<T: IntoValue> IntoValue for Vec<T> {
	fn into_value(self) -> Value {
		Value::List(Some(Box::new(
			self.into_iter().map(IntoValue::into_value).collect(),
		)))
	}
}

impl<T: IntoValue, const N: usize> IntoValue for [T; N] {
	fn into_value(self) -> Value {
		Value::List(Some(Box::new(
			self.into_iter().map(IntoValue::into_value).collect(),
		)))
	}
}

impl<T: IntoValue> From<Vec<T>> for Value {
	fn from(v: Vec<T>) -> Self {
		v.into_value()
	}
}

impl<T: IntoValue, const N: usize> From<[T; N]> for Value {
	fn from(v: [T; N]) -> Self {
		v.into_value()
	}
}

/// Ordered collection of bound parameter values.
///
/// The n-th value corresponds to the n-th `?` placeholder of the rendered
/// SQL, counted left to right.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Values(pub Vec<Value>);

impl Values {
	/// Create an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a value.
	pub fn push(&mut self, value: Value) {
		self.0.push(value);
	}

	/// Number of values.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no value has been collected.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the values in binding order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}

	/// Borrow the values as a slice.
	pub fn as_slice(&self) -> &[Value] {
		&self.0
	}

	/// Unwrap into the inner vector.
	pub fn into_inner(self) -> Vec<Value> {
		self.0
	}
}

impl From<Vec<Value>> for Values {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Values {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests;
