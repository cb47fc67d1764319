//! Core Value enum definition.

use std::borrow::Cow;
use std::fmt;

/// A dynamically typed value carried by a leaf expression and handed to the
/// database driver as a bound parameter.
///
/// Scalar variants wrap an `Option` so that a typed SQL `NULL` can be bound.
/// [`Value::List`] only appears as the payload of an `IsIn` leaf; it is
/// expanded into one bound parameter per element and never bound itself.
///
/// ## Example
///
/// ```rust
/// use sqlwhere_query::Value;
///
/// let int_val = Value::Int(Some(42));
/// let null_int = Value::Int(None);
/// let text = Value::from("hello");
/// let list = Value::from(vec![1, 2, 3]);
///
/// assert!(null_int.is_null());
/// assert_eq!(text.as_text().as_deref(), Some("hello"));
/// assert_eq!(list.as_list().map(<[Value]>::len), Some(3));
/// # let _ = int_val;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Boolean value
	Bool(Option<bool>),
	/// 8-bit signed integer
	TinyInt(Option<i8>),
	/// 16-bit signed integer
	SmallInt(Option<i16>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 8-bit unsigned integer
	TinyUnsigned(Option<u8>),
	/// 16-bit unsigned integer
	SmallUnsigned(Option<u16>),
	/// 32-bit unsigned integer
	Unsigned(Option<u32>),
	/// 64-bit unsigned integer
	BigUnsigned(Option<u64>),
	/// 32-bit floating point
	Float(Option<f32>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// Single character
	Char(Option<char>),
	/// String value (boxed)
	String(Option<Box<String>>),
	/// Binary data (boxed)
	Bytes(Option<Box<Vec<u8>>>),

	/// Chrono NaiveDate
	#[cfg(feature = "with-chrono")]
	ChronoDate(Option<Box<chrono::NaiveDate>>),
	/// Chrono NaiveDateTime
	#[cfg(feature = "with-chrono")]
	ChronoDateTime(Option<Box<chrono::NaiveDateTime>>),
	/// Chrono DateTime with UTC timezone
	#[cfg(feature = "with-chrono")]
	ChronoDateTimeUtc(Option<Box<chrono::DateTime<chrono::Utc>>>),

	/// UUID value
	#[cfg(feature = "with-uuid")]
	Uuid(Option<Box<uuid::Uuid>>),

	/// JSON value
	#[cfg(feature = "with-json")]
	Json(Option<Box<serde_json::Value>>),

	/// Ordered list of values, the payload of an `IsIn` comparison
	List(Option<Box<Vec<Value>>>),
}

impl Value {
	/// Builds a binary value.
	pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
		Self::Bytes(Some(Box::new(data.into())))
	}

	/// Returns `true` if this value is null.
	///
	/// ```rust
	/// use sqlwhere_query::Value;
	///
	/// assert!(Value::Int(None).is_null());
	/// assert!(!Value::Int(Some(42)).is_null());
	/// ```
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::TinyInt(v) => v.is_none(),
			Self::SmallInt(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::TinyUnsigned(v) => v.is_none(),
			Self::SmallUnsigned(v) => v.is_none(),
			Self::Unsigned(v) => v.is_none(),
			Self::BigUnsigned(v) => v.is_none(),
			Self::Float(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::Char(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			Self::Bytes(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(v) => v.is_none(),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(v) => v.is_none(),
			#[cfg(feature = "with-json")]
			Self::Json(v) => v.is_none(),
			Self::List(v) => v.is_none(),
		}
	}

	/// Returns `true` for the list variant, null or not.
	pub fn is_list(&self) -> bool {
		matches!(self, Self::List(_))
	}

	/// Returns the elements of a non-null list.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(Some(items)) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Returns the payload of a non-null boolean.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(Some(b)) => Some(*b),
			_ => None,
		}
	}

	/// Returns the text of a non-null string or character.
	///
	/// Pattern operators (`StartsWith`, `Contains`, ...) only accept values for
	/// which this returns `Some`.
	pub fn as_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::String(Some(s)) => Some(Cow::Borrowed(s.as_str())),
			Self::Char(Some(c)) => Some(Cow::Owned(c.to_string())),
			_ => None,
		}
	}

	/// Short type name used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::TinyInt(_) | Self::SmallInt(_) | Self::Int(_) | Self::BigInt(_) => "integer",
			Self::TinyUnsigned(_)
			| Self::SmallUnsigned(_)
			| Self::Unsigned(_)
			| Self::BigUnsigned(_) => "unsigned integer",
			Self::Float(_) | Self::Double(_) => "float",
			Self::Char(_) => "char",
			Self::String(_) => "string",
			Self::Bytes(_) => "bytes",
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(_) => "date",
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(_) | Self::ChronoDateTimeUtc(_) => "datetime",
			#[cfg(feature = "with-uuid")]
			Self::Uuid(_) => "uuid",
			#[cfg(feature = "with-json")]
			Self::Json(_) => "json",
			Self::List(_) => "list",
		}
	}

	/// Convert this value to a SQL literal string.
	///
	/// Only meant for logging and debugging: generated WHERE clauses always
	/// bind values through placeholders.
	///
	/// ```rust
	/// use sqlwhere_query::Value;
	///
	/// assert_eq!(Value::Int(Some(42)).to_sql_literal(), "42");
	/// assert_eq!(Value::Int(None).to_sql_literal(), "NULL");
	/// assert_eq!(Value::from("it's").to_sql_literal(), "'it''s'");
	/// assert_eq!(Value::from(vec![1, 2]).to_sql_literal(), "(1, 2)");
	/// ```
	#[must_use]
	pub fn to_sql_literal(&self) -> String {
		if self.is_null() {
			return "NULL".to_string();
		}
		match self {
			Self::Bool(Some(v)) => (if *v { "TRUE" } else { "FALSE" }).to_string(),
			Self::Char(Some(v)) => quote_literal(&v.to_string()),
			Self::String(Some(v)) => quote_literal(v),
			Self::Bytes(Some(v)) => {
				let hex: String = v.iter().map(|b| format!("{:02X}", b)).collect();
				format!("X'{}'", hex)
			}
			#[cfg(feature = "with-json")]
			Self::Json(Some(v)) => quote_literal(&v.to_string()),
			Self::List(Some(items)) => {
				let items: Vec<String> = items.iter().map(Value::to_sql_literal).collect();
				format!("({})", items.join(", "))
			}
			// Numbers, dates and uuids share their display form
			other => match other.to_string() {
				s if other.is_numeric() => s,
				s => quote_literal(&s),
			},
		}
	}

	fn is_numeric(&self) -> bool {
		matches!(
			self,
			Self::TinyInt(_)
				| Self::SmallInt(_)
				| Self::Int(_)
				| Self::BigInt(_)
				| Self::TinyUnsigned(_)
				| Self::SmallUnsigned(_)
				| Self::Unsigned(_)
				| Self::BigUnsigned(_)
				| Self::Float(_)
				| Self::Double(_)
		)
	}
}

fn quote_literal(s: &str) -> String {
	format!("'{}'", s.replace('\'', "''"))
}

fn fmt_opt<T: fmt::Display>(f: &mut fmt::Formatter<'_>, v: &Option<T>) -> fmt::Result {
	match v {
		Some(v) => write!(f, "{}", v),
		None => f.write_str("NULL"),
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(v) => fmt_opt(f, v),
			Self::TinyInt(v) => fmt_opt(f, v),
			Self::SmallInt(v) => fmt_opt(f, v),
			Self::Int(v) => fmt_opt(f, v),
			Self::BigInt(v) => fmt_opt(f, v),
			Self::TinyUnsigned(v) => fmt_opt(f, v),
			Self::SmallUnsigned(v) => fmt_opt(f, v),
			Self::Unsigned(v) => fmt_opt(f, v),
			Self::BigUnsigned(v) => fmt_opt(f, v),
			Self::Float(v) => fmt_opt(f, v),
			Self::Double(v) => fmt_opt(f, v),
			Self::Char(v) => fmt_opt(f, v),
			Self::String(v) => fmt_opt(f, v),
			Self::Bytes(Some(v)) => {
				f.write_str("0x")?;
				v.iter().try_for_each(|b| write!(f, "{:02x}", b))
			}
			Self::Bytes(None) => f.write_str("NULL"),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(v) => fmt_opt(f, v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(v) => fmt_opt(f, v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(v) => fmt_opt(f, v),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(v) => fmt_opt(f, v),
			#[cfg(feature = "with-json")]
			Self::Json(v) => fmt_opt(f, v),
			Self::List(Some(items)) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", item)?;
				}
				f.write_str("]")
			}
			Self::List(None) => f.write_str("NULL"),
		}
	}
}

impl Default for Value {
	/// Returns the default value, which is a null string.
	fn default() -> Self {
		Self::String(None)
	}
}
