//! SQL generation and parameter binding.
//!
//! Rendering and binding walk the tree in the same depth-first order, so the
//! n-th bound value always belongs to the n-th `?` of the rendered SQL.
//! Rendering depends on the [`Dialect`]; binding does not.

mod bind;
mod render;
mod sql_writer;

pub use bind::{BindSink, escape_like};

use sql_writer::SqlWriter;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::expr::Where;
use crate::value::Values;

impl Where {
	/// Render the predicate as SQL for `dialect`, with `?` placeholders.
	///
	/// [`Where::all`] renders as an empty string and [`Where::none`] as
	/// `1 = 0`.
	///
	/// # Errors
	///
	/// Returns [`WhereError::InvalidPredicate`](crate::WhereError::InvalidPredicate)
	/// when a leaf carries a value its operator cannot use.
	pub fn render(&self, dialect: Dialect) -> Result<String> {
		let mut writer = SqlWriter::new();
		render::write_where(&mut writer, self, dialect)?;
		let (sql, placeholders) = writer.finish();
		tracing::trace!(%dialect, placeholders, sql = %sql, "rendered where clause");
		Ok(sql)
	}

	/// Collect the values to bind, in placeholder order.
	///
	/// # Errors
	///
	/// Fails on the same malformed leaves as [`render`](Self::render).
	pub fn bind_values(&self) -> Result<Values> {
		let mut values = Values::new();
		self.bind_into(&mut values)?;
		Ok(values)
	}

	/// Push the values to bind into `sink`, in placeholder order.
	///
	/// Nothing is pushed when the tree holds a malformed leaf.
	pub fn bind_into<S>(&self, sink: &mut S) -> Result<()>
	where
		S: BindSink + ?Sized,
	{
		let mut values = Vec::new();
		bind::bind_where(&mut values, self)?;
		tracing::trace!(count = values.len(), "bound where clause values");
		for value in values {
			sink.bind(value);
		}
		Ok(())
	}

	/// Render and bind in one call.
	///
	/// ```rust
	/// use sqlwhere_query::{Dialect, Operator, Value, Where};
	///
	/// let cond = Where::leaf("id", Operator::IsIn, vec![1, 2]);
	/// let compiled = cond.compile(Dialect::Postgres).unwrap();
	///
	/// assert_eq!(compiled.to_clause(), " WHERE id IN (?, ?)");
	/// assert_eq!(compiled.values.as_slice(), &[Value::from(1), Value::from(2)]);
	/// ```
	pub fn compile(&self, dialect: Dialect) -> Result<CompiledWhere> {
		let mut writer = SqlWriter::new();
		render::write_where(&mut writer, self, dialect)?;
		let values = self.bind_values()?;
		let (sql, placeholders) = writer.finish();
		debug_assert_eq!(
			placeholders,
			values.len(),
			"placeholder count must match bound values"
		);
		tracing::debug!(%dialect, sql = %sql, values = values.len(), "compiled where clause");
		Ok(CompiledWhere { sql, values })
	}
}

/// A rendered WHERE condition together with its bound values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledWhere {
	/// Condition text with `?` placeholders (empty for a predicate that
	/// constrains nothing)
	pub sql: String,
	/// Values for the placeholders, left to right
	pub values: Values,
}

impl CompiledWhere {
	/// Returns `true` if the condition constrains nothing.
	pub fn is_empty(&self) -> bool {
		self.sql.is_empty()
	}

	/// The condition as a clause to append to a statement: `" WHERE <sql>"`,
	/// or an empty string when there is nothing to filter on.
	pub fn to_clause(&self) -> String {
		if self.sql.is_empty() {
			String::new()
		} else {
			format!(" WHERE {}", self.sql)
		}
	}

	/// The condition with every placeholder replaced by its value as a SQL
	/// literal.
	///
	/// Meant for logs only. Never execute the result.
	pub fn to_debug_sql(&self) -> String {
		let mut out = String::with_capacity(self.sql.len());
		let mut values = self.values.iter().peekable();
		for c in self.sql.chars() {
			match values.next_if(|_| c == '?') {
				Some(value) => out.push_str(&value.to_sql_literal()),
				None => out.push(c),
			}
		}
		out
	}
}
