//! SQL Writer helper for constructing WHERE clause text
//!
//! This module provides the `SqlWriter` type which builds the rendered SQL
//! while counting the `?` placeholders it emits.

/// SQL Writer for constructing WHERE clause text
///
/// Every placeholder goes through [`SqlWriter::push_placeholder`] so the
/// count can be checked against the number of bound values.
#[derive(Debug, Clone, Default)]
pub(crate) struct SqlWriter {
	/// The SQL string being constructed
	sql: String,
	/// Number of `?` placeholders written so far
	placeholders: usize,
}

impl SqlWriter {
	/// Create a new SQL writer
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Push a string to SQL
	pub(crate) fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Push a space to SQL
	pub(crate) fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') {
			self.sql.push(' ');
		}
	}

	/// Push a keyword (with automatic spacing)
	pub(crate) fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Push a `?` placeholder
	pub(crate) fn push_placeholder(&mut self) {
		self.sql.push('?');
		self.placeholders += 1;
	}

	/// Push a list of items with a separator
	///
	/// The callback may fail; the first error stops the list.
	pub(crate) fn push_list<I, T, E, F>(&mut self, items: I, separator: &str, mut f: F) -> Result<(), E>
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T) -> Result<(), E>,
	{
		let mut first = true;
		for item in items {
			if !first {
				self.sql.push_str(separator);
			}
			f(self, item)?;
			first = false;
		}
		Ok(())
	}

	/// Consume writer and return (SQL, placeholder count)
	pub(crate) fn finish(self) -> (String, usize) {
		(self.sql, self.placeholders)
	}
}
