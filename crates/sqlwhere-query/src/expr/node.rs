//! The [`Where`] expression tree.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, WhereError};
use crate::types::{Connector, Operator};
use crate::value::{IntoValue, Value};

/// An immutable SQL predicate.
///
/// A `Where` is either a comparison on one column (a leaf) or an ordered
/// AND/OR combination of other predicates. Nodes live behind an [`Arc`]:
/// cloning is cheap, combining predicates shares the untouched subtrees, and
/// no operation ever mutates a node that another handle can observe.
///
/// Two leaves with [`Operator::None`] stand for the constant predicates:
/// [`Where::all`] (always true) and [`Where::none`] (always false).
///
/// # Examples
///
/// ```rust
/// use sqlwhere_query::{Dialect, Operator, Where};
///
/// let adult = Where::leaf("age", Operator::GreaterOrEqual, 18);
/// let named_a = Where::leaf("name", Operator::CiStartsWith, "A");
/// let pending = Where::leaf("status", Operator::IsNull, true);
///
/// let cond = adult.and(&named_a.or(&pending));
/// assert_eq!(
///     cond.render(Dialect::Sqlite).unwrap(),
///     r"age >= ? AND (name LIKE ? ESCAPE '\' OR status IS NULL)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Where {
	pub(crate) node: Arc<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node {
	Leaf(Leaf),
	Combine(Combine),
}

/// Comparison of one column against a value.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Leaf {
	pub(crate) column: String,
	pub(crate) operator: Operator,
	pub(crate) value: Value,
	pub(crate) negate: bool,
}

/// Ordered AND/OR combination of child predicates.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Combine {
	pub(crate) connector: Connector,
	pub(crate) children: Vec<Where>,
	pub(crate) negate: bool,
}

impl Where {
	pub(crate) fn from_node(node: Node) -> Self {
		Self {
			node: Arc::new(node),
		}
	}

	/// Build a comparison on `column`.
	///
	/// Nothing is validated here: a value whose shape does not suit the
	/// operator (for example `IsIn` with a scalar) is reported by
	/// [`render`](Self::render) and [`bind_values`](Self::bind_values).
	pub fn leaf(column: impl Into<String>, operator: Operator, value: impl IntoValue) -> Self {
		Self::from_node(Node::Leaf(Leaf {
			column: column.into(),
			operator,
			value: value.into_value(),
			negate: false,
		}))
	}

	/// The predicate that constrains nothing (always true).
	pub fn all() -> Self {
		Self::sentinel(false)
	}

	/// The predicate that nothing satisfies (always false).
	pub fn none() -> Self {
		Self::sentinel(true)
	}

	fn sentinel(negate: bool) -> Self {
		Self::from_node(Node::Leaf(Leaf {
			column: String::new(),
			operator: Operator::None,
			value: Value::default(),
			negate,
		}))
	}

	pub(crate) fn combine(connector: Connector, children: Vec<Where>) -> Self {
		Self::from_node(Node::Combine(Combine {
			connector,
			children,
			negate: false,
		}))
	}

	/// Returns `true` if this is the always-true constant.
	///
	/// Combinations are never constants, whatever their children.
	pub fn is_all(&self) -> bool {
		matches!(
			&*self.node,
			Node::Leaf(Leaf {
				operator: Operator::None,
				negate: false,
				..
			})
		)
	}

	/// Returns `true` if this is the always-false constant.
	pub fn is_none(&self) -> bool {
		matches!(
			&*self.node,
			Node::Leaf(Leaf {
				operator: Operator::None,
				negate: true,
				..
			})
		)
	}

	/// Returns `true` for a comparison or constant, `false` for a combination.
	pub fn is_leaf(&self) -> bool {
		matches!(&*self.node, Node::Leaf(_))
	}

	/// Column compared by a leaf; `None` for combinations.
	pub fn column(&self) -> Option<&str> {
		match &*self.node {
			Node::Leaf(leaf) => Some(&leaf.column),
			Node::Combine(_) => None,
		}
	}

	/// Operator of a leaf. Combinations report [`Operator::None`].
	pub fn operator(&self) -> Operator {
		match &*self.node {
			Node::Leaf(leaf) => leaf.operator,
			Node::Combine(_) => Operator::None,
		}
	}

	/// Value carried by a leaf; `None` for combinations.
	pub fn value(&self) -> Option<&Value> {
		match &*self.node {
			Node::Leaf(leaf) => Some(&leaf.value),
			Node::Combine(_) => None,
		}
	}

	/// Whether the node carries a negation flag.
	pub fn is_negated(&self) -> bool {
		match &*self.node {
			Node::Leaf(leaf) => leaf.negate,
			Node::Combine(combine) => combine.negate,
		}
	}

	/// Connector of a combination; `None` for leaves.
	pub fn connector(&self) -> Option<Connector> {
		match &*self.node {
			Node::Leaf(_) => None,
			Node::Combine(combine) => Some(combine.connector),
		}
	}

	/// Children of a combination in order; empty for leaves.
	pub fn children(&self) -> &[Where] {
		match &*self.node {
			Node::Leaf(_) => &[],
			Node::Combine(combine) => &combine.children,
		}
	}

	/// Returns `true` if both handles point at the very same node.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.node, &other.node)
	}

	/// Human-readable form for logs and diagnostics. Never send it to a
	/// database.
	///
	/// ```rust
	/// use sqlwhere_query::{Operator, Where};
	///
	/// let w = Where::leaf("age", Operator::GreaterThan, 18);
	/// assert_eq!(
	///     w.describe(),
	///     r#"Where(column="age", operator="GreaterThan", value="18", negate=false)"#
	/// );
	/// ```
	pub fn describe(&self) -> String {
		self.to_string()
	}
}

impl Leaf {
	/// Checks that the value has the shape the operator needs.
	pub(crate) fn check_shape(&self) -> Result<()> {
		let reason = match self.operator {
			Operator::None => return Ok(()),
			Operator::IsIn => match self.value.as_list() {
				Some(_) => return Ok(()),
				None => format!("expected a list, got {}", self.value.type_name()),
			},
			Operator::IsNull => match self.value.as_bool() {
				Some(_) => return Ok(()),
				None => format!("expected a boolean, got {}", self.value.type_name()),
			},
			op if op.is_like() => match self.value.as_text() {
				Some(_) => return Ok(()),
				None if self.value.is_null() => "expected text, got NULL".to_string(),
				None => format!("expected text, got {}", self.value.type_name()),
			},
			_ => {
				if !self.value.is_list() {
					return Ok(());
				}
				"a list cannot be compared with a single placeholder".to_string()
			}
		};
		Err(WhereError::invalid(&self.column, self.operator, reason))
	}
}

impl fmt::Display for Where {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &*self.node {
			Node::Leaf(leaf) => write!(
				f,
				"Where(column=\"{}\", operator=\"{}\", value=\"{}\", negate={})",
				leaf.column, leaf.operator, leaf.value, leaf.negate
			),
			Node::Combine(combine) => {
				if combine.negate {
					f.write_str("!(")?;
				}
				for (i, child) in combine.children.iter().enumerate() {
					if i > 0 {
						f.write_str(combine.connector.debug_separator())?;
					}
					if child.is_leaf() {
						write!(f, "{}", child)?;
					} else {
						write!(f, "({})", child)?;
					}
				}
				if combine.negate {
					f.write_str(")")?;
				}
				Ok(())
			}
		}
	}
}
