//! Negation, conjunction and disjunction.

use std::ops::{BitAnd, BitOr, Not};

use super::node::{Combine, Leaf, Node, Where};
use crate::types::{Connector, Operator};
use crate::value::Value;

impl Where {
	/// Logical negation.
	///
	/// Paired comparisons swap operator (`Equals` becomes `NotEquals`,
	/// `GreaterThan` becomes `LessOrEqual`, ...), `IsNull` flips its boolean
	/// payload, everything else toggles the negation flag. Negating twice is
	/// equivalent to the original predicate, but not always structurally
	/// equal to it.
	///
	/// ```rust
	/// use sqlwhere_query::{Operator, Where};
	///
	/// let w = Where::leaf("age", Operator::GreaterThan, 18).not();
	/// assert_eq!(w.operator(), Operator::LessOrEqual);
	/// assert!(!w.is_negated());
	/// ```
	#[allow(clippy::should_implement_trait)]
	pub fn not(&self) -> Self {
		let node = match &*self.node {
			Node::Combine(combine) => Node::Combine(Combine {
				connector: combine.connector,
				children: combine.children.clone(),
				negate: !combine.negate,
			}),
			Node::Leaf(leaf) => Node::Leaf(negate_leaf(leaf)),
		};
		Self::from_node(node)
	}

	/// Conjunction of `self` and `other`.
	///
	/// All is the identity and None absorbs. Appending to an un-negated AND
	/// keeps the tree flat.
	///
	/// ```rust
	/// use sqlwhere_query::{Operator, Where};
	///
	/// let a = Where::leaf("a", Operator::Equals, 1);
	/// let b = Where::leaf("b", Operator::Equals, 2);
	/// let c = Where::leaf("c", Operator::Equals, 3);
	///
	/// assert_eq!(a.and(&b).and(&c).children().len(), 3);
	/// assert!(a.and(&Where::none()).is_none());
	/// assert_eq!(Where::all().and(&a), a);
	/// ```
	pub fn and(&self, other: &Where) -> Self {
		if self.is_all() {
			return other.clone();
		}
		if other.is_none() {
			return other.clone();
		}
		if self.is_none() {
			return self.clone();
		}
		if other.is_all() {
			return self.clone();
		}
		self.join(Connector::And, other)
	}

	/// Disjunction of `self` and `other`.
	///
	/// None is the identity and All absorbs. Appending to an un-negated OR
	/// keeps the tree flat.
	pub fn or(&self, other: &Where) -> Self {
		if self.is_all() {
			return self.clone();
		}
		if other.is_none() {
			return self.clone();
		}
		if self.is_none() {
			return other.clone();
		}
		if other.is_all() {
			return other.clone();
		}
		self.join(Connector::Or, other)
	}

	/// Combine under `connector` once sentinels have been dealt with.
	fn join(&self, connector: Connector, other: &Where) -> Self {
		if let Node::Combine(combine) = &*self.node {
			if combine.connector == connector && !combine.negate {
				let mut children = Vec::with_capacity(combine.children.len() + 1);
				children.extend(combine.children.iter().cloned());
				children.push(other.clone());
				return Self::combine(connector, children);
			}
		}
		Self::combine(connector, vec![self.clone(), other.clone()])
	}

	/// AND of every predicate, starting from [`Where::all`].
	///
	/// An empty iterator yields All.
	pub fn conjunction<I>(conditions: I) -> Self
	where
		I: IntoIterator<Item = Where>,
	{
		conditions
			.into_iter()
			.fold(Self::all(), |acc, cond| acc.and(&cond))
	}

	/// OR of every predicate, starting from [`Where::none`].
	///
	/// An empty iterator yields None.
	pub fn disjunction<I>(conditions: I) -> Self
	where
		I: IntoIterator<Item = Where>,
	{
		conditions
			.into_iter()
			.fold(Self::none(), |acc, cond| acc.or(&cond))
	}
}

fn negate_leaf(leaf: &Leaf) -> Leaf {
	let mut negated = leaf.clone();
	match leaf.operator {
		Operator::IsNull => {
			negated.value = match leaf.value.as_bool() {
				Some(is_null) => Value::Bool(Some(!is_null)),
				// Malformed payloads are left alone and reported at render time
				None => leaf.value.clone(),
			};
		}
		Operator::None
		| Operator::IsIn
		| Operator::StartsWith
		| Operator::CiStartsWith
		| Operator::EndsWith
		| Operator::CiEndsWith
		| Operator::Contains
		| Operator::CiContains => negated.negate = !leaf.negate,
		Operator::Equals
		| Operator::NotEquals
		| Operator::CiEquals
		| Operator::CiNotEquals
		| Operator::GreaterThan
		| Operator::LessOrEqual
		| Operator::LessThan
		| Operator::GreaterOrEqual => {
			if let Some(opposite) = leaf.operator.opposite() {
				negated.operator = opposite;
			}
		}
	}
	negated
}

impl Not for Where {
	type Output = Where;

	fn not(self) -> Where {
		Where::not(&self)
	}
}

impl Not for &Where {
	type Output = Where;

	fn not(self) -> Where {
		Where::not(self)
	}
}

impl BitAnd for Where {
	type Output = Where;

	fn bitand(self, rhs: Where) -> Where {
		Where::and(&self, &rhs)
	}
}

impl BitAnd<&Where> for &Where {
	type Output = Where;

	fn bitand(self, rhs: &Where) -> Where {
		Where::and(self, rhs)
	}
}

impl BitOr for Where {
	type Output = Where;

	fn bitor(self, rhs: Where) -> Where {
		Where::or(&self, &rhs)
	}
}

impl BitOr<&Where> for &Where {
	type Output = Where;

	fn bitor(self, rhs: &Where) -> Where {
		Where::or(self, rhs)
	}
}

/// Builds the conjunction of the given predicates.
///
/// # Example
///
/// ```rust
/// use sqlwhere_query::{where_all, Dialect, Operator, Where};
///
/// let cond = where_all![
///     Where::leaf("a", Operator::Equals, 1),
///     Where::leaf("b", Operator::Equals, 2),
/// ];
/// assert_eq!(cond.render(Dialect::Generic).unwrap(), "a = ? AND b = ?");
/// assert!(where_all![].is_all());
/// ```
#[macro_export]
macro_rules! where_all {
	($($cond:expr),* $(,)?) => {
		$crate::Where::conjunction([$($cond),*])
	};
}

/// Builds the disjunction of the given predicates.
///
/// # Example
///
/// ```rust
/// use sqlwhere_query::{where_any, Dialect, Operator, Where};
///
/// let cond = where_any![
///     Where::leaf("a", Operator::Equals, 1),
///     Where::leaf("b", Operator::Equals, 2),
/// ];
/// assert_eq!(cond.render(Dialect::Generic).unwrap(), "a = ? OR b = ?");
/// ```
#[macro_export]
macro_rules! where_any {
	($($cond:expr),* $(,)?) => {
		$crate::Where::disjunction([$($cond),*])
	};
}
