//! Operator and connector types used by [`Where`](crate::Where) nodes.

mod operators;

pub use operators::{Connector, Operator};
