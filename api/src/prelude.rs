//! General-use types and traits from the rdfquad API.

pub use crate::quad::Quad;
pub use crate::template::QuadTemplate;
pub use crate::term::{FromTerm, Term, TermError, TermKind, TryFromTerm, Value, ValueCast};
