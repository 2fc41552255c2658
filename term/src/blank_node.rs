//! Blank nodes, i.e. terms with a locally scoped identifier.

use rdfquad_api::term::{strip_bnode_prefix, Term, TermKind};
use rdfquad_api::MownStr;

/// A blank node.
///
/// The identifier is always stored with its `_:` prefix,
/// whether or not it was given at construction time.
#[derive(Clone, Debug)]
pub struct BlankNode {
    id: Box<str>,
}

impl BlankNode {
    /// Build a blank node with the given identifier,
    /// adding the `_:` prefix if it is missing.
    ///
    /// An empty identifier (`""` or `"_:"`) gets a [fresh](BlankNode::fresh) one.
    pub fn new<T: Into<String>>(id: T) -> Self {
        let id = id.into();
        if strip_bnode_prefix(&id).is_empty() {
            return BlankNode::fresh();
        }
        let id = if id.starts_with("_:") {
            id
        } else {
            format!("_:{id}")
        };
        BlankNode {
            id: id.into_boxed_str(),
        }
    }

    /// Build a blank node with a fresh random identifier
    /// (128 random bits, hex-encoded).
    pub fn fresh() -> Self {
        BlankNode {
            id: format!("_:{:032x}", rand::random::<u128>()).into_boxed_str(),
        }
    }

    /// The identifier of this blank node, including the `_:` prefix.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// The identifier of this blank node, without the `_:` prefix.
    pub fn label(&self) -> &str {
        strip_bnode_prefix(&self.id)
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        BlankNode::fresh()
    }
}

impl Term for BlankNode {
    type BorrowTerm<'x> = &'x Self;

    fn kind(&self) -> TermKind {
        TermKind::BlankNode
    }
    fn bnode_id(&self) -> Option<MownStr> {
        Some(MownStr::from(&self.id[..]))
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}

impl<T: Term> PartialEq<T> for BlankNode {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other.borrow_term())
    }
}

impl Eq for BlankNode {}

impl std::hash::Hash for BlankNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}
