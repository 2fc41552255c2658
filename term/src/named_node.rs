//! Named nodes, i.e. terms identified by an
//! [IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs).

use rdfquad_api::term::{Term, TermKind};
use rdfquad_api::MownStr;

/// A term identified by an IRI.
///
/// The IRI is not validated.
#[derive(Clone, Debug)]
pub struct NamedNode {
    iri: Box<str>,
}

impl NamedNode {
    /// Build a named node with the given IRI.
    pub fn new<T: Into<String>>(iri: T) -> Self {
        NamedNode {
            iri: iri.into().into_boxed_str(),
        }
    }

    /// The IRI of this named node.
    pub fn as_str(&self) -> &str {
        &self.iri
    }
}

impl Term for NamedNode {
    type BorrowTerm<'x> = &'x Self;

    fn kind(&self) -> TermKind {
        TermKind::NamedNode
    }
    fn iri(&self) -> Option<MownStr> {
        Some(MownStr::from(&self.iri[..]))
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}

impl<T: Term> PartialEq<T> for NamedNode {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other.borrow_term())
    }
}

impl Eq for NamedNode {}

impl std::hash::Hash for NamedNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfquad_api::ns::rdf;
    use rdfquad_api::term::assert_consistent_term_impl;

    #[test]
    fn named_node() {
        let n = NamedNode::new("http://example.org/foo");
        assert_consistent_term_impl(&n);
        assert_eq!(n.as_str(), "http://example.org/foo");
        assert_eq!(n.iri().unwrap(), "http://example.org/foo");
        assert_eq!(n, NamedNode::new(String::from("http://example.org/foo")));
        assert_ne!(n, NamedNode::new("http://example.org/bar"));
    }

    #[test]
    fn named_node_eq_ns_term() {
        let n = NamedNode::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
        assert_eq!(n, rdf::type_);
        assert!(Term::eq(&rdf::type_, &n));
    }
}
