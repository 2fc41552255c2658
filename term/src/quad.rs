//! Concrete quads, whose components are [`RdfTerm`]s.

use crate::{DefaultGraph, RdfTerm};
use rdfquad_api::quad::{QBorrowTerm, Quad};
use rdfquad_api::term::{TermError, TryFromTerm};

/// A quad whose components are [`RdfTerm`]s.
///
/// An [`RdfQuad`] is always valid (see [`Quad::check`]):
/// it can only be built through checked constructors.
#[derive(Clone, Debug)]
pub struct RdfQuad {
    subject: RdfTerm,
    predicate: RdfTerm,
    object: RdfTerm,
    graph: RdfTerm,
}

impl RdfQuad {
    /// Build a new quad.
    ///
    /// If `graph` is `None`, the quad belongs to the default graph.
    ///
    /// Fails if any term is not allowed at its position.
    pub fn new<S, P, O>(
        subject: S,
        predicate: P,
        object: O,
        graph: Option<RdfTerm>,
    ) -> Result<Self, TermError>
    where
        S: Into<RdfTerm>,
        P: Into<RdfTerm>,
        O: Into<RdfTerm>,
    {
        let quad = Self::from_terms_unchecked([
            subject.into(),
            predicate.into(),
            object.into(),
            graph.unwrap_or_else(|| DefaultGraph::default().into()),
        ]);
        quad.check()?;
        Ok(quad)
    }

    /// Copy any [`Quad`] into an [`RdfQuad`].
    ///
    /// Fails if any term is not allowed at its position,
    /// or if a literal breaks the rules of [`Literal::new`](crate::Literal::new).
    pub fn try_from_quad<Q: Quad>(quad: Q) -> Result<Self, TermError> {
        quad.check()?;
        Ok(Self::from_terms_unchecked([
            RdfTerm::try_from_term(quad.s())?,
            RdfTerm::try_from_term(quad.p())?,
            RdfTerm::try_from_term(quad.o())?,
            RdfTerm::try_from_term(quad.g())?,
        ]))
    }

    pub(crate) fn from_terms_unchecked([subject, predicate, object, graph]: [RdfTerm; 4]) -> Self {
        RdfQuad {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// The subject of this quad.
    pub fn subject(&self) -> &RdfTerm {
        &self.subject
    }

    /// The predicate of this quad.
    pub fn predicate(&self) -> &RdfTerm {
        &self.predicate
    }

    /// The object of this quad.
    pub fn object(&self) -> &RdfTerm {
        &self.object
    }

    /// The graph of this quad.
    pub fn graph(&self) -> &RdfTerm {
        &self.graph
    }

    /// The four components of this quad.
    pub fn terms(&self) -> [&RdfTerm; 4] {
        [&self.subject, &self.predicate, &self.object, &self.graph]
    }

    /// Destructure this quad into its four components.
    pub fn into_terms(self) -> [RdfTerm; 4] {
        [self.subject, self.predicate, self.object, self.graph]
    }

    /// A copy of this quad with a different subject.
    pub fn with_subject<T: Into<RdfTerm>>(&self, subject: T) -> Result<Self, TermError> {
        Self::new(
            subject,
            self.predicate.clone(),
            self.object.clone(),
            Some(self.graph.clone()),
        )
    }

    /// A copy of this quad with a different predicate.
    pub fn with_predicate<T: Into<RdfTerm>>(&self, predicate: T) -> Result<Self, TermError> {
        Self::new(
            self.subject.clone(),
            predicate,
            self.object.clone(),
            Some(self.graph.clone()),
        )
    }

    /// A copy of this quad with a different object.
    pub fn with_object<T: Into<RdfTerm>>(&self, object: T) -> Result<Self, TermError> {
        Self::new(
            self.subject.clone(),
            self.predicate.clone(),
            object,
            Some(self.graph.clone()),
        )
    }

    /// A copy of this quad with a different graph
    /// (`None` meaning the default graph).
    pub fn with_graph(&self, graph: Option<RdfTerm>) -> Result<Self, TermError> {
        Self::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
            graph,
        )
    }
}

impl Quad for RdfQuad {
    type Term = RdfTerm;

    fn s(&self) -> QBorrowTerm<'_, Self> {
        &self.subject
    }
    fn p(&self) -> QBorrowTerm<'_, Self> {
        &self.predicate
    }
    fn o(&self) -> QBorrowTerm<'_, Self> {
        &self.object
    }
    fn g(&self) -> QBorrowTerm<'_, Self> {
        &self.graph
    }
}

impl<Q: Quad> PartialEq<Q> for RdfQuad {
    fn eq(&self, other: &Q) -> bool {
        Quad::eq(self, other)
    }
}

impl Eq for RdfQuad {}

impl std::hash::Hash for RdfQuad {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Quad::hash(self, state)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{BlankNode, Literal, NamedNode};
    use rdfquad_api::quad::assert_consistent_quad_impl;
    use rdfquad_api::term::{SimpleTerm, Term, TermKind};
    use test_case::test_case;

    fn n(iri: &str) -> RdfTerm {
        NamedNode::new(iri).into()
    }

    fn l(lex: &str) -> RdfTerm {
        Literal::new(lex, None, None).unwrap().into()
    }

    fn dg() -> RdfTerm {
        DefaultGraph::default().into()
    }

    #[test]
    fn default_graph_when_none() -> Result<(), TermError> {
        let q = RdfQuad::new(n("tag:s"), n("tag:p"), l("o"), None)?;
        assert_consistent_quad_impl(&q);
        assert!(q.in_default_graph());
        assert!(q.graph().is_default_graph());
        Ok(())
    }

    #[test_case(l("s"), n("tag:p"), n("tag:o"), None => matches Err(TermError::InvalidSubject(TermKind::Literal)))]
    #[test_case(dg(), n("tag:p"), n("tag:o"), None => matches Err(TermError::InvalidSubject(TermKind::DefaultGraph)))]
    #[test_case(n("tag:s"), BlankNode::new("p").into(), n("tag:o"), None => matches Err(TermError::InvalidPredicate(TermKind::BlankNode)))]
    #[test_case(n("tag:s"), n("tag:p"), dg(), None => matches Err(TermError::InvalidObject(TermKind::DefaultGraph)))]
    #[test_case(n("tag:s"), n("tag:p"), n("tag:o"), Some(l("g")) => matches Err(TermError::InvalidGraph(TermKind::Literal)))]
    #[test_case(n("tag:s"), n("tag:p"), n("tag:o"), Some(dg()) => matches Ok(_))]
    #[test_case(BlankNode::new("s").into(), n("tag:p"), l("o"), Some(BlankNode::new("g").into()) => matches Ok(_))]
    fn new_checks_positions(
        s: RdfTerm,
        p: RdfTerm,
        o: RdfTerm,
        g: Option<RdfTerm>,
    ) -> Result<RdfQuad, TermError> {
        RdfQuad::new(s, p, o, g)
    }

    #[test]
    fn quoted_quads() -> Result<(), TermError> {
        let inner = RdfQuad::new(n("tag:s"), n("tag:p"), l("o"), None)?;
        let outer = RdfQuad::new(inner.clone(), n("tag:says"), inner.clone(), Some(n("tag:g")))?;
        assert_consistent_quad_impl(&outer);
        assert!(outer.subject().is_quad());
        assert!(Term::eq(outer.object(), outer.subject()));
        Ok(())
    }

    #[test]
    fn with_methods() -> Result<(), TermError> {
        let q = RdfQuad::new(n("tag:s"), n("tag:p"), l("o"), Some(n("tag:g")))?;
        let q2 = q.with_subject(BlankNode::new("b"))?;
        assert_eq!(q2.subject(), &BlankNode::new("b"));
        assert_eq!(q2.graph(), &n("tag:g"));
        assert_eq!(q.subject(), &n("tag:s"));
        let q3 = q.with_graph(None)?;
        assert!(q3.in_default_graph());
        let q4 = q.with_object(n("tag:o"))?.with_predicate(n("tag:q"))?;
        assert_eq!(q4.object(), &n("tag:o"));
        assert_eq!(q4.predicate(), &n("tag:q"));
        assert!(matches!(
            q.with_predicate(l("p")),
            Err(TermError::InvalidPredicate(TermKind::Literal))
        ));
        assert!(matches!(
            q.with_subject(l("s")),
            Err(TermError::InvalidSubject(TermKind::Literal))
        ));
        Ok(())
    }

    #[test]
    fn copy_and_compare_other_impl() -> Result<(), TermError> {
        let q = [
            SimpleTerm::BlankNode("s".into()),
            SimpleTerm::NamedNode("tag:p".into()),
            SimpleTerm::NamedNode("tag:o".into()),
            SimpleTerm::DefaultGraph,
        ];
        let copy = RdfQuad::try_from_quad(&q)?;
        assert_eq!(copy, q);
        assert_eq!(copy.subject().bnode_id().unwrap(), "_:s");
        Ok(())
    }

    #[test]
    fn copy_invalid_quad_fails() {
        let q = [
            SimpleTerm::DefaultGraph,
            SimpleTerm::NamedNode("tag:p".into()),
            SimpleTerm::NamedNode("tag:o".into()),
            SimpleTerm::DefaultGraph,
        ];
        assert!(matches!(
            RdfQuad::try_from_quad(q),
            Err(TermError::InvalidSubject(TermKind::DefaultGraph))
        ));
    }
}
