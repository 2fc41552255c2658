//! A quad expresses a single fact within a context.
//! It is formed of four terms called *subject*, *predicate*, *object* and *graph*.
//!
//! The graph of a quad is either a named graph (named node or blank node),
//! or the default graph (a term of kind [`TermKind::DefaultGraph`]).
//!
//! Not every combination of terms makes a valid quad:
//!
//! | position  | allowed kinds                                   |
//! |-----------|-------------------------------------------------|
//! | subject   | named node, blank node, quad                    |
//! | predicate | named node                                      |
//! | object    | named node, blank node, literal, quad           |
//! | graph     | named node, blank node, default graph           |
//!
//! See [`Quad::check`].

use crate::term::{Term, TermError, TermKind};

/// The type of [`Term`] used by the [`Quad`] `Q` when borrowed for lifetime `'s`.
pub type QBorrowTerm<'s, Q> = <<Q as Quad>::Term as Term>::BorrowTerm<'s>;

/// This trait represents an abstract quad,
/// and provides convenient methods for working with quads.
pub trait Quad: Sized {
    /// The type of [`Term`] contained by this quad
    type Term: Term;

    /// The subject of this quad.
    fn s(&self) -> QBorrowTerm<'_, Self>;

    /// The predicate of this quad.
    fn p(&self) -> QBorrowTerm<'_, Self>;

    /// The object of this quad.
    fn o(&self) -> QBorrowTerm<'_, Self>;

    /// The graph of this quad.
    fn g(&self) -> QBorrowTerm<'_, Self>;

    /// The four components of this quad.
    #[inline]
    fn spog(&self) -> [QBorrowTerm<'_, Self>; 4] {
        [self.s(), self.p(), self.o(), self.g()]
    }

    /// Whether this quad belongs to the default graph.
    #[inline]
    fn in_default_graph(&self) -> bool {
        self.g().is_default_graph()
    }

    /// Check that each component of this quad has a kind allowed at its position,
    /// recursively for quoted quads.
    fn check(&self) -> Result<(), TermError> {
        check_subject(self.s())?;
        check_predicate(self.p())?;
        check_object(self.o())?;
        check_graph(self.g())
    }

    /// Check whether `self` and `other` represent the same quad,
    /// i.e. if their four components are pairwise equal (see [`Term::eq`]).
    fn eq<Q: Quad>(&self, other: Q) -> bool {
        Term::eq(&self.s(), other.s())
            && Term::eq(&self.p(), other.p())
            && Term::eq(&self.o(), other.o())
            && Term::eq(&self.g(), other.g())
    }

    /// Compute an implementation-independent hash of this quad,
    /// consistent with [`Quad::eq`].
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(&self.s(), state);
        Term::hash(&self.p(), state);
        Term::hash(&self.o(), state);
        Term::hash(&self.g(), state);
    }
}

impl<T: Term> Quad for [T; 4] {
    type Term = T;

    #[inline]
    fn s(&self) -> QBorrowTerm<'_, Self> {
        self[0].borrow_term()
    }
    #[inline]
    fn p(&self) -> QBorrowTerm<'_, Self> {
        self[1].borrow_term()
    }
    #[inline]
    fn o(&self) -> QBorrowTerm<'_, Self> {
        self[2].borrow_term()
    }
    #[inline]
    fn g(&self) -> QBorrowTerm<'_, Self> {
        self[3].borrow_term()
    }
}

impl<'a, Q: Quad> Quad for &'a Q {
    type Term = Q::Term;

    #[inline]
    fn s(&self) -> QBorrowTerm<'_, Self> {
        (*self).s()
    }
    #[inline]
    fn p(&self) -> QBorrowTerm<'_, Self> {
        (*self).p()
    }
    #[inline]
    fn o(&self) -> QBorrowTerm<'_, Self> {
        (*self).o()
    }
    #[inline]
    fn g(&self) -> QBorrowTerm<'_, Self> {
        (*self).g()
    }
}

/// Check that `t` is allowed as the subject of a quad.
pub fn check_subject<T: Term>(t: T) -> Result<(), TermError> {
    match t.kind() {
        TermKind::NamedNode | TermKind::BlankNode => Ok(()),
        TermKind::Quad => check_quoted(t),
        k => Err(TermError::InvalidSubject(k)),
    }
}

/// Check that `t` is allowed as the predicate of a quad.
pub fn check_predicate<T: Term>(t: T) -> Result<(), TermError> {
    match t.kind() {
        TermKind::NamedNode => Ok(()),
        k => Err(TermError::InvalidPredicate(k)),
    }
}

/// Check that `t` is allowed as the object of a quad.
pub fn check_object<T: Term>(t: T) -> Result<(), TermError> {
    match t.kind() {
        TermKind::NamedNode | TermKind::BlankNode | TermKind::Literal => Ok(()),
        TermKind::Quad => check_quoted(t),
        k => Err(TermError::InvalidObject(k)),
    }
}

/// Check that `t` is allowed as the graph of a quad.
pub fn check_graph<T: Term>(t: T) -> Result<(), TermError> {
    match t.kind() {
        TermKind::NamedNode | TermKind::BlankNode | TermKind::DefaultGraph => Ok(()),
        k => Err(TermError::InvalidGraph(k)),
    }
}

fn check_quoted<T: Term>(t: T) -> Result<(), TermError> {
    match t.quad() {
        Some(spog) => spog.check(),
        None => Ok(()),
    }
}

/// Test that the given quad is consistent in its implementation of the [`Quad`] trait.
#[cfg(any(test, feature = "test_macro"))]
pub fn assert_consistent_quad_impl<Q: Quad>(q: &Q) {
    let [s, p, o, g] = q.spog();
    assert!(Term::eq(&s, q.s()));
    assert!(Term::eq(&p, q.p()));
    assert!(Term::eq(&o, q.o()));
    assert!(Term::eq(&g, q.g()));
    assert!(Quad::eq(q, q));
    assert!(Quad::eq(q, [s, p, o, g]));
    assert_eq!(q.in_default_graph(), g.is_default_graph());
}
