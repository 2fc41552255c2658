//! A quad template is a quad-shaped pattern,
//! where each position is either a term or a wildcard.
//!
//! A template matches a quad when every term it holds is [equal](crate::term::Term::eq)
//! to the quad component at the same position.
//! Wildcards (`None`) match anything.
//!
//! # Default graph
//!
//! A default graph given as the graph of a template is turned into a wildcard:
//! `QuadTemplate::new(None, None, None, Some(default_graph))` is therefore rejected as empty,
//! and a template whose graph is the default graph matches quads in every graph.
use crate::quad::{check_graph, check_object, check_predicate, check_subject, Quad};
use crate::term::{FromTerm, Term, TermError, TryFromTerm};
use std::fmt;

/// A quad pattern with optional subject, predicate, object and graph.
///
/// Invariants:
/// * at least one position is constrained;
/// * each constrained position holds a term of a kind allowed at that position
///   (see [`crate::quad`]);
/// * the graph position never holds the default graph.
#[derive(Clone, Debug)]
pub struct QuadTemplate<T> {
    s: Option<T>,
    p: Option<T>,
    o: Option<T>,
    g: Option<T>,
}

impl<T: Term> QuadTemplate<T> {
    /// Build a new template.
    ///
    /// Fails with [`TermError::EmptyTemplate`] if all positions are wildcards
    /// (after the default graph has been turned into a wildcard),
    /// or with the appropriate [`TermError`] if a term is not allowed at its position.
    pub fn new(
        s: Option<T>,
        p: Option<T>,
        o: Option<T>,
        g: Option<T>,
    ) -> Result<Self, TermError> {
        let g = g.filter(|g| !g.is_default_graph());
        if s.is_none() && p.is_none() && o.is_none() && g.is_none() {
            return Err(TermError::EmptyTemplate);
        }
        if let Some(s) = &s {
            check_subject(s.borrow_term())?;
        }
        if let Some(p) = &p {
            check_predicate(p.borrow_term())?;
        }
        if let Some(o) = &o {
            check_object(o.borrow_term())?;
        }
        if let Some(g) = &g {
            check_graph(g.borrow_term())?;
        }
        Ok(QuadTemplate { s, p, o, g })
    }

    /// The subject of this template, if constrained.
    pub fn subject(&self) -> Option<&T> {
        self.s.as_ref()
    }

    /// The predicate of this template, if constrained.
    pub fn predicate(&self) -> Option<&T> {
        self.p.as_ref()
    }

    /// The object of this template, if constrained.
    pub fn object(&self) -> Option<&T> {
        self.o.as_ref()
    }

    /// The graph of this template, if constrained.
    pub fn graph(&self) -> Option<&T> {
        self.g.as_ref()
    }

    /// Whether `quad` matches this template.
    pub fn matches<Q: Quad>(&self, quad: Q) -> bool {
        position_matches(&self.s, quad.s())
            && position_matches(&self.p, quad.p())
            && position_matches(&self.o, quad.o())
            && position_matches(&self.g, quad.g())
    }

    /// Copy this template into a template holding another type of terms.
    pub fn to_template<U: Term + FromTerm>(&self) -> QuadTemplate<U> {
        let copy = |t: &Option<T>| t.as_ref().map(|t| U::from_term(t.borrow_term()));
        QuadTemplate {
            s: copy(&self.s),
            p: copy(&self.p),
            o: copy(&self.o),
            g: copy(&self.g),
        }
    }

    /// Try to copy this template into a template holding another type of terms.
    ///
    /// Fails as soon as one of the terms can not be copied.
    pub fn try_to_template<U: Term + TryFromTerm>(&self) -> Result<QuadTemplate<U>, U::Error> {
        let copy = |t: &Option<T>| {
            t.as_ref()
                .map(|t| U::try_from_term(t.borrow_term()))
                .transpose()
        };
        Ok(QuadTemplate {
            s: copy(&self.s)?,
            p: copy(&self.p)?,
            o: copy(&self.o)?,
            g: copy(&self.g)?,
        })
    }

    /// Destructure this template into its four positions.
    pub fn into_parts(self) -> [Option<T>; 4] {
        [self.s, self.p, self.o, self.g]
    }
}

impl<T: Term + Clone> QuadTemplate<T> {
    /// A copy of this template with a different subject.
    ///
    /// Fails if the resulting template would be invalid (see [`QuadTemplate::new`]).
    pub fn with_subject(&self, s: Option<T>) -> Result<Self, TermError> {
        Self::new(s, self.p.clone(), self.o.clone(), self.g.clone())
    }

    /// A copy of this template with a different predicate.
    ///
    /// Fails if the resulting template would be invalid (see [`QuadTemplate::new`]).
    pub fn with_predicate(&self, p: Option<T>) -> Result<Self, TermError> {
        Self::new(self.s.clone(), p, self.o.clone(), self.g.clone())
    }

    /// A copy of this template with a different object.
    ///
    /// Fails if the resulting template would be invalid (see [`QuadTemplate::new`]).
    pub fn with_object(&self, o: Option<T>) -> Result<Self, TermError> {
        Self::new(self.s.clone(), self.p.clone(), o, self.g.clone())
    }

    /// A copy of this template with a different graph.
    ///
    /// Fails if the resulting template would be invalid (see [`QuadTemplate::new`]).
    pub fn with_graph(&self, g: Option<T>) -> Result<Self, TermError> {
        Self::new(self.s.clone(), self.p.clone(), self.o.clone(), g)
    }
}

fn position_matches<T: Term, U: Term>(pattern: &Option<T>, term: U) -> bool {
    match pattern {
        None => true,
        Some(pattern) => Term::eq(pattern, term),
    }
}

fn position_eq<T: Term, U: Term>(p1: &Option<T>, p2: &Option<U>) -> bool {
    match (p1, p2) {
        (None, None) => true,
        (Some(t1), Some(t2)) => Term::eq(t1, t2.borrow_term()),
        _ => false,
    }
}

/// Two templates are equal if they constrain the same positions with equal terms.
impl<T: Term, U: Term> PartialEq<QuadTemplate<U>> for QuadTemplate<T> {
    fn eq(&self, other: &QuadTemplate<U>) -> bool {
        position_eq(&self.s, &other.s)
            && position_eq(&self.p, &other.p)
            && position_eq(&self.o, &other.o)
            && position_eq(&self.g, &other.g)
    }
}

impl<T: Term> Eq for QuadTemplate<T> {}

/// Wildcards are displayed as `?`.
impl<T: Term + fmt::Display> fmt::Display for QuadTemplate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions = [&self.s, &self.p, &self.o, &self.g];
        for (i, position) in positions.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match position {
                Some(t) => write!(f, "{t}")?,
                None => f.write_str("?")?,
            }
        }
        Ok(())
    }
}
