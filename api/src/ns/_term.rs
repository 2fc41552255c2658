use super::*;
use crate::term::{Term, TermKind};

/// A [`Term`] produced by the [`namespace`](crate::namespace) macro.
///
/// The IRI is stored in two parts (namespace and suffix),
/// so that the namespace string is shared by all the terms of a module.
#[derive(Clone, Copy, Debug)]
pub struct NsTerm<'a> {
    pub(crate) ns: &'a str,
    pub(crate) suffix: &'a str,
}

impl fmt::Display for NsTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ns, self.suffix)
    }
}

impl<'a> NsTerm<'a> {
    /// Make an NsTerm without checking that it produces a well formed IRI.
    pub const fn new_unchecked(ns: &'a str, suffix: &'a str) -> Self {
        NsTerm { ns, suffix }
    }

    /// The namespace part of this term's IRI.
    pub fn ns(&self) -> &'a str {
        self.ns
    }

    /// The suffix part of this term's IRI.
    pub fn suffix(&self) -> &'a str {
        self.suffix
    }
}

impl<'a> Term for NsTerm<'a> {
    type BorrowTerm<'x>
        = &'x Self
    where
        'a: 'x;

    fn kind(&self) -> TermKind {
        TermKind::NamedNode
    }
    fn iri(&self) -> Option<MownStr<'_>> {
        Some(if self.suffix.is_empty() {
            MownStr::from(self.ns)
        } else {
            MownStr::from(self.to_string())
        })
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
    fn eq<T: Term>(&self, other: T) -> bool {
        match other.iri() {
            Some(iri) => {
                let ns = self.ns;
                iri.starts_with(ns) && &iri[ns.len()..] == self.suffix
            }
            None => false,
        }
    }
}

impl<'a, T: Term> PartialEq<T> for NsTerm<'a> {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other.borrow_term())
    }
}

impl<'a> Eq for NsTerm<'a> {}

impl<'a> std::hash::Hash for NsTerm<'a> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}

/// Check that `iri` is non-empty, and contains no whitespace nor angle brackets.
///
/// IRIs are not otherwise validated in this crate.
pub fn is_well_formed(iri: &str) -> bool {
    !iri.is_empty() && !iri.chars().any(|c| c.is_whitespace() || c == '<' || c == '>')
}
