//! A [`Filter`] selects quads in a [`Dataset`].
//!
//! Every filter is turned into a single predicate (see [`Filter::into_predicate`])
//! before the dataset is scanned.
//!
//! Filters are usually not built explicitly,
//! but converted from the value passed to a [`Dataset`] method:
//! * a quad (an [`RdfQuad`], or an array of four terms of any implementation)
//!   selects the quads equal to it;
//! * a [`QuadTemplate`] selects the quads it matches;
//! * a `Vec` of quads, or another [`Dataset`], selects the quads equal to any of its quads.
use crate::{CallbackError, Dataset};
use rdfquad_api::quad::Quad;
use rdfquad_api::template::QuadTemplate;
use rdfquad_api::term::Term;
use rdfquad_term::{RdfQuad, RdfTerm};
use std::fmt;

/// The predicate function to which any [`Filter`] is normalised.
pub type Predicate<'a> =
    Box<dyn FnMut(&RdfQuad, &Dataset) -> Result<bool, CallbackError> + 'a>;

/// Selects quads in a [`Dataset`].
pub enum Filter<'a> {
    /// Selects the quads equal to this one
    Quad([RdfTerm; 4]),
    /// Selects the quads matched by this template
    Template(QuadTemplate<RdfTerm>),
    /// Selects the quads equal to any of these
    AnyOf(Vec<[RdfTerm; 4]>),
    /// Selects the quads for which this function returns `true`
    Predicate(Predicate<'a>),
}

impl<'a> Filter<'a> {
    /// Build a filter from an infallible predicate.
    pub fn predicate<F>(mut f: F) -> Self
    where
        F: FnMut(&RdfQuad, &Dataset) -> bool + 'a,
    {
        Filter::Predicate(Box::new(move |q: &RdfQuad, d: &Dataset| Ok(f(q, d))))
    }

    /// Build a filter from a fallible predicate.
    ///
    /// Errors returned by `f` are propagated by the [`Dataset`] method using this filter
    /// as [`DatasetError::Callback`](crate::DatasetError::Callback).
    pub fn try_predicate<F, E>(mut f: F) -> Self
    where
        F: FnMut(&RdfQuad, &Dataset) -> Result<bool, E> + 'a,
        E: Into<CallbackError>,
    {
        Filter::Predicate(Box::new(move |q: &RdfQuad, d: &Dataset| {
            f(q, d).map_err(Into::into)
        }))
    }

    /// Build a filter selecting the quads equal to `quad`,
    /// whatever the [`Term`] implementation it uses.
    ///
    /// An invalid quad can not be in a dataset, so it selects nothing.
    pub fn quad<Q: Quad>(quad: Q) -> Self {
        match copy_quad(quad) {
            Some(spog) => Filter::Quad(spog),
            None => Filter::AnyOf(vec![]),
        }
    }

    /// Build a filter selecting the quads equal to any of `quads`,
    /// whatever the [`Term`] implementation they use.
    ///
    /// Invalid quads are ignored.
    pub fn any_of<I>(quads: I) -> Self
    where
        I: IntoIterator,
        I::Item: Quad,
    {
        Filter::AnyOf(quads.into_iter().filter_map(copy_quad).collect())
    }

    /// Build a filter selecting the quads matched by `template`,
    /// whatever the [`Term`] implementation it uses.
    ///
    /// A template holding an invalid literal selects nothing.
    pub fn template<T: Term>(template: &QuadTemplate<T>) -> Self {
        match template.try_to_template() {
            Ok(template) => Filter::Template(template),
            Err(_) => Filter::AnyOf(vec![]),
        }
    }

    /// Turn this filter into a single predicate function.
    pub fn into_predicate(self) -> Predicate<'a> {
        match self {
            Filter::Quad(spog) => {
                Box::new(move |q: &RdfQuad, _: &Dataset| Ok(Quad::eq(q, &spog)))
            }
            Filter::Template(template) => {
                Box::new(move |q: &RdfQuad, _: &Dataset| Ok(template.matches(q)))
            }
            Filter::AnyOf(quads) => Box::new(move |q: &RdfQuad, _: &Dataset| {
                Ok(quads.iter().any(|spog| Quad::eq(q, spog)))
            }),
            Filter::Predicate(f) => f,
        }
    }
}

fn copy_quad<Q: Quad>(quad: Q) -> Option<[RdfTerm; 4]> {
    RdfQuad::try_from_quad(quad).ok().map(RdfQuad::into_terms)
}

impl fmt::Debug for Filter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Quad(spog) => f.debug_tuple("Quad").field(spog).finish(),
            Filter::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Filter::AnyOf(quads) => f.debug_tuple("AnyOf").field(quads).finish(),
            Filter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<'a> From<RdfQuad> for Filter<'a> {
    fn from(other: RdfQuad) -> Self {
        Filter::Quad(other.into_terms())
    }
}

impl<'a> From<&RdfQuad> for Filter<'a> {
    fn from(other: &RdfQuad) -> Self {
        Filter::Quad(other.terms().map(Clone::clone))
    }
}

impl<'a, T: Term> From<[T; 4]> for Filter<'a> {
    fn from(other: [T; 4]) -> Self {
        Filter::quad(other)
    }
}

impl<'a, T: Term> From<QuadTemplate<T>> for Filter<'a> {
    fn from(other: QuadTemplate<T>) -> Self {
        Filter::template(&other)
    }
}

impl<'a, T: Term> From<&QuadTemplate<T>> for Filter<'a> {
    fn from(other: &QuadTemplate<T>) -> Self {
        Filter::template(other)
    }
}

impl<'a> From<Vec<RdfQuad>> for Filter<'a> {
    fn from(other: Vec<RdfQuad>) -> Self {
        Filter::AnyOf(other.into_iter().map(RdfQuad::into_terms).collect())
    }
}

impl<'a> From<&Dataset> for Filter<'a> {
    fn from(other: &Dataset) -> Self {
        Filter::any_of(other.iter())
    }
}
