//! A [`DataFactory`] builds terms, quads and quad templates.
//!
//! All the types it produces can also be built directly through their own constructors;
//! the factory gathers them behind a single entry point.

use crate::{BlankNode, DefaultGraph, Literal, LiteralValue, NamedNode, RdfQuad, RdfTerm};
use rdfquad_api::template::QuadTemplate;
use rdfquad_api::term::TermError;

/// A factory for [`RdfTerm`]s, [`RdfQuad`]s and [`QuadTemplate`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataFactory;

impl DataFactory {
    /// Build a new data factory.
    pub fn new() -> Self {
        DataFactory
    }

    /// Get a new named node.
    pub fn named_node<T: Into<String>>(&self, iri: T) -> NamedNode {
        NamedNode::new(iri)
    }

    /// Get a new blank node, with a fresh identifier if `id` is `None` or empty.
    pub fn blank_node(&self, id: Option<&str>) -> BlankNode {
        match id {
            Some(id) => BlankNode::new(id),
            None => BlankNode::fresh(),
        }
    }

    /// Get a new literal.
    ///
    /// See [`Literal::new`].
    pub fn literal<V: Into<LiteralValue>>(
        &self,
        value: V,
        lang: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Literal, TermError> {
        Literal::new(value, lang, datatype)
    }

    /// Get the default graph, with an optional label.
    pub fn default_graph(&self, label: Option<&str>) -> DefaultGraph {
        DefaultGraph::new(label)
    }

    /// Get a new quad; `graph` defaults to the default graph.
    ///
    /// See [`RdfQuad::new`].
    pub fn quad<S, P, O>(
        &self,
        subject: S,
        predicate: P,
        object: O,
        graph: Option<RdfTerm>,
    ) -> Result<RdfQuad, TermError>
    where
        S: Into<RdfTerm>,
        P: Into<RdfTerm>,
        O: Into<RdfTerm>,
    {
        RdfQuad::new(subject, predicate, object, graph)
    }

    /// Get a new quad template.
    ///
    /// See [`QuadTemplate::new`].
    pub fn quad_template(
        &self,
        subject: Option<RdfTerm>,
        predicate: Option<RdfTerm>,
        object: Option<RdfTerm>,
        graph: Option<RdfTerm>,
    ) -> Result<QuadTemplate<RdfTerm>, TermError> {
        QuadTemplate::new(subject, predicate, object, graph)
    }
}
