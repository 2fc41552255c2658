//! An in-memory store of [RDF] statements, or *quads*.
//!
//! A quad is made of four [term]s:
//! a subject, a predicate, an object and a graph,
//! the latter being either a named graph or the default graph.
//! Quads are collected in a [`Dataset`](inmem::Dataset),
//! which can be queried and mutated through [filters](inmem::Filter),
//! and combined with other datasets.
//!
//! This crate re-exports the crates it is made of:
//! * [`api`] defines the [`Term`](api::term::Term) and [`Quad`](api::quad::Quad) traits,
//!   as well as [quad templates](api::template::QuadTemplate);
//! * [`term`] provides the reference implementation of terms and quads;
//! * [`inmem`] provides the dataset engine.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [term]: api::term
//!
//! # Getting Started
//!
//! ```
//! use rdfquad::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let f = DataFactory::new();
//! let alice = f.named_node("http://example.org/alice");
//! let name = f.named_node("http://xmlns.com/foaf/0.1/name");
//!
//! let mut dataset = Dataset::new();
//! dataset.append(f.quad(alice.clone(), name.clone(), f.literal("Alice", None, None)?, None)?)?;
//! dataset.append(f.quad(alice.clone(), name, f.literal("Alicia", Some("es"), None)?, None)?)?;
//!
//! let alice_facts = f.quad_template(Some(alice.into()), None, None, None)?;
//! assert_eq!(dataset.copy(&alice_facts)?.len(), 2);
//! assert!(dataset.get(&alice_facts).is_err()); // ambiguous
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs)]

pub use rdfquad_api as api;
pub use rdfquad_inmem as inmem;
pub use rdfquad_term as term;

pub mod prelude {
    //! Re-exports the most commonly used items.
    pub use rdfquad_api::prelude::*;
    pub use rdfquad_inmem::{DResult, Dataset, DatasetError, Filter};
    pub use rdfquad_term::{
        BlankNode, DataFactory, DefaultGraph, Literal, LiteralValue, NamedNode, RdfQuad, RdfTerm,
    };
}
