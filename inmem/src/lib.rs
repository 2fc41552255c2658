//! This crate is part of `rdfquad`,
//! an in-memory store of [RDF] quads.
//!
//! It provides the [`Dataset`] engine:
//! an ordered, duplicate-free collection of quads,
//! queried and mutated through [`Filter`]s.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

mod _error;
pub use _error::*;
pub mod dataset;
pub use dataset::Dataset;
pub mod filter;
pub use filter::Filter;
