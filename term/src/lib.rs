//! I define the reference implementation of [`rdfquad_api::term::Term`]
//! and [`rdfquad_api::quad::Quad`]:
//! * [`NamedNode`], [`BlankNode`], [`Literal`] and [`DefaultGraph`], one type per kind of term;
//! * [`RdfTerm`], a tagged union of the above, which can also hold a quoted [`RdfQuad`];
//! * [`RdfQuad`], a quad of [`RdfTerm`]s that is always valid;
//! * [`DataFactory`], building all of the above as well as quad templates.
//!
//! All these types display themselves in an N-Quads-like syntax.
#![deny(missing_docs)]

mod blank_node;
pub use blank_node::*;
mod default_graph;
pub use default_graph::*;
mod literal;
pub use literal::{Literal, LiteralValue};
mod named_node;
pub use named_node::*;
mod quad;
pub use quad::*;
mod _term;
pub use _term::*;
mod _display;
pub mod factory;
pub use factory::DataFactory;
