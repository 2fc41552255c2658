//! This crate defines the generic API of the `rdfquad` in-memory quad store:
//! how [terms](term), [quads](quad) and [quad templates](template) are represented,
//! independently of any concrete implementation.
//!
//! See the `rdfquad_term` crate for the concrete term and quad types,
//! and the `rdfquad_inmem` crate for the dataset.

pub mod ns;
pub mod prelude;
pub mod quad;
pub mod template;
pub mod term;

pub use mownstr::MownStr;
