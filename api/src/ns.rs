//! Standard namespaces.
//!
//! This module provides:
//! * the [`namespace`] macro, for defining static namespaces;
//! * modules corresponding to the namespaces used by the quad store
//!   (generated via the [`namespace`] macro).
//!
//! # Example use
//! ```
//! use rdfquad_api::ns::{rdf, xsd};
//! use rdfquad_api::term::Term;
//!
//! assert_eq!(
//!     xsd::integer.iri().unwrap(),
//!     "http://www.w3.org/2001/XMLSchema#integer",
//! );
//! assert!(rdf::langString.is_named_node());
//! ```
use mownstr::MownStr;
use std::fmt;

#[macro_use]
mod _macro;
mod _term;
pub use _term::*;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
///
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Property,
        Statement,
        // datatypes
        langString,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyType,
        anySimpleType,
            dateTime,
            date,
            boolean,
            float,
            double,
            anyURI,
            string,
            decimal,
                integer,
                    nonPositiveInteger,
                        negativeInteger,
                    long,
                        int,
                            short,
                                byte,
                    nonNegativeInteger,
                        unsignedLong,
                            unsignedInt,
                                unsignedShort,
                                    unsignedByte,
                        positiveInteger
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        // types
        Class,
        Datatype,
        Literal,
        Resource,
        // properties
        comment,
        domain,
        label,
        range,
        seeAlso
    );
}
