use super::TermKind;
use thiserror::Error;

/// This error is raised when the creation or the use of a term fails.
#[derive(Debug, Error)]
pub enum TermError {
    /// The subject of a quad must be a named node, a blank node or a quad.
    #[error("a {0} can not be used as the subject of a quad")]
    InvalidSubject(TermKind),
    /// The predicate of a quad must be a named node.
    #[error("a {0} can not be used as the predicate of a quad")]
    InvalidPredicate(TermKind),
    /// The object of a quad must be a named node, a blank node, a literal or a quad.
    #[error("a {0} can not be used as the object of a quad")]
    InvalidObject(TermKind),
    /// The graph of a quad must be a named node, a blank node or the default graph.
    #[error("a {0} can not be used as the graph of a quad")]
    InvalidGraph(TermKind),
    /// A language-tagged literal can only have `rdf:langString` as its datatype.
    #[error("a literal with language tag '{lang}' can not have datatype <{datatype}>")]
    LangWithDatatype {
        /// The provided language tag.
        lang: String,
        /// The conflicting datatype IRI.
        datatype: String,
    },
    /// A literal with datatype `rdf:langString` must have a language tag.
    #[error("a literal with datatype rdf:langString must have a language tag")]
    LangStringDatatype,
    /// A literal was expected.
    #[error("a {0} is not a literal")]
    NotALiteral(TermKind),
    /// A datatype IRI can not be empty.
    #[error("the datatype of a literal can not be empty")]
    EmptyDatatype,
    /// A quad template must constrain at least one position.
    #[error("a quad template must have at least one term")]
    EmptyTemplate,
    /// Quoted quads have no scalar value.
    #[error("a quad has no scalar value")]
    NoScalarValue,
}

impl From<std::convert::Infallible> for TermError {
    fn from(_: std::convert::Infallible) -> TermError {
        unreachable!()
    }
}
