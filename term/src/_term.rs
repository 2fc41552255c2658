// this module is transparently re-exported by its parent `lib`

use crate::{BlankNode, DefaultGraph, Literal, NamedNode, RdfQuad};
use rdfquad_api::term::{Term, TermError, TermKind, TryFromTerm, Value, ValueCast};
use rdfquad_api::MownStr;

/// Any term that can appear in an [`RdfQuad`].
#[derive(Clone, Debug)]
pub enum RdfTerm {
    /// A [named node](NamedNode)
    NamedNode(NamedNode),
    /// A [blank node](BlankNode)
    BlankNode(BlankNode),
    /// A [literal](Literal)
    Literal(Literal),
    /// The [default graph](DefaultGraph)
    DefaultGraph(DefaultGraph),
    /// A quoted [quad](RdfQuad)
    Quad(Box<RdfQuad>),
}

impl RdfTerm {
    /// Return the inner [`NamedNode`], if any.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            RdfTerm::NamedNode(n) => Some(n),
            _ => None,
        }
    }

    /// Return the inner [`BlankNode`], if any.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            RdfTerm::BlankNode(b) => Some(b),
            _ => None,
        }
    }

    /// Return the inner [`Literal`], if any.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            RdfTerm::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Return the inner [`RdfQuad`], if any.
    pub fn as_rdf_quad(&self) -> Option<&RdfQuad> {
        match self {
            RdfTerm::Quad(q) => Some(q),
            _ => None,
        }
    }
}

impl Term for RdfTerm {
    type BorrowTerm<'x> = &'x Self;

    fn kind(&self) -> TermKind {
        match self {
            RdfTerm::NamedNode(_) => TermKind::NamedNode,
            RdfTerm::BlankNode(_) => TermKind::BlankNode,
            RdfTerm::Literal(_) => TermKind::Literal,
            RdfTerm::DefaultGraph(_) => TermKind::DefaultGraph,
            RdfTerm::Quad(_) => TermKind::Quad,
        }
    }
    fn iri(&self) -> Option<MownStr> {
        self.as_named_node().and_then(Term::iri)
    }
    fn bnode_id(&self) -> Option<MownStr> {
        self.as_blank_node().and_then(Term::bnode_id)
    }
    fn lexical_form(&self) -> Option<MownStr> {
        self.as_literal().and_then(Term::lexical_form)
    }
    fn datatype(&self) -> Option<MownStr> {
        self.as_literal().and_then(Term::datatype)
    }
    fn language_tag(&self) -> Option<MownStr> {
        self.as_literal().and_then(Term::language_tag)
    }
    fn quad(&self) -> Option<[Self::BorrowTerm<'_>; 4]> {
        self.as_rdf_quad().map(RdfQuad::terms)
    }
    fn to_quad(self) -> Option<[Self; 4]> {
        match self {
            RdfTerm::Quad(q) => Some((*q).into_terms()),
            _ => None,
        }
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
    fn value(&self, cast: ValueCast) -> Result<Value<'_>, TermError> {
        match self {
            RdfTerm::NamedNode(n) => n.value(cast),
            RdfTerm::BlankNode(b) => b.value(cast),
            RdfTerm::Literal(l) => l.value(cast),
            RdfTerm::DefaultGraph(g) => g.value(cast),
            RdfTerm::Quad(_) => Err(TermError::NoScalarValue),
        }
    }
}

/// Copying a term from another implementation validates it:
/// literals must obey the rules of [`Literal::new`],
/// and quoted quads must hold terms allowed at their positions.
impl TryFromTerm for RdfTerm {
    type Error = TermError;

    fn try_from_term<T: Term>(term: T) -> Result<Self, TermError> {
        Ok(match term.kind() {
            TermKind::NamedNode => {
                NamedNode::new(term.iri().map(|iri| iri.to_string()).unwrap_or_default()).into()
            }
            TermKind::BlankNode => {
                BlankNode::new(term.bnode_id().map(|id| id.to_string()).unwrap_or_default())
                    .into()
            }
            TermKind::Literal => Literal::from_literal_term(term.borrow_term())?.into(),
            TermKind::DefaultGraph => {
                let label = match term.value(ValueCast::Raw) {
                    Ok(Value::Text(txt)) if &*txt != rdfquad_api::term::DEFAULT_GRAPH_VALUE => {
                        Some(txt.to_string())
                    }
                    _ => None,
                };
                DefaultGraph::new(label.as_deref()).into()
            }
            TermKind::Quad => match term.quad() {
                Some(spog) => RdfQuad::try_from_quad(spog)?.into(),
                None => unreachable!("a term of kind Quad must return its quad"),
            },
        })
    }
}

impl From<NamedNode> for RdfTerm {
    fn from(other: NamedNode) -> Self {
        RdfTerm::NamedNode(other)
    }
}

impl From<BlankNode> for RdfTerm {
    fn from(other: BlankNode) -> Self {
        RdfTerm::BlankNode(other)
    }
}

impl From<Literal> for RdfTerm {
    fn from(other: Literal) -> Self {
        RdfTerm::Literal(other)
    }
}

impl From<DefaultGraph> for RdfTerm {
    fn from(other: DefaultGraph) -> Self {
        RdfTerm::DefaultGraph(other)
    }
}

impl From<RdfQuad> for RdfTerm {
    fn from(other: RdfQuad) -> Self {
        RdfTerm::Quad(Box::new(other))
    }
}

impl<T: Term> PartialEq<T> for RdfTerm {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other.borrow_term())
    }
}

impl Eq for RdfTerm {}

impl std::hash::Hash for RdfTerm {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfquad_api::ns::xsd;
    use rdfquad_api::term::{assert_consistent_term_impl, SimpleTerm};

    fn quoted() -> RdfQuad {
        RdfQuad::new(
            NamedNode::new("tag:s"),
            NamedNode::new("tag:p"),
            Literal::new("o", Some("en"), None).unwrap(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn all_variants_are_consistent() {
        let terms: Vec<RdfTerm> = vec![
            NamedNode::new("tag:n").into(),
            BlankNode::new("b").into(),
            Literal::new(42_i32, None, None).unwrap().into(),
            DefaultGraph::default().into(),
            quoted().into(),
        ];
        for t in &terms {
            assert_consistent_term_impl(t);
        }
    }

    #[test]
    fn quad_value_fails() {
        let t: RdfTerm = quoted().into();
        assert!(matches!(
            t.value(ValueCast::Raw),
            Err(TermError::NoScalarValue)
        ));
    }

    #[test]
    fn literal_value_is_forwarded() {
        let t: RdfTerm = Literal::new(true, None, None).unwrap().into();
        assert_eq!(t.value(ValueCast::Raw).unwrap(), Value::Boolean(true));
    }

    #[test]
    fn copy_from_simple_term() {
        let src = SimpleTerm::Quad(Box::new([
            SimpleTerm::BlankNode("s".into()),
            SimpleTerm::NamedNode("tag:p".into()),
            SimpleTerm::LiteralDatatype("3".into(), xsd::integer.to_string().into()),
            SimpleTerm::DefaultGraph,
        ]));
        let copy: RdfTerm = src.borrow_term().try_into_term().unwrap();
        assert_eq!(copy, src);
        let q = copy.as_rdf_quad().unwrap();
        assert_eq!(q.subject().bnode_id().unwrap(), "_:s");
        assert_eq!(
            q.object().value(ValueCast::Datatype).unwrap(),
            Value::Integer(3)
        );
    }

    #[test]
    fn copy_from_native() {
        let copy: RdfTerm = 2.5_f64.try_into_term().unwrap();
        assert_eq!(copy, 2.5_f64);
        assert_eq!(copy.value(ValueCast::Raw).unwrap(), Value::Decimal(2.5));
    }

    #[test]
    fn copy_rejects_invalid_literals() {
        let lang_string = rdfquad_api::ns::rdf::langString.to_string();
        let src = SimpleTerm::LiteralDatatype("x".into(), lang_string.as_str().into());
        assert!(matches!(
            RdfTerm::try_from_term(&src),
            Err(TermError::LangStringDatatype)
        ));
        let nested = SimpleTerm::Quad(Box::new([
            SimpleTerm::NamedNode("tag:s".into()),
            SimpleTerm::NamedNode("tag:p".into()),
            src,
            SimpleTerm::DefaultGraph,
        ]));
        assert!(matches!(
            RdfTerm::try_from_term(&nested),
            Err(TermError::LangStringDatatype)
        ));
    }
}
