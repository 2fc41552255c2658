use super::*;

/// A straightforward implementation of [`Term`] as an enum.
///
/// Blank node identifiers may be stored with or without their `_:` prefix.
#[derive(Clone, Debug)]
pub enum SimpleTerm<'a> {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode(MownStr<'a>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(MownStr<'a>),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal),
    /// with its lexical form and its datatype IRI
    LiteralDatatype(MownStr<'a>, MownStr<'a>),
    /// An RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string),
    /// with its lexical form and its language tag
    LiteralLanguage(MownStr<'a>, MownStr<'a>),
    /// The default graph
    DefaultGraph,
    /// A quoted quad (subject, predicate, object, graph)
    Quad(Box<[Self; 4]>),
}

use SimpleTerm::*;

impl<'a> Term for SimpleTerm<'a> {
    type BorrowTerm<'x>
        = &'x Self
    where
        'a: 'x;

    fn kind(&self) -> TermKind {
        match self {
            NamedNode(_) => TermKind::NamedNode,
            BlankNode(_) => TermKind::BlankNode,
            LiteralDatatype(..) | LiteralLanguage(..) => TermKind::Literal,
            DefaultGraph => TermKind::DefaultGraph,
            Quad(_) => TermKind::Quad,
        }
    }
    fn iri(&self) -> Option<MownStr> {
        if let NamedNode(iri) = self {
            Some(MownStr::from(&iri[..]))
        } else {
            None
        }
    }
    fn bnode_id(&self) -> Option<MownStr> {
        if let BlankNode(id) = self {
            Some(MownStr::from(&id[..]))
        } else {
            None
        }
    }
    fn lexical_form(&self) -> Option<MownStr> {
        match self {
            LiteralDatatype(lex, _) | LiteralLanguage(lex, _) => Some(MownStr::from(&lex[..])),
            _ => None,
        }
    }
    fn datatype(&self) -> Option<MownStr> {
        match self {
            LiteralDatatype(_, dt) => Some(MownStr::from(&dt[..])),
            LiteralLanguage(..) => Some(MownStr::from(&RDF_LANG_STRING[..])),
            _ => None,
        }
    }
    fn language_tag(&self) -> Option<MownStr> {
        if let LiteralLanguage(_, tag) = self {
            Some(MownStr::from(&tag[..]))
        } else {
            None
        }
    }
    fn quad(&self) -> Option<[Self::BorrowTerm<'_>; 4]> {
        if let Quad(quad) = self {
            let [s, p, o, g] = quad.as_ref();
            Some([s, p, o, g])
        } else {
            None
        }
    }
    fn to_quad(self) -> Option<[Self; 4]> {
        if let Quad(quad) = self {
            Some(*quad)
        } else {
            None
        }
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}

fn owned(txt: Option<MownStr>) -> MownStr<'static> {
    MownStr::from(txt.map(|txt| txt.to_string()).unwrap_or_default())
}

impl FromTerm for SimpleTerm<'static> {
    fn from_term<T: Term>(term: T) -> Self {
        match term.kind() {
            TermKind::NamedNode => NamedNode(owned(term.iri())),
            TermKind::BlankNode => BlankNode(owned(term.bnode_id())),
            TermKind::Literal => {
                let lex = owned(term.lexical_form());
                match term.language_tag() {
                    Some(tag) => LiteralLanguage(lex, owned(Some(tag))),
                    None => LiteralDatatype(lex, owned(term.datatype())),
                }
            }
            TermKind::DefaultGraph => DefaultGraph,
            TermKind::Quad => match term.quad() {
                Some(spog) => Quad(Box::new(spog.map(Self::from_term))),
                None => unreachable!("a term of kind Quad must return its quad"),
            },
        }
    }
}

impl TryFromTerm for SimpleTerm<'static> {
    type Error = std::convert::Infallible;

    fn try_from_term<T: Term>(term: T) -> Result<Self, Self::Error> {
        Ok(Self::from_term(term))
    }
}

impl<'a> SimpleTerm<'a> {
    /// Build a [`SimpleTerm`] of kind [`Quad`](TermKind::Quad) from any quad.
    pub fn from_quad<Q: crate::quad::Quad>(quad: Q) -> SimpleTerm<'static> {
        SimpleTerm::Quad(Box::new([
            quad.s().into_term(),
            quad.p().into_term(),
            quad.o().into_term(),
            quad.g().into_term(),
        ]))
    }
}

impl<T: Term> PartialEq<T> for SimpleTerm<'_> {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other.borrow_term())
    }
}

impl Eq for SimpleTerm<'_> {}

impl std::hash::Hash for SimpleTerm<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}
