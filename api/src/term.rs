//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes),
//! [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal),
//! the default graph and quoted quads)
//! are represented in the quad store.
//!
//! I provide the main trait [`Term`],
//! and a number of auxiliary types and traits, such as [`TermKind`], [`FromTerm`]...
use crate::quad::Quad;
use mownstr::MownStr;
use std::hash::Hash;

mod _error;
pub use _error::*;
mod _native_literal;
mod _simple;
pub use _simple::*;
mod _value;
pub use _value::*;

lazy_static::lazy_static! {
    /// The IRI of `rdf:langString`.
    pub static ref RDF_LANG_STRING: Box<str> = crate::ns::rdf::langString.to_string().into();
    /// The IRI of `xsd:boolean`.
    pub static ref XSD_BOOLEAN: Box<str> = crate::ns::xsd::boolean.to_string().into();
    /// The IRI of `xsd:decimal`.
    pub static ref XSD_DECIMAL: Box<str> = crate::ns::xsd::decimal.to_string().into();
    /// The IRI of `xsd:double`.
    pub static ref XSD_DOUBLE: Box<str> = crate::ns::xsd::double.to_string().into();
    /// The IRI of `xsd:float`.
    pub static ref XSD_FLOAT: Box<str> = crate::ns::xsd::float.to_string().into();
    /// The IRI of `xsd:integer`.
    pub static ref XSD_INTEGER: Box<str> = crate::ns::xsd::integer.to_string().into();
    /// The IRI of `xsd:string`.
    pub static ref XSD_STRING: Box<str> = crate::ns::xsd::string.to_string().into();
}

/// The scalar value reported by the default graph
/// when it carries no label.
pub const DEFAULT_GRAPH_VALUE: &str = "DefaultGraph";

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// The [default graph](https://www.w3.org/TR/rdf11-concepts/#dfn-default-graph) of a dataset
    DefaultGraph,
    /// A quad used as a term (quoted quad)
    Quad,
}

impl std::fmt::Display for TermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let txt = match self {
            TermKind::NamedNode => "named node",
            TermKind::BlankNode => "blank node",
            TermKind::Literal => "literal",
            TermKind::DefaultGraph => "default graph",
            TermKind::Quad => "quad",
        };
        f.write_str(txt)
    }
}

/// An RDF term, or the default graph, or a quoted quad.
///
/// # Implementation
///
/// The only methods without a default implementation are [`kind`](Term::kind)
/// and [`borrow_term`](Term::borrow_term).
/// [`kind`](Term::kind) indicates what kind of term a given [`Term`] represents.
///
/// While all other methods have a default implementation (returning `None`),
/// those corresponding to the supported kinds MUST be overridden accordingly,
/// otherwise they will panic.
///
/// # Design rationale
///
/// The methods defined by this trait are not independent:
/// depending on the value returned by [`kind`](Term::kind),
/// other methods are expected to return `Some(...)` or `None` accordingly.
///
/// The [`MownStr`] returned by, e.g., [`iri`](Term::iri) or [`lexical_form`](Term::lexical_form),
/// can be allocated *on demand* by some implementations,
/// so they are not stored in the variants of [`TermKind`].
pub trait Term: std::fmt::Debug {
    /// A type of [`Term`] that can be borrowed from this type
    /// (i.e. that can be obtained from a simple reference to this type).
    /// It is used in particular for accessing constituents of quoted quads ([`Term::quad`])
    /// or for sharing this term with a function that expects `T: Term` (rather than `&T`).
    ///
    /// In "standard" cases, this type is `&Self`.
    /// Exceptions, where this type is `Self` instead, are
    /// * some [`Term`] implementations implementing [`Copy`];
    /// * in particular, the implementation of [`Term`] by *references* to "standard" [`Term`] implementations.
    ///
    /// # Note to implementors
    /// When in doubt, set this to `&Self`.
    type BorrowTerm<'x>: Term + Copy
    where
        Self: 'x;

    /// Return the kind of term that this [`Term`] represents.
    fn kind(&self) -> TermKind;

    /// Return true if this [`Term`] is a named node (IRI),
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::NamedNode`].
    #[inline]
    fn is_named_node(&self) -> bool {
        self.kind() == TermKind::NamedNode
    }

    /// Return true if this [`Term`] is a blank node,
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::BlankNode`].
    #[inline]
    fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Return true if this [`Term`] is a literal,
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::Literal`].
    #[inline]
    fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// Return true if this [`Term`] is the default graph,
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::DefaultGraph`].
    #[inline]
    fn is_default_graph(&self) -> bool {
        self.kind() == TermKind::DefaultGraph
    }

    /// Return true if this [`Term`] is a quoted quad,
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::Quad`].
    #[inline]
    fn is_quad(&self) -> bool {
        self.kind() == TermKind::Quad
    }

    /// Return true if this [`Term`] is not a quoted quad.
    #[inline]
    fn is_atom(&self) -> bool {
        !self.is_quad()
    }

    /// If [`kind`](Term::kind) returns [`TermKind::NamedNode`],
    /// return this IRI.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_named_node`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn iri(&self) -> Option<MownStr> {
        self.is_named_node()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::BlankNode`],
    /// return the identifier of this blank node.
    /// Otherwise return `None`.
    ///
    /// The identifier may or may not carry the `_:` prefix;
    /// [`Term::eq`] and [`Term::hash`] ignore it.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_blank_node`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn bnode_id(&self) -> Option<MownStr> {
        self.is_blank_node()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the lexical form of this literal.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_literal`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn lexical_form(&self) -> Option<MownStr> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the datatype IRI of this literal.
    /// Otherwise return `None`.
    ///
    /// NB: if this literal is a language-tagged string,
    /// then this method MUST return `http://www.w3.org/1999/02/22-rdf-syntax-ns#langString`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_literal`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn datatype(&self) -> Option<MownStr> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// and if this literal is a language-tagged string,
    /// return its language tag.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_literal`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn language_tag(&self) -> Option<MownStr> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Quad`],
    /// return the subject, predicate, object and graph of this quad.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_quad`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn quad(&self) -> Option<[Self::BorrowTerm<'_>; 4]> {
        self.is_quad()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Quad`],
    /// return this quad, consuming this term.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_quad`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn to_quad(self) -> Option<[Self; 4]>
    where
        Self: Sized,
    {
        self.is_quad()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// Get something implementing [`Term`] from a simple reference to `self`.
    ///
    /// See [`Term::BorrowTerm`] for more detail.
    fn borrow_term(&self) -> Self::BorrowTerm<'_>;

    /// Check whether `self` and `other` represent the same term.
    ///
    /// * named nodes are equal if their IRIs are equal;
    /// * blank nodes are equal if their identifiers are equal, ignoring any `_:` prefix;
    /// * literals are equal if their lexical forms, language tags and datatypes are equal;
    /// * any two default graphs are equal, regardless of their labels;
    /// * quoted quads are equal if their four components are pairwise equal.
    fn eq<T: Term>(&self, other: T) -> bool {
        let k1 = self.kind();
        let k2 = other.kind();
        if k1 != k2 {
            return false;
        }
        match k1 {
            TermKind::NamedNode => self.iri() == other.iri(),
            TermKind::BlankNode => match (self.bnode_id(), other.bnode_id()) {
                (Some(id1), Some(id2)) => strip_bnode_prefix(&id1) == strip_bnode_prefix(&id2),
                _ => false,
            },
            TermKind::Literal => {
                self.lexical_form() == other.lexical_form()
                    && self.language_tag() == other.language_tag()
                    && self.datatype() == other.datatype()
            }
            TermKind::DefaultGraph => true,
            TermKind::Quad => match (self.quad(), other.quad()) {
                (Some(q1), Some(q2)) => Quad::eq(&q1, q2),
                _ => false,
            },
        }
    }

    /// Compute an implementation-independent hash of this term,
    /// consistent with [`Term::eq`].
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let k = self.kind();
        k.hash(state);
        match k {
            TermKind::NamedNode => {
                if let Some(iri) = self.iri() {
                    Hash::hash(&*iri, state)
                }
            }
            TermKind::BlankNode => {
                if let Some(id) = self.bnode_id() {
                    Hash::hash(strip_bnode_prefix(&id), state)
                }
            }
            TermKind::Literal => {
                if let Some(lex) = self.lexical_form() {
                    Hash::hash(&*lex, state);
                }
                match self.language_tag() {
                    None => {
                        if let Some(dt) = self.datatype() {
                            Hash::hash(&*dt, state);
                        }
                    }
                    Some(tag) => {
                        '@'.hash(state);
                        Hash::hash(&*tag, state);
                    }
                }
            }
            TermKind::DefaultGraph => (),
            TermKind::Quad => {
                if let Some(q) = self.quad() {
                    Quad::hash(&q, state);
                }
            }
        }
    }

    /// Return the scalar value of this term.
    ///
    /// * named nodes yield their IRI, blank nodes their identifier;
    /// * the default graph yields its label, or [`DEFAULT_GRAPH_VALUE`];
    /// * literals are converted according to `cast` (see [`ValueCast`]);
    /// * quoted quads have no scalar value, and yield [`TermError::NoScalarValue`].
    ///
    /// # Note to implementors
    /// The default implementation has no access to the native value a literal was built from,
    /// so [`ValueCast::Raw`] behaves like [`ValueCast::LexicalForm`].
    /// Implementations that retain the native value should override this method.
    fn value(&self, cast: ValueCast) -> Result<Value<'_>, TermError> {
        match self.kind() {
            TermKind::NamedNode => Ok(Value::Text(self.iri().unwrap_or_else(empty))),
            TermKind::BlankNode => Ok(Value::Text(self.bnode_id().unwrap_or_else(empty))),
            TermKind::DefaultGraph => Ok(Value::Text(MownStr::from(DEFAULT_GRAPH_VALUE))),
            TermKind::Literal => {
                let lex = self.lexical_form().unwrap_or_else(empty);
                match cast {
                    ValueCast::LexicalForm | ValueCast::Raw => Ok(Value::Text(lex)),
                    ValueCast::Datatype => {
                        let dt = self.datatype().unwrap_or_else(empty);
                        Ok(Value::from_lexical(lex, &dt))
                    }
                }
            }
            TermKind::Quad => Err(TermError::NoScalarValue),
        }
    }

    /// Convert this term in another type.
    ///
    /// This method is to [`FromTerm`] what [`Into::into`] is to [`From`].
    ///
    /// NB: if you want to make a *copy* of this term without consuming it,
    /// you can use `this_term.`[`borrow_term`](Term::borrow_term)`().into_term::<T>()`.
    #[inline]
    fn into_term<T: FromTerm>(self) -> T
    where
        Self: Sized,
    {
        T::from_term(self)
    }

    /// Try to convert this term into another type.
    ///
    /// This method is to [`TryFromTerm`] what [`TryInto::try_into`] is to [`TryFrom`].
    #[inline]
    fn try_into_term<T: TryFromTerm>(self) -> Result<T, T::Error>
    where
        Self: Sized,
    {
        T::try_from_term(self)
    }
}

impl<'a, T> Term for &'a T
where
    T: Term<BorrowTerm<'a> = &'a T> + ?Sized,
{
    type BorrowTerm<'x>
        = Self
    where
        'a: 'x;

    fn kind(&self) -> TermKind {
        (*self).kind()
    }
    fn is_named_node(&self) -> bool {
        (*self).is_named_node()
    }
    fn is_blank_node(&self) -> bool {
        (*self).is_blank_node()
    }
    fn is_literal(&self) -> bool {
        (*self).is_literal()
    }
    fn is_default_graph(&self) -> bool {
        (*self).is_default_graph()
    }
    fn is_quad(&self) -> bool {
        (*self).is_quad()
    }
    fn iri(&self) -> Option<MownStr> {
        (*self).iri()
    }
    fn bnode_id(&self) -> Option<MownStr> {
        (*self).bnode_id()
    }
    fn lexical_form(&self) -> Option<MownStr> {
        (*self).lexical_form()
    }
    fn datatype(&self) -> Option<MownStr> {
        (*self).datatype()
    }
    fn language_tag(&self) -> Option<MownStr> {
        (*self).language_tag()
    }
    fn quad(&self) -> Option<[Self::BorrowTerm<'_>; 4]> {
        (*self).quad()
    }
    fn to_quad(self) -> Option<[Self; 4]> {
        (*self).quad()
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        *self
    }
    fn eq<U: Term>(&self, other: U) -> bool {
        (*self).eq(other)
    }
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self).hash(state)
    }
    fn value(&self, cast: ValueCast) -> Result<Value<'_>, TermError> {
        (*self).value(cast)
    }
}

/// Strip the `_:` prefix (if any) from a blank node identifier.
pub fn strip_bnode_prefix(id: &str) -> &str {
    id.strip_prefix("_:").unwrap_or(id)
}

fn empty<'a>() -> MownStr<'a> {
    MownStr::from("")
}

//

/// A type that can be built from any term.
///
/// See also [`TryFromTerm`]
pub trait FromTerm: Sized {
    /// Copy `term` into an instance of this type.
    fn from_term<T: Term>(term: T) -> Self;
}

/// A type that can be built from some terms.
///
/// See also [`FromTerm`]
pub trait TryFromTerm: Sized {
    /// The error type produced when failing to copy a given term
    type Error: 'static + std::error::Error;
    /// Try to copy `term` into an instance of this type.
    fn try_from_term<T: Term>(term: T) -> Result<Self, Self::Error>;
}

/// Test that the given term is consistent in its implementation of the [`Term`] trait.
///
/// NB: it may be necessary to explicitly specify the parameter `T`,
/// even when the type of `t` is known. E.g.: ``assert_consistent_term_impl::<MyTerm>(&t)``.
#[cfg(any(test, feature = "test_macro"))]
pub fn assert_consistent_term_impl<T>(t: &T)
where
    T: Term + Clone,
{
    let k = t.kind();
    if k == TermKind::NamedNode {
        assert!(t.is_named_node());
        assert!(t.iri().is_some());
    } else {
        assert!(!t.is_named_node());
        assert!(t.iri().is_none());
    }
    if k == TermKind::BlankNode {
        assert!(t.is_blank_node());
        assert!(t.bnode_id().is_some());
    } else {
        assert!(!t.is_blank_node());
        assert!(t.bnode_id().is_none());
    }
    if k == TermKind::Literal {
        assert!(t.is_literal());
        assert!(t.lexical_form().is_some());
        assert!(t.datatype().is_some());
        if t.datatype().as_deref() == Some(&RDF_LANG_STRING[..]) {
            assert!(t.language_tag().is_some());
        } else {
            assert!(t.language_tag().is_none());
        }
    } else {
        assert!(!t.is_literal());
        assert!(t.lexical_form().is_none());
        assert!(t.datatype().is_none());
        assert!(t.language_tag().is_none());
    }
    if k == TermKind::DefaultGraph {
        assert!(t.is_default_graph());
    } else {
        assert!(!t.is_default_graph());
    }
    if k == TermKind::Quad {
        assert!(t.is_quad());
        assert!(!t.is_atom());
        assert!(t.quad().is_some());
        assert!(t.clone().to_quad().is_some());
        assert!(t.value(ValueCast::LexicalForm).is_err());
    } else {
        assert!(!t.is_quad());
        assert!(t.is_atom());
        assert!(t.quad().is_none());
        assert!(t.clone().to_quad().is_none());
        assert!(t.value(ValueCast::LexicalForm).is_ok());
    }
    assert!(t.eq(t.borrow_term()));
    assert!(t.borrow_term().eq(t.clone()));
}

#[cfg(test)]
mod check_implementability {
    use super::*;

    // three different implementations of Term using different strategies for Self::BorrowTerm

    #[derive(Clone, Copy, Debug)]
    struct Term1 {
        nested: bool,
    }

    const BN1: Term1 = Term1 { nested: false };

    impl Term for Term1 {
        type BorrowTerm<'x> = Self;

        fn kind(&self) -> TermKind {
            match self.nested {
                false => TermKind::BlankNode,
                true => TermKind::Quad,
            }
        }
        fn bnode_id(&self) -> Option<MownStr> {
            (!self.nested).then(|| "t1".into())
        }
        fn quad(&self) -> Option<[Self::BorrowTerm<'_>; 4]> {
            self.nested.then_some([BN1, BN1, BN1, BN1])
        }
        fn to_quad(self) -> Option<[Self; 4]> {
            self.quad()
        }
        fn borrow_term(&self) -> Self::BorrowTerm<'_> {
            *self
        }
    }

    #[derive(Clone, Copy, Debug)]
    struct Term2 {
        nested: bool,
    }

    const BN2: Term2 = Term2 { nested: false };

    impl Term for Term2 {
        type BorrowTerm<'x> = &'x Self;

        fn kind(&self) -> TermKind {
            match self.nested {
                false => TermKind::BlankNode,
                true => TermKind::Quad,
            }
        }
        fn bnode_id(&self) -> Option<MownStr> {
            (!self.nested).then(|| "_:t2".into())
        }
        fn quad(&self) -> Option<[Self::BorrowTerm<'_>; 4]> {
            self.nested.then_some([&BN2, &BN2, &BN2, &BN2])
        }
        fn to_quad(self) -> Option<[Self; 4]> {
            self.nested.then_some([BN2, BN2, BN2, BN2])
        }
        fn borrow_term(&self) -> Self::BorrowTerm<'_> {
            self
        }
    }

    #[derive(Clone, Debug)]
    struct Term3(Option<Box<[Term3; 4]>>);

    impl Term for Term3 {
        type BorrowTerm<'x> = &'x Self;

        fn kind(&self) -> TermKind {
            match self.0 {
                None => TermKind::BlankNode,
                Some(_) => TermKind::Quad,
            }
        }
        fn bnode_id(&self) -> Option<MownStr> {
            match self.0 {
                None => Some("t3".into()),
                Some(_) => None,
            }
        }
        fn quad(&self) -> Option<[Self::BorrowTerm<'_>; 4]> {
            if let Some(b) = &self.0 {
                let [s, p, o, g] = b.as_ref();
                Some([s, p, o, g])
            } else {
                None
            }
        }
        fn to_quad(self) -> Option<[Self; 4]> {
            self.0.map(|b| *b)
        }
        fn borrow_term(&self) -> Self::BorrowTerm<'_> {
            self
        }
    }

    #[test]
    fn all_impls_are_consistent() {
        assert_consistent_term_impl(&BN1);
        assert_consistent_term_impl(&Term1 { nested: true });
        assert_consistent_term_impl(&BN2);
        assert_consistent_term_impl(&Term2 { nested: true });
        assert_consistent_term_impl(&Term3(None));
        let nested = Term3(Some(Box::new([
            Term3(None),
            Term3(None),
            Term3(None),
            Term3(None),
        ])));
        assert_consistent_term_impl(&nested);
    }
}

#[cfg(test)]
mod test_term_impl {
    use super::*;
    use crate::ns::xsd;
    use test_case::test_case;

    fn iri(txt: &str) -> SimpleTerm {
        SimpleTerm::NamedNode(txt.into())
    }

    fn bnode(txt: &str) -> SimpleTerm {
        SimpleTerm::BlankNode(txt.into())
    }

    fn typed(lex: &str, dt: &str) -> SimpleTerm<'static> {
        SimpleTerm::LiteralDatatype(lex.to_string().into(), dt.to_string().into())
    }

    #[test_case(iri("tag:a"), iri("tag:a"), true)]
    #[test_case(iri("tag:a"), iri("tag:b"), false)]
    #[test_case(bnode("x"), bnode("_:x"), true)]
    #[test_case(bnode("_:x"), bnode("_:y"), false)]
    #[test_case(iri("tag:x"), bnode("tag:x"), false)]
    #[test_case(typed("1", "tag:dt"), typed("1", "tag:dt"), true)]
    #[test_case(typed("1", "tag:dt"), typed("1", "tag:other"), false)]
    #[test_case(typed("01", "tag:dt"), typed("1", "tag:dt"), false)]
    #[test_case(SimpleTerm::LiteralLanguage("chat".into(), "fr".into()), SimpleTerm::LiteralLanguage("chat".into(), "fr".into()), true)]
    #[test_case(SimpleTerm::LiteralLanguage("chat".into(), "fr".into()), SimpleTerm::LiteralLanguage("chat".into(), "en".into()), false)]
    #[test_case(SimpleTerm::DefaultGraph, SimpleTerm::DefaultGraph, true)]
    #[test_case(SimpleTerm::DefaultGraph, iri("tag:g"), false)]
    fn term_eq(t1: SimpleTerm, t2: SimpleTerm, expected: bool) {
        assert_eq!(Term::eq(&t1, &t2), expected);
        assert_eq!(Term::eq(&t2, &t1), expected);
        if expected {
            assert_eq!(hash_of(&t1), hash_of(&t2));
        }
    }

    #[test]
    fn native_literals_eq_simple_terms() {
        assert!(Term::eq(&42, typed("42", xsd::integer.to_string().as_str())));
        assert!(Term::eq("hello", typed("hello", &xsd::string.to_string())));
        assert!(Term::eq(&true, typed("true", &xsd::boolean.to_string())));
        assert!(!Term::eq(&42, typed("42", &xsd::string.to_string())));
    }

    #[test]
    fn quoted_quads_eq() {
        let q1 = SimpleTerm::Quad(Box::new([
            bnode("s"),
            iri("tag:p"),
            typed("o", "tag:dt"),
            SimpleTerm::DefaultGraph,
        ]));
        let q2 = SimpleTerm::Quad(Box::new([
            bnode("_:s"),
            iri("tag:p"),
            typed("o", "tag:dt"),
            SimpleTerm::DefaultGraph,
        ]));
        let q3 = SimpleTerm::Quad(Box::new([
            bnode("s"),
            iri("tag:p"),
            typed("o", "tag:dt"),
            iri("tag:g"),
        ]));
        assert!(Term::eq(&q1, &q2));
        assert!(!Term::eq(&q1, &q3));
        assert_eq!(hash_of(&q1), hash_of(&q2));
    }

    #[test]
    fn value_of_non_literals() -> Result<(), TermError> {
        assert_eq!(
            iri("tag:a").value(ValueCast::default())?,
            Value::Text("tag:a".into())
        );
        assert_eq!(
            bnode("_:b").value(ValueCast::Datatype)?,
            Value::Text("_:b".into())
        );
        assert_eq!(
            SimpleTerm::DefaultGraph.value(ValueCast::Raw)?,
            Value::Text(DEFAULT_GRAPH_VALUE.into())
        );
        Ok(())
    }

    #[test]
    fn value_of_quad_fails() {
        let q = SimpleTerm::Quad(Box::new([
            bnode("s"),
            iri("tag:p"),
            iri("tag:o"),
            SimpleTerm::DefaultGraph,
        ]));
        assert!(matches!(
            q.value(ValueCast::LexicalForm),
            Err(TermError::NoScalarValue)
        ));
    }

    #[test_case("42", xsd::integer, Value::Integer(42))]
    #[test_case("true", xsd::boolean, Value::Boolean(true))]
    #[test_case("0", xsd::boolean, Value::Boolean(false))]
    #[test_case("1.5", xsd::decimal, Value::Decimal(1.5))]
    #[test_case("abc", xsd::integer, Value::Text("abc".into()))]
    #[test_case("abc", xsd::string, Value::Text("abc".into()))]
    fn value_by_datatype(lex: &str, dt: crate::ns::NsTerm, expected: Value) {
        let lit = typed(lex, &dt.to_string());
        assert_eq!(lit.value(ValueCast::Datatype).unwrap(), expected);
        assert_eq!(
            lit.value(ValueCast::LexicalForm).unwrap(),
            Value::Text(lex.into())
        );
    }

    fn hash_of<T: Term>(t: &T) -> u64 {
        use std::hash::Hasher;
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        Term::hash(t, &mut hasher);
        hasher.finish()
    }
}
