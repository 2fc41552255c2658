//! RDF literals like specified in
//! [RDF](https://www.w3.org/TR/rdf11-primer/#section-literal).
//!
//! A [`Literal`] remembers the native value it was built from ([`LiteralValue`]),
//! in addition to its lexical form, language tag and datatype.

use rdfquad_api::term::{
    decimal_lexical_form, Term, TermError, TermKind, Value, ValueCast, RDF_LANG_STRING,
    XSD_BOOLEAN, XSD_DECIMAL, XSD_DOUBLE, XSD_INTEGER, XSD_STRING,
};
use rdfquad_api::MownStr;

/// The native value a [`Literal`] is built from.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    /// Text, `xsd:string` by default
    String(String),
    /// A boolean, `xsd:boolean` by default
    Boolean(bool),
    /// An integer, `xsd:integer` by default
    Integer(i64),
    /// A float, `xsd:decimal` by default (`xsd:double` if not finite)
    Decimal(f64),
}

impl LiteralValue {
    /// The lexical form of this value.
    pub fn lexical_form(&self) -> String {
        match self {
            LiteralValue::String(txt) => txt.clone(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Decimal(d) => decimal_lexical_form(*d),
        }
    }

    /// The datatype inferred for this value when none is given.
    pub fn default_datatype(&self) -> &'static str {
        match self {
            LiteralValue::String(_) => &XSD_STRING[..],
            LiteralValue::Boolean(_) => &XSD_BOOLEAN[..],
            LiteralValue::Integer(_) => &XSD_INTEGER[..],
            LiteralValue::Decimal(d) if d.is_finite() => &XSD_DECIMAL[..],
            LiteralValue::Decimal(_) => &XSD_DOUBLE[..],
        }
    }

    fn as_value(&self) -> Value<'_> {
        match self {
            LiteralValue::String(txt) => Value::Text(MownStr::from(&txt[..])),
            LiteralValue::Boolean(b) => Value::Boolean(*b),
            LiteralValue::Integer(i) => Value::Integer(*i),
            LiteralValue::Decimal(d) => Value::Decimal(*d),
        }
    }
}

impl From<&str> for LiteralValue {
    fn from(other: &str) -> Self {
        LiteralValue::String(other.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(other: String) -> Self {
        LiteralValue::String(other)
    }
}

impl From<bool> for LiteralValue {
    fn from(other: bool) -> Self {
        LiteralValue::Boolean(other)
    }
}

impl From<i32> for LiteralValue {
    fn from(other: i32) -> Self {
        LiteralValue::Integer(other.into())
    }
}

impl From<i64> for LiteralValue {
    fn from(other: i64) -> Self {
        LiteralValue::Integer(other)
    }
}

impl From<f64> for LiteralValue {
    fn from(other: f64) -> Self {
        LiteralValue::Decimal(other)
    }
}

impl From<Value<'_>> for LiteralValue {
    fn from(other: Value<'_>) -> Self {
        match other {
            Value::Text(txt) => LiteralValue::String(txt.to_string()),
            Value::Boolean(b) => LiteralValue::Boolean(b),
            Value::Integer(i) => LiteralValue::Integer(i),
            Value::Decimal(d) => LiteralValue::Decimal(d),
        }
    }
}

/// An RDF literal.
///
/// Invariants:
/// * the language tag, if any, is not empty;
/// * the datatype is `rdf:langString` if and only if there is a language tag;
/// * the datatype is never empty.
///
/// Language tags are compared exactly (case-sensitive).
#[derive(Clone, Debug)]
pub struct Literal {
    lexical: String,
    lang: Option<String>,
    datatype: String,
    raw: LiteralValue,
}

impl Literal {
    /// Build a new literal from a native value,
    /// an optional language tag and an optional datatype.
    ///
    /// * an empty language tag is the same as no language tag;
    /// * an empty datatype is the same as no datatype;
    /// * with a language tag, the datatype must be absent or `rdf:langString`,
    ///   otherwise [`TermError::LangWithDatatype`] is raised;
    /// * without a language tag, `rdf:langString` is rejected with [`TermError::LangStringDatatype`];
    /// * without a language tag nor datatype, the datatype is inferred from `value`
    ///   (see [`LiteralValue::default_datatype`]).
    pub fn new<V: Into<LiteralValue>>(
        value: V,
        lang: Option<&str>,
        datatype: Option<&str>,
    ) -> Result<Self, TermError> {
        let raw = value.into();
        let lang = lang.filter(|tag| !tag.is_empty());
        let datatype = checked_datatype(lang, datatype, &raw)?;
        Ok(Literal {
            lexical: raw.lexical_form(),
            lang: lang.map(str::to_string),
            datatype,
            raw,
        })
    }

    /// Copy any literal [`Term`] into a [`Literal`].
    ///
    /// The native value is recovered with [`ValueCast::Raw`].
    /// The language tag and datatype of `term` obey the same rules as in [`Literal::new`],
    /// except that `rdf:langString` is accepted with an empty language tag,
    /// making a plain `xsd:string` literal.
    ///
    /// Fails with [`TermError::NotALiteral`] if `term` is not a literal.
    pub fn from_literal_term<T: Term>(term: T) -> Result<Self, TermError> {
        if !term.is_literal() {
            return Err(TermError::NotALiteral(term.kind()));
        }
        let lexical = term.lexical_form().map(|lex| lex.to_string()).unwrap_or_default();
        let lang = term.language_tag();
        let datatype = term.datatype();
        let datatype = match (&lang, &datatype) {
            (Some(_), Some(dt)) if &dt[..] == &RDF_LANG_STRING[..] => None,
            _ => datatype.as_deref(),
        };
        let lang = lang.as_deref().filter(|tag| !tag.is_empty());
        let raw = match term.value(ValueCast::Raw) {
            Ok(value) => value.into(),
            Err(_) => LiteralValue::String(lexical.clone()),
        };
        let datatype = checked_datatype(lang, datatype, &raw)?;
        Ok(Literal {
            lexical,
            lang: lang.map(str::to_string),
            datatype,
            raw,
        })
    }

    /// The lexical form of this literal.
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// The language tag of this literal, if any.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// The datatype IRI of this literal.
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// The native value this literal was built from.
    pub fn raw_value(&self) -> &LiteralValue {
        &self.raw
    }

    /// A copy of this literal with a different value,
    /// keeping the language tag and the datatype.
    pub fn with_value<V: Into<LiteralValue>>(&self, value: V) -> Self {
        let raw = value.into();
        Literal {
            lexical: raw.lexical_form(),
            lang: self.lang.clone(),
            datatype: self.datatype.clone(),
            raw,
        }
    }

    /// A copy of this literal with a different language tag.
    ///
    /// Setting a (non-empty) language tag sets the datatype to `rdf:langString`.
    /// Removing the language tag of a language-tagged literal sets its datatype to `xsd:string`;
    /// removing it from a literal without language tag changes nothing.
    pub fn with_lang(&self, lang: Option<&str>) -> Self {
        match lang.filter(|tag| !tag.is_empty()) {
            Some(tag) => Literal {
                lang: Some(tag.to_string()),
                datatype: RDF_LANG_STRING.to_string(),
                ..self.clone()
            },
            None if self.lang.is_some() => Literal {
                lang: None,
                datatype: XSD_STRING.to_string(),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// A copy of this literal with a different datatype.
    /// The language tag, if any, is removed.
    ///
    /// Fails with [`TermError::EmptyDatatype`] if `datatype` is empty,
    /// and with [`TermError::LangStringDatatype`] if it is `rdf:langString`.
    pub fn with_datatype(&self, datatype: &str) -> Result<Self, TermError> {
        if datatype.is_empty() {
            return Err(TermError::EmptyDatatype);
        }
        if datatype == &RDF_LANG_STRING[..] {
            return Err(TermError::LangStringDatatype);
        }
        Ok(Literal {
            lang: None,
            datatype: datatype.to_string(),
            ..self.clone()
        })
    }
}

/// The datatype of a literal with the given (non-empty) language tag and datatype.
fn checked_datatype(
    lang: Option<&str>,
    datatype: Option<&str>,
    raw: &LiteralValue,
) -> Result<String, TermError> {
    match (lang, datatype.filter(|dt| !dt.is_empty())) {
        (Some(_), None) => Ok(RDF_LANG_STRING.to_string()),
        (Some(_), Some(dt)) if dt == &RDF_LANG_STRING[..] => Ok(dt.to_string()),
        (Some(tag), Some(dt)) => Err(TermError::LangWithDatatype {
            lang: tag.to_string(),
            datatype: dt.to_string(),
        }),
        (None, Some(dt)) if dt == &RDF_LANG_STRING[..] => Err(TermError::LangStringDatatype),
        (None, Some(dt)) => Ok(dt.to_string()),
        (None, None) => Ok(raw.default_datatype().to_string()),
    }
}

impl Term for Literal {
    type BorrowTerm<'x> = &'x Self;

    fn kind(&self) -> TermKind {
        TermKind::Literal
    }
    fn lexical_form(&self) -> Option<MownStr> {
        Some(MownStr::from(&self.lexical[..]))
    }
    fn datatype(&self) -> Option<MownStr> {
        Some(MownStr::from(&self.datatype[..]))
    }
    fn language_tag(&self) -> Option<MownStr> {
        self.lang.as_deref().map(MownStr::from)
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
    fn value(&self, cast: ValueCast) -> Result<Value<'_>, TermError> {
        Ok(match cast {
            ValueCast::LexicalForm => Value::Text(MownStr::from(&self.lexical[..])),
            ValueCast::Raw => self.raw.as_value(),
            ValueCast::Datatype => {
                Value::from_lexical(MownStr::from(&self.lexical[..]), &self.datatype)
            }
        })
    }
}

impl<T: Term> PartialEq<T> for Literal {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other.borrow_term())
    }
}

impl Eq for Literal {}

impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfquad_api::ns::{rdf, xsd};
    use rdfquad_api::term::{assert_consistent_term_impl, SimpleTerm};
    use test_case::test_case;

    fn xsd(suffix: &str) -> String {
        format!("{}{}", xsd::PREFIX, suffix)
    }

    #[test_case(LiteralValue::from("1"), "1", "string")]
    #[test_case(LiteralValue::from(String::from("foo")), "foo", "string")]
    #[test_case(LiteralValue::from(true), "true", "boolean")]
    #[test_case(LiteralValue::from(1_i32), "1", "integer")]
    #[test_case(LiteralValue::from(-42_i64), "-42", "integer")]
    #[test_case(LiteralValue::from(1.5), "1.5", "decimal")]
    #[test_case(LiteralValue::from(f64::INFINITY), "INF", "double")]
    fn datatype_inferred_from_value(value: LiteralValue, lex: &str, dt: &str) {
        let lit = Literal::new(value.clone(), None, None).unwrap();
        assert_consistent_term_impl(&lit);
        assert_eq!(lit.lexical_form(), lex);
        assert_eq!(lit.datatype(), xsd(dt));
        assert_eq!(lit.lang(), None);
        assert_eq!(lit.raw_value(), &value);
    }

    #[test]
    fn language_tagged() -> Result<(), TermError> {
        let lit = Literal::new("chat", Some("fr"), None)?;
        assert_consistent_term_impl(&lit);
        assert_eq!(lit.lang(), Some("fr"));
        assert_eq!(lit.datatype(), &RDF_LANG_STRING[..]);
        let lit2 = Literal::new("chat", Some("fr"), Some(&RDF_LANG_STRING[..]))?;
        assert_eq!(lit, lit2);
        Ok(())
    }

    #[test]
    fn empty_lang_is_no_lang() -> Result<(), TermError> {
        let lit = Literal::new("chat", Some(""), None)?;
        assert_eq!(lit.lang(), None);
        assert_eq!(lit.datatype(), xsd("string"));
        Ok(())
    }

    #[test]
    fn empty_datatype_is_no_datatype() -> Result<(), TermError> {
        let lit = Literal::new(3_i32, None, Some(""))?;
        assert_eq!(lit.datatype(), xsd("integer"));
        Ok(())
    }

    #[test]
    fn lang_with_datatype_fails() {
        let res = Literal::new("chat", Some("fr"), Some(xsd("string").as_str()));
        assert!(matches!(res, Err(TermError::LangWithDatatype { .. })));
    }

    #[test]
    fn lang_string_without_lang_fails() {
        let res = Literal::new("chat", None, Some(&RDF_LANG_STRING[..]));
        assert!(matches!(res, Err(TermError::LangStringDatatype)));
    }

    #[test]
    fn explicit_datatype_is_kept() -> Result<(), TermError> {
        let lit = Literal::new(1_i32, None, Some(xsd("int").as_str()))?;
        assert_eq!(lit.lexical_form(), "1");
        assert_eq!(lit.datatype(), xsd("int"));
        assert_eq!(lit.raw_value(), &LiteralValue::Integer(1));
        Ok(())
    }

    #[test]
    fn with_value_keeps_lang_and_datatype() -> Result<(), TermError> {
        let lit = Literal::new("chat", Some("fr"), None)?.with_value("chien");
        assert_eq!(lit.lexical_form(), "chien");
        assert_eq!(lit.lang(), Some("fr"));
        let lit = Literal::new(1_i32, None, Some(xsd("int").as_str()))?.with_value(2_i32);
        assert_eq!(lit.lexical_form(), "2");
        assert_eq!(lit.datatype(), xsd("int"));
        Ok(())
    }

    #[test]
    fn with_lang() -> Result<(), TermError> {
        let lit = Literal::new(1_i32, None, Some(xsd("int").as_str()))?;
        let tagged = lit.with_lang(Some("en"));
        assert_eq!(tagged.lang(), Some("en"));
        assert_eq!(tagged.datatype(), &RDF_LANG_STRING[..]);
        let untagged = tagged.with_lang(None);
        assert_eq!(untagged.lang(), None);
        assert_eq!(untagged.datatype(), xsd("string"));
        // removing an absent tag keeps the datatype
        let same = lit.with_lang(None);
        assert_eq!(same.datatype(), xsd("int"));
        let same = lit.with_lang(Some(""));
        assert_eq!(same.datatype(), xsd("int"));
        Ok(())
    }

    #[test]
    fn with_datatype() -> Result<(), TermError> {
        let lit = Literal::new("chat", Some("fr"), None)?;
        let typed = lit.with_datatype(&xsd("token"))?;
        assert_eq!(typed.lang(), None);
        assert_eq!(typed.datatype(), xsd("token"));
        assert!(matches!(
            lit.with_datatype(""),
            Err(TermError::EmptyDatatype)
        ));
        assert!(matches!(
            typed.with_datatype(&RDF_LANG_STRING),
            Err(TermError::LangStringDatatype)
        ));
        Ok(())
    }

    #[test]
    fn value_casts() -> Result<(), TermError> {
        let lit = Literal::new(42_i32, None, Some(xsd("string").as_str()))?;
        assert_eq!(lit.value(ValueCast::LexicalForm)?, Value::Text("42".into()));
        assert_eq!(lit.value(ValueCast::Raw)?, Value::Integer(42));
        assert_eq!(lit.value(ValueCast::Datatype)?, Value::Text("42".into()));
        let lit = Literal::new("7", None, Some(xsd("short").as_str()))?;
        assert_eq!(lit.value(ValueCast::Raw)?, Value::Text("7".into()));
        assert_eq!(lit.value(ValueCast::Datatype)?, Value::Integer(7));
        Ok(())
    }

    #[test]
    fn eq_other_impls() -> Result<(), TermError> {
        assert_eq!(Literal::new(42_i32, None, None)?, 42_i32);
        assert_eq!(Literal::new("foo", None, None)?, "foo");
        assert_eq!(Literal::new(true, None, None)?, true);
        assert_ne!(Literal::new("42", None, None)?, 42_i32);
        assert_ne!(
            Literal::new("chat", Some("fr"), None)?,
            Literal::new("chat", Some("FR"), None)?
        );
        Ok(())
    }

    #[test]
    fn copy_from_other_impl() -> Result<(), TermError> {
        let lit = Literal::from_literal_term(1.5)?;
        assert_eq!(lit.lexical_form(), "1.5");
        assert_eq!(lit.datatype(), xsd("decimal"));
        assert_eq!(lit.raw_value(), &LiteralValue::Decimal(1.5));
        let tagged = SimpleTerm::LiteralLanguage("chat".into(), "fr".into());
        let tagged = Literal::from_literal_term(&tagged)?;
        assert_eq!(tagged, Literal::new("chat", Some("fr"), None)?);
        assert!(matches!(
            Literal::from_literal_term(rdf::type_),
            Err(TermError::NotALiteral(TermKind::NamedNode))
        ));
        Ok(())
    }

    #[test]
    fn copy_normalises_empty_lang() -> Result<(), TermError> {
        let lit = Literal::from_literal_term(SimpleTerm::LiteralLanguage("x".into(), "".into()))?;
        assert_eq!(lit.lang(), None);
        assert_eq!(lit.datatype(), xsd("string"));
        assert_eq!(lit, Literal::new("x", Some(""), None)?);
        Ok(())
    }

    #[test_case(SimpleTerm::LiteralDatatype("x".into(), rdf::langString.iri().unwrap())
        => matches Err(TermError::LangStringDatatype); "lang string without lang")]
    #[test_case(SimpleTerm::LiteralDatatype("x".into(), "".into())
        => matches Ok(_); "empty datatype")]
    fn copy_checks_datatype(term: SimpleTerm<'static>) -> Result<Literal, TermError> {
        Literal::from_literal_term(term)
    }
}
