use super::*;

/// [`f64`] implements [`Term`]
/// so that Rust literals can be used as RDF literals in code.
///
/// Finite values are `xsd:decimal` literals,
/// infinite values and NaN are `xsd:double` literals.
impl Term for f64 {
    type BorrowTerm<'x> = Self;

    fn kind(&self) -> TermKind {
        TermKind::Literal
    }
    fn lexical_form(&self) -> Option<MownStr> {
        Some(MownStr::from(decimal_lexical_form(*self)))
    }
    fn datatype(&self) -> Option<MownStr> {
        Some(MownStr::from(if self.is_finite() {
            &XSD_DECIMAL[..]
        } else {
            &XSD_DOUBLE[..]
        }))
    }
    fn language_tag(&self) -> Option<MownStr> {
        None
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        *self
    }
    fn value(&self, cast: ValueCast) -> Result<Value<'_>, TermError> {
        Ok(match cast {
            ValueCast::LexicalForm => Value::Text(decimal_lexical_form(*self).into()),
            ValueCast::Raw | ValueCast::Datatype => Value::Decimal(*self),
        })
    }
}

/// [`i32`] implements [`Term`]
/// so that Rust literals can be used as RDF literals in code.
impl Term for i32 {
    type BorrowTerm<'x> = Self;

    fn kind(&self) -> TermKind {
        TermKind::Literal
    }
    fn lexical_form(&self) -> Option<MownStr> {
        Some(MownStr::from(format!("{}", self)))
    }
    fn datatype(&self) -> Option<MownStr> {
        Some(MownStr::from(&XSD_INTEGER[..]))
    }
    fn language_tag(&self) -> Option<MownStr> {
        None
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        *self
    }
    fn value(&self, cast: ValueCast) -> Result<Value<'_>, TermError> {
        Ok(match cast {
            ValueCast::LexicalForm => Value::Text(format!("{}", self).into()),
            ValueCast::Raw | ValueCast::Datatype => Value::Integer(i64::from(*self)),
        })
    }
}

/// [`i64`] implements [`Term`]
/// so that Rust literals can be used as RDF literals in code.
impl Term for i64 {
    type BorrowTerm<'x> = Self;

    fn kind(&self) -> TermKind {
        TermKind::Literal
    }
    fn lexical_form(&self) -> Option<MownStr> {
        Some(MownStr::from(format!("{}", self)))
    }
    fn datatype(&self) -> Option<MownStr> {
        Some(MownStr::from(&XSD_INTEGER[..]))
    }
    fn language_tag(&self) -> Option<MownStr> {
        None
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        *self
    }
    fn value(&self, cast: ValueCast) -> Result<Value<'_>, TermError> {
        Ok(match cast {
            ValueCast::LexicalForm => Value::Text(format!("{}", self).into()),
            ValueCast::Raw | ValueCast::Datatype => Value::Integer(*self),
        })
    }
}

/// [`bool`] implements [`Term`]
/// so that Rust literals can be used as RDF literals in code.
impl Term for bool {
    type BorrowTerm<'x> = Self;

    fn kind(&self) -> TermKind {
        TermKind::Literal
    }
    fn lexical_form(&self) -> Option<MownStr> {
        Some(MownStr::from(if *self { "true" } else { "false" }))
    }
    fn datatype(&self) -> Option<MownStr> {
        Some(MownStr::from(&XSD_BOOLEAN[..]))
    }
    fn language_tag(&self) -> Option<MownStr> {
        None
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        *self
    }
    fn value(&self, cast: ValueCast) -> Result<Value<'_>, TermError> {
        Ok(match cast {
            ValueCast::LexicalForm => Value::Text(if *self { "true" } else { "false" }.into()),
            ValueCast::Raw | ValueCast::Datatype => Value::Boolean(*self),
        })
    }
}

/// [`str`] implements [`Term`]
/// so that Rust literals can be used as RDF literals in code.
impl Term for str {
    type BorrowTerm<'x>
        = &'x Self
    where
        Self: 'x;

    fn kind(&self) -> TermKind {
        TermKind::Literal
    }
    fn lexical_form(&self) -> Option<MownStr> {
        Some(MownStr::from(self))
    }
    fn datatype(&self) -> Option<MownStr> {
        Some(MownStr::from(&XSD_STRING[..]))
    }
    fn language_tag(&self) -> Option<MownStr> {
        None
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}
