use super::*;
use crate::ns::xsd;

lazy_static::lazy_static! {
    static ref XSD_INTEGER_TYPES: Vec<String> = [
        xsd::integer,
        xsd::int,
        xsd::long,
        xsd::short,
        xsd::byte,
        xsd::nonNegativeInteger,
        xsd::nonPositiveInteger,
        xsd::positiveInteger,
        xsd::negativeInteger,
        xsd::unsignedLong,
        xsd::unsignedInt,
        xsd::unsignedShort,
        xsd::unsignedByte,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
}

/// How [`Term::value`] converts a literal into a scalar [`Value`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ValueCast {
    /// The lexical form, as text.
    #[default]
    LexicalForm,
    /// The native value the literal was built from
    /// (for implementations that retain it).
    Raw,
    /// The lexical form, interpreted according to the datatype
    /// (best effort, see [`Value::from_lexical`]).
    Datatype,
}

/// The scalar value of a [`Term`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    /// A textual value (IRI, blank node identifier, lexical form...)
    Text(MownStr<'a>),
    /// A boolean value
    Boolean(bool),
    /// An integer value
    Integer(i64),
    /// A decimal (or floating point) value
    Decimal(f64),
}

impl<'a> Value<'a> {
    /// Interpret `lex` according to `datatype`.
    ///
    /// Integer, decimal, floating point and boolean XSD datatypes are recognized.
    /// When the datatype is not recognized,
    /// or when the lexical form is not valid for it,
    /// the lexical form is returned as [`Value::Text`].
    pub fn from_lexical(lex: MownStr<'a>, datatype: &str) -> Self {
        let parsed = if datatype == &XSD_BOOLEAN[..] {
            parse_boolean(&lex).map(Value::Boolean)
        } else if datatype == &XSD_DECIMAL[..]
            || datatype == &XSD_DOUBLE[..]
            || datatype == &XSD_FLOAT[..]
        {
            parse_decimal(&lex).map(Value::Decimal)
        } else if XSD_INTEGER_TYPES.iter().any(|dt| dt == datatype) {
            lex.trim().parse().ok().map(Value::Integer)
        } else {
            None
        };
        parsed.unwrap_or(Value::Text(lex))
    }

    /// Return the text of this value, if it is [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(txt) => Some(&txt[..]),
            _ => None,
        }
    }

    /// Return this value as a boolean, if it is [`Value::Boolean`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Return this value as an integer, if it is [`Value::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Return this value as a float, if it is numeric.
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Copy this value so that it does not borrow anything.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Text(txt) => Value::Text(MownStr::from(txt.to_string())),
            Value::Boolean(b) => Value::Boolean(b),
            Value::Integer(i) => Value::Integer(i),
            Value::Decimal(d) => Value::Decimal(d),
        }
    }
}

impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(txt) => f.write_str(txt),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Decimal(d) => f.write_str(&decimal_lexical_form(*d)),
        }
    }
}

fn parse_boolean(lex: &str) -> Option<bool> {
    match lex.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_decimal(lex: &str) -> Option<f64> {
    match lex.trim() {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        txt => txt.parse().ok().filter(|d: &f64| d.is_finite()),
    }
}

/// The canonical-ish lexical form of a float,
/// using the `INF`, `-INF` and `NaN` spellings of XSD.
pub fn decimal_lexical_form(d: f64) -> String {
    if d.is_nan() {
        "NaN".to_string()
    } else if d.is_infinite() {
        (if d > 0.0 { "INF" } else { "-INF" }).to_string()
    } else {
        format!("{d}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(1.5, "1.5")]
    #[test_case(3.0, "3")]
    #[test_case(-0.25, "-0.25")]
    #[test_case(f64::INFINITY, "INF")]
    #[test_case(f64::NEG_INFINITY, "-INF")]
    #[test_case(f64::NAN, "NaN")]
    fn decimal_lexical(d: f64, expected: &str) {
        assert_eq!(decimal_lexical_form(d), expected);
    }

    #[test]
    fn non_finite_lexical_forms_parse_back() {
        let dbl = xsd::double.to_string();
        assert_eq!(
            Value::from_lexical("INF".into(), &dbl),
            Value::Decimal(f64::INFINITY)
        );
        assert!(Value::from_lexical("NaN".into(), &dbl)
            .as_decimal()
            .unwrap()
            .is_nan());
        assert_eq!(
            Value::from_lexical("inf".into(), &dbl),
            Value::Text("inf".into())
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Integer(3).as_decimal(), Some(3.0));
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(Value::Text("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Text("x".into()).as_integer(), None);
        assert_eq!(Value::Decimal(2.5).to_string(), "2.5");
    }
}
