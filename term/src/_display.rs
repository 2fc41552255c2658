// this module is transparently re-exported by its parent `lib`
//
// Implement the Display trait for terms and quads, using an N-Quads-like syntax.

use std::fmt;

use crate::*;
use rdfquad_api::term::{Term, XSD_STRING};

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        write_escaped(f, self.lexical_form())?;
        f.write_str("\"")?;
        match self.lang() {
            Some(tag) => write!(f, "@{}", tag),
            None if self.datatype() == &XSD_STRING[..] => Ok(()),
            None => write!(f, "^^<{}>", self.datatype()),
        }
    }
}

/// The default graph is displayed as its label, if any, or as nothing.
impl fmt::Display for DefaultGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or(""))
    }
}

impl fmt::Display for RdfTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfTerm::NamedNode(n) => fmt::Display::fmt(n, f),
            RdfTerm::BlankNode(b) => fmt::Display::fmt(b, f),
            RdfTerm::Literal(l) => fmt::Display::fmt(l, f),
            RdfTerm::DefaultGraph(g) => fmt::Display::fmt(g, f),
            RdfTerm::Quad(q) => write!(f, "<< {} >>", q),
        }
    }
}

/// The graph is omitted when it is the default graph.
impl fmt::Display for RdfQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject(), self.predicate(), self.object())?;
        if !self.graph().is_default_graph() {
            write!(f, " {}", self.graph())?;
        }
        Ok(())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, txt: &str) -> fmt::Result {
    let mut start = 0;
    for (i, c) in txt.char_indices() {
        let escaped = match c {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            _ => continue,
        };
        f.write_str(&txt[start..i])?;
        f.write_str(escaped)?;
        start = i + c.len_utf8();
    }
    f.write_str(&txt[start..])
}

#[cfg(test)]
pub(crate) mod test {
    use crate::*;
    use lazy_static::lazy_static;
    use rdfquad_api::ns::xsd;

    lazy_static! {
        pub(crate) static ref NQ_TERMS: Vec<(RdfTerm, &'static str)> = vec![
            (
                NamedNode::new("http://example.org/foo/bar").into(),
                r"<http://example.org/foo/bar>",
            ),
            (
                // IRI with non ascii term
                NamedNode::new("http://example.org/hé/\u{10000}/").into(),
                "<http://example.org/hé/\u{10000}/>",
            ),
            (BlankNode::new("foo_bar.baz").into(), r"_:foo_bar.baz"),
            (
                Literal::new("chat", Some("fr-FR"), None).unwrap().into(),
                r#""chat"@fr-FR"#,
            ),
            (Literal::new("chat", None, None).unwrap().into(), r#""chat""#),
            (
                Literal::new(42_i32, None, None).unwrap().into(),
                r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"#,
            ),
            (
                Literal::new("1", None, Some(xsd::double.to_string().as_str()))
                    .unwrap()
                    .into(),
                r#""1"^^<http://www.w3.org/2001/XMLSchema#double>"#,
            ),
            (
                Literal::new(" \n \r \t \\ \" hello world", None, None)
                    .unwrap()
                    .into(),
                r#"" \n \r \t \\ \" hello world""#,
            ),
            (
                // non-ascii characters are not escaped in literals
                Literal::new("é \u{10000}", None, None).unwrap().into(),
                "\"é \u{10000}\"",
            ),
            (DefaultGraph::default().into(), ""),
            (DefaultGraph::new(Some("main")).into(), "main"),
            (
                RdfQuad::new(
                    NamedNode::new("tag:s"),
                    NamedNode::new("tag:p"),
                    BlankNode::new("o"),
                    Some(NamedNode::new("tag:g").into()),
                )
                .unwrap()
                .into(),
                "<< <tag:s> <tag:p> _:o <tag:g> >>",
            ),
        ];
    }

    #[test]
    fn terms() {
        for (term, expected) in NQ_TERMS.iter() {
            let got = format!("{}", term);
            assert_eq!(&got, expected);
        }
    }

    #[test]
    fn quads() {
        let q = RdfQuad::new(
            NamedNode::new("tag:s"),
            NamedNode::new("tag:p"),
            Literal::new("o", Some("en"), None).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(q.to_string(), r#"<tag:s> <tag:p> "o"@en"#);
        let q = q.with_graph(Some(BlankNode::new("g").into())).unwrap();
        assert_eq!(q.to_string(), r#"<tag:s> <tag:p> "o"@en _:g"#);
    }
}
