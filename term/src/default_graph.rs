//! The default graph of a dataset.

use rdfquad_api::term::{Term, TermError, TermKind, Value, ValueCast, DEFAULT_GRAPH_VALUE};
use rdfquad_api::MownStr;

/// The default graph, with an optional label.
///
/// All default graphs are equal, whatever their labels.
/// The label is only reported by [`Term::value`].
#[derive(Clone, Debug, Default)]
pub struct DefaultGraph {
    label: Option<Box<str>>,
}

impl DefaultGraph {
    /// Build a default graph with the given label.
    pub fn new(label: Option<&str>) -> Self {
        DefaultGraph {
            label: label.map(Box::from),
        }
    }

    /// The label of this default graph, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Term for DefaultGraph {
    type BorrowTerm<'x> = &'x Self;

    fn kind(&self) -> TermKind {
        TermKind::DefaultGraph
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
    fn value(&self, _cast: ValueCast) -> Result<Value<'_>, TermError> {
        Ok(Value::Text(MownStr::from(
            self.label().unwrap_or(DEFAULT_GRAPH_VALUE),
        )))
    }
}

impl<T: Term> PartialEq<T> for DefaultGraph {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other.borrow_term())
    }
}

impl Eq for DefaultGraph {}

impl std::hash::Hash for DefaultGraph {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfquad_api::term::{assert_consistent_term_impl, SimpleTerm};

    #[test]
    fn default_graphs_are_all_equal() {
        let g1 = DefaultGraph::default();
        let g2 = DefaultGraph::new(Some("main"));
        assert_consistent_term_impl(&g1);
        assert_consistent_term_impl(&g2);
        assert_eq!(g1, g2);
        assert_eq!(g1, SimpleTerm::DefaultGraph);
        assert_ne!(g1, SimpleTerm::NamedNode("tag:g".into()));
    }

    #[test]
    fn value_is_label() {
        let g = DefaultGraph::new(Some("main"));
        assert_eq!(g.value(ValueCast::Raw).unwrap(), Value::Text("main".into()));
        let g = DefaultGraph::new(None);
        assert_eq!(
            g.value(ValueCast::LexicalForm).unwrap(),
            Value::Text(DEFAULT_GRAPH_VALUE.into())
        );
    }
}
