//! An in-memory, ordered, duplicate-free collection of quads.
//!
//! A [`Dataset`] holds [`RdfQuad`]s in insertion order.
//! Quads from any other [`Quad`] implementation can be inserted:
//! they are copied and validated on the way in.
//!
//! Most methods accept a [`Filter`] (or anything convertible into one)
//! to select the quads they operate on.
//! Lookup is a linear scan.

use crate::{CallbackError, DResult, DatasetError, Filter};
use rdfquad_api::quad::Quad;
use rdfquad_api::term::Term;
use rdfquad_term::RdfQuad;
use resiter::Map;
use std::fmt;

/// An in-memory dataset.
///
/// Invariant: no two quads of a dataset are equal,
/// except transiently after [`Dataset::for_each`] (which logs a warning in that case).
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    quads: Vec<RdfQuad>,
}

/// Outcome of a scan that only cares about at most one match.
enum Matches {
    None,
    One(usize),
    Many,
}

impl Dataset {
    /// Build a new empty dataset.
    pub fn new() -> Self {
        Dataset { quads: Vec::new() }
    }

    /// The number of quads in this dataset.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether this dataset contains no quad.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Iterate over all the quads of this dataset, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RdfQuad> {
        self.quads.iter()
    }

    /// Lazily iterate over the quads matching `filter`, in order.
    pub fn iter_matching<'s, F>(&'s self, filter: F) -> impl Iterator<Item = DResult<&'s RdfQuad>> + 's
    where
        F: Into<Filter<'s>>,
    {
        self.indices(filter.into(), true)
            .map_ok(move |i| &self.quads[i])
    }

    //

    /// Lazily yield the indices of the quads for which `filter` returns `expected`.
    fn indices<'s>(
        &'s self,
        filter: Filter<'s>,
        expected: bool,
    ) -> impl Iterator<Item = DResult<usize>> + 's {
        let mut predicate = filter.into_predicate();
        (0..self.quads.len()).filter_map(move |i| match predicate(&self.quads[i], self) {
            Ok(found) if found == expected => Some(Ok(i)),
            Ok(_) => None,
            Err(err) => Some(Err(DatasetError::Callback(err))),
        })
    }

    fn collect_indices(&self, filter: Filter<'_>, expected: bool) -> DResult<Vec<usize>> {
        let indices: Vec<usize> = self.indices(filter, expected).collect::<DResult<_>>()?;
        log::trace!(
            "{} of {} quads selected (expected={expected})",
            indices.len(),
            self.len(),
        );
        Ok(indices)
    }

    /// Scan for the quads matching `filter`, stopping at the second match.
    fn find_unique(&self, filter: Filter<'_>) -> DResult<Matches> {
        let mut indices = self.indices(filter, true);
        let found = match indices.next().transpose()? {
            None => Matches::None,
            Some(i) => match indices.next().transpose()? {
                None => Matches::One(i),
                Some(_) => Matches::Many,
            },
        };
        log::trace!(
            "unique lookup: {}",
            match found {
                Matches::None => "no match",
                Matches::One(_) => "one match",
                Matches::Many => "several matches",
            }
        );
        Ok(found)
    }

    fn expect_unique(&self, filter: Filter<'_>) -> DResult<usize> {
        match self.find_unique(filter)? {
            Matches::None => Err(DatasetError::NotFound),
            Matches::One(i) => Ok(i),
            Matches::Many => Err(DatasetError::AmbiguousMatch),
        }
    }

    fn position<Q: Quad>(&self, quad: Q) -> Option<usize> {
        self.quads.iter().position(|q| Quad::eq(q, &quad))
    }

    fn has<Q: Quad>(&self, quad: Q) -> bool {
        self.position(quad).is_some()
    }

    /// Push `quad` unless an equal quad is already present.
    fn push_unique(&mut self, quad: RdfQuad) -> bool {
        if self.has(&quad) {
            log::trace!("skipping duplicate {quad}");
            false
        } else {
            log::trace!("inserting {quad}");
            self.quads.push(quad);
            true
        }
    }

    //

    /// Whether exactly one quad matches `filter`.
    ///
    /// Fails with [`DatasetError::AmbiguousMatch`] if several quads match.
    pub fn contains<'f, F: Into<Filter<'f>>>(&self, filter: F) -> DResult<bool> {
        match self.find_unique(filter.into())? {
            Matches::None => Ok(false),
            Matches::One(_) => Ok(true),
            Matches::Many => Err(DatasetError::AmbiguousMatch),
        }
    }

    /// The only quad matching `filter`.
    ///
    /// Fails with [`DatasetError::NotFound`] if no quad matches,
    /// and with [`DatasetError::AmbiguousMatch`] if several quads match.
    pub fn get<'f, F: Into<Filter<'f>>>(&self, filter: F) -> DResult<&RdfQuad> {
        let i = self.expect_unique(filter.into())?;
        Ok(&self.quads[i])
    }

    /// Replace the only quad matching `filter` with `quad`.
    ///
    /// If `quad` is already present elsewhere in the dataset,
    /// the matching quad is simply removed.
    ///
    /// Fails like [`Dataset::get`], without modifying the dataset,
    /// or with [`DatasetError::Term`] if `quad` is not valid.
    pub fn set<'f, F, Q>(&mut self, filter: F, quad: Q) -> DResult<()>
    where
        F: Into<Filter<'f>>,
        Q: Quad,
    {
        let quad = RdfQuad::try_from_quad(quad)?;
        let i = self.expect_unique(filter.into())?;
        if Quad::eq(&self.quads[i], &quad) {
            log::trace!("{quad} replaced by itself");
        } else if self.has(&quad) {
            log::trace!("{quad} already present, removing {}", self.quads[i]);
            self.quads.remove(i);
        } else {
            log::trace!("replacing {} with {quad}", self.quads[i]);
            self.quads[i] = quad;
        }
        Ok(())
    }

    /// Remove and return the only quad matching `filter`.
    ///
    /// Fails like [`Dataset::get`], without modifying the dataset.
    pub fn unset<'f, F: Into<Filter<'f>>>(&mut self, filter: F) -> DResult<RdfQuad> {
        let i = self.expect_unique(filter.into())?;
        Ok(self.quads.remove(i))
    }

    /// Append `quad` unless an equal quad is already present.
    ///
    /// Return whether the quad was actually inserted.
    /// Fails with [`DatasetError::Term`] if `quad` is not valid.
    pub fn append<Q: Quad>(&mut self, quad: Q) -> DResult<bool> {
        let quad = RdfQuad::try_from_quad(quad)?;
        Ok(self.push_unique(quad))
    }

    /// Append each of `quads` unless an equal quad is already present.
    ///
    /// Return the number of quads actually inserted.
    /// Stops at the first invalid quad, failing with [`DatasetError::Term`];
    /// the quads before it are kept.
    pub fn add<I>(&mut self, quads: I) -> DResult<usize>
    where
        I: IntoIterator,
        I::Item: Quad,
    {
        let mut added = 0;
        for quad in quads {
            if self.append(quad)? {
                added += 1;
            }
        }
        log::debug!("added {added} quads, {} in total", self.len());
        Ok(added)
    }

    /// Remove all the quads matching `filter`,
    /// and return them in a new dataset.
    pub fn delete<'f, F: Into<Filter<'f>>>(&mut self, filter: F) -> DResult<Dataset> {
        let removed = self.remove_selected(filter.into(), true)?;
        log::debug!("deleted {} quads, {} left", removed.len(), self.len());
        Ok(removed)
    }

    /// Remove all the quads *not* matching `filter`,
    /// and return them in a new dataset.
    pub fn delete_except<'f, F: Into<Filter<'f>>>(&mut self, filter: F) -> DResult<Dataset> {
        let removed = self.remove_selected(filter.into(), false)?;
        log::debug!("deleted {} quads, {} left", removed.len(), self.len());
        Ok(removed)
    }

    fn remove_selected(&mut self, filter: Filter<'_>, expected: bool) -> DResult<Dataset> {
        let indices = self.collect_indices(filter, expected)?;
        let mut indices = indices.into_iter().peekable();
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.quads.len());
        for (i, quad) in std::mem::take(&mut self.quads).into_iter().enumerate() {
            if indices.next_if_eq(&i).is_some() {
                removed.push(quad);
            } else {
                kept.push(quad);
            }
        }
        self.quads = kept;
        Ok(Dataset { quads: removed })
    }

    /// A new dataset containing the quads matching `filter`.
    pub fn copy<'f, F: Into<Filter<'f>>>(&self, filter: F) -> DResult<Dataset> {
        self.copy_selected(filter.into(), true)
    }

    /// A new dataset containing the quads *not* matching `filter`.
    pub fn copy_except<'f, F: Into<Filter<'f>>>(&self, filter: F) -> DResult<Dataset> {
        self.copy_selected(filter.into(), false)
    }

    fn copy_selected(&self, filter: Filter<'_>, expected: bool) -> DResult<Dataset> {
        let quads = self
            .indices(filter, expected)
            .map_ok(|i| self.quads[i].clone())
            .collect::<DResult<_>>()?;
        Ok(Dataset { quads })
    }

    /// A new dataset containing all the quads of this one.
    pub fn copy_all(&self) -> Dataset {
        self.clone()
    }

    /// A new empty dataset.
    pub fn copy_none(&self) -> Dataset {
        Dataset::new()
    }

    //

    /// A new dataset containing the quads of both `self` and `other`,
    /// without duplicates.
    pub fn union(&self, other: &Dataset) -> Dataset {
        let mut ret = self.clone();
        for quad in other {
            ret.push_unique(quad.clone());
        }
        ret
    }

    /// A new dataset containing the quads present in exactly one of `self` and `other`.
    pub fn xor(&self, other: &Dataset) -> Dataset {
        let mut ret = self.union(other);
        ret.quads.retain(|q| !(self.has(q) && other.has(q)));
        ret
    }

    /// Compare two datasets, ignoring every quad whose subject is a blank node.
    ///
    /// Every such quad of `other` must be in `self`,
    /// and both datasets must have the same number of them.
    /// This is weaker than RDF isomorphism.
    pub fn equals(&self, other: &Dataset) -> bool {
        let mut count: isize = 0;
        for quad in other.iter().filter(|q| !q.subject().is_blank_node()) {
            if !self.has(quad) {
                return false;
            }
            count += 1;
        }
        count -= self
            .iter()
            .filter(|q| !q.subject().is_blank_node())
            .count() as isize;
        count == 0
    }

    //

    /// Replace every quad by the result of `f`, in order.
    ///
    /// Each replacement is visible to the following calls of `f`.
    /// Duplicates are not removed (but are logged as a warning).
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&RdfQuad, &Dataset) -> RdfQuad,
    {
        for i in 0..self.quads.len() {
            let new = f(&self.quads[i], self);
            self.quads[i] = new;
            if self.has_duplicate(i) {
                log::warn!("for_each produced a duplicate quad: {}", self.quads[i]);
            }
        }
        log::debug!("replaced {} quads", self.len());
    }

    /// Whether another quad is equal to the one at index `i`.
    fn has_duplicate(&self, i: usize) -> bool {
        let quad = &self.quads[i];
        self.quads
            .iter()
            .enumerate()
            .any(|(j, q)| j != i && Quad::eq(q, quad))
    }

    /// Call `f` on every quad matching `filter`, in order,
    /// replacing the quad with the returned one, or removing it if `f` returns `None`.
    ///
    /// Quads are removed once all of them have been visited.
    pub fn for_each_matching<'f, F, C>(&mut self, filter: F, mut f: C) -> DResult<()>
    where
        F: Into<Filter<'f>>,
        C: FnMut(&RdfQuad, &Dataset) -> Option<RdfQuad>,
    {
        let indices = self.collect_indices(filter.into(), true)?;
        let mut to_remove = Vec::new();
        for i in indices {
            match f(&self.quads[i], self) {
                Some(quad) => {
                    self.quads[i] = quad;
                    if self.has_duplicate(i) {
                        log::warn!(
                            "for_each_matching produced a duplicate quad: {}",
                            self.quads[i]
                        );
                    }
                }
                None => to_remove.push(i),
            }
        }
        log::debug!("for_each_matching removed {} quads", to_remove.len());
        if !to_remove.is_empty() {
            let mut to_remove = to_remove.into_iter().peekable();
            let mut i = 0;
            self.quads.retain(|_| {
                let keep = to_remove.next_if_eq(&i).is_none();
                i += 1;
                keep
            });
        }
        Ok(())
    }

    /// A new dataset made of the results of `f` applied to every quad, without duplicates.
    pub fn map<F>(&self, mut f: F) -> Dataset
    where
        F: FnMut(&RdfQuad, &Dataset) -> RdfQuad,
    {
        let mut ret = Dataset::new();
        for quad in self {
            ret.push_unique(f(quad, self));
        }
        ret
    }

    /// Fold every quad into an accumulator, in order.
    pub fn reduce<A, F>(&self, mut f: F, initial: A) -> A
    where
        F: FnMut(A, &RdfQuad, &Dataset) -> A,
    {
        self.quads
            .iter()
            .fold(initial, |acc, quad| f(acc, quad, self))
    }

    /// Whether at least one quad matches `filter`.
    pub fn any<'f, F: Into<Filter<'f>>>(&self, filter: F) -> DResult<bool> {
        Ok(self.indices(filter.into(), true).next().transpose()?.is_some())
    }

    /// Whether no quad matches `filter`.
    pub fn none<'f, F: Into<Filter<'f>>>(&self, filter: F) -> DResult<bool> {
        self.any(filter).map(|found| !found)
    }

    /// Whether every quad matches `filter` (always true for an empty dataset).
    pub fn every<'f, F: Into<Filter<'f>>>(&self, filter: F) -> DResult<bool> {
        let mut count = 0;
        for res in self.indices(filter.into(), true) {
            res?;
            count += 1;
        }
        Ok(count == self.len())
    }

    /// Like [`Dataset::for_each`], but `f` may fail.
    ///
    /// Stops at the first error, keeping the replacements already done.
    pub fn try_for_each<F, E>(&mut self, mut f: F) -> DResult<()>
    where
        F: FnMut(&RdfQuad, &Dataset) -> Result<RdfQuad, E>,
        E: Into<CallbackError>,
    {
        for i in 0..self.quads.len() {
            let new = f(&self.quads[i], self).map_err(|err| DatasetError::Callback(err.into()))?;
            self.quads[i] = new;
            if self.has_duplicate(i) {
                log::warn!("try_for_each produced a duplicate quad: {}", self.quads[i]);
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a RdfQuad;
    type IntoIter = std::slice::Iter<'a, RdfQuad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.iter()
    }
}

impl IntoIterator for Dataset {
    type Item = RdfQuad;
    type IntoIter = std::vec::IntoIter<RdfQuad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.into_iter()
    }
}

/// Duplicates are skipped.
impl FromIterator<RdfQuad> for Dataset {
    fn from_iter<I: IntoIterator<Item = RdfQuad>>(iter: I) -> Self {
        let mut ret = Dataset::new();
        ret.extend(iter);
        ret
    }
}

/// Duplicates are skipped.
impl Extend<RdfQuad> for Dataset {
    fn extend<I: IntoIterator<Item = RdfQuad>>(&mut self, iter: I) {
        for quad in iter {
            self.push_unique(quad);
        }
    }
}

/// One quad per line.
impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quad in &self.quads {
            writeln!(f, "{quad}")?;
        }
        Ok(())
    }
}
