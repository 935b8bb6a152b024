//! The full transition relation, keyed by source state.

use super::outgoing::OutgoingSet;
use super::state::State;
use super::symbol::Symbol;
use std::collections::{hash_map, HashMap, HashSet};
use std::fmt;

/// Map from source state to the [`OutgoingSet`] leaving it.
///
/// There is at most one entry per source. Inserting a second set for a
/// source that is already present merges the two.
///
/// # Example
///
/// ```rust
/// use nondet::core::Relation;
///
/// let mut relation = Relation::new();
/// relation.add_transition("A", 'x', "B");
/// relation.add_transition("B", 'y', "C");
///
/// assert_eq!(relation.len(), 2);
/// assert!(relation.get(&"C").is_none());
/// assert_eq!(relation.states().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Relation<S, A> {
    sets: HashMap<S, OutgoingSet<S, A>>,
}

impl<S: State, A: Symbol> Default for Relation<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Symbol> Relation<S, A> {
    /// Create an empty relation.
    pub fn new() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    /// Insert an outgoing set.
    ///
    /// Returns `true` if the source was new, `false` if the set was merged
    /// into an existing entry.
    pub fn insert(&mut self, outgoing: OutgoingSet<S, A>) -> bool {
        match self.sets.entry(outgoing.source().clone()) {
            hash_map::Entry::Occupied(mut entry) => {
                tracing::warn!(
                    source = %outgoing.source().describe(),
                    "duplicate outgoing set for source, merging"
                );
                let merged = entry.get_mut().merge(outgoing);
                debug_assert!(merged, "relation key differs from set source");
                false
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(outgoing);
                true
            }
        }
    }

    /// Add `source --symbol--> target`, creating the source's set if needed.
    pub fn add_transition(&mut self, source: S, symbol: A, target: S) -> bool {
        self.sets
            .entry(source.clone())
            .or_insert_with(|| OutgoingSet::new(source))
            .add_transition(symbol, target)
    }

    /// The outgoing set for `source`, if the relation has one.
    pub fn get(&self, source: &S) -> Option<&OutgoingSet<S, A>> {
        self.sets.get(source)
    }

    /// Whether `source` has an outgoing set.
    pub fn contains_source(&self, source: &S) -> bool {
        self.sets.contains_key(source)
    }

    /// Every source state, in no particular order.
    pub fn sources(&self) -> impl Iterator<Item = &S> {
        self.sets.keys()
    }

    /// Every outgoing set, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &OutgoingSet<S, A>> {
        self.sets.values()
    }

    /// Every state mentioned by the relation, as a source or as a target.
    pub fn states(&self) -> HashSet<S> {
        let mut states: HashSet<S> = self.sets.keys().cloned().collect();
        for outgoing in self.sets.values() {
            states.extend(outgoing.reachable_states());
        }
        states
    }

    /// Number of source states.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no source has been inserted.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<S: State, A: Symbol> FromIterator<OutgoingSet<S, A>> for Relation<S, A> {
    fn from_iter<I: IntoIterator<Item = OutgoingSet<S, A>>>(iter: I) -> Self {
        let mut relation = Self::new();
        relation.extend(iter);
        relation
    }
}

impl<S: State, A: Symbol> Extend<OutgoingSet<S, A>> for Relation<S, A> {
    fn extend<I: IntoIterator<Item = OutgoingSet<S, A>>>(&mut self, iter: I) {
        for outgoing in iter {
            self.insert(outgoing);
        }
    }
}

impl<S, A> IntoIterator for Relation<S, A> {
    type Item = OutgoingSet<S, A>;
    type IntoIter = hash_map::IntoValues<S, OutgoingSet<S, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_values()
    }
}

impl<S: State, A: Symbol> fmt::Display for Relation<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sets: Vec<_> = self.sets.values().collect();
        sets.sort_by_cached_key(|outgoing| outgoing.source().describe());
        for outgoing in sets {
            write!(f, "{outgoing}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_transition_creates_sets_on_demand() {
        let mut relation = Relation::new();
        relation.add_transition("A", 'x', "B");
        relation.add_transition("A", 'x', "C");

        assert_eq!(relation.len(), 1);
        assert_eq!(relation.get(&"A").unwrap().targets_for(&'x').len(), 2);
    }

    #[test]
    fn duplicate_sources_are_merged() {
        let relation: Relation<&str, char> = vec![
            OutgoingSet::with_transition("A", 'x', "B"),
            OutgoingSet::with_transition("A", 'x', "C"),
            OutgoingSet::with_transition("A", 'y', "D"),
        ]
        .into_iter()
        .collect();

        let outgoing = relation.get(&"A").unwrap();
        assert_eq!(relation.len(), 1);
        assert_eq!(outgoing.targets_for(&'x').len(), 2);
        assert_eq!(outgoing.targets_for(&'y').len(), 1);
    }

    #[test]
    fn insert_reports_new_sources() {
        let mut relation = Relation::new();
        assert!(relation.insert(OutgoingSet::with_transition("A", 'x', "B")));
        assert!(!relation.insert(OutgoingSet::with_transition("A", 'y', "B")));
        assert!(relation.insert(OutgoingSet::with_transition("B", 'y', "C")));
    }

    #[test]
    fn states_include_sinks() {
        let mut relation = Relation::new();
        relation.add_transition("A", 'x', "B");
        relation.add_transition("B", 'y', "C");

        let states = relation.states();
        assert!(states.contains("A"));
        assert!(states.contains("C"));
        assert!(!relation.contains_source(&"C"));
    }

    #[test]
    fn display_orders_sources() {
        let mut relation = Relation::new();
        relation.add_transition("B", 'y', "C");
        relation.add_transition("A", 'x', "B");

        assert_eq!(relation.to_string(), "A:\n  'x' -> {B}\nB:\n  'y' -> {C}\n");
    }

    #[test]
    fn into_iter_yields_every_set() {
        let mut relation = Relation::new();
        relation.add_transition("A", 'x', "B");
        relation.add_transition("B", 'y', "C");

        let mut sources: Vec<_> = relation.into_iter().map(|o| *o.source()).collect();
        sources.sort();
        assert_eq!(sources, vec!["A", "B"]);
    }
}
