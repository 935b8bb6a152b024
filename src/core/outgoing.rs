//! Every transition leaving one source state.

use super::state::State;
use super::symbol::Symbol;
use super::transition::{sorted_descriptions, Transition};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

/// All transitions defined from a single source state.
///
/// Holds one [`Transition`] per distinct symbol. Adding a second target for
/// a symbol merges into the existing transition, which is what makes the
/// relation nondeterministic.
///
/// Equality and hashing look at the source state only.
///
/// # Example
///
/// ```rust
/// use nondet::core::OutgoingSet;
///
/// let mut outgoing = OutgoingSet::new("A");
/// outgoing.add_transition('x', "B1");
/// outgoing.add_transition('x', "B2");
/// outgoing.add_transition('y', "C");
///
/// assert_eq!(outgoing.targets_for(&'x').len(), 2);
/// assert_eq!(outgoing.reachable_states().len(), 3);
/// assert!(outgoing.targets_for(&'z').is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct OutgoingSet<S, A> {
    source: S,
    transitions: HashMap<A, Transition<S, A>>,
}

impl<S: State, A: Symbol> OutgoingSet<S, A> {
    /// Create an empty set bound to `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            transitions: HashMap::new(),
        }
    }

    /// Create a set bound to `source` holding a single transition.
    pub fn with_transition(source: S, symbol: A, target: S) -> Self {
        let mut outgoing = Self::new(source);
        outgoing.add_transition(symbol, target);
        outgoing
    }

    /// The state every transition in this set leaves from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Add `source --symbol--> target`.
    ///
    /// Merges into the existing transition for `symbol` if there is one.
    /// Returns `true` if the relation grew.
    pub fn add_transition(&mut self, symbol: A, target: S) -> bool {
        match self.transitions.get_mut(&symbol) {
            Some(transition) => transition.add_target(target),
            None => {
                self.transitions
                    .insert(symbol.clone(), Transition::with_target(symbol, target));
                true
            }
        }
    }

    /// Union of every target reachable from the source by any symbol.
    pub fn reachable_states(&self) -> HashSet<S> {
        self.transitions
            .values()
            .flat_map(|transition| transition.target_iter().cloned())
            .collect()
    }

    /// Every symbol with at least one target from the source.
    pub fn defined_symbols(&self) -> HashSet<A> {
        self.transitions
            .values()
            .filter(|transition| !transition.is_empty())
            .map(|transition| transition.symbol().clone())
            .collect()
    }

    /// Targets reachable via exactly `symbol`; empty if none.
    pub fn targets_for(&self, symbol: &A) -> HashSet<S> {
        self.transitions
            .get(symbol)
            .map(Transition::targets)
            .unwrap_or_default()
    }

    /// The transition for `symbol`, if any.
    pub fn transition(&self, symbol: &A) -> Option<&Transition<S, A>> {
        self.transitions.get(symbol)
    }

    /// Every transition, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S, A>> {
        self.transitions.values()
    }

    /// Absorb every transition of `other` into this set.
    ///
    /// Returns `false` and leaves this set untouched when `other` leaves a
    /// different source.
    pub fn merge(&mut self, other: OutgoingSet<S, A>) -> bool {
        if other.source != self.source {
            return false;
        }
        for (symbol, transition) in other.transitions {
            match self.transitions.get_mut(&symbol) {
                Some(existing) => existing.absorb(transition),
                None => {
                    self.transitions.insert(symbol, transition);
                }
            }
        }
        true
    }

    /// Number of distinct symbols defined from the source.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no symbol is defined from the source.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    fn sorted_transitions(&self) -> Vec<&Transition<S, A>> {
        let mut transitions: Vec<_> = self.transitions.values().collect();
        transitions.sort_by_cached_key(|transition| format!("{:?}", transition.symbol()));
        transitions
    }
}

impl<S, A> OutgoingSet<S, A>
where
    S: State + Serialize,
    A: Symbol + Serialize,
{
    /// Pretty-printed JSON dump for debugging. Not a stable format.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Symbols are not guaranteed to be string-like, so the transitions go out
// as a list rather than a map keyed by symbol.
impl<S, A> Serialize for OutgoingSet<S, A>
where
    S: State + Serialize,
    A: Symbol + Serialize,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut out = serializer.serialize_struct("OutgoingSet", 2)?;
        out.serialize_field("source", &self.source)?;
        out.serialize_field("transitions", &self.sorted_transitions())?;
        out.end()
    }
}

impl<S: PartialEq, A> PartialEq for OutgoingSet<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl<S: Eq, A> Eq for OutgoingSet<S, A> {}

impl<S: Hash, A> Hash for OutgoingSet<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl<S: State, A: Symbol> fmt::Display for OutgoingSet<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.source.describe())?;
        for transition in self.sorted_transitions() {
            writeln!(
                f,
                "  {:?} -> {{{}}}",
                transition.symbol(),
                sorted_descriptions(transition.target_iter()).join(", ")
            )?;
        }
        Ok(())
    }
}
