//! A single symbol and the states it can lead to.

use super::state::State;
use super::symbol::Symbol;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One symbol plus the set of target states reachable through it from an
/// implicit source.
///
/// Equality and hashing look at the symbol only. Two transitions carrying
/// the same symbol are the same transition, whatever their targets.
///
/// # Example
///
/// ```rust
/// use nondet::core::Transition;
///
/// let mut transition = Transition::with_target('x', "B1");
/// transition.add_target("B2");
/// transition.add_target("B1");
///
/// assert_eq!(transition.len(), 2);
/// assert_eq!(transition, Transition::<&str, char>::new('x'));
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(bound(serialize = "S: State + Serialize, A: Serialize"))]
pub struct Transition<S, A> {
    symbol: A,
    #[serde(serialize_with = "serialize_sorted")]
    targets: HashSet<S>,
}

impl<S: State, A: Symbol> Transition<S, A> {
    /// Create a transition with no targets yet.
    pub fn new(symbol: A) -> Self {
        Self {
            symbol,
            targets: HashSet::new(),
        }
    }

    /// Create a transition with a single initial target.
    pub fn with_target(symbol: A, target: S) -> Self {
        let mut transition = Self::new(symbol);
        transition.targets.insert(target);
        transition
    }

    /// Add a target state.
    ///
    /// Returns `true` if the target set grew. Adding a target that is
    /// already present leaves the set unchanged.
    pub fn add_target(&mut self, target: S) -> bool {
        self.targets.insert(target)
    }

    /// The symbol this transition consumes.
    pub fn symbol(&self) -> &A {
        &self.symbol
    }

    /// Snapshot of the target states.
    pub fn targets(&self) -> HashSet<S> {
        self.targets.clone()
    }

    /// Whether `state` is one of the targets.
    pub fn contains(&self, state: &S) -> bool {
        self.targets.contains(state)
    }

    /// Number of distinct targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the transition has no targets yet.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub(crate) fn target_iter(&self) -> impl Iterator<Item = &S> {
        self.targets.iter()
    }

    pub(crate) fn absorb(&mut self, other: Transition<S, A>) {
        self.targets.extend(other.targets);
    }
}

impl<S, A> Transition<S, A>
where
    S: State + Serialize,
    A: Symbol + Serialize,
{
    /// Pretty-printed JSON dump for debugging. Not a stable format.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<S, A: PartialEq> PartialEq for Transition<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl<S, A: Eq> Eq for Transition<S, A> {}

impl<S, A: Hash> Hash for Transition<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl<S: State, A: Symbol> fmt::Display for Transition<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} -> {{{}}}",
            self.symbol,
            sorted_descriptions(self.targets.iter()).join(", ")
        )
    }
}

/// Described forms of `states`, sorted so diagnostic output is stable.
pub(crate) fn sorted_descriptions<'a, S: State + 'a>(
    states: impl Iterator<Item = &'a S>,
) -> Vec<String> {
    let mut described: Vec<String> = states.map(|state| state.describe()).collect();
    described.sort();
    described
}

/// Targets in the same order `Display` uses, so dumps of equal transitions
/// are byte-identical.
fn serialize_sorted<S, Z>(targets: &HashSet<S>, serializer: Z) -> Result<Z::Ok, Z::Error>
where
    S: State + Serialize,
    Z: Serializer,
{
    let mut sorted: Vec<&S> = targets.iter().collect();
    sorted.sort_by_cached_key(|state| (state.describe(), format!("{state:?}")));
    serializer.collect_seq(sorted)
}
