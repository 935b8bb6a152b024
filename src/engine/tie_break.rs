//! Ready-made tie-break functions.
//!
//! The engine never picks between candidates on its own. These helpers
//! cover the common cases; anything domain-specific should be a closure
//! written by the caller.

use crate::core::State;
use std::collections::HashSet;

/// Pick the candidate whose [`State::describe`] form sorts first, falling
/// back to the `Debug` form when descriptions collide.
///
/// The pick is only reproducible while those two strings tell the
/// candidates apart. States with a custom `describe()` and a `Debug` form
/// that can repeat across distinct values should use [`smallest`].
///
/// # Panics
///
/// Panics if `candidates` is empty. The engine only calls a tie-break
/// with at least one candidate.
///
/// # Example
///
/// ```rust
/// use nondet::engine::tie_break::first_by_description;
/// use std::collections::HashSet;
///
/// let candidates: HashSet<&str> = ["B2", "B1"].into_iter().collect();
/// assert_eq!(first_by_description(&candidates), "B1");
/// ```
pub fn first_by_description<S: State>(candidates: &HashSet<S>) -> S {
    candidates
        .iter()
        .min_by_key(|state| (state.describe(), format!("{state:?}")))
        .cloned()
        .expect("tie-break called with no candidates")
}

/// Pick the least candidate by the state's own [`Ord`].
///
/// The total order makes the pick independent of set iteration order.
///
/// # Panics
///
/// Panics if `candidates` is empty.
///
/// # Example
///
/// ```rust
/// use nondet::engine::tie_break::smallest;
/// use std::collections::HashSet;
///
/// let candidates: HashSet<u32> = [30, 4, 12].into_iter().collect();
/// assert_eq!(smallest(&candidates), 4);
/// ```
pub fn smallest<S: State + Ord>(candidates: &HashSet<S>) -> S {
    candidates
        .iter()
        .min()
        .cloned()
        .expect("tie-break called with no candidates")
}

/// Build a tie-break that picks the first state of `order` present among
/// the candidates, falling back to [`first_by_description`].
///
/// # Example
///
/// ```rust
/// use nondet::engine::tie_break::prefer;
/// use std::collections::HashSet;
///
/// let pick = prefer(vec!["B2", "B1"]);
/// let candidates: HashSet<&str> = ["B1", "B2"].into_iter().collect();
/// assert_eq!(pick(&candidates), "B2");
///
/// let others: HashSet<&str> = ["C", "D"].into_iter().collect();
/// assert_eq!(pick(&others), "C");
/// ```
pub fn prefer<S: State>(order: Vec<S>) -> impl Fn(&HashSet<S>) -> S {
    move |candidates: &HashSet<S>| {
        order
            .iter()
            .find(|state| candidates.contains(*state))
            .cloned()
            .unwrap_or_else(|| first_by_description(candidates))
    }
}
