//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder, a macro for declaring enum
//! states, and helpers for writing relation builders with minimal
//! boilerplate.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;

use crate::core::{OutgoingSet, Relation, State, Symbol};

/// Group `(source, symbol, target)` triples into outgoing sets, one per
/// source.
///
/// Handy as the body of a relation builder.
///
/// # Example
///
/// ```
/// use nondet::builder::outgoing_sets;
///
/// let sets = outgoing_sets(vec![("A", 'x', "B"), ("A", 'x', "C"), ("B", 'y', "C")]);
///
/// assert_eq!(sets.len(), 2);
/// ```
pub fn outgoing_sets<S, A, I>(triples: I) -> Vec<OutgoingSet<S, A>>
where
    S: State,
    A: Symbol,
    I: IntoIterator<Item = (S, A, S)>,
{
    let mut relation = Relation::new();
    for (source, symbol, target) in triples {
        relation.add_transition(source, symbol, target);
    }
    relation.into_iter().collect()
}

/// Outgoing sets for a straight path through `states`, every hop
/// consuming `symbol`.
///
/// # Example
///
/// ```
/// use nondet::builder::linear_chain;
///
/// let sets = linear_chain(&["A", "B", "C"], '>');
///
/// assert_eq!(sets.len(), 2);
/// ```
pub fn linear_chain<S, A>(states: &[S], symbol: A) -> Vec<OutgoingSet<S, A>>
where
    S: State,
    A: Symbol,
{
    outgoing_sets(
        states
            .windows(2)
            .map(|pair| (pair[0].clone(), symbol.clone(), pair[1].clone())),
    )
}
