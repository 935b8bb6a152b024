//! Nondet: a generic nondeterministic finite automaton engine
//!
//! Nondet walks a transition relation one symbol at a time. The relation is
//! built once from caller data; every step hands the candidate next states
//! to a caller-supplied tie-break, so the engine never bakes in a
//! disambiguation policy.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Eq + Hash + Debug` value, via the `State` trait
//! - **Transition**: one symbol and the states it leads to
//! - **OutgoingSet**: every transition leaving one source state
//! - **Automaton**: the relation plus a cursor, with `start()` and `step()`
//!
//! # Example
//!
//! ```rust
//! use nondet::builder::outgoing_sets;
//! use nondet::engine::{Automaton, StepError};
//! use nondet::state_enum;
//!
//! state_enum! {
//!     enum Stage {
//!         Draft,
//!         Review,
//!         Published,
//!     }
//! }
//!
//! let entries = [Stage::Draft, Stage::Published];
//! let mut automaton = Automaton::new(
//!     &entries,
//!     |_| {
//!         outgoing_sets(vec![
//!             (Stage::Draft, "submit", Stage::Review),
//!             (Stage::Review, "approve", Stage::Published),
//!             (Stage::Review, "reject", Stage::Draft),
//!         ])
//!     },
//!     |entry| *entry,
//! )
//! .unwrap();
//!
//! automaton.start();
//! assert!(matches!(
//!     automaton.step(&"approve", |c| *c.iter().next().unwrap()),
//!     Err(StepError::UndefinedSymbol { .. })
//! ));
//! assert!(!automaton.step(&"submit", |c| *c.iter().next().unwrap()).unwrap());
//! assert!(automaton.step(&"approve", |c| *c.iter().next().unwrap()).unwrap());
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use self::core::{OutgoingSet, Relation, State, StepHistory, StepRecord, Symbol, Transition};
pub use engine::{Automaton, Phase, StepError};
