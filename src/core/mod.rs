//! Core automaton types.
//!
//! This module contains the data side of the automaton:
//! - State and symbol capabilities
//! - Transitions and per-source outgoing sets
//! - The keyed transition relation
//! - Step history
//!
//! Nothing here holds a cursor; stepping lives in [`crate::engine`].

mod history;
mod outgoing;
mod relation;
mod state;
mod symbol;
mod transition;

pub use history::{StepHistory, StepRecord};
pub use outgoing::OutgoingSet;
pub use relation::Relation;
pub use state::State;
pub use symbol::Symbol;
pub use transition::Transition;
