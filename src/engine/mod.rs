//! Stepping engine.
//!
//! The [`Automaton`] owns the transition relation and a single cursor.
//! Nondeterminism is resolved one step at a time by a tie-break function
//! supplied with each call to [`Automaton::step`]; see [`tie_break`] for
//! ready-made ones.

mod automaton;
mod error;
pub mod tie_break;

pub use automaton::{Automaton, Phase};
pub use error::StepError;
