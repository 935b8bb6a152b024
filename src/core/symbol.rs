//! Alphabet capability.

use std::fmt::Debug;
use std::hash::Hash;

/// Input symbol accepted by an automaton.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so
/// `char`, `&str`, integers and plain enums all work as alphabets.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}
