//! Core State trait for automaton states.
//!
//! A state is an opaque identity: the engine only ever compares, hashes and
//! clones it. Anything that can do those three things can be a state.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// # Required Traits
///
/// - `Clone`: the engine keeps its own copies for the cursor and history
/// - `Eq` + `Hash`: states key the transition relation, so the hash must be
///   consistent with equality
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use nondet::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// struct Tile {
///     x: i32,
///     y: i32,
/// }
///
/// impl State for Tile {
///     fn describe(&self) -> String {
///         format!("({}, {})", self.x, self.y)
///     }
/// }
///
/// assert_eq!(Tile { x: 1, y: 2 }.describe(), "(1, 2)");
/// assert_eq!(Tile { x: 1, y: 2 }, Tile { x: 1, y: 2 });
/// ```
pub trait State: Clone + Eq + Hash + Debug {
    /// Human-readable form for logs and diagnostic dumps.
    ///
    /// Never used for comparison. Defaults to the `Debug` form.
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

macro_rules! display_state {
    ($($ty:ty),* $(,)?) => {
        $(
            impl State for $ty {
                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_state!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char);
display_state!(String, &'static str);

impl<A: State, B: State> State for (A, B) {
    fn describe(&self) -> String {
        format!("({}, {})", self.0.describe(), self.1.describe())
    }
}
