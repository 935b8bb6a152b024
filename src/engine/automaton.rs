//! Automaton that walks a transition relation one symbol at a time.

use crate::builder::BuildError;
use crate::core::{OutgoingSet, Relation, State, StepHistory, StepRecord, Symbol};
use crate::engine::error::StepError;
use chrono::Utc;
use std::collections::HashSet;

/// Where the cursor currently sits relative to the final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `start()` has not been called yet
    Uninitialized,

    /// Cursor is set and not on the final state
    Active,

    /// Cursor is on the final state
    Accepted,
}

/// Nondeterministic finite automaton with a single cursor.
///
/// The transition relation, the start state and the final state are fixed
/// at construction. [`start`](Self::start) places the cursor on the start
/// state and every [`step`](Self::step) moves it to one of the candidate
/// targets, chosen by a caller-supplied tie-break.
///
/// Reaching the final state does not lock the automaton; stepping on from
/// it is legal as long as the relation allows it.
///
/// # Example
///
/// ```rust
/// use nondet::core::OutgoingSet;
/// use nondet::engine::{tie_break, Automaton};
///
/// let entries = ["A", "B", "C"];
/// let mut automaton = Automaton::new(
///     &entries,
///     |entries| {
///         entries
///             .windows(2)
///             .map(|pair| OutgoingSet::with_transition(pair[0], 'x', pair[1]))
///             .collect::<Vec<_>>()
///     },
///     |entry| *entry,
/// )
/// .unwrap();
///
/// automaton.start();
/// assert!(!automaton.step(&'x', tie_break::first_by_description).unwrap());
/// assert!(automaton.step(&'x', tie_break::first_by_description).unwrap());
/// assert_eq!(automaton.current_state(), Some(&"C"));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S, A> {
    relation: Relation<S, A>,
    start: S,
    final_state: S,
    current: Option<S>,
    previous: Option<S>,
    history: StepHistory<S, A>,
}

impl<S: State, A: Symbol> Automaton<S, A> {
    /// Build an automaton from domain entries.
    ///
    /// `relation_builder` is called once with every entry and must produce
    /// one [`OutgoingSet`] per state the automaton will visit. A state left
    /// out is only noticed when a step from it fails with
    /// [`StepError::NoOutgoingTransitions`]. Sets sharing a source are
    /// merged.
    ///
    /// `state_deriver` is applied to the first entry (start state) and the
    /// last entry (final state), and to nothing else.
    ///
    /// Returns [`BuildError::NoEntries`] if `entries` is empty.
    pub fn new<E, R, I, D>(
        entries: &[E],
        relation_builder: R,
        state_deriver: D,
    ) -> Result<Self, BuildError>
    where
        R: FnOnce(&[E]) -> I,
        I: IntoIterator<Item = OutgoingSet<S, A>>,
        D: Fn(&E) -> S,
    {
        let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
            return Err(BuildError::NoEntries);
        };

        let relation: Relation<S, A> = relation_builder(entries).into_iter().collect();
        let start = state_deriver(first);
        let final_state = state_deriver(last);

        Ok(Self::from_parts(relation, start, final_state))
    }

    /// Build an automaton from an already assembled relation.
    pub fn from_parts(relation: Relation<S, A>, start: S, final_state: S) -> Self {
        tracing::debug!(
            sources = relation.len(),
            start = %start.describe(),
            final_state = %final_state.describe(),
            "built transition relation"
        );

        Self {
            relation,
            start,
            final_state,
            current: None,
            previous: None,
            history: StepHistory::new(),
        }
    }

    /// Place the cursor on the start state.
    ///
    /// Calling it again restarts the traversal: the previous state and the
    /// step history are cleared. Acceptance is not reported here, even if
    /// the start state is also the final state.
    pub fn start(&mut self) {
        self.current = Some(self.start.clone());
        self.previous = None;
        self.history.clear();
    }

    /// Consume `symbol` and move the cursor.
    ///
    /// Every target reachable from the current state via `symbol` is handed
    /// to `tie_break`, which picks the next state. The engine does not check
    /// that the pick is one of the candidates.
    ///
    /// Returns `true` if the cursor is now on the final state.
    ///
    /// # Errors
    ///
    /// - [`StepError::NoCurrentState`] before [`start`](Self::start)
    /// - [`StepError::NoOutgoingTransitions`] if the relation has no entry
    ///   for the current state
    /// - [`StepError::UndefinedSymbol`] if no transition on `symbol` leaves
    ///   the current state
    ///
    /// The cursor is left untouched on error.
    pub fn step<F>(&mut self, symbol: &A, tie_break: F) -> Result<bool, StepError>
    where
        F: FnOnce(&HashSet<S>) -> S,
    {
        let (from, candidates) = self.resolve(symbol)?;
        let from = from.clone();

        tracing::trace!(
            from = %from.describe(),
            symbol = ?symbol,
            candidates = candidates.len(),
            "resolving candidates"
        );
        let chosen = tie_break(&candidates);
        let accepted = chosen == self.final_state;

        tracing::debug!(
            from = %from.describe(),
            symbol = ?symbol,
            to = %chosen.describe(),
            accepted,
            "automaton step"
        );

        self.history.record(StepRecord {
            from: from.clone(),
            symbol: symbol.clone(),
            to: chosen.clone(),
            timestamp: Utc::now(),
        });
        self.previous = Some(from);
        self.current = Some(chosen);

        Ok(accepted)
    }

    /// Candidate next states for `symbol`, without moving the cursor.
    ///
    /// Fails exactly when [`step`](Self::step) would, so it doubles as a
    /// pre-check.
    pub fn candidates(&self, symbol: &A) -> Result<HashSet<S>, StepError> {
        self.resolve(symbol).map(|(_, candidates)| candidates)
    }

    /// Symbols that can be stepped on from the current state.
    pub fn available_symbols(&self) -> Result<HashSet<A>, StepError> {
        self.current_outgoing()
            .map(|(_, outgoing)| outgoing.defined_symbols())
    }

    fn current_outgoing(&self) -> Result<(&S, &OutgoingSet<S, A>), StepError> {
        let current = self.current.as_ref().ok_or(StepError::NoCurrentState)?;
        let outgoing =
            self.relation
                .get(current)
                .ok_or_else(|| StepError::NoOutgoingTransitions {
                    state: current.describe(),
                })?;
        Ok((current, outgoing))
    }

    fn resolve(&self, symbol: &A) -> Result<(&S, HashSet<S>), StepError> {
        let (current, outgoing) = self.current_outgoing()?;
        let candidates = outgoing.targets_for(symbol);
        if candidates.is_empty() {
            return Err(StepError::UndefinedSymbol {
                state: current.describe(),
                symbol: format!("{symbol:?}"),
            });
        }
        Ok((current, candidates))
    }

    /// Get current state, `None` before [`start`](Self::start).
    pub fn current_state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// State the cursor was on before the last successful step.
    pub fn previous_state(&self) -> Option<&S> {
        self.previous.as_ref()
    }

    /// The state `start()` places the cursor on.
    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// The single accepting state.
    pub fn final_state(&self) -> &S {
        &self.final_state
    }

    /// Check if the cursor is on the final state.
    pub fn is_accepted(&self) -> bool {
        self.current.as_ref() == Some(&self.final_state)
    }

    /// Where the automaton is in its lifecycle.
    pub fn phase(&self) -> Phase {
        match &self.current {
            None => Phase::Uninitialized,
            Some(current) if *current == self.final_state => Phase::Accepted,
            Some(_) => Phase::Active,
        }
    }

    /// The transition relation built at construction.
    pub fn relation(&self) -> &Relation<S, A> {
        &self.relation
    }

    /// Every state the automaton knows about: relation sources and targets
    /// plus the start and final states.
    pub fn states(&self) -> HashSet<S> {
        let mut states = self.relation.states();
        states.insert(self.start.clone());
        states.insert(self.final_state.clone());
        states
    }

    /// Steps taken since the last [`start`](Self::start).
    pub fn history(&self) -> &StepHistory<S, A> {
        &self.history
    }
}
