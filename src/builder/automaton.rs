//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{OutgoingSet, State, Symbol};
use crate::engine::Automaton;

type RelationFn<E, S, A> = Box<dyn FnOnce(&[E]) -> Vec<OutgoingSet<S, A>>>;
type DeriveFn<E, S> = Box<dyn Fn(&E) -> S>;

/// Builder for constructing automata with a fluent API.
///
/// Collects the entries and the two construction functions, then hands
/// them to [`Automaton::new`] in [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use nondet::builder::AutomatonBuilder;
/// use nondet::core::OutgoingSet;
///
/// let automaton = AutomatonBuilder::new()
///     .entries(vec![1u32, 2, 3])
///     .relation(|entries: &[u32]| {
///         entries
///             .windows(2)
///             .map(|pair| OutgoingSet::with_transition(pair[0], "next", pair[1]))
///             .collect::<Vec<_>>()
///     })
///     .states(|entry: &u32| *entry)
///     .build()
///     .unwrap();
///
/// assert_eq!(automaton.start_state(), &1);
/// assert_eq!(automaton.final_state(), &3);
/// ```
pub struct AutomatonBuilder<E, S, A> {
    entries: Vec<E>,
    relation: Option<RelationFn<E, S, A>>,
    deriver: Option<DeriveFn<E, S>>,
}

impl<E, S: State, A: Symbol> AutomatonBuilder<E, S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            relation: None,
            deriver: None,
        }
    }

    /// Append one entry.
    pub fn entry(mut self, entry: E) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append several entries, in order.
    pub fn entries<I: IntoIterator<Item = E>>(mut self, entries: I) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Set the relation builder (required).
    pub fn relation<F, I>(mut self, builder: F) -> Self
    where
        F: FnOnce(&[E]) -> I + 'static,
        I: IntoIterator<Item = OutgoingSet<S, A>>,
    {
        self.relation = Some(Box::new(move |entries: &[E]| {
            builder(entries).into_iter().collect()
        }));
        self
    }

    /// Set the state deriver (required).
    pub fn states<F>(mut self, deriver: F) -> Self
    where
        F: Fn(&E) -> S + 'static,
    {
        self.deriver = Some(Box::new(deriver));
        self
    }

    /// Build the automaton.
    /// Returns an error if a required piece is missing or there are no
    /// entries.
    pub fn build(self) -> Result<Automaton<S, A>, BuildError> {
        let relation = self.relation.ok_or(BuildError::MissingRelationBuilder)?;
        let deriver = self.deriver.ok_or(BuildError::MissingStateDeriver)?;

        Automaton::new(&self.entries, relation, deriver)
    }
}

impl<E, S: State, A: Symbol> Default for AutomatonBuilder<E, S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tie_break;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {}

    fn workflow() -> AutomatonBuilder<TestState, TestState, &'static str> {
        AutomatonBuilder::new()
            .relation(|_: &[TestState]| {
                vec![
                    OutgoingSet::with_transition(
                        TestState::Initial,
                        "begin",
                        TestState::Processing,
                    ),
                    OutgoingSet::with_transition(
                        TestState::Processing,
                        "finish",
                        TestState::Complete,
                    ),
                ]
            })
            .states(|entry: &TestState| entry.clone())
    }

    #[test]
    fn builder_requires_relation() {
        let result = AutomatonBuilder::<TestState, TestState, char>::new()
            .entry(TestState::Initial)
            .states(|e: &TestState| e.clone())
            .build();

        assert!(matches!(result, Err(BuildError::MissingRelationBuilder)));
    }

    #[test]
    fn builder_requires_deriver() {
        let result = AutomatonBuilder::<TestState, TestState, char>::new()
            .entry(TestState::Initial)
            .relation(|_: &[TestState]| Vec::new())
            .build();

        assert!(matches!(result, Err(BuildError::MissingStateDeriver)));
    }

    #[test]
    fn builder_requires_entries() {
        let result = workflow().build();

        assert!(matches!(result, Err(BuildError::NoEntries)));
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let mut automaton = workflow()
            .entry(TestState::Initial)
            .entry(TestState::Processing)
            .entry(TestState::Complete)
            .build()
            .unwrap();

        automaton.start();
        assert!(!automaton
            .step(&"begin", tie_break::first_by_description)
            .unwrap());
        assert!(automaton
            .step(&"finish", tie_break::first_by_description)
            .unwrap());
    }
}
