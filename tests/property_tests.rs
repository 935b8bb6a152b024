//! Property-based tests for the automaton types.
//!
//! These tests use proptest to verify the merge, identity and stepping
//! laws hold across many randomly generated inputs.

use nondet::core::{OutgoingSet, State, Transition};
use nondet::engine::{tie_break, Automaton, StepError};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum TestState {
    Initial,
    Processing,
    Complete,
    Failed,
}

impl State for TestState {}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> TestState {
        match variant {
            0 => TestState::Initial,
            1 => TestState::Processing,
            2 => TestState::Complete,
            _ => TestState::Failed,
        }
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn add_transition_merges_targets(
        symbol in any::<char>(),
        t1 in arbitrary_state(),
        t2 in arbitrary_state(),
    ) {
        let mut outgoing = OutgoingSet::new(TestState::Initial);
        outgoing.add_transition(symbol, t1.clone());
        outgoing.add_transition(symbol, t2.clone());

        let expected: HashSet<TestState> = [t1, t2].into_iter().collect();
        prop_assert_eq!(outgoing.targets_for(&symbol), expected);
    }

    #[test]
    fn add_transition_is_idempotent(symbol in any::<char>(), target in arbitrary_state()) {
        let mut outgoing = OutgoingSet::new(TestState::Initial);
        outgoing.add_transition(symbol, target.clone());
        outgoing.add_transition(symbol, target.clone());

        prop_assert_eq!(outgoing.targets_for(&symbol).len(), 1);
        prop_assert!(outgoing.targets_for(&symbol).contains(&target));
    }

    #[test]
    fn transitions_with_equal_symbols_are_equal(
        symbol in any::<u16>(),
        left in prop::collection::vec(arbitrary_state(), 0..4),
        right in prop::collection::vec(arbitrary_state(), 0..4),
    ) {
        let mut a = Transition::new(symbol);
        for state in left {
            a.add_target(state);
        }
        let mut b = Transition::new(symbol);
        for state in right {
            b.add_target(state);
        }

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn outgoing_sets_with_equal_sources_are_equal(
        source in arbitrary_state(),
        edges in prop::collection::vec((any::<u8>(), arbitrary_state()), 0..6),
    ) {
        let empty: OutgoingSet<TestState, u8> = OutgoingSet::new(source.clone());
        let mut full = OutgoingSet::new(source);
        for (symbol, target) in edges {
            full.add_transition(symbol, target);
        }

        prop_assert_eq!(&empty, &full);
        prop_assert_eq!(hash_of(&empty), hash_of(&full));
    }

    #[test]
    fn start_places_cursor_on_first_entry(entries in prop::collection::vec(any::<u8>(), 1..10)) {
        let mut automaton = Automaton::<u8, char>::new(&entries[..], |_| Vec::new(), |e| *e).unwrap();
        automaton.start();

        prop_assert_eq!(automaton.current_state(), Some(&entries[0]));
        prop_assert_eq!(automaton.final_state(), &entries[entries.len() - 1]);
    }

    #[test]
    fn tie_break_receives_exact_candidates(
        targets in prop::collection::hash_set(1..50u32, 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let entries = [0u32, 100];
        let relation_targets = targets.clone();
        let mut automaton = Automaton::new(
            &entries,
            move |_| {
                let mut outgoing = OutgoingSet::new(0u32);
                for target in relation_targets {
                    outgoing.add_transition('x', target);
                }
                vec![outgoing]
            },
            |e| *e,
        )
        .unwrap();
        automaton.start();

        let mut ordered: Vec<u32> = targets.iter().copied().collect();
        ordered.sort_unstable();
        let chosen = ordered[pick.index(ordered.len())];

        let mut seen = None;
        let accepted = automaton
            .step(&'x', |candidates| {
                seen = Some(candidates.clone());
                chosen
            })
            .unwrap();

        prop_assert!(!accepted);
        prop_assert_eq!(seen, Some(targets));
        prop_assert_eq!(automaton.current_state(), Some(&chosen));
    }

    #[test]
    fn undefined_symbol_never_moves_cursor(symbol in any::<char>().prop_filter("defined", |c| *c != 'x')) {
        let entries = [TestState::Initial, TestState::Complete];
        let mut automaton = Automaton::new(
            &entries,
            |_| vec![OutgoingSet::with_transition(TestState::Initial, 'x', TestState::Complete)],
            |e| e.clone(),
        )
        .unwrap();
        automaton.start();

        let result = automaton.step(&symbol, tie_break::first_by_description);

        prop_assert!(matches!(result, Err(StepError::UndefinedSymbol { .. })), "unexpected {:?}", result);
        prop_assert_eq!(automaton.current_state(), Some(&TestState::Initial));
        prop_assert_eq!(automaton.previous_state(), None);
    }

    #[test]
    fn history_path_matches_steps(steps in 1..20usize) {
        let states: Vec<u32> = (0..=steps as u32).collect();
        let chain = states.clone();
        let mut automaton = Automaton::new(
            &states[..],
            move |_| nondet::builder::linear_chain(&chain, ()),
            |e| *e,
        )
        .unwrap();
        automaton.start();

        let mut accepted = false;
        for _ in 0..steps {
            accepted = automaton.step(&(), tie_break::first_by_description).unwrap();
        }

        prop_assert!(accepted);
        let path: Vec<u32> = automaton.history().get_path().into_iter().copied().collect();
        prop_assert_eq!(path, states);
    }
}
