//! Tile Scan Example
//!
//! Replays a recorded walk over a grid. Each reading names the tile the
//! walker stood on and the heading it left with; the automaton is built from
//! those readings and then driven one heading at a time.
//!
//! Run with: cargo run --example tile_scan

use nondet::builder::outgoing_sets;
use nondet::core::{OutgoingSet, State};
use nondet::engine::{tie_break, Automaton};

#[derive(Clone, Debug)]
struct Reading {
    tile: (i32, i32),
    heading: Option<char>,
}

fn relation(readings: &[Reading]) -> Vec<OutgoingSet<(i32, i32), char>> {
    outgoing_sets(readings.windows(2).filter_map(|pair| {
        pair[0]
            .heading
            .map(|heading| (pair[0].tile, heading, pair[1].tile))
    }))
}

fn main() {
    println!("=== Tile Scan Example ===\n");

    // The walk revisits (1, 0) and leaves it eastwards twice, once to
    // (2, 0) and once to (2, 1), so 'E' from (1, 0) is nondeterministic.
    let readings = vec![
        Reading { tile: (0, 0), heading: Some('E') },
        Reading { tile: (1, 0), heading: Some('E') },
        Reading { tile: (2, 0), heading: Some('W') },
        Reading { tile: (1, 0), heading: Some('E') },
        Reading { tile: (2, 1), heading: Some('N') },
        Reading { tile: (2, 2), heading: None },
    ];

    let mut automaton = match Automaton::new(&readings, relation, |r: &Reading| r.tile) {
        Ok(automaton) => automaton,
        Err(e) => {
            eprintln!("Could not build automaton: {e}");
            return;
        }
    };

    println!("Relation:\n{}", automaton.relation());

    automaton.start();
    // Always head for the tile furthest north.
    let northmost = |candidates: &std::collections::HashSet<(i32, i32)>| {
        candidates
            .iter()
            .copied()
            .max_by_key(|tile| tile.1)
            .unwrap_or((0, 0))
    };

    for heading in ['E', 'E', 'N'] {
        match automaton.step(&heading, northmost) {
            Ok(accepted) => {
                let here = automaton
                    .current_state()
                    .map(State::describe)
                    .unwrap_or_default();
                println!("{heading} -> {here} (accepted: {accepted})");
            }
            Err(e) => {
                println!("{heading} rejected: {e}");
                break;
            }
        }
    }

    println!("\nRestarting with a deterministic tie-break:");
    automaton.start();
    for heading in ['E', 'E', 'W'] {
        match automaton.step(&heading, tie_break::first_by_description) {
            Ok(accepted) => println!("{heading} -> {:?} (accepted: {accepted})", automaton.current_state()),
            Err(e) => println!("{heading} rejected: {e}"),
        }
    }

    println!("\nPath: {:?}", automaton.history().get_path());
}
