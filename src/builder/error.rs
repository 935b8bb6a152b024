//! Build errors for automaton construction.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No entries supplied. At least one entry is needed to derive start and final states")]
    NoEntries,

    #[error("Relation builder not specified. Call .relation(fn) before .build()")]
    MissingRelationBuilder,

    #[error("State deriver not specified. Call .states(fn) before .build()")]
    MissingStateDeriver,
}
