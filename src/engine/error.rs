//! Step errors.

use thiserror::Error;

/// Errors that can occur while stepping an automaton.
///
/// Every variant halts the step before the cursor moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("No current state. Call .start() before .step()")]
    NoCurrentState,

    #[error("No outgoing transitions from state '{state}'")]
    NoOutgoingTransitions { state: String },

    #[error("No transition on symbol {symbol} from state '{state}'")]
    UndefinedSymbol { state: String, symbol: String },
}
