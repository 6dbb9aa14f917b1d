//! Error types for the peg puzzle solver

use thiserror::Error;

/// Errors surfaced by the solver core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PegError {
    /// Start hole, target peg or topology outside the valid domain
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The search exhausted every branch without reaching a winning board
    #[error(
        "no solution could be found for start hole {start_hole} and {}",
        describe_target(.target_peg)
    )]
    NoSolutionFound {
        start_hole: u8,
        target_peg: Option<u8>,
    },
}

fn describe_target(target_peg: &Option<u8>) -> String {
    match target_peg {
        Some(cell) => format!("final peg at {}", cell),
        None => "any final peg".to_string(),
    }
}

impl PegError {
    /// Whether this error means the input was rejected before searching
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, PegError::InvalidConfiguration(_))
    }
}
