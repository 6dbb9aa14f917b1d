//! Validated puzzle configuration

use crate::error::PegError;
use crate::pegs::{Board, Topology};
use serde::{Deserialize, Serialize};

/// Starting hole and optional required position of the last peg.
/// Only constructible through [`PuzzleConfig::new`], so both values are in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    start_hole: u8,
    target_peg: Option<u8>,
}

impl PuzzleConfig {
    pub fn new(
        start_hole: i64,
        target_peg: Option<i64>,
        topology: &Topology,
    ) -> Result<Self, PegError> {
        let cells = topology.cell_count();

        if !topology.contains_cell(start_hole) {
            return Err(PegError::InvalidConfiguration(format!(
                "start hole {} is outside 1..={}",
                start_hole, cells
            )));
        }
        if let Some(target) = target_peg {
            if !topology.contains_cell(target) {
                return Err(PegError::InvalidConfiguration(format!(
                    "target peg {} is outside 1..={}",
                    target, cells
                )));
            }
        }

        Ok(Self {
            start_hole: start_hole as u8,
            target_peg: target_peg.map(|target| target as u8),
        })
    }

    pub fn start_hole(&self) -> u8 {
        self.start_hole
    }

    pub fn target_peg(&self) -> Option<u8> {
        self.target_peg
    }

    /// Full board with the starting hole emptied
    pub fn initial_board(&self, topology: &Topology) -> Board {
        Board::new(topology.cell_count(), self.start_hole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_configs() {
        let topology = Topology::triangle();
        for start in 1..=15 {
            let config = PuzzleConfig::new(start, None, &topology).unwrap();
            assert_eq!(config.start_hole() as i64, start);
            assert_eq!(config.target_peg(), None);
        }

        let config = PuzzleConfig::new(13, Some(15), &topology).unwrap();
        assert_eq!(config.target_peg(), Some(15));
    }

    #[test]
    fn test_out_of_range_values() {
        let topology = Topology::triangle();
        for start in [-1, 0, 16, 300] {
            let err = PuzzleConfig::new(start, None, &topology).unwrap_err();
            assert!(err.is_invalid_configuration());
        }
        for target in [-1, 0, 16, 256] {
            let err = PuzzleConfig::new(13, Some(target), &topology).unwrap_err();
            assert!(err.is_invalid_configuration());
        }
    }

    #[test]
    fn test_initial_board() {
        let topology = Topology::triangle();
        let board = PuzzleConfig::new(5, None, &topology).unwrap().initial_board(&topology);
        assert_eq!(board.peg_count(), 14);
        assert!(!board.is_peg(5));
    }
}
