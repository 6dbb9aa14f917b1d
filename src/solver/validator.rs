//! Replay-based validation of solution trails

use super::Solution;
use crate::pegs::{Board, Jump, Topology};
use std::fmt;

/// Validates solutions by replaying them on a fresh board
pub struct TrailValidator {
    topology: Topology,
}

/// Result of trail validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub moves_checked: usize,
    pub final_peg: Option<u8>,
    pub violations: Vec<TrailViolation>,
}

/// A single rule broken by a trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailViolation {
    /// Jump is not an entry of the move table
    UnknownJump { step: usize, jump: Jump },
    /// Jump was not playable on the board it was applied to
    IllegalJump { step: usize, jump: Jump },
    /// Recorded board differs from the replayed one
    BoardMismatch { step: usize, expected: Board, recorded: Board },
    /// Peg count did not drop by exactly one
    PegCountJump { step: usize, before: usize, after: usize },
    /// Different numbers of moves and boards
    LengthMismatch { moves: usize, boards: usize },
    /// Initial board is not a full board with one hole
    BadInitialBoard { pegs: usize, cells: usize },
    /// More than one peg remains at the end
    NotReduced { pegs: usize },
    /// Last peg is not on the required cell
    WrongFinalPeg { expected: u8, actual: Option<u8> },
}

impl fmt::Display for TrailViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailViolation::UnknownJump { step, jump } => write!(
                f,
                "Step {}: jump ({}, {}, {}) is not in the move table",
                step, jump.from, jump.over, jump.to
            ),
            TrailViolation::IllegalJump { step, jump } => write!(
                f,
                "Step {}: jump ({}, {}, {}) is not playable on the current board",
                step, jump.from, jump.over, jump.to
            ),
            TrailViolation::BoardMismatch { step, expected, recorded } => write!(
                f,
                "Step {}: recorded board {} but replay gives {}",
                step, recorded, expected
            ),
            TrailViolation::PegCountJump { step, before, after } => write!(
                f,
                "Step {}: peg count went from {} to {}",
                step, before, after
            ),
            TrailViolation::LengthMismatch { moves, boards } => write!(
                f,
                "Trail has {} moves but {} boards",
                moves, boards
            ),
            TrailViolation::BadInitialBoard { pegs, cells } => write!(
                f,
                "Initial board has {} pegs on {} cells, expected exactly one hole",
                pegs, cells
            ),
            TrailViolation::NotReduced { pegs } => {
                write!(f, "Final board still has {} pegs", pegs)
            }
            TrailViolation::WrongFinalPeg { expected, actual } => match actual {
                Some(cell) => write!(f, "Final peg is on {} instead of {}", cell, expected),
                None => write!(f, "Final peg is not on {}", expected),
            },
        }
    }
}

impl TrailValidator {
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }

    /// Replay every jump of `solution` and collect rule violations
    pub fn validate(&self, solution: &Solution) -> ValidationResult {
        let mut violations = Vec::new();

        if solution.moves.len() != solution.boards.len() {
            violations.push(TrailViolation::LengthMismatch {
                moves: solution.moves.len(),
                boards: solution.boards.len(),
            });
        }

        let initial = &solution.initial;
        if initial.cell_count() != self.topology.cell_count()
            || initial.peg_count() + 1 != initial.cell_count()
        {
            violations.push(TrailViolation::BadInitialBoard {
                pegs: initial.peg_count(),
                cells: initial.cell_count(),
            });
        }

        let mut board = initial.clone();
        for (i, jump) in solution.moves.iter().enumerate() {
            let step = i + 1;

            // replay cannot continue past a jump that is not playable here
            if !self.topology.contains_jump(jump) {
                violations.push(TrailViolation::UnknownJump { step, jump: *jump });
                break;
            }
            if !board.can_jump(jump) {
                violations.push(TrailViolation::IllegalJump { step, jump: *jump });
                break;
            }

            let before = board.peg_count();
            board.apply(jump);
            let after = board.peg_count();

            if let Some(recorded) = solution.boards.get(i) {
                if *recorded != board {
                    violations.push(TrailViolation::BoardMismatch {
                        step,
                        expected: board.clone(),
                        recorded: recorded.clone(),
                    });
                }
                if recorded.peg_count() + 1 != before {
                    violations.push(TrailViolation::PegCountJump {
                        step,
                        before,
                        after: recorded.peg_count(),
                    });
                }
            } else if after + 1 != before {
                violations.push(TrailViolation::PegCountJump { step, before, after });
            }
        }

        let final_board = solution.final_board();
        let pegs = final_board.peg_count();
        if pegs != 1 {
            violations.push(TrailViolation::NotReduced { pegs });
        }
        let final_peg = final_board.last_peg();
        if let Some(expected) = solution.target_peg {
            if final_peg != Some(expected) {
                violations.push(TrailViolation::WrongFinalPeg { expected, actual: final_peg });
            }
        }

        ValidationResult {
            is_valid: violations.is_empty(),
            moves_checked: solution.moves.len(),
            final_peg,
            violations,
        }
    }
}

impl ValidationResult {
    /// Human-readable description of the first few violations
    pub fn error_message(&self) -> Option<String> {
        if self.is_valid {
            return None;
        }

        let mut message = format!("Found {} violation(s). ", self.violations.len());
        for violation in self.violations.iter().take(3) {
            message.push_str(&format!("{}; ", violation));
        }
        if self.violations.len() > 3 {
            message.push_str(&format!("... and {} more", self.violations.len() - 3));
        }
        Some(message)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trail Validation:")?;
        writeln!(f, "  Valid: {}", self.is_valid)?;
        writeln!(f, "  Moves checked: {}", self.moves_checked)?;
        match self.final_peg {
            Some(cell) => writeln!(f, "  Final peg: {}", cell)?,
            None => writeln!(f, "  Final peg: none")?,
        }
        for violation in &self.violations {
            writeln!(f, "  - {}", violation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PegProblem;

    fn solution(start_hole: i64, target_peg: Option<i64>) -> Solution {
        PegProblem::from_values(start_hole, target_peg, Topology::triangle())
            .unwrap()
            .solve()
            .unwrap()
    }

    #[test]
    fn test_valid_solution() {
        let validator = TrailValidator::new(Topology::triangle());
        let result = validator.validate(&solution(13, Some(13)));

        assert!(result.is_valid, "{}", result);
        assert_eq!(result.moves_checked, 13);
        assert_eq!(result.final_peg, Some(13));
        assert!(result.error_message().is_none());
    }

    #[test]
    fn test_swapped_moves_are_rejected() {
        let validator = TrailValidator::new(Topology::triangle());
        let mut tampered = solution(13, None);
        tampered.moves.swap(0, 1);

        let result = validator.validate(&tampered);
        assert!(!result.is_valid);
        assert!(matches!(
            result.violations[0],
            TrailViolation::IllegalJump { step: 1, .. }
        ));
    }

    #[test]
    fn test_unknown_jump_is_rejected() {
        let validator = TrailValidator::new(Topology::triangle());
        let mut tampered = solution(13, None);
        tampered.moves[0] = Jump::new(3, 8, 13);

        let result = validator.validate(&tampered);
        assert!(result
            .violations
            .contains(&TrailViolation::UnknownJump { step: 1, jump: Jump::new(3, 8, 13) }));
    }

    #[test]
    fn test_edited_board_is_rejected() {
        let validator = TrailValidator::new(Topology::triangle());
        let mut tampered = solution(13, None);
        tampered.boards[3] = Board::parse("PPHHHPPPPPPPPPP").unwrap();

        let result = validator.validate(&tampered);
        assert!(!result.is_valid);
        assert!(result
            .violations
            .iter()
            .any(|v| matches!(v, TrailViolation::BoardMismatch { step: 4, .. })));
        assert!(result.error_message().unwrap().starts_with("Found"));
    }

    #[test]
    fn test_off_board_jump_is_rejected() {
        let validator = TrailValidator::new(Topology::triangle());
        let mut tampered = solution(13, None);
        tampered.moves[0] = Jump::new(1, 2, 0);

        let result = validator.validate(&tampered);
        assert!(!result.is_valid);
        assert_eq!(
            result.violations[0],
            TrailViolation::UnknownJump { step: 1, jump: Jump::new(1, 2, 0) }
        );
        assert!(!result
            .violations
            .iter()
            .any(|v| matches!(v, TrailViolation::BoardMismatch { .. })));
    }

    #[test]
    fn test_truncated_trail_is_rejected() {
        let validator = TrailValidator::new(Topology::triangle());
        let mut tampered = solution(13, Some(13));
        tampered.moves.pop();
        tampered.boards.pop();

        let result = validator.validate(&tampered);
        assert!(result.violations.contains(&TrailViolation::NotReduced { pegs: 2 }));
        assert!(result
            .violations
            .iter()
            .any(|v| matches!(v, TrailViolation::WrongFinalPeg { expected: 13, .. })));
    }

    #[test]
    fn test_wrong_target_is_rejected() {
        let validator = TrailValidator::new(Topology::triangle());
        let mut tampered = solution(13, None);
        tampered.target_peg = Some(1);

        let result = validator.validate(&tampered);
        assert_eq!(
            result.violations,
            vec![TrailViolation::WrongFinalPeg { expected: 1, actual: Some(13) }]
        );
    }
}
