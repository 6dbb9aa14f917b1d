//! Solution representation for peg puzzles

use super::engine::{SearchStats, Trail};
use super::PuzzleConfig;
use crate::pegs::{Board, Jump};
use serde::{Deserialize, Serialize};

/// A winning jump sequence together with the board after every jump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Hole emptied before the first jump
    pub start_hole: u8,
    /// Required position of the last peg, if any
    pub target_peg: Option<u8>,
    /// Board before any jump
    pub initial: Board,
    /// Jumps in play order
    pub moves: Vec<Jump>,
    /// Board after each jump, parallel to `moves`
    pub boards: Vec<Board>,
    /// Search counters
    pub stats: SearchStats,
}

/// One jump and the board it produced
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    pub number: usize,
    pub jump: Jump,
    pub board: &'a Board,
}

/// Compact description of a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub start_hole: u8,
    pub target_peg: Option<u8>,
    pub final_peg: Option<u8>,
    pub move_count: usize,
    pub nodes_visited: u64,
    pub dead_ends: u64,
    pub solve_time_ms: u64,
}

impl Solution {
    pub fn new(config: PuzzleConfig, initial: Board, trail: Trail, stats: SearchStats) -> Self {
        Self {
            start_hole: config.start_hole(),
            target_peg: config.target_peg(),
            initial,
            moves: trail.jumps,
            boards: trail.boards,
            stats,
        }
    }

    /// Board after the last jump
    pub fn final_board(&self) -> &Board {
        self.boards.last().unwrap_or(&self.initial)
    }

    /// Position of the single remaining peg
    pub fn final_peg(&self) -> Option<u8> {
        self.final_board().last_peg()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Board after a given jump; 0 is the initial board
    pub fn board_after(&self, move_number: usize) -> Option<&Board> {
        match move_number {
            0 => Some(&self.initial),
            n => self.boards.get(n - 1),
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = Step<'_>> {
        self.moves
            .iter()
            .zip(&self.boards)
            .enumerate()
            .map(|(i, (jump, board))| Step {
                number: i + 1,
                jump: *jump,
                board,
            })
    }

    /// "Moved X to Z, jumping over Y" for every jump, in play order
    pub fn move_descriptions(&self) -> Vec<String> {
        self.moves.iter().map(|jump| jump.to_string()).collect()
    }

    pub fn summary(&self) -> SolutionSummary {
        SolutionSummary {
            start_hole: self.start_hole,
            target_peg: self.target_peg,
            final_peg: self.final_peg(),
            move_count: self.move_count(),
            nodes_visited: self.stats.nodes_visited,
            dead_ends: self.stats.dead_ends,
            solve_time_ms: self.stats.elapsed.as_millis() as u64,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pegs::Topology;
    use crate::solver::SearchEngine;
    use tempfile::tempdir;

    fn classic_solution() -> Solution {
        let topology = Topology::triangle();
        let config = PuzzleConfig::new(13, None, &topology).unwrap();
        let initial = config.initial_board(&topology);
        let outcome = SearchEngine::new(&topology, None).run(initial.clone());
        Solution::new(config, initial, outcome.trail.unwrap(), outcome.stats)
    }

    #[test]
    fn test_accessors() {
        let solution = classic_solution();
        assert_eq!(solution.move_count(), 13);
        assert_eq!(solution.final_peg(), Some(13));
        assert_eq!(solution.board_after(0), Some(&solution.initial));
        assert_eq!(solution.board_after(13), Some(solution.final_board()));
        assert_eq!(solution.board_after(14), None);

        let steps: Vec<_> = solution.steps().collect();
        assert_eq!(steps.len(), 13);
        assert_eq!(steps[0].number, 1);
        assert_eq!(steps[0].board.peg_count(), 13);
        assert_eq!(steps[12].board.peg_count(), 1);
    }

    #[test]
    fn test_move_descriptions() {
        let descriptions = classic_solution().move_descriptions();
        assert_eq!(descriptions[0], "Moved 4 to 13, jumping over 8");
        assert_eq!(descriptions[12], "Moved 11 to 13, jumping over 12");
    }

    #[test]
    fn test_summary() {
        let summary = classic_solution().summary();
        assert_eq!(summary.start_hole, 13);
        assert_eq!(summary.target_peg, None);
        assert_eq!(summary.final_peg, Some(13));
        assert_eq!(summary.move_count, 13);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("solution.json");

        let solution = classic_solution();
        solution.save_to_file(&path).unwrap();
        let loaded = Solution::load_from_file(&path).unwrap();

        assert_eq!(loaded.moves, solution.moves);
        assert_eq!(loaded.boards, solution.boards);
        assert_eq!(loaded.initial, solution.initial);
        assert_eq!(loaded.stats.nodes_visited, solution.stats.nodes_visited);
    }
}
