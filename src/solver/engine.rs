//! Depth-first backtracking search over jump sequences

use crate::pegs::{Board, Jump, Topology};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Counters collected during one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards examined, including the initial one
    pub nodes_visited: u64,
    /// Boards with no legal jump that did not satisfy the goal
    pub dead_ends: u64,
    pub max_depth: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Jumps and the board after each one, in play order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    pub jumps: Vec<Jump>,
    pub boards: Vec<Board>,
}

/// Result of running the engine to completion
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub trail: Option<Trail>,
    pub stats: SearchStats,
}

/// Exhaustive first-match search. Jumps are tried in table order and the
/// first sequence reaching a winning board is kept.
pub struct SearchEngine<'a> {
    jumps: &'a [Jump],
    target_peg: Option<u8>,
    /// Snapshots along the active path; popped on backtrack
    boards: Vec<Board>,
    /// Winning jumps, recorded while unwinding (last jump first)
    unwound: Vec<Jump>,
    stats: SearchStats,
}

impl<'a> SearchEngine<'a> {
    pub fn new(topology: &'a Topology, target_peg: Option<u8>) -> Self {
        Self {
            jumps: &topology.jumps,
            target_peg,
            boards: Vec::new(),
            unwound: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Search from `board` until a solution is found or the tree is exhausted
    pub fn run(mut self, mut board: Board) -> SearchOutcome {
        let start_time = Instant::now();
        let solved = self.search(&mut board, 0);
        self.stats.elapsed = start_time.elapsed();

        debug!(
            solved,
            nodes = self.stats.nodes_visited,
            dead_ends = self.stats.dead_ends,
            max_depth = self.stats.max_depth,
            "search finished"
        );

        let trail = if solved {
            let mut jumps = self.unwound;
            jumps.reverse();
            Some(Trail {
                jumps,
                boards: self.boards,
            })
        } else {
            None
        };

        SearchOutcome {
            trail,
            stats: self.stats,
        }
    }

    fn search(&mut self, board: &mut Board, depth: usize) -> bool {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let jumps = self.jumps;
        let mut any_legal = false;
        for jump in jumps {
            if !board.can_jump(jump) {
                continue;
            }
            any_legal = true;

            board.apply(jump);
            self.boards.push(board.clone());

            if self.search(board, depth + 1) {
                self.unwound.push(*jump);
                return true;
            }

            self.boards.pop();
            board.undo(jump);
        }

        if any_legal {
            return false;
        }
        if self.is_goal(board) {
            true
        } else {
            self.stats.dead_ends += 1;
            false
        }
    }

    /// One peg left, and on the target if there is one
    fn is_goal(&self, board: &Board) -> bool {
        if board.peg_count() != 1 {
            return false;
        }
        match self.target_peg {
            None => true,
            Some(target) => board.is_peg(target),
        }
    }
}
