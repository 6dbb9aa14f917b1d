//! Triangular peg puzzle solver
//!
//! Finds a jump sequence that reduces the 15-hole triangular peg board to a
//! single peg, optionally ending on a chosen cell, using exhaustive
//! depth-first backtracking.

pub mod config;
pub mod error;
pub mod pegs;
pub mod solver;
pub mod utils;

pub use config::Settings;
pub use error::PegError;
pub use pegs::{Board, Cell, Jump, Topology};
pub use solver::{PegProblem, Solution};

/// Solve the 15-hole triangle from `start_hole`, optionally ending on `target_peg`
pub fn solve(start_hole: i64, target_peg: Option<i64>) -> Result<Solution, PegError> {
    PegProblem::from_values(start_hole, target_peg, Topology::triangle())?.solve()
}
