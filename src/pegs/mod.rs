//! Peg board core functionality: cells, boards and jump tables

pub mod board;
pub mod topology;

pub use board::{Board, Cell};
pub use topology::{Jump, Topology, TRIANGLE_JUMPS, TRIANGLE_ROWS};
