//! Configuration management for the peg puzzle solver

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, PuzzleSettings, Settings, NO_TARGET};
