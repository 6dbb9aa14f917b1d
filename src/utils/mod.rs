//! Shared utilities

pub mod display;

pub use display::{format_survey, Color, ColorOutput, SolutionFormatter};
