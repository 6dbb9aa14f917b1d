//! Backtracking solver, solution trails and their validation

pub mod engine;
pub mod problem;
pub mod puzzle;
pub mod solution;
pub mod validator;

pub use engine::{SearchEngine, SearchOutcome, SearchStats, Trail};
pub use problem::{survey, PegProblem, Survey, SurveyEntry};
pub use puzzle::PuzzleConfig;
pub use solution::{Solution, SolutionSummary, Step};
pub use validator::{TrailValidator, TrailViolation, ValidationResult};
