//! Peg puzzle problem definition and the all-holes survey

use super::engine::{SearchEngine, SearchStats};
use super::{PuzzleConfig, Solution};
use crate::config::Settings;
use crate::error::PegError;
use crate::pegs::Topology;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument};

/// A validated puzzle ready to be solved
#[derive(Debug, Clone)]
pub struct PegProblem {
    config: PuzzleConfig,
    topology: Topology,
}

impl PegProblem {
    /// Create a problem from settings
    pub fn new(settings: &Settings) -> Result<Self, PegError> {
        let topology = settings.topology();
        topology.validate()?;
        let config = PuzzleConfig::new(
            settings.puzzle.start_hole,
            settings.puzzle.target_peg,
            &topology,
        )?;
        Ok(Self { config, topology })
    }

    /// Create a problem from raw start and target values
    pub fn from_values(
        start_hole: i64,
        target_peg: Option<i64>,
        topology: Topology,
    ) -> Result<Self, PegError> {
        topology.validate()?;
        let config = PuzzleConfig::new(start_hole, target_peg, &topology)?;
        Ok(Self { config, topology })
    }

    /// Run the search and return the first solution in move-table order
    #[instrument(skip(self), fields(start_hole = self.config.start_hole(), target_peg = ?self.config.target_peg()))]
    pub fn solve(&self) -> Result<Solution, PegError> {
        let initial = self.config.initial_board(&self.topology);
        info!(pegs = initial.peg_count(), "solving peg puzzle");

        let outcome = SearchEngine::new(&self.topology, self.config.target_peg()).run(initial.clone());

        info!(
            solved = outcome.trail.is_some(),
            nodes = outcome.stats.nodes_visited,
            elapsed_ms = outcome.stats.elapsed.as_millis() as u64,
            "search complete"
        );

        match outcome.trail {
            Some(trail) => Ok(Solution::new(self.config, initial, trail, outcome.stats)),
            None => Err(PegError::NoSolutionFound {
                start_hole: self.config.start_hole(),
                target_peg: self.config.target_peg(),
            }),
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }
}

/// Outcome for one starting hole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyEntry {
    pub start_hole: u8,
    pub solved: bool,
    pub final_peg: Option<u8>,
    pub move_count: usize,
    pub stats: SearchStats,
}

/// Solvability of every starting hole for one target setting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub target_peg: Option<u8>,
    pub entries: Vec<SurveyEntry>,
}

impl Survey {
    pub const TABLE_HEADER: &'static str =
        "Start | Solved | Final | Moves | Nodes\n------|--------|-------|-------|---------";

    pub fn solvable_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.solved).count()
    }

    pub fn entry(&self, start_hole: u8) -> Option<&SurveyEntry> {
        self.entries.iter().find(|entry| entry.start_hole == start_hole)
    }

    pub fn title(&self) -> String {
        match self.target_peg {
            Some(target) => format!("Survey (final peg at {}):", target),
            None => "Survey (any final peg):".to_string(),
        }
    }

    pub fn footer(&self) -> String {
        format!(
            "{} of {} starting holes solvable",
            self.solvable_count(),
            self.entries.len()
        )
    }
}

impl fmt::Display for SurveyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let final_peg = self
            .final_peg
            .map(|cell| cell.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{:5} | {:6} | {:5} | {:5} | {:9}",
            self.start_hole,
            if self.solved { "yes" } else { "no" },
            final_peg,
            self.move_count,
            self.stats.nodes_visited
        )
    }
}

impl fmt::Display for Survey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "{}", Self::TABLE_HEADER)?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        writeln!(f, "{}", self.footer())
    }
}

/// Solve every starting hole in parallel
pub fn survey(topology: &Topology, target_peg: Option<i64>) -> Result<Survey, PegError> {
    topology.validate()?;
    let cells = topology.cell_count() as u8;
    // reject a bad target once rather than per hole
    let target = PuzzleConfig::new(1, target_peg, topology)?.target_peg();

    info!(cells, target_peg = ?target, "surveying all starting holes");

    let entries = (1..=cells)
        .into_par_iter()
        .map(|start_hole| {
            let config = PuzzleConfig::new(start_hole as i64, target_peg, topology)?;
            let outcome =
                SearchEngine::new(topology, config.target_peg()).run(config.initial_board(topology));
            let (final_peg, move_count) = match &outcome.trail {
                Some(trail) => (
                    trail.boards.last().and_then(|board| board.last_peg()),
                    trail.jumps.len(),
                ),
                None => (None, 0),
            };
            Ok(SurveyEntry {
                start_hole,
                solved: outcome.trail.is_some(),
                final_peg,
                move_count,
                stats: outcome.stats,
            })
        })
        .collect::<Result<Vec<_>, PegError>>()?;

    Ok(Survey {
        target_peg: target,
        entries,
    })
}
