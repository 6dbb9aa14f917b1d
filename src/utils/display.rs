//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::pegs::{Board, Topology};
use crate::solver::{Solution, Survey};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// Format boards and solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Render a board as a centred triangle of `P`/`H` symbols
    pub fn format_board(board: &Board, topology: &Topology) -> String {
        let rows = topology.row_cells();
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut output = String::new();

        for row in &rows {
            output.push_str(&" ".repeat(widest - row.len()));
            output.push_str(&row.iter().map(|&cell| board.get(cell).symbol()).join(" "));
            output.push('\n');
        }

        output
    }

    /// Render the cell numbering of a topology, one row per line
    pub fn format_numbering(topology: &Topology) -> String {
        let rows = topology.row_cells();
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut output = String::new();

        for row in &rows {
            output.push_str(&"  ".repeat(widest - row.len()));
            output.push_str(&row.iter().map(|cell| format!("{:>2}", cell)).join("  "));
            output.push('\n');
        }

        output
    }

    /// Initial board followed by each move and the board it produced
    pub fn format_solution(solution: &Solution, topology: &Topology) -> String {
        let mut output = String::new();

        output.push_str("Initial board\n");
        output.push_str(&Self::format_board(&solution.initial, topology));

        for step in solution.steps() {
            output.push_str(&format!("{}\n", step.jump));
            output.push_str(&Self::format_board(step.board, topology));
        }

        output
    }

    /// One-paragraph summary of a solution
    pub fn format_summary(solution: &Solution) -> String {
        let summary = solution.summary();
        let mut output = String::new();

        output.push_str(&format!("Start hole: {}\n", summary.start_hole));
        match summary.target_peg {
            Some(target) => output.push_str(&format!("Target peg: {}\n", target)),
            None => output.push_str("Target peg: any\n"),
        }
        if let Some(final_peg) = summary.final_peg {
            output.push_str(&format!("Final peg: {}\n", final_peg));
        }
        output.push_str(&format!("Moves: {}\n", summary.move_count));
        output.push_str(&format!(
            "Search: {} boards visited, {} dead ends, {} ms\n",
            summary.nodes_visited, summary.dead_ends, summary.solve_time_ms
        ));

        output
    }

    /// Write a solution into `output_dir` and return the file written
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        topology: &Topology,
        output_dir: P,
        format: OutputFormat,
    ) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let stem = match solution.target_peg {
            Some(target) => format!("solution_start_{:02}_target_{:02}", solution.start_hole, target),
            None => format!("solution_start_{:02}", solution.start_hole),
        };

        let filepath = match format {
            OutputFormat::Text => {
                let filepath = output_dir.join(format!("{}.txt", stem));
                let content = Self::format_solution(solution, topology);
                std::fs::write(&filepath, content)
                    .with_context(|| format!("Failed to write {}", filepath.display()))?;
                filepath
            }
            OutputFormat::Json => {
                let filepath = output_dir.join(format!("{}.json", stem));
                solution
                    .save_to_file(&filepath)
                    .with_context(|| format!("Failed to write {}", filepath.display()))?;
                filepath
            }
        };

        Ok(filepath)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
        }
    }
}

/// Survey table with solvable rows highlighted
pub fn format_survey(survey: &Survey) -> String {
    let rows = survey.entries.iter().map(|entry| {
        let row = entry.to_string();
        if entry.solved {
            ColorOutput::success(&row)
        } else {
            ColorOutput::warning(&row)
        }
    });

    [survey.title(), Survey::TABLE_HEADER.to_string()]
        .into_iter()
        .chain(rows)
        .chain(std::iter::once(survey.footer()))
        .join("\n")
}
