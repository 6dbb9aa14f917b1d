//! Configuration settings for the peg puzzle solver

use crate::pegs::Topology;
use crate::solver::PuzzleConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Target value accepted on the command line to mean "any final peg"
pub const NO_TARGET: i64 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub puzzle: PuzzleSettings,
    pub output: OutputConfig,
    /// Replacement board layout; the 15-hole triangle when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology: Option<Topology>,
}

/// Raw puzzle input, checked by [`Settings::puzzle_config`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSettings {
    pub start_hole: i64,
    #[serde(default)]
    pub target_peg: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleSettings {
                start_hole: 13,
                target_peg: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save: false,
                output_directory: PathBuf::from("output/solutions"),
            },
            topology: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// The board layout in effect
    pub fn topology(&self) -> Topology {
        self.topology.clone().unwrap_or_default()
    }

    /// Validated start hole and target for the configured topology
    pub fn puzzle_config(&self) -> Result<PuzzleConfig, crate::PegError> {
        let topology = self.topology();
        topology.validate()?;
        PuzzleConfig::new(self.puzzle.start_hole, self.puzzle.target_peg, &topology)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        self.puzzle_config()?;
        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(start_hole) = cli_overrides.start_hole {
            self.puzzle.start_hole = start_hole;
            // a start hole on its own means "any final peg"
            self.puzzle.target_peg = cli_overrides.target_peg.filter(|&target| target != NO_TARGET);
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if cli_overrides.save {
            self.output.save = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub start_hole: Option<i64>,
    pub target_peg: Option<i64>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
    pub save: bool,
}
