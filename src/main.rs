//! Main CLI application for the peg puzzle solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use puzzle_pegs::{
    config::{CliOverrides, OutputFormat, Settings},
    solver::{survey, PegProblem, Solution, TrailValidator},
    utils::{format_survey, ColorOutput, SolutionFormatter},
    PegError,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "puzzle_pegs")]
#[command(about = "Solver for the 15-hole triangular peg puzzle")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the puzzle for a starting hole and optional final peg
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Cell left empty at the start (1-15, default 13)
        start: Option<i64>,

        /// Cell the last peg must end on (1-15, -1 for any)
        target: Option<i64>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Output format for saved solutions (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save the solution to the output directory
        #[arg(short, long)]
        save: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check every starting hole for solvability
    #[command(allow_negative_numbers = true)]
    Survey {
        /// Cell the last peg must end on (1-15, -1 for any)
        #[arg(short, long)]
        target: Option<i64>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },

    /// Validate a saved JSON solution
    Validate {
        /// Solution file
        solution: PathBuf,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },

    /// Write a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Solve { verbose: true, .. });
    init_tracing(verbose);

    match cli.command {
        Commands::Solve {
            start, target, config, format, output, save, verbose
        } => {
            let overrides = CliOverrides {
                start_hole: start,
                target_peg: target,
                format,
                output_dir: output,
                save,
            };
            solve_command(&config, &overrides, verbose)
        }
        Commands::Survey { target, config } => survey_command(&config, target),
        Commands::Validate { solution, config } => validate_command(&config, &solution),
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Settings from `path`, or defaults when the file does not exist
fn load_settings(path: &Path) -> Result<Settings> {
    if path.exists() {
        Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Settings::default())
    }
}

fn solve_command(config_path: &Path, overrides: &CliOverrides, verbose: bool) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);

    let problem = PegProblem::new(&settings)?;
    let topology = problem.topology().clone();

    if verbose {
        println!("Configuration:");
        println!("  Start hole: {}", problem.config().start_hole());
        match problem.config().target_peg() {
            Some(target) => println!("  Target peg: {}", target),
            None => println!("  Target peg: any"),
        }
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!("\nCell numbering:");
        print!("{}", SolutionFormatter::format_numbering(&topology));
        println!();
    }

    let solution = match problem.solve() {
        Ok(solution) => solution,
        Err(PegError::NoSolutionFound { .. }) => {
            println!("{}", ColorOutput::warning("No solution could be found for this combination"));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    print!("{}", SolutionFormatter::format_solution(&solution, &topology));

    if verbose {
        println!();
        print!("{}", SolutionFormatter::format_summary(&solution));
    }

    if settings.output.save {
        let path = SolutionFormatter::save_solution(
            &solution,
            &topology,
            &settings.output.output_directory,
            settings.output.format,
        )
        .context("Failed to save solution")?;
        println!("{}", ColorOutput::success(&format!("Solution saved to {}", path.display())));
    }

    Ok(())
}

fn survey_command(config_path: &Path, target: Option<i64>) -> Result<()> {
    let settings = load_settings(config_path)?;
    let target = target.filter(|&cell| cell != puzzle_pegs::config::NO_TARGET);

    let result = survey(&settings.topology(), target)?;
    println!("{}", format_survey(&result));

    Ok(())
}

fn validate_command(config_path: &Path, solution_path: &Path) -> Result<()> {
    let settings = load_settings(config_path)?;
    let solution = Solution::load_from_file(solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    let result = TrailValidator::new(settings.topology()).validate(&solution);
    print!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success("Solution is valid"));
    } else {
        println!("{}", ColorOutput::error("Solution is invalid"));
        if let Some(message) = result.error_message() {
            println!("Error: {}", message);
        }
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let output_dir = directory.join(&Settings::default().output.output_directory);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory {}", output_dir.display()))?;

    println!("{}", ColorOutput::success("Setup complete"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["puzzle_pegs", "solve"]).unwrap();
        assert!(matches!(cli.command, Commands::Solve { start: None, target: None, .. }));

        let cli = Cli::try_parse_from(["puzzle_pegs", "solve", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::Solve { start: Some(1), target: None, .. }));

        let cli = Cli::try_parse_from(["puzzle_pegs", "solve", "5", "-1", "--save"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Solve { start: Some(5), target: Some(-1), save: true, .. }
        ));
    }

    #[test]
    fn test_cli_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["puzzle_pegs", "solve", "abc"]).is_err());
        assert!(Cli::try_parse_from(["puzzle_pegs", "solve", "1", "2", "3"]).is_err());
    }

    #[test]
    fn test_out_of_range_start_fails() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            start_hole: Some(16),
            ..Default::default()
        };
        let err = solve_command(&temp_dir.path().join("missing.yaml"), &overrides, false).unwrap_err();
        assert!(err.downcast_ref::<PegError>().unwrap().is_invalid_configuration());
    }

    #[test]
    fn test_solve_and_validate_saved_solution() {
        let temp_dir = tempdir().unwrap();
        let config = temp_dir.path().join("missing.yaml");
        let out = temp_dir.path().join("out");

        let overrides = CliOverrides {
            start_hole: Some(13),
            target_peg: Some(13),
            format: Some(OutputFormat::Json),
            output_dir: Some(out.clone()),
            save: true,
        };
        solve_command(&config, &overrides, false).unwrap();

        let saved = out.join("solution_start_13_target_13.json");
        assert!(saved.exists());
        assert!(validate_command(&config, &saved).is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path(), false).unwrap();

        let config_path = temp_dir.path().join("config/default.yaml");
        assert!(config_path.exists());
        assert_eq!(Settings::from_file(&config_path).unwrap(), Settings::default());
    }
}
