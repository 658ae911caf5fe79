use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "statics",
    about = "Beam and base frame statics calculator",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Solve the analyses stored in a project file
    #[command(visible_alias = "s")]
    Solve(SolveArgs),

    /// Solve a built-in example
    Demo(DemoArgs),

    /// List the standard material catalog
    Materials,

    /// Write a new project file seeded with example analyses
    New(NewArgs),
}

/// Output options shared by commands that print results.
#[derive(Args)]
pub struct OutputOptions {
    /// Print the full solution as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SolveArgs {
    /// Project file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Solve only this analysis (id or label)
    #[arg(short, long, value_name = "ID")]
    pub analysis: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Which structure to solve
    #[arg(value_name = "KIND", default_value = "beam")]
    pub kind: DemoKind,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct NewArgs {
    /// Destination file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Responsible engineer
    #[arg(long, default_value = "")]
    pub engineer: String,

    /// Job number
    #[arg(long = "job", default_value = "")]
    pub job_id: String,

    /// Client name
    #[arg(long, default_value = "")]
    pub client: String,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DemoKind {
    /// Simply supported beam with an overhang
    Beam,
    /// Four-corner base frame with sections
    Frame,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_solve_with_analysis() {
        let cli = Cli::try_parse_from(["statics", "solve", "skid.json", "--analysis", "F-1", "--json"])
            .unwrap();
        match cli.command {
            Command::Solve(args) => {
                assert_eq!(args.analysis.as_deref(), Some("F-1"));
                assert!(args.output.json);
            }
            _ => panic!("expected solve"),
        }
    }
}
