use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "farmplan", version, about = "Farm condition scoring and plan selection")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Plan catalog file, overriding the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format, overriding the configured one
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select a farming plan for a farm input file (stdin when omitted or "-")
    Plan {
        input: Option<PathBuf>,
    },
    /// Show the score card and the catalog entry an input maps to
    Score {
        input: Option<PathBuf>,
    },
    /// Fill in farm details interactively and select a plan
    Form {
        /// Save the entered farm input as YAML
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// List the plans in the catalog
    Catalog,
    /// Run interactive setup and write config.yaml
    Init,
    /// Validate config and catalog
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plan_with_global_flags() {
        let cli = Cli::try_parse_from([
            "farmplan", "plan", "farm.yaml", "-f", "json", "--catalog", "plans.yaml", "-vv",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Plan { input: Some(ref p) } if p == &PathBuf::from("farm.yaml")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.catalog, Some(PathBuf::from("plans.yaml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn input_is_optional() {
        let cli = Cli::try_parse_from(["farmplan", "score"]).unwrap();
        assert!(matches!(cli.command, Commands::Score { input: None }));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["farmplan", "catalog", "--format", "xml"]).is_err());
    }
}
