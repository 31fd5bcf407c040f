use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dexstat")]
#[command(version, about = "Exploratory statistics over a Pokémon stats CSV")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load, normalize and run the analyses
    Report {
        /// Input CSV file
        input: PathBuf,

        /// Only run these analyses (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        only: Option<Vec<String>>,

        /// Skip these analyses (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        skip: Option<Vec<String>>,

        /// Write chart specs as JSON into this directory
        #[arg(short, long)]
        charts_dir: Option<PathBuf>,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },

    /// Print the dataset preview, structure and numeric summary
    Describe {
        /// Input CSV file
        input: PathBuf,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },

    /// List all available analysis names
    ListAnalyses,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// The delimiter as a single byte; the CSV reader only takes ASCII
pub fn delimiter_byte(delimiter: char) -> anyhow::Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        anyhow::bail!("Delimiter must be a single ASCII character, got {:?}", delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_args() {
        let cli = Cli::try_parse_from([
            "dexstat", "-vv", "report", "pokemon.csv", "--only", "bmi-trend,mega-impact",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Report { input, only, skip, delimiter, .. } => {
                assert_eq!(input, PathBuf::from("pokemon.csv"));
                assert_eq!(only.unwrap(), vec!["bmi-trend", "mega-impact"]);
                assert!(skip.is_none());
                assert_eq!(delimiter, ',');
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert!(delimiter_byte('§').is_err());
    }
}
