use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glossa_config::ModeKind;

#[derive(Debug, Parser)]
#[command(name = "glossa", version, about = "Word explanations for language learners")]
pub struct Cli {
    /// JSON config file, environment variables are used when absent
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Retrieval mode: live or simulated
    #[arg(long, global = true, value_parser = parse_mode)]
    pub mode: Option<ModeKind>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP endpoint
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print one explanation as JSON
    Explain {
        word: String,
        /// Language being learned
        #[arg(long, short)]
        target: String,
        /// Learner's native language
        #[arg(long, short)]
        native: String,
        /// Use the local corpus instead of the backend
        #[arg(long)]
        simulated: bool,
    },
}

fn parse_mode(s: &str) -> Result<ModeKind, String> {
    ModeKind::parse(s).ok_or_else(|| format!("unknown mode '{s}', expected live or simulated"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explain() {
        let cli = Cli::parse_from([
            "glossa", "explain", "Hello", "--target", "French", "-n", "English", "--simulated",
        ]);

        match cli.command {
            Command::Explain {
                word,
                target,
                native,
                simulated,
            } => {
                assert_eq!(word, "Hello");
                assert_eq!(target, "French");
                assert_eq!(native, "English");
                assert!(simulated);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_mode() {
        let cli = Cli::parse_from(["glossa", "serve", "--port", "8080", "--mode", "simulated"]);
        assert_eq!(cli.mode, Some(ModeKind::Simulated));
        assert!(matches!(cli.command, Command::Serve { port: Some(8080), .. }));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["glossa", "--mode", "offline", "serve"]);
        assert!(result.is_err());
    }
}
