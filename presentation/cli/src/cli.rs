use api_client::client::DEFAULT_BASE_URL;
use clap::{Parser, Subcommand};

/// Command line client for the exercise backend.
#[derive(Debug, Parser)]
#[command(name = "exercise-cli", version)]
pub struct Cli {
    /// Origin of the exercise backend
    #[arg(long, env = "EXERCISES_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Bearer token placed in session storage before running the command
    #[arg(long, env = "EXERCISES_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Delete exercises by id. Several ids are deleted concurrently.
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_delete_with_several_ids() {
        let cli = Cli::try_parse_from([
            "exercise-cli",
            "delete",
            "3",
            "9",
            "--api-url",
            "http://10.0.0.2:8000",
            "--token",
            "jwt",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://10.0.0.2:8000");
        assert_eq!(cli.token.as_deref(), Some("jwt"));
        match cli.command {
            Command::Delete { ids } => assert_eq!(ids, vec!["3", "9"]),
        }
    }

    #[test]
    fn should_reject_delete_without_ids() {
        let result = Cli::try_parse_from(["exercise-cli", "delete"]);
        assert!(result.is_err());
    }
}
