use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "regkey")]
#[command(about = "Manage API keys for a package registry", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

// Required/exclusive option shapes (fetch needs a name, revoke needs
// exactly one of --key-name/--all) are validated by the dispatcher, not
// by clap, so the typed errors stay observable.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new API key
    #[command(alias = "gen")]
    Generate {
        /// Name for the new key (the registry picks one if omitted)
        #[arg(short, long)]
        key_name: Option<String>,

        /// Permission grant as DOMAIN:RESOURCE (repeatable)
        #[arg(short, long)]
        permission: Vec<String>,
    },

    /// Fetch a single key
    Fetch {
        /// Name of the key
        #[arg(short, long)]
        key_name: Option<String>,
    },

    /// List all keys
    #[command(alias = "ls")]
    List,

    /// Revoke a key, or all keys
    #[command(alias = "rm")]
    Revoke {
        /// Name of the key to revoke
        #[arg(short, long)]
        key_name: Option<String>,

        /// Revoke every key attached to the account
        #[arg(short, long)]
        all: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (api_url, api_key, read_key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_args_parse() {
        let cli = Cli::parse_from([
            "regkey", "generate", "-k", "tok1", "-p", "api:read", "-p", "api:write",
        ]);
        match cli.command {
            Commands::Generate {
                key_name,
                permission,
            } => {
                assert_eq!(key_name.as_deref(), Some("tok1"));
                assert_eq!(permission, vec!["api:read", "api:write"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn revoke_all_parses_to_the_all_flag() {
        let cli = Cli::parse_from(["regkey", "revoke", "--all"]);
        match cli.command {
            Commands::Revoke { key_name, all } => {
                assert!(all);
                assert!(key_name.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn fetch_accepts_a_missing_name_for_later_validation() {
        let cli = Cli::parse_from(["regkey", "fetch"]);
        assert!(matches!(
            cli.command,
            Commands::Fetch { key_name: None }
        ));
    }

    #[test]
    fn config_takes_key_and_value() {
        let cli = Cli::parse_from(["regkey", "config", "api_url", "https://registry.test/api"]);
        match cli.command {
            Commands::Config { key, value } => {
                assert_eq!(key.as_deref(), Some("api_url"));
                assert_eq!(value.as_deref(), Some("https://registry.test/api"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
