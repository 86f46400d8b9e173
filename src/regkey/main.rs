use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use regkey::api::KeyApi;
use regkey::client::http::HttpRegistry;
use regkey::commands::{CmdMessage, CmdResult, MessageLevel};
use regkey::config::RegistryConfig;
use regkey::error::{KeyError, Result};
use regkey::model::{CommandRequest, KeyOptions, Operation};
use regkey::report::format_error;
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let op = operation_of(&cli.command);

    if let Err(e) = run(cli) {
        let message = match op {
            Some(op) => format_error(op, &e),
            None => e.to_string(),
        };
        eprintln!("{}", message.red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = resolve_config_dir(cli.config_dir)?;

    match cli.command {
        Commands::Generate {
            key_name,
            permission,
        } => dispatch(
            &config_dir,
            "generate",
            KeyOptions {
                key_name,
                permissions: permission,
                all: false,
            },
        ),
        Commands::Fetch { key_name } => dispatch(
            &config_dir,
            "fetch",
            KeyOptions {
                key_name,
                ..Default::default()
            },
        ),
        Commands::List => dispatch(&config_dir, "list", KeyOptions::default()),
        Commands::Revoke { key_name, all } => dispatch(
            &config_dir,
            "revoke",
            KeyOptions {
                key_name,
                all,
                ..Default::default()
            },
        ),
        Commands::Config { key, value } => handle_config(&config_dir, key, value),
    }
}

fn dispatch(config_dir: &Path, operation: &str, options: KeyOptions) -> Result<()> {
    let config = RegistryConfig::load(config_dir)?.with_env_overrides();
    let client = HttpRegistry::new()?;
    let mut api = KeyApi::new(client, config);

    let result = api.dispatch(CommandRequest::new(operation, options))?;
    print_result(&result);
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = RegistryConfig::load(config_dir)?;

    match (key.as_deref(), value) {
        (None, _) => {
            println!("api_url = {}", config.api_url);
            println!("api_key = {}", mask(&config.api_key));
            println!("read_key = {}", mask(&config.read_key));
        }
        (Some("api_url"), None) => println!("api_url = {}", config.api_url),
        (Some("api_key"), None) => println!("api_key = {}", mask(&config.api_key)),
        (Some("read_key"), None) => println!("read_key = {}", mask(&config.read_key)),
        (Some("api_url"), Some(v)) => {
            config.api_url = v;
            config.save(config_dir)?;
        }
        (Some("api_key"), Some(v)) => {
            config.api_key = Some(v);
            config.save(config_dir)?;
        }
        (Some("read_key"), Some(v)) => {
            config.read_key = Some(v);
            config.save(config_dir)?;
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

// Secrets are never echoed back, only whether they are present.
fn mask(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "(set)"
    } else {
        "(unset)"
    }
}

fn operation_of(command: &Commands) -> Option<Operation> {
    match command {
        Commands::Generate { .. } => Some(Operation::Generate),
        Commands::Fetch { .. } => Some(Operation::Fetch),
        Commands::List => Some(Operation::List),
        Commands::Revoke { .. } => Some(Operation::Revoke),
        Commands::Config { .. } => None,
    }
}

fn resolve_config_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => ProjectDirs::from("dev", "regkey", "regkey")
            .map(|p| p.config_dir().to_path_buf())
            .ok_or_else(|| KeyError::Config("could not determine config dir".to_string())),
    }
}

fn print_result(result: &CmdResult) {
    if let Some(output) = &result.output {
        // rendered tables already end with a newline
        print!("{}", output);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
