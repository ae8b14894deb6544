//! dsadmin - manage data source configuration records from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dsadmin::cli::{self, ConfigSubcommand, DataSourceCommand, Session};
use dsadmin::config::ConfigLoader;
use std::path::PathBuf;

/// dsadmin - manage data source configuration records
#[derive(Parser, Debug)]
#[command(name = "dsadmin", version)]
#[command(about = "Manage data source configuration records", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Server URL, overrides the configuration
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    #[command(flatten)]
    DataSource(DataSourceCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config commands must work even when the file is broken
    let cmd = match args.command {
        Command::Config { subcommand } => return cli::handle_config_command(subcommand),
        Command::DataSource(cmd) => cmd,
    };

    let mut config = ConfigLoader::load().context("Failed to load configuration")?;
    if let Some(url) = args.url {
        config.server.url = url;
    }

    let log_file = args
        .log_file
        .or_else(|| config.logger.file.as_ref().map(PathBuf::from));
    cli::init_logging(args.debug, &config.logger.level, log_file.as_deref())?;

    tracing::debug!(
        "Configuration loaded: url={}, timeout={}",
        config.server.url,
        config.server.timeout
    );

    let session = Session::connect(&config)?;
    let output = cli::execute(&session, cmd).await?;
    print!("{}", output);

    Ok(())
}
