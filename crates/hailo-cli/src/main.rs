//! Hailo Apps configuration CLI
//!
//! Lists applications, architectures, models and inputs from the resource
//! catalog. This is the only layer that turns "not found" into an error
//! message and a non-zero exit code.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use hailo_config::{ConfigContext, ConfigPaths};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let ctx = match &cli.config_dir {
        Some(dir) => ConfigContext::new(ConfigPaths::from_config_dir(dir.clone())),
        None => ConfigContext::global().clone(),
    };
    tracing::debug!(
        config_dir = %ctx.paths().config_dir().display(),
        "Resolved configuration directory"
    );

    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &ConfigContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::ListApps => commands::run_list_apps(ctx),
        Commands::ListArchs { app } => commands::run_list_archs(ctx, &app),
        Commands::ShowModels { app, arch, json } => {
            commands::run_show_models(ctx, &app, &arch, json)
        }
        Commands::ModelInfo {
            app,
            arch,
            model,
            json,
        } => commands::run_model_info(ctx, &app, &arch, &model, json),
        Commands::InputList { app } => commands::run_input_list(ctx, &app),
        Commands::InputGet { app, id } => commands::run_input_get(ctx, &app, &id),
        Commands::IsGenAi { app } => commands::run_is_gen_ai(ctx, &app),
    }
}
