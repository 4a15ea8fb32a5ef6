//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect the models and inputs configured for Hailo applications
#[derive(Parser, Debug)]
#[command(name = "hailo-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing config.yaml and resources_config.yaml
    #[arg(long, global = true, env = "HAILO_APPS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List configured applications
    ListApps,

    /// List architectures supported by an application
    ListArchs {
        #[arg(long)]
        app: String,
    },

    /// Show the models of an application on one architecture
    ///
    /// Default models are listed before extra models.
    ///
    /// Examples:
    ///   hailo-config show-models --app detection --arch hailo8
    ///   hailo-config show-models --app detection --arch hailo8l --json
    ShowModels {
        #[arg(long)]
        app: String,

        /// Target architecture (hailo8, hailo8l, hailo10h)
        #[arg(long)]
        arch: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show name, source and URL override of a single model
    ModelInfo {
        #[arg(long)]
        app: String,

        /// Target architecture (hailo8, hailo8l, hailo10h)
        #[arg(long)]
        arch: String,

        #[arg(long)]
        model: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the image and video inputs of an application
    InputList {
        #[arg(long)]
        app: String,
    },

    /// Print the download URL of one input
    InputGet {
        #[arg(long)]
        app: String,

        /// Input name as listed by input-list
        #[arg(long)]
        id: String,
    },

    /// Print whether an application uses generative models
    IsGenAi {
        #[arg(long)]
        app: String,
    },
}
