//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::{self, Aspect};
use mathpix_client::core::models::OutputFormat;
use mathpix_client::output::OutputMode;

/// mathpix - Recognize math in images
#[derive(Parser, Debug)]
#[command(
    name = "mathpix",
    version,
    about = "Recognize math in images with the Mathpix API",
    long_about = "Submit an image to the Mathpix recognition API and print the result.\n\n\
                  Credentials come from `mathpix config set` or the MATHPIX_APP_ID and\n\
                  MATHPIX_APP_KEY environment variables."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recognize math in an image (Ctrl-C cancels the request)
    Recognize {
        /// Path to a JPEG or PNG image
        image: PathBuf,

        /// Output format to request (repeatable): latex-raw, latex-default,
        /// latex-simplified, mathml-on, wolfram-on
        #[arg(short, long = "format")]
        formats: Vec<OutputFormat>,

        /// Centre-crop the image to this aspect ratio first, as W:H
        #[arg(long)]
        aspect: Option<Aspect>,
    },

    /// List available output formats
    Formats,

    /// Manage credentials and client settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current settings (the app key is masked)
    Show,

    /// Store credentials and settings
    Set {
        /// Application id
        #[arg(long)]
        app_id: Option<String>,

        /// Application key
        #[arg(long)]
        app_key: Option<String>,

        /// Recognition endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Print the settings file location
    Path,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Recognize {
            image,
            formats,
            aspect,
        }) => commands::recognize(&image, &formats, aspect, output_mode),
        Some(Command::Formats) => {
            commands::formats(output_mode);
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Config { action }) => {
            commands::config_cmd(action, output_mode)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": mathpix_client::VERSION
                    })
                );
            } else {
                println!("mathpix v{}", mathpix_client::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": mathpix_client::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("mathpix v{}", mathpix_client::VERSION);
                println!("\nRun 'mathpix --help' for usage");
                println!("Run 'mathpix config set --app-id <ID> --app-key <KEY>' to get started");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
