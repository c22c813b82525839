//! numwords CLI - replace English number names with numerals

use anyhow::Result;
use clap::{Parser, Subcommand};
use numwords_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "numwords")]
#[command(version)]
#[command(about = "Replace English number names with numerals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose output (show timings and debug info)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text given as arguments, or read from stdin
    Convert {
        /// Text to convert (reads stdin when omitted)
        text: Vec<String>,

        /// Write numbers with thousands separators
        #[arg(short, long)]
        grouped: bool,

        /// Fail instead of returning the input unchanged
        #[arg(long)]
        strict: bool,

        /// Print the text before and after conversion
        #[arg(long)]
        diff: bool,
    },

    /// Convert a text file line by line
    File {
        /// Path to input file
        path: String,

        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Write numbers with thousands separators
        #[arg(short, long)]
        grouped: bool,
    },

    /// Run the built-in census sample and compare against the expected output
    Check,

    /// Time repeated conversions
    Bench {
        /// Number of iterations
        #[arg(short, long, default_value = "1000")]
        iterations: u32,

        /// Text file to convert (defaults to the census sample)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set the output number format
    SetFormat {
        /// Format name (plain, grouped)
        format: String,
    },

    /// Enable or disable splitting hyphenated words
    SetHyphens {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },

    /// Enable or disable timing output
    SetTimings {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },

    /// Show config file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Convert {
            text,
            grouped,
            strict,
            diff,
        } => commands::convert::run(
            &config,
            &text,
            commands::convert::Options {
                grouped,
                strict,
                diff,
                timings: config.show_timings || cli.verbose,
            },
        ),

        Commands::File {
            path,
            output,
            grouped,
        } => commands::file::run(&config, &path, output.as_deref(), grouped),

        Commands::Check => commands::check::run(),

        Commands::Bench { iterations, file } => {
            commands::bench::run(&config, iterations, file.as_deref())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::SetFormat { format } => {
                commands::config::set_format(&mut config, config_path, &format)
            }
            ConfigAction::SetHyphens { enabled } => {
                commands::config::set_hyphens(&mut config, config_path, enabled)
            }
            ConfigAction::SetTimings { enabled } => {
                commands::config::set_timings(&mut config, config_path, enabled)
            }
            ConfigAction::Path => commands::config::show_path(config_path),
        },
    }
}
