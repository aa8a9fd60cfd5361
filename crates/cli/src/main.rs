mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use commands::inspect::cmd_inspect;
use commands::validate::cmd_validate;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Formwork form definition toolchain.
#[derive(Parser)]
#[command(name = "formwork", version, about = "Formwork form definition toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form definition, optionally against a registry of stored forms
    Validate {
        /// Path to the form definition JSON file
        form: PathBuf,
        /// Path to a JSON array of stored form records to check uniqueness against
        #[arg(long)]
        registry: Option<PathBuf>,
    },

    /// Print the keys, input paths, and shortcuts extracted from a form's components
    Inspect {
        /// Path to the form definition JSON file
        form: PathBuf,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { form, registry } => {
            cmd_validate(&form, registry.as_deref(), cli.output, cli.quiet);
        }
        Commands::Inspect { form } => {
            cmd_inspect(&form, cli.output, cli.quiet);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
