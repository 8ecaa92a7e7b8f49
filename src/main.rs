use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use gherkin_tidy::{
    CleanConfig, DocumentIoError, DocumentReport, normalize, read_document, write_document,
};

#[derive(Parser)]
#[command(name = "gherkin-tidy")]
#[command(author, version, about = "Normalize Gherkin feature text mangled by copy-paste", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a feature document and reindent it canonically
    Clean {
        /// Input document
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,

        /// Output file for the cleaned document
        #[arg(short, long, default_value = "cleaned_output.md")]
        output: PathBuf,

        /// Do not echo the cleaned document to stdout
        #[arg(short, long)]
        quiet: bool,

        /// Do not write the output file
        #[arg(long)]
        no_write: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report what cleaning would change, without writing anything
    Analyze {
        /// Input document
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,

        /// Also write the report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean {
            input,
            output,
            quiet,
            no_write,
            verbose,
        } => {
            setup_logging(verbose);
            let config = CleanConfig {
                print_to_stdout: !quiet,
                write_output: !no_write,
            };
            clean_document(&input, &output, &config)
        }
        Commands::Analyze {
            input,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_document(&input, json.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn report_error(err: &anyhow::Error) {
    eprintln!("{}", error_message(err));
}

/// User-facing message: a distinct wording for a missing input, the cause chain otherwise
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<DocumentIoError>() {
        Some(DocumentIoError::NotFound { path }) => format!("Error: {} not found.", path.display()),
        _ => format!("An error occurred: {:#}", err),
    }
}

fn clean_document(input: &Path, output: &Path, config: &CleanConfig) -> Result<()> {
    info!("Loading document from {:?}", input);
    let document = read_document(input)?;

    let result = normalize(&document);

    if config.print_to_stdout {
        println!("{}", result.output);
    }

    if config.write_output {
        write_document(output, &result.output)?;
        info!("Output written to {:?}", output);
    }

    Ok(())
}

fn analyze_document(input: &Path, json: Option<&Path>) -> Result<()> {
    info!("Analyzing document from {:?}", input);
    let document = read_document(input)?;

    let result = normalize(&document);
    let report = DocumentReport::from_result(&result);

    print!("{}", report.format());

    if let Some(path) = json {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write report to {:?}", path))?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}
