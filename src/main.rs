use clap::{Parser, Subcommand, ValueEnum};
use ld_context_check::{context_schema, Error, KeywordPolicy, ValidationResult, Validator, ValidatorOptions};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Check JSON-LD `@context` values.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a context value read from FILE, --json, or stdin.
    Check {
        /// JSON file to read
        file: Option<PathBuf>,
        /// JSON text given inline
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,
        /// Input is a JSON-LD document; check its top-level @context
        #[arg(long)]
        document: bool,
        /// Reject @-keys that are not JSON-LD context keywords
        #[arg(long)]
        closed_keywords: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the JSON Schema describing @context values.
    Schema,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

fn read_input(file: Option<PathBuf>, json: Option<String>) -> Result<String, Error> {
    if let Some(text) = json {
        return Ok(text);
    }
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_result(result: &ValidationResult, format: Format) -> Result<(), Error> {
    match format {
        Format::Text if result.valid => println!("valid"),
        Format::Text => {
            for e in result.errors() {
                println!("{e}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    // Parse CLI arguments.
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Schema => match serde_json::to_string_pretty(&context_schema()) {
            Ok(s) => {
                println!("{s}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::from(2)
            }
        },
        Command::Check { file, json, document, closed_keywords, format } => {
            let policy = if closed_keywords { KeywordPolicy::Closed } else { KeywordPolicy::Open };
            let validator = Validator::new(
                ValidatorOptions::default()
                    .with_keyword_policy(policy)
                    .with_unwrap_document(document),
            );

            let outcome = read_input(file, json)
                .and_then(|text| validator.validate_str(&text))
                .and_then(|result| print_result(&result, format).map(|_| result.valid));

            match outcome {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => ExitCode::from(1),
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::from(2)
                }
            }
        }
    }
}
