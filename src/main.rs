use clap::{ArgAction, Parser, Subcommand};
use customizer_value_helpers::filesystem::{resolve_credentials, TransportSettings};
use customizer_value_helpers::Registry;
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

/// Customizer value helpers: merge, compare, and look up static catalogs.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deep-merge overlays into a base object, left to right
    Merge {
        base: String,
        overlays: Vec<String>,
    },
    /// Compare two values with a named operator
    Compare {
        value1: String,
        value2: String,
        /// Operator token; unknown tokens mean loose equality
        #[arg(default_value = "")]
        operator: String,
    },
    /// Print the icon catalog, or the icons of one category
    Icons { category: Option<String> },
    /// Material palette for a context (primary, all, a hue, a100..a700)
    Colors { context: Option<String> },
    /// Resolve filesystem transport credentials
    Credentials {
        /// JSON settings file; the environment is used when absent
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// CLI values are JSON when they parse as JSON, plain strings otherwise.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> customizer_value_helpers::Result<Value> {
    let registry = Registry::with_builtins();
    match args.command {
        Command::Merge { base, overlays } => {
            let mut values = vec![parse_value(&base)];
            values.extend(overlays.iter().map(|o| parse_value(o)));
            registry.call("merge", &values)
        }
        Command::Compare { value1, value2, operator } => registry.call(
            "compare",
            &[parse_value(&value1), parse_value(&value2), Value::String(operator)],
        ),
        Command::Icons { category } => {
            let args: Vec<Value> = category.into_iter().map(Value::String).collect();
            registry.call("icons", &args)
        }
        Command::Colors { context } => {
            let args: Vec<Value> = context.into_iter().map(Value::String).collect();
            registry.call("colors", &args)
        }
        Command::Credentials { config } => {
            let settings = match config {
                Some(path) => TransportSettings::from_file(&path)?,
                None => TransportSettings::from_env(),
            };
            Ok(serde_json::to_value(resolve_credentials(&settings))?)
        }
    }
}

fn main() -> ExitCode {
    // Parse CLI arguments.
    let args = Args::parse();
    init_tracing(args.verbose);

    let out = match run(args) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Output result.
    match serde_json::to_string_pretty(&out) {
        Ok(s) => {
            println!("{s}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
