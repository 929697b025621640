use clap::{Parser as ClapParser, Subcommand};
use jsonlogic::cli::{self, ApplyOptions, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "jsonlogic")]
#[command(about = "jsonlogic - evaluate and inspect rules written as JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a rule against JSON data
    Apply {
        /// The rule, as JSON
        rule: String,

        /// JSON data (reads from stdin if not provided)
        #[arg(short, long)]
        data: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List the data paths a rule reads
    UsesData {
        /// The rule, as JSON
        rule: String,
    },

    /// Check whether a rule matches a pattern
    RuleLike {
        /// The rule, as JSON
        rule: String,

        /// The pattern, as JSON
        pattern: String,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'jsonlogic docs' to list categories)
        category: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply { rule, data, pretty } => run_apply(rule, data, pretty),
        Commands::UsesData { rule } => {
            cli::execute_uses_data(&rule).and_then(|paths| print_json(&paths, false))
        }
        Commands::RuleLike { rule, pattern } => cli::execute_rule_like(&rule, &pattern).map(|m| {
            println!("{}", m);
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// `log` operator output goes to stderr; `RUST_LOG` overrides the filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,jsonlogic::log=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_apply(rule: String, data: Option<String>, pretty: bool) -> Result<(), CliError> {
    let data = match data {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = ApplyOptions { rule, data };
    let output = cli::execute_apply(&options)?;
    print_json(&output, pretty)
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|source| CliError::Json {
        what: "output",
        source,
    })?;
    println!("{}", json);
    Ok(())
}
