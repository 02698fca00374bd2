//! Schema Introspect CLI
//!
//! Command-line interface for describing and checking schema documents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use schema_introspect::{
    check_document, describe_input, load_document_auto, parse_document, CheckError,
    DescribeOptions, DocHelper, OpenApiHelper, Target,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-introspect")]
#[command(about = "Describe validation schema documents for API documentation")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the descriptor of a schema document
    Describe {
        /// Schema document: file path or URL (http:// or https://)
        schema: String,

        /// Documentation target: openapi or postman
        #[arg(long, short, default_value = "openapi")]
        target: String,

        /// Leave out target-specific hints
        #[arg(long)]
        no_hints: bool,

        /// Nesting depth past which children are dropped
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check a schema document against the node format
    Check {
        /// Schema document: file path or URL (http:// or https://)
        schema: String,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical type of a schema document
    Type {
        /// Schema document: file path or URL (http:// or https://)
        schema: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Describe {
            schema,
            target,
            no_hints,
            max_depth,
            output,
            pretty,
        } => run_describe(DescribeArgs {
            schema,
            target,
            hints: !no_hints,
            max_depth,
            output,
            pretty,
        }),
        Commands::Check { schema, json } => run_check(&schema, json),
        Commands::Type { schema } => run_type(&schema),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct DescribeArgs {
    schema: String,
    target: String,
    hints: bool,
    max_depth: Option<usize>,
    output: Option<PathBuf>,
    pretty: bool,
}

fn run_describe(args: DescribeArgs) -> Result<(), u8> {
    let Some(target) = Target::parse(&args.target) else {
        eprintln!(
            "Error: unknown target \"{}\": expected openapi or postman",
            args.target
        );
        return Err(2);
    };

    let node = load_document_auto(&args.schema)
        .and_then(parse_document)
        .map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?;

    let mut options = DescribeOptions::new(target).hints(args.hints);
    if let Some(max_depth) = args.max_depth {
        options = options.max_depth(max_depth);
    }
    tracing::debug!(doc_target = target.as_str(), "describing {}", args.schema);
    let descriptor = describe_input(node, &options);

    let json_output = if args.pretty {
        serde_json::to_string_pretty(&descriptor)
    } else {
        serde_json::to_string(&descriptor)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

fn run_check(schema: &str, json_output: bool) -> Result<(), u8> {
    let document = load_document_auto(schema).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    match check_document(&document) {
        Ok(()) => {
            if json_output {
                println!(r#"{{"valid":true}}"#);
            } else {
                println!("Valid");
            }
            Ok(())
        }
        Err(CheckError::Invalid { errors }) => {
            if json_output {
                let output = serde_json::json!({
                    "valid": false,
                    "errors": errors
                });
                println!("{}", output);
            } else {
                eprintln!("Check failed:");
                for error in errors {
                    eprintln!("  {}", error);
                }
            }
            Err(1)
        }
        Err(e) => {
            report_error(json_output, &e.to_string());
            Err(e.exit_code() as u8)
        }
    }
}

fn run_type(schema: &str) -> Result<(), u8> {
    let node = load_document_auto(schema)
        .and_then(parse_document)
        .map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?;

    println!("{}", OpenApiHelper::new(node).schema_type());
    Ok(())
}

/// Output an error message in plain text or JSON format.
fn report_error(json_output: bool, msg: &str) {
    if json_output {
        println!("{}", serde_json::json!({ "valid": false, "error": msg }));
    } else {
        eprintln!("Error: {}", msg);
    }
}
