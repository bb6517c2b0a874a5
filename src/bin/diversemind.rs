//! Command-line interface for diversemind
//! Extracts structured records from generated lesson plans, quizzes and icebreakers.
//!
//! Usage:
//!   diversemind extract `<path>` --kind `<kind>` [--format `<format>`] [--response]  - Extract and render a record
//!   diversemind strip `<path>`                                                     - Print assessment text without its chat wrapper
//!   diversemind list-formats                                                       - List available output formats
//!
//! `<path>` may be `-` to read stdin. Every subcommand accepts `--config <file>`;
//! `diversemind.toml` in the working directory is picked up when present.

use clap::{Arg, ArgAction, ArgMatches, Command};
use diversemind::content::processor::{InputMode, ProcessingSpec, Processor};
use diversemind::content::ContentKind;
use diversemind_config::{DiverseMindConfig, Loader};
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "diversemind.toml";

fn main() {
    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults")
        .global(true);

    let matches = Command::new("diversemind")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract structured records from generated classroom content")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(config_arg)
        .subcommand(
            Command::new("extract")
                .about("Extract a record and render it")
                .arg(
                    Arg::new("path")
                        .help("Path to the generated content, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .short('k')
                        .help("Kind of content")
                        .value_parser(["lesson-plan", "quiz", "icebreaker"])
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (json, yaml, text, html); defaults to the configured one"),
                )
                .arg(
                    Arg::new("response")
                        .long("response")
                        .short('r')
                        .help("Treat the input as a backend JSON response body")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("strip")
                .about("Print assessment text without its conversational wrapper")
                .arg(
                    Arg::new("path")
                        .help("Path to the generated content, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let format_override = matches
        .subcommand_matches("extract")
        .and_then(|m| m.get_one::<String>("format"));
    let config = load_config(matches.get_one::<String>("config"), format_override);
    init_logging(&config.logging.filter);

    let processor = Processor::from_config(&config).unwrap_or_else(|e| fail(e));

    match matches.subcommand() {
        Some(("extract", extract_matches)) => {
            handle_extract_command(&processor, extract_matches, &config.output.format)
        }
        Some(("strip", strip_matches)) => {
            let path = strip_matches.get_one::<String>("path").unwrap();
            handle_strip_command(&processor, path);
        }
        Some(("list-formats", _)) => handle_list_formats_command(&processor),
        _ => unreachable!(),
    }
}

fn load_config(path: Option<&String>, format: Option<&String>) -> DiverseMindConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| fail(e));
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// `RUST_LOG` wins over the configured filter.
fn init_logging(filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}

/// Handle the extract command
fn handle_extract_command(processor: &Processor, matches: &ArgMatches, format: &str) {
    let path = matches.get_one::<String>("path").unwrap();
    let kind: ContentKind = matches
        .get_one::<String>("kind")
        .unwrap()
        .parse()
        .unwrap_or_else(|e| fail(e));
    let input = if matches.get_flag("response") {
        InputMode::Response
    } else {
        InputMode::Raw
    };

    let spec = ProcessingSpec::new(kind, input, format);
    let output = processor.process_file(path, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in processor.registry().list_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the strip command
fn handle_strip_command(processor: &Processor, path: &str) {
    let source = diversemind::content::processor::read_source(path).unwrap_or_else(|e| fail(e));
    print!("{}", processor.extractor().stripper().strip(&source));
}

/// Handle the list-formats command
fn handle_list_formats_command(processor: &Processor) {
    println!("Available output formats:\n");

    for (name, description) in processor.registry().describe() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
