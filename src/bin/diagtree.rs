//! Command-line interface for diagtree
//! Reads captured compiler output and prints it as a tree of typed nodes.
//!
//! Usage:
//!   diagtree filter [`<path>`] [--format `<format>`] [--config `<file>`]  - Process a capture (stdin if no path)
//!   diagtree parse-type `<expr>` [--format `<format>`]                  - Parse one type expression
//!   diagtree tokens `<expr>`                                          - Print the token stream
//!   diagtree brackets `<text>`                                        - Print the bracket decomposition
//!   diagtree list-formats                                           - List all output formats
//!
//! Log output is controlled with `DIAGTREE_LOG` (e.g. `DIAGTREE_LOG=debug`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info};
use std::io::{self, Read};
use std::process;

use diagtree::diag::brackets::decompose;
use diagtree::diag::formats::to_treeviz_str;
use diagtree::diag::lexer::tokenize;
use diagtree::diag::parser::parse_type;
use diagtree::diag::processor::{available_formats, format_node, process_file, OutputFormat};
use diagtree::{process_str, Config};

fn main() {
    let matches = Command::new("diagtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns C++ compiler diagnostics into structured trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log matched patterns and rejected type expressions"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .subcommand(
            Command::new("filter")
                .about("Process captured compiler output")
                .arg(
                    Arg::new("path")
                        .help("Capture file to read; standard input when omitted")
                        .index(1),
                )
                .arg(format_arg())
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("YAML options file"),
                ),
        )
        .subcommand(
            Command::new("parse-type")
                .about("Parse a single type expression")
                .arg(
                    Arg::new("expr")
                        .help("Type expression, e.g. 'std::vector<int>'")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the tokens of a type expression")
                .arg(Arg::new("expr").required(true).index(1)),
        )
        .subcommand(
            Command::new("brackets")
                .about("Print the <...> group structure of a string")
                .arg(Arg::new("text").required(true).index(1)),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    setup_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    match matches.subcommand() {
        Some(("filter", filter_matches)) => handle_filter_command(filter_matches),
        Some(("parse-type", parse_matches)) => {
            let expr = parse_matches.get_one::<String>("expr").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_type_command(expr, format);
        }
        Some(("tokens", tokens_matches)) => {
            let expr = tokens_matches.get_one::<String>("expr").unwrap();
            handle_tokens_command(expr);
        }
        Some(("brackets", brackets_matches)) => {
            let text = brackets_matches.get_one::<String>("text").unwrap();
            print!("{}", to_treeviz_str(&decompose(text).segments));
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (see list-formats)")
        .default_value("dump")
}

fn setup_logging(verbose: bool, quiet: bool) {
    let env = env_logger::Env::default().filter_or(
        "DIAGTREE_LOG",
        if verbose {
            "debug"
        } else if quiet {
            "error"
        } else {
            "warn"
        },
    );
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(verbose)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    error!("{}", message);
    process::exit(1);
}

fn output_format(name: &str) -> OutputFormat {
    OutputFormat::from_name(name).unwrap_or_else(|e| fail(e))
}

/// Handle the filter command
fn handle_filter_command(matches: &ArgMatches) {
    let format = output_format(matches.get_one::<String>("format").unwrap());

    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| fail(e)),
        None => Config::default(),
    };

    let tree = match matches.get_one::<String>("path") {
        Some(path) => {
            info!("reading {}", path);
            process_file(path, &config).unwrap_or_else(|e| fail(e))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|e| fail(format!("cannot read standard input: {}", e)));
            process_str(&buffer, &config)
        }
    };

    let output = format_node(&tree, &format).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the parse-type command
fn handle_parse_type_command(expr: &str, format: &str) {
    let format = output_format(format);
    let node = parse_type(expr).unwrap_or_else(|e| fail(e));
    let output = format_node(&node, &format).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the tokens command
fn handle_tokens_command(expr: &str) {
    let tokenized = tokenize(expr);
    for (token, span) in &tokenized.tokens {
        println!("{:>3}..{:<3} {}", span.start, span.end, token);
    }
    for lex_error in &tokenized.errors {
        error!("{}", lex_error);
    }
    if !tokenized.is_clean() {
        process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for name in available_formats() {
        println!("  {}", name);
    }
}
