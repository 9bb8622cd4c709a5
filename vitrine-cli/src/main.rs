//! Command-line interface for vitrine
//! This binary inspects template projects and previews their living styleguide.
//!
//! Usage:
//!   vitrine scan `<roots>`... [--config `<file>`]                 - Print the discovered catalog as JSON
//!   vitrine doc `<file>`                                          - Print a single template's parsed doc as JSON
//!   vitrine index `<roots>`... [--module `<name>`] [--config `<file>`] - Render a static HTML index preview

mod html;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Arg, ArgMatches, Command};
use vitrine_catalog::{Module, PathLinks, StyleguideLoader};
use vitrine_config::{Loader, StyleguideConfig};

fn main() {
    init_logging();

    let matches = Command::new("vitrine")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and previewing template styleguides")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("scan")
                .about("Discover styleguide modules and print them as JSON")
                .arg(roots_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("doc")
                .about("Extract and parse the doc comment of a single template")
                .arg(
                    Arg::new("file")
                        .help("Path to the template file")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("index")
                .about("Render a static HTML preview of the styleguide index")
                .arg(roots_arg())
                .arg(
                    Arg::new("module")
                        .long("module")
                        .short('m')
                        .help("Render with this module selected"),
                )
                .arg(config_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("scan", sub)) => handle_scan_command(sub),
        Some(("doc", sub)) => handle_doc_command(sub),
        Some(("index", sub)) => handle_index_command(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn roots_arg() -> Arg {
    Arg::new("roots")
        .help("Template root directories")
        .required(true)
        .num_args(1..)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Path to a vitrine settings file (TOML)")
}

/// Handle the scan command
fn handle_scan_command(matches: &ArgMatches) {
    let settings = load_settings(matches);
    let modules = load_modules(matches, &settings);

    let formatted = serde_json::to_string_pretty(&modules).unwrap_or_else(|e| {
        eprintln!("Error formatting catalog: {}", e);
        std::process::exit(1);
    });
    println!("{}", formatted);
}

/// Handle the doc command
fn handle_doc_command(matches: &ArgMatches) {
    let path = matches
        .get_one::<String>("file")
        .expect("file is required");

    let raw = vitrine_parser::extract_doc_from_file(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    let doc = vitrine_parser::parse_doc(&raw);

    let formatted = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
        eprintln!("Error formatting doc: {}", e);
        std::process::exit(1);
    });
    println!("{}", formatted);
}

/// Handle the index command
fn handle_index_command(matches: &ArgMatches) {
    let settings = load_settings(matches);
    let modules = load_modules(matches, &settings);

    let current = matches.get_one::<String>("module").and_then(|name| {
        let found = modules.iter().find(|m| m.id == *name || m.name == *name);
        if found.is_none() {
            eprintln!("Warning: no module named '{}'", name);
        }
        found
    });

    print!("{}", html::render_index(&modules, current));
}

fn load_settings(matches: &ArgMatches) -> StyleguideConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    match loader.build() {
        Ok(config) => config.styleguide,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_modules(matches: &ArgMatches, settings: &StyleguideConfig) -> Vec<Module> {
    let roots: Vec<PathBuf> = matches
        .get_many::<String>("roots")
        .expect("roots are required")
        .map(PathBuf::from)
        .collect();

    let links = Arc::new(PathLinks::new(settings.link_base.clone()));
    let loader = StyleguideLoader::new(settings.clone(), links);

    loader.load(&roots).unwrap_or_else(|e| {
        eprintln!("Discovery error: {}", e);
        std::process::exit(1);
    })
}
