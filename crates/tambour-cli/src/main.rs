//! tambour - CLI for parametric stitch layouts
//!
//! Usage:
//!   tambour generate [options]        Write one SVG or JSON document
//!   tambour export [options]          Write <name>.embro.json and <name>.svg
//!   tambour batch <recipe.yaml>       Export every design in a recipe
//!   tambour render <record.json>      Rebuild the SVG from a saved record
//!   tambour options                   List shapes, locations and methods

use std::env;

use anyhow::{Result, bail};

use tambour::{Placement, Shape, Technique};

mod cli;
use cli::{cmd_batch, cmd_export, cmd_generate, cmd_render};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let program = args.first().map(String::as_str).unwrap_or("tambour");
    let Some(command) = args.get(1) else {
        print_usage(program);
        bail!("No command given");
    };

    let rest = &args[2..];
    match command.as_str() {
        "generate" => cmd_generate(rest),
        "export" => cmd_export(rest),
        "batch" => cmd_batch(rest),
        "render" => cmd_render(rest),
        "options" => {
            cmd_options();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(())
        }
        other => {
            print_usage(program);
            bail!("Unknown command: {}", other)
        }
    }
}

/// Log to stderr so generated documents on stdout stay clean.
///
/// Level defaults to `info`; `RUST_LOG` overrides it.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_options() {
    println!("Shapes:");
    for shape in Shape::all() {
        println!("  {:<14} {}", shape.name(), shape.label());
    }
    println!();
    println!("Locations:");
    for placement in Placement::all() {
        println!("  {:<14} {}", placement.name(), placement.label());
    }
    println!();
    println!("Methods:");
    for technique in Technique::all() {
        println!("  {:<14} {}", technique.name(), technique.label());
    }
}

fn print_usage(program: &str) {
    eprintln!("tambour - parametric embroidery stitch layouts");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    {} <COMMAND> [OPTIONS]", program);
    eprintln!();
    eprintln!("COMMANDS:");
    eprintln!("    generate    Write one SVG (default) or JSON document to stdout or -o");
    eprintln!("    export      Write <name>.embro.json and <name>.svg (and --png preview)");
    eprintln!("    batch       Export every design in a YAML recipe");
    eprintln!("    render      Rebuild the SVG drawing from a saved .embro.json record");
    eprintln!("    options     List shapes, locations and methods");
    eprintln!("    help        Show this message");
    eprintln!();
    eprintln!("Run '{} <COMMAND> --help' for command options.", program);
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    {} generate -c 400 -s oval --color navy > oval.svg", program);
    eprintln!("    {} export -n rose -s circle -d out --png", program);
    eprintln!("    {} generate -s custom --outline logo.svg --fit-outline -f json", program);
}
