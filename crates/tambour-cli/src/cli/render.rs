//! Render command: rebuild the SVG drawing from a saved `.embro.json` record.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use tambour::export::{json, svg};

use super::common::{value, write_output};

/// Execute the render command.
pub fn cmd_render(args: &[String]) -> Result<()> {
    let mut record_path: Option<&str> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut color: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                output_path = Some(PathBuf::from(value(args, i, "--output")?));
                i += 1;
            }
            "--color" => {
                color = Some(value(args, i, "--color")?);
                i += 1;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            path if !path.starts_with('-') => {
                if record_path.is_none() {
                    record_path = Some(path);
                }
            }
            unknown => bail!("Unknown option: {}", unknown),
        }
        i += 1;
    }

    let Some(record_path) = record_path else {
        print_usage();
        bail!("Record file required");
    };

    let bytes = fs::read(record_path).with_context(|| format!("Failed to read {}", record_path))?;
    let record = json::parse(&bytes).with_context(|| format!("Failed to parse record {}", record_path))?;
    let (params, layout) = record.into_parts();
    tracing::info!(design = %params.design_name, stitches = layout.len(), "loaded record");

    // An explicit --color must be valid; the record's own color falls back.
    let document = match color {
        Some(color) => svg::serialize(&layout, color)?,
        None => svg::serialize_or_fallback(&layout, &params.color)?,
    };

    write_output(output_path.as_deref(), &document)
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("tambour render - Rebuild the SVG from a saved record");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    tambour render <record.embro.json> [-o <file>] [--color <color>]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output file (default: stdout)");
    eprintln!("    --color <color>        Override the record's color");
}
