//! Export command implementation: the record, the drawing and an optional preview.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use tambour::ExportBundle;

use super::common::{DesignArgs, value, write_artifact};
use super::generate::print_design_options;
use super::preview::{DEFAULT_PNG_SCALE, render_png};

/// Execute the export command.
pub fn cmd_export(args: &[String]) -> Result<()> {
    let mut design = DesignArgs::default();
    let mut output_dir = PathBuf::from(".");
    let mut png = false;
    let mut png_scale = DEFAULT_PNG_SCALE;

    let mut i = 0;
    while i < args.len() {
        if let Some(last) = design.parse_flag(args, i)? {
            i = last + 1;
            continue;
        }
        match args[i].as_str() {
            "-d" | "--dir" => {
                output_dir = PathBuf::from(value(args, i, "--dir")?);
                i += 1;
            }
            "--png" => png = true,
            "--png-scale" => {
                png_scale = value(args, i, "--png-scale")?.parse().unwrap_or(DEFAULT_PNG_SCALE);
                i += 1;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            unknown => bail!("Unknown option: {}", unknown),
        }
        i += 1;
    }

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let layout = design.layout()?;
    let bundle = ExportBundle::from_layout(&design.params, layout, design.generated_on())?;

    for artifact in bundle.artifacts() {
        write_artifact(&output_dir, artifact)?;
    }

    if png {
        let path = output_dir.join(format!("{}.png", design.params.file_stem()));
        render_png(&bundle.svg.bytes, &path, png_scale)?;
    }

    tracing::info!(stitches = bundle.layout.len(), dir = %output_dir.display(), "export complete");
    Ok(())
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("tambour export - Write <name>.embro.json and <name>.svg");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    tambour export [DESIGN OPTIONS] [-d <dir>] [--png] [--png-scale <n>]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -d, --dir <dir>        Output directory (default: current directory)");
    eprintln!("    --png                  Also render <name>.png from the exported SVG");
    eprintln!("    --png-scale <n>        PNG scale factor (default: {})", DEFAULT_PNG_SCALE);
    eprintln!();
    print_design_options();
    eprintln!();
    eprintln!("An invalid color is replaced with black in the SVG and kept as typed in the record.");
}
