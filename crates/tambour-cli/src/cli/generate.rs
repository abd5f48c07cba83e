//! Generate command implementation: one document to stdout or a file.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use tambour::export::{json, svg};

use super::common::{DesignArgs, OutputFormat, value, write_output};

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) -> Result<()> {
    let mut design = DesignArgs::default();
    let mut output_path: Option<PathBuf> = None;
    let mut format = OutputFormat::Svg;

    let mut i = 0;
    while i < args.len() {
        if let Some(last) = design.parse_flag(args, i)? {
            i = last + 1;
            continue;
        }
        match args[i].as_str() {
            "-o" | "--output" => {
                output_path = Some(PathBuf::from(value(args, i, "--output")?));
                i += 1;
            }
            "-f" | "--format" => {
                let name = value(args, i, "--format")?;
                format = OutputFormat::from_name(name)
                    .with_context(|| format!("Unknown format: {}. Use 'svg' or 'json'.", name))?;
                i += 1;
            }
            "--json" => format = OutputFormat::Json,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            unknown => bail!("Unknown option: {}", unknown),
        }
        i += 1;
    }

    let layout = design.layout()?;
    tracing::info!(stitches = layout.len(), shape = design.params.shape.name(), "generated layout");

    let bytes = match format {
        OutputFormat::Json => json::serialize(&design.params, &layout, design.generated_on())?,
        // Strict here: a bad color is reported instead of silently replaced.
        OutputFormat::Svg => svg::serialize(&layout, &design.params.color)?,
    };

    write_output(output_path.as_deref(), &bytes)
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("tambour generate - Generate one stitch layout document");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    tambour generate [DESIGN OPTIONS] [-f svg|json] [-o <file>]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -f, --format <fmt>     Output format: svg (default) or json");
    eprintln!("    --json                 Same as --format json");
    eprintln!("    -o, --output <file>    Output file (default: stdout)");
    eprintln!();
    print_design_options();
}

/// Design options shared by generate and export.
pub fn print_design_options() {
    eprintln!("DESIGN OPTIONS:");
    eprintln!("    -n, --name <text>      Design name, used for file names (default: customer_design)");
    eprintln!("    -l, --location <name>  Placement on the garment (default: chest-upper)");
    eprintln!("    -m, --method <name>    Embroidery technique (default: satin)");
    eprintln!("    -c, --count <n>        Stitch count (default: 1200)");
    eprintln!("    --density <1-10>       Grid density, 1 is tightest (default: 5)");
    eprintln!("    --color <color>        Hex, rgb() or named color (default: #ff0000)");
    eprintln!("    -s, --shape <name>     rectangle, circle, oval or custom (default: rectangle)");
    eprintln!("    -W, --width <n>        Canvas width (default: 200)");
    eprintln!("    -H, --height <n>       Canvas height (default: 120)");
    eprintln!("    --outline <svg>        Boundary for the custom shape");
    eprintln!("    --fit-outline          Stretch the outline over the canvas");
    eprintln!("    --timestamp <rfc3339>  Pin generatedOn (default: now)");
}
