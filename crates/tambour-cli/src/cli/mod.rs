//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `generate` - Write one SVG or JSON document
//! - `export` - Write the record and drawing (and optionally a PNG preview)
//! - `batch` - Export every design in a YAML recipe
//! - `render` - Rebuild the drawing from a saved record

pub mod batch;
pub mod common;
pub mod export;
pub mod generate;
pub mod preview;
pub mod render;

pub use batch::cmd_batch;
pub use export::cmd_export;
pub use generate::cmd_generate;
pub use render::cmd_render;
