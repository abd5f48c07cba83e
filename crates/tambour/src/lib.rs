//! # tambour
//!
//! Parametric embroidery stitch layouts.
//!
//! A [`ParameterSet`] describes a design: stitch count, density, canvas size,
//! a boundary [`Shape`], plus descriptive placement and technique. The
//! generator turns it into a [`Layout`], an ordered list of integer stitch
//! coordinates, and the exporters write that layout as a JSON record and as
//! an SVG drawing.
//!
//! ```
//! use tambour::{ParameterSet, Shape, generate_layout};
//!
//! let params = ParameterSet { stitch_count: 100, shape: Shape::Oval, ..Default::default() };
//! let layout = generate_layout(&params);
//! assert!(!layout.is_empty());
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! Each `pub mod` below is one file (or a folder with `mod.rs`). The `pub use`
//! lines re-export the common types so callers can write `tambour::Layout`
//! instead of `tambour::generator::Layout`.

pub mod batch;
pub mod color;
pub mod error;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod mask;
pub mod outline;
pub mod params;
pub mod shape;

// Re-export common types at crate root for convenience.
pub use batch::export_batch;
pub use color::Color;
pub use error::{ColorError, ExportError, OutlineError};
pub use export::{ExportArtifact, ExportBundle};
pub use generator::{GridPlan, Layout, generate_layout, generate_layout_with};
pub use geometry::{Point, Polygon, StitchPoint, point_in_polygon};
pub use mask::{RetentionMask, ShapeMask};
pub use outline::Outline;
pub use params::ParameterSet;
pub use shape::{Placement, Shape, Technique};
