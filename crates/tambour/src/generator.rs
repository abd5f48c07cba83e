//! Stitch layout generation - a density-scaled grid, trimmed by a shape mask.
//!
//! The grid is deliberately simple: `cols = round(sqrt(n / density))`,
//! `rows = ceil(n / cols)`, stitches spread edge to edge across the canvas
//! and emitted row by row until `n` have been placed. The last row is usually
//! partial, giving a jagged bottom edge.
//!
//! Placement and technique never reach this module. The generator is purely
//! grid based; they are carried into the exported record only.

use crate::geometry::{Point, StitchPoint};
use crate::mask::{RetentionMask, ShapeMask};
use crate::params::{MAX_DENSITY, MAX_STITCH_COUNT, MIN_DENSITY, ParameterSet};

/// Generated stitches plus the canvas they were laid out on.
///
/// Point order is generation order (row-major), which is also stitch order:
/// `points[0]` is the first stitch.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub points: Vec<StitchPoint>,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn new(points: Vec<StitchPoint>, width: f64, height: f64) -> Self {
        Self { points, width, height }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StitchPoint> {
        self.points.iter()
    }
}

/// Grid dimensions and spacing for one parameter set.
///
/// Similar in spirit to a pattern context: compute the shared numbers once,
/// then walk them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlan {
    /// Number of stitches to emit before stopping
    pub count: usize,
    pub cols: usize,
    pub rows: usize,
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub width: f64,
    pub height: f64,
}

impl GridPlan {
    /// Plan a grid. Count and density are clamped, never rejected.
    ///
    /// Counts above [`MAX_STITCH_COUNT`] are capped with a warning; the
    /// caller's parameter set keeps the requested value.
    pub fn new(stitch_count: u32, density: u8, width: f64, height: f64) -> Self {
        if stitch_count > MAX_STITCH_COUNT {
            tracing::warn!(
                requested = stitch_count,
                capped = MAX_STITCH_COUNT,
                "stitch count above the limit, generating fewer stitches"
            );
        }
        let count = stitch_count.clamp(1, MAX_STITCH_COUNT) as usize;
        let density = density.clamp(MIN_DENSITY, MAX_DENSITY) as f64;

        let cols = ((count as f64 / density).sqrt().round() as usize).max(1);
        let rows = count.div_ceil(cols).max(1);

        // A single column/row collapses that axis onto offset 0.
        let spacing_x = width / cols.saturating_sub(1).max(1) as f64;
        let spacing_y = height / rows.saturating_sub(1).max(1) as f64;

        Self { count, cols, rows, spacing_x, spacing_y, width, height }
    }

    /// Plan the grid for a parameter set, using its normalized values.
    pub fn for_params(params: &ParameterSet) -> Self {
        let (width, height) = params.effective_bounds();
        Self::new(params.stitch_count, params.effective_density(), width, height)
    }

    /// Grid positions in row-major order, stopping after `count` points.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let (cols, sx, sy) = (self.cols, self.spacing_x, self.spacing_y);
        (0..self.rows)
            .flat_map(move |r| (0..cols).map(move |c| Point::new(c as f64 * sx, r as f64 * sy)))
            .take(self.count)
    }
}

/// Generate the layout for a parameter set using its own shape mask.
///
/// Total: any parameter set yields a layout with at least one stitch.
pub fn generate_layout(params: &ParameterSet) -> Layout {
    let (width, height) = params.effective_bounds();
    let mask = ShapeMask::new(params.shape, width, height);
    generate_layout_with(params, &mask)
}

/// Generate the layout for a parameter set, keeping only stitches `mask` retains.
///
/// The mask replaces the built-in shape mask entirely; this is how a custom
/// boundary (an [`crate::outline::Outline`] or any closure) is applied.
///
/// Masks see the rounded stitch coordinates, so every exported point
/// satisfies the mask exactly. If the mask rejects every stitch the layout
/// falls back to a single stitch: the canvas center when the mask keeps it,
/// otherwise the first grid point.
pub fn generate_layout_with(params: &ParameterSet, mask: &dyn RetentionMask) -> Layout {
    let plan = GridPlan::for_params(params);

    let mut points = Vec::with_capacity(plan.count);
    points.extend(
        plan.points()
            .map(StitchPoint::from_point)
            .filter(|stitch| {
                let p = stitch.to_point();
                mask.retains(p.x, p.y)
            }),
    );

    if points.is_empty() {
        let center = StitchPoint::from_point(Point::new(plan.width / 2.0, plan.height / 2.0));
        let c = center.to_point();
        let fallback = if mask.retains(c.x, c.y) { center } else { StitchPoint::new(0, 0) };
        tracing::debug!(x = fallback.x, y = fallback.y, "mask rejected every stitch, keeping one");
        points.push(fallback);
    }

    tracing::debug!(
        requested = params.stitch_count,
        planned = plan.count,
        cols = plan.cols,
        rows = plan.rows,
        retained = points.len(),
        shape = params.shape.name(),
        "generated stitch layout"
    );

    Layout::new(points, plan.width, plan.height)
}
