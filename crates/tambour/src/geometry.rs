//! Core geometry types for tambour.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = print with `{:?}`
//! - `Clone` / `Copy` = duplicate the value (Copy only for small stack values)
//! - `PartialEq` / `Eq` = compare with `==`
//! - `Serialize` / `Deserialize` = serde support, used by the JSON record

use serde::{Deserialize, Serialize};

/// A 2D point on the logical canvas, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A single stitch location, rounded to whole canvas units.
///
/// This is what ends up in the exported record as `{ "x": 12, "y": 40 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StitchPoint {
    pub x: i64,
    pub y: i64,
}

/// A polygon with an outer boundary and optional holes.
///
/// Used as a custom retention boundary (see [`crate::outline`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Outer boundary vertices
    pub outer: Vec<Point>,
    /// Interior holes
    pub holes: Vec<Vec<Point>>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl StitchPoint {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Round a canvas point to the nearest whole unit (half away from zero).
    ///
    /// `as i64` saturates on overflow and maps NaN to 0, so this never panics.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self::new(p.x.round() as i64, p.y.round() as i64)
    }

    /// The stitch as a floating point canvas position.
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl Polygon {
    /// Create a simple polygon with no holes.
    pub fn new(outer: Vec<Point>) -> Self {
        Self { outer, holes: Vec::new() }
    }

    /// Create a polygon with holes.
    pub fn with_holes(outer: Vec<Point>, holes: Vec<Vec<Point>>) -> Self {
        Self { outer, holes }
    }

    /// Get the bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// There is no `null`. An empty polygon has no bounding box, so we
    /// return `None` and the compiler makes every caller handle it.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        if self.outer.is_empty() {
            return None;
        }

        let min_x = self.outer.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = self.outer.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = self.outer.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = self.outer.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some((min_x, min_y, max_x, max_y))
    }

    /// Check if a point is inside the polygon body (inside outer, not in any hole).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if !point_in_polygon(x, y, &self.outer) {
            return false;
        }
        !self.holes.iter().any(|hole| point_in_polygon(x, y, hole))
    }

    /// Apply `f` to every vertex, outer ring and holes alike.
    pub fn map_points<F>(&self, f: F) -> Polygon
    where
        F: Fn(Point) -> Point,
    {
        Polygon {
            outer: self.outer.iter().map(|&p| f(p)).collect(),
            holes: self
                .holes
                .iter()
                .map(|hole| hole.iter().map(|&p| f(p)).collect())
                .collect(),
        }
    }
}

// ## Rust Lesson #8: References & Slices
//
// `&[Point]` is a "slice" - a borrowed view into a contiguous sequence.
// It works with Vec<Point>, arrays, or any contiguous memory.

/// Test if a point is inside a ring using ray casting.
///
/// Casts a ray to the right and counts edge crossings.
/// Odd crossings = inside, even = outside.
#[inline]
pub fn point_in_polygon(px: f64, py: f64, ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (ring[i].x, ring[i].y);
        let (xj, yj) = (ring[j].x, ring[j].y);

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<Point> {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]
    }

    #[test]
    fn stitch_rounding_is_half_away_from_zero() {
        assert_eq!(StitchPoint::from_point(Point::new(66.5, 0.4)), StitchPoint::new(67, 0));
        assert_eq!(StitchPoint::from_point(Point::new(133.333, 119.6)), StitchPoint::new(133, 120));
    }

    #[test]
    fn stitch_rounding_saturates() {
        let p = StitchPoint::from_point(Point::new(f64::INFINITY, f64::NAN));
        assert_eq!(p, StitchPoint::new(i64::MAX, 0));
    }

    #[test]
    fn polygon_bbox() {
        let poly = Polygon::new(square(0.0, 10.0));
        assert_eq!(poly.bounding_box(), Some((0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn empty_polygon_bbox() {
        let poly = Polygon::new(vec![]);
        assert_eq!(poly.bounding_box(), None);
    }

    #[test]
    fn point_inside_square() {
        let ring = square(0.0, 100.0);
        assert!(point_in_polygon(50.0, 50.0, &ring));
        assert!(!point_in_polygon(150.0, 50.0, &ring));
        assert!(!point_in_polygon(50.0, 50.0, &ring[..2]));
    }

    #[test]
    fn contains_excludes_holes() {
        let poly = Polygon::with_holes(square(0.0, 100.0), vec![square(40.0, 60.0)]);
        assert!(poly.contains(10.0, 10.0));
        assert!(!poly.contains(50.0, 50.0), "hole should not count as inside");
        assert!(!poly.contains(150.0, 50.0));
    }

    #[test]
    fn map_points_transforms_holes_too() {
        let poly = Polygon::with_holes(square(0.0, 10.0), vec![square(4.0, 6.0)]);
        let scaled = poly.map_points(|p| Point::new(p.x * 2.0, p.y * 2.0));
        assert_eq!(scaled.bounding_box(), Some((0.0, 0.0, 20.0, 20.0)));
        assert_eq!(scaled.holes[0][0], Point::new(8.0, 8.0));
    }
}
