//! Custom boundaries read from SVG.
//!
//! The `custom` shape has no built-in mask. An [`Outline`] fills that gap:
//! take any SVG drawing, extract its filled shapes as polygons, and keep only
//! the stitches that fall inside one of them.
//!
//! Uses usvg for complete SVG resolution (CSS, basic shapes to paths, etc.)
//! then walks the tree to extract path data as polygons. Transforms on
//! individual elements are not applied; coordinates are taken as written.
//!
//! ## Curve Flattening
//!
//! SVG paths contain Bézier curves (cubic and quadratic). These must be
//! "flattened" into line segments before point-in-polygon tests. We use
//! lyon_geom for accurate curve approximation with a fixed tolerance.

use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};

use crate::error::OutlineError;
use crate::geometry::{Point, Polygon};
use crate::mask::RetentionMask;

/// Tolerance for curve flattening.
/// Lower = more points, smoother curves, slower.
const CURVE_TOLERANCE: f32 = 0.1;

/// One or more polygons acting as a retention boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub polygons: Vec<Polygon>,
}

impl Outline {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Extract all filled shapes from an SVG document.
    ///
    /// Each path becomes one polygon: its first subpath is the outer ring
    /// and any further subpaths are holes.
    pub fn from_svg(svg_content: &str) -> Result<Self, OutlineError> {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg_content, &options)
            .map_err(|e| OutlineError::Parse(e.to_string()))?;

        let mut polygons = Vec::new();
        extract_from_group(tree.root(), &mut polygons);

        if polygons.is_empty() {
            Err(OutlineError::NoPolygons)
        } else {
            tracing::debug!(polygons = polygons.len(), "loaded outline");
            Ok(Self { polygons })
        }
    }

    /// Bounding box over every polygon: (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        self.polygons
            .iter()
            .filter_map(Polygon::bounding_box)
            .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
    }

    /// Stretch the outline so its bounding box covers a `width` x `height`
    /// canvas anchored at the origin.
    ///
    /// A degenerate (zero-width or zero-height) axis is only translated.
    pub fn fitted(&self, width: f64, height: f64) -> Outline {
        let Some((min_x, min_y, max_x, max_y)) = self.bounding_box() else {
            return self.clone();
        };

        let scale = |extent: f64, target: f64| if extent > 0.0 { target / extent } else { 1.0 };
        let sx = scale(max_x - min_x, width);
        let sy = scale(max_y - min_y, height);

        Outline {
            polygons: self
                .polygons
                .iter()
                .map(|poly| poly.map_points(|p| Point::new((p.x - min_x) * sx, (p.y - min_y) * sy)))
                .collect(),
        }
    }
}

impl RetentionMask for Outline {
    fn retains(&self, x: f64, y: f64) -> bool {
        self.polygons.iter().any(|poly| poly.contains(x, y))
    }
}

/// Recursively extract polygons from a usvg Group.
fn extract_from_group(group: &usvg::Group, polygons: &mut Vec<Polygon>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => extract_from_group(group, polygons),
            usvg::Node::Path(path) => {
                if let Some(polygon) = path_to_polygon(path) {
                    polygons.push(polygon);
                }
            }
            // Ignore text, images, etc.
            _ => {}
        }
    }
}

/// Convert a usvg path to a polygon, flattening curves.
fn path_to_polygon(path: &usvg::Path) -> Option<Polygon> {
    use usvg::tiny_skia_path::PathSegment;

    let mut rings: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut last_point: Option<(f32, f32)> = None;

    for segment in path.data().segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                // Start of new subpath
                if !current.is_empty() {
                    rings.push(std::mem::take(&mut current));
                }
                current.push(Point::new(p.x as f64, p.y as f64));
                last_point = Some((p.x, p.y));
            }
            PathSegment::LineTo(p) => {
                current.push(Point::new(p.x as f64, p.y as f64));
                last_point = Some((p.x, p.y));
            }
            PathSegment::QuadTo(ctrl, p) => {
                if let Some((lx, ly)) = last_point {
                    let curve = QuadraticBezierSegment {
                        from: point(lx, ly),
                        ctrl: point(ctrl.x, ctrl.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |line| {
                        current.push(Point::new(line.to.x as f64, line.to.y as f64));
                    });
                } else {
                    current.push(Point::new(p.x as f64, p.y as f64));
                }
                last_point = Some((p.x, p.y));
            }
            PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                if let Some((lx, ly)) = last_point {
                    let curve = CubicBezierSegment {
                        from: point(lx, ly),
                        ctrl1: point(ctrl1.x, ctrl1.y),
                        ctrl2: point(ctrl2.x, ctrl2.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |line| {
                        current.push(Point::new(line.to.x as f64, line.to.y as f64));
                    });
                } else {
                    current.push(Point::new(p.x as f64, p.y as f64));
                }
                last_point = Some((p.x, p.y));
            }
            PathSegment::Close => {}
        }
    }
    if !current.is_empty() {
        rings.push(current);
    }

    // Curve flattening can repeat endpoints; a ring needs 3 distinct vertices.
    let mut rings = rings.into_iter().filter_map(|mut ring| {
        ring.dedup_by(|a, b| (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
        (ring.len() >= 3).then_some(ring)
    });

    let outer = rings.next()?;
    Some(Polygon::with_holes(outer, rings.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_rect() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <rect x="10" y="10" width="80" height="80"/>
            </svg>
        "#;

        let outline = Outline::from_svg(svg).unwrap();
        assert_eq!(outline.polygons.len(), 1);
        assert_eq!(outline.polygons[0].outer.len(), 4);
        assert_eq!(outline.bounding_box(), Some((10.0, 10.0, 90.0, 90.0)));
    }

    #[test]
    fn no_polygons_error() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"></svg>"#;
        assert!(matches!(Outline::from_svg(svg), Err(OutlineError::NoPolygons)));
    }

    #[test]
    fn malformed_svg_error() {
        assert!(matches!(Outline::from_svg("<svg"), Err(OutlineError::Parse(_))));
    }

    #[test]
    fn circle_is_flattened() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="40"/>
            </svg>
        "#;

        let outline = Outline::from_svg(svg).unwrap();
        assert!(
            outline.polygons[0].outer.len() > 20,
            "Circle should have many points from curve flattening, got {}",
            outline.polygons[0].outer.len()
        );
        assert!(outline.retains(50.0, 50.0));
        assert!(outline.retains(50.0, 12.0));
        assert!(!outline.retains(12.0, 12.0));
    }

    #[test]
    fn second_subpath_is_a_hole() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <path fill-rule="evenodd" d="M 0,0 L 100,0 L 100,100 L 0,100 Z M 40,40 L 60,40 L 60,60 L 40,60 Z"/>
            </svg>
        "#;

        let outline = Outline::from_svg(svg).unwrap();
        assert_eq!(outline.polygons[0].holes.len(), 1);
        assert!(outline.retains(10.0, 10.0));
        assert!(!outline.retains(50.0, 50.0));
    }

    #[test]
    fn fitted_maps_bbox_onto_canvas() {
        let outline = Outline::new(vec![Polygon::new(vec![
            Point::new(10.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(20.0, 30.0),
            Point::new(10.0, 30.0),
        ])]);

        let fitted = outline.fitted(200.0, 120.0);
        assert_eq!(fitted.bounding_box(), Some((0.0, 0.0, 200.0, 120.0)));
        assert!(fitted.retains(100.0, 60.0));
        assert!(!outline.retains(100.0, 60.0));
    }
}
