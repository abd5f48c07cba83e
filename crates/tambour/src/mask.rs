//! Retention masks decide which generated stitches survive.
//!
//! ## Rust Lesson #15: Traits
//!
//! A trait is a shared interface. Anything that can answer "is (x, y) kept?"
//! can act as a mask: the built-in shapes, an SVG outline, or a plain closure.

use crate::shape::Shape;

/// Slack for float error at the boundary of curved masks.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// A predicate over canvas coordinates.
pub trait RetentionMask {
    fn retains(&self, x: f64, y: f64) -> bool;
}

impl<F> RetentionMask for F
where
    F: Fn(f64, f64) -> bool,
{
    #[inline]
    fn retains(&self, x: f64, y: f64) -> bool {
        self(x, y)
    }
}

/// Mask for one of the built-in [`Shape`]s on a `width` x `height` canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeMask {
    pub shape: Shape,
    pub width: f64,
    pub height: f64,
}

impl ShapeMask {
    pub fn new(shape: Shape, width: f64, height: f64) -> Self {
        Self { shape, width, height }
    }

    /// Center of the canvas.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl RetentionMask for ShapeMask {
    fn retains(&self, x: f64, y: f64) -> bool {
        let (cx, cy) = self.center();
        match self.shape {
            // Rectangle is the grid itself. Custom has no built-in boundary;
            // callers pass their own mask to generate_layout_with.
            Shape::Rectangle | Shape::Custom => true,
            Shape::Circle => {
                let r = self.width.min(self.height) / 2.0;
                let (dx, dy) = (x - cx, y - cy);
                dx * dx + dy * dy <= r * r + BOUNDARY_EPSILON
            }
            Shape::Oval => {
                let (dx, dy) = ((x - cx) / cx, (y - cy) / cy);
                dx * dx + dy * dy <= 1.0 + BOUNDARY_EPSILON
            }
        }
    }
}
