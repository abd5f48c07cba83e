//! Enumerated design choices: boundary shape, placement and technique.
//!
//! Only [`Shape`] affects geometry. [`Placement`] and [`Technique`] are
//! descriptive: they travel into the exported record untouched and the
//! generator never looks at them.

use serde::{Deserialize, Serialize};

/// Boundary shape that decides which generated stitches are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    #[default]
    Rectangle,
    Circle,
    Oval,
    Custom,
}

/// Where on the garment the design goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    ChestUpper,
    ChestCenter,
    Back,
    Sleeve,
    Collar,
    Pocket,
    CustomFabric,
}

/// Embroidery technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    #[default]
    Satin,
    Fill,
    Running,
    Freehand,
}

impl Shape {
    /// Get all available shapes.
    pub fn all() -> &'static [Shape] {
        &[Shape::Rectangle, Shape::Circle, Shape::Oval, Shape::Custom]
    }

    /// Get shape name as string (same spelling as the serialized form).
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle => "rectangle",
            Shape::Circle => "circle",
            Shape::Oval => "oval",
            Shape::Custom => "custom",
        }
    }

    /// Parse shape from name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Shape> {
        match name.trim().to_lowercase().as_str() {
            "rectangle" | "rect" | "square" => Some(Shape::Rectangle),
            "circle" | "round" => Some(Shape::Circle),
            "oval" | "ellipse" => Some(Shape::Oval),
            "custom" | "outline" => Some(Shape::Custom),
            _ => None,
        }
    }

    /// Short description for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Rectangle => "Full canvas grid",
            Shape::Circle => "Inscribed circle",
            Shape::Oval => "Canvas-filling ellipse",
            Shape::Custom => "All stitches, or a supplied outline",
        }
    }
}

impl Placement {
    pub fn all() -> &'static [Placement] {
        &[
            Placement::ChestUpper,
            Placement::ChestCenter,
            Placement::Back,
            Placement::Sleeve,
            Placement::Collar,
            Placement::Pocket,
            Placement::CustomFabric,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Placement::ChestUpper => "chest-upper",
            Placement::ChestCenter => "chest-center",
            Placement::Back => "back",
            Placement::Sleeve => "sleeve",
            Placement::Collar => "collar",
            Placement::Pocket => "pocket",
            Placement::CustomFabric => "custom-fabric",
        }
    }

    pub fn from_name(name: &str) -> Option<Placement> {
        match name.trim().to_lowercase().replace('_', "-").as_str() {
            "chest-upper" | "chest" => Some(Placement::ChestUpper),
            "chest-center" | "chest-centre" => Some(Placement::ChestCenter),
            "back" => Some(Placement::Back),
            "sleeve" => Some(Placement::Sleeve),
            "collar" => Some(Placement::Collar),
            "pocket" => Some(Placement::Pocket),
            "custom-fabric" | "fabric" => Some(Placement::CustomFabric),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Placement::ChestUpper => "Chest - upper",
            Placement::ChestCenter => "Chest - center",
            Placement::Back => "Back",
            Placement::Sleeve => "Sleeve",
            Placement::Collar => "Collar",
            Placement::Pocket => "Pocket",
            Placement::CustomFabric => "Custom fabric",
        }
    }
}

impl Technique {
    pub fn all() -> &'static [Technique] {
        &[Technique::Satin, Technique::Fill, Technique::Running, Technique::Freehand]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Technique::Satin => "satin",
            Technique::Fill => "fill",
            Technique::Running => "running",
            Technique::Freehand => "freehand",
        }
    }

    pub fn from_name(name: &str) -> Option<Technique> {
        match name.trim().to_lowercase().as_str() {
            "satin" => Some(Technique::Satin),
            "fill" | "tatami" => Some(Technique::Fill),
            "running" | "run" => Some(Technique::Running),
            "freehand" | "free" => Some(Technique::Freehand),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Technique::Satin => "Satin",
            Technique::Fill => "Fill (Tatami)",
            Technique::Running => "Run stitch",
            Technique::Freehand => "Freehand",
        }
    }
}
