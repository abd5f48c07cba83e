//! Properties that must hold for every parameter set, not just the examples.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use tambour::export::{json, svg};
use tambour::{ExportBundle, Layout, ParameterSet, Placement, Shape, StitchPoint, Technique, generate_layout};

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
}

fn any_shape() -> impl Strategy<Value = Shape> {
    prop::sample::select(Shape::all().to_vec())
}

prop_compose! {
    fn any_params()(
        stitch_count in 0u32..3000,
        density in 0u8..=14,
        shape in any_shape(),
        width in prop_oneof![Just(200.0), 1.0f64..800.0],
        height in prop_oneof![Just(120.0), 1.0f64..800.0],
        design_name in "[a-z0-9 _./-]{0,24}",
    ) -> ParameterSet {
        ParameterSet { stitch_count, density, shape, width, height, design_name, ..Default::default() }
    }
}

fn positive_finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("positive and finite", |v| v.is_finite() && *v > 0.0)
}

prop_compose! {
    /// Parameter sets that need no normalization, so they must survive a
    /// save and reload unchanged.
    fn valid_params()(
        stitch_count in 1u32..3000,
        density in 1u8..=10,
        shape in any_shape(),
        location in prop::sample::select(Placement::all().to_vec()),
        method in prop::sample::select(Technique::all().to_vec()),
        width in positive_finite(),
        height in positive_finite(),
        color in any::<String>(),
        design_name in any::<String>(),
    ) -> ParameterSet {
        ParameterSet { design_name, location, method, stitch_count, density, color, shape, width, height }
    }
}

fn circle_contains(layout: &Layout, x: i64, y: i64) -> bool {
    let (cx, cy) = (layout.width / 2.0, layout.height / 2.0);
    let r = layout.width.min(layout.height) / 2.0;
    let (dx, dy) = (x as f64 - cx, y as f64 - cy);
    dx * dx + dy * dy <= r * r + 1e-9
}

fn oval_contains(layout: &Layout, x: i64, y: i64) -> bool {
    let (cx, cy) = (layout.width / 2.0, layout.height / 2.0);
    let (dx, dy) = ((x as f64 - cx) / cx, (y as f64 - cy) / cy);
    dx * dx + dy * dy <= 1.0 + 1e-9
}

proptest! {
    #[test]
    fn layout_is_never_empty(params in any_params()) {
        prop_assert!(!generate_layout(&params).is_empty());
    }

    #[test]
    fn layout_never_exceeds_requested_count(params in any_params()) {
        let layout = generate_layout(&params);
        prop_assert!(layout.len() <= params.effective_stitch_count() as usize);
    }

    #[test]
    fn rectangle_keeps_exactly_the_requested_count(stitch_count in 1u32..5000, density in 1u8..=10) {
        let params = ParameterSet { stitch_count, density, ..Default::default() };
        prop_assert_eq!(generate_layout(&params).len(), stitch_count as usize);
    }

    #[test]
    fn generation_is_deterministic(params in any_params()) {
        prop_assert_eq!(generate_layout(&params), generate_layout(&params));
    }

    #[test]
    fn stitches_stay_on_the_canvas(params in any_params()) {
        let layout = generate_layout(&params);
        for s in layout.iter() {
            prop_assert!(s.x >= 0 && s.x as f64 <= layout.width.round());
            prop_assert!(s.y >= 0 && s.y as f64 <= layout.height.round());
        }
    }

    #[test]
    fn curved_shapes_respect_their_boundary(mut params in any_params(), oval in any::<bool>()) {
        params.shape = if oval { Shape::Oval } else { Shape::Circle };
        let layout = generate_layout(&params);
        // The origin fallback is the one stitch allowed outside the shape;
        // a lone center fallback must still be inside it.
        if layout.points != [StitchPoint::new(0, 0)] {
            for s in layout.iter() {
                let inside = if oval { oval_contains(&layout, s.x, s.y) } else { circle_contains(&layout, s.x, s.y) };
                prop_assert!(inside, "({}, {}) outside {:?}", s.x, s.y, params.shape);
            }
        }
    }

    #[test]
    fn json_record_round_trips(params in any_params()) {
        let layout = generate_layout(&params);
        let bytes = json::serialize(&params, &layout, timestamp()).unwrap();
        let record = json::parse(&bytes).unwrap();

        prop_assert_eq!(&record.stitches, &layout.points);
        prop_assert_eq!(record.generated_on, timestamp());
        prop_assert_eq!(record.parameters.effective_stitch_count(), params.effective_stitch_count());
        prop_assert_eq!(&record.parameters.design_name, &params.design_name);
        prop_assert_eq!(record.parameters.shape, params.shape);
    }

    #[test]
    fn json_record_restores_parameters_and_layout(params in valid_params()) {
        let layout = generate_layout(&params);
        let bytes = json::serialize(&params, &layout, timestamp()).unwrap();
        let record = json::parse(&bytes).unwrap();

        prop_assert_eq!(record.generated_on, timestamp());
        let (restored, restored_layout) = record.into_parts();
        prop_assert_eq!(restored.width.to_bits(), params.width.to_bits());
        prop_assert_eq!(restored.height.to_bits(), params.height.to_bits());
        prop_assert_eq!(restored, params);
        prop_assert_eq!(restored_layout, layout);
    }

    #[test]
    fn svg_has_one_circle_per_stitch(params in any_params()) {
        let layout = generate_layout(&params);
        let bytes = svg::serialize(&layout, &params.color).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(text.matches("<circle").count(), layout.len());
    }

    #[test]
    fn hostile_color_never_reaches_svg(color in "[<>\"';&a-z/ ]{1,40}") {
        let params = ParameterSet { color: color.clone(), stitch_count: 4, ..Default::default() };
        let bundle = ExportBundle::build(&params, timestamp()).unwrap();
        if color.contains(['<', '>', '"', '\'', ';', '&', '/']) {
            prop_assert!(svg::serialize(&bundle.layout, &color).is_err());
            let black = svg::serialize(&bundle.layout, "black").unwrap();
            prop_assert_eq!(bundle.svg.bytes, black);
        }
    }
}
