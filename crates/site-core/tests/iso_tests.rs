// Host-side tests for the isometric illustration geometry and its SVG output.

use glam::Vec2;
use site_core::iso::{
    countdown_digits, diamond, exploded_offset, grova_wireframe, layer_stack, project_stack,
    seven_segment, seven_segment_mask, tradeos_wireframe, zero_wireframe, Glyph, StackLevel,
    StackSpec, VariantSet, EXPLODE_FACTOR, ZERO_TIMER_SECONDS,
};
use site_core::svg::{fmt_num, path_id, render, variant_updates, PathAttrs};
use site_core::{IsoProjection, PathData, Rgb, Variant};

#[test]
fn origin_maps_to_centre_exactly() {
    for (cx, cy) in [(0.0, 0.0), (400.0, 280.0), (150.0, 200.0), (-12.5, 7.25)] {
        let iso = IsoProjection::new(cx, cy);
        assert_eq!(iso.project(0.0, 0.0), Vec2::new(cx, cy));
    }
}

#[test]
fn projection_is_linear() {
    let iso = IsoProjection::new(400.0, 280.0);
    let o = iso.project(0.0, 0.0);
    let a = iso.project(10.0, 0.0) - o;
    let b = iso.project(0.0, 6.0) - o;
    let ab = iso.project(10.0, 6.0) - o;
    assert!((a + b - ab).length() < 1e-4);
    // x axis runs down-right, y axis down-left
    assert!(a.x > 0.0 && a.y > 0.0);
    assert!(b.x < 0.0 && b.y > 0.0);
}

#[test]
fn unproject_inverts_project() {
    let iso = IsoProjection::new(150.0, 200.0);
    for (x, y) in [(0.0, 0.0), (12.0, -7.0), (-60.0, 60.0), (3.5, 99.0)] {
        let (ux, uy) = iso.unproject(iso.project(x, y));
        assert!((ux - x).abs() < 1e-3 && (uy - y).abs() < 1e-3, "({x}, {y})");
    }
}

#[test]
fn top_face_path_string() {
    let iso = IsoProjection::new(0.0, 0.0);
    assert_eq!(
        iso.top_face(0.0, 0.0, 10.0, 10.0).as_str(),
        "M0.0 0.0 L8.7 5.0 L0.0 10.0 L-8.7 5.0 Z"
    );
}

#[test]
fn side_faces_extrude_downward() {
    let iso = IsoProjection::new(0.0, 0.0);
    assert_eq!(
        iso.right_face(0.0, 0.0, 10.0, 10.0, 4.0).as_str(),
        "M8.7 5.0 L8.7 9.0 L0.0 14.0 L0.0 10.0 Z"
    );
    assert_eq!(
        iso.left_face(0.0, 0.0, 10.0, 10.0, 4.0).as_str(),
        "M-8.7 5.0 L-8.7 9.0 L0.0 14.0 L0.0 10.0 Z"
    );
}

#[test]
fn path_builders() {
    assert_eq!(
        diamond(Vec2::new(10.0, 10.0), 2.0).as_str(),
        "M8.0 10.0 L10.0 8.0 L12.0 10.0 L10.0 12.0 Z"
    );
    assert!(IsoProjection::new(0.0, 0.0).polyline(&[]).as_str().is_empty());
    let joined = PathData::join([
        PathData::new().move_to(Vec2::ZERO),
        PathData::new().move_to(Vec2::ONE),
    ]);
    assert_eq!(joined.to_string(), "M0.0 0.0 M1.0 1.0");
}

#[test]
fn rgb_hex() {
    assert_eq!(Rgb::from_hex("#ff6a00"), Some(Rgb(0xFF, 0x6A, 0x00)));
    assert_eq!(Rgb::from_hex("00F5D4"), Some(Rgb(0x00, 0xF5, 0xD4)));
    assert_eq!(Rgb::from_hex("#12345"), None);
    assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    assert_eq!(Rgb::COPPER.hex(), "#D97736");
}

#[test]
fn variant_sets_resolve() {
    let accent = Rgb::COPPER;
    let header = VariantSet::header(accent);
    assert_eq!(header.resolve(Variant::Hidden).opacity, 0.0);
    assert_eq!(header.resolve(Variant::Rest).color, Rgb::GRAY);
    assert_eq!(header.resolve(Variant::Hover).color, accent);

    let reveal = VariantSet::reveal(accent);
    assert_eq!(reveal.resolve(Variant::Rest).draw_progress, 0.0);
    assert_eq!(reveal.resolve(Variant::Hover).draw_progress, 1.0);

    let chassis = VariantSet::chassis(accent);
    assert_eq!(chassis.resolve(Variant::Rest).opacity, 0.0);
    assert_eq!(chassis.resolve(Variant::Rest).draw_progress, 1.0);
}

#[test]
fn wireframe_layout() {
    let ill = tradeos_wireframe(Rgb::COPPER);
    let names: Vec<_> = ill.layers.iter().map(|l| l.name).collect();
    assert_eq!(names, ["chassis", "quotes", "header"]);
    assert_eq!(ill.grid.len(), 18);
    assert_eq!(ill.layers[1].paths.len(), 5);
    assert_eq!(ill.layers[0].translate_y(Variant::Hover), 15.0);
    assert_eq!(ill.layers[2].translate_y(Variant::Hover), -20.0);
    assert_eq!(ill.layers[2].translate_y(Variant::Rest), 0.0);
}

#[test]
fn grova_pill_sinks_while_modal_rises() {
    let ill = grova_wireframe(Rgb::COPPER);
    let names: Vec<_> = ill.layers.iter().map(|l| l.name).collect();
    assert_eq!(names, ["modal", "categories", "trigger"]);
    assert_eq!(ill.grid.len(), 18);
    assert_eq!(ill.view_box, [248.0, 203.0, 230.0, 188.0]);
    // three chassis faces, two header bars and a divider
    assert_eq!(ill.layers[0].paths.len(), 6);
    // five category outlines and their labels
    assert_eq!(ill.layers[1].paths.len(), 10);
    assert_eq!(ill.layers[0].translate_y(Variant::Hover), -18.0);
    assert_eq!(ill.layers[1].translate_y(Variant::Hover), -18.0);
    assert_eq!(ill.layers[2].translate_y(Variant::Hover), 18.0);

    // The trigger is the only part visible at rest.
    for (i, layer) in ill.layers.iter().enumerate() {
        for p in &layer.paths {
            let rest = p.variants.resolve(Variant::Rest);
            assert_eq!(rest.opacity > 0.0, i == 2, "{}", layer.name);
            assert_eq!(p.variants.resolve(Variant::Hover).color, Rgb::COPPER);
        }
    }
    // Category pills draw in one after another.
    let delays: Vec<f32> = ill.layers[1].paths[..5].iter().map(|p| p.delay).collect();
    assert!(delays.windows(2).all(|w| w[1] > w[0]), "{delays:?}");
}

#[test]
fn zero_device_gives_way_to_screen() {
    let ill = zero_wireframe(Rgb(0x00, 0xF5, 0xD4));
    let names: Vec<_> = ill.layers.iter().map(|l| l.name).collect();
    assert_eq!(names, ["base", "controls", "top"]);
    assert_eq!(ill.grid.len(), 18);
    // every layer lifts by the same amount so the screen resolves on one plane
    for layer in &ill.layers {
        assert_eq!(layer.translate_y(Variant::Hover), -20.0);
        assert_eq!(layer.translate_y(Variant::Rest), 0.0);
    }

    let (mut device, mut screen) = (0, 0);
    for layer in &ill.layers {
        for p in &layer.paths {
            let rest = p.variants.resolve(Variant::Rest);
            let hover = p.variants.resolve(Variant::Hover);
            if rest.opacity > 0.0 {
                // console outline: visible at rest, gone on hover
                assert_eq!(hover.opacity, 0.0);
                device += 1;
            } else {
                // game screen: hidden at rest, fully drawn on hover
                assert_eq!(rest.draw_progress, 0.0);
                assert_eq!(hover.draw_progress, 1.0);
                assert!(hover.opacity > 0.0);
                screen += 1;
            }
        }
    }
    // body, screen and two bezels; two depth faces and three speaker slots;
    // two d-pad bars, two buttons and the label bar
    assert_eq!(device, 14);
    assert!(screen > device, "{screen}");
}

#[test]
fn zero_timer_reads_nine_forty_one() {
    assert_eq!(countdown_digits(ZERO_TIMER_SECONDS), [9, 4, 1]);
    assert_eq!(countdown_digits(0), [0, 0, 0]);
    assert_eq!(countdown_digits(59), [0, 5, 9]);

    // 9 lights six segments, 4 four, 1 two; the colon adds two dots
    let ill = zero_wireframe(Rgb::COPPER);
    let timer_paths = ill.layers[1]
        .paths
        .iter()
        .filter(|p| (p.delay - 0.55).abs() < 1e-6)
        .count();
    assert_eq!(timer_paths, 6 + 4 + 2 + 2);
}

#[test]
fn seven_segment_digits() {
    let lit = |d: u8| seven_segment_mask(d).iter().filter(|&&on| on).count();
    assert_eq!(lit(8), 7);
    assert_eq!(lit(1), 2);
    assert_eq!(lit(0), 6);
    assert_eq!(lit(12), 0);
    // the middle bar separates 0 from 8
    assert!(!seven_segment_mask(0)[6] && seven_segment_mask(8)[6]);

    let iso = IsoProjection::new(0.0, 0.0);
    assert_eq!(seven_segment(&iso, 7, 0.0, 0.0).len(), 3);
    // segment a runs along the iso X axis from the digit origin
    assert_eq!(seven_segment(&iso, 7, 0.0, 0.0)[0], iso.line_x(0.0, 0.0, 6.0));
}

#[test]
fn stack_layers_explode_on_hover() {
    let spec = StackSpec {
        label: "test stack".into(),
        accent: Rgb::COPPER,
        levels: vec![
            StackLevel { size: 100.0, depth: 8.0, glyph: Glyph::Plain },
            StackLevel { size: 80.0, depth: 8.0, glyph: Glyph::Cells(2) },
            StackLevel { size: 60.0, depth: 8.0, glyph: Glyph::Beacon },
        ],
        spacing: 30.0,
    };
    let ill = layer_stack(&spec);
    assert_eq!(ill.layers.len(), 3);
    for (i, layer) in ill.layers.iter().enumerate() {
        let rest = -(i as f32) * 30.0;
        assert_eq!(layer.translate_y(Variant::Rest), rest);
        assert_eq!(layer.translate_y(Variant::Hover), rest * EXPLODE_FACTOR);
    }
    // three faces plus glyph paths
    assert_eq!(ill.layers[0].paths.len(), 3);
    assert_eq!(ill.layers[1].paths.len(), 5);
    assert_eq!(ill.layers[2].paths.len(), 5);
    assert_eq!(exploded_offset(-30.0, false), -30.0);
}

#[test]
fn unknown_slug_falls_back_to_tradeos_stack() {
    let a = project_stack("nope", Rgb::COPPER);
    let b = project_stack("tradeos", Rgb::COPPER);
    assert_eq!(a.label, b.label);
    assert_eq!(project_stack("grova", Rgb::COPPER).layers.len(), 4);
    assert_eq!(project_stack("zero", Rgb::COPPER).layers.len(), 3);
}

#[test]
fn number_formatting() {
    assert_eq!(fmt_num(0.0), "0");
    assert_eq!(fmt_num(-0.0), "0");
    assert_eq!(fmt_num(15.0), "15");
    assert_eq!(fmt_num(0.25), "0.25");
    assert_eq!(fmt_num(-48.0), "-48");
    assert_eq!(fmt_num(1.0 / 3.0), "0.333");
}

#[test]
fn render_carries_ids_and_state() {
    let ill = tradeos_wireframe(Rgb::COPPER);
    let svg = render(&ill, Variant::Rest, "w0");
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="185 155 350 270""#));
    assert!(svg.contains(r#"aria-label="TradeOS Market Wisdom wireframe illustration""#));
    assert!(svg.contains(r#"id="w0-l0""#));
    assert!(svg.contains(&format!(r#"id="{}""#, path_id("w0", 2, 0))));
    assert_eq!(svg.matches("<path ").count(), ill.path_count() + ill.grid.len());

    let hover = render(&ill, Variant::Hover, "w0");
    assert!(hover.contains(r#"translate(0 -20)"#));
    assert!(hover.contains("#D97736"));
}

#[test]
fn variant_updates_match_render() {
    let ill = tradeos_wireframe(Rgb::COPPER);
    let (layers, paths) = variant_updates(&ill, Variant::Hover, "w1");
    assert_eq!(layers.len(), 3);
    assert_eq!(paths.len(), ill.path_count());
    assert_eq!(layers[0], ("w1-l0".to_string(), "translate(0 15)".to_string()));
    let (id, attrs) = &paths[0];
    assert_eq!(id, "w1-l0-p0");
    assert_eq!(
        *attrs,
        PathAttrs {
            stroke: "#D97736".into(),
            opacity: "0.8".into(),
            dash_offset: "0".into(),
        }
    );
}
