//! SVG serialization for [`Illustration`]s.
//!
//! Every animated path gets a stable element id `{prefix}-l{layer}-p{path}`
//! so the page can retarget styles in place and let CSS transitions run.

use crate::iso::{Illustration, IsoPath, StrokeStyle, Variant};
use std::fmt::Write;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Seconds for colour and opacity changes.
const STYLE_TRANSITION_S: f32 = 0.3;
/// Seconds for the draw-in of one path.
const DRAW_TRANSITION_S: f32 = 1.2;
/// Seconds for a layer to slide to its new offset.
const LAYER_TRANSITION_S: f32 = 0.8;

pub fn path_id(prefix: &str, layer: usize, path: usize) -> String {
    format!("{prefix}-l{layer}-p{path}")
}

pub fn layer_id(prefix: &str, layer: usize) -> String {
    format!("{prefix}-l{layer}")
}

/// Attribute values for one path in one variant.
#[derive(Clone, Debug, PartialEq)]
pub struct PathAttrs {
    pub stroke: String,
    pub opacity: String,
    pub dash_offset: String,
}

impl From<StrokeStyle> for PathAttrs {
    fn from(s: StrokeStyle) -> Self {
        Self {
            stroke: s.color.hex(),
            opacity: fmt_num(s.opacity),
            dash_offset: fmt_num(1.0 - s.draw_progress.clamp(0.0, 1.0)),
        }
    }
}

/// Compact number formatting: at most three decimals, trailing zeros dropped.
pub fn fmt_num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn write_path(out: &mut String, id: &str, path: &IsoPath, variant: Variant) {
    let a = PathAttrs::from(path.variants.resolve(variant));
    _ = write!(
        out,
        r#"<path id="{id}" d="{d}" stroke="{stroke}" stroke-width="{w}" stroke-linecap="round" stroke-linejoin="round" opacity="{op}" pathLength="1" stroke-dasharray="1" stroke-dashoffset="{off}" style="transition: stroke {st}s, opacity {st}s, stroke-dashoffset {dt}s ease-in-out {delay}s"/>"#,
        d = path.d,
        stroke = a.stroke,
        w = fmt_num(path.stroke_width),
        op = a.opacity,
        off = a.dash_offset,
        st = STYLE_TRANSITION_S,
        dt = DRAW_TRANSITION_S,
        delay = fmt_num(path.delay),
    );
}

/// Render `illustration` as a standalone `<svg>` element in `variant`.
pub fn render(illustration: &Illustration, variant: Variant, id_prefix: &str) -> String {
    let [x, y, w, h] = illustration.view_box;
    let mut out = String::with_capacity(256 + illustration.path_count() * 320);
    _ = write!(
        out,
        r#"<svg xmlns="{SVG_NS}" viewBox="{} {} {} {}" fill="none" role="img" aria-label="{}">"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(w),
        fmt_num(h),
        escape(&illustration.label),
    );
    if !illustration.grid.is_empty() {
        _ = write!(out, r##"<g stroke="#333333" stroke-width="0.3" opacity="0.4">"##);
        for d in &illustration.grid {
            _ = write!(out, r#"<path d="{d}"/>"#);
        }
        out.push_str("</g>");
    }
    for (li, layer) in illustration.layers.iter().enumerate() {
        _ = write!(
            out,
            r#"<g id="{}" data-layer="{}" transform="translate(0 {})" style="transition: transform {}s cubic-bezier(0.16, 1, 0.3, 1)">"#,
            layer_id(id_prefix, li),
            layer.name,
            fmt_num(layer.translate_y(variant)),
            LAYER_TRANSITION_S,
        );
        for (pi, path) in layer.paths.iter().enumerate() {
            write_path(&mut out, &path_id(id_prefix, li, pi), path, variant);
        }
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    out
}

/// Per-element updates that move an already rendered illustration to `variant`.
pub fn variant_updates(
    illustration: &Illustration,
    variant: Variant,
    id_prefix: &str,
) -> (Vec<(String, String)>, Vec<(String, PathAttrs)>) {
    let mut layers = Vec::with_capacity(illustration.layers.len());
    let mut paths = Vec::with_capacity(illustration.path_count());
    for (li, layer) in illustration.layers.iter().enumerate() {
        layers.push((
            layer_id(id_prefix, li),
            format!("translate(0 {})", fmt_num(layer.translate_y(variant))),
        ));
        for (pi, path) in layer.paths.iter().enumerate() {
            paths.push((
                path_id(id_prefix, li, pi),
                PathAttrs::from(path.variants.resolve(variant)),
            ));
        }
    }
    (layers, paths)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
