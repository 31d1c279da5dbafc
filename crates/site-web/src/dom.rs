use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn document() -> anyhow::Result<web::Document> {
    window_document().ok_or_else(|| anyhow!("no document"))
}

pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
}

/// Viewport size in CSS pixels.
pub fn viewport_css() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (px(w.inner_width()), px(w.inner_height()))
}

/// Match the canvas backing store to its CSS box. Returns whether it changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> bool {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() == w_px && canvas.height() == h_px {
        return false;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    true
}

pub fn create_html(document: &web::Document, tag: &str, style: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{tag}>: {:?}", e))?;
    el.set_attribute("style", style)
        .map_err(|e| anyhow!("style <{tag}>: {:?}", e))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{tag}> is not an HtmlElement: {:?}", e))
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child: {:?}", e))
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_attr(el: &web::Element, name: &str, value: &str) {
    _ = el.set_attribute(name, value);
}
