//! Mounting for the page background. Exactly one `MountedBackground` is alive
//! at a time; dropping it stops its frame loop, detaches its listeners and
//! removes its elements.

use crate::cancel::{CancelOnDrop, CancelToken};
use crate::constants::{BACKGROUND_ROOT_ID, BACKGROUND_Z_INDEX, CANVAS_FONT_FAMILY};
use crate::dom;
use crate::events::Listener;
use crate::frame::RenderLoop;
use crate::input;
use crate::render::GpuState;
use anyhow::anyhow;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::backdrops::{
    AmbientOrbs, CalibrationGrid, CanvasBackdrop, DataStream, OrthogonalFlow, Painter, Rgba,
    SubsonicSweep, Telemetry, AMBIENT_ORBS, PHOTO, SWEEP_BANDS,
};
use site_core::{FrameInput, SceneConfig, SceneMode, SceneState};
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct MountedBackground {
    mode: SceneMode,
    root: web::HtmlElement,
    frame_loop: Option<RenderLoop>,
    _listeners: Vec<Listener>,
    _pending: Option<CancelOnDrop>,
}

impl MountedBackground {
    pub fn mode(&self) -> SceneMode {
        self.mode
    }
}

impl Drop for MountedBackground {
    fn drop(&mut self) {
        self.frame_loop.take();
        self.root.remove();
        log::info!("[background] unmounted {}", self.mode);
    }
}

/// Mount `mode` under `<body>`. `Off` mounts nothing.
pub fn mount(mode: SceneMode) -> anyhow::Result<Option<MountedBackground>> {
    if mode == SceneMode::Off {
        return Ok(None);
    }
    let document = dom::document()?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let root = dom::create_html(
        &document,
        "div",
        &format!(
            "position: fixed; inset: 0; z-index: {BACKGROUND_Z_INDEX}; pointer-events: none; overflow: hidden; background: #0A0A0A;"
        ),
    )?;
    root.set_id(BACKGROUND_ROOT_ID);
    _ = root.set_attribute("aria-hidden", "true");
    root.set_attribute("data-scene", mode.as_str())
        .map_err(|e| anyhow!("{:?}", e))?;
    dom::append(&body, &root)?;

    let mut mounted = MountedBackground {
        mode,
        root,
        frame_loop: None,
        _listeners: Vec::new(),
        _pending: None,
    };
    match mode {
        SceneMode::Off => {}
        SceneMode::ThreeD => mount_three_d(&document, &mut mounted)?,
        SceneMode::Telemetry | SceneMode::DataStream | SceneMode::Calibration | SceneMode::Orthogonal => {
            mount_canvas(&document, &mut mounted)?
        }
        SceneMode::Ambient => mount_ambient(&document, &mut mounted)?,
        SceneMode::Sweep => mount_sweep(&document, &mut mounted)?,
        SceneMode::Photo => mount_photo(&document, &mounted)?,
    }
    log::info!("[background] mounted {mode}");
    Ok(Some(mounted))
}

fn full_canvas(document: &web::Document, parent: &web::HtmlElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = dom::create_html(
        document,
        "canvas",
        "position: absolute; inset: 0; width: 100%; height: 100%; display: block;",
    )?;
    dom::append(parent, &el)?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("not a canvas: {:?}", e))
}

// ---------------- 3D ----------------

fn mount_three_d(document: &web::Document, mounted: &mut MountedBackground) -> anyhow::Result<()> {
    let canvas = full_canvas(document, &mounted.root)?;
    dom::sync_canvas_backing_size(&canvas);

    let scene = Rc::new(RefCell::new(SceneState::build(&SceneConfig::default())));
    let gpu: Rc<RefCell<Option<GpuState>>> = Rc::new(RefCell::new(None));
    let pointer = Rc::new(Cell::new(Vec2::ZERO));
    let failed = Rc::new(Cell::new(false));

    {
        let pointer = pointer.clone();
        mounted._listeners.push(Listener::on_window("pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                let (w, h) = dom::viewport_css();
                let p = input::pointer_client(ev);
                pointer.set(input::pointer_ndc(p.x, p.y, w, h));
            }
        })?);
    }
    {
        let canvas = canvas.clone();
        mounted._listeners.push(Listener::on_window("resize", move |_| {
            dom::sync_canvas_backing_size(&canvas);
        })?);
    }

    {
        let gpu = gpu.clone();
        let scene = scene.clone();
        let canvas = canvas.clone();
        let failed = failed.clone();
        let cancel = CancelToken::new();
        mounted._pending = Some(cancel.guard());
        spawn_local(async move {
            if cancel.is_cancelled() {
                return;
            }
            let result = GpuState::new(canvas.clone(), &scene, &cancel).await;
            if cancel.is_cancelled() {
                log::debug!("[background] dropping GPU setup for an unmounted scene");
                return;
            }
            match result {
                Ok(state) => *gpu.borrow_mut() = Some(state),
                Err(e) => {
                    log::error!("[background] WebGPU unavailable, rendering nothing: {:?}", e);
                    canvas.remove();
                    failed.set(true);
                }
            }
        });
    }

    mounted.frame_loop = Some(RenderLoop::start(move |dt| {
        if failed.get() {
            return false;
        }
        let Ok(mut scene) = scene.try_borrow_mut() else {
            return true;
        };
        scene.advance(&FrameInput {
            dt,
            pointer: pointer.get(),
        });
        let mut slot = gpu.borrow_mut();
        if let Some(state) = slot.as_mut() {
            state.resize_if_needed(canvas.width(), canvas.height());
            match state.render(&mut scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => state.reconfigure(),
                Err(e) => log::warn!("[background] frame skipped: {:?}", e),
            }
        }
        true
    }));
    Ok(())
}

// ---------------- Canvas 2D ----------------

/// [`Painter`] over a 2D context, in CSS pixels.
struct Canvas2dPainter {
    ctx: web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl Canvas2dPainter {
    fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            width: 0.0,
            height: 0.0,
        })
    }

    /// Resize the backing store for the viewport and map CSS pixels onto it.
    fn fit(&mut self, canvas: &web::HtmlCanvasElement, width: f32, height: f32) {
        dom::sync_canvas_backing_size(canvas);
        let dpr = dom::device_pixel_ratio();
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.width = width;
        self.height = height;
    }
}

impl Painter for Canvas2dPainter {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill();
        }
    }

    fn fill_text(&mut self, text: &str, at: Vec2, px: f32, color: Rgba) {
        self.ctx.set_font(&format!("{px}px {CANVAS_FONT_FAMILY}"));
        self.ctx.set_fill_style_str(&color.css());
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[(f32, Rgba)], rect: [f32; 4]) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, radius.max(0.0) as f64)
        else {
            return;
        };
        for (offset, color) in stops {
            _ = gradient.add_color_stop(offset.clamp(0.0, 1.0), &color.css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        let [x, y, w, h] = rect;
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}

fn canvas_backdrop(mode: SceneMode, width: f32, height: f32) -> Option<Box<dyn CanvasBackdrop>> {
    let backdrop: Box<dyn CanvasBackdrop> = match mode {
        SceneMode::Telemetry => Box::new(Telemetry::new(width, height)),
        SceneMode::DataStream => Box::new(DataStream::new(width, height, StdRng::from_entropy())),
        SceneMode::Calibration => Box::new(CalibrationGrid::new(width, height)),
        SceneMode::Orthogonal => Box::new(OrthogonalFlow::new(width, height, StdRng::from_entropy())),
        _ => return None,
    };
    Some(backdrop)
}

fn mount_canvas(document: &web::Document, mounted: &mut MountedBackground) -> anyhow::Result<()> {
    let canvas = full_canvas(document, &mounted.root)?;
    let mut painter = Canvas2dPainter::new(&canvas)?;
    let (w, h) = dom::viewport_css();
    painter.fit(&canvas, w, h);
    let mut backdrop =
        canvas_backdrop(mounted.mode, w, h).ok_or_else(|| anyhow!("{} is not a canvas scene", mounted.mode))?;

    let pointer: Rc<Cell<Option<Vec2>>> = Rc::new(Cell::new(None));
    {
        let pointer = pointer.clone();
        mounted._listeners.push(Listener::on_window("pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                let (w, h) = dom::viewport_css();
                let p = input::pointer_client(ev);
                pointer.set(input::inside_viewport(p, w, h).then_some(p));
            }
        })?);
    }
    if let Some(page) = document.document_element() {
        let pointer = pointer.clone();
        mounted._listeners.push(Listener::new(&page, "pointerleave", move |_| pointer.set(None))?);
    }

    let resized = Rc::new(Cell::new(false));
    {
        let resized = resized.clone();
        mounted._listeners.push(Listener::on_window("resize", move |_| resized.set(true))?);
    }

    mounted.frame_loop = Some(RenderLoop::start(move |dt| {
        if resized.replace(false) {
            let (w, h) = dom::viewport_css();
            painter.fit(&canvas, w, h);
            backdrop.resize(w, h);
        }
        backdrop.set_pointer(pointer.get());
        backdrop.frame(dt, &mut painter);
        true
    }));
    Ok(())
}

// ---------------- DOM scenes ----------------

fn mount_ambient(document: &web::Document, mounted: &mut MountedBackground) -> anyhow::Result<()> {
    let mut orbs = Vec::with_capacity(AMBIENT_ORBS.len());
    for orb in &AMBIENT_ORBS {
        let el = dom::create_html(
            document,
            "div",
            &format!(
                "position: absolute; width: {s}px; height: {s}px; border-radius: 50%; background: {c}; filter: blur({b}px); opacity: {o}; transform: translate(-50%, -50%); will-change: left, top;",
                s = orb.size,
                c = orb.color.hex(),
                b = orb.blur_px,
                o = orb.opacity,
            ),
        )?;
        dom::append(&mounted.root, &el)?;
        orbs.push(el);
    }

    let mut sim = AmbientOrbs::new();
    mounted.frame_loop = Some(RenderLoop::start(move |dt| {
        sim.advance(dt);
        for (el, pos) in orbs.iter().zip(sim.positions()) {
            dom::set_style(el, "left", &format!("{:.3}%", pos.x));
            dom::set_style(el, "top", &format!("{:.3}%", pos.y));
        }
        true
    }));
    Ok(())
}

fn mount_sweep(document: &web::Document, mounted: &mut MountedBackground) -> anyhow::Result<()> {
    let mut bands = Vec::with_capacity(SWEEP_BANDS.len());
    for band in &SWEEP_BANDS {
        let el = dom::create_html(
            document,
            "div",
            &format!(
                "position: absolute; left: 0; right: 0; height: {}px; background: {}; top: {}%;",
                band.height_px, band.gradient, band.from,
            ),
        )?;
        dom::append(&mounted.root, &el)?;
        bands.push(el);
    }

    let mut sim = SubsonicSweep::new();
    mounted.frame_loop = Some(RenderLoop::start(move |dt| {
        sim.advance(dt);
        for (el, top) in bands.iter().zip(sim.tops()) {
            dom::set_style(el, "top", &format!("{top:.3}%"));
        }
        true
    }));
    Ok(())
}

fn mount_photo(document: &web::Document, mounted: &MountedBackground) -> anyhow::Result<()> {
    dom::set_style(&mounted.root, "background-image", &format!("url(\"{}\")", PHOTO.src));
    dom::set_style(&mounted.root, "background-size", "cover");
    dom::set_style(&mounted.root, "background-position", "center");
    let overlay = dom::create_html(
        document,
        "div",
        &format!("position: absolute; inset: 0; background: {};", PHOTO.overlay),
    )?;
    dom::append(&mounted.root, &overlay)
}
