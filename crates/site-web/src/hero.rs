//! Hero headline with the boot sequence: glitching text, a scanner sweep,
//! the background grid snapping into place and the clean headline wiping in.
//!
//! Phase changes come from one `setTimeout` per phase; the scramble runs on a
//! `setInterval` that is re-armed on every phase change and cancels itself
//! once the text resolves. Timer closures hold only a `Weak` to the state, so
//! dropping the `Hero` tears everything down.

use crate::constants::{HERO_LINE_TRANSITION_S, HERO_SCANNER_SWEEP_S};
use crate::dom;
use crate::events::{Interval, Timeout};
use crate::frame::RenderLoop;
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::boot::{
    self, GridLine, BootGate, BootPhase, BootSequence, TextScramble, GRID_VIEW_H, GRID_VIEW_W,
    TARGET_TEXT,
};
use site_core::svg::{fmt_num, SVG_NS};
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::{Rc, Weak};
use web_sys as web;

const ID_PREFIX: &str = "tw-hero";
const HEADLINE_STYLE: &str = "margin: 0; white-space: pre-line; font: inherit; line-height: 1.05;";

struct HeroView {
    root: web::HtmlElement,
    scrambled: web::HtmlElement,
    clean: web::HtmlElement,
    scanner: web::HtmlElement,
    lines: Vec<(GridLine, web::Element)>,
}

impl HeroView {
    fn build(document: &web::Document, lines: Vec<GridLine>) -> anyhow::Result<Self> {
        let root = dom::create_html(document, "div", "position: relative; isolation: isolate;")?;
        _ = root.set_attribute("aria-label", &TARGET_TEXT.replace('\n', " "));

        let grid = dom::create_html(
            document,
            "div",
            "position: absolute; inset: 0; z-index: -1; pointer-events: none;",
        )?;
        grid.set_inner_html(&grid_svg(&lines));
        dom::append(&root, &grid)?;

        let mut bound = Vec::with_capacity(lines.len());
        for line in lines {
            let selector = format!("#{}", line_id(&line));
            let el = grid
                .query_selector(&selector)
                .map_err(|e| anyhow!("query {selector}: {:?}", e))?
                .ok_or_else(|| anyhow!("missing grid line {selector}"))?;
            bound.push((line, el));
        }

        let scrambled = dom::create_html(document, "h1", HEADLINE_STYLE)?;
        _ = scrambled.set_attribute("aria-hidden", "true");
        let clean = dom::create_html(
            document,
            "h1",
            &format!("{HEADLINE_STYLE} position: absolute; inset: 0;"),
        )?;
        clean.set_text_content(Some(TARGET_TEXT));
        let scanner = dom::create_html(
            document,
            "div",
            &format!(
                "position: absolute; left: 0; right: 0; top: 0; height: 2px; background: linear-gradient(to right, transparent, #00F5D4, transparent); opacity: 0; transition: top {HERO_SCANNER_SWEEP_S}s linear, opacity 0.2s;"
            ),
        )?;
        dom::append(&root, &scrambled)?;
        dom::append(&root, &clean)?;
        dom::append(&root, &scanner)?;

        Ok(Self {
            root,
            scrambled,
            clean,
            scanner,
            lines: bound,
        })
    }

    fn set_headline(&self, text: &str) {
        self.scrambled.set_text_content(Some(text));
    }

    /// Reveal the clean headline from the left; `progress` in `[0, 1]`.
    fn set_wipe(&self, progress: f32) {
        let hidden = (1.0 - progress.clamp(0.0, 1.0)) * 100.0;
        dom::set_style(&self.clean, "clip-path", &format!("inset(0 {hidden:.2}% 0 0)"));
    }

    fn apply_phase(&self, phase: BootPhase) {
        _ = self.root.set_attribute("data-boot-phase", phase.name());

        let scanning = phase.scanner_active();
        dom::set_style(&self.scanner, "opacity", if scanning { "1" } else { "0" });
        dom::set_style(&self.scanner, "top", if scanning { "100%" } else { "0" });
        dom::set_style(
            &self.scrambled,
            "visibility",
            if phase == BootPhase::Complete { "hidden" } else { "visible" },
        );

        let assembling = phase.is_assembling();
        for (line, el) in &self.lines {
            let (pos, opacity) = line.position(phase);
            dom::set_attr(el, "x1", &fmt_num(pos.x1));
            dom::set_attr(el, "y1", &fmt_num(pos.y1));
            dom::set_attr(el, "x2", &fmt_num(pos.x2));
            dom::set_attr(el, "y2", &fmt_num(pos.y2));
            dom::set_attr(el, "opacity", &fmt_num(opacity));
            let (rotate, delay) = if assembling {
                (0.0, line.assembly_delay)
            } else {
                (line.rotate_deg, 0.0)
            };
            dom::set_attr(
                el,
                "style",
                &format!(
                    "transform: rotate({}deg); transform-box: fill-box; transform-origin: center; transition: all {HERO_LINE_TRANSITION_S}s cubic-bezier(0.16, 1, 0.3, 1) {}s;",
                    fmt_num(rotate),
                    fmt_num(delay),
                ),
            );
        }
    }
}

fn line_id(line: &GridLine) -> String {
    format!("{ID_PREFIX}-{}", line.id)
}

fn grid_svg(lines: &[GridLine]) -> String {
    let mut out = String::with_capacity(128 + lines.len() * 96);
    _ = write!(
        out,
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid slice" width="100%" height="100%">"#,
        fmt_num(GRID_VIEW_W),
        fmt_num(GRID_VIEW_H),
    );
    for line in lines {
        _ = write!(
            out,
            r##"<line id="{}" stroke="#444444" stroke-width="1" vector-effect="non-scaling-stroke"/>"##,
            line_id(line)
        );
    }
    out.push_str("</svg>");
    out
}

struct HeroState {
    seq: BootSequence,
    scramble: TextScramble,
    rng: StdRng,
    view: HeroView,
    interval: Option<Interval>,
    wipe: Option<RenderLoop>,
}

pub struct Hero {
    state: Rc<RefCell<HeroState>>,
    _timeouts: Vec<Timeout>,
}

impl Hero {
    /// Build the hero inside `#element_id`. With the gate closed (flag off or
    /// reduced motion) the completed headline shows at once and no timers run.
    pub fn mount(element_id: &str, gate: BootGate) -> anyhow::Result<Self> {
        let document = dom::document()?;
        let host = dom::element_by_id(&document, element_id)?;
        let view = HeroView::build(&document, boot::generate_grid_lines())?;

        let seq = BootSequence::new(gate);
        let mut scramble = TextScramble::new(TARGET_TEXT);
        scramble.set_phase(seq.phase());
        view.apply_phase(seq.phase());
        view.set_headline(scramble.display());
        view.set_wipe(if seq.is_complete() { 1.0 } else { 0.0 });
        dom::append(&host, &view.root)?;

        let pending = seq.pending_timers();
        let first = seq.phase();
        let state = Rc::new(RefCell::new(HeroState {
            seq,
            scramble,
            rng: StdRng::from_entropy(),
            view,
            interval: None,
            wipe: None,
        }));
        let weak = Rc::downgrade(&state);

        if let Ok(mut s) = state.try_borrow_mut() {
            arm_interval(&weak, &mut s, first);
        }
        let mut timeouts = Vec::with_capacity(pending.len());
        for (at_ms, phase) in pending {
            let weak = weak.clone();
            timeouts.push(Timeout::new(at_ms as i32, move || enter_phase(&weak, phase))?);
        }

        log::info!(
            "[hero] mounted in #{element_id}, starting at {} ({} timers)",
            first.name(),
            timeouts.len()
        );
        Ok(Self {
            state,
            _timeouts: timeouts,
        })
    }

    pub fn phase(&self) -> Option<BootPhase> {
        self.state.try_borrow().ok().map(|s| s.seq.phase())
    }
}

impl Drop for Hero {
    fn drop(&mut self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.interval = None;
            s.wipe = None;
            s.view.root.remove();
        }
    }
}

fn arm_interval(weak: &Weak<RefCell<HeroState>>, s: &mut HeroState, phase: BootPhase) {
    s.interval = None;
    if s.scramble.is_complete() {
        return;
    }
    let Some(ms) = boot::interval(phase) else {
        return;
    };
    let weak = weak.clone();
    match Interval::new(ms as i32, move || scramble_tick(&weak)) {
        Ok(interval) => s.interval = Some(interval),
        Err(e) => log::warn!("[hero] scramble interval not started: {:?}", e),
    }
}

fn scramble_tick(weak: &Weak<RefCell<HeroState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let Ok(mut guard) = state.try_borrow_mut() else {
        return;
    };
    let s = &mut *guard;
    let running = s.scramble.tick(&mut s.rng);
    s.view.set_headline(s.scramble.display());
    if !running {
        if let Some(interval) = &s.interval {
            interval.cancel();
        }
    }
}

fn enter_phase(weak: &Weak<RefCell<HeroState>>, phase: BootPhase) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let Ok(mut guard) = state.try_borrow_mut() else {
        return;
    };
    let s = &mut *guard;
    if !s.seq.on_timer(phase) {
        return;
    }
    s.scramble.set_phase(phase);
    s.view.apply_phase(phase);
    s.view.set_headline(s.scramble.display());
    arm_interval(weak, s, phase);
    match phase {
        BootPhase::Assembly => s.wipe = Some(start_wipe(weak.clone())),
        BootPhase::Complete => {
            s.wipe = None;
            s.view.set_wipe(1.0);
        }
        BootPhase::Glitch | BootPhase::Scanner => {}
    }
    log::debug!("[hero] phase {}", phase.name());
}

fn start_wipe(weak: Weak<RefCell<HeroState>>) -> RenderLoop {
    let mut elapsed_ms = 0.0;
    RenderLoop::start(move |dt| {
        elapsed_ms += dt * 1000.0;
        let progress = boot::wipe_progress(elapsed_ms);
        if let Some(state) = weak.upgrade() {
            if let Ok(s) = state.try_borrow() {
                s.view.set_wipe(progress);
            }
        }
        progress < 1.0
    })
}
