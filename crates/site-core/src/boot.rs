//! Hero boot sequence: a four-phase timeline plus the text scrambler that
//! runs inside it.
//!
//! Nothing here owns a timer. The page schedules the phase timeouts and the
//! scramble interval and feeds their firings back in; both machines ignore
//! events that arrive late or out of order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const TARGET_TEXT: &str = "Architecting\nDecision Systems.";

pub const SCANNER_AT_MS: u32 = 1500;
pub const ASSEMBLY_AT_MS: u32 = 2500;
pub const COMPLETE_AT_MS: u32 = 3500;

pub const GLITCH_INTERVAL_MS: u32 = 80;
pub const REVEAL_INTERVAL_MS: u32 = 50;

pub const WIPE_DURATION_MS: f32 = 800.0;

pub const GIBBERISH_POOL: [&str; 10] = [
    "0x88_ERR_SYS_FAULT",
    "AWAITING_INPUT...",
    "KERNEL_PANIC_0xDEAD",
    "SYS.BOOT_FAILED",
    "MEM_ALLOC_ERR_0xFF",
    "SIGNAL_LOST_>>",
    "RETICULATING...",
    "STACK_OVERFLOW_0x7F",
    "INIT_SEQUENCE_ERR",
    "DECRYPT_FAILED_>>",
];

pub const SCRAMBLE_GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_./\\|{}[]<>!@#$%^&*";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BootPhase {
    Glitch,
    Scanner,
    Assembly,
    Complete,
}

impl BootPhase {
    /// The only phase this one may advance to. `Complete` is terminal.
    pub fn next(self) -> Option<BootPhase> {
        match self {
            BootPhase::Glitch => Some(BootPhase::Scanner),
            BootPhase::Scanner => Some(BootPhase::Assembly),
            BootPhase::Assembly => Some(BootPhase::Complete),
            BootPhase::Complete => None,
        }
    }

    /// Delay from mount at which the timeline enters this phase.
    pub fn scheduled_at_ms(self) -> u32 {
        match self {
            BootPhase::Glitch => 0,
            BootPhase::Scanner => SCANNER_AT_MS,
            BootPhase::Assembly => ASSEMBLY_AT_MS,
            BootPhase::Complete => COMPLETE_AT_MS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BootPhase::Glitch => "glitch",
            BootPhase::Scanner => "scanner",
            BootPhase::Assembly => "assembly",
            BootPhase::Complete => "complete",
        }
    }

    #[inline]
    pub fn is_glitching(self) -> bool {
        self == BootPhase::Glitch
    }

    /// Grid lines spring home and the clean headline wipes in.
    #[inline]
    pub fn is_assembling(self) -> bool {
        self >= BootPhase::Assembly
    }

    #[inline]
    pub fn scanner_active(self) -> bool {
        matches!(self, BootPhase::Scanner | BootPhase::Assembly)
    }
}

/// Inputs deciding whether the animated timeline runs at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootGate {
    pub enabled: bool,
    pub reduced_motion: bool,
}

impl BootGate {
    #[inline]
    pub fn animate(&self) -> bool {
        self.enabled && !self.reduced_motion
    }
}

#[derive(Clone, Debug)]
pub struct BootSequence {
    phase: BootPhase,
}

impl BootSequence {
    pub fn new(gate: BootGate) -> Self {
        let phase = if gate.animate() {
            BootPhase::Glitch
        } else {
            BootPhase::Complete
        };
        Self { phase }
    }

    #[inline]
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Phase timers later than the current phase, as `(ms since mount, phase)`.
    pub fn pending_timers(&self) -> Vec<(u32, BootPhase)> {
        [BootPhase::Scanner, BootPhase::Assembly, BootPhase::Complete]
            .into_iter()
            .filter(|p| *p > self.phase)
            .map(|p| (p.scheduled_at_ms(), p))
            .collect()
    }

    /// A phase timer fired. Returns whether the phase changed.
    pub fn on_timer(&mut self, fired: BootPhase) -> bool {
        if self.phase.next() == Some(fired) {
            self.phase = fired;
            true
        } else {
            false
        }
    }

    pub fn force_complete(&mut self) {
        self.phase = BootPhase::Complete;
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == BootPhase::Complete
    }
}

/// Interval between scramble ticks in `phase`; `None` when nothing ticks.
pub fn interval(phase: BootPhase) -> Option<u32> {
    match phase {
        BootPhase::Glitch => Some(GLITCH_INTERVAL_MS),
        BootPhase::Scanner | BootPhase::Assembly => Some(REVEAL_INTERVAL_MS),
        BootPhase::Complete => None,
    }
}

#[inline]
fn passes_through(c: char) -> bool {
    c == ' ' || c == '\n'
}

fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    SCRAMBLE_GLYPHS
        .choose(rng)
        .map(|b| *b as char)
        .unwrap_or('_')
}

#[derive(Clone, Debug)]
pub struct TextScramble {
    target: Vec<char>,
    /// Number of scrambleable characters in `target`.
    total: usize,
    phase: BootPhase,
    resolved: usize,
    display: String,
    complete: bool,
}

impl TextScramble {
    pub fn new(target: &str) -> Self {
        let target: Vec<char> = target.chars().collect();
        let total = target.iter().filter(|c| !passes_through(**c)).count();
        Self {
            target,
            total,
            phase: BootPhase::Glitch,
            resolved: 0,
            display: GIBBERISH_POOL[0].to_string(),
            complete: false,
        }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Enter `phase`. Glitch restarts the reveal; scanner and assembly share
    /// one running reveal count.
    pub fn set_phase(&mut self, phase: BootPhase) {
        self.phase = phase;
        match phase {
            BootPhase::Glitch => {
                self.resolved = 0;
                self.complete = false;
                self.display = GIBBERISH_POOL[0].to_string();
            }
            BootPhase::Scanner | BootPhase::Assembly => {}
            BootPhase::Complete => self.finish(),
        }
    }

    fn finish(&mut self) {
        self.display = self.target();
        self.complete = true;
    }

    /// One interval firing. Returns `false` once the interval should stop.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        match self.phase {
            BootPhase::Glitch => {
                if let Some(s) = GIBBERISH_POOL.choose(rng) {
                    self.display = (*s).to_string();
                }
                true
            }
            BootPhase::Scanner | BootPhase::Assembly => {
                if self.complete {
                    return false;
                }
                self.resolved += 1;
                if self.resolved >= self.total {
                    self.finish();
                    return false;
                }
                let mut seen = 0;
                let mut out = String::with_capacity(self.target.len());
                for &c in &self.target {
                    if passes_through(c) {
                        out.push(c);
                        continue;
                    }
                    out.push(if seen < self.resolved { c } else { random_glyph(rng) });
                    seen += 1;
                }
                self.display = out;
                true
            }
            BootPhase::Complete => false,
        }
    }

    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    pub fn resolved(&self) -> usize {
        self.resolved
    }

    /// Ticks needed in the reveal phases to resolve the whole target.
    #[inline]
    pub fn reveal_ticks(&self) -> usize {
        self.total
    }
}

// ---------------- Background grid ----------------

pub const GRID_VIEW_W: f32 = 1200.0;
pub const GRID_VIEW_H: f32 = 600.0;
const GRID_SEED: u64 = 42;
const GRID_CENTER: (f32, f32) = (600.0, 300.0);
pub const GRID_MAX_DELAY_S: f32 = 0.3;
pub const GRID_ASSEMBLED_OPACITY: f32 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePos {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LinePos {
    fn midpoint(&self) -> (f32, f32) {
        ((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub id: String,
    pub assembled: LinePos,
    pub scattered: LinePos,
    pub rotate_deg: f32,
    pub scattered_opacity: f32,
    /// Seconds after assembly starts before this line moves.
    pub assembly_delay: f32,
}

impl GridLine {
    pub fn position(&self, phase: BootPhase) -> (LinePos, f32) {
        if phase.is_assembling() {
            (self.assembled, GRID_ASSEMBLED_OPACITY)
        } else {
            (self.scattered, self.scattered_opacity)
        }
    }
}

/// The hero's 1200×600 grid: 13 verticals then 7 horizontals, each with a
/// deterministic scattered start and a delay growing with distance from the
/// centre.
pub fn generate_grid_lines() -> Vec<GridLine> {
    let mut rng = StdRng::seed_from_u64(GRID_SEED);
    let mut lines = Vec::with_capacity(20);

    for i in 0..=12 {
        let x = i as f32 * 100.0;
        let assembled = LinePos {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: GRID_VIEW_H,
        };
        let scattered = LinePos {
            x1: x + rng.gen_range(-300.0..300.0),
            y1: rng.gen_range(-200.0..200.0),
            x2: x + rng.gen_range(-300.0..300.0),
            y2: GRID_VIEW_H + rng.gen_range(-200.0..200.0),
        };
        lines.push(GridLine {
            id: format!("v-{i}"),
            assembled,
            scattered,
            rotate_deg: rng.gen_range(-60.0..60.0),
            scattered_opacity: rng.gen_range(0.05..0.2),
            assembly_delay: 0.0,
        });
    }

    for i in 0..=6 {
        let y = i as f32 * 100.0;
        let assembled = LinePos {
            x1: 0.0,
            y1: y,
            x2: GRID_VIEW_W,
            y2: y,
        };
        let scattered = LinePos {
            x1: rng.gen_range(-200.0..200.0),
            y1: y + rng.gen_range(-300.0..300.0),
            x2: GRID_VIEW_W + rng.gen_range(-200.0..200.0),
            y2: y + rng.gen_range(-300.0..300.0),
        };
        lines.push(GridLine {
            id: format!("h-{i}"),
            assembled,
            scattered,
            rotate_deg: rng.gen_range(-60.0..60.0),
            scattered_opacity: rng.gen_range(0.05..0.2),
            assembly_delay: 0.0,
        });
    }

    let dist = |l: &GridLine| {
        let (mx, my) = l.assembled.midpoint();
        ((mx - GRID_CENTER.0).powi(2) + (my - GRID_CENTER.1).powi(2)).sqrt()
    };
    let dists: Vec<f32> = lines.iter().map(dist).collect();
    let max = dists.iter().copied().fold(0.0_f32, f32::max);
    if max > 0.0 {
        for (line, d) in lines.iter_mut().zip(dists) {
            line.assembly_delay = d / max * GRID_MAX_DELAY_S;
        }
    }
    lines
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Headline wipe progress `[0, 1]` after `elapsed_ms` of assembly.
pub fn wipe_progress(elapsed_ms: f32) -> f32 {
    ease_out_cubic((elapsed_ms / WIPE_DURATION_MS).clamp(0.0, 1.0))
}
