use super::{CanvasBackdrop, Painter, Rgba, BACKGROUND};
use crate::iso::Rgb;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub const BRAND_COLORS: [Rgb; 3] = [
    Rgb(0xD9, 0x77, 0x36),
    Rgb(0x52, 0xB7, 0x74),
    Rgb(0x00, 0xF5, 0xD4),
];

const MAX_PARTICLES: usize = 120;
const AREA_PER_PARTICLE: f32 = 8000.0;
const MAX_DT: f32 = 0.05;
const WRAP_MARGIN: f32 = 10.0;
const PULSE_CHANCE: f64 = 0.3;
const PULSE_FADE_PER_S: f32 = 0.6;

/// Number of particles for a viewport.
pub fn particle_count(width: f32, height: f32) -> usize {
    (((width * height) / AREA_PER_PARTICLE).floor().max(0.0) as usize).min(MAX_PARTICLES)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    const ALL: [Heading; 4] = [Heading::Right, Heading::Down, Heading::Left, Heading::Up];

    pub fn vector(self) -> Vec2 {
        match self {
            Heading::Right => Vec2::X,
            Heading::Down => Vec2::Y,
            Heading::Left => Vec2::NEG_X,
            Heading::Up => Vec2::NEG_Y,
        }
    }

    pub fn clockwise(self) -> Heading {
        match self {
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
            Heading::Up => Heading::Right,
        }
    }

    pub fn counter_clockwise(self) -> Heading {
        self.clockwise().clockwise().clockwise()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub speed: f32,
    pub heading: Heading,
    pub size: f32,
    pub base_alpha: f32,
    pub turn_timer: f32,
    pub turn_interval: f32,
    pub pulse: Option<Rgb>,
    pub pulse_fade: f32,
}

fn turn_interval(rng: &mut StdRng) -> f32 {
    rng.gen_range(3.0..11.0)
}

impl Particle {
    fn spawn(width: f32, height: f32, rng: &mut StdRng) -> Self {
        Self {
            pos: Vec2::new(rng.gen_range(0.0..=width.max(0.0)), rng.gen_range(0.0..=height.max(0.0))),
            speed: rng.gen_range(12.0..32.0),
            heading: Heading::ALL.choose(rng).copied().unwrap_or(Heading::Right),
            size: rng.gen_range(1.0..2.0),
            base_alpha: rng.gen_range(0.15..0.4),
            turn_timer: 0.0,
            turn_interval: turn_interval(rng),
            pulse: None,
            pulse_fade: 0.0,
        }
    }
}

/// Circuit-trace particles: axis-aligned motion, right-angle turns, and an
/// occasional brand-coloured pulse on a turn.
#[derive(Debug)]
pub struct OrthogonalFlow {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl OrthogonalFlow {
    pub fn new(width: f32, height: f32, mut rng: StdRng) -> Self {
        let particles = (0..particle_count(width, height))
            .map(|_| Particle::spawn(width, height, &mut rng))
            .collect();
        Self {
            width,
            height,
            particles,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_DT);
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.heading.vector() * p.speed * dt;

            if p.pos.x < -WRAP_MARGIN {
                p.pos.x = w + WRAP_MARGIN;
            } else if p.pos.x > w + WRAP_MARGIN {
                p.pos.x = -WRAP_MARGIN;
            }
            if p.pos.y < -WRAP_MARGIN {
                p.pos.y = h + WRAP_MARGIN;
            } else if p.pos.y > h + WRAP_MARGIN {
                p.pos.y = -WRAP_MARGIN;
            }

            p.turn_timer += dt;
            if p.turn_timer >= p.turn_interval {
                p.turn_timer = 0.0;
                p.turn_interval = turn_interval(&mut self.rng);
                p.heading = if self.rng.gen_bool(0.5) {
                    p.heading.clockwise()
                } else {
                    p.heading.counter_clockwise()
                };
                if self.rng.gen_bool(PULSE_CHANCE) {
                    p.pulse = BRAND_COLORS.choose(&mut self.rng).copied();
                    p.pulse_fade = 1.0;
                }
            }

            if p.pulse_fade > 0.0 {
                p.pulse_fade = (p.pulse_fade - dt * PULSE_FADE_PER_S).max(0.0);
            }
        }
    }
}

impl CanvasBackdrop for OrthogonalFlow {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn frame(&mut self, dt: f32, painter: &mut dyn Painter) {
        self.step(dt);
        painter.fill_rect(0.0, 0.0, self.width, self.height, BACKGROUND);
        for p in &self.particles {
            if let (Some(c), true) = (p.pulse, p.pulse_fade > 0.0) {
                let glow = Rgba::new(c.0, c.1, c.2, p.pulse_fade * 0.3);
                painter.fill_circle(p.pos, p.size * 6.0, glow);
                painter.fill_circle(p.pos, p.size * 1.5, glow.with_alpha(p.pulse_fade * 0.7));
            }
            painter.fill_circle(p.pos, p.size, Rgba::gray(180, p.base_alpha));
        }
    }
}
