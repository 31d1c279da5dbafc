//! Coherent 2D noise: gradient (Perlin) noise and its fractal sum.
//!
//! The gradient source is a single fixed-seed `noise::Perlin`, built on first
//! use and shared afterwards, so two calls with the same coordinates always
//! return the same bits and sampling never allocates.

use crate::constants::NOISE_SEED;
use glam::Vec2;
use ::noise::{NoiseFn, Perlin};
use std::sync::OnceLock;

fn gradient() -> &'static Perlin {
    static PERLIN: OnceLock<Perlin> = OnceLock::new();
    PERLIN.get_or_init(|| Perlin::new(NOISE_SEED))
}

/// Two-dimensional gradient noise in `[-1, 1]`.
///
/// Continuous everywhere and exactly zero on the integer lattice.
pub fn perlin2(x: f32, y: f32) -> f32 {
    (gradient().get([x as f64, y as f64]) as f32).clamp(-1.0, 1.0)
}

/// Fractal Brownian motion: `octaves` layers of [`perlin2`].
///
/// Each octave multiplies frequency by `lacunarity` and amplitude by `gain`,
/// starting from 1. The sum is not renormalised; see [`fbm_amplitude`].
pub fn fbm(x: f32, y: f32, octaves: u32, lacunarity: f32, gain: f32) -> f32 {
    let mut sum = 0.0;
    let mut amp = 1.0;
    let mut freq = 1.0;
    for _ in 0..octaves {
        sum += amp * perlin2(x * freq, y * freq);
        freq *= lacunarity;
        amp *= gain;
    }
    sum
}

/// Upper bound on `|fbm(..)|` for the given octave count and gain.
pub fn fbm_amplitude(octaves: u32, gain: f32) -> f32 {
    let mut total = 0.0;
    let mut amp = 1.0;
    for _ in 0..octaves {
        total += amp;
        amp *= gain;
    }
    total
}

/// A reusable fbm layer. `offset` shifts the sample domain, which is how zone
/// variants get distinct but stable noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmParams {
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
    pub frequency: f32,
    pub offset: Vec2,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
            frequency: 0.1,
            offset: Vec2::ZERO,
        }
    }
}

impl FbmParams {
    #[inline]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        fbm(
            x * self.frequency + self.offset.x,
            y * self.frequency + self.offset.y,
            self.octaves,
            self.lacunarity,
            self.gain,
        )
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }
}
