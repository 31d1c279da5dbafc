use super::ease_in_out;
use crate::iso::Rgb;
use glam::Vec2;

/// Looping keyframes in viewport percent. The last frame repeats the first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbKeyframes {
    pub x: [f32; 5],
    pub y: [f32; 5],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub color: Rgb,
    pub path: OrbKeyframes,
    /// Seconds per loop.
    pub duration: f32,
    /// Diameter in px before blur.
    pub size: f32,
    pub blur_px: f32,
    pub opacity: f32,
}

pub const AMBIENT_ORBS: [Orb; 3] = [
    Orb {
        color: Rgb(0xD9, 0x77, 0x36),
        path: OrbKeyframes {
            x: [10.0, 25.0, 5.0, 20.0, 10.0],
            y: [15.0, 35.0, 55.0, 25.0, 15.0],
        },
        duration: 24.0,
        size: 500.0,
        blur_px: 150.0,
        opacity: 0.15,
    },
    Orb {
        color: Rgb(0x52, 0xB7, 0x74),
        path: OrbKeyframes {
            x: [60.0, 75.0, 55.0, 70.0, 60.0],
            y: [50.0, 30.0, 60.0, 40.0, 50.0],
        },
        duration: 28.0,
        size: 500.0,
        blur_px: 150.0,
        opacity: 0.15,
    },
    Orb {
        color: Rgb(0x00, 0xFF, 0xFF),
        path: OrbKeyframes {
            x: [35.0, 50.0, 40.0, 55.0, 35.0],
            y: [70.0, 50.0, 35.0, 65.0, 70.0],
        },
        duration: 32.0,
        size: 500.0,
        blur_px: 150.0,
        opacity: 0.15,
    },
];

impl Orb {
    /// Centre in viewport percent at `t` seconds. Keyframes are evenly spaced
    /// and each segment is eased on its own.
    pub fn position(&self, t: f32) -> Vec2 {
        let segments = (self.path.x.len() - 1) as f32;
        let cycle = if self.duration > 0.0 {
            (t.max(0.0) % self.duration) / self.duration
        } else {
            0.0
        };
        let s = cycle * segments;
        let i = (s.floor() as usize).min(self.path.x.len() - 2);
        let k = ease_in_out(s - i as f32);
        let lerp = |a: f32, b: f32| a + (b - a) * k;
        Vec2::new(
            lerp(self.path.x[i], self.path.x[i + 1]),
            lerp(self.path.y[i], self.path.y[i + 1]),
        )
    }
}

/// Three drifting blurred colour orbs.
#[derive(Clone, Debug, Default)]
pub struct AmbientOrbs {
    time: f32,
}

impl AmbientOrbs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt.max(0.0);
    }

    pub fn positions(&self) -> [Vec2; 3] {
        AMBIENT_ORBS.map(|o| o.position(self.time))
    }
}
