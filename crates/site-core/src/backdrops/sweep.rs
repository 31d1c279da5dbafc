#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepBand {
    /// Top edge in viewport percent at the start and end of a pass.
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub repeat_delay: f32,
    /// Delay before the first pass.
    pub delay: f32,
    pub height_px: f32,
    pub gradient: &'static str,
}

pub const SWEEP_BANDS: [SweepBand; 2] = [
    SweepBand {
        from: -15.0,
        to: 115.0,
        duration: 18.0,
        repeat_delay: 5.0,
        delay: 0.0,
        height_px: 200.0,
        gradient: "linear-gradient(to bottom, transparent 0%, rgba(23, 23, 23, 0.35) 35%, rgba(30, 30, 30, 0.5) 50%, rgba(23, 23, 23, 0.35) 65%, transparent 100%)",
    },
    SweepBand {
        from: -10.0,
        to: 110.0,
        duration: 24.0,
        repeat_delay: 8.0,
        delay: 10.0,
        height_px: 300.0,
        gradient: "linear-gradient(to bottom, transparent 0%, rgba(20, 20, 20, 0.15) 40%, rgba(25, 25, 25, 0.2) 50%, rgba(20, 20, 20, 0.15) 60%, transparent 100%)",
    },
];

impl SweepBand {
    /// Top edge in percent at `t`. Linear during a pass, parked at `to`
    /// during the repeat delay, parked at `from` before the first pass.
    pub fn top(&self, t: f32) -> f32 {
        let local = t - self.delay;
        if local <= 0.0 || self.duration <= 0.0 {
            return self.from;
        }
        let cycle = self.duration + self.repeat_delay.max(0.0);
        let phase = local % cycle;
        if phase < self.duration {
            self.from + (self.to - self.from) * phase / self.duration
        } else {
            self.to
        }
    }
}

/// Slow horizontal gradient bands drifting down the page.
#[derive(Clone, Debug, Default)]
pub struct SubsonicSweep {
    time: f32,
}

impl SubsonicSweep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt.max(0.0);
    }

    pub fn tops(&self) -> [f32; 2] {
        SWEEP_BANDS.map(|b| b.top(self.time))
    }
}
