// Browser-side tuning. Scene geometry and shading live in site-core.

// Canvas backing store never exceeds this many device pixels per CSS pixel
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Background layer sits behind all page content
pub const BACKGROUND_Z_INDEX: i32 = -1;
pub const BACKGROUND_ROOT_ID: &str = "tw-background";

// Offscreen formats for the 3D scene
pub const HDR_DOWNSCALE: u32 = 2; // bloom targets are 1/HDR_DOWNSCALE of the canvas

// Glyph rain and telemetry text
pub const CANVAS_FONT_FAMILY: &str = "ui-monospace, SFMono-Regular, Menlo, monospace";

// Illustrations start hidden and draw in after this delay
pub const ILLUSTRATION_REVEAL_DELAY_MS: i32 = 50;
pub const ILLUSTRATION_ID_PREFIX: &str = "tw-ill";

// Hero grid/headline transitions
pub const HERO_LINE_TRANSITION_S: f32 = 0.8;
pub const HERO_SCANNER_SWEEP_S: f32 = 1.2;
