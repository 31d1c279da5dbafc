use glam::Vec3;

// Shared scene tuning constants used by the web front-end and the tests.

// Camera rig
pub const CAMERA_BASE: Vec3 = Vec3::new(0.0, 3.0, 12.0); // resting eye position
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, -1.0, -5.0); // fixed aim point
pub const CAMERA_POINTER_SCALE_X: f32 = 1.2; // world units per unit of pointer x
pub const CAMERA_POINTER_SCALE_Y: f32 = 0.6; // world units per unit of pointer y
pub const CAMERA_SMOOTHING: f32 = 0.02; // per-frame lerp factor toward the target
pub const CAMERA_FOVY_DEG: f32 = 55.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 150.0;

// Terrain
pub const TERRAIN_COLOR: [f32; 3] = [0.267, 0.267, 0.267]; // #444444
pub const TERRAIN_OPACITY: f32 = 0.25;
pub const EDGE_FADE_MARGIN: f32 = 0.08; // fraction of the zone width faded to zero
pub const NOISE_SEED: u32 = 0; // seed of the shared Perlin gradient table

// Ocean
pub const OCEAN_SIZE: [f32; 2] = [40.0, 28.0];
pub const OCEAN_SEGMENTS: u32 = 64;
pub const OCEAN_BASE_OPACITY: f32 = 0.18;
pub const OCEAN_ALPHA_RAMP: f32 = 0.15; // extra alpha at the highest crest
pub const OCEAN_SPEC_ALPHA: f32 = 0.4; // extra alpha inside the highlight

// Elevation ramp stops (neutral grays)
pub const RAMP_LOW: f32 = 0.22;
pub const RAMP_MID: f32 = 0.30;
pub const RAMP_HIGH: f32 = 0.40;

// Sun and specular highlight
pub const SUN_POSITION: Vec3 = Vec3::new(-26.0, -2.0, -30.0);
pub const SUN_RADIUS: f32 = 1.8;
pub const SUN_COLOR: [f32; 3] = [0.85, 0.47, 0.21]; // copper, ~#D97736
pub const SPECULAR_SHININESS: f32 = 32.0;
pub const SPECULAR_INTENSITY: f32 = 1.6;

// Clear color and fog (#0A0A0A)
pub const CLEAR_COLOR: [f32; 3] = [0.039, 0.039, 0.039];
pub const FOG_DENSITY: f32 = 0.015;

// Bloom
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const BLOOM_STRENGTH: f32 = 2.5;
