//! The Point Dume 3D background as plain data.
//!
//! `SceneState` owns everything that changes between frames: the clock, the
//! displaced ocean and the camera rig. Terrain and the sun are built once.
//! The renderer reads from it and uploads; nothing here touches a GPU.

use crate::camera::{Camera, CameraRig, CameraRigConfig};
use crate::constants::{
    BLOOM_STRENGTH, BLOOM_THRESHOLD, CLEAR_COLOR, FOG_DENSITY, OCEAN_BASE_OPACITY, OCEAN_SEGMENTS,
    OCEAN_SIZE, SPECULAR_INTENSITY, SPECULAR_SHININESS, SUN_COLOR, SUN_POSITION, SUN_RADIUS,
};
use crate::mesh::Mesh;
use crate::shading::{RampStops, SpecularParams};
use crate::terrain::{build_landscape, default_zones, TerrainMesh, TerrainZoneConfig};
use crate::waves::{WaveParams, WaveSurface};
use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Longest step the clock takes in one frame, seconds. Larger gaps (a
/// backgrounded tab) are swallowed instead of jumping the waves.
pub const MAX_FRAME_DT: f32 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OceanConfig {
    pub size: Vec2,
    pub segments: u32,
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    pub waves: WaveParams,
    pub ramp: RampStops,
    pub base_opacity: f32,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            size: Vec2::from_array(OCEAN_SIZE),
            segments: OCEAN_SEGMENTS,
            position: Vec3::new(-6.0, -2.6, -2.0),
            rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.22),
            waves: WaveParams::default(),
            ramp: RampStops::default(),
            base_opacity: OCEAN_BASE_OPACITY,
        }
    }
}

impl OceanConfig {
    pub fn model_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(q, self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunConfig {
    pub position: Vec3,
    pub radius: f32,
    pub segments: u32,
    pub color: [f32; 3],
    pub shininess: f32,
    pub intensity: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            position: SUN_POSITION,
            radius: SUN_RADIUS,
            segments: 32,
            color: SUN_COLOR,
            shininess: SPECULAR_SHININESS,
            intensity: SPECULAR_INTENSITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomConfig {
    pub threshold: f32,
    pub strength: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            threshold: BLOOM_THRESHOLD,
            strength: BLOOM_STRENGTH,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub zones: Vec<TerrainZoneConfig>,
    pub ocean: OceanConfig,
    pub sun: SunConfig,
    pub camera: CameraRigConfig,
    pub clear_color: [f32; 3],
    pub fog_density: f32,
    pub bloom: BloomConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            ocean: OceanConfig::default(),
            sun: SunConfig::default(),
            camera: CameraRigConfig::default(),
            clear_color: CLEAR_COLOR,
            fog_density: FOG_DENSITY,
            bloom: BloomConfig::default(),
        }
    }
}

/// Per-frame input gathered by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Pointer in NDC, `y` up.
    pub pointer: Vec2,
}

/// Uniform block for the line/solid pipelines (terrain and sun).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SolidUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// rgb + opacity
    pub color: [f32; 4],
    /// rgb + exp2 density
    pub fog: [f32; 4],
}

/// Uniform block for `ocean.wgsl`. Scalars ride in the `w` lanes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct OceanUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// xyz sun position, w shininess
    pub sun: [f32; 4],
    /// rgb accent, w intensity
    pub accent: [f32; 4],
    /// rgb low stop, w min elevation
    pub ramp_low: [f32; 4],
    /// rgb mid stop, w max elevation
    pub ramp_mid: [f32; 4],
    /// rgb high stop, w base opacity
    pub ramp_high: [f32; 4],
}

/// Uniform block for the bloom passes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PostUniforms {
    /// Texel step for the blur, already scaled by direction.
    pub texel: [f32; 2],
    pub threshold: f32,
    pub strength: f32,
}

pub struct SceneState {
    clock: f32,
    frame: u64,
    terrain: Vec<TerrainMesh>,
    ocean: WaveSurface,
    ocean_model: Mat4,
    ocean_ramp: RampStops,
    ocean_base_opacity: f32,
    sun: Mesh,
    sun_model: Mat4,
    sun_color: [f32; 3],
    specular: SpecularParams,
    rig: CameraRig,
    clear_color: [f32; 3],
    fog_density: f32,
    bloom: BloomConfig,
}

impl SceneState {
    /// Build every mesh. Terrain is never rebuilt after this.
    pub fn build(config: &SceneConfig) -> Self {
        let terrain = build_landscape(&config.zones);
        let o = &config.ocean;
        let grid = Mesh::plane(o.size.x, o.size.y, o.segments, o.segments);
        let mut ocean = WaveSurface::new(grid, o.waves);
        ocean.update(0.0);
        let sun = Mesh::sphere(config.sun.radius, config.sun.segments, config.sun.segments);

        let mut specular = SpecularParams::new(config.sun.position);
        specular.accent = Vec3::from_array(config.sun.color);
        specular.shininess = config.sun.shininess;
        specular.intensity = config.sun.intensity;

        log::debug!(
            "[scene] built {} terrain zones, ocean {} vertices",
            terrain.len(),
            ocean.mesh().vertex_count()
        );

        Self {
            clock: 0.0,
            frame: 0,
            terrain,
            ocean,
            ocean_model: o.model_matrix(),
            ocean_ramp: o.ramp,
            ocean_base_opacity: o.base_opacity,
            sun,
            sun_model: Mat4::from_translation(config.sun.position),
            sun_color: config.sun.color,
            specular,
            rig: CameraRig::new(config.camera),
            clear_color: config.clear_color,
            fog_density: config.fog_density,
            bloom: config.bloom,
        }
    }

    /// Advance one frame: clock, ocean displacement, camera.
    pub fn advance(&mut self, input: &FrameInput) {
        let dt = if input.dt.is_finite() {
            input.dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.clock += dt;
        self.frame += 1;
        self.ocean.update(self.clock);
        self.rig.step(input.pointer);
    }

    #[inline]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn terrain(&self) -> &[TerrainMesh] {
        &self.terrain
    }

    #[inline]
    pub fn ocean(&self) -> &WaveSurface {
        &self.ocean
    }

    #[inline]
    pub fn ocean_mut(&mut self) -> &mut WaveSurface {
        &mut self.ocean
    }

    #[inline]
    pub fn ocean_model(&self) -> Mat4 {
        self.ocean_model
    }

    #[inline]
    pub fn sun(&self) -> &Mesh {
        &self.sun
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    #[inline]
    pub fn clear_color(&self) -> [f32; 3] {
        self.clear_color
    }

    #[inline]
    pub fn bloom(&self) -> BloomConfig {
        self.bloom
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        self.rig.camera(aspect)
    }

    fn fog(&self) -> [f32; 4] {
        let c = self.clear_color;
        [c[0], c[1], c[2], self.fog_density]
    }

    fn solid(&self, aspect: f32, model: Mat4, color: [f32; 3], opacity: f32) -> SolidUniforms {
        SolidUniforms {
            view_proj: self.camera(aspect).view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: self.rig.position().extend(1.0).to_array(),
            color: [color[0], color[1], color[2], opacity],
            fog: self.fog(),
        }
    }

    /// One uniform block per terrain zone, in build order.
    pub fn terrain_uniforms(&self, aspect: f32) -> Vec<SolidUniforms> {
        self.terrain
            .iter()
            .map(|t| self.solid(aspect, t.model, t.color, t.opacity))
            .collect()
    }

    pub fn sun_uniforms(&self, aspect: f32) -> SolidUniforms {
        self.solid(aspect, self.sun_model, self.sun_color, 1.0)
    }

    /// The ramp spans the largest possible wave excursion, so the colouring
    /// does not pulse as the instantaneous range changes.
    pub fn ocean_uniforms(&self, aspect: f32) -> OceanUniforms {
        let amp = self.ocean.params().max_amplitude();
        let s = &self.specular;
        let r = &self.ocean_ramp;
        OceanUniforms {
            view_proj: self.camera(aspect).view_projection().to_cols_array_2d(),
            model: self.ocean_model.to_cols_array_2d(),
            camera_pos: self.rig.position().extend(1.0).to_array(),
            sun: s.sun_position.extend(s.shininess).to_array(),
            accent: s.accent.extend(s.intensity).to_array(),
            ramp_low: r.low.extend(-amp).to_array(),
            ramp_mid: r.mid.extend(amp).to_array(),
            ramp_high: r.high.extend(self.ocean_base_opacity).to_array(),
        }
    }
}

/// Value-style frame step.
pub fn step(mut state: SceneState, input: &FrameInput) -> SceneState {
    state.advance(input);
    state
}
