//! Pointer-driven camera parallax.
//!
//! The rig keeps only the current eye position. Each frame it eases toward a
//! target derived from the pointer and re-aims at a fixed point.

use crate::constants::{
    CAMERA_BASE, CAMERA_FOVY_DEG, CAMERA_LOOK_AT, CAMERA_POINTER_SCALE_X, CAMERA_POINTER_SCALE_Y,
    CAMERA_SMOOTHING, CAMERA_ZFAR, CAMERA_ZNEAR,
};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRigConfig {
    pub base: Vec3,
    pub look_at: Vec3,
    pub pointer_scale: Vec2,
    /// Fraction of the remaining distance covered per frame, in `(0, 1)`.
    pub smoothing: f32,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            base: CAMERA_BASE,
            look_at: CAMERA_LOOK_AT,
            pointer_scale: Vec2::new(CAMERA_POINTER_SCALE_X, CAMERA_POINTER_SCALE_Y),
            smoothing: CAMERA_SMOOTHING,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    config: CameraRigConfig,
    position: Vec3,
}

impl CameraRig {
    pub fn new(config: CameraRigConfig) -> Self {
        Self {
            position: config.base,
            config,
        }
    }

    /// Where the eye is heading for a pointer in NDC (`y` up, both in `[-1, 1]`).
    pub fn target(&self, pointer: Vec2) -> Vec3 {
        let p = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
        self.config.base
            + Vec3::new(
                p.x * self.config.pointer_scale.x,
                p.y * self.config.pointer_scale.y,
                0.0,
            )
    }

    pub fn step(&mut self, pointer: Vec2) {
        let target = self.target(pointer);
        let k = self.config.smoothing;
        self.position.x += (target.x - self.position.x) * k;
        self.position.y += (target.y - self.position.y) * k;
        self.position.z = self.config.base.z;
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn look_at(&self) -> Vec3 {
        self.config.look_at
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.config.look_at, Vec3::Y)
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.position,
            target: self.config.look_at,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
