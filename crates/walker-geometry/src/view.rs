//! Turntable view for line rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Line shader uniform for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LineUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub viewport: [f32; 2],
    pub width: f32,
    pub opacity: f32,
}

/// Model rotating about its own axes in front of a fixed camera
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    /// Current rotation per axis, in degrees
    pub rotation: Vec3,
    /// Degrees per second per axis
    pub rotation_speed: Vec3,
    pub distance: f32,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl ViewTransform {
    pub fn new(width: u32, height: u32) -> Self {
        let mut view = Self {
            rotation: Vec3::ZERO,
            rotation_speed: Vec3::new(0.0, 10.0, 0.0),
            distance: 100.0,
            aspect: 1.0,
            fovy: 40.0_f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        };
        view.resize(width, height);
        view
    }

    /// Advances the rotation by `dt` seconds, wrapping every axis to
    /// `[0, 360)`.
    pub fn advance(&mut self, dt: f32) {
        let r = self.rotation + self.rotation_speed * dt;
        self.rotation = Vec3::new(
            r.x.rem_euclid(360.0),
            r.y.rem_euclid(360.0),
            r.z.rem_euclid(360.0),
        );
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy, self.aspect, self.znear, self.zfar)
    }

    pub fn to_uniform(&self, viewport: (u32, u32), width: f32, opacity: f32) -> LineUniform {
        LineUniform {
            model: self.model_matrix().to_cols_array_2d(),
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
            viewport: [viewport.0 as f32, viewport.1 as f32],
            width,
            opacity,
        }
    }

    /// Zero-sized viewports keep the previous aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
