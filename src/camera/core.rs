use glam::{EulerRot, Mat4, Quat, Vec3};

/// Euler orientation in radians, applied in intrinsic XYZ order
/// (`R = Rx * Ry * Rz`).
///
/// `x` is pitch, `y` is yaw, `z` is roll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    /// Rotation around X (pitch).
    pub x: f32,
    /// Rotation around Y (yaw).
    pub y: f32,
    /// Rotation around Z (roll).
    pub z: f32,
}

impl Euler {
    /// Build from explicit angles.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Equivalent quaternion.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, self.z)
    }

    /// Rotate a vector by this orientation.
    #[must_use]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        self.to_quat() * v
    }
}

/// Perspective camera placed by a position and an Euler orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation.
    pub rotation: Euler,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl PerspectiveCamera {
    /// Camera at the origin looking down -Z.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Euler::default(),
            aspect,
            fovy,
            znear,
            zfar,
        }
    }

    /// Direction the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation.rotate(Vec3::NEG_Z)
    }

    /// Camera-to-world transform.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation.to_quat(), self.position)
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }
}
