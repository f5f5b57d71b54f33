use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

use super::constants::*;
use super::device::DeviceProfile;

/// One panel of the cube, in the order the face images are numbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

// Chosen so every image reads upright as the cube turns.
const TEXTURE_ROTATIONS: [f32; FACE_COUNT] = [PI, 0.0, -FRAC_PI_2, FRAC_PI_2, 0.0, PI];

impl CubeFace {
    pub const ALL: [CubeFace; FACE_COUNT] = [
        CubeFace::Right,
        CubeFace::Left,
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Front,
        CubeFace::Back,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[allow(dead_code)]
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Right => "right",
            CubeFace::Left => "left",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
            CubeFace::Front => "front",
            CubeFace::Back => "back",
        }
    }

    /// Outward unit normal in cube space.
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::Right => Vec3::X,
            CubeFace::Left => Vec3::NEG_X,
            CubeFace::Top => Vec3::Y,
            CubeFace::Bottom => Vec3::NEG_Y,
            CubeFace::Front => Vec3::Z,
            CubeFace::Back => Vec3::NEG_Z,
        }
    }

    /// XYZ Euler angles turning a +Z facing plane onto this face.
    pub fn euler(self) -> Vec3 {
        match self {
            CubeFace::Right => Vec3::new(0.0, FRAC_PI_2, 0.0),
            CubeFace::Left => Vec3::new(0.0, -FRAC_PI_2, 0.0),
            CubeFace::Top => Vec3::new(-FRAC_PI_2, 0.0, 0.0),
            CubeFace::Bottom => Vec3::new(FRAC_PI_2, 0.0, 0.0),
            CubeFace::Front => Vec3::ZERO,
            CubeFace::Back => Vec3::new(0.0, PI, 0.0),
        }
    }

    #[inline]
    pub fn texture_rotation(self) -> f32 {
        TEXTURE_ROTATIONS[self.index()]
    }
}

/// Texture rotation (radians) for a face index, `None` past the sixth face.
#[allow(dead_code)]
#[inline]
pub fn texture_rotation(face_index: usize) -> Option<f32> {
    TEXTURE_ROTATIONS.get(face_index).copied()
}

/// Placement of one panel inside the cube group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLayout {
    pub face: CubeFace,
    pub position: Vec3,
    pub rotation: Quat,
    pub size: f32,
}

impl FaceLayout {
    /// Maps the unit quad (±0.5 on XY, facing +Z) into cube space.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.size, self.size, 1.0),
            self.rotation,
            self.position,
        )
    }
}

pub fn layout_faces(profile: &DeviceProfile) -> [FaceLayout; FACE_COUNT] {
    let offset = profile.face_offset();
    CubeFace::ALL.map(|face| {
        let e = face.euler();
        FaceLayout {
            face,
            position: face.normal() * offset,
            rotation: Quat::from_euler(EulerRot::XYZ, e.x, e.y, e.z),
            size: profile.face_size,
        }
    })
}

/// Per-face shader parameters. Only `opacity` changes after build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceShading {
    pub opacity: f32,
    /// Corner radius as a fraction of the panel edge.
    pub radius: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub contrast: f32,
    pub max_opacity: f32,
    pub texture_rotation: f32,
}

impl FaceShading {
    pub fn new(face: CubeFace, size: f32) -> Self {
        Self {
            opacity: 0.0,
            radius: FACE_CORNER_RADIUS_PX / size,
            saturation: FACE_SATURATION,
            brightness: FACE_BRIGHTNESS,
            contrast: FACE_CONTRAST,
            max_opacity: FACE_MAX_OPACITY,
            texture_rotation: face.texture_rotation(),
        }
    }
}

/// Fixed spin axis: (1, 0, 1) yawed by `AXIS_YAW_DEG`, normalized.
///
/// Computed once per controller; resizes reuse the same value so the spin
/// never jumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationAxis(Vec3);

impl RotationAxis {
    pub fn tilted() -> Self {
        let (sin, cos) = AXIS_YAW_DEG.to_radians().sin_cos();
        let x = cos * AXIS_BASE.x - sin * AXIS_BASE.z;
        let z = sin * AXIS_BASE.x + cos * AXIS_BASE.z;
        Self(Vec3::new(x, 0.0, z).normalize())
    }

    #[inline]
    pub fn direction(self) -> Vec3 {
        self.0
    }

    /// Rotate `orientation` by `angle` about the axis in its local frame.
    #[inline]
    pub fn spin(self, orientation: Quat, angle: f32) -> Quat {
        (orientation * Quat::from_axis_angle(self.0, angle)).normalize()
    }

    pub fn gizmo(self) -> AxisGizmo {
        AxisGizmo {
            rotation: Quat::from_rotation_arc(Vec3::Y, self.0),
            ends: [self.0 * AXIS_GIZMO_EXTENT, self.0 * -AXIS_GIZMO_EXTENT],
        }
    }
}

/// Debug markers for the spin axis: a rod aligned from +Y and two end caps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGizmo {
    pub rotation: Quat,
    pub ends: [Vec3; 2],
}
