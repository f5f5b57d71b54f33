use glam::Vec3;

use super::constants::*;

/// Coarse device bucket derived from the viewport width.
///
/// Classified once at construction to pick the camera preset and cube size,
/// and again on resize only to choose the canvas height policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    #[inline]
    pub fn from_width(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[inline]
    pub fn profile(self) -> DeviceProfile {
        match self {
            DeviceClass::Mobile => MOBILE,
            DeviceClass::Desktop => DESKTOP,
        }
    }
}

/// Browser inner window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn class(&self) -> DeviceClass {
        DeviceClass::from_width(self.width)
    }
}

/// Every device-dependent tuning value, grouped so callers branch once.
///
/// - `camera_eye`: fixed camera position (always looking at the origin)
/// - `face_size` / `face_gap`: panel edge length and the gap between panels
/// - `end_size`: apparent panel size once the entrance has finished
/// - `progress_step`: entrance progress added per accepted frame
/// - `path`: quadratic Bézier control points for the cube's travel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    pub class: DeviceClass,
    pub camera_eye: Vec3,
    pub face_size: f32,
    pub face_gap: f32,
    pub end_size: f32,
    pub progress_step: f32,
    pub path: [Vec3; 3],
}

impl DeviceProfile {
    /// Distance from the cube center to each panel.
    #[inline]
    pub fn face_offset(&self) -> f32 {
        self.face_size * 0.5 + self.face_gap
    }
}

pub const DESKTOP: DeviceProfile = DeviceProfile {
    class: DeviceClass::Desktop,
    camera_eye: DESKTOP_CAMERA_EYE,
    face_size: DESKTOP_FACE_SIZE,
    face_gap: DESKTOP_FACE_GAP,
    end_size: DESKTOP_END_SIZE,
    progress_step: DESKTOP_PROGRESS_STEP,
    path: DESKTOP_PATH,
};

pub const MOBILE: DeviceProfile = DeviceProfile {
    class: DeviceClass::Mobile,
    camera_eye: MOBILE_CAMERA_EYE,
    face_size: MOBILE_FACE_SIZE,
    face_gap: MOBILE_FACE_GAP,
    end_size: MOBILE_END_SIZE,
    progress_step: MOBILE_PROGRESS_STEP,
    path: MOBILE_PATH,
};

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// Full width, height capped at `MAX_CANVAS_HEIGHT_PX`.
    pub fn initial(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height.min(MAX_CANVAS_HEIGHT_PX),
        }
    }

    /// Size after a viewport change.
    ///
    /// A page that started on desktop keeps the full `MAX_CANVAS_HEIGHT_PX`
    /// while it stays desktop-wide, so the tuned framing does not shift.
    /// Everything else tracks the window height.
    pub fn after_resize(viewport: Viewport, initial_class: DeviceClass) -> Self {
        let height = match (viewport.class(), initial_class) {
            (DeviceClass::Desktop, DeviceClass::Desktop) => MAX_CANVAS_HEIGHT_PX,
            _ => viewport.height.min(MAX_CANVAS_HEIGHT_PX),
        };
        Self {
            width: viewport.width,
            height,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self, device_pixel_ratio: f64) -> (u32, u32) {
        let w = (self.width as f64 * device_pixel_ratio).round().max(1.0) as u32;
        let h = (self.height as f64 * device_pixel_ratio).round().max(1.0) as u32;
        (w, h)
    }
}
