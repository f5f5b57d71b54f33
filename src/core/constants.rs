use glam::Vec3;

// Motion, timing and geometry tuning for the hero cube.

// Viewport classification
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // widths below this are treated as mobile
pub const MAX_CANVAS_HEIGHT_PX: f32 = 1200.0;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 5000.0;
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const DESKTOP_CAMERA_EYE: Vec3 = Vec3::new(-1768.0, 450.0, 1768.0); // 45° so +Z and +X faces overlap
pub const MOBILE_CAMERA_EYE: Vec3 = Vec3::new(0.0, 300.0, 2500.0);

// Frame pacing
pub const TARGET_FPS: f64 = 24.0;
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / TARGET_FPS;

// Entrance motion
pub const DESKTOP_PROGRESS_STEP: f32 = 0.042;
pub const MOBILE_PROGRESS_STEP: f32 = 0.032;
pub const FADE_IN_PORTION: f32 = 0.2; // faces reach full opacity at 20% progress
pub const SETTLE_TO_INTRO_DELAY_MS: f64 = 150.0;

// Continuous spin: one revolution per 360 accepted frames (15s at 24fps)
pub const SPIN_FRAMES_PER_REVOLUTION: f32 = 360.0;
pub const SPIN_STEP_RAD: f32 = -std::f32::consts::TAU / SPIN_FRAMES_PER_REVOLUTION;

// Cube geometry
pub const FACE_COUNT: usize = 6;
pub const DESKTOP_FACE_SIZE: f32 = 1300.0;
pub const DESKTOP_FACE_GAP: f32 = 20.0;
pub const DESKTOP_END_SIZE: f32 = 900.0;
pub const MOBILE_FACE_SIZE: f32 = 800.0;
pub const MOBILE_FACE_GAP: f32 = 15.0;
pub const MOBILE_END_SIZE: f32 = 550.0;

// Quadratic Bézier control points for the cube's travel
pub const DESKTOP_PATH: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 600.0),
    Vec3::new(-900.0, -600.0, 0.0),
    Vec3::new(300.0, 0.0, -1000.0),
];
pub const MOBILE_PATH: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 500.0),
    Vec3::new(-400.0, -200.0, 0.0),
    Vec3::new(0.0, 320.0, -300.0),
];

// Spin axis: horizontal diagonal, yawed about the vertical axis
pub const AXIS_BASE: Vec3 = Vec3::new(1.0, 0.0, 1.0);
pub const AXIS_YAW_DEG: f32 = 10.0;
pub const AXIS_GIZMO_EXTENT: f32 = 800.0;

// Face shading (identical for all six faces)
pub const FACE_CORNER_RADIUS_PX: f32 = 30.0;
pub const FACE_SATURATION: f32 = 0.8;
pub const FACE_BRIGHTNESS: f32 = 0.15; // lifts the black level
pub const FACE_CONTRAST: f32 = 0.85;
pub const FACE_MAX_OPACITY: f32 = 0.9;

// Intro text reveal
pub const INTRO_TICK_MS: f64 = 16.0;
pub const HEADLINE_STEP: f32 = 0.03; // per tick, ~33 ticks
pub const BAND_STEP: f32 = 0.045; // per tick, ~22 ticks
pub const HEADLINE_GAP_MS: f64 = 100.0;
pub const HEADLINES_TO_READ_MS: f64 = 300.0;
pub const BAND_PHASE_GAP_MS: f64 = 50.0;
pub const SPAN_GAP_MS: f64 = 100.0;
pub const BUTTON_DELAY_MS: f64 = 600.0; // after the header starts
pub const SCROLL_DELAY_MS: f64 = 1200.0; // after the header starts
