pub mod asset;
pub mod camera;
pub mod constants;
pub mod cube;
pub mod device;
pub mod entrance;
pub mod intro;
pub mod loading;
pub mod motion;

pub use asset::*;
pub use camera::*;
pub use cube::*;
pub use device::*;
pub use entrance::*;
pub use intro::*;
pub use loading::*;

// Shaders bundled as string constants
pub static CUBE_FACE_WGSL: &str = include_str!("../../shaders/cube_face.wgsl");
