/// DOM contract and presentation constants for the web frontend.
///
/// Selectors name the page elements the hero sequence touches; a missing
/// element only skips its own effect.
// Page hooks
pub const CONTAINER_ID: &str = "canvas-container";
pub const ANIMATING_CLASS: &str = "animating";
pub const BACKDROP_SELECTOR: &str = ".kv-bg";
pub const HEADLINE_SELECTORS: [&str; 2] = [".kv-copy1", ".kv-copy2"];
pub const READ_SPAN_SELECTOR: &str = ".kv-read p span";
pub const HEADER_SELECTOR: &str = ".site-header";
pub const BUTTON_SELECTOR: &str = ".fixed-btn-link";
pub const SCROLL_SELECTOR: &str = ".kv-scroll";

// Face images, indexed like the cube faces (right, left, top, bottom, front, back)
pub const FACE_IMAGE_URLS: [&str; 6] = [
    "/assets/img/top/kv/img1.png",
    "/assets/img/top/kv/img2.png",
    "/assets/img/top/kv/img3.png",
    "/assets/img/top/kv/img4.png",
    "/assets/img/top/kv/img5.png",
    "/assets/img/top/kv/img6.png",
];

// Loading badge
pub const LOADING_TEXT: &str = "Loading...";
pub const LOADING_STYLE: &str = "position:absolute;top:50%;left:50%;\
transform:translate(-50%,-50%);color:#274374;font-size:16px;font-weight:bold;z-index:1000;";

// Read-span reveal band
pub const BAND_GRADIENT: &str =
    "linear-gradient(60deg, rgb(3, 35, 48) 0%, rgb(35, 78, 110) 49%, rgb(35, 78, 110) 100%)";
pub const BAND_Z_INDEX: &str = "100";

// Final reveal transitions
pub const SLIDE_TRANSITION: &str = "transform 0.6s ease-out";
pub const FADE_TRANSITION: &str = "opacity 0.6s ease-out";

// Renderer
pub const MSAA_SAMPLES: u32 = 4;
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0]; // transparent canvas
