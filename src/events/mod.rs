pub mod window;

pub use window::{wire_page_lifecycle, wire_resize, WindowListener};
