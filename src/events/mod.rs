mod window;

pub use window::{wire_resize, wire_scroll, wire_visibility_change};
