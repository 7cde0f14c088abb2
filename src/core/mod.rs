pub mod animator;
pub mod arc;
pub mod clip;
pub mod config;
pub mod constants;
pub mod ease;
pub mod motion;
pub mod parallax;
pub mod target;
pub mod trail;
pub mod trigger;
pub mod visibility;

pub use animator::{Animator, DrawSurface, Rect, SpriteHost};
pub use config::{AnimatorConfig, ConfigError, DeviceProfile, Viewport};
pub use motion::MotionState;
pub use target::ScrollSample;
