//! # sentiglobe-scene
//!
//! Frame-loop state for the sentiment globe: the camera, per-frame marker
//! projection into screen space, the focus controller with its camera tween
//! and selection halo, and the uniform block handed to the renderer.
//!
//! Everything here is driven by an external render callback; nothing reads
//! a clock or touches the display itself.

pub mod camera;
pub mod context;
pub mod focus;
pub mod projector;
pub mod tween;
pub mod uniforms;

pub use camera::*;
pub use context::*;
pub use focus::*;
pub use projector::*;
pub use tween::*;
pub use uniforms::*;
