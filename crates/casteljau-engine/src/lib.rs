//! Casteljau engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the studio: windowing,
//! input translation, frame timing, the renderer-agnostic draw stream, and
//! the wgpu shape renderers that consume it.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
