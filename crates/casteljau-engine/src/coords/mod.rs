//! Coordinate types shared across renderers and application code.
//!
//! Canonical CPU space:
//! - logical pixels (DPI-aware)
//! - origin top-left, +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
