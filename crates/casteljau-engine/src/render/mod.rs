//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipeline, buffers) and processes
//! one `DrawCmd` variant; the application decides pass order by the order it
//! invokes them.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down)
//! - vertex shaders convert to NDC using a viewport uniform

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::circle::CircleRenderer;
pub use shapes::polyline::PolylineRenderer;
pub use shapes::text::TextRenderer;
