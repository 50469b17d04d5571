//! Engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application: a per-frame callback plus the context it receives.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
