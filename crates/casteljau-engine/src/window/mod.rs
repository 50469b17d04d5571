//! Window runtime.
//!
//! Owns the winit event loop and a single window, translates platform events
//! into engine input events, and drives the application's per-frame
//! callback.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
