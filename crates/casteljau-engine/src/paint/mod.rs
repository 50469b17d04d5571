//! Color model shared between application code and renderers.

mod color;

pub use color::Color;
