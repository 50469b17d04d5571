//! Casteljau core crate.
//!
//! Pure data + algorithm layer of the studio:
//! - recursive curve subdivision (repeated pairwise interpolation of a
//!   control polygon until a single traced point remains)
//! - RGB ↔ HSV conversion and the per-depth hue rotation
//! - the animation-timing state machine that drives trace progress
//!
//! Everything here is synchronous, allocation-light computation. Drawing
//! happens through the [`trace::TraceSurface`] capability trait, so the
//! surrounding application decides what a "polyline" or "filled circle"
//! actually is.

pub mod anim;
pub mod color;
pub mod geom;
pub mod palette;
pub mod trace;

pub use anim::Animation;
pub use color::{Hsv, Rgb};
pub use geom::Point;
pub use trace::{TraceSurface, render_generation};
