//! Fixed studio palette.
//!
//! Colors are kept as hex literals and decoded through [`Rgb::from_hex`];
//! they are not user-configurable at runtime.

use crate::color::Rgb;

pub const BACKGROUND_HEX: &str = "1A1A2E";
pub const CONTROL_POINT_HEX: &str = "FF6B6B";
pub const CURVE_HEX: &str = "4ECCA3";
pub const POINTER_HEX: &str = "FFFFFF";
pub const TRAIL_DOT_HEX: &str = "FF6B6B";

/// Canvas clear color.
pub fn background() -> Rgb {
    Rgb::from_hex(BACKGROUND_HEX)
}

/// Marker color for user-placed control points.
pub fn control_point() -> Rgb {
    Rgb::from_hex(CONTROL_POINT_HEX)
}

/// Base color of the animated trace; recursion depths rotate away from it.
pub fn curve() -> Rgb {
    Rgb::from_hex(CURVE_HEX)
}

/// Cursor indicator color.
pub fn pointer() -> Rgb {
    Rgb::from_hex(POINTER_HEX)
}

/// Color of the dots left behind by the traced curve point.
pub fn trail_dot() -> Rgb {
    Rgb::from_hex(TRAIL_DOT_HEX)
}
