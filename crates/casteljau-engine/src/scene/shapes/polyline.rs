use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Polyline draw payload: consecutive points joined by stroked segments.
///
/// Fewer than two points is a valid (empty) polyline; the renderer emits no
/// geometry for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl PolylineCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, width: f32, color: Color) -> Self {
        Self { points, width, color }
    }
}

impl DrawList {
    /// Records a stroked polyline.
    #[inline]
    pub fn push_polyline(&mut self, z: ZIndex, points: Vec<Vec2>, width: f32, color: Color) {
        self.push(z, DrawCmd::Polyline(PolylineCmd::new(points, width, color)));
    }
}
