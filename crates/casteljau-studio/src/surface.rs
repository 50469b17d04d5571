//! Bridges the core trace routine onto the engine draw stream.

use casteljau_core::{Point, Rgb, TraceSurface};
use casteljau_engine::coords::Vec2;
use casteljau_engine::paint::Color;
use casteljau_engine::scene::{DrawList, ZIndex};

pub fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

pub fn to_color(c: Rgb) -> Color {
    Color::from_srgb(c.red, c.green, c.blue, 1.0)
}

/// `TraceSurface` implementation that records draw commands.
///
/// Polylines and guide markers go straight into the draw list at a fixed z
/// layer (insertion order keeps generations back-to-front). Trail dots are
/// only collected — the editor persists them across frames and the app draws
/// the whole trail each frame, so drawing them here would double them up.
pub struct ScenePainter<'a> {
    draw_list: &'a mut DrawList,
    z: ZIndex,
    line_width: f32,
    trail: Vec<Point>,
}

impl<'a> ScenePainter<'a> {
    pub fn new(draw_list: &'a mut DrawList, z: ZIndex, line_width: f32) -> Self {
        Self {
            draw_list,
            z,
            line_width,
            trail: Vec::new(),
        }
    }

    /// Trail dots emitted during the trace, in emission order.
    pub fn into_trail(self) -> Vec<Point> {
        self.trail
    }
}

impl TraceSurface for ScenePainter<'_> {
    fn polyline(&mut self, points: &[Point], color: Rgb) {
        if points.len() < 2 {
            return;
        }
        self.draw_list.push_polyline(
            self.z,
            points.iter().copied().map(to_vec2).collect(),
            self.line_width,
            to_color(color),
        );
    }

    fn circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.draw_list
            .push_solid_circle(self.z, to_vec2(center), radius, to_color(color));
    }

    fn trail_dot(&mut self, center: Point, _radius: f32, _color: Rgb) {
        self.trail.push(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casteljau_core::{palette, render_generation};
    use casteljau_engine::scene::DrawCmd;

    #[test]
    fn trace_fills_the_draw_list_and_collects_trail() {
        let mut list = DrawList::new();
        let mut painter = ScenePainter::new(&mut list, ZIndex::new(3), 1.5);

        let points = [Point::new(0.0, 0.0), Point::new(50.0, 50.0), Point::new(100.0, 0.0)];
        render_generation(&points, 0.5, palette::curve(), &mut painter);

        let trail = painter.into_trail();
        assert_eq!(trail.len(), 1);

        let polylines = list
            .items()
            .iter()
            .filter(|i| matches!(i.cmd, DrawCmd::Polyline(_)))
            .count();
        let circles = list
            .items()
            .iter()
            .filter(|i| matches!(i.cmd, DrawCmd::Circle(_)))
            .count();
        assert_eq!(polylines, 2);
        assert_eq!(circles, 3);
    }

    #[test]
    fn degenerate_polylines_are_dropped() {
        let mut list = DrawList::new();
        let mut painter = ScenePainter::new(&mut list, ZIndex::new(0), 1.0);

        render_generation(&[Point::new(5.0, 5.0)], 0.5, palette::curve(), &mut painter);
        assert!(list.items().is_empty());
    }
}
