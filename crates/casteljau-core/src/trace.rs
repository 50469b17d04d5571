//! Recursive subdivision of a control polygon.
//!
//! One call to [`render_generation`] renders one "generation": the current
//! polygon as a polyline, one marker per pairwise-interpolated point, and —
//! on the final 2-point generation — the trail dot that traces the curve
//! itself. It then recurses on the interpolated points with a hue-rotated
//! color until a single point remains.

use crate::color::Rgb;
use crate::geom::Point;
use crate::palette;

/// Radius of the per-generation interpolation markers.
pub const GUIDE_MARKER_RADIUS: f32 = 5.0;

/// Radius of the dots traced by the final curve point.
pub const TRAIL_DOT_RADIUS: f32 = 2.5;

/// Hue advance between consecutive generations, in degrees.
pub const HUE_STEP_DEGREES: f32 = 10.0;

/// Drawing capability consumed by the subdivision renderer.
///
/// Implementations decide what drawing means: the studio pushes engine draw
/// commands, tests record calls. Trail dots get their own method because the
/// caller is expected to persist them across frames, unlike the per-frame
/// polylines and guide markers.
pub trait TraceSurface {
    /// Draws `points` as a connected polyline in `color`.
    fn polyline(&mut self, points: &[Point], color: Rgb);

    /// Draws a filled circle.
    fn circle(&mut self, center: Point, radius: f32, color: Rgb);

    /// Emits one dot of the traced curve. Fired only by the final 2-point
    /// generation, once per call.
    fn trail_dot(&mut self, center: Point, radius: f32, color: Rgb);
}

/// Renders one generation at `progress` and recurses on the interpolated
/// points.
///
/// `progress` is clamped to at most 1.0; negative values pass through and
/// extrapolate beyond the segments. Fewer than two points draw only the
/// (degenerate) polyline. Each level shrinks the working polygon by one
/// point, so recursion depth is `points.len() − 1` and always terminates.
pub fn render_generation<S: TraceSurface>(
    points: &[Point],
    progress: f32,
    color: Rgb,
    surface: &mut S,
) {
    let progress = progress.min(1.0);

    surface.polyline(points, color);

    if points.len() < 2 {
        return;
    }

    let mut interpolated = Vec::with_capacity(points.len() - 1);
    for pair in points.windows(2) {
        let position = pair[0].lerp(pair[1], progress);

        if points.len() == 2 {
            surface.trail_dot(position, TRAIL_DOT_RADIUS, palette::trail_dot());
        }

        surface.circle(position, GUIDE_MARKER_RADIUS, color);
        interpolated.push(position);
    }

    // A single interpolated point is the traced curve point itself; there is
    // nothing left to subdivide.
    if interpolated.len() != 1 {
        render_generation(&interpolated, progress, next_generation_color(color), surface);
    }
}

/// Color handed to the next generation: saturation forced to 1.0, hue
/// advanced by [`HUE_STEP_DEGREES`] with wrap-around, then re-quantized
/// through 8-bit channels so every generation color stays byte-derived.
pub fn next_generation_color(color: Rgb) -> Rgb {
    let mut hsv = color.to_hsv();
    hsv.saturation = 1.0;
    hsv.hue += HUE_STEP_DEGREES;
    if hsv.hue >= 360.0 {
        hsv.hue -= 360.0;
    }

    let (red, green, blue) = hsv.to_rgb().to_bytes();
    Rgb::from_bytes(red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every surface call for inspection.
    #[derive(Debug, Default)]
    struct Recorder {
        polylines: Vec<(Vec<Point>, Rgb)>,
        circles: Vec<(Point, f32, Rgb)>,
        trail: Vec<(Point, f32, Rgb)>,
    }

    impl TraceSurface for Recorder {
        fn polyline(&mut self, points: &[Point], color: Rgb) {
            self.polylines.push((points.to_vec(), color));
        }
        fn circle(&mut self, center: Point, radius: f32, color: Rgb) {
            self.circles.push((center, radius, color));
        }
        fn trail_dot(&mut self, center: Point, radius: f32, color: Rgb) {
            self.trail.push((center, radius, color));
        }
    }

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn two_points_trace_the_midpoint_and_stop() {
        let mut rec = Recorder::default();
        render_generation(&[p(0.0, 0.0), p(100.0, 0.0)], 0.5, crate::palette::curve(), &mut rec);

        assert_eq!(rec.circles.len(), 1);
        assert_eq!(rec.circles[0].0, p(50.0, 0.0));
        assert_eq!(rec.trail.len(), 1);
        assert_eq!(rec.trail[0].0, p(50.0, 0.0));
        assert_eq!(rec.trail[0].1, TRAIL_DOT_RADIUS);

        // No recursion: one polyline, and the marker kept the base color.
        assert_eq!(rec.polylines.len(), 1);
        assert_eq!(rec.circles[0].2, crate::palette::curve());
    }

    #[test]
    fn three_points_recurse_exactly_once() {
        let base = crate::palette::curve();
        let mut rec = Recorder::default();
        render_generation(&[p(0.0, 0.0), p(50.0, 100.0), p(100.0, 0.0)], 0.25, base, &mut rec);

        // Depth 0 draws 2 markers, depth 1 draws the final one.
        assert_eq!(rec.polylines.len(), 2);
        assert_eq!(rec.circles.len(), 3);
        assert_eq!(rec.trail.len(), 1);

        // Exactly one hue rotation between the two generations.
        let depth0 = rec.circles[0].2;
        let depth1 = rec.circles[2].2;
        assert_eq!(depth0, base);

        let h0 = depth0.to_hsv();
        let h1 = depth1.to_hsv();
        let advance = (h1.hue - h0.hue + 360.0) % 360.0;
        assert!((advance - HUE_STEP_DEGREES).abs() < 1.5, "hue advance was {advance}");
        assert!(h1.saturation > 0.98, "saturation was {}", h1.saturation);
    }

    #[test]
    fn depth_equals_point_count_minus_one() {
        for n in 2..8 {
            let points: Vec<Point> = (0..n).map(|i| p(i as f32 * 10.0, (i % 2) as f32)).collect();
            let mut rec = Recorder::default();
            render_generation(&points, 0.5, crate::palette::curve(), &mut rec);

            // One polyline per generation, markers sum to n-1 + n-2 + … + 1.
            assert_eq!(rec.polylines.len(), n - 1);
            assert_eq!(rec.circles.len(), n * (n - 1) / 2);
            assert_eq!(rec.trail.len(), 1);
        }
    }

    #[test]
    fn degenerate_inputs_draw_nothing_beyond_the_polyline() {
        for points in [vec![], vec![p(5.0, 5.0)]] {
            let mut rec = Recorder::default();
            render_generation(&points, 0.5, crate::palette::curve(), &mut rec);
            assert_eq!(rec.polylines.len(), 1);
            assert!(rec.circles.is_empty());
            assert!(rec.trail.is_empty());
        }
    }

    #[test]
    fn progress_above_one_is_clamped() {
        let mut rec = Recorder::default();
        render_generation(&[p(0.0, 0.0), p(10.0, 0.0)], 3.0, crate::palette::curve(), &mut rec);
        assert_eq!(rec.circles[0].0, p(10.0, 0.0));
    }

    #[test]
    fn negative_progress_extrapolates() {
        // Documents current behavior: there is no lower clamp.
        let mut rec = Recorder::default();
        render_generation(&[p(0.0, 0.0), p(10.0, 0.0)], -1.0, crate::palette::curve(), &mut rec);
        assert_eq!(rec.circles[0].0, p(-10.0, 0.0));
    }

    #[test]
    fn rotation_wraps_past_360() {
        use crate::color::Hsv;

        // Start near the top of the hue circle; one step must wrap.
        let start = Hsv::new(355.0, 1.0, 1.0).to_rgb();
        let rotated = next_generation_color(start).to_hsv();
        assert!(rotated.hue < 10.0, "hue was {}", rotated.hue);
    }
}
