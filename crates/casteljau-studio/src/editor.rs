//! Editor state machine.
//!
//! Owns everything the core trace routine treats as collaborator state: the
//! control polygon being edited, the list of finished curves, the persisted
//! trail dots, the animation driver, and the currently picked point.
//!
//! The app layer maps input to the semantic operations here; the editor
//! itself knows nothing about keys or buttons.

use casteljau_core::{Animation, Point};

#[derive(Debug, Default)]
pub struct Editor {
    control_points: Vec<Point>,
    finished_curves: Vec<Vec<Point>>,
    trail: Vec<Point>,
    animation: Animation,
    tracing: bool,
    active_point: Option<usize>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left click: appends a control point while idle, repositions the
    /// picked point while tracing (no-op if nothing was picked).
    pub fn handle_click(&mut self, pos: Point) {
        if !self.tracing {
            self.control_points.push(pos);
        } else if let Some(i) = self.active_point {
            self.control_points[i] = pos;
        }
    }

    /// Starts (or restarts) tracing the current polygon.
    ///
    /// The polygon is snapshotted into the finished-curves list immediately,
    /// so it survives later point edits; progress restarts from zero.
    pub fn begin_trace(&mut self) {
        self.tracing = true;
        self.finished_curves.push(self.control_points.clone());
        self.animation.start();
    }

    /// Picks the control point nearest to `pointer` for click-repositioning.
    ///
    /// Keeps the previous pick when the polygon is empty.
    pub fn pick_nearest(&mut self, pointer: Point) {
        let mut best_dist = f32::MAX;
        for (i, p) in self.control_points.iter().enumerate() {
            let dist = p.distance(pointer);
            if dist < best_dist {
                best_dist = dist;
                self.active_point = Some(i);
            }
        }
    }

    /// Removes the most recently finished curve. No-op when empty.
    pub fn undo_finished(&mut self) {
        self.finished_curves.pop();
    }

    /// Returns everything to a blank canvas, including animation speed.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn toggle_pause(&mut self) {
        self.animation.toggle_paused();
    }

    pub fn speed_up(&mut self) {
        self.animation.speed_up();
    }

    pub fn slow_down(&mut self) {
        self.animation.slow_down();
    }

    /// Advances the animation. Polygons with fewer than two points have
    /// nothing to trace, so time does not accumulate for them.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.tracing && self.control_points.len() > 1 {
            self.animation.tick(dt_ms);
        }
    }

    /// Appends dots emitted by the trace this frame.
    pub fn extend_trail(&mut self, dots: impl IntoIterator<Item = Point>) {
        self.trail.extend(dots);
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn finished_curves(&self) -> &[Vec<Point>] {
        &self.finished_curves
    }

    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    pub fn active_point(&self) -> Option<usize> {
        self.active_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn clicks_append_while_idle() {
        let mut editor = Editor::new();
        editor.handle_click(p(10.0, 10.0));
        editor.handle_click(p(20.0, 20.0));
        assert_eq!(editor.control_points(), &[p(10.0, 10.0), p(20.0, 20.0)]);
    }

    #[test]
    fn begin_trace_snapshots_the_polygon() {
        let mut editor = Editor::new();
        editor.handle_click(p(0.0, 0.0));
        editor.handle_click(p(50.0, 0.0));
        editor.begin_trace();

        assert!(editor.is_tracing());
        assert_eq!(editor.finished_curves().len(), 1);
        assert_eq!(editor.animation().progress(), 0.0);
    }

    #[test]
    fn clicks_while_tracing_move_the_picked_point() {
        let mut editor = Editor::new();
        editor.handle_click(p(0.0, 0.0));
        editor.handle_click(p(100.0, 0.0));
        editor.begin_trace();

        // Without a pick, clicks do nothing.
        editor.handle_click(p(5.0, 5.0));
        assert_eq!(editor.control_points().len(), 2);

        editor.pick_nearest(p(90.0, 0.0));
        assert_eq!(editor.active_point(), Some(1));

        editor.handle_click(p(100.0, 50.0));
        assert_eq!(editor.control_points()[1], p(100.0, 50.0));
    }

    #[test]
    fn pick_nearest_selects_closest_point() {
        let mut editor = Editor::new();
        editor.handle_click(p(0.0, 0.0));
        editor.handle_click(p(100.0, 0.0));
        editor.handle_click(p(50.0, 100.0));

        editor.pick_nearest(p(48.0, 90.0));
        assert_eq!(editor.active_point(), Some(2));
    }

    #[test]
    fn undo_pops_latest_and_tolerates_empty() {
        let mut editor = Editor::new();
        editor.undo_finished();
        assert!(editor.finished_curves().is_empty());

        editor.handle_click(p(0.0, 0.0));
        editor.begin_trace();
        editor.begin_trace();
        assert_eq!(editor.finished_curves().len(), 2);

        editor.undo_finished();
        assert_eq!(editor.finished_curves().len(), 1);
    }

    #[test]
    fn tick_needs_a_traceable_polygon() {
        let mut editor = Editor::new();
        editor.handle_click(p(0.0, 0.0));
        editor.begin_trace();
        editor.tick(100.0);
        assert_eq!(editor.animation().progress(), 0.0);

        editor.reset();
        editor.handle_click(p(0.0, 0.0));
        editor.handle_click(p(10.0, 0.0));
        editor.begin_trace();
        editor.tick(100.0);
        assert!(editor.animation().progress() > 0.0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut editor = Editor::new();
        editor.handle_click(p(0.0, 0.0));
        editor.handle_click(p(10.0, 0.0));
        editor.begin_trace();
        editor.extend_trail([p(1.0, 1.0)]);
        editor.speed_up();

        editor.reset();
        assert!(editor.control_points().is_empty());
        assert!(editor.finished_curves().is_empty());
        assert!(editor.trail().is_empty());
        assert!(!editor.is_tracing());
        assert_eq!(editor.animation().speed_multiplier(), 1.0);
    }
}
