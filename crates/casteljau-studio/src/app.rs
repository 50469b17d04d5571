//! The studio application: input mapping, scene building, render passes.

use casteljau_core::{Point, palette, render_generation, trace};
use casteljau_engine::core::{App, AppControl, FrameCtx};
use casteljau_engine::coords::Vec2;
use casteljau_engine::input::{Key, MouseButton};
use casteljau_engine::render::{CircleRenderer, PolylineRenderer, TextRenderer};
use casteljau_engine::scene::DrawList;
use casteljau_engine::text::{FontId, FontSystem};

use crate::editor::Editor;
use crate::surface::{ScenePainter, to_color, to_vec2};

const CURVE_LINE_WIDTH: f32 = 1.5;
const CONTROL_MARKER_RADIUS: f32 = 3.0;
const POINTER_RADIUS: f32 = 5.0;
const HUD_TEXT_SIZE: f32 = 24.0;
const HUD_ORIGIN: Vec2 = Vec2::new(20.0, 20.0);

/// Z layers, back to front. Inter-shape ordering additionally follows the
/// render pass order in `on_frame` (polylines, then circles, then text).
mod layers {
    use casteljau_engine::scene::ZIndex;

    pub const FINISHED: ZIndex = ZIndex::new(0);
    pub const TRACE: ZIndex = ZIndex::new(10);
    pub const TRAIL: ZIndex = ZIndex::new(20);
    pub const CONTROL: ZIndex = ZIndex::new(30);
    pub const POINTER: ZIndex = ZIndex::new(40);
    pub const HUD: ZIndex = ZIndex::new(50);
}

pub struct Studio {
    editor: Editor,
    draw_list: DrawList,

    fonts: FontSystem,
    hud_font: Option<FontId>,

    polylines: PolylineRenderer,
    circles: CircleRenderer,
    text: TextRenderer,
}

impl Studio {
    pub fn new(hud_font_bytes: Option<Vec<u8>>) -> Self {
        let mut fonts = FontSystem::new();
        let hud_font = match hud_font_bytes {
            Some(bytes) => match fonts.load_font(&bytes) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("failed to parse HUD font: {e}; speed overlay disabled");
                    None
                }
            },
            None => {
                log::warn!("no system font found; speed overlay disabled");
                None
            }
        };

        Self {
            editor: Editor::new(),
            draw_list: DrawList::new(),
            fonts,
            hud_font,
            polylines: PolylineRenderer::new(),
            circles: CircleRenderer::new(),
            text: TextRenderer::new(),
        }
    }

    fn apply_key(&mut self, key: Key, pointer: Option<Point>) {
        match key {
            Key::Enter => self.editor.begin_trace(),
            Key::R => self.editor.reset(),
            Key::D => {
                if let Some(p) = pointer {
                    self.editor.pick_nearest(p);
                }
            }
            Key::U => self.editor.undo_finished(),
            Key::P => self.editor.toggle_pause(),
            Key::BracketRight => self.editor.speed_up(),
            Key::BracketLeft => self.editor.slow_down(),
            _ => {}
        }
    }

    fn build_scene(&mut self, pointer: Option<Point>) {
        // Finished curves: their control polygons in the base curve color.
        for curve in self.editor.finished_curves() {
            if curve.len() < 2 {
                continue;
            }
            self.draw_list.push_polyline(
                layers::FINISHED,
                curve.iter().copied().map(to_vec2).collect(),
                CURVE_LINE_WIDTH,
                to_color(palette::curve()),
            );
        }

        // Live trace of the polygon being edited.
        if self.editor.is_tracing() && self.editor.control_points().len() > 1 {
            let mut painter =
                ScenePainter::new(&mut self.draw_list, layers::TRACE, CURVE_LINE_WIDTH);
            render_generation(
                self.editor.control_points(),
                self.editor.animation().progress(),
                palette::curve(),
                &mut painter,
            );
            let dots = painter.into_trail();
            self.editor.extend_trail(dots);
        }

        // Persisted trail of traced curve points.
        for &dot in self.editor.trail() {
            self.draw_list.push_solid_circle(
                layers::TRAIL,
                to_vec2(dot),
                trace::TRAIL_DOT_RADIUS,
                to_color(palette::trail_dot()),
            );
        }

        // Control point markers.
        for &p in self.editor.control_points() {
            self.draw_list.push_solid_circle(
                layers::CONTROL,
                to_vec2(p),
                CONTROL_MARKER_RADIUS,
                to_color(palette::control_point()),
            );
        }

        // Pointer indicator.
        if let Some(p) = pointer {
            self.draw_list.push_solid_circle(
                layers::POINTER,
                to_vec2(p),
                POINTER_RADIUS,
                to_color(palette::pointer()),
            );
        }

        // Speed overlay.
        if let Some(font) = self.hud_font {
            let label = format!("Speed: {:.2}x", self.editor.animation().speed_multiplier());
            self.draw_list.push_text(
                layers::HUD,
                label,
                font,
                HUD_TEXT_SIZE,
                to_color(palette::curve()),
                HUD_ORIGIN,
            );
        }
    }
}

impl App for Studio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let pointer = ctx.input.pointer_pos.map(|(x, y)| Point::new(x, y));

        let keys: Vec<Key> = ctx.input_frame.keys_pressed.iter().copied().collect();
        for key in keys {
            self.apply_key(key, pointer);
        }

        if ctx.input_frame.buttons_pressed.contains(&MouseButton::Left) {
            if let Some(p) = pointer {
                self.editor.handle_click(p);
            }
        }

        self.editor.tick(ctx.time.dt * 1000.0);

        self.draw_list.clear();
        self.build_scene(pointer);

        let Studio { draw_list, fonts, polylines, circles, text, .. } = self;

        ctx.render(to_color(palette::background()), |rctx, target| {
            polylines.render(rctx, target, draw_list);
            circles.render(rctx, target, draw_list);
            text.render(rctx, target, draw_list, fonts);
        })
    }
}
