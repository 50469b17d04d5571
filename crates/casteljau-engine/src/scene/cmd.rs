use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::polyline::PolylineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polyline(PolylineCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}
