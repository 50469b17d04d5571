use anyhow::Result;
use casteljau_engine::device::GpuInit;
use casteljau_engine::logging::{LoggingConfig, init_logging};
use casteljau_engine::window::{Runtime, RuntimeConfig};

mod app;
mod editor;
mod surface;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!(
        "controls: click = place point · Enter = trace · D = pick point · \
         P = pause · [ ] = speed · U = undo curve · R = reset"
    );

    let config = RuntimeConfig {
        title: "Casteljau Studio".to_string(),
        width: 1080.0,
        height: 720.0,
    };

    Runtime::run(config, GpuInit::default(), app::Studio::new(load_hud_font()))
}

/// Looks for a usable sans-serif font in common system locations.
///
/// The speed overlay is optional; returning `None` just disables it.
fn load_hud_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/Library/Fonts/Arial Unicode.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
