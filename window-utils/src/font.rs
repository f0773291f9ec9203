use anyhow::anyhow;
use lazy_static::lazy_static;
pub use sdl2::ttf::Font;
use sdl2::ttf::Sdl2TtfContext;
use std::path::Path;

lazy_static! {
    static ref TTF_CONTEXT: Result<Sdl2TtfContext, String> = sdl2::ttf::init();
}

pub fn load_font(
    path: impl AsRef<Path>,
    pt_size: u16,
) -> anyhow::Result<Font<'static, 'static>> {
    let path = path.as_ref();
    let ttf_context = TTF_CONTEXT.as_ref().map_err(|e| anyhow!("{e}"))?;
    ttf_context
        .load_font(path, pt_size)
        .map_err(|e| anyhow!("failed to load font {}: {e}", path.display()))
}
