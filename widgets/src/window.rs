use anyhow::anyhow;
use lissajous_window_utils::font::{Font, load_font};
use sdl2::{
    EventPump,
    event::Event,
    keyboard::Scancode,
    pixels::Color,
    rect::Rect,
    render::{Canvas, TextureCreator},
    video::{Window as SdlWindow, WindowContext},
};
use std::{
    path::Path,
    thread,
    time::{Duration, Instant},
};

const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / 60);

const LINE_SPACING_PX: i32 = 2;

pub struct Window {
    pub canvas: Canvas<SdlWindow>,
    pub event_pump: EventPump,
    pub font: Option<Font<'static, 'static>>,
    pub texture_creator: TextureCreator<WindowContext>,
    pub prev_tick_complete: Instant,
}

impl Window {
    /// Opens a window. Text is only rendered inside the window if `font_path` is given and the
    /// font loads. Otherwise text only appears in the window's title bar.
    pub fn new(
        title: &str,
        width_px: u32,
        height_px: u32,
        font_path: Option<&Path>,
        font_size: u16,
    ) -> anyhow::Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(title, width_px, height_px)
            .position_centered()
            .build()?;
        let mut canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let font = font_path.and_then(|path| match load_font(path, font_size) {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        });
        Ok(Self {
            canvas,
            event_pump,
            font,
            texture_creator,
            prev_tick_complete: Instant::now(),
        })
    }

    pub fn wait_until_next_frame(&self) {
        if let Some(period_to_sleep) = (self.prev_tick_complete
            + FRAME_DURATION)
            .checked_duration_since(Instant::now())
        {
            thread::sleep(period_to_sleep);
        }
    }

    pub fn set_title(&mut self, title: &str) -> anyhow::Result<()> {
        self.canvas.window_mut().set_title(title)?;
        Ok(())
    }

    /// Renders text with its top-left corner at (`x`, `y`), one line below another. Does
    /// nothing when there is no font.
    pub fn render_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
    ) -> anyhow::Result<()> {
        let Some(font) = self.font.as_ref() else {
            return Ok(());
        };
        let mut y_offset = 0;
        for line in text.lines().filter(|line| !line.is_empty()) {
            let text_surface = font
                .render(line)
                .blended(color)
                .map_err(|e| anyhow!("{e}"))?;
            let text_texture =
                text_surface.as_texture(&self.texture_creator)?;
            let text_texture_query = text_texture.query();
            let text_rect = Rect::new(
                x,
                y + y_offset,
                text_texture_query.width,
                text_texture_query.height,
            );
            self.canvas
                .copy(&text_texture, None, Some(text_rect))
                .map_err(|e| anyhow!("{e}"))?;
            y_offset += text_texture_query.height as i32 + LINE_SPACING_PX;
        }
        Ok(())
    }

    /// Like `render_text` but horizontally centred on `centre_x` and vertically centred on
    /// `centre_y`. Only the first line is rendered.
    pub fn render_text_centred(
        &mut self,
        text: &str,
        centre_x: i32,
        centre_y: i32,
        color: Color,
    ) -> anyhow::Result<()> {
        let Some(font) = self.font.as_ref() else {
            return Ok(());
        };
        let Some(line) = text.lines().next().filter(|line| !line.is_empty())
        else {
            return Ok(());
        };
        let (width, height) = font.size_of(line).map_err(|e| anyhow!("{e}"))?;
        self.render_text(
            line,
            centre_x - (width as i32 / 2),
            centre_y - (height as i32 / 2),
            color,
        )
    }

    /// Returns `true` iff the event asks for the window to close.
    pub fn is_quit_event(event: &Event) -> bool {
        matches!(
            event,
            Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                }
        )
    }
}
