use crate::window::Window;
use anyhow::anyhow;
use sdl2::{event::Event, mouse::MouseButton, pixels::Color, rect::Rect};

/// A labelled button which reports a click when the left mouse button is pressed and released
/// inside it.
pub struct Button {
    text: String,
    rect: Rect,
    hovered: bool,
    pressed: bool,
}

impl Button {
    pub fn new(text: &str, rect: Rect) -> Self {
        Self {
            text: text.to_string(),
            rect,
            hovered: false,
            pressed: false,
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }

    /// Returns `true` iff the event completes a click.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.pressed = self.contains(x, y);
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                let clicked = self.pressed && self.contains(x, y);
                self.pressed = false;
                return clicked;
            }
            Event::MouseMotion { x, y, .. } => {
                self.hovered = self.contains(x, y);
            }
            _ => (),
        }
        false
    }

    pub fn render(&self, window: &mut Window) -> anyhow::Result<()> {
        let background = if self.pressed {
            Color::RGB(160, 160, 160)
        } else if self.hovered {
            Color::RGB(128, 128, 128)
        } else {
            Color::RGB(64, 64, 64)
        };
        window.canvas.set_draw_color(background);
        window
            .canvas
            .fill_rect(self.rect)
            .map_err(|e| anyhow!("{e}"))?;
        window.canvas.set_draw_color(Color::WHITE);
        window
            .canvas
            .draw_rect(self.rect)
            .map_err(|e| anyhow!("{e}"))?;
        let centre = self.rect.center();
        window.render_text_centred(
            self.text.as_str(),
            centre.x(),
            centre.y(),
            Color::WHITE,
        )?;
        Ok(())
    }
}
