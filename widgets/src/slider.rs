use crate::window::Window;
use anyhow::anyhow;
use sdl2::{
    event::Event,
    mouse::{MouseButton, MouseWheelDirection},
    pixels::Color,
    rect::Rect,
};

const LABEL_WIDTH_PX: u32 = 110;
const VALUE_WIDTH_PX: u32 = 60;
const TRACK_HEIGHT_PX: u32 = 6;
const HANDLE_WIDTH_PX: u32 = 10;

/// A horizontal slider with a label on its left and the current value on its right. The slider
/// doesn't decide its own value. Input produces a requested position between 0 and 1, and the
/// owner responds by calling `set_value` with whatever value it settled on.
pub struct Slider {
    label: String,
    rect: Rect,
    value_01: f64,
    value_text: String,
    wheel_step_01: f64,
    dragging: bool,
    hovered: bool,
}

impl Slider {
    pub fn new(label: &str, rect: Rect, wheel_step_01: f64) -> Self {
        Self {
            label: label.to_string(),
            rect,
            value_01: 0.0,
            value_text: String::new(),
            wheel_step_01,
            dragging: false,
            hovered: false,
        }
    }

    pub fn track_rect(&self) -> Rect {
        let track_width = self
            .rect
            .width()
            .saturating_sub(LABEL_WIDTH_PX + VALUE_WIDTH_PX)
            .max(1);
        Rect::new(
            self.rect.x() + LABEL_WIDTH_PX as i32,
            self.rect.y()
                + (self.rect.height() as i32 - TRACK_HEIGHT_PX as i32) / 2,
            track_width,
            TRACK_HEIGHT_PX,
        )
    }

    /// The position between 0 and 1 that a click at horizontal pixel `x` corresponds to.
    pub fn value_01_at(&self, x: i32) -> f64 {
        let track = self.track_rect();
        ((x - track.x()) as f64 / track.width() as f64).clamp(0.0, 1.0)
    }

    fn handle_area_contains(&self, x: i32, y: i32) -> bool {
        let track = self.track_rect();
        let slack = HANDLE_WIDTH_PX as i32;
        x >= track.x() - slack
            && x <= track.right() + slack
            && y >= self.rect.y()
            && y <= self.rect.bottom()
    }

    /// Returns the position requested by the event, if it requests one.
    pub fn handle_event(&mut self, event: &Event) -> Option<f64> {
        match *event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                if self.handle_area_contains(x, y) {
                    self.dragging = true;
                    return Some(self.value_01_at(x));
                }
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } => {
                self.dragging = false;
            }
            Event::MouseMotion {
                mousestate, x, y, ..
            } => {
                self.hovered = self.rect.contains_point((x, y));
                if self.dragging && mousestate.left() {
                    return Some(self.value_01_at(x));
                }
            }
            Event::MouseWheel { y, direction, .. } => {
                return self.wheel_request(y, direction);
            }
            _ => (),
        }
        None
    }

    /// The position requested by scrolling `y` notches. Only a hovered slider responds.
    pub fn wheel_request(
        &self,
        y: i32,
        direction: MouseWheelDirection,
    ) -> Option<f64> {
        if !self.hovered || y == 0 {
            return None;
        }
        let notches = match direction {
            MouseWheelDirection::Flipped => -y,
            _ => y,
        };
        Some(
            (self.value_01 + (notches as f64 * self.wheel_step_01))
                .clamp(0.0, 1.0),
        )
    }

    pub fn set_value(&mut self, value_01: f64, value_text: String) {
        self.value_01 = value_01.clamp(0.0, 1.0);
        self.value_text = value_text;
    }

    pub fn value_01(&self) -> f64 {
        self.value_01
    }

    pub fn render(&self, window: &mut Window) -> anyhow::Result<()> {
        let track = self.track_rect();
        window.render_text_centred(
            self.label.as_str(),
            self.rect.x() + LABEL_WIDTH_PX as i32 / 2,
            self.rect.center().y(),
            Color::WHITE,
        )?;
        window.canvas.set_draw_color(Color::RGB(64, 64, 64));
        window.canvas.fill_rect(track).map_err(|e| anyhow!("{e}"))?;
        let filled_width = (track.width() as f64 * self.value_01) as u32;
        if filled_width > 0 {
            window.canvas.set_draw_color(Color::RGB(31, 119, 180));
            window
                .canvas
                .fill_rect(Rect::new(
                    track.x(),
                    track.y(),
                    filled_width,
                    track.height(),
                ))
                .map_err(|e| anyhow!("{e}"))?;
        }
        let handle_colour = if self.dragging || self.hovered {
            Color::WHITE
        } else {
            Color::GREY
        };
        window.canvas.set_draw_color(handle_colour);
        window
            .canvas
            .fill_rect(Rect::new(
                track.x() + filled_width as i32 - (HANDLE_WIDTH_PX as i32 / 2),
                self.rect.y(),
                HANDLE_WIDTH_PX,
                self.rect.height(),
            ))
            .map_err(|e| anyhow!("{e}"))?;
        window.render_text_centred(
            self.value_text.as_str(),
            track.right() + VALUE_WIDTH_PX as i32 / 2,
            self.rect.center().y(),
            Color::WHITE,
        )?;
        Ok(())
    }
}
