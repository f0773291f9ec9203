use crate::layout::Layout;
use lissajous_model::{App, Axis, Event};
use lissajous_widgets::{Button, Slider, Window};
use sdl2::{event::Event as SdlEvent, keyboard::Scancode};

/// The frequency sliders and the reset button. Turns raw input into app events.
pub struct Controls {
    x_slider: Slider,
    y_slider: Slider,
    reset_button: Button,
    focus: Axis,
}

fn wheel_step_01(app: &App, axis: Axis) -> f64 {
    let range = app.control(axis).range();
    range.step / range.width()
}

impl Controls {
    pub fn new(layout: &Layout, app: &App) -> Self {
        Self {
            x_slider: Slider::new(
                "X frequency",
                layout.x_slider,
                wheel_step_01(app, Axis::X),
            ),
            y_slider: Slider::new(
                "Y frequency",
                layout.y_slider,
                wheel_step_01(app, Axis::Y),
            ),
            reset_button: Button::new("Reset", layout.reset_button),
            focus: Axis::X,
        }
    }

    #[cfg(test)]
    pub fn slider(&self, axis: Axis) -> &Slider {
        match axis {
            Axis::X => &self.x_slider,
            Axis::Y => &self.y_slider,
        }
    }

    fn slider_mut(&mut self, axis: Axis) -> &mut Slider {
        match axis {
            Axis::X => &mut self.x_slider,
            Axis::Y => &mut self.y_slider,
        }
    }

    pub fn set_slider_value(&mut self, axis: Axis, value: f64, value_01: f64) {
        self.slider_mut(axis).set_value(value_01, format!("{value:.1}"));
    }

    /// Feeds an input event to every control. A slider only moves once the app has accepted the
    /// new value, which arrives later as a render command.
    pub fn handle_event(
        &mut self,
        event: &SdlEvent,
        app: &mut App,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        for axis in Axis::ALL {
            if let Some(value_01) = self.slider_mut(axis).handle_event(event) {
                self.focus = axis;
                events.extend(app.control_mut(axis).set_value_01(value_01));
            }
        }
        if self.reset_button.handle_event(event) {
            events.push(Event::Reset);
        }
        if let SdlEvent::KeyDown {
            scancode: Some(scancode),
            ..
        } = event
        {
            match *scancode {
                Scancode::R => events.push(Event::Reset),
                Scancode::Left => {
                    events.extend(app.control_mut(self.focus).nudge(-1))
                }
                Scancode::Right => {
                    events.extend(app.control_mut(self.focus).nudge(1))
                }
                _ => (),
            }
        }
        events
    }

    pub fn render(&self, window: &mut Window) -> anyhow::Result<()> {
        self.x_slider.render(window)?;
        self.y_slider.render(window)?;
        self.reset_button.render(window)?;
        Ok(())
    }
}
