use crate::{controls::Controls, layout::Layout};
use lissajous_model::{App, Axis, CurveFrame, RenderCommand, SampleBuffer};
use lissajous_widgets::{Grid, Plot, Span, Window};
use sdl2::pixels::Color;
use std::f64::consts::FRAC_PI_4;

const BACKGROUND: Color = Color::RGB(20, 20, 24);
const WAVE_COLOUR: Color = Color::RGB(31, 119, 180);
const CURVE_COLOUR: Color = Color::RGB(255, 127, 14);
const MARKER_COLOUR: Color = Color::RED;
const MARKER_RADIUS_PX: i16 = 5;
const PLOT_MARGIN: f64 = 0.1;
const LABEL_INSET_PX: i32 = 6;

/// Draws whatever the most recent render commands describe. Holds handles to buffers it has been
/// given but never computes anything from the app state itself.
pub struct Renderer {
    time: SampleBuffer,
    x_plot: Plot,
    y_plot: Plot,
    curve_plot: Plot,
    x_line: Option<SampleBuffer>,
    y_line: Option<SampleBuffer>,
    curve: Option<CurveFrame>,
    title: String,
    title_origin: (i32, i32),
    window_title_prefix: String,
    window_title_stale: bool,
    redraw_requested: bool,
    line_width: u32,
}

impl Renderer {
    pub fn new(
        layout: &Layout,
        app: &App,
        window_title_prefix: &str,
        line_width: u32,
    ) -> Self {
        let config = app.config();
        let time_span =
            Span::new(config.time_domain.start, config.time_domain.end);
        let x_span = Span::symmetric(config.x.amplitude + PLOT_MARGIN);
        let y_span = Span::symmetric(config.y.amplitude + PLOT_MARGIN);
        let wave_grid = Grid {
            x_spacing: Some(FRAC_PI_4),
            y_spacing: Some(1.0),
        };
        let curve_grid = Grid {
            x_spacing: Some(1.0),
            y_spacing: Some(1.0),
        };
        Self {
            time: app.model().time().clone(),
            x_plot: Plot::new(layout.x_wave, time_span, x_span, wave_grid),
            y_plot: Plot::new(layout.y_wave, time_span, y_span, wave_grid),
            curve_plot: Plot::new(layout.curve, x_span, y_span, curve_grid),
            x_line: None,
            y_line: None,
            curve: None,
            title: String::new(),
            title_origin: layout.title_origin,
            window_title_prefix: window_title_prefix.to_string(),
            window_title_stale: true,
            redraw_requested: true,
            line_width,
        }
    }

    pub fn update_waveform_line(&mut self, axis: Axis, buffer: SampleBuffer) {
        match axis {
            Axis::X => self.x_line = Some(buffer),
            Axis::Y => self.y_line = Some(buffer),
        }
        self.request_redraw();
    }

    pub fn update_curve_frame(&mut self, frame: CurveFrame) {
        self.curve = Some(frame);
        self.request_redraw();
    }

    pub fn set_title(&mut self, text: String) {
        if text != self.title {
            self.title = text;
            self.window_title_stale = true;
        }
        self.request_redraw();
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Returns `true` iff a redraw was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn apply(&mut self, command: RenderCommand, controls: &mut Controls) {
        match command {
            RenderCommand::UpdateWaveformLine { axis, buffer } => {
                self.update_waveform_line(axis, buffer)
            }
            RenderCommand::UpdateCurveFrame(frame) => {
                self.update_curve_frame(frame)
            }
            RenderCommand::SetTitle(text) => self.set_title(text),
            RenderCommand::SetSliderValue {
                axis,
                value,
                value_01,
            } => {
                controls.set_slider_value(axis, value, value_01);
                self.request_redraw();
            }
        }
    }

    fn render_waveform(
        &self,
        window: &mut Window,
        plot: &Plot,
        line: Option<&SampleBuffer>,
        label: &str,
    ) -> anyhow::Result<()> {
        plot.render_background(window)?;
        if let Some(line) = line {
            let points =
                self.time.iter().copied().zip(line.iter().copied());
            plot.render_polyline(window, points, WAVE_COLOUR, self.line_width)?;
        }
        let rect = plot.rect();
        window.render_text(
            label,
            rect.x() + LABEL_INSET_PX,
            rect.y() + LABEL_INSET_PX,
            Color::GREY,
        )?;
        Ok(())
    }

    fn render_curve(&self, window: &mut Window) -> anyhow::Result<()> {
        self.curve_plot.render_background(window)?;
        let Some(frame) = self.curve.as_ref() else {
            return Ok(());
        };
        self.curve_plot.render_polyline(
            window,
            frame.traced_curve(),
            CURVE_COLOUR,
            self.line_width,
        )?;
        if let Some(marker) = frame.marker_position() {
            if marker.visible {
                self.curve_plot.render_marker(
                    window,
                    marker.x,
                    marker.y,
                    MARKER_RADIUS_PX,
                    MARKER_COLOUR,
                )?;
            }
        }
        Ok(())
    }

    pub fn render(
        &mut self,
        window: &mut Window,
        controls: &Controls,
    ) -> anyhow::Result<()> {
        if self.window_title_stale {
            let one_line = self.title.replace('\n', "    ");
            window.set_title(&format!(
                "{} - {}",
                self.window_title_prefix, one_line
            ))?;
            self.window_title_stale = false;
        }
        window.canvas.set_draw_color(BACKGROUND);
        window.canvas.clear();
        self.render_waveform(
            window,
            &self.x_plot,
            self.x_line.as_ref(),
            "X value",
        )?;
        self.render_waveform(
            window,
            &self.y_plot,
            self.y_line.as_ref(),
            "Y value",
        )?;
        self.render_curve(window)?;
        let (title_x, title_y) = self.title_origin;
        window.render_text(&self.title, title_x, title_y, Color::WHITE)?;
        controls.render(window)?;
        window.canvas.present();
        Ok(())
    }
}
