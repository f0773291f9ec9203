use crate::{
    Axis, CurveAnimator, CurveFrame, FrequencyControl, LissajousConfig,
    SampleBuffer, SineWaveModel, format_title,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    FrequencyChanged { axis: Axis, value: f64 },
    Reset,
}

/// Instructions for whatever is drawing the app. Commands only describe what the screen should
/// show; applying them never feeds back into the app state.
#[derive(Clone, Debug)]
pub enum RenderCommand {
    UpdateWaveformLine { axis: Axis, buffer: SampleBuffer },
    UpdateCurveFrame(CurveFrame),
    SetTitle(String),
    SetSliderValue { axis: Axis, value: f64, value_01: f64 },
}

/// All the state of a running viewer. Input is fed in through [`App::handle_event`] and
/// [`App::tick`], both of which return the render commands needed to bring the display up to
/// date.
pub struct App {
    config: LissajousConfig,
    model: SineWaveModel,
    animator: CurveAnimator,
    x_control: FrequencyControl,
    y_control: FrequencyControl,
}

impl App {
    pub fn new(config: LissajousConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let model = SineWaveModel::new(&config);
        let animator = CurveAnimator::new(model.sample_count());
        Ok(Self {
            x_control: FrequencyControl::new(
                Axis::X,
                config.x.range,
                config.x.initial_frequency,
            ),
            y_control: FrequencyControl::new(
                Axis::Y,
                config.y.range,
                config.y.initial_frequency,
            ),
            config,
            model,
            animator,
        })
    }

    pub fn config(&self) -> &LissajousConfig {
        &self.config
    }

    pub fn model(&self) -> &SineWaveModel {
        &self.model
    }

    pub fn animator(&self) -> &CurveAnimator {
        &self.animator
    }

    pub fn control(&self, axis: Axis) -> &FrequencyControl {
        match axis {
            Axis::X => &self.x_control,
            Axis::Y => &self.y_control,
        }
    }

    pub fn control_mut(&mut self, axis: Axis) -> &mut FrequencyControl {
        match axis {
            Axis::X => &mut self.x_control,
            Axis::Y => &mut self.y_control,
        }
    }

    fn curve_frame(&self) -> CurveFrame {
        self.animator.frame(
            self.model.samples(Axis::X),
            self.model.samples(Axis::Y),
        )
    }

    fn slider_command(&self, axis: Axis) -> RenderCommand {
        let control = self.control(axis);
        RenderCommand::SetSliderValue {
            axis,
            value: control.value(),
            value_01: control.value_01(),
        }
    }

    /// Everything needed to draw the first frame.
    pub fn initial_commands(&self) -> Vec<RenderCommand> {
        let mut commands = Vec::new();
        for axis in Axis::ALL {
            commands.push(self.slider_command(axis));
            commands.push(RenderCommand::UpdateWaveformLine {
                axis,
                buffer: self.model.samples(axis).clone(),
            });
        }
        commands.push(RenderCommand::UpdateCurveFrame(self.curve_frame()));
        commands.push(RenderCommand::SetTitle(format_title(&self.model)));
        commands
    }

    pub fn handle_event(&mut self, event: Event) -> Vec<RenderCommand> {
        match event {
            Event::FrequencyChanged { axis, value } => {
                let applied = self.model.set_frequency(axis, value);
                log::debug!(
                    "{axis} frequency changed to {value} (applied {applied})"
                );
                self.control_mut(axis).sync(applied);
                self.animator.reset_and_start();
                vec![
                    self.slider_command(axis),
                    RenderCommand::UpdateWaveformLine {
                        axis,
                        buffer: self.model.samples(axis).clone(),
                    },
                    RenderCommand::UpdateCurveFrame(self.curve_frame()),
                    RenderCommand::SetTitle(format_title(&self.model)),
                ]
            }
            Event::Reset => {
                log::info!("Animation restarted!");
                self.animator.reset_and_start();
                vec![RenderCommand::UpdateCurveFrame(self.curve_frame())]
            }
        }
    }

    /// Advances the animation by one frame. Does nothing once the animation has stopped.
    pub fn tick(&mut self) -> Vec<RenderCommand> {
        if !self.animator.tick() {
            return Vec::new();
        }
        if !self.animator.is_running() {
            log::info!("Animation finished");
        }
        vec![RenderCommand::UpdateCurveFrame(self.curve_frame())]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::AnimationState;

    fn app() -> App {
        App::new(LissajousConfig::default()).unwrap()
    }

    fn curve_frames(commands: &[RenderCommand]) -> Vec<&CurveFrame> {
        commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::UpdateCurveFrame(frame) => Some(frame),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = LissajousConfig::default();
        config.x.amplitude = -1.0;
        assert!(App::new(config).is_err());
    }

    #[test]
    fn initial_commands_cover_everything() {
        let commands = app().initial_commands();
        let waveform_axes = commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::UpdateWaveformLine { axis, .. } => Some(*axis),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(waveform_axes, vec![Axis::X, Axis::Y]);
        assert_eq!(curve_frames(&commands).len(), 1);
        assert!(commands.iter().any(|command| matches!(
            command,
            RenderCommand::SetTitle(title) if title == "x = 5sin(4t + π/4)\ny = 2sin(2t)"
        )));
    }

    #[test]
    fn ticks_run_to_the_end_then_stop() {
        let mut app = app();
        for i in 1..2000 {
            let commands = app.tick();
            let frames = curve_frames(&commands);
            assert_eq!(frames.len(), 1);
            assert_eq!(frames[0].frame_index, i);
            assert_eq!(frames[0].marker_visible, i < 1999);
        }
        assert_eq!(app.animator().state(), AnimationState::Stopped);
        assert!(app.tick().is_empty());
        assert_eq!(app.animator().frame_index(), 1999);
    }

    #[test]
    fn frequency_change_after_stop_restarts_with_new_samples() {
        let mut app = app();
        while !app.tick().is_empty() {}
        let old_x = app.model().samples(Axis::X).clone();
        let commands = app.handle_event(Event::FrequencyChanged {
            axis: Axis::X,
            value: 10.05,
        });
        assert_eq!(app.animator().frame_index(), 0);
        assert!(app.animator().is_running());
        assert_eq!(app.model().frequency(Axis::X), 10.1);
        assert_eq!(app.control(Axis::X).value(), 10.1);
        let frames = curve_frames(&commands);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].frame_index, 0);
        assert!(frames[0].marker_visible);
        assert!(SampleBuffer::ptr_eq(
            &frames[0].x,
            app.model().samples(Axis::X)
        ));
        assert_ne!(&frames[0].x, &old_x);
        assert!(commands.iter().any(|command| matches!(
            command,
            RenderCommand::UpdateWaveformLine { axis: Axis::X, buffer }
                if SampleBuffer::ptr_eq(buffer, app.model().samples(Axis::X))
        )));
        assert!(commands.iter().any(|command| matches!(
            command,
            RenderCommand::SetTitle(title) if title.starts_with("x = 5sin(10.1t")
        )));
    }

    #[test]
    fn frequency_change_leaves_other_axis_alone() {
        let mut app = app();
        let y_before = app.model().samples(Axis::Y).clone();
        let commands = app.handle_event(Event::FrequencyChanged {
            axis: Axis::X,
            value: 6.0,
        });
        assert!(SampleBuffer::ptr_eq(app.model().samples(Axis::Y), &y_before));
        assert!(!commands.iter().any(|command| matches!(
            command,
            RenderCommand::UpdateWaveformLine { axis: Axis::Y, .. }
        )));
    }

    #[test]
    fn every_change_restarts_without_debounce() {
        let mut app = app();
        for value in [5.0, 5.1, 5.2] {
            for _ in 0..10 {
                app.tick();
            }
            app.handle_event(Event::FrequencyChanged {
                axis: Axis::Y,
                value,
            });
            assert_eq!(app.animator().frame_index(), 0);
        }
    }

    #[test]
    fn reset_restarts_without_touching_waves() {
        let mut app = app();
        for _ in 0..100 {
            app.tick();
        }
        let x_before = app.model().samples(Axis::X).clone();
        let commands = app.handle_event(Event::Reset);
        assert_eq!(app.animator().frame_index(), 0);
        assert!(app.animator().is_running());
        assert!(SampleBuffer::ptr_eq(app.model().samples(Axis::X), &x_before));
        assert_eq!(curve_frames(&commands).len(), 1);
    }

    #[test]
    fn frames_hold_their_buffers_across_regeneration() {
        let mut app = app();
        let commands = app.tick();
        let frame = curve_frames(&commands)[0].clone();
        app.handle_event(Event::FrequencyChanged {
            axis: Axis::X,
            value: 19.0,
        });
        assert_eq!(frame.x.len(), 2000);
        assert_eq!(frame.traced_curve().count(), 2);
        assert!(!SampleBuffer::ptr_eq(&frame.x, app.model().samples(Axis::X)));
    }
}
