use crate::{
    Axis, LissajousConfig, SampleBuffer, WaveConfig, generate,
    round_one_decimal,
};

/// One sine wave. Only the frequency changes after construction.
#[derive(Clone, Debug)]
pub struct Wave {
    config: WaveConfig,
    frequency: f64,
    samples: SampleBuffer,
}

impl Wave {
    fn new(config: WaveConfig, time: &[f64]) -> Self {
        let frequency = config.initial_frequency;
        Self {
            config,
            frequency,
            samples: generate(config.amplitude, frequency, config.phase, time),
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.config.amplitude
    }

    pub fn phase(&self) -> f64 {
        self.config.phase
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }
}

/// The X and Y waves, sampled over a shared set of time points.
#[derive(Clone, Debug)]
pub struct SineWaveModel {
    time: SampleBuffer,
    x: Wave,
    y: Wave,
}

impl SineWaveModel {
    pub fn new(config: &LissajousConfig) -> Self {
        let time = config.time_domain.linspace(config.sample_count);
        Self {
            x: Wave::new(config.x, &time),
            y: Wave::new(config.y, &time),
            time,
        }
    }

    pub fn wave(&self, axis: Axis) -> &Wave {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    fn wave_mut(&mut self, axis: Axis) -> &mut Wave {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// Sets the frequency of one wave and replaces its samples. The other wave is untouched.
    /// Returns the frequency actually applied after rounding to one decimal place.
    pub fn set_frequency(&mut self, axis: Axis, new_frequency: f64) -> f64 {
        let time = self.time.clone();
        let wave = self.wave_mut(axis);
        let frequency =
            round_one_decimal(wave.config.range.clamp(new_frequency));
        wave.frequency = frequency;
        wave.samples = generate(
            wave.config.amplitude,
            frequency,
            wave.config.phase,
            &time,
        );
        frequency
    }

    pub fn samples(&self, axis: Axis) -> &SampleBuffer {
        self.wave(axis).samples()
    }

    pub fn frequency(&self, axis: Axis) -> f64 {
        self.wave(axis).frequency()
    }

    pub fn time(&self) -> &SampleBuffer {
        &self.time
    }

    pub fn sample_count(&self) -> usize {
        self.time.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn model() -> SineWaveModel {
        SineWaveModel::new(&LissajousConfig::default())
    }

    #[test]
    fn initial_waves_follow_config() {
        let model = model();
        assert_eq!(model.sample_count(), 2000);
        assert_eq!(model.frequency(Axis::X), 4.0);
        assert_eq!(model.frequency(Axis::Y), 2.0);
        assert!((model.samples(Axis::X)[0] - 3.5355).abs() < 1e-4);
        assert_eq!(model.samples(Axis::Y)[0], 0.0);
    }

    #[test]
    fn set_frequency_rounds_to_one_decimal() {
        let mut model = model();
        assert_eq!(model.set_frequency(Axis::X, 10.05), 10.1);
        assert_eq!(model.frequency(Axis::X), 10.1);
        let time = model.time().clone();
        let expected = generate(5.0, 10.1, std::f64::consts::FRAC_PI_4, &time);
        assert_eq!(model.samples(Axis::X), &expected);
    }

    #[test]
    fn changing_one_axis_leaves_the_other_alone() {
        let mut model = model();
        let y_before = model.samples(Axis::Y).clone();
        let x_before = model.samples(Axis::X).clone();
        model.set_frequency(Axis::X, 7.5);
        assert!(SampleBuffer::ptr_eq(model.samples(Axis::Y), &y_before));
        assert_ne!(model.samples(Axis::X), &x_before);
        let x_after = model.samples(Axis::X).clone();
        model.set_frequency(Axis::Y, 13.2);
        assert!(SampleBuffer::ptr_eq(model.samples(Axis::X), &x_after));
        assert_eq!(model.frequency(Axis::X), 7.5);
        assert_eq!(model.frequency(Axis::Y), 13.2);
    }

    #[test]
    fn replaced_buffer_leaves_old_handles_intact() {
        let mut model = model();
        let old = model.samples(Axis::X).clone();
        let old_first = old[1];
        model.set_frequency(Axis::X, 1.0);
        assert_eq!(old[1], old_first);
        assert_eq!(old.len(), model.samples(Axis::X).len());
    }

    #[test]
    fn set_frequency_clamps_to_range() {
        let mut model = model();
        assert_eq!(model.set_frequency(Axis::Y, 0.0), 1.0);
        assert_eq!(model.set_frequency(Axis::Y, 100.0), 20.0);
    }
}
