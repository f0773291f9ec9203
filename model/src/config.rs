use crate::TimeDomain;
use anyhow::ensure;
use std::{f64::consts::FRAC_PI_4, fmt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Self; 2] = [Self::X, Self::Y];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}

/// Rounds to one decimal place, with halves rounded away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The values a frequency control may take: `min`, `max`, and every multiple of `step` above
/// `min` in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FrequencyRange {
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.min && frequency <= self.max
    }

    pub fn clamp(&self, frequency: f64) -> f64 {
        frequency.clamp(self.min, self.max)
    }

    /// Rounds to one decimal place, then moves to the nearest value on the step grid within the
    /// range.
    pub fn snap(&self, frequency: f64) -> f64 {
        let frequency = round_one_decimal(frequency);
        let steps = ((frequency - self.min) / self.step).round();
        round_one_decimal(self.clamp(self.min + (steps * self.step)))
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for FrequencyRange {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 20.0,
            step: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveConfig {
    pub amplitude: f64,
    pub phase: f64,
    pub initial_frequency: f64,
    pub range: FrequencyRange,
}

impl WaveConfig {
    fn validate(&self, axis: Axis) -> anyhow::Result<()> {
        ensure!(
            self.amplitude.is_finite() && self.amplitude > 0.0,
            "{axis} wave amplitude must be positive (got {})",
            self.amplitude
        );
        ensure!(
            self.phase.is_finite(),
            "{axis} wave phase must be finite (got {})",
            self.phase
        );
        let range = &self.range;
        ensure!(
            range.min.is_finite()
                && range.max.is_finite()
                && range.min > 0.0
                && range.min < range.max,
            "{axis} frequency range must satisfy 0 < min < max (got {}..{})",
            range.min,
            range.max
        );
        ensure!(
            range.step.is_finite() && range.step > 0.0,
            "{axis} frequency step must be positive (got {})",
            range.step
        );
        ensure!(
            range.contains(self.initial_frequency),
            "{axis} initial frequency {} is outside {}..{}",
            self.initial_frequency,
            range.min,
            range.max
        );
        Ok(())
    }
}

/// Fixed at startup. Nothing outside the program can change these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LissajousConfig {
    pub x: WaveConfig,
    pub y: WaveConfig,
    pub sample_count: usize,
    pub time_domain: TimeDomain,
}

impl LissajousConfig {
    pub fn wave(&self, axis: Axis) -> &WaveConfig {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for axis in Axis::ALL {
            self.wave(axis).validate(axis)?;
        }
        ensure!(
            self.sample_count >= 2,
            "sample count must be at least 2 (got {})",
            self.sample_count
        );
        let TimeDomain { start, end } = self.time_domain;
        ensure!(
            start.is_finite() && end.is_finite() && start < end,
            "time domain must be a non-empty finite interval (got {start}..{end})"
        );
        Ok(())
    }
}

impl Default for LissajousConfig {
    fn default() -> Self {
        Self {
            x: WaveConfig {
                amplitude: 5.0,
                phase: FRAC_PI_4,
                initial_frequency: 4.0,
                range: FrequencyRange::default(),
            },
            y: WaveConfig {
                amplitude: 2.0,
                phase: 0.0,
                initial_frequency: 2.0,
                range: FrequencyRange::default(),
            },
            sample_count: 2000,
            time_domain: TimeDomain::FULL_CYCLE,
        }
    }
}
