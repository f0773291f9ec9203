use std::{f64::consts::PI, ops::Deref, rc::Rc};

/// An immutable sequence of samples. Cloning a buffer shares its storage. Buffers are never
/// modified in place: regenerating a wave produces a new buffer, so anyone holding a clone keeps
/// seeing a complete set of samples.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer(Rc<[f64]>);

impl SampleBuffer {
    /// Returns `true` iff both buffers share the same storage.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for SampleBuffer {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<f64> for SampleBuffer {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<f64>> for SampleBuffer {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeDomain {
    pub start: f64,
    pub end: f64,
}

impl TimeDomain {
    pub const FULL_CYCLE: Self = Self {
        start: 0.0,
        end: 2.0 * PI,
    };

    /// `n` evenly spaced points from `start` to `end`, both ends included.
    pub fn linspace(&self, n: usize) -> SampleBuffer {
        match n {
            0 => SampleBuffer::from(Vec::new()),
            1 => SampleBuffer::from(vec![self.start]),
            _ => {
                let step = (self.end - self.start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.end
                        } else {
                            self.start + (i as f64 * step)
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Evaluates `amplitude * sin(frequency * t + phase)` at each of `time_points`.
pub fn generate(
    amplitude: f64,
    frequency: f64,
    phase: f64,
    time_points: &[f64],
) -> SampleBuffer {
    time_points
        .iter()
        .map(|&t| amplitude * (frequency * t + phase).sin())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn linspace_includes_both_ends() {
        let time = TimeDomain::FULL_CYCLE.linspace(2000);
        assert_eq!(time.len(), 2000);
        assert_eq!(time[0], 0.0);
        assert_eq!(time[1999], 2.0 * PI);
        assert!(time.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_degenerate_lengths() {
        assert!(TimeDomain::FULL_CYCLE.linspace(0).is_empty());
        assert_eq!(&*TimeDomain::FULL_CYCLE.linspace(1), &[0.0]);
    }

    #[test]
    fn generate_length_and_bounds() {
        let time = TimeDomain::FULL_CYCLE.linspace(500);
        for &(amplitude, frequency, phase) in
            &[(5.0, 4.0, FRAC_PI_4), (2.0, 2.0, 0.0), (0.5, 19.9, -1.3)]
        {
            let samples = generate(amplitude, frequency, phase, &time);
            assert_eq!(samples.len(), time.len());
            assert!(
                samples
                    .iter()
                    .all(|s| s.abs() <= amplitude + EPSILON)
            );
        }
    }

    #[test]
    fn first_sample_is_amplitude_times_sin_phase() {
        let time = TimeDomain::FULL_CYCLE.linspace(2000);
        let x = generate(5.0, 4.0, FRAC_PI_4, &time);
        assert!((x[0] - 5.0 * FRAC_PI_4.sin()).abs() < EPSILON);
        assert!((x[0] - 3.5355).abs() < 1e-4);
        let y = generate(2.0, 2.0, 0.0, &time);
        assert_eq!(y[0], 0.0);
    }

    #[test]
    fn clones_share_storage() {
        let a = generate(1.0, 1.0, 0.0, &TimeDomain::FULL_CYCLE.linspace(10));
        let b = a.clone();
        assert!(SampleBuffer::ptr_eq(&a, &b));
        let c = generate(1.0, 1.0, 0.0, &TimeDomain::FULL_CYCLE.linspace(10));
        assert_eq!(a, c);
        assert!(!SampleBuffer::ptr_eq(&a, &c));
    }
}
