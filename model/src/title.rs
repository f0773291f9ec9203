use crate::{Axis, SineWaveModel, Wave};
use std::f64::consts::PI;

const PHASE_TOLERANCE: f64 = 1e-9;
const MAX_PHASE_DENOMINATOR: i64 = 12;

/// Formats a phase as a multiple of π in lowest terms when it is one (eg. "π/4", "-3π/2"), and
/// as a plain number otherwise.
pub fn format_phase(phase: f64) -> String {
    let ratio = phase / PI;
    (1..=MAX_PHASE_DENOMINATOR)
        .find_map(|denominator| {
            let numerator = ratio * denominator as f64;
            let rounded = numerator.round();
            ((numerator - rounded).abs() < PHASE_TOLERANCE)
                .then_some((rounded as i64, denominator))
        })
        .map(|(numerator, denominator)| {
            let numerator = match numerator {
                0 => "0".to_string(),
                1 => "π".to_string(),
                -1 => "-π".to_string(),
                n => format!("{n}π"),
            };
            if denominator == 1 {
                numerator
            } else {
                format!("{numerator}/{denominator}")
            }
        })
        .unwrap_or_else(|| format!("{phase}"))
}

fn format_wave(name: &str, wave: &Wave) -> String {
    let phase = wave.phase();
    let argument = if phase == 0.0 {
        format!("{}t", wave.frequency())
    } else {
        let phase_text = format_phase(phase);
        match phase_text.strip_prefix('-') {
            Some(magnitude) => format!("{}t - {magnitude}", wave.frequency()),
            None => format!("{}t + {phase_text}", wave.frequency()),
        }
    };
    format!("{name} = {}sin({argument})", wave.amplitude())
}

/// Two lines describing both waves, eg. "x = 5sin(4t + π/4)" and "y = 2sin(2t)".
pub fn format_title(model: &SineWaveModel) -> String {
    format!(
        "{}\n{}",
        format_wave("x", model.wave(Axis::X)),
        format_wave("y", model.wave(Axis::Y))
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::LissajousConfig;

    #[test]
    fn phases_as_fractions_of_pi() {
        assert_eq!(format_phase(PI / 4.0), "π/4");
        assert_eq!(format_phase(PI), "π");
        assert_eq!(format_phase(-PI / 2.0), "-π/2");
        assert_eq!(format_phase(3.0 * PI / 4.0), "3π/4");
        assert_eq!(format_phase(2.0 * PI), "2π");
        assert_eq!(format_phase(1.0), "1");
    }

    #[test]
    fn initial_title() {
        let model = SineWaveModel::new(&LissajousConfig::default());
        assert_eq!(format_title(&model), "x = 5sin(4t + π/4)\ny = 2sin(2t)");
    }

    #[test]
    fn title_tracks_frequency_changes() {
        let mut model = SineWaveModel::new(&LissajousConfig::default());
        model.set_frequency(Axis::X, 10.05);
        model.set_frequency(Axis::Y, 3.3);
        assert_eq!(
            format_title(&model),
            "x = 5sin(10.1t + π/4)\ny = 2sin(3.3t)"
        );
    }

    #[test]
    fn negative_phase_is_subtracted() {
        let mut config = LissajousConfig::default();
        config.y.phase = -PI / 3.0;
        let model = SineWaveModel::new(&config);
        assert!(format_title(&model).ends_with("y = 2sin(2t - π/3)"));
    }
}
