use crate::{Axis, Event, FrequencyRange};

/// The value behind one frequency slider. Keeps the value on the range's step grid and reports
/// an [`Event`] whenever the value actually moves.
#[derive(Clone, Debug)]
pub struct FrequencyControl {
    axis: Axis,
    range: FrequencyRange,
    value: f64,
}

impl FrequencyControl {
    pub fn new(axis: Axis, range: FrequencyRange, initial_value: f64) -> Self {
        Self {
            axis,
            range,
            value: range.snap(initial_value),
        }
    }

    pub fn range(&self) -> &FrequencyRange {
        &self.range
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position of the value within the range, from 0 at `min` to 1 at `max`.
    pub fn value_01(&self) -> f64 {
        (self.value - self.range.min) / self.range.width()
    }

    pub fn set_value(&mut self, value: f64) -> Option<Event> {
        let value = self.range.snap(value);
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(Event::FrequencyChanged {
            axis: self.axis,
            value,
        })
    }

    pub fn set_value_01(&mut self, value_01: f64) -> Option<Event> {
        self.set_value(
            self.range.min + (value_01.clamp(0.0, 1.0) * self.range.width()),
        )
    }

    /// Moves the value by a whole number of steps.
    pub fn nudge(&mut self, steps: i32) -> Option<Event> {
        self.set_value(self.value + (steps as f64 * self.range.step))
    }

    /// Brings the control into agreement with a value applied elsewhere without reporting a
    /// change.
    pub(crate) fn sync(&mut self, value: f64) {
        self.value = self.range.snap(value);
    }
}
