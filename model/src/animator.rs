use crate::SampleBuffer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Stopped,
}

/// Steps through the frames of the curve animation, one frame per sample. Once the final frame
/// is reached the animation stops and further ticks are ignored until it is restarted.
#[derive(Clone, Debug)]
pub struct CurveAnimator {
    frame_index: usize,
    final_frame_index: usize,
    state: AnimationState,
}

impl CurveAnimator {
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_index: 0,
            final_frame_index: sample_count.saturating_sub(1),
            state: AnimationState::Running,
        }
    }

    /// Advances to the next frame. Returns `false` without doing anything if the animation is
    /// stopped.
    pub fn tick(&mut self) -> bool {
        if self.state == AnimationState::Stopped {
            return false;
        }
        if self.frame_index < self.final_frame_index {
            self.frame_index += 1;
        }
        if self.frame_index >= self.final_frame_index {
            self.state = AnimationState::Stopped;
        }
        true
    }

    pub fn reset_and_start(&mut self) {
        self.frame_index = 0;
        self.state = AnimationState::Running;
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    pub fn marker_visible(&self) -> bool {
        self.is_running()
    }

    /// A snapshot of the current frame drawn from the given buffers.
    pub fn frame(&self, x: &SampleBuffer, y: &SampleBuffer) -> CurveFrame {
        CurveFrame {
            x: x.clone(),
            y: y.clone(),
            frame_index: self.frame_index,
            marker_visible: self.marker_visible(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

/// What to draw for a single frame. Holds handles to the buffers it was made from, so the traced
/// curve and the marker always agree with each other.
#[derive(Clone, Debug)]
pub struct CurveFrame {
    pub x: SampleBuffer,
    pub y: SampleBuffer,
    pub frame_index: usize,
    pub marker_visible: bool,
}

impl CurveFrame {
    /// The (x, y) pairs for frames 0 up to and including the current one.
    pub fn traced_curve(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .copied()
            .zip(self.y.iter().copied())
            .take(self.frame_index + 1)
    }

    pub fn marker_position(&self) -> Option<Marker> {
        let x = *self.x.get(self.frame_index)?;
        let y = *self.y.get(self.frame_index)?;
        Some(Marker {
            x,
            y,
            visible: self.marker_visible,
        })
    }
}
