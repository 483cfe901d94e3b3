//! Horizontal swipe recognition for touch carousels.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeCommand {
    Next,
    Prev,
}

/// Turns a touch-start/touch-end pair into a discrete command.
///
/// Dragging left (start to the right of the end) by more than the threshold means
/// `Next`; dragging right means `Prev`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeRecognizer {
    threshold_px: f32,
    start_x: Option<f32>,
}

impl SwipeRecognizer {
    pub const fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub const fn threshold_px(&self) -> f32 {
        self.threshold_px
    }

    pub const fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn on_touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn on_touch_end(&mut self, x: f32) -> Option<SwipeCommand> {
        let start_x = self.start_x.take()?;
        let delta = start_x - x;

        if delta > self.threshold_px {
            Some(SwipeCommand::Next)
        } else if delta < -self.threshold_px {
            Some(SwipeCommand::Prev)
        } else {
            None
        }
    }

    pub fn on_touch_cancel(&mut self) {
        self.start_x = None;
    }
}
