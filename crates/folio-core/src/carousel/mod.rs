//! Reusable carousel controller: index ring, autoplay countdown, direction, pause reasons.
//!
//! Every carousel on a page owns one `Carousel`. Instances never share timers or indices;
//! the host delivers timer ticks and interaction events to each one separately.

use log::debug;

use crate::{
    input::{InputEvent, Key},
    render::{CarouselView, Direction, Slide, SlideTransition},
    ring::IndexRing,
    swipe::{SwipeCommand, SwipeRecognizer},
    timer::{CountdownTimer, TimerTick},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Lifecycle of a carousel's autoplay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CarouselState {
    Idle,
    Autoplaying,
    Paused,
}

/// Independent sources that can hold a carousel paused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PauseReason {
    Pointer,
    Focus,
    Touch,
    Lightbox,
}

impl PauseReason {
    const fn bit(self) -> u8 {
        match self {
            Self::Pointer => 0b0001,
            Self::Focus => 0b0010,
            Self::Touch => 0b0100,
            Self::Lightbox => 0b1000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Dwell time per slide; `None` disables autoplay entirely.
    pub autoplay_ms: Option<u32>,
    /// Countdown granularity. Equal to `autoplay_ms` for carousels without a badge.
    pub tick_ms: u32,
    /// `None` disables touch gestures.
    pub swipe_threshold_px: Option<f32>,
    pub animations_enabled: bool,
    pub countdown_badge: bool,
    pub keyboard_navigation: bool,
    /// Slides shown side by side, starting at the current one.
    pub slides_per_view: u16,
    /// Exposes the previous/next slide indices in the view.
    pub neighbour_links: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_ms: Some(5_000),
            tick_ms: 100,
            swipe_threshold_px: None,
            animations_enabled: true,
            countdown_badge: false,
            keyboard_navigation: false,
            slides_per_view: 1,
            neighbour_links: false,
        }
    }
}

impl CarouselConfig {
    pub const fn with_autoplay(mut self, autoplay_ms: u32, tick_ms: u32) -> Self {
        self.autoplay_ms = Some(autoplay_ms);
        self.tick_ms = tick_ms;
        self
    }

    pub const fn without_autoplay(mut self) -> Self {
        self.autoplay_ms = None;
        self
    }

    pub const fn with_swipe_threshold(mut self, threshold_px: f32) -> Self {
        self.swipe_threshold_px = Some(threshold_px);
        self
    }

    pub const fn with_countdown_badge(mut self, countdown_badge: bool) -> Self {
        self.countdown_badge = countdown_badge;
        self
    }

    pub const fn with_keyboard_navigation(mut self, keyboard_navigation: bool) -> Self {
        self.keyboard_navigation = keyboard_navigation;
        self
    }

    pub const fn with_slides_per_view(mut self, slides_per_view: u16) -> Self {
        self.slides_per_view = if slides_per_view == 0 { 1 } else { slides_per_view };
        self
    }

    pub const fn with_neighbour_links(mut self, neighbour_links: bool) -> Self {
        self.neighbour_links = neighbour_links;
        self
    }

    pub const fn with_animations(mut self, animations_enabled: bool) -> Self {
        self.animations_enabled = animations_enabled;
        self
    }

    /// Reduced-motion variant: no autoplay, no transition animations.
    pub const fn reduced_motion(self) -> Self {
        self.with_animations(false)
    }
}

pub struct Carousel<'a> {
    name: &'static str,
    slides: &'a [Slide<'a>],
    ring: IndexRing,
    timer: Option<CountdownTimer>,
    config: CarouselConfig,
    swipe: Option<SwipeRecognizer>,
    direction: Direction,
    autoplay_enabled: bool,
    mounted: bool,
    pause_mask: u8,
    lightbox_open: bool,
    transition_seq: u32,
    window_generation: u32,
    pending_redraw: bool,
}

impl<'a> Carousel<'a> {
    pub fn new(name: &'static str, slides: &'a [Slide<'a>], config: CarouselConfig) -> Self {
        Self {
            name,
            slides,
            ring: IndexRing::new(slide_count(slides)),
            timer: config
                .autoplay_ms
                .map(|duration_ms| CountdownTimer::new(duration_ms, config.tick_ms)),
            config,
            swipe: config.swipe_threshold_px.map(SwipeRecognizer::new),
            direction: Direction::Next,
            autoplay_enabled: true,
            mounted: false,
            pause_mask: 0,
            lightbox_open: false,
            transition_seq: 0,
            window_generation: 0,
            pending_redraw: true,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub const fn current(&self) -> u16 {
        self.ring.current()
    }

    pub const fn len(&self) -> u16 {
        self.ring.size()
    }

    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub const fn is_lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    pub const fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// Bumped whenever a manual move or a new collection restarts the countdown. A host
    /// driving ticks from a periodic interval restarts that interval when this changes,
    /// so the first tick of the new window lands a full period later.
    pub const fn window_generation(&self) -> u32 {
        self.window_generation
    }

    pub fn timer(&self) -> Option<&CountdownTimer> {
        self.timer.as_ref()
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.timer.as_ref().map(CountdownTimer::remaining_ms)
    }

    pub fn current_slide(&self) -> Option<&'a Slide<'a>> {
        let slides: &'a [Slide<'a>] = self.slides;
        slides.get(self.ring.current() as usize)
    }

    pub fn state(&self) -> CarouselState {
        match self.timer.as_ref() {
            Some(timer) if timer.is_running() && timer.is_paused() => CarouselState::Paused,
            Some(timer) if timer.is_running() => CarouselState::Autoplaying,
            _ => CarouselState::Idle,
        }
    }

    /// Returns whether the carousel changed since the last call.
    pub fn take_redraw(&mut self) -> bool {
        if self.pending_redraw {
            self.pending_redraw = false;
            true
        } else {
            false
        }
    }

    pub fn view(&self) -> CarouselView<'a> {
        let state = self.state();
        let countdown = self
            .timer
            .as_ref()
            .filter(|_| self.config.countdown_badge && state != CarouselState::Idle);

        CarouselView {
            name: self.name,
            slide: self.current_slide(),
            index: self.ring.current(),
            total: self.ring.size(),
            direction: self.direction,
            countdown_secs: countdown.map(CountdownTimer::remaining_secs),
            progress_pct: countdown.map(CountdownTimer::progress_pct),
            playing: state == CarouselState::Autoplaying,
            paused: state == CarouselState::Paused,
            lightbox_open: self.lightbox_open,
            slides_per_view: self.config.slides_per_view,
            neighbours: self
                .ring
                .peek_prev()
                .zip(self.ring.peek_next())
                .filter(|_| self.config.neighbour_links && self.ring.size() > 1),
            transition: (self.config.animations_enabled && self.transition_seq > 0).then(|| {
                SlideTransition {
                    kind: self.direction.animation(),
                    seq: self.transition_seq,
                }
            }),
        }
    }
}

fn slide_count(slides: &[Slide<'_>]) -> u16 {
    slides.len().min(u16::MAX as usize) as u16
}

include!("navigation.rs");
include!("autoplay.rs");
include!("input.rs");
