//! View models handed to the presentation layer.

use crate::ring::{IndexRing, Window};

/// One image/caption pair shown by a carousel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slide<'a> {
    pub image: &'a str,
    pub caption: &'a str,
}

impl<'a> Slide<'a> {
    pub const fn new(image: &'a str, caption: &'a str) -> Self {
        Self { image, caption }
    }
}

/// Direction of the last explicit move.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

impl Direction {
    pub const fn animation(self) -> AnimationKind {
        match self {
            Self::Next => AnimationKind::SlideLeft,
            Self::Prev => AnimationKind::SlideRight,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
}

impl AnimationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
        }
    }
}

/// Slide transition to play. `seq` increases with every move so a renderer can tell a
/// new transition from a repeated snapshot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideTransition {
    pub kind: AnimationKind,
    pub seq: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CarouselView<'a> {
    pub name: &'a str,
    pub slide: Option<&'a Slide<'a>>,
    pub index: u16,
    pub total: u16,
    pub direction: Direction,
    /// Whole seconds until the next autoplay advance, when the badge is enabled.
    pub countdown_secs: Option<u32>,
    pub progress_pct: Option<u8>,
    pub playing: bool,
    pub paused: bool,
    pub lightbox_open: bool,
    pub slides_per_view: u16,
    /// `(prev, next)` slide indices for neighbour links; `None` when disabled or with
    /// fewer than two slides.
    pub neighbours: Option<(u16, u16)>,
    /// `None` whenever animations are disabled.
    pub transition: Option<SlideTransition>,
}

impl CarouselView<'_> {
    /// Indices of the slides on screen, starting at `index` and wrapping at the end.
    pub fn visible(&self) -> Window {
        IndexRing::starting_at(self.total, self.index).window(self.slides_per_view)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavView<'a> {
    pub items: &'a [&'a str],
    pub active: Option<&'a str>,
}

/// Page-level view model consumed by host renderers.
pub enum Screen<'a> {
    Carousel(CarouselView<'a>),
    Navigation(NavView<'a>),
}
