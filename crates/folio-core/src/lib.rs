//! Carousel, autoplay, and scroll-spy state machines for the folio site.
//!
//! Everything here is driven by discrete ticks and input events supplied by the host; no
//! module owns a clock, a timer, or any I/O.
#![cfg_attr(not(test), no_std)]

pub mod carousel;
pub mod input;
pub mod render;
pub mod ring;
pub mod scroll_spy;
pub mod settings;
pub mod swipe;
pub mod timer;
