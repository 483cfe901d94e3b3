//! Input abstraction layer.

/// Interaction events a single carousel understands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Next,
    Prev,
    /// Pagination dot click.
    GoTo(u16),
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    TouchCancel,
    Key(Key),
    OpenLightbox,
    ToggleAutoplay,
    Mount,
    Unmount,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Event addressed to one part of the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Routed {
    /// Event for the carousel registered in `slot`.
    Carousel { slot: u8, event: InputEvent },
    /// Swap the slide collection shown by `slot` (e.g. another project's gallery).
    Collection { slot: u8, collection: u16 },
    Scroll { offset_px: f32 },
    /// Navigation link click: jump to the anchor of the `section`-th nav entry.
    Anchor { section: u8 },
    ReducedMotion(bool),
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self, now_ms: u64) -> Result<Option<Routed>, Self::Error>;
}
