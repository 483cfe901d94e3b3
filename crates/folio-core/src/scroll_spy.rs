//! Scroll-spy: picks the navigation section under the header lookahead line.

use heapless::String;
use log::{debug, warn};

/// Offset added to the scroll position to compensate for the fixed header.
pub const DEFAULT_LOOKAHEAD_PX: f32 = 150.0;
/// Gap left above a section when jumping to its anchor.
pub const DEFAULT_HEADER_OFFSET_PX: f32 = 80.0;
/// Longest section id the spy can track. Longer ids never become active.
pub const SECTION_ID_BYTES: usize = 32;

/// Geometry of one navigable section, measured fresh by the caller on every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section<'a> {
    pub id: &'a str,
    pub top_px: f32,
    pub height_px: f32,
}

impl<'a> Section<'a> {
    pub const fn new(id: &'a str, top_px: f32, height_px: f32) -> Self {
        Self {
            id,
            top_px,
            height_px,
        }
    }

    pub fn contains(&self, y_px: f32) -> bool {
        y_px >= self.top_px && y_px < self.top_px + self.height_px
    }
}

#[derive(Clone, Debug)]
pub struct ScrollSpy {
    lookahead_px: f32,
    header_offset_px: f32,
    active: Option<String<SECTION_ID_BYTES>>,
    live: bool,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSpy {
    pub const fn new() -> Self {
        Self {
            lookahead_px: DEFAULT_LOOKAHEAD_PX,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            active: None,
            live: false,
        }
    }

    pub fn with_lookahead(mut self, lookahead_px: f32) -> Self {
        self.lookahead_px = lookahead_px;
        self
    }

    pub fn with_header_offset(mut self, header_offset_px: f32) -> Self {
        self.header_offset_px = header_offset_px;
        self
    }

    /// Seeds the highlighted entry shown before the first match.
    pub fn with_initial(mut self, id: &str) -> Self {
        match copy_id(id) {
            Some(id) => self.active = Some(id),
            None => warn!("scroll-spy: initial id {:?} exceeds {} bytes", id, SECTION_ID_BYTES),
        }
        self
    }

    pub const fn is_live(&self) -> bool {
        self.live
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_ref().map(|id| id.as_str())
    }

    /// Starts tracking and evaluates the current position immediately.
    pub fn mount(&mut self, scroll_offset_px: f32, sections: &[Section<'_>]) -> bool {
        self.live = true;
        self.update(scroll_offset_px, sections)
    }

    pub fn unmount(&mut self) {
        self.live = false;
    }

    /// Re-evaluates the active section. Returns `true` when the highlight changed.
    ///
    /// The first section (in caller order) containing the lookahead line wins. When none
    /// does, the previous highlight stays.
    pub fn update(&mut self, scroll_offset_px: f32, sections: &[Section<'_>]) -> bool {
        if !self.live {
            return false;
        }

        let probe = scroll_offset_px + self.lookahead_px;
        let Some(hit) = sections.iter().find(|section| section.contains(probe)) else {
            return false;
        };

        let Some(id) = copy_id(hit.id) else {
            warn!("scroll-spy: section id {:?} exceeds {} bytes", hit.id, SECTION_ID_BYTES);
            return false;
        };
        if self.active.as_ref() == Some(&id) {
            return false;
        }

        debug!(
            "scroll-spy: active {:?} -> {:?} probe_px={}",
            self.active(),
            id.as_str(),
            probe
        );
        self.active = Some(id);
        true
    }

    /// Scroll position that brings `id` just below the fixed header.
    pub fn scroll_target(&self, sections: &[Section<'_>], id: &str) -> Option<f32> {
        sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| (section.top_px - self.header_offset_px).max(0.0))
    }
}

fn copy_id(id: &str) -> Option<String<SECTION_ID_BYTES>> {
    let mut out = String::new();
    out.push_str(id).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: [Section<'static>; 2] = [
        Section::new("home", 0.0, 800.0),
        Section::new("about", 800.0, 600.0),
    ];

    fn mounted(offset: f32) -> ScrollSpy {
        let mut spy = ScrollSpy::new();
        spy.mount(offset, &PAGE);
        spy
    }

    #[test]
    fn lookahead_selects_section() {
        assert_eq!(mounted(0.0).active(), Some("home"));

        let mut spy = mounted(0.0);
        assert!(spy.update(700.0, &PAGE));
        assert_eq!(spy.active(), Some("about"));
    }

    #[test]
    fn range_end_is_exclusive() {
        let mut spy = mounted(0.0);
        spy.update(650.0, &PAGE);
        assert_eq!(spy.active(), Some("about"));
        spy.update(649.0, &PAGE);
        assert_eq!(spy.active(), Some("home"));
    }

    #[test]
    fn no_match_keeps_previous_highlight() {
        let mut spy = mounted(700.0);
        assert!(!spy.update(5_000.0, &PAGE));
        assert_eq!(spy.active(), Some("about"));
    }

    #[test]
    fn initial_highlight_survives_until_first_match() {
        let mut spy = ScrollSpy::new().with_initial("about");
        assert!(!spy.mount(10_000.0, &PAGE));
        assert_eq!(spy.active(), Some("about"));
        assert!(spy.update(0.0, &PAGE));
        assert_eq!(spy.active(), Some("home"));
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let overlapping = [
            Section::new("skills", 0.0, 1_000.0),
            Section::new("company", 500.0, 1_000.0),
        ];
        let mut spy = ScrollSpy::new();
        spy.mount(600.0, &overlapping);
        assert_eq!(spy.active(), Some("skills"));
    }

    #[test]
    fn geometry_is_read_fresh_on_each_update() {
        let mut spy = mounted(700.0);
        let grown = [
            Section::new("home", 0.0, 1_200.0),
            Section::new("about", 1_200.0, 600.0),
        ];
        assert!(spy.update(700.0, &grown));
        assert_eq!(spy.active(), Some("home"));
    }

    #[test]
    fn updates_after_unmount_are_ignored() {
        let mut spy = mounted(0.0);
        spy.unmount();
        assert!(!spy.update(700.0, &PAGE));
        assert_eq!(spy.active(), Some("home"));
    }

    #[test]
    fn scroll_target_leaves_room_for_header() {
        let spy = ScrollSpy::new();
        assert_eq!(spy.scroll_target(&PAGE, "about"), Some(720.0));
        assert_eq!(spy.scroll_target(&PAGE, "home"), Some(0.0));
        assert_eq!(spy.scroll_target(&PAGE, "blog"), None);
    }

    #[test]
    fn over_long_ids_never_become_active() {
        let sections = [
            Section::new("a-very-long-section-identifier-one", 0.0, 1_000.0),
            Section::new("a-very-long-section-identifier-two", 1_000.0, 1_000.0),
            Section::new("contact", 2_000.0, 1_000.0),
        ];
        let mut spy = ScrollSpy::new().with_initial("about");
        assert!(!spy.mount(0.0, &sections));
        assert_eq!(spy.active(), Some("about"));
        assert!(!spy.update(1_000.0, &sections));
        assert_eq!(spy.active(), Some("about"));

        assert!(spy.update(2_000.0, &sections));
        assert_eq!(spy.active(), Some("contact"));

        let seeded = ScrollSpy::new().with_initial("a-very-long-section-identifier-one");
        assert_eq!(seeded.active(), None);
    }
}
