//! Owns every carousel on the page plus the navigation scroll-spy, and keeps each
//! carousel's interval in step with its autoplay state.

use folio_core::{
    carousel::{Carousel, CarouselState, TickResult},
    input::Routed,
    render::{NavView, Screen, Slide},
    scroll_spy::ScrollSpy,
    settings::PersistedSettings,
};
use folio_host::{
    render::{FrameRenderer, TextFrame},
    scheduler::{IntervalHandle, IntervalId, IntervalScheduler},
};
use heapless::Vec as HeaplessVec;
use log::{debug, info, warn};

use super::site::{self, CarouselSpec};

pub(super) const MAX_CAROUSELS: usize = 8;

struct Slot {
    carousel: Carousel<'static>,
    collections: &'static [&'static [Slide<'static>]],
    interval: Option<IntervalHandle>,
    /// Countdown window the running interval was phased to.
    window_generation: u32,
}

pub(super) struct Stage {
    slots: HeaplessVec<Slot, MAX_CAROUSELS>,
    spy: ScrollSpy,
    scroll_offset_px: f32,
    nav_dirty: bool,
    settings: PersistedSettings,
}

impl Stage {
    pub(super) fn new<const N: usize>(
        specs: [CarouselSpec; N],
        settings: PersistedSettings,
    ) -> Self {
        let mut slots = HeaplessVec::new();
        for spec in specs {
            let carousel = Carousel::new(spec.name, spec.slides, settings.apply(spec.config));
            let slot = Slot {
                window_generation: carousel.window_generation(),
                carousel,
                collections: spec.collections,
                interval: None,
            };
            if slots.push(slot).is_err() {
                warn!("stage: carousel {} dropped; capacity is {}", spec.name, MAX_CAROUSELS);
            }
        }

        Self {
            slots,
            spy: ScrollSpy::new()
                .with_lookahead(site::NAV_LOOKAHEAD_PX)
                .with_header_offset(site::NAV_HEADER_OFFSET_PX)
                .with_initial(site::INITIAL_SECTION),
            scroll_offset_px: 0.0,
            nav_dirty: true,
            settings,
        }
    }

    /// Carousel names in slot order, for resolving script targets.
    pub(super) fn names(&self) -> HeaplessVec<&'static str, MAX_CAROUSELS> {
        self.slots.iter().map(|slot| slot.carousel.name()).collect()
    }

    pub(super) const fn settings(&self) -> PersistedSettings {
        self.settings
    }

    pub(super) fn mount_navigation(&mut self) {
        self.nav_dirty |= self.spy.mount(self.scroll_offset_px, &site::SECTIONS);
    }

    pub(super) fn unmount_all(&mut self, scheduler: &mut IntervalScheduler, now_ms: u64) {
        for slot in &mut self.slots {
            slot.carousel.unmount();
        }
        self.spy.unmount();
        self.sync_intervals(scheduler, now_ms);
    }

    pub(super) fn dispatch(
        &mut self,
        routed: Routed,
        scheduler: &mut IntervalScheduler,
        now_ms: u64,
    ) {
        match routed {
            Routed::Carousel { slot, event } => {
                let Some(slot) = self.slots.get_mut(usize::from(slot)) else {
                    warn!("stage: no carousel in slot {}", slot);
                    return;
                };
                let changed = slot.carousel.apply_input(event);
                debug!("stage: {} {:?} changed={}", slot.carousel.name(), event, changed);
            }
            Routed::Collection { slot, collection } => {
                let Some(slot) = self.slots.get_mut(usize::from(slot)) else {
                    warn!("stage: no carousel in slot {}", slot);
                    return;
                };
                match slot.collections.get(usize::from(collection)).copied() {
                    Some(slides) => {
                        info!(
                            "stage: {} shows collection {} ({} slides)",
                            slot.carousel.name(),
                            collection,
                            slides.len()
                        );
                        slot.carousel.set_slides(slides);
                    }
                    None => warn!(
                        "stage: {} has no collection {}",
                        slot.carousel.name(),
                        collection
                    ),
                }
            }
            Routed::Scroll { offset_px } => {
                self.scroll_offset_px = offset_px.max(0.0);
                self.nav_dirty |= self.spy.update(self.scroll_offset_px, &site::SECTIONS);
            }
            Routed::Anchor { section } => {
                let target = site::NAV_ITEMS
                    .get(usize::from(section))
                    .and_then(|id| Some((*id, self.spy.scroll_target(&site::SECTIONS, id)?)));
                let Some((id, offset_px)) = target else {
                    warn!("stage: no anchor for nav entry {}", section);
                    return;
                };
                info!("stage: nav {} -> scroll {}px", id, offset_px);
                self.scroll_offset_px = offset_px;
                self.nav_dirty |= self.spy.update(self.scroll_offset_px, &site::SECTIONS);
            }
            Routed::ReducedMotion(reduced) => {
                if self.settings.reduced_motion != reduced {
                    info!("stage: reduced motion {}", if reduced { "on" } else { "off" });
                    self.settings = self.settings.with_reduced_motion(reduced);
                    for slot in &mut self.slots {
                        slot.carousel.set_reduced_motion(reduced);
                    }
                }
            }
        }

        self.sync_intervals(scheduler, now_ms);
    }

    /// Delivers a fired interval to the carousel that owns it.
    pub(super) fn on_interval(&mut self, id: IntervalId) -> TickResult {
        let owner = self
            .slots
            .iter_mut()
            .find(|slot| slot.interval.as_ref().is_some_and(|handle| handle.id() == id));
        match owner {
            Some(slot) => slot.carousel.on_timer_tick(),
            None => TickResult::NoRender,
        }
    }

    /// Runs an interval for every autoplaying carousel and drops the rest. Paused
    /// carousels hold no interval; their countdown resumes where it stopped. A carousel
    /// whose countdown window restarted gets a fresh interval phased to `now_ms`.
    pub(super) fn sync_intervals(&mut self, scheduler: &mut IntervalScheduler, now_ms: u64) {
        for slot in &mut self.slots {
            let wants_interval = slot.carousel.state() == CarouselState::Autoplaying;
            let generation = slot.carousel.window_generation();
            let rephase = slot.window_generation != generation;
            slot.window_generation = generation;

            if !wants_interval {
                slot.interval = None;
            } else if slot.interval.is_none() || rephase {
                let period_ms = u64::from(slot.carousel.config().tick_ms);
                // Replacing the handle cancels the old interval.
                slot.interval = Some(scheduler.start(period_ms, now_ms));
            }
        }
    }

    /// Renders every carousel and the navigation bar that changed since the last call.
    pub(super) fn render_pending<R: FrameRenderer>(
        &mut self,
        renderer: &mut R,
        frame: &mut TextFrame,
    ) -> bool {
        frame.clear();
        let mut rendered = false;

        for slot in &mut self.slots {
            if slot.carousel.take_redraw() && slot.carousel.is_mounted() {
                renderer.render(Screen::Carousel(slot.carousel.view()), frame);
                rendered = true;
            }
        }

        if self.nav_dirty && self.spy.is_live() {
            renderer.render(
                Screen::Navigation(NavView {
                    items: &site::NAV_ITEMS,
                    active: self.spy.active(),
                }),
                frame,
            );
            rendered = true;
        }
        self.nav_dirty = false;

        rendered
    }
}
