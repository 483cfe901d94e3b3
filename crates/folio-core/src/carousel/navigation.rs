impl<'a> Carousel<'a> {
    /// Advances one slide. A no-op with fewer than two slides.
    pub fn next(&mut self) -> bool {
        let from = self.ring.current();
        if !self.ring.next() {
            return false;
        }
        self.direction = Direction::Next;
        debug!(
            "carousel: {} next {}/{} -> {}/{}",
            self.name,
            from.saturating_add(1),
            self.ring.size(),
            self.ring.current().saturating_add(1),
            self.ring.size()
        );
        self.after_manual_move(true);
        true
    }

    /// Steps back one slide. A no-op with fewer than two slides.
    pub fn prev(&mut self) -> bool {
        let from = self.ring.current();
        if !self.ring.prev() {
            return false;
        }
        self.direction = Direction::Prev;
        debug!(
            "carousel: {} prev {}/{} -> {}/{}",
            self.name,
            from.saturating_add(1),
            self.ring.size(),
            self.ring.current().saturating_add(1),
            self.ring.size()
        );
        self.after_manual_move(true);
        true
    }

    /// Jumps to `index` (wrapped into range). Direction follows the jump: forward when the
    /// target is after the current slide, backward otherwise. Jumping to the current
    /// slide keeps the direction and only restarts the countdown.
    pub fn goto(&mut self, index: u16) -> bool {
        if self.ring.is_empty() {
            return false;
        }

        let from = self.ring.current();
        let target = index % self.ring.size();
        let moved = target != from;
        if moved {
            self.direction = if target > from {
                Direction::Next
            } else {
                Direction::Prev
            };
            self.ring.goto(target);
            debug!(
                "carousel: {} goto {}/{} -> {}/{}",
                self.name,
                from.saturating_add(1),
                self.ring.size(),
                target.saturating_add(1),
                self.ring.size()
            );
        }
        self.after_manual_move(moved);
        moved
    }

    /// Replaces the slide collection.
    ///
    /// A different collection starts over at the first slide. The same collection with
    /// a new length keeps the cursor, wrapped into the new range.
    pub fn set_slides(&mut self, slides: &'a [Slide<'a>]) {
        let same_collection = core::ptr::eq(self.slides.as_ptr(), slides.as_ptr());
        let count = slide_count(slides);

        if same_collection {
            self.ring.resize(count);
        } else {
            self.ring = IndexRing::new(count);
            self.lightbox_open = false;
            self.pause_mask &= !PauseReason::Lightbox.bit();
            if let Some(swipe) = self.swipe.as_mut() {
                swipe.on_touch_cancel();
            }
        }

        debug!(
            "carousel: {} slides replaced same_collection={} total={} current={}",
            self.name,
            same_collection,
            count,
            self.ring.current()
        );

        self.slides = slides;
        if let Some(timer) = self.timer.as_mut() {
            timer.reset(None);
        }
        self.window_generation = self.window_generation.wrapping_add(1);
        self.sync_autoplay();
        self.pending_redraw = true;
    }

    pub fn open_lightbox(&mut self) -> bool {
        if !self.mounted || self.ring.is_empty() || self.lightbox_open {
            return false;
        }
        self.lightbox_open = true;
        self.hold(PauseReason::Lightbox);
        self.pending_redraw = true;
        true
    }

    pub fn close_lightbox(&mut self) -> bool {
        if !self.lightbox_open {
            return false;
        }
        self.lightbox_open = false;
        self.release(PauseReason::Lightbox);
        self.pending_redraw = true;
        true
    }

    fn after_manual_move(&mut self, moved: bool) {
        if let Some(timer) = self.timer.as_mut() {
            timer.reset(None);
        }
        self.window_generation = self.window_generation.wrapping_add(1);
        if moved {
            self.transition_seq = self.transition_seq.wrapping_add(1);
        }
        self.pending_redraw = true;
    }
}
