impl<'a> Carousel<'a> {
    /// Attaches the carousel to a live view; autoplay starts if it is eligible.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.sync_autoplay();
        self.pending_redraw = true;
    }

    /// Detaches the carousel. The countdown stops synchronously and transient
    /// interaction state (hover, touch, lightbox) is dropped.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.pause_mask = 0;
        self.lightbox_open = false;
        if let Some(swipe) = self.swipe.as_mut() {
            swipe.on_touch_cancel();
        }
        self.sync_autoplay();
    }

    /// Delivers one countdown tick from the host's interval.
    pub fn on_timer_tick(&mut self) -> TickResult {
        let Some(timer) = self.timer.as_mut() else {
            return TickResult::NoRender;
        };

        let badge_before = timer.remaining_secs();
        match timer.on_tick() {
            TimerTick::Idle => TickResult::NoRender,
            TimerTick::Counted => {
                if self.config.countdown_badge && timer.remaining_secs() != badge_before {
                    self.pending_redraw = true;
                    TickResult::RenderRequested
                } else {
                    TickResult::NoRender
                }
            }
            TimerTick::Elapsed => {
                // The timer has already re-armed itself for the next dwell period.
                if self.ring.next() {
                    self.direction = Direction::Next;
                    self.transition_seq = self.transition_seq.wrapping_add(1);
                    debug!(
                        "carousel: {} autoplay -> {}/{}",
                        self.name,
                        self.ring.current().saturating_add(1),
                        self.ring.size()
                    );
                }
                self.pending_redraw = true;
                TickResult::RenderRequested
            }
        }
    }

    /// Hover pause: `true` while the pointer is over the carousel.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        if paused {
            self.hold(PauseReason::Pointer)
        } else {
            self.release(PauseReason::Pointer)
        }
    }

    /// Pauses for `reason`. The carousel stays paused until every reason is released.
    /// Ignored while unmounted, matching `unmount` dropping every held reason.
    pub fn hold(&mut self, reason: PauseReason) -> bool {
        if !self.mounted || self.pause_mask & reason.bit() != 0 {
            return false;
        }
        self.pause_mask |= reason.bit();
        debug!("carousel: {} hold {:?} mask={:#06b}", self.name, reason, self.pause_mask);
        self.sync_pause()
    }

    pub fn release(&mut self, reason: PauseReason) -> bool {
        if self.pause_mask & reason.bit() == 0 {
            return false;
        }
        self.pause_mask &= !reason.bit();
        debug!(
            "carousel: {} release {:?} mask={:#06b}",
            self.name, reason, self.pause_mask
        );
        self.sync_pause()
    }

    pub fn is_held(&self, reason: PauseReason) -> bool {
        self.pause_mask & reason.bit() != 0
    }

    /// User-facing play/pause toggle. Reduced motion still wins over an enabled toggle.
    pub fn set_autoplay(&mut self, enabled: bool) -> bool {
        if self.autoplay_enabled == enabled {
            return false;
        }
        self.autoplay_enabled = enabled;
        self.sync_autoplay();
        self.pending_redraw = true;
        true
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.set_autoplay(!self.autoplay_enabled)
    }

    /// Applies a changed reduced-motion preference to a live carousel.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.config.animations_enabled != reduced {
            return;
        }
        self.config.animations_enabled = !reduced;
        debug!("carousel: {} reduced_motion={}", self.name, reduced);
        self.sync_autoplay();
        self.pending_redraw = true;
    }

    fn autoplay_eligible(&self) -> bool {
        self.mounted
            && self.autoplay_enabled
            && self.config.animations_enabled
            && self.ring.size() > 1
    }

    fn sync_autoplay(&mut self) {
        let eligible = self.autoplay_eligible();
        let Some(timer) = self.timer.as_mut() else {
            return;
        };

        match (eligible, timer.is_running()) {
            (true, false) => {
                timer.start(timer.duration_ms());
                debug!(
                    "carousel: {} autoplay started duration_ms={} tick_ms={}",
                    self.name,
                    timer.duration_ms(),
                    timer.tick_interval_ms()
                );
                self.pending_redraw = true;
            }
            (false, true) => {
                timer.stop();
                debug!("carousel: {} autoplay stopped", self.name);
                self.pending_redraw = true;
            }
            _ => {}
        }

        self.sync_pause();
    }

    fn sync_pause(&mut self) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.is_running() {
            return false;
        }

        let changed = if self.pause_mask != 0 {
            timer.pause()
        } else {
            timer.resume()
        };
        if changed {
            self.pending_redraw = true;
        }
        changed
    }
}
