impl<'a> Carousel<'a> {
    /// Applies one interaction event. Returns whether the carousel changed.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Next => self.next(),
            InputEvent::Prev => self.prev(),
            InputEvent::GoTo(index) => self.goto(index),
            InputEvent::PointerEnter => self.hold(PauseReason::Pointer),
            InputEvent::PointerLeave => self.release(PauseReason::Pointer),
            InputEvent::FocusIn => self.hold(PauseReason::Focus),
            InputEvent::FocusOut => self.release(PauseReason::Focus),
            InputEvent::TouchStart { x } => {
                if !self.mounted {
                    return false;
                }
                let Some(swipe) = self.swipe.as_mut() else {
                    return false;
                };
                swipe.on_touch_start(x);
                self.hold(PauseReason::Touch)
            }
            InputEvent::TouchEnd { x } => {
                let Some(swipe) = self.swipe.as_mut() else {
                    return false;
                };
                let command = swipe.on_touch_end(x);
                let released = self.release(PauseReason::Touch);
                match command {
                    Some(SwipeCommand::Next) => self.next(),
                    Some(SwipeCommand::Prev) => self.prev(),
                    None => released,
                }
            }
            InputEvent::TouchCancel => {
                if let Some(swipe) = self.swipe.as_mut() {
                    swipe.on_touch_cancel();
                }
                self.release(PauseReason::Touch)
            }
            InputEvent::Key(key) => self.apply_key(key),
            InputEvent::OpenLightbox => self.open_lightbox(),
            InputEvent::ToggleAutoplay => self.toggle_autoplay(),
            InputEvent::Mount => {
                let was_mounted = self.mounted;
                self.mount();
                !was_mounted
            }
            InputEvent::Unmount => {
                let was_mounted = self.mounted;
                self.unmount();
                was_mounted
            }
        }
    }

    fn apply_key(&mut self, key: Key) -> bool {
        if !self.config.keyboard_navigation {
            debug!("carousel: {} ignored key={:?}", self.name, key);
            return false;
        }

        match key {
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.prev(),
            Key::Escape => self.close_lightbox(),
        }
    }
}
