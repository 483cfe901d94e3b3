use std::fmt::{self, Write};

use folio_core::render::{CarouselView, NavView, Screen};

use super::{FrameRenderer, TextFrame};

/// Renders view snapshots as one status line per screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    show_images: bool,
}

impl TextRenderer {
    pub const fn new() -> Self {
        Self { show_images: false }
    }

    pub const fn with_images(mut self, show_images: bool) -> Self {
        self.show_images = show_images;
        self
    }

    fn write_carousel(&self, view: &CarouselView<'_>, frame: &mut TextFrame) -> fmt::Result {
        write!(frame, "[{}]", view.name)?;

        let Some(slide) = view.slide else {
            return writeln!(frame, " empty");
        };

        write!(
            frame,
            " {}/{} \"{}\"",
            view.index.saturating_add(1),
            view.total,
            slide.caption
        )?;
        if self.show_images {
            write!(frame, " <{}>", slide.image)?;
        }
        if view.slides_per_view > 1 {
            frame.write_str(" showing=")?;
            for (position, index) in view.visible().enumerate() {
                if position > 0 {
                    frame.write_char(',')?;
                }
                write!(frame, "{}", index.saturating_add(1))?;
            }
        }
        if let Some((prev, next)) = view.neighbours {
            write!(frame, " prev={} next={}", prev.saturating_add(1), next.saturating_add(1))?;
        }
        write!(frame, " dir={}", view.direction.as_str())?;

        if view.playing {
            frame.write_str(" playing")?;
        } else if view.paused {
            frame.write_str(" paused")?;
        }
        if let Some(secs) = view.countdown_secs {
            write!(frame, " {secs}s")?;
        }
        if let Some(pct) = view.progress_pct {
            write!(frame, " {}", progress_bar(pct))?;
        }
        if let Some(transition) = view.transition {
            write!(frame, " anim={}#{}", transition.kind.as_str(), transition.seq)?;
        }
        if view.lightbox_open {
            frame.write_str(" lightbox")?;
        }
        frame.write_char('\n')
    }

    fn write_navigation(&self, view: &NavView<'_>, frame: &mut TextFrame) -> fmt::Result {
        frame.write_str("nav:")?;
        for item in view.items {
            if view.active == Some(*item) {
                write!(frame, " [{item}]")?;
            } else {
                write!(frame, " {item}")?;
            }
        }
        frame.write_char('\n')
    }
}

impl FrameRenderer for TextRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut TextFrame) {
        // Writing into a `String` cannot fail.
        let _ = match screen {
            Screen::Carousel(view) => self.write_carousel(&view, frame),
            Screen::Navigation(view) => self.write_navigation(&view, frame),
        };
    }
}

const PROGRESS_CELLS: usize = 10;

fn progress_bar(pct: u8) -> String {
    let filled = (usize::from(pct.min(100)) * PROGRESS_CELLS) / 100;
    let mut bar = String::with_capacity(PROGRESS_CELLS + 2);
    bar.push('|');
    for cell in 0..PROGRESS_CELLS {
        bar.push(if cell < filled { '#' } else { '.' });
    }
    bar.push('|');
    bar
}
