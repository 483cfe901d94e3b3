pub mod text;

use std::fmt;

use folio_core::render::Screen;

/// Line-oriented frame the host prints after each render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextFrame {
    buf: String,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buf.lines()
    }
}

impl fmt::Write for TextFrame {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

pub trait FrameRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut TextFrame);
}
