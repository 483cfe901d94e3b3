//! Timestamped interaction scripts.
//!
//! One event per line: `<at_ms> <target> <event> [arg]`. Blank lines and `#` comments are
//! skipped. `target` is the name of a registered carousel, `scroll`, `nav`, or `settings`.
//!
//! ```text
//! 0      portfolio mount
//! 1200   portfolio enter
//! 3400   portfolio leave
//! 5000   scroll    720
//! 5500   nav       contact
//! 6000   gallery   project 2
//! 7000   settings  reduce-motion on
//! ```

use std::{fmt, fs, io, path::Path, str::SplitWhitespace};

use folio_core::input::{InputEvent, InputProvider, Key, Routed};
use log::debug;

pub const SCROLL_TARGET: &str = "scroll";
pub const NAV_TARGET: &str = "nav";
pub const SETTINGS_TARGET: &str = "settings";

/// Names a script may address: carousels by slot order and nav anchors by entry order.
#[derive(Clone, Copy, Debug)]
pub struct Targets<'a> {
    pub carousels: &'a [&'a str],
    pub anchors: &'a [&'a str],
}

impl<'a> Targets<'a> {
    pub const fn new(carousels: &'a [&'a str], anchors: &'a [&'a str]) -> Self {
        Self { carousels, anchors }
    }
}

#[derive(Debug)]
pub enum ScriptError {
    Io(io::Error),
    /// More carousels or anchors than a `u8` index can address.
    TooManyTargets(usize),
    MissingField { line: usize, field: &'static str },
    InvalidTime { line: usize },
    UnknownTarget { line: usize, target: String },
    UnknownEvent { line: usize, event: String },
    InvalidArgument { line: usize },
    TrailingInput { line: usize },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "script read failed: {err}"),
            Self::TooManyTargets(count) => write!(f, "{count} targets exceed the slot range"),
            Self::MissingField { line, field } => write!(f, "line {line}: missing {field}"),
            Self::InvalidTime { line } => write!(f, "line {line}: invalid timestamp"),
            Self::UnknownTarget { line, target } => {
                write!(f, "line {line}: unknown target `{target}`")
            }
            Self::UnknownEvent { line, event } => write!(f, "line {line}: unknown event `{event}`"),
            Self::InvalidArgument { line } => write!(f, "line {line}: invalid argument"),
            Self::TrailingInput { line } => write!(f, "line {line}: unexpected trailing input"),
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedEvent {
    pub at_ms: u64,
    pub routed: Routed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    events: Vec<ScriptedEvent>,
}

impl Script {
    pub fn load(path: &Path, targets: &Targets<'_>) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, targets)
    }

    /// Parses `text`. Carousels and anchors resolve to their position in `targets`.
    /// Events keep file order among equal timestamps.
    pub fn parse(text: &str, targets: &Targets<'_>) -> Result<Self, ScriptError> {
        let widest = targets.carousels.len().max(targets.anchors.len());
        if widest > usize::from(u8::MAX) + 1 {
            return Err(ScriptError::TooManyTargets(widest));
        }

        let mut events = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            events.push(parse_line(line, content, targets)?);
        }
        events.sort_by_key(|event| event.at_ms);

        debug!("script: parsed {} events", events.len());
        Ok(Self { events })
    }

    pub fn events(&self) -> &[ScriptedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the last event.
    pub fn end_ms(&self) -> u64 {
        self.events.last().map_or(0, |event| event.at_ms)
    }
}

fn parse_line(
    line: usize,
    content: &str,
    targets: &Targets<'_>,
) -> Result<ScriptedEvent, ScriptError> {
    let mut fields = content.split_whitespace();
    let at_ms = fields
        .next()
        .ok_or(ScriptError::MissingField {
            line,
            field: "timestamp",
        })?
        .parse::<u64>()
        .map_err(|_| ScriptError::InvalidTime { line })?;
    let target = fields.next().ok_or(ScriptError::MissingField {
        line,
        field: "target",
    })?;

    let routed = match target {
        SCROLL_TARGET => Routed::Scroll {
            offset_px: parse_arg(line, &mut fields, "offset")?,
        },
        NAV_TARGET => {
            let anchor = fields.next().ok_or(ScriptError::MissingField {
                line,
                field: "anchor",
            })?;
            Routed::Anchor {
                section: position(line, targets.anchors, anchor)?,
            }
        }
        SETTINGS_TARGET => parse_setting(line, &mut fields)?,
        name => {
            let slot = position(line, targets.carousels, name)?;
            parse_carousel_event(line, slot, &mut fields)?
        }
    };

    if fields.next().is_some() {
        return Err(ScriptError::TrailingInput { line });
    }

    Ok(ScriptedEvent { at_ms, routed })
}

fn position(line: usize, names: &[&str], name: &str) -> Result<u8, ScriptError> {
    names
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| index as u8)
        .ok_or_else(|| ScriptError::UnknownTarget {
            line,
            target: name.to_owned(),
        })
}

fn parse_carousel_event(
    line: usize,
    slot: u8,
    fields: &mut SplitWhitespace<'_>,
) -> Result<Routed, ScriptError> {
    let name = fields.next().ok_or(ScriptError::MissingField {
        line,
        field: "event",
    })?;

    let event = match name {
        "next" => InputEvent::Next,
        "prev" => InputEvent::Prev,
        "goto" => InputEvent::GoTo(parse_arg(line, fields, "index")?),
        "enter" => InputEvent::PointerEnter,
        "leave" => InputEvent::PointerLeave,
        "focus" => InputEvent::FocusIn,
        "blur" => InputEvent::FocusOut,
        "touchstart" => InputEvent::TouchStart {
            x: parse_arg(line, fields, "x")?,
        },
        "touchend" => InputEvent::TouchEnd {
            x: parse_arg(line, fields, "x")?,
        },
        "touchcancel" => InputEvent::TouchCancel,
        "left" => InputEvent::Key(Key::ArrowLeft),
        "right" => InputEvent::Key(Key::ArrowRight),
        "escape" => InputEvent::Key(Key::Escape),
        "lightbox" => InputEvent::OpenLightbox,
        "autoplay" => InputEvent::ToggleAutoplay,
        "mount" => InputEvent::Mount,
        "unmount" => InputEvent::Unmount,
        "project" => {
            return Ok(Routed::Collection {
                slot,
                collection: parse_arg(line, fields, "project")?,
            });
        }
        other => {
            return Err(ScriptError::UnknownEvent {
                line,
                event: other.to_owned(),
            });
        }
    };

    Ok(Routed::Carousel { slot, event })
}

fn parse_setting(line: usize, fields: &mut SplitWhitespace<'_>) -> Result<Routed, ScriptError> {
    let name = fields.next().ok_or(ScriptError::MissingField {
        line,
        field: "setting",
    })?;
    if name != "reduce-motion" {
        return Err(ScriptError::UnknownEvent {
            line,
            event: name.to_owned(),
        });
    }

    match fields.next() {
        Some("on") => Ok(Routed::ReducedMotion(true)),
        Some("off") => Ok(Routed::ReducedMotion(false)),
        Some(_) => Err(ScriptError::InvalidArgument { line }),
        None => Err(ScriptError::MissingField {
            line,
            field: "on/off",
        }),
    }
}

fn parse_arg<T: std::str::FromStr>(
    line: usize,
    fields: &mut SplitWhitespace<'_>,
    field: &'static str,
) -> Result<T, ScriptError> {
    fields
        .next()
        .ok_or(ScriptError::MissingField { line, field })?
        .parse()
        .map_err(|_| ScriptError::InvalidArgument { line })
}

/// Replays a [`Script`] against the host clock.
#[derive(Clone, Debug)]
pub struct ScriptedInput {
    events: Vec<ScriptedEvent>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(script: Script) -> Self {
        Self {
            events: script.events,
            cursor: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    pub fn next_at_ms(&self) -> Option<u64> {
        self.events.get(self.cursor).map(|event| event.at_ms)
    }
}

impl InputProvider for ScriptedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self, now_ms: u64) -> Result<Option<Routed>, Self::Error> {
        let Some(event) = self.events.get(self.cursor) else {
            return Ok(None);
        };
        if event.at_ms > now_ms {
            return Ok(None);
        }
        self.cursor += 1;
        Ok(Some(event.routed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAROUSELS: [&str; 3] = ["focus", "portfolio", "gallery"];
    const ANCHORS: [&str; 2] = ["about", "contact"];
    const TARGETS: Targets<'static> = Targets::new(&CAROUSELS, &ANCHORS);

    #[test]
    fn parses_every_event_kind() {
        let text = "\
# showcase run
0 portfolio mount
100 portfolio enter   # hover
150 portfolio goto 3
200 portfolio touchstart 300.5
210 portfolio touchend 240
220 gallery right
230 gallery project 2
240 scroll 720
245 nav contact
250 settings reduce-motion on
";
        let script = Script::parse(text, &TARGETS).unwrap();
        let routed: Vec<Routed> = script.events().iter().map(|event| event.routed).collect();

        assert_eq!(
            routed,
            vec![
                Routed::Carousel {
                    slot: 1,
                    event: InputEvent::Mount
                },
                Routed::Carousel {
                    slot: 1,
                    event: InputEvent::PointerEnter
                },
                Routed::Carousel {
                    slot: 1,
                    event: InputEvent::GoTo(3)
                },
                Routed::Carousel {
                    slot: 1,
                    event: InputEvent::TouchStart { x: 300.5 }
                },
                Routed::Carousel {
                    slot: 1,
                    event: InputEvent::TouchEnd { x: 240.0 }
                },
                Routed::Carousel {
                    slot: 2,
                    event: InputEvent::Key(Key::ArrowRight)
                },
                Routed::Collection {
                    slot: 2,
                    collection: 2
                },
                Routed::Scroll { offset_px: 720.0 },
                Routed::Anchor { section: 1 },
                Routed::ReducedMotion(true),
            ]
        );
        assert_eq!(script.end_ms(), 250);
    }

    #[test]
    fn reports_line_numbers() {
        let text = "0 focus mount\n\n12x focus next\n";
        let err = Script::parse(text, &TARGETS).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidTime { line: 3 }));
        assert_eq!(err.to_string(), "line 3: invalid timestamp");

        let err = Script::parse("5 hero next", &TARGETS).unwrap_err();
        assert!(matches!(err, ScriptError::UnknownTarget { line: 1, .. }));

        let err = Script::parse("5 focus jump", &TARGETS).unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown event `jump`");

        let err = Script::parse("5 focus goto", &TARGETS).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::MissingField {
                line: 1,
                field: "index"
            }
        ));

        let err = Script::parse("5 focus next now", &TARGETS).unwrap_err();
        assert!(matches!(err, ScriptError::TrailingInput { line: 1 }));

        let err = Script::parse("5 nav pricing", &TARGETS).unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown target `pricing`");

        let err = Script::parse("5 nav", &TARGETS).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::MissingField {
                line: 1,
                field: "anchor"
            }
        ));

        let err = Script::parse("5 settings reduce-motion maybe", &TARGETS).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidArgument { line: 1 }));
    }

    #[test]
    fn equal_timestamps_keep_file_order() {
        let text = "200 focus next\n100 focus prev\n200 focus mount\n";
        let script = Script::parse(text, &TARGETS).unwrap();
        let at: Vec<u64> = script.events().iter().map(|event| event.at_ms).collect();
        assert_eq!(at, vec![100, 200, 200]);
        assert_eq!(
            script.events()[2].routed,
            Routed::Carousel {
                slot: 0,
                event: InputEvent::Mount
            }
        );
    }

    #[test]
    fn scripted_input_releases_events_when_due() {
        let script = Script::parse("0 focus mount\n500 focus enter\n", &TARGETS).unwrap();
        let mut input = ScriptedInput::new(script);

        assert!(matches!(input.poll_event(0), Ok(Some(_))));
        assert!(matches!(input.poll_event(0), Ok(None)));
        assert_eq!(input.next_at_ms(), Some(500));
        assert!(matches!(input.poll_event(499), Ok(None)));
        assert!(matches!(input.poll_event(900), Ok(Some(_))));
        assert!(input.is_finished());
        assert!(matches!(input.poll_event(10_000), Ok(None)));
    }

    #[test]
    fn load_reads_script_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.script");
        fs::write(&path, "0 gallery lightbox\n10 gallery escape\n").unwrap();

        let script = Script::load(&path, &TARGETS).unwrap();
        assert_eq!(script.len(), 2);

        let missing = Script::load(&dir.path().join("missing.script"), &TARGETS);
        assert!(matches!(missing, Err(ScriptError::Io(_))));
    }
}
