//! Static content and per-carousel tuning of the folio site.

use folio_core::{carousel::CarouselConfig, render::Slide, scroll_spy::Section};

pub(super) struct CarouselSpec {
    pub(super) name: &'static str,
    pub(super) slides: &'static [Slide<'static>],
    pub(super) config: CarouselConfig,
    /// Alternative collections selectable with `Routed::Collection`.
    pub(super) collections: &'static [&'static [Slide<'static>]],
}

static FOCUS_SCENES: [Slide<'static>; 4] = [
    Slide::new(
        "/assets/images/focus/focus-rwanda-context-ai.png",
        "Rwanda-first AI infrastructure in practice",
    ),
    Slide::new(
        "/assets/images/focus/focus-research-signals.png",
        "Research-driven decisions with measurable signals",
    ),
    Slide::new(
        "/assets/images/focus/focus-language-culture-systems.png",
        "Language and culture-aware system design",
    ),
    Slide::new(
        "/assets/images/focus/focus-entrepreneurial-execution.png",
        "Entrepreneurial execution over time",
    ),
];

static ATAS_IMAGES: [Slide<'static>; 3] = [
    Slide::new("/assets/images/atas/atas-mission.png", "Rwanda-first AI initiatives"),
    Slide::new("/assets/images/atas/atas-programs.png", "Data-informed systems"),
    Slide::new("/assets/images/atas/atas-impact.png", "Cross-functional execution"),
];

static PORTFOLIO_PROJECTS: [Slide<'static>; 3] = [
    Slide::new("/assets/images/logo/academiaplus-logo.png", "AcademiaPlus"),
    Slide::new("/assets/images/logo/edubridge-logo.png", "EduBridge"),
    Slide::new("/assets/images/logo/kinyarwanda-sts-logo.png", "Kinyarwanda TTS"),
];

static ACADEMIAPLUS_GALLERY: [Slide<'static>; 3] = [
    Slide::new(
        "/assets/images/projects/academiaplus/academiaplus-01.png",
        "AI-powered classroom dashboard for teacher workflows",
    ),
    Slide::new(
        "/assets/images/projects/academiaplus/academiaplus-02.png",
        "Adaptive quiz flow for personalized assessment",
    ),
    Slide::new(
        "/assets/images/projects/academiaplus/academiaplus-03.png",
        "Student analytics view for learning progress tracking",
    ),
];

static EDUBRIDGE_GALLERY: [Slide<'static>; 3] = [
    Slide::new(
        "/assets/images/projects/edubridge/edubridge-01.png",
        "Dropout-risk monitoring panel for school teams",
    ),
    Slide::new(
        "/assets/images/projects/edubridge/edubridge-02.png",
        "Intervention planning timeline with risk segmentation",
    ),
    Slide::new(
        "/assets/images/projects/edubridge/edubridge-03.png",
        "Predictive trend insights for proactive student support",
    ),
];

static KINYARWANDA_TTS_GALLERY: [Slide<'static>; 3] = [
    Slide::new(
        "/assets/images/projects/kinyarwanda-tss/kinyarwanda-tss-01.png",
        "Speech dataset curation workflow for Kinyarwanda",
    ),
    Slide::new(
        "/assets/images/projects/kinyarwanda-tss/kinyarwanda-tss-02.png",
        "Waveform and phoneme alignment during model tuning",
    ),
    Slide::new(
        "/assets/images/projects/kinyarwanda-tss/kinyarwanda-tss-03.png",
        "Voice output review for natural pronunciation quality",
    ),
];

static PROJECT_GALLERIES: [&[Slide<'static>]; 3] = [
    &ACADEMIAPLUS_GALLERY,
    &EDUBRIDGE_GALLERY,
    &KINYARWANDA_TTS_GALLERY,
];

pub(super) const NAV_ITEMS: [&str; 5] = ["about", "skills", "company", "blog", "contact"];
pub(super) const INITIAL_SECTION: &str = "about";
pub(super) const NAV_LOOKAHEAD_PX: f32 = 150.0;
/// Height of the fixed header that anchor jumps leave room for.
pub(super) const NAV_HEADER_OFFSET_PX: f32 = 80.0;

/// Section geometry of the home page at the reference viewport.
pub(super) const SECTIONS: [Section<'static>; 5] = [
    Section::new("about", 0.0, 900.0),
    Section::new("skills", 900.0, 700.0),
    Section::new("company", 1_600.0, 800.0),
    Section::new("blog", 2_400.0, 900.0),
    Section::new("contact", 3_300.0, 700.0),
];

const HERO_FOCUS_MS: u32 = 5_200;
const ATAS_SLIDER_MS: u32 = 5_400;
const PORTFOLIO_MS: u32 = 8_000;
const PROJECT_STRIP_MS: u32 = 4_300;
const PROJECT_GALLERY_MS: u32 = 4_200;
const ATAS_DETAIL_MS: u32 = 4_600;
const COUNTDOWN_TICK_MS: u32 = 100;
const PORTFOLIO_PROJECTS_PER_VIEW: u16 = 2;

const PORTFOLIO_SWIPE_PX: f32 = 50.0;
const GALLERY_SWIPE_PX: f32 = 45.0;

/// Every autoplaying carousel counts down in 100 ms steps, so a hover or a manual move
/// loses at most one step of the dwell period.
pub(super) fn carousels() -> [CarouselSpec; 6] {
    [
        CarouselSpec {
            name: "focus",
            slides: &FOCUS_SCENES,
            config: CarouselConfig::default().with_autoplay(HERO_FOCUS_MS, COUNTDOWN_TICK_MS),
            collections: &[],
        },
        CarouselSpec {
            name: "atas",
            slides: &ATAS_IMAGES,
            config: CarouselConfig::default()
                .with_autoplay(ATAS_SLIDER_MS, COUNTDOWN_TICK_MS)
                .with_swipe_threshold(GALLERY_SWIPE_PX)
                .with_countdown_badge(true),
            collections: &[],
        },
        CarouselSpec {
            name: "portfolio",
            slides: &PORTFOLIO_PROJECTS,
            config: CarouselConfig::default()
                .with_autoplay(PORTFOLIO_MS, COUNTDOWN_TICK_MS)
                .with_swipe_threshold(PORTFOLIO_SWIPE_PX)
                .with_countdown_badge(true)
                .with_slides_per_view(PORTFOLIO_PROJECTS_PER_VIEW),
            collections: &[],
        },
        CarouselSpec {
            name: "strip",
            slides: &ACADEMIAPLUS_GALLERY,
            config: CarouselConfig::default().with_autoplay(PROJECT_STRIP_MS, COUNTDOWN_TICK_MS),
            collections: &PROJECT_GALLERIES,
        },
        CarouselSpec {
            name: "gallery",
            slides: &ACADEMIAPLUS_GALLERY,
            config: CarouselConfig::default()
                .with_autoplay(PROJECT_GALLERY_MS, COUNTDOWN_TICK_MS)
                .with_swipe_threshold(GALLERY_SWIPE_PX)
                .with_keyboard_navigation(true)
                .with_neighbour_links(true),
            collections: &PROJECT_GALLERIES,
        },
        CarouselSpec {
            name: "atas-detail",
            slides: &ATAS_IMAGES,
            config: CarouselConfig::default().with_autoplay(ATAS_DETAIL_MS, COUNTDOWN_TICK_MS),
            collections: &[],
        },
    ]
}

/// Used when no script path is given on the command line.
pub(super) const DEMO_SCRIPT: &str = "\
# home page
0      focus        mount
0      atas         mount
0      portfolio    mount
2600   focus        enter
7000   focus        leave
9000   portfolio    touchstart 320
9120   portfolio    touchend   250
12000  scroll       400
14000  scroll       1500
15000  nav          contact
16000  atas         goto 2
# project detail page
18000  focus        unmount
18000  atas         unmount
18000  portfolio    unmount
18000  gallery      mount
19000  gallery      lightbox
20000  gallery      right
21000  gallery      escape
23000  gallery      project 1
25000  gallery      autoplay
27000  settings     reduce-motion on
29000  gallery      next
30000  gallery      unmount
";
