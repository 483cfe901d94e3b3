use std::{env, path::PathBuf};

use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use folio_core::{
    input::InputProvider,
    settings::{PersistedSettings, SettingsStore},
};
use folio_host::{
    input::script::{Script, ScriptedInput, Targets},
    render::{TextFrame, text::TextRenderer},
    scheduler::IntervalScheduler,
    storage::file_settings::FileSettingsStore,
};
use log::{error, info, warn};

use settings_sync::SettingsSyncState;
use stage::Stage;

#[path = "main/settings_sync.rs"]
mod settings_sync;
#[path = "main/site.rs"]
mod site;
#[path = "main/stage.rs"]
mod stage;

const SETTINGS_PATH_ENV: &str = "FOLIO_SETTINGS";
const DEFAULT_SETTINGS_PATH: &str = "folio-settings.bin";
/// Set to any value to print slide image paths next to captions.
const SHOW_IMAGES_ENV: &str = "FOLIO_SHOW_IMAGES";
const SETTINGS_SAVE_DEBOUNCE_MS: u64 = 1_500;
/// Keeps running after the last scripted event so autoplay can be observed.
const RUN_TAIL_MS: u64 = 6_000;
const MAX_SLEEP_MS: u64 = 250;

const EXIT_OK: i32 = 0;
const EXIT_BAD_SCRIPT: i32 = 2;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
    info!("boot: folio starting");

    // The executor's task storage is fixed-size; keep the page state on the heap.
    let code = Box::pin(run()).await;
    std::process::exit(code);
}

async fn run() -> i32 {
    let script_path = env::args_os().nth(1).map(PathBuf::from);
    let settings_path = env::var_os(SETTINGS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

    let mut settings_store = Some(FileSettingsStore::new(settings_path));
    let mut settings = PersistedSettings::default();
    if let Some(store) = settings_store.as_mut() {
        match store.load() {
            Ok(Some(saved)) => {
                settings = saved;
                info!("settings restored from {}", store.path().display());
            }
            Ok(None) => {
                info!("no saved settings at {}", store.path().display());
            }
            Err(err) => {
                warn!("failed to read saved settings ({err}); using defaults");
            }
        }
    }
    info!(
        "settings: reduced_motion={} countdown_badges={} swipe_threshold_px={:?}",
        settings.reduced_motion, settings.countdown_badges, settings.swipe_threshold_px
    );

    let mut stage = Stage::new(site::carousels(), settings);
    let names = stage.names();
    let targets = Targets::new(&names, &site::NAV_ITEMS);
    let script = match script_path.as_deref() {
        Some(path) => {
            info!("script: loading {}", path.display());
            Script::load(path, &targets)
        }
        None => {
            info!("script: no path given; running the built-in demo");
            Script::parse(site::DEMO_SCRIPT, &targets)
        }
    };
    let script = match script {
        Ok(script) => script,
        Err(err) => {
            error!("script: {err}");
            return EXIT_BAD_SCRIPT;
        }
    };

    let end_ms = script.end_ms().saturating_add(RUN_TAIL_MS);
    info!(
        "script: {} events over {}ms; carousels={:?}",
        script.len(),
        script.end_ms(),
        names.as_slice()
    );

    let mut input = ScriptedInput::new(script);
    let mut scheduler = IntervalScheduler::new();
    let mut renderer = TextRenderer::new().with_images(env::var_os(SHOW_IMAGES_ENV).is_some());
    let mut frame = TextFrame::new();
    let mut settings_sync = SettingsSyncState::new(settings);

    let loop_start = Instant::now();
    stage.mount_navigation();

    loop {
        let now_ms = loop_start.elapsed().as_millis();

        loop {
            match input.poll_event(now_ms) {
                Ok(Some(routed)) => stage.dispatch(routed, &mut scheduler, now_ms),
                Ok(None) => break,
                Err(never) => match never {},
            }
        }

        for id in scheduler.due(now_ms) {
            stage.on_interval(id);
        }

        if stage.render_pending(&mut renderer, &mut frame) {
            for line in frame.lines() {
                info!("t={now_ms:>6} {line}");
            }
        }

        settings_sync.track_current(stage.settings(), now_ms);
        settings_sync.flush_if_due(settings_store.as_mut(), now_ms);

        if input.is_finished() && now_ms >= end_ms {
            break;
        }

        let wake_ms = [
            scheduler.next_deadline_ms(),
            input.next_at_ms(),
            settings_sync.due_at_ms(),
            Some(end_ms),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(end_ms);
        let sleep_ms = wake_ms
            .saturating_sub(loop_start.elapsed().as_millis())
            .clamp(1, MAX_SLEEP_MS);
        Timer::after_millis(sleep_ms).await;
    }

    let now_ms = loop_start.elapsed().as_millis();
    stage.unmount_all(&mut scheduler, now_ms);
    settings_sync.track_current(stage.settings(), now_ms);
    settings_sync.flush(settings_store.as_mut(), now_ms);
    info!("folio: finished after {}ms", now_ms);
    EXIT_OK
}
