use folio_core::settings::{PersistedSettings, SettingsStore};
use folio_host::storage::file_settings::FileSettingsStore;
use log::{info, warn};

use super::SETTINGS_SAVE_DEBOUNCE_MS;

pub(super) struct SettingsSyncState {
    last_saved: PersistedSettings,
    pending: Option<(PersistedSettings, u64)>,
}

impl SettingsSyncState {
    pub(super) fn new(initial: PersistedSettings) -> Self {
        Self {
            last_saved: initial,
            pending: None,
        }
    }

    pub(super) fn track_current(&mut self, current: PersistedSettings, now_ms: u64) {
        if current == self.last_saved {
            self.pending = None;
            return;
        }

        match self.pending.as_mut() {
            Some((pending, changed_at_ms)) => {
                if *pending != current {
                    *pending = current;
                    *changed_at_ms = now_ms;
                }
            }
            None => {
                self.pending = Some((current, now_ms));
            }
        }
    }

    pub(super) fn due_at_ms(&self) -> Option<u64> {
        self.pending
            .map(|(_, changed_at_ms)| changed_at_ms.saturating_add(SETTINGS_SAVE_DEBOUNCE_MS))
    }

    pub(super) fn flush_if_due(&mut self, store: Option<&mut FileSettingsStore>, now_ms: u64) {
        let Some((_, changed_at_ms)) = self.pending else {
            return;
        };

        if now_ms.saturating_sub(changed_at_ms) < SETTINGS_SAVE_DEBOUNCE_MS {
            return;
        }

        self.flush(store, now_ms);
    }

    /// Saves a pending change immediately, e.g. on shutdown.
    pub(super) fn flush(&mut self, store: Option<&mut FileSettingsStore>, now_ms: u64) {
        let Some((candidate, _)) = self.pending else {
            return;
        };

        match store {
            Some(store) => match store.save(&candidate) {
                Ok(()) => {
                    info!("settings: saved to {}", store.path().display());
                    self.last_saved = candidate;
                    self.pending = None;
                }
                Err(err) => {
                    warn!("settings: save failed: {err}; retrying later");
                    self.pending = Some((candidate, now_ms));
                }
            },
            None => {
                self.last_saved = candidate;
                self.pending = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_after_debounce_window() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSettingsStore::new(dir.path().join("settings.bin"));
        let mut sync = SettingsSyncState::new(PersistedSettings::new());
        let changed = PersistedSettings::new().with_reduced_motion(true);

        sync.track_current(changed, 1_000);
        assert_eq!(sync.due_at_ms(), Some(1_000 + SETTINGS_SAVE_DEBOUNCE_MS));
        sync.flush_if_due(Some(&mut store), 1_200);
        assert!(matches!(store.load(), Ok(None)));

        sync.flush_if_due(Some(&mut store), 1_000 + SETTINGS_SAVE_DEBOUNCE_MS);
        assert_eq!(store.load().unwrap(), Some(changed));
        assert_eq!(sync.due_at_ms(), None);
    }

    #[test]
    fn reverting_before_flush_cancels_save() {
        let mut sync = SettingsSyncState::new(PersistedSettings::new());
        sync.track_current(PersistedSettings::new().with_reduced_motion(true), 0);
        sync.track_current(PersistedSettings::new(), 10);
        assert_eq!(sync.due_at_ms(), None);
    }

    #[test]
    fn later_change_restarts_debounce() {
        let mut sync = SettingsSyncState::new(PersistedSettings::new());
        sync.track_current(PersistedSettings::new().with_reduced_motion(true), 0);
        sync.track_current(PersistedSettings::new().with_countdown_badges(false), 500);
        assert_eq!(sync.due_at_ms(), Some(500 + SETTINGS_SAVE_DEBOUNCE_MS));
    }
}
