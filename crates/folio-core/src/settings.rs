//! Persisted user settings abstraction.

use crate::carousel::CarouselConfig;

/// User preferences that should survive restarts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PersistedSettings {
    pub reduced_motion: bool,
    pub countdown_badges: bool,
    /// Overrides every carousel's swipe threshold when set.
    pub swipe_threshold_px: Option<u16>,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistedSettings {
    pub const fn new() -> Self {
        Self {
            reduced_motion: false,
            countdown_badges: true,
            swipe_threshold_px: None,
        }
    }

    pub const fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub const fn with_countdown_badges(mut self, countdown_badges: bool) -> Self {
        self.countdown_badges = countdown_badges;
        self
    }

    pub const fn with_swipe_threshold(mut self, swipe_threshold_px: Option<u16>) -> Self {
        self.swipe_threshold_px = swipe_threshold_px;
        self
    }

    /// Folds the user's preferences into a carousel's site defaults.
    pub fn apply(&self, mut config: CarouselConfig) -> CarouselConfig {
        if self.reduced_motion {
            config = config.reduced_motion();
        }
        if !self.countdown_badges {
            config.countdown_badge = false;
        }
        if let (Some(px), Some(_)) = (self.swipe_threshold_px, config.swipe_threshold_px) {
            config.swipe_threshold_px = Some(px as f32);
        }
        config
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error>;
    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_config() -> CarouselConfig {
        CarouselConfig::default()
            .with_autoplay(8_000, 100)
            .with_swipe_threshold(50.0)
            .with_countdown_badge(true)
    }

    #[test]
    fn defaults_leave_site_config_untouched() {
        assert_eq!(PersistedSettings::default().apply(site_config()), site_config());
    }

    #[test]
    fn reduced_motion_disables_animations() {
        let config = PersistedSettings::new()
            .with_reduced_motion(true)
            .apply(site_config());
        assert!(!config.animations_enabled);
        assert_eq!(config.autoplay_ms, Some(8_000));
    }

    #[test]
    fn hidden_badges_and_swipe_override() {
        let settings = PersistedSettings::new()
            .with_countdown_badges(false)
            .with_swipe_threshold(Some(70));

        let config = settings.apply(site_config());
        assert!(!config.countdown_badge);
        assert_eq!(config.swipe_threshold_px, Some(70.0));

        // Carousels without touch support stay without it.
        let hero = settings.apply(CarouselConfig::default());
        assert_eq!(hero.swipe_threshold_px, None);
    }
}
