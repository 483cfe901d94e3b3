use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use folio_core::settings::{PersistedSettings, SettingsStore};
use log::debug;

const SETTINGS_MAGIC: u32 = 0x314D_4C46; // "FLM1"
const SETTINGS_VERSION_V1: u8 = 1;
const SETTINGS_VERSION: u8 = SETTINGS_VERSION_V1;
pub const SETTINGS_RECORD_LEN: usize = 16;
const CHECKSUM_OFFSET: usize = SETTINGS_RECORD_LEN - 4;

const FLAG_REDUCED_MOTION: u8 = 0x01;
const FLAG_COUNTDOWN_BADGES: u8 = 0x02;
const KNOWN_FLAGS: u8 = FLAG_REDUCED_MOTION | FLAG_COUNTDOWN_BADGES;

#[derive(Debug)]
pub enum FileSettingsError {
    Io(io::Error),
    Truncated(usize),
    Corrupted,
}

impl fmt::Display for FileSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings file i/o failed: {err}"),
            Self::Truncated(len) => write!(
                f,
                "settings record truncated: {len} of {SETTINGS_RECORD_LEN} bytes"
            ),
            Self::Corrupted => f.write_str("settings record corrupted"),
        }
    }
}

impl From<io::Error> for FileSettingsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Settings persisted as a single fixed-size record on disk.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    type Error = FileSettingsError;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error> {
        let buf = match fs::read(&self.path) {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        decode_record(&buf)
    }

    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error> {
        let record = encode_record(settings);
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write next to the target and rename so a crash never leaves half a record.
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, record)?;
        fs::rename(&staging, &self.path)?;
        debug!("settings: saved {}", self.path.display());
        Ok(())
    }
}

pub fn encode_record(settings: &PersistedSettings) -> [u8; SETTINGS_RECORD_LEN] {
    let mut buf = [0u8; SETTINGS_RECORD_LEN];
    buf[0..4].copy_from_slice(&SETTINGS_MAGIC.to_le_bytes());
    buf[4] = SETTINGS_VERSION;

    let mut flags = 0u8;
    if settings.reduced_motion {
        flags |= FLAG_REDUCED_MOTION;
    }
    if settings.countdown_badges {
        flags |= FLAG_COUNTDOWN_BADGES;
    }
    buf[5] = flags;
    buf[6..8].copy_from_slice(&settings.swipe_threshold_px.unwrap_or(0).to_le_bytes());

    let checksum = checksum32(&buf[..CHECKSUM_OFFSET]);
    buf[CHECKSUM_OFFSET..].copy_from_slice(&checksum.to_le_bytes());
    buf
}

/// Empty input, a foreign magic, or an unknown version decode to `Ok(None)` so the
/// caller falls back to defaults. A damaged record of our own format is an error.
pub fn decode_record(buf: &[u8]) -> Result<Option<PersistedSettings>, FileSettingsError> {
    if buf.is_empty() {
        return Ok(None);
    }
    if buf.len() < SETTINGS_RECORD_LEN {
        return Err(FileSettingsError::Truncated(buf.len()));
    }

    let magic = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    if magic != SETTINGS_MAGIC {
        return Ok(None);
    }

    match buf[4] {
        SETTINGS_VERSION_V1 => {
            let expected_checksum = u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]);
            if checksum32(&buf[..CHECKSUM_OFFSET]) != expected_checksum {
                return Err(FileSettingsError::Corrupted);
            }

            let flags = buf[5];
            if flags & !KNOWN_FLAGS != 0 {
                return Err(FileSettingsError::Corrupted);
            }

            let swipe = u16::from_le_bytes([buf[6], buf[7]]);
            Ok(Some(
                PersistedSettings::new()
                    .with_reduced_motion(flags & FLAG_REDUCED_MOTION != 0)
                    .with_countdown_badges(flags & FLAG_COUNTDOWN_BADGES != 0)
                    .with_swipe_threshold((swipe != 0).then_some(swipe)),
            ))
        }
        _ => Ok(None),
    }
}

/// FNV-1a.
fn checksum32(bytes: &[u8]) -> u32 {
    let mut hash = 0x811C9DC5u32;
    for b in bytes {
        hash ^= *b as u32;
        hash = hash.wrapping_mul(16777619);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSettingsStore::new(dir.path().join("settings.bin"));
        assert!(matches!(store.load(), Ok(None)));
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSettingsStore::new(dir.path().join("nested/settings.bin"));
        let settings = PersistedSettings::new()
            .with_reduced_motion(true)
            .with_countdown_badges(false)
            .with_swipe_threshold(Some(60));

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), Some(settings));
        assert!(!dir.path().join("nested/settings.tmp").exists());
    }

    #[test]
    fn record_layout_is_stable() {
        let record = encode_record(&PersistedSettings::new());
        assert_eq!(&record[0..4], b"FLM1");
        assert_eq!(record[4], 1);
        assert_eq!(record[5], FLAG_COUNTDOWN_BADGES);
        assert_eq!(&record[6..12], &[0u8; 6]);
        assert_eq!(decode_record(&record).unwrap(), Some(PersistedSettings::new()));
    }

    #[test]
    fn flipped_checksum_is_rejected() {
        let mut record = encode_record(&PersistedSettings::new().with_reduced_motion(true));
        record[15] ^= 0x40;
        assert!(matches!(
            decode_record(&record),
            Err(FileSettingsError::Corrupted)
        ));
    }

    #[test]
    fn flipped_payload_is_rejected() {
        let mut record = encode_record(&PersistedSettings::new());
        record[5] ^= FLAG_REDUCED_MOTION;
        assert!(matches!(
            decode_record(&record),
            Err(FileSettingsError::Corrupted)
        ));
    }

    #[test]
    fn foreign_or_future_records_fall_back_to_defaults() {
        let mut record = encode_record(&PersistedSettings::new());
        record[4] = 9;
        assert!(matches!(decode_record(&record), Ok(None)));

        assert!(matches!(decode_record(b"RDS1 not ours at all"), Ok(None)));
        assert!(matches!(decode_record(&[]), Ok(None)));
        assert!(matches!(
            decode_record(&record[..7]),
            Err(FileSettingsError::Truncated(7))
        ));
    }
}
