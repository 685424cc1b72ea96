use std::fs;
use std::path::{Path, PathBuf};

use assistant_core::Theme;
use assistant_engine::AtomicFileWriter;
use assistant_logging::{assistant_info, assistant_warn};
use chrono::Utc;
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = ".assistant_prefs.ron";

/// On-disk record for the preference store. `theme` holds the canonical
/// store value (`light` / `dark`).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    theme: String,
    saved_utc: String,
}

pub(crate) fn state_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Reads the persisted theme preference. A missing, unreadable, or
/// unrecognized record yields `None`; the caller falls back to the
/// default and the session keeps working in memory.
pub(crate) fn load_theme_preference(state_dir: &Path) -> Option<Theme> {
    let path = state_dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            assistant_warn!("Failed to read theme preference from {:?}: {}", path, err);
            return None;
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            assistant_warn!("Failed to parse theme preference from {:?}: {}", path, err);
            return None;
        }
    };

    match Theme::from_name(&prefs.theme) {
        Some(theme) => {
            assistant_info!("Loaded theme preference {:?} from {:?}", prefs.theme, path);
            Some(theme)
        }
        None => {
            assistant_warn!("Unknown theme value {:?} in {:?}", prefs.theme, path);
            None
        }
    }
}

/// Writes the preference record. Failures are logged and swallowed; the
/// in-memory preference stays authoritative for the session.
pub(crate) fn save_theme_preference(state_dir: &Path, theme: Theme) {
    let prefs = PersistedPrefs {
        theme: theme.name().to_string(),
        saved_utc: Utc::now().to_rfc3339(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            assistant_warn!("Failed to serialize theme preference: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    if let Err(err) = writer.write(PREFS_FILENAME, &content) {
        assistant_warn!(
            "Failed to write theme preference to {:?}: {}",
            state_dir,
            err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn toggled_theme_survives_reload() {
        let temp = TempDir::new().unwrap();

        save_theme_preference(temp.path(), Theme::Dark);

        // Simulated re-resolution after a restart.
        assert_eq!(load_theme_preference(temp.path()), Some(Theme::Dark));
    }

    #[test]
    fn missing_store_yields_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_theme_preference(temp.path()), None);
    }

    #[test]
    fn corrupt_store_yields_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PREFS_FILENAME), "not ron at all {{{").unwrap();

        assert_eq!(load_theme_preference(temp.path()), None);
    }

    #[test]
    fn unknown_theme_value_yields_none() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PREFS_FILENAME),
            "(theme: \"solarized\", saved_utc: \"2026-01-01T00:00:00Z\")",
        )
        .unwrap();

        assert_eq!(load_theme_preference(temp.path()), None);
    }

    #[test]
    fn latest_write_wins() {
        let temp = TempDir::new().unwrap();

        save_theme_preference(temp.path(), Theme::Dark);
        save_theme_preference(temp.path(), Theme::Light);

        assert_eq!(load_theme_preference(temp.path()), Some(Theme::Light));
    }
}
