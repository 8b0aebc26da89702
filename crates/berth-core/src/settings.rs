use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User-facing settings, re-read from disk by the poller every cycle so
/// edits take effect within one polling interval.
///
/// A missing or corrupt file yields defaults; settings access never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Poll for debuggable processes at all.
    pub live_monitor: bool,
    /// Auto-attach to newly discovered processes (requires `live_monitor`).
    pub auto_attach: bool,
    /// Port used by `berth attach` when none is given.
    pub default_port: u16,
    /// Command template for the attach action. `{port}` and `{label}` are
    /// substituted before spawning.
    pub attach_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            live_monitor: cfg!(not(windows)),
            auto_attach: false,
            default_port: 5678,
            attach_command: String::new(),
        }
    }
}

impl Settings {
    /// Per-user settings file: `<config_dir>/berth/config.json`.
    pub fn default_path() -> PathBuf {
        if let Some(dir) = dirs::config_dir() {
            dir.join("berth").join("config.json")
        } else {
            PathBuf::from(".berth-config.json")
        }
    }

    /// Load settings from `path`. Any read or parse failure yields defaults.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Persist settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let s = Settings::load(&tmp.path().join("nope.json"));
        assert!(!s.auto_attach);
        assert_eq!(s.default_port, 5678);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let s = Settings::load(&path);
        assert_eq!(s.default_port, 5678);
    }

    #[test]
    fn save_and_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("berth").join("config.json");
        let s = Settings {
            auto_attach: true,
            default_port: 9229,
            ..Settings::default()
        };
        s.save(&path).unwrap();

        let back = Settings::load(&path);
        assert!(back.auto_attach);
        assert_eq!(back.default_port, 9229);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"auto_attach": true}"#).unwrap();
        let s = Settings::load(&path);
        assert!(s.auto_attach);
        assert_eq!(s.default_port, 5678);
    }
}
