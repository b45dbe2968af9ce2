use crate::config::types::DeckConfig;
use crate::error::{DeckError, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read and parse the settings file
pub fn read_cfg(path: &Path) -> Result<DeckConfig> {
    let file = File::open(path)?;
    serde_json::from_reader::<_, DeckConfig>(BufReader::new(file)).map_err(|source| {
        DeckError::ConfigParse {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Load settings, falling back to defaults if the file is missing or invalid
pub fn load_cfg(path: &Path) -> DeckConfig {
    match read_cfg(path) {
        Ok(config) => {
            tracing::debug!("config: loaded {}", path.display());
            config
        }
        Err(DeckError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("config: {} not found, using defaults", path.display());
            DeckConfig::default()
        }
        Err(e) => {
            tracing::warn!("config: {}; using defaults", e);
            DeckConfig::default()
        }
    }
}

pub fn save_cfg(path: &Path, config: &DeckConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ArrowKeyPolicy, PadFilterType};
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_cfg(&dir.path().join("settings.json"));
        assert_eq!(cfg, DeckConfig::default());
    }

    #[test]
    fn invalid_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(read_cfg(&path), Err(DeckError::ConfigParse { .. })));
        assert_eq!(load_cfg(&path), DeckConfig::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let cfg = DeckConfig {
            arrow_keys: ArrowKeyPolicy::GamepadOnly,
            pad_filter_type: PadFilterType::All,
            presence_poll_ms: 2500,
            ..DeckConfig::default()
        };

        save_cfg(&path, &cfg).unwrap();
        assert_eq!(read_cfg(&path).unwrap(), cfg);
    }
}
