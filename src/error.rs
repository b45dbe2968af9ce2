// Error types for everything around the focus core: settings I/O, devices, UI start-up

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode settings: {0}")]
    ConfigEncode(#[from] serde_json::Error),

    #[error("Failed to open {path}: {source}")]
    DeviceOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Device disconnected: {0}")]
    DeviceGone(String),

    #[error("udev monitor unavailable: {0}")]
    Monitor(#[source] std::io::Error),

    #[error("UI error: {0}")]
    Ui(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;

impl From<eframe::Error> for DeckError {
    fn from(e: eframe::Error) -> Self {
        DeckError::Ui(e.to_string())
    }
}
