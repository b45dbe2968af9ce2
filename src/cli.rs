use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ArrowKeyPolicy, DeckConfig};

/// Deck Revealed: a controller-first game library shell
#[derive(Parser, Debug, Clone)]
#[command(name = "deck-revealed")]
#[command(version)]
#[command(about = "Controller-first game library shell", long_about = None)]
pub struct Cli {
    /// Start the GUI in fullscreen mode
    #[arg(long, default_value_t = false)]
    pub fullscreen: bool,

    /// Settings file to use instead of the one under the XDG config dir
    #[arg(long, value_name = "FILE", env = "DECK_REVEALED_CONFIG")]
    pub config: Option<PathBuf>,

    /// When arrow keys move focus. Overrides the settings file.
    #[arg(long, value_enum)]
    pub arrow_keys: Option<ArrowKeysArg>,

    /// Do not open gamepads or listen for hotplug events
    #[arg(long, default_value_t = false)]
    pub no_gamepad: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write the effective settings to the settings file and exit
    #[arg(long, default_value_t = false)]
    pub write_default_config: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKeysArg {
    GamepadOnly,
    AnyMode,
}

impl From<ArrowKeysArg> for ArrowKeyPolicy {
    fn from(arg: ArrowKeysArg) -> Self {
        match arg {
            ArrowKeysArg::GamepadOnly => ArrowKeyPolicy::GamepadOnly,
            ArrowKeysArg::AnyMode => ArrowKeyPolicy::AnyMode,
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply command line overrides on top of the loaded settings
    pub fn apply_to(&self, cfg: &mut DeckConfig) {
        if self.fullscreen {
            cfg.fullscreen = true;
        }
        if let Some(arrow_keys) = self.arrow_keys {
            cfg.arrow_keys = arrow_keys.into();
        }
    }
}
