use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| env::var_os("HOME").map(PathBuf::from).unwrap_or_default());

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Some(xdg_config_home) = env::var_os("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config_home).join("deck-revealed");
    }
    PATH_HOME.join(".config/deck-revealed")
});

pub static PATH_SETTINGS: LazyLock<PathBuf> = LazyLock::new(|| PATH_CONFIG.join("settings.json"));
