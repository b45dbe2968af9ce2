// Gamepad discovery (I/O: evdev enumeration, device opening)

use std::collections::HashSet;

use evdev::Device;

use crate::config::PadFilterType;
use crate::error::{DeckError, Result};
use crate::gamepad::pure::{is_device_enabled, is_gamepad};

/// Enumerate /dev/input and return gamepads not already in `known`,
/// sorted by path. Devices that cannot be switched to non-blocking reads are skipped.
pub fn scan_gamepads(filter: &PadFilterType, known: &HashSet<String>) -> Vec<(String, Device)> {
    let mut pads: Vec<(String, Device)> = evdev::enumerate()
        .filter_map(|(path, dev)| {
            let path = path.to_string_lossy().to_string();
            if known.contains(&path) {
                return None;
            }
            accept_gamepad(&path, dev, filter)
        })
        .collect();
    pads.sort_by(|a, b| a.0.cmp(&b.0));
    pads
}

/// Open a single device by path, e.g. after a udev "add" event.
/// Returns Ok(None) for devices that are not gamepads or are filtered out.
/// Never sleeps: a device whose permissions are not settled yet is picked up
/// by the next presence poll.
pub fn open_gamepad(path: &str, filter: &PadFilterType) -> Result<Option<(String, Device)>> {
    let dev = Device::open(path).map_err(|source| DeckError::DeviceOpen {
        path: path.to_string(),
        source,
    })?;
    Ok(accept_gamepad(path, dev, filter))
}

fn accept_gamepad(path: &str, dev: Device, filter: &PadFilterType) -> Option<(String, Device)> {
    if !is_gamepad(dev.supported_keys()) {
        return None;
    }

    let vendor = dev.input_id().vendor();
    if !is_device_enabled(filter, vendor) {
        tracing::debug!("evdev: {} filtered out (vendor {:04x})", path, vendor);
        return None;
    }

    if let Err(e) = dev.set_nonblocking(true) {
        tracing::warn!("evdev: Failed to set non-blocking mode for {}: {}", path, e);
        return None;
    }

    Some((path.to_string(), dev))
}
