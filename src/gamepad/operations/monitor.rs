// Device hotplug monitoring via udev

use std::os::unix::io::AsRawFd;

use crate::error::{DeckError, Result};

/// Event types for device hotplug
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Added(String),   // Device path added (e.g., "/dev/input/event5")
    Removed(String), // Device path removed
}

/// Monitors for input device connect/disconnect events via udev
pub struct DeviceMonitor {
    socket: udev::MonitorSocket,
}

impl DeviceMonitor {
    /// Create a new device monitor watching for input device events
    pub fn new() -> Result<Self> {
        let socket = udev::MonitorBuilder::new()
            .and_then(|b| b.match_subsystem("input"))
            .and_then(|b| b.listen())
            .map_err(DeckError::Monitor)?;

        // Set non-blocking mode using libc
        unsafe {
            let fd = socket.as_raw_fd();
            let flags = libc::fcntl(fd, libc::F_GETFL);
            libc::fcntl(fd, libc::F_SETFL, flags | libc::O_NONBLOCK);
        }

        Ok(Self { socket })
    }

    /// Poll for device events (non-blocking)
    pub fn poll_events(&mut self) -> Vec<DeviceEvent> {
        let mut events = Vec::new();

        for event in self.socket.iter() {
            // Only "event" nodes carry evdev state (not js*, mouse*)
            let Some(devnode) = event.devnode() else {
                continue;
            };
            let path = devnode.to_string_lossy().to_string();
            if !is_event_node(&path) {
                continue;
            }
            match event.event_type() {
                udev::EventType::Add => events.push(DeviceEvent::Added(path)),
                udev::EventType::Remove => events.push(DeviceEvent::Removed(path)),
                _ => {}
            }
        }

        events
    }
}

fn is_event_node(path: &str) -> bool {
    path.starts_with("/dev/input/event")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_event_nodes_are_tracked() {
        assert!(is_event_node("/dev/input/event5"));
        assert!(!is_event_node("/dev/input/js0"));
        assert!(!is_event_node("/dev/input/mouse1"));
    }
}
