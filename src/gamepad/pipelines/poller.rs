//! Gamepad polling task
//!
//! Owns the open controllers, the udev hotplug socket and the presence poll.
//! Every UI frame calls [`GamepadPoller::tick`]; connection changes and the
//! decoded action levels of every controller come back in one [`PollOutput`].
//!
//! The task has an explicit lifetime: nothing is opened before
//! [`GamepadPoller::start`] and everything is released by
//! [`GamepadPoller::stop`], which also runs on drop.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::config::{DeckConfig, PadFilterType};
use crate::error::DeckError;
use crate::gamepad::operations::{
    open_gamepad, scan_gamepads, DeviceEvent, DeviceMonitor, GamepadDevice,
};
use crate::gamepad::pure::layout_for;
use crate::gamepad::types::{ActionEvent, ControllerId, LayoutKind};

/// Settings the poller needs from the config
#[derive(Debug, Clone)]
pub struct PollerSettings {
    pub filter: PadFilterType,
    /// How often the device list is re-enumerated to catch silent reconnects
    pub presence_interval: Duration,
    pub layout_overrides: HashMap<ControllerId, LayoutKind>,
    /// Listen for udev hotplug events in addition to the presence poll
    pub hotplug: bool,
}

impl PollerSettings {
    pub fn from_config(cfg: &DeckConfig) -> Self {
        Self {
            filter: cfg.pad_filter_type.clone(),
            presence_interval: Duration::from_millis(cfg.presence_poll_ms.max(100)),
            layout_overrides: cfg.layout_overrides(),
            hotplug: true,
        }
    }
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            filter: PadFilterType::NoSteamInput,
            presence_interval: Duration::from_secs(1),
            layout_overrides: HashMap::new(),
            hotplug: true,
        }
    }
}

/// Everything that happened during one tick
#[derive(Debug, Default)]
pub struct PollOutput {
    /// Controllers that appeared since the previous tick
    pub connected: Vec<(usize, ControllerId)>,
    /// Controllers already plugged in when polling started
    pub existing: Vec<(usize, ControllerId)>,
    pub disconnected: Vec<usize>,
    /// Level of every action for every connected controller
    pub actions: Vec<ActionEvent>,
}

/// Fixed-period schedule driven by the caller's clock
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    /// The first check is due immediately
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Returns true (and schedules the next run) when the period has elapsed
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now < next => false,
            _ => {
                self.next = Some(now + self.period);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.next = None;
    }
}

/// Smallest controller index not held by a connected device
pub fn lowest_free_index(used: impl IntoIterator<Item = usize>) -> usize {
    let used: HashSet<usize> = used.into_iter().collect();
    (0..).find(|i| !used.contains(i)).unwrap_or(used.len())
}

pub struct GamepadPoller {
    settings: PollerSettings,
    devices: Vec<GamepadDevice>,
    monitor: Option<DeviceMonitor>,
    presence: Interval,
    /// The first enumeration after start has run
    enumerated: bool,
    running: bool,
}

impl GamepadPoller {
    pub fn new(settings: PollerSettings) -> Self {
        let presence = Interval::new(settings.presence_interval);
        Self {
            settings,
            devices: Vec::new(),
            monitor: None,
            presence,
            enumerated: false,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn connected_count(&self) -> usize {
        self.devices.len()
    }

    /// Names of connected controllers, by controller index
    pub fn controller_names(&self) -> Vec<(usize, String)> {
        self.devices
            .iter()
            .map(|d| (d.index(), d.display_name()))
            .collect()
    }

    /// Begin polling. The first tick enumerates already-connected controllers.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        if self.settings.hotplug {
            match DeviceMonitor::new() {
                Ok(monitor) => self.monitor = Some(monitor),
                Err(e) => tracing::warn!("udev: {}; relying on presence poll", e),
            }
        }
        self.presence.reset();
        self.enumerated = false;
        self.running = true;
        tracing::debug!(
            "gamepad: poller started (presence every {:?})",
            self.settings.presence_interval
        );
    }

    /// Release every device and the hotplug socket
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.devices.clear();
        self.monitor = None;
        self.running = false;
        tracing::debug!("gamepad: poller stopped");
    }

    pub fn tick(&mut self, now: Instant) -> PollOutput {
        let mut out = PollOutput::default();
        if !self.running {
            return out;
        }

        self.apply_hotplug(&mut out);

        if self.presence.due(now) {
            let existing = !self.enumerated;
            self.poll_presence(&mut out, existing);
            self.enumerated = true;
        }

        let mut gone = Vec::new();
        for (pos, device) in self.devices.iter_mut().enumerate() {
            match device.decode() {
                Ok(actions) => out.actions.extend(actions),
                Err(DeckError::DeviceGone(path)) => {
                    tracing::info!("evdev: {} disconnected", path);
                    gone.push(pos);
                }
                Err(e) => tracing::warn!("evdev: read failed for {}: {}", device.path(), e),
            }
        }
        for pos in gone.into_iter().rev() {
            let device = self.devices.remove(pos);
            out.disconnected.push(device.index());
        }

        out
    }

    fn apply_hotplug(&mut self, out: &mut PollOutput) {
        let Some(monitor) = self.monitor.as_mut() else {
            return;
        };
        for event in monitor.poll_events() {
            match event {
                DeviceEvent::Added(path) => {
                    if self.devices.iter().any(|d| d.path() == path) {
                        continue;
                    }
                    match open_gamepad(&path, &self.settings.filter) {
                        Ok(Some((path, dev))) => self.add_device(path, dev, false, out),
                        Ok(None) => {}
                        // Permissions are often not applied yet; the presence poll retries
                        Err(e) => tracing::debug!("udev: {}", e),
                    }
                }
                DeviceEvent::Removed(path) => {
                    if let Some(pos) = self.devices.iter().position(|d| d.path() == path) {
                        let device = self.devices.remove(pos);
                        tracing::info!("udev: {} removed", path);
                        out.disconnected.push(device.index());
                    }
                }
            }
        }
    }

    fn poll_presence(&mut self, out: &mut PollOutput, existing: bool) {
        let known: HashSet<String> = self.devices.iter().map(|d| d.path().to_string()).collect();
        for (path, dev) in scan_gamepads(&self.settings.filter, &known) {
            self.add_device(path, dev, existing, out);
        }
    }

    fn add_device(&mut self, path: String, dev: evdev::Device, existing: bool, out: &mut PollOutput) {
        let index = lowest_free_index(self.devices.iter().map(|d| d.index()));
        let id = ControllerId::new(dev.input_id().vendor(), dev.input_id().product());
        let layout = layout_for(id, &self.settings.layout_overrides);
        let device = GamepadDevice::new(path, dev, index, layout);

        tracing::info!(
            "evdev: {} connected as controller {} ({}, {} layout)",
            device.path(),
            index,
            device.display_name(),
            layout.name()
        );

        if existing {
            out.existing.push((index, id));
        } else {
            out.connected.push((index, id));
        }
        self.devices.push(device);
    }
}

impl Drop for GamepadPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_due_immediately_then_waits() {
        let mut interval = Interval::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert!(interval.due(t0));
        assert!(!interval.due(t0 + Duration::from_millis(500)));
        assert!(interval.due(t0 + Duration::from_millis(1000)));
        assert!(!interval.due(t0 + Duration::from_millis(1500)));
    }

    #[test]
    fn interval_reset_makes_it_due() {
        let mut interval = Interval::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert!(interval.due(t0));
        interval.reset();
        assert!(interval.due(t0 + Duration::from_millis(10)));
    }

    #[test]
    fn lowest_free_index_fills_gaps() {
        assert_eq!(lowest_free_index([]), 0);
        assert_eq!(lowest_free_index([0, 1, 2]), 3);
        assert_eq!(lowest_free_index([0, 2]), 1);
        assert_eq!(lowest_free_index([1]), 0);
    }

    #[test]
    fn stopped_poller_reports_nothing() {
        let mut poller = GamepadPoller::new(PollerSettings {
            hotplug: false,
            ..PollerSettings::default()
        });
        let out = poller.tick(Instant::now());
        assert!(out.connected.is_empty());
        assert!(out.actions.is_empty());
        assert!(!poller.is_running());
    }

    #[test]
    fn start_stop_lifecycle() {
        let mut poller = GamepadPoller::new(PollerSettings {
            hotplug: false,
            ..PollerSettings::default()
        });
        poller.start();
        assert!(poller.is_running());
        poller.stop();
        assert!(!poller.is_running());
        assert_eq!(poller.connected_count(), 0);
    }
}
