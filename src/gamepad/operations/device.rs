// GamepadDevice: an open evdev controller and its state reads (I/O)

use std::path::Path;

use evdev::{AbsoluteAxisCode, Device, KeyCode};

use crate::error::{DeckError, Result};
use crate::gamepad::pure::{normalize_axis, raw_snapshot, standard_snapshot, ControllerLayout};
use crate::gamepad::types::{ActionEvent, ControllerId, GamepadSnapshot, Mapping};

/// Events drained per read before we stop counting
const MAX_EVENTS_PER_POLL: usize = 256;

pub struct GamepadDevice {
    path: String,
    dev: Device,
    id: ControllerId,
    name: String,
    index: usize,
    layout: &'static dyn ControllerLayout,
    buttons: Vec<KeyCode>,
    axes: Vec<AbsoluteAxisCode>,
}

impl GamepadDevice {
    /// Wrap an already opened, non-blocking device. The layout is fixed for the
    /// device's lifetime.
    pub fn new(path: String, dev: Device, index: usize, layout: &'static dyn ControllerLayout) -> Self {
        let id = ControllerId::new(dev.input_id().vendor(), dev.input_id().product());
        let name = dev.name().unwrap_or("").to_string();
        let buttons = dev
            .supported_keys()
            .map(|keys| keys.iter().collect())
            .unwrap_or_default();
        let axes = dev
            .supported_absolute_axes()
            .map(|axes| axes.iter().collect())
            .unwrap_or_default();

        Self {
            path,
            dev,
            id,
            name,
            index,
            layout,
            buttons,
            axes,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable name, e.g. "Xbox Controller" or the evdev name
    pub fn display_name(&self) -> String {
        let prefix = self.id.type_prefix();
        if !prefix.is_empty() {
            return format!("{} Controller", prefix);
        }
        if self.name.is_empty() {
            return format!("Controller {}", self.id);
        }
        self.name.clone()
    }

    /// Read current button/axis state in the ordering this device's layout expects
    pub fn snapshot(&mut self) -> Result<GamepadSnapshot> {
        // Quick check: if device node is gone, stop reading
        if !Path::new(&self.path).exists() {
            return Err(DeckError::DeviceGone(self.path.clone()));
        }

        self.drain_events()?;

        let keys = self.dev.get_key_state().map_err(|e| self.read_error(e))?;
        let abs = self.dev.get_abs_state().map_err(|e| self.read_error(e))?;

        let is_down = |code: KeyCode| keys.contains(code);
        let axis = |code: AbsoluteAxisCode| {
            if !self.axes.contains(&code) {
                return None;
            }
            abs.get(code.0 as usize)
                .map(|info| normalize_axis(info.value, info.minimum, info.maximum))
        };

        let (buttons, axes) = match self.layout.mapping() {
            Mapping::Standard => standard_snapshot(is_down, axis),
            Mapping::Raw => raw_snapshot(&self.buttons, &self.axes, is_down, axis),
        };

        Ok(GamepadSnapshot {
            controller_index: self.index,
            id: self.id,
            buttons,
            axes,
        })
    }

    /// Snapshot and decode in one step
    pub fn decode(&mut self) -> Result<Vec<ActionEvent>> {
        let snapshot = self.snapshot()?;
        let mut events = Vec::with_capacity(16);
        self.layout.decode(
            &snapshot.buttons,
            &snapshot.axes,
            snapshot.controller_index,
            &mut |action, pressed, controller_index| {
                events.push(ActionEvent {
                    action,
                    pressed,
                    controller_index,
                })
            },
        );
        Ok(events)
    }

    /// Keep the kernel queue empty; state is read via ioctls, but a
    /// disconnect only surfaces as ENODEV on read.
    fn drain_events(&mut self) -> Result<()> {
        match self.dev.fetch_events() {
            Ok(events) => {
                let count = events.take(MAX_EVENTS_PER_POLL).count();
                if count == MAX_EVENTS_PER_POLL {
                    tracing::trace!("evdev: {} event queue saturated", self.path);
                }
                Ok(())
            }
            Err(e) if e.raw_os_error() == Some(libc::ENODEV) => {
                Err(DeckError::DeviceGone(self.path.clone()))
            }
            // WouldBlock: nothing queued
            Err(_) => Ok(()),
        }
    }

    fn read_error(&self, e: std::io::Error) -> DeckError {
        if e.raw_os_error() == Some(libc::ENODEV) {
            DeckError::DeviceGone(self.path.clone())
        } else {
            DeckError::Io(e)
        }
    }
}
