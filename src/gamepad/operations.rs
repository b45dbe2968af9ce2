// Gamepad operations - atomic I/O functions

pub mod device;
pub mod monitor;
pub mod scan;

pub use device::GamepadDevice;
pub use monitor::{DeviceEvent, DeviceMonitor};
pub use scan::{open_gamepad, scan_gamepads};
