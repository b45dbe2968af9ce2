// Gamepad pipelines - orchestration functions

pub mod poller;

pub use poller::{GamepadPoller, PollOutput, PollerSettings};
