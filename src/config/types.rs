use crate::gamepad::{ControllerId, LayoutKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which controllers the gamepad poller opens
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum PadFilterType {
    All,
    /// Skip Steam Input's virtual pads (they duplicate the physical one)
    #[default]
    NoSteamInput,
    OnlySteamInput,
}

/// When arrow keys move focus
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrowKeyPolicy {
    /// Only while the gamepad is the current input method
    GamepadOnly,
    /// Regardless of input method
    #[default]
    AnyMode,
}

/// Focus ring appearance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FocusRingConfig {
    #[serde(default = "default_ring_width")]
    pub stroke_width: f32,
    #[serde(default = "default_ring_radius")]
    pub corner_radius: f32,
    #[serde(default = "default_ring_padding")]
    pub padding: f32,
}

fn default_ring_width() -> f32 {
    2.5
}

fn default_ring_radius() -> f32 {
    6.0
}

fn default_ring_padding() -> f32 {
    2.0
}

impl Default for FocusRingConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_ring_width(),
            corner_radius: default_ring_radius(),
            padding: default_ring_padding(),
        }
    }
}

/// Main application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeckConfig {
    #[serde(default)]
    pub arrow_keys: ArrowKeyPolicy,
    #[serde(default)]
    pub pad_filter_type: PadFilterType,
    /// Gamepad presence re-enumeration period (milliseconds)
    #[serde(default = "default_presence_poll_ms")]
    pub presence_poll_ms: u64,
    /// Hold time before a held direction starts repeating (milliseconds)
    #[serde(default = "default_repeat_initial_delay_ms")]
    pub repeat_initial_delay_ms: u64,
    /// Time between repeats of a held direction (milliseconds)
    #[serde(default = "default_repeat_rate_ms")]
    pub repeat_rate_ms: u64,
    #[serde(default)]
    pub fullscreen: bool,
    /// Decoder overrides keyed by "vvvv:pppp" (USB vendor:product, hex)
    #[serde(default)]
    pub controller_layouts: HashMap<String, LayoutKind>,
    #[serde(default)]
    pub focus_ring: FocusRingConfig,
}

fn default_presence_poll_ms() -> u64 {
    1000
}

fn default_repeat_initial_delay_ms() -> u64 {
    300
}

fn default_repeat_rate_ms() -> u64 {
    80
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            arrow_keys: ArrowKeyPolicy::default(),
            pad_filter_type: PadFilterType::default(),
            presence_poll_ms: default_presence_poll_ms(),
            repeat_initial_delay_ms: default_repeat_initial_delay_ms(),
            repeat_rate_ms: default_repeat_rate_ms(),
            fullscreen: false,
            controller_layouts: HashMap::new(),
            focus_ring: FocusRingConfig::default(),
        }
    }
}

impl DeckConfig {
    /// Parsed layout overrides; malformed keys are skipped with a warning
    pub fn layout_overrides(&self) -> HashMap<ControllerId, LayoutKind> {
        self.controller_layouts
            .iter()
            .filter_map(|(key, kind)| match ControllerId::parse(key) {
                Some(id) => Some((id, *kind)),
                None => {
                    tracing::warn!("config: ignoring controller layout for {:?} (expected vvvv:pppp)", key);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg: DeckConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, DeckConfig::default());
        assert_eq!(cfg.presence_poll_ms, 1000);
        assert_eq!(cfg.arrow_keys, ArrowKeyPolicy::AnyMode);
    }

    #[test]
    fn partial_focus_ring_fills_defaults() {
        let cfg: DeckConfig =
            serde_json::from_str(r#"{"focus_ring": {"stroke_width": 4.0}}"#).unwrap();
        assert_eq!(cfg.focus_ring.stroke_width, 4.0);
        assert_eq!(cfg.focus_ring.corner_radius, 6.0);
    }

    #[test]
    fn layout_overrides_parse_and_skip_bad_keys() {
        let cfg: DeckConfig = serde_json::from_str(
            r#"{"controller_layouts": {"0079:0006": "DualShockClone", "nonsense": "Standard"}}"#,
        )
        .unwrap();
        let overrides = cfg.layout_overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(
            overrides.get(&ControllerId::new(0x0079, 0x0006)),
            Some(&LayoutKind::DualShockClone)
        );
    }

    #[test]
    fn arrow_policy_serializes_by_name() {
        let cfg = DeckConfig {
            arrow_keys: ArrowKeyPolicy::GamepadOnly,
            ..DeckConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains(r#""arrow_keys":"GamepadOnly""#));
    }
}
