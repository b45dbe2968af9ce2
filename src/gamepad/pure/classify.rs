// Device classification and axis normalization (pure functions)

use evdev::{AttributeSetRef, KeyCode};

use crate::config::PadFilterType;

/// Vendor ID of Steam Input's virtual controllers
pub const STEAM_INPUT_VENDOR: u16 = 0x28de;

/// A device is a gamepad when it reports a south face button or a joystick trigger
pub fn is_gamepad(supported_keys: Option<&AttributeSetRef<KeyCode>>) -> bool {
    supported_keys.is_some_and(|keys| {
        keys.contains(KeyCode::BTN_SOUTH) || keys.contains(KeyCode::BTN_TRIGGER)
    })
}

/// Check if a device should be used based on the filter type and vendor ID
pub fn is_device_enabled(filter: &PadFilterType, vendor_id: u16) -> bool {
    match filter {
        PadFilterType::All => true,
        PadFilterType::NoSteamInput => vendor_id != STEAM_INPUT_VENDOR,
        PadFilterType::OnlySteamInput => vendor_id == STEAM_INPUT_VENDOR,
    }
}

/// Map a raw axis reading onto [-1.0, 1.0] using the device's reported range.
/// A degenerate range reads as centered.
pub fn normalize_axis(value: i32, min: i32, max: i32) -> f32 {
    if max <= min {
        return 0.0;
    }
    let span = (max as f64) - (min as f64);
    let scaled = ((value as f64) - (min as f64)) / span * 2.0 - 1.0;
    scaled.clamp(-1.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use evdev::AttributeSet;

    const XBOX_VENDOR: u16 = 0x045e;
    const SONY_VENDOR: u16 = 0x054c;

    #[test]
    fn classify_none_is_not_gamepad() {
        assert!(!is_gamepad(None));
    }

    #[test]
    fn south_button_marks_gamepad() {
        let mut keys = AttributeSet::<KeyCode>::new();
        keys.insert(KeyCode::BTN_SOUTH);
        assert!(is_gamepad(Some(&*keys)));
    }

    #[test]
    fn joystick_trigger_marks_gamepad() {
        let mut keys = AttributeSet::<KeyCode>::new();
        keys.insert(KeyCode::BTN_TRIGGER);
        keys.insert(KeyCode::BTN_THUMB);
        assert!(is_gamepad(Some(&*keys)));
    }

    #[test]
    fn keyboard_is_not_gamepad() {
        let mut keys = AttributeSet::<KeyCode>::new();
        keys.insert(KeyCode::KEY_SPACE);
        keys.insert(KeyCode::KEY_A);
        assert!(!is_gamepad(Some(&*keys)));
    }

    #[test]
    fn filter_all_allows_any_vendor() {
        assert!(is_device_enabled(&PadFilterType::All, STEAM_INPUT_VENDOR));
        assert!(is_device_enabled(&PadFilterType::All, XBOX_VENDOR));
        assert!(is_device_enabled(&PadFilterType::All, 0xFFFF));
    }

    #[test]
    fn filter_no_steam_input_blocks_steam_vendor() {
        assert!(!is_device_enabled(&PadFilterType::NoSteamInput, STEAM_INPUT_VENDOR));
        assert!(is_device_enabled(&PadFilterType::NoSteamInput, SONY_VENDOR));
    }

    #[test]
    fn filter_only_steam_input() {
        assert!(is_device_enabled(&PadFilterType::OnlySteamInput, STEAM_INPUT_VENDOR));
        assert!(!is_device_enabled(&PadFilterType::OnlySteamInput, XBOX_VENDOR));
    }

    #[test]
    fn normalize_signed_16bit_range() {
        assert_eq!(normalize_axis(-32768, -32768, 32767), -1.0);
        assert_eq!(normalize_axis(32767, -32768, 32767), 1.0);
        assert!(normalize_axis(0, -32768, 32767).abs() < 0.001);
    }

    #[test]
    fn normalize_unsigned_byte_range() {
        assert_eq!(normalize_axis(0, 0, 255), -1.0);
        assert_eq!(normalize_axis(255, 0, 255), 1.0);
        assert!(normalize_axis(128, 0, 255).abs() < 0.01);
    }

    #[test]
    fn normalize_hat_range() {
        assert_eq!(normalize_axis(-1, -1, 1), -1.0);
        assert_eq!(normalize_axis(0, -1, 1), 0.0);
        assert_eq!(normalize_axis(1, -1, 1), 1.0);
    }

    #[test]
    fn normalize_degenerate_range_is_centered() {
        assert_eq!(normalize_axis(10, 0, 0), 0.0);
        assert_eq!(normalize_axis(10, 5, 1), 0.0);
    }

    #[test]
    fn normalize_clamps_out_of_range() {
        assert_eq!(normalize_axis(400, 0, 255), 1.0);
        assert_eq!(normalize_axis(-20, 0, 255), -1.0);
    }
}
