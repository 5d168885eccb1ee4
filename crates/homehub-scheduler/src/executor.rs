//! Applies fired schedule actions to devices in the registry.

use homehub_core::{DeviceType, HomeHubError, Result};
use homehub_devices::DeviceRegistry;
use uuid::Uuid;

use crate::action::{ActionSettings, ScheduleAction};

/// Apply `action` to the device `device_id`.
///
/// `expected_type` is the device type the schedule was created for; if the
/// registry entry has since changed type the action is refused. Settings
/// are only applied when the action turns the device on.
pub fn apply_action(
    registry: &mut DeviceRegistry,
    device_id: Uuid,
    expected_type: DeviceType,
    action: &ScheduleAction,
) -> Result<()> {
    let device = registry
        .get(device_id)
        .ok_or(HomeHubError::DeviceNotFound(device_id))?;
    let device_type = device.device_type;
    if device_type != expected_type {
        return Err(HomeHubError::InvalidSchedule(format!(
            "device '{}' is now a {} device, schedule expects {}",
            device.name, device_type, expected_type
        )));
    }
    if !action.supports(device_type) {
        return Err(HomeHubError::InvalidSchedule(format!(
            "{} action cannot target {} device '{}'",
            action.settings.kind(),
            device_type,
            device.name
        )));
    }

    registry.set_power(device_id, action.turn_on)?;
    if !action.turn_on {
        return Ok(());
    }

    match &action.settings {
        ActionSettings::Ac(s) => {
            registry.set_ac_temperature(device_id, s.temperature)?;
            registry.set_ac_fan_speed(device_id, s.fan_speed)?;
            registry.set_ac_mode(device_id, s.mode)?;
        }
        ActionSettings::Light(s) => {
            registry.set_light_brightness(device_id, s.brightness)?;
            registry.set_light_color(device_id, s.color)?;
        }
        ActionSettings::Speaker(s) if device_type == DeviceType::MusicSystem => {
            registry.set_music_volume(device_id, s.volume)?;
            registry.set_music_playing(device_id, s.play_music)?;
        }
        ActionSettings::Speaker(s) => {
            registry.set_speaker_volume(device_id, s.volume)?;
            registry.set_speaker_playing(device_id, s.play_music)?;
        }
        ActionSettings::None => {}
    }
    Ok(())
}
