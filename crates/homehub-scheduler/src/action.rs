//! Schedule actions — what a schedule does to its device when it fires.

use homehub_core::{AcMode, DeviceType, FanSpeed, LightColor};
use serde::{Deserialize, Serialize};

/// The action applied when a schedule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleAction {
    /// Switch the device on (true) or off (false).
    pub turn_on: bool,
    /// Type-specific settings, applied only when turning on.
    pub settings: ActionSettings,
}

/// Type-specific settings carried by an action. At most one payload
/// exists by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionSettings {
    Ac(AcScheduleSettings),
    Light(LightScheduleSettings),
    Speaker(SpeakerScheduleSettings),
    None,
}

impl ActionSettings {
    /// Short name of the payload kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionSettings::Ac(_) => "ac",
            ActionSettings::Light(_) => "light",
            ActionSettings::Speaker(_) => "speaker",
            ActionSettings::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcScheduleSettings {
    pub temperature: f64,
    pub fan_speed: FanSpeed,
    pub mode: AcMode,
}

impl Default for AcScheduleSettings {
    fn default() -> Self {
        Self {
            temperature: 24.0,
            fan_speed: FanSpeed::Medium,
            mode: AcMode::Cool,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightScheduleSettings {
    pub brightness: f64,
    pub color: LightColor,
}

impl Default for LightScheduleSettings {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            color: LightColor::White,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerScheduleSettings {
    pub volume: f64,
    pub play_music: bool,
}

impl Default for SpeakerScheduleSettings {
    fn default() -> Self {
        Self {
            volume: 50.0,
            play_music: false,
        }
    }
}

impl ScheduleAction {
    /// Default action for a new schedule targeting `device_type`.
    pub fn default_for(device_type: DeviceType) -> Self {
        let settings = match device_type {
            DeviceType::Ac => ActionSettings::Ac(AcScheduleSettings::default()),
            DeviceType::Light => ActionSettings::Light(LightScheduleSettings::default()),
            DeviceType::Speaker | DeviceType::MusicSystem | DeviceType::Television => {
                ActionSettings::Speaker(SpeakerScheduleSettings::default())
            }
            DeviceType::Generic => ActionSettings::None,
        };
        Self {
            turn_on: true,
            settings,
        }
    }

    /// Plain power action with no settings.
    pub fn power(turn_on: bool) -> Self {
        Self {
            turn_on,
            settings: ActionSettings::None,
        }
    }

    /// Whether this action's payload can be applied to `device_type`.
    pub fn supports(&self, device_type: DeviceType) -> bool {
        match &self.settings {
            ActionSettings::Ac(_) => device_type == DeviceType::Ac,
            ActionSettings::Light(_) => device_type == DeviceType::Light,
            ActionSettings::Speaker(_) => matches!(
                device_type,
                DeviceType::Speaker | DeviceType::MusicSystem | DeviceType::Television
            ),
            ActionSettings::None => true,
        }
    }

    pub fn ac_settings(&self) -> Option<&AcScheduleSettings> {
        match &self.settings {
            ActionSettings::Ac(s) => Some(s),
            _ => None,
        }
    }

    pub fn light_settings(&self) -> Option<&LightScheduleSettings> {
        match &self.settings {
            ActionSettings::Light(s) => Some(s),
            _ => None,
        }
    }

    pub fn speaker_settings(&self) -> Option<&SpeakerScheduleSettings> {
        match &self.settings {
            ActionSettings::Speaker(s) => Some(s),
            _ => None,
        }
    }

    /// One-line summary for logs and listings.
    pub fn summary(&self) -> String {
        if !self.turn_on {
            return "Turn off".to_string();
        }
        match &self.settings {
            ActionSettings::Ac(s) => format!(
                "Turn on · {:.0}°C {} · fan {}",
                s.temperature, s.mode, s.fan_speed
            ),
            ActionSettings::Light(s) => format!("Turn on · {:.0}% {}", s.brightness, s.color),
            ActionSettings::Speaker(s) if s.play_music => {
                format!("Turn on · volume {:.0}% · play music", s.volume)
            }
            ActionSettings::Speaker(s) => format!("Turn on · volume {:.0}%", s.volume),
            ActionSettings::None => "Turn on".to_string(),
        }
    }
}
