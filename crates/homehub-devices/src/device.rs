//! Device definitions — a controllable device and its type-specific state.

use homehub_core::{AcMode, DeviceType, FanSpeed, LightColor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_AC_TEMPERATURE: f64 = 16.0;
pub const MAX_AC_TEMPERATURE: f64 = 30.0;

/// A controllable device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Unique device ID.
    pub id: Uuid,
    /// User-facing name.
    pub name: String,
    /// Short status line ("Cool Mode", "Playing", ...).
    pub status: String,
    /// Room the device lives in, if assigned.
    pub room: Option<String>,
    pub device_type: DeviceType,
    pub is_on: bool,
    pub state: DeviceState,
}

/// Type-specific device state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceState {
    Ac(AcState),
    Light(LightState),
    Speaker(SpeakerState),
    MusicSystem(MusicSystemState),
    None,
}

impl DeviceState {
    /// Default state for a newly added device. Televisions share the
    /// speaker payload since only their volume and playback are controlled.
    pub fn for_type(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::Ac => DeviceState::Ac(AcState::default()),
            DeviceType::Light => DeviceState::Light(LightState::default()),
            DeviceType::Speaker | DeviceType::Television => {
                DeviceState::Speaker(SpeakerState::default())
            }
            DeviceType::MusicSystem => DeviceState::MusicSystem(MusicSystemState::default()),
            DeviceType::Generic => DeviceState::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcState {
    pub temperature: f64,
    pub fan_speed: FanSpeed,
    pub mode: AcMode,
}

impl Default for AcState {
    fn default() -> Self {
        Self {
            temperature: 24.0,
            fan_speed: FanSpeed::Medium,
            mode: AcMode::Cool,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    /// Percent, 0–100.
    pub brightness: f64,
    pub color: LightColor,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            color: LightColor::White,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerState {
    /// Percent, 0–100.
    pub volume: f64,
    pub is_playing: bool,
    pub current_track: String,
}

impl Default for SpeakerState {
    fn default() -> Self {
        Self {
            volume: 50.0,
            is_playing: false,
            current_track: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicSystemState {
    pub volume: f64,
    pub is_playing: bool,
    pub current_playlist: String,
    /// Track titles in play order.
    pub queue: Vec<String>,
    pub queue_index: usize,
    /// Seconds into the current track.
    pub track_position: f64,
    /// Length of the current track in seconds.
    pub track_duration: f64,
}

impl MusicSystemState {
    pub fn current_track(&self) -> Option<&str> {
        self.queue.get(self.queue_index).map(String::as_str)
    }
}

impl Default for MusicSystemState {
    fn default() -> Self {
        Self {
            volume: 50.0,
            is_playing: false,
            current_playlist: "Favorites".into(),
            queue: vec![
                "Bohemian Rhapsody".into(),
                "Hotel California".into(),
                "Imagine".into(),
            ],
            queue_index: 0,
            track_position: 0.0,
            track_duration: 354.0,
        }
    }
}

impl Device {
    /// Create a device with the default state for its type.
    pub fn new(name: &str, device_type: DeviceType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: device_type.default_status().to_string(),
            room: None,
            device_type,
            is_on: false,
            state: DeviceState::for_type(device_type),
        }
    }

    /// Assign the device to a room.
    pub fn in_room(mut self, room: &str) -> Self {
        self.room = Some(room.to_string());
        self
    }

    /// Recompute the status line from the current state.
    pub fn refresh_status(&mut self) {
        self.status = match &self.state {
            DeviceState::Ac(ac) => format!("{:.0}°C - {}", ac.temperature, ac.mode),
            DeviceState::Light(light) => format!("{:.0}% Brightness", light.brightness),
            DeviceState::Speaker(s) if s.is_playing => "Playing".to_string(),
            DeviceState::MusicSystem(m) if m.is_playing => match m.current_track() {
                Some(track) => format!("Playing {track}"),
                None => "Playing".to_string(),
            },
            DeviceState::Speaker(_) | DeviceState::MusicSystem(_) => "Ready".to_string(),
            DeviceState::None => self.device_type.default_status().to_string(),
        };
    }
}
