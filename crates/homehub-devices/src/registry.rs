//! Device Registry — owns the home's devices and applies control changes.

use homehub_core::{AcMode, DeviceType, FanSpeed, HomeHubError, LightColor, Result};
use uuid::Uuid;

use crate::device::{Device, DeviceState, MAX_AC_TEMPERATURE, MIN_AC_TEMPERATURE};

/// In-memory registry of devices, kept in insertion order.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Create a registry holding the sample home.
    pub fn with_demo_devices() -> Self {
        let mut reg = Self::new();

        let mut tv = Device::new("Smart TV", DeviceType::Television).in_room("Living Room");
        tv.is_on = true;
        reg.insert(tv);

        let mut ac = Device::new("Air Conditioner", DeviceType::Ac).in_room("Bedroom");
        ac.is_on = true;
        reg.insert(ac);

        reg.insert(Device::new("Smart Lights", DeviceType::Light).in_room("Living Room"));

        let mut speaker = Device::new("Speaker", DeviceType::Speaker).in_room("Living Room");
        speaker.is_on = true;
        if let DeviceState::Speaker(s) = &mut speaker.state {
            s.is_playing = true;
            s.current_track = "Summer Vibes Mix".into();
        }
        speaker.refresh_status();
        reg.insert(speaker);

        reg.insert(Device::new("Music System", DeviceType::MusicSystem).in_room("Living Room"));
        reg
    }

    /// Add a new device with the default state for its type. Returns its ID.
    pub fn add_device(&mut self, name: &str, device_type: DeviceType, room: Option<&str>) -> Uuid {
        let mut device = Device::new(name, device_type);
        device.room = room.map(str::to_string);
        self.insert(device)
    }

    /// Insert a fully built device. Returns its ID.
    pub fn insert(&mut self, device: Device) -> Uuid {
        tracing::info!("🔌 Device added: '{}' ({}, {})", device.name, device.device_type, device.id);
        let id = device.id;
        self.devices.push(device);
        id
    }

    /// Remove a device by ID.
    pub fn remove_device(&mut self, id: Uuid) -> Result<Device> {
        let index = self
            .devices
            .iter()
            .position(|d| d.id == id)
            .ok_or(HomeHubError::DeviceNotFound(id))?;
        let device = self.devices.remove(index);
        tracing::info!("🗑️ Device removed: '{}'", device.name);
        Ok(device)
    }

    /// Get a device by ID.
    pub fn get(&self, id: Uuid) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Find the first device with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// List all devices.
    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Number of devices currently switched on.
    pub fn active_count(&self) -> usize {
        self.devices.iter().filter(|d| d.is_on).count()
    }

    // ─── Power ────────────────────────────────────────────────

    pub fn set_power(&mut self, id: Uuid, on: bool) -> Result<()> {
        let device = self.device_mut(id)?;
        device.is_on = on;
        tracing::debug!("💡 '{}' power {}", device.name, if on { "on" } else { "off" });
        Ok(())
    }

    /// Flip the power state. Returns the new state.
    pub fn toggle_power(&mut self, id: Uuid) -> Result<bool> {
        let device = self.device_mut(id)?;
        device.is_on = !device.is_on;
        Ok(device.is_on)
    }

    // ─── Air Conditioner ──────────────────────────────────────

    /// Set the target temperature, clamped to 16–30°C. Returns the applied value.
    pub fn set_ac_temperature(&mut self, id: Uuid, temperature: f64) -> Result<f64> {
        self.with_state(id, "temperature", |state| match state {
            DeviceState::Ac(ac) => {
                ac.temperature = temperature.clamp(MIN_AC_TEMPERATURE, MAX_AC_TEMPERATURE);
                Some(ac.temperature)
            }
            _ => None,
        })
    }

    pub fn set_ac_fan_speed(&mut self, id: Uuid, speed: FanSpeed) -> Result<()> {
        self.with_state(id, "fan speed", |state| match state {
            DeviceState::Ac(ac) => {
                ac.fan_speed = speed;
                Some(())
            }
            _ => None,
        })
    }

    pub fn set_ac_mode(&mut self, id: Uuid, mode: AcMode) -> Result<()> {
        self.with_state(id, "ac mode", |state| match state {
            DeviceState::Ac(ac) => {
                ac.mode = mode;
                Some(())
            }
            _ => None,
        })
    }

    // ─── Light ────────────────────────────────────────────────

    /// Set brightness, clamped to 0–100%. Returns the applied value.
    pub fn set_light_brightness(&mut self, id: Uuid, brightness: f64) -> Result<f64> {
        self.with_state(id, "brightness", |state| match state {
            DeviceState::Light(light) => {
                light.brightness = brightness.clamp(0.0, 100.0);
                Some(light.brightness)
            }
            _ => None,
        })
    }

    pub fn set_light_color(&mut self, id: Uuid, color: LightColor) -> Result<()> {
        self.with_state(id, "color", |state| match state {
            DeviceState::Light(light) => {
                light.color = color;
                Some(())
            }
            _ => None,
        })
    }

    // ─── Speaker ──────────────────────────────────────────────

    /// Set volume, clamped to 0–100%. Returns the applied value.
    pub fn set_speaker_volume(&mut self, id: Uuid, volume: f64) -> Result<f64> {
        self.with_state(id, "volume", |state| match state {
            DeviceState::Speaker(s) => {
                s.volume = volume.clamp(0.0, 100.0);
                Some(s.volume)
            }
            _ => None,
        })
    }

    pub fn set_speaker_playing(&mut self, id: Uuid, playing: bool) -> Result<()> {
        self.with_state(id, "playback", |state| match state {
            DeviceState::Speaker(s) => {
                s.is_playing = playing;
                Some(())
            }
            _ => None,
        })
    }

    /// Flip playback. Returns whether the speaker is now playing.
    pub fn toggle_speaker_playback(&mut self, id: Uuid) -> Result<bool> {
        self.with_state(id, "playback", |state| match state {
            DeviceState::Speaker(s) => {
                s.is_playing = !s.is_playing;
                Some(s.is_playing)
            }
            _ => None,
        })
    }

    // ─── Music System ─────────────────────────────────────────

    pub fn set_music_volume(&mut self, id: Uuid, volume: f64) -> Result<f64> {
        self.with_state(id, "volume", |state| match state {
            DeviceState::MusicSystem(m) => {
                m.volume = volume.clamp(0.0, 100.0);
                Some(m.volume)
            }
            _ => None,
        })
    }

    pub fn set_music_playing(&mut self, id: Uuid, playing: bool) -> Result<()> {
        self.with_state(id, "playback", |state| match state {
            DeviceState::MusicSystem(m) => {
                m.is_playing = playing;
                Some(())
            }
            _ => None,
        })
    }

    pub fn toggle_music_playback(&mut self, id: Uuid) -> Result<bool> {
        self.with_state(id, "playback", |state| match state {
            DeviceState::MusicSystem(m) => {
                m.is_playing = !m.is_playing;
                Some(m.is_playing)
            }
            _ => None,
        })
    }

    /// Seek within the current track, clamped to its duration.
    pub fn seek_music(&mut self, id: Uuid, position: f64) -> Result<f64> {
        self.with_state(id, "seek", |state| match state {
            DeviceState::MusicSystem(m) => {
                m.track_position = position.clamp(0.0, m.track_duration);
                Some(m.track_position)
            }
            _ => None,
        })
    }

    /// Skip to the next track in the queue, wrapping at the end.
    pub fn next_track(&mut self, id: Uuid) -> Result<()> {
        self.with_state(id, "next track", |state| match state {
            DeviceState::MusicSystem(m) => {
                if !m.queue.is_empty() {
                    m.queue_index = (m.queue_index + 1) % m.queue.len();
                }
                m.track_position = 0.0;
                Some(())
            }
            _ => None,
        })
    }

    /// Go back to the previous track in the queue, wrapping at the start.
    pub fn previous_track(&mut self, id: Uuid) -> Result<()> {
        self.with_state(id, "previous track", |state| match state {
            DeviceState::MusicSystem(m) => {
                if !m.queue.is_empty() {
                    m.queue_index = (m.queue_index + m.queue.len() - 1) % m.queue.len();
                }
                m.track_position = 0.0;
                Some(())
            }
            _ => None,
        })
    }

    // ─── Internals ────────────────────────────────────────────

    fn device_mut(&mut self, id: Uuid) -> Result<&mut Device> {
        self.devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(HomeHubError::DeviceNotFound(id))
    }

    /// Run a state mutation; `None` from the closure means the device's
    /// state does not support `control`.
    fn with_state<T>(
        &mut self,
        id: Uuid,
        control: &'static str,
        f: impl FnOnce(&mut DeviceState) -> Option<T>,
    ) -> Result<T> {
        let device = self.device_mut(id)?;
        let device_type = device.device_type;
        let out = f(&mut device.state).ok_or(HomeHubError::UnsupportedControl {
            device_type,
            control,
        })?;
        device.refresh_status();
        Ok(out)
    }
}
