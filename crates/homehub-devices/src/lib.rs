//! # HomeHub Devices
//!
//! The device registry: the mutable list of controllable devices, each
//! carrying a state payload that matches its [`DeviceType`].
//!
//! ```text
//! DeviceRegistry
//!   ├── Air Conditioner → AcState { temperature, fan_speed, mode }
//!   ├── Smart Lights    → LightState { brightness, color }
//!   ├── Speaker / TV    → SpeakerState { volume, is_playing, current_track }
//!   ├── Music System    → MusicSystemState { volume, queue, position, ... }
//!   └── Generic         → no state
//! ```

pub mod device;
pub mod registry;

pub use device::{AcState, Device, DeviceState, LightState, MusicSystemState, SpeakerState};
pub use homehub_core::DeviceType;
pub use registry::DeviceRegistry;
