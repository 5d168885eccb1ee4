//! Device enums shared by the registry and the scheduler.

use serde::{Deserialize, Serialize};

/// Kind of controllable device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Ac,
    Light,
    Speaker,
    MusicSystem,
    Television,
    Generic,
}

impl DeviceType {
    pub const ALL: [DeviceType; 6] = [
        DeviceType::Ac,
        DeviceType::Light,
        DeviceType::Speaker,
        DeviceType::MusicSystem,
        DeviceType::Television,
        DeviceType::Generic,
    ];

    /// Status text shown for a freshly added device of this type.
    pub fn default_status(&self) -> &'static str {
        match self {
            DeviceType::Ac => "24°C - Cool",
            DeviceType::Light => "100% Brightness",
            DeviceType::Speaker | DeviceType::MusicSystem => "Ready",
            DeviceType::Television | DeviceType::Generic => "Connected",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceType::Ac => write!(f, "ac"),
            DeviceType::Light => write!(f, "light"),
            DeviceType::Speaker => write!(f, "speaker"),
            DeviceType::MusicSystem => write!(f, "music system"),
            DeviceType::Television => write!(f, "television"),
            DeviceType::Generic => write!(f, "generic"),
        }
    }
}

/// Air conditioner fan speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanSpeed {
    Low,
    #[default]
    Medium,
    High,
    Auto,
}

impl FanSpeed {
    pub const ALL: [FanSpeed; 4] = [FanSpeed::Low, FanSpeed::Medium, FanSpeed::High, FanSpeed::Auto];
}

impl std::fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FanSpeed::Low => write!(f, "Low"),
            FanSpeed::Medium => write!(f, "Medium"),
            FanSpeed::High => write!(f, "High"),
            FanSpeed::Auto => write!(f, "Auto"),
        }
    }
}

/// Air conditioner operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcMode {
    #[default]
    Cool,
    Heat,
    Fan,
    Dry,
    Auto,
}

impl AcMode {
    pub const ALL: [AcMode; 5] = [AcMode::Cool, AcMode::Heat, AcMode::Fan, AcMode::Dry, AcMode::Auto];
}

impl std::fmt::Display for AcMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcMode::Cool => write!(f, "Cool"),
            AcMode::Heat => write!(f, "Heat"),
            AcMode::Fan => write!(f, "Fan"),
            AcMode::Dry => write!(f, "Dry"),
            AcMode::Auto => write!(f, "Auto"),
        }
    }
}

/// Light color presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightColor {
    #[default]
    White,
    WarmWhite,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl LightColor {
    pub const ALL: [LightColor; 8] = [
        LightColor::White,
        LightColor::WarmWhite,
        LightColor::Red,
        LightColor::Green,
        LightColor::Blue,
        LightColor::Yellow,
        LightColor::Purple,
        LightColor::Orange,
    ];
}

impl std::fmt::Display for LightColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LightColor::White => write!(f, "White"),
            LightColor::WarmWhite => write!(f, "Warm White"),
            LightColor::Red => write!(f, "Red"),
            LightColor::Green => write!(f, "Green"),
            LightColor::Blue => write!(f, "Blue"),
            LightColor::Yellow => write!(f, "Yellow"),
            LightColor::Purple => write!(f, "Purple"),
            LightColor::Orange => write!(f, "Orange"),
        }
    }
}
