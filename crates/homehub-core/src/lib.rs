//! # HomeHub Core
//!
//! Types shared by every HomeHub crate: device enums, the error type,
//! and the TOML configuration system.

pub mod config;
pub mod error;
pub mod types;

pub use config::HomeHubConfig;
pub use error::{HomeHubError, Result};
pub use types::{AcMode, DeviceType, FanSpeed, LightColor};
