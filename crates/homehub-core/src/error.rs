//! HomeHub error types.

use uuid::Uuid;

use crate::types::DeviceType;

/// Errors returned by registry, scheduler and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum HomeHubError {
    #[error("schedule not found: {0}")]
    ScheduleNotFound(Uuid),

    #[error("device not found: {0}")]
    DeviceNotFound(Uuid),

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("{device_type} device does not support {control}")]
    UnsupportedControl {
        device_type: DeviceType,
        control: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HomeHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let id = Uuid::nil();
        assert_eq!(
            HomeHubError::ScheduleNotFound(id).to_string(),
            format!("schedule not found: {id}")
        );
        let err = HomeHubError::UnsupportedControl {
            device_type: DeviceType::Light,
            control: "fan speed",
        };
        assert_eq!(err.to_string(), "light device does not support fan speed");
    }
}
