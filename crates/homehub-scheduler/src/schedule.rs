//! Device schedules — the core data model for timed device actions.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use homehub_core::{DeviceType, HomeHubError, Result};
use homehub_devices::Device;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::ScheduleAction;
use crate::weekday::{RepeatDays, Weekday};

/// A stored rule: at `time` on `repeat_days`, apply `action` to a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSchedule {
    /// Unique schedule ID.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Target device in the registry. The schedule never owns it.
    pub device_id: Uuid,
    /// Device name as of the last snapshot.
    pub device_name: String,
    /// Device type as of the last snapshot.
    pub device_type: DeviceType,
    /// Time of day the schedule fires (minute precision).
    pub time: NaiveTime,
    /// Days to repeat on. Empty means fire once.
    pub repeat_days: RepeatDays,
    /// Disabled schedules are kept but never fire.
    pub is_enabled: bool,
    pub action: ScheduleAction,
}

impl DeviceSchedule {
    /// Create an enabled one-time schedule for `device`, snapshotting its
    /// name and type.
    pub fn new(name: &str, device: &Device, time: NaiveTime, action: ScheduleAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            device_id: device.id,
            device_name: device.name.clone(),
            device_type: device.device_type,
            time: truncate_to_minute(time),
            repeat_days: RepeatDays::once(),
            is_enabled: true,
            action,
        }
    }

    /// Set the repeat days.
    pub fn repeating(mut self, days: RepeatDays) -> Self {
        self.repeat_days = days;
        self
    }

    /// Set the enabled flag.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// Check that the action payload fits the device type.
    pub fn validate(&self) -> Result<()> {
        if self.action.supports(self.device_type) {
            Ok(())
        } else {
            Err(HomeHubError::InvalidSchedule(format!(
                "'{}': {} action cannot target {} device '{}'",
                self.name,
                self.action.settings.kind(),
                self.device_type,
                self.device_name
            )))
        }
    }

    /// Re-copy the device name and type from the registry entry. Called on
    /// edit so the snapshot does not drift from the device.
    pub fn refresh_device_snapshot(&mut self, device: &Device) -> Result<()> {
        if device.id != self.device_id {
            return Err(HomeHubError::InvalidSchedule(format!(
                "'{}' targets device {}, not {}",
                self.name, self.device_id, device.id
            )));
        }
        self.device_name = device.name.clone();
        self.device_type = device.device_type;
        self.validate()
    }

    /// Whether the schedule fires only once.
    pub fn is_once(&self) -> bool {
        self.repeat_days.is_empty()
    }

    /// Human-readable recurrence label ("Once", "Weekdays", "Mon, Wed").
    pub fn repeat_description(&self) -> String {
        self.repeat_days.describe()
    }

    /// Short clock time, e.g. "7:30 AM".
    pub fn formatted_time(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }

    /// Check if this schedule should fire during the minute containing `now`.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        if !self.is_enabled {
            return false;
        }
        if self.time.hour() != now.hour() || self.time.minute() != now.minute() {
            return false;
        }
        self.is_once() || self.repeat_days.contains(Weekday::from(now.weekday()))
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionSettings, LightScheduleSettings};
    use chrono::NaiveDate;

    fn light() -> Device {
        Device::new("Smart Lights", DeviceType::Light)
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // 2026-10-19 is a Monday.
    fn monday(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_new_snapshots_device() {
        let device = light();
        let schedule = DeviceSchedule::new(
            "Morning Lights",
            &device,
            NaiveTime::from_hms_opt(7, 30, 45).unwrap(),
            ScheduleAction::default_for(DeviceType::Light),
        );
        assert_eq!(schedule.device_id, device.id);
        assert_eq!(schedule.device_name, "Smart Lights");
        assert_eq!(schedule.device_type, DeviceType::Light);
        assert_eq!(schedule.time, at(7, 30));
        assert!(schedule.is_enabled);
        assert!(schedule.is_once());
        assert_eq!(schedule.repeat_description(), "Once");
        assert_eq!(schedule.formatted_time(), "7:30 AM");
    }

    #[test]
    fn test_validate_rejects_mismatched_action() {
        let schedule = DeviceSchedule::new(
            "Cool down",
            &light(),
            at(18, 0),
            ScheduleAction::default_for(DeviceType::Ac),
        );
        assert!(matches!(schedule.validate(), Err(HomeHubError::InvalidSchedule(_))));
    }

    #[test]
    fn test_refresh_snapshot() {
        let mut device = light();
        let mut schedule = DeviceSchedule::new(
            "Evening",
            &device,
            at(19, 0),
            ScheduleAction {
                turn_on: true,
                settings: ActionSettings::Light(LightScheduleSettings::default()),
            },
        );
        device.name = "Porch Light".into();
        schedule.refresh_device_snapshot(&device).unwrap();
        assert_eq!(schedule.device_name, "Porch Light");

        let other = light();
        assert!(schedule.refresh_device_snapshot(&other).is_err());
    }

    #[test]
    fn test_is_due_matches_minute_and_weekday() {
        let schedule = DeviceSchedule::new(
            "Weekday wake",
            &light(),
            at(7, 0),
            ScheduleAction::default_for(DeviceType::Light),
        )
        .repeating(RepeatDays::weekdays());

        assert!(schedule.is_due(monday(7, 0, 0)));
        assert!(schedule.is_due(monday(7, 0, 59)));
        assert!(!schedule.is_due(monday(7, 1, 0)));

        let sunday = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        assert!(!schedule.is_due(sunday));
    }

    #[test]
    fn test_disabled_never_due() {
        let schedule = DeviceSchedule::new(
            "Off",
            &light(),
            at(7, 0),
            ScheduleAction::power(false),
        )
        .enabled(false);
        assert!(!schedule.is_due(monday(7, 0, 0)));
    }

    #[test]
    fn test_formatted_time_pm() {
        let schedule = DeviceSchedule::new("Late", &light(), at(21, 5), ScheduleAction::power(false));
        assert_eq!(schedule.formatted_time(), "9:05 PM");
    }
}
