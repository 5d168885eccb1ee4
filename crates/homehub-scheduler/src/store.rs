//! Schedule store — the ordered, in-memory collection of device schedules.
//! Owned by whoever needs it (the engine, a test); there is no global instance.

use homehub_core::{HomeHubError, Result};
use uuid::Uuid;

use crate::schedule::DeviceSchedule;

/// Ordered collection of schedules, kept in insertion order.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    schedules: Vec<DeviceSchedule>,
}

impl ScheduleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            schedules: Vec::new(),
        }
    }

    /// Append a schedule after checking its action fits the device type.
    pub fn add(&mut self, schedule: DeviceSchedule) -> Result<()> {
        schedule.validate()?;
        tracing::info!(
            "📅 Schedule added: '{}' → {} at {} ({})",
            schedule.name,
            schedule.device_name,
            schedule.formatted_time(),
            schedule.repeat_description()
        );
        self.schedules.push(schedule);
        Ok(())
    }

    /// Replace the schedule with the same ID, keeping its position.
    pub fn update(&mut self, schedule: DeviceSchedule) -> Result<()> {
        schedule.validate()?;
        let slot = self
            .schedules
            .iter_mut()
            .find(|s| s.id == schedule.id)
            .ok_or(HomeHubError::ScheduleNotFound(schedule.id))?;
        tracing::debug!("✏️ Schedule updated: '{}' ({})", schedule.name, schedule.id);
        *slot = schedule;
        Ok(())
    }

    /// Remove every schedule with this ID. Returns how many were removed.
    pub fn delete(&mut self, id: Uuid) -> Result<usize> {
        let len = self.schedules.len();
        self.schedules.retain(|s| s.id != id);
        let removed = len - self.schedules.len();
        if removed == 0 {
            return Err(HomeHubError::ScheduleNotFound(id));
        }
        tracing::info!("🗑️ Schedule deleted: {id}");
        Ok(removed)
    }

    /// Flip the enabled flag. Returns the new value.
    pub fn toggle_enabled(&mut self, id: Uuid) -> Result<bool> {
        let schedule = self.get_mut(id)?;
        schedule.is_enabled = !schedule.is_enabled;
        tracing::debug!(
            "🔁 Schedule '{}' {}",
            schedule.name,
            if schedule.is_enabled { "enabled" } else { "disabled" }
        );
        Ok(schedule.is_enabled)
    }

    /// Set the enabled flag.
    pub fn set_enabled(&mut self, id: Uuid, enabled: bool) -> Result<()> {
        self.get_mut(id)?.is_enabled = enabled;
        Ok(())
    }

    /// Schedules targeting `device_id`, in insertion order.
    pub fn schedules_for(&self, device_id: Uuid) -> impl Iterator<Item = &DeviceSchedule> + '_ {
        self.schedules.iter().filter(move |s| s.device_id == device_id)
    }

    /// Enabled schedules, in insertion order.
    pub fn enabled(&self) -> impl Iterator<Item = &DeviceSchedule> + '_ {
        self.schedules.iter().filter(|s| s.is_enabled)
    }

    /// Get a schedule by ID.
    pub fn get(&self, id: Uuid) -> Option<&DeviceSchedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    /// List all schedules.
    pub fn list(&self) -> &[DeviceSchedule] {
        &self.schedules
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut DeviceSchedule> {
        self.schedules
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(HomeHubError::ScheduleNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ScheduleAction;
    use crate::weekday::{RepeatDays, Weekday};
    use chrono::NaiveTime;
    use homehub_core::DeviceType;
    use homehub_devices::Device;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn schedule_for(device: &Device, name: &str) -> DeviceSchedule {
        DeviceSchedule::new(
            name,
            device,
            at(8, 0),
            ScheduleAction::default_for(device.device_type),
        )
    }

    fn names<'a>(it: impl Iterator<Item = &'a DeviceSchedule>) -> Vec<&'a str> {
        it.map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_query_by_device_in_insertion_order() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let ac = Device::new("AC", DeviceType::Ac);
        let mut store = ScheduleStore::new();
        store.add(schedule_for(&lamp, "a")).unwrap();
        store.add(schedule_for(&ac, "b")).unwrap();
        store.add(schedule_for(&lamp, "c")).unwrap();
        store.add(schedule_for(&lamp, "d")).unwrap();

        assert_eq!(names(store.schedules_for(lamp.id)), vec!["a", "c", "d"]);
        assert_eq!(names(store.schedules_for(ac.id)), vec!["b"]);

        // Re-evaluated on each call.
        store.add(schedule_for(&ac, "e")).unwrap();
        assert_eq!(names(store.schedules_for(ac.id)), vec!["b", "e"]);
    }

    #[test]
    fn test_add_rejects_invalid_pairing() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let mut store = ScheduleStore::new();
        let bad = DeviceSchedule::new("bad", &lamp, at(8, 0), ScheduleAction::default_for(DeviceType::Ac));
        assert!(matches!(store.add(bad), Err(HomeHubError::InvalidSchedule(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_preserves_position() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let mut store = ScheduleStore::new();
        store.add(schedule_for(&lamp, "a")).unwrap();
        store.add(schedule_for(&lamp, "b")).unwrap();
        store.add(schedule_for(&lamp, "c")).unwrap();

        let mut edited = store.list()[1].clone();
        edited.name = "b2".into();
        edited.time = at(22, 15);
        edited.repeat_days = RepeatDays::weekends();
        store.update(edited.clone()).unwrap();

        assert_eq!(names(store.list().iter()), vec!["a", "b2", "c"]);
        assert_eq!(store.list()[1], edited);
    }

    #[test]
    fn test_update_unknown_id_leaves_store_unchanged() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let mut store = ScheduleStore::new();
        store.add(schedule_for(&lamp, "a")).unwrap();
        let before = store.list().to_vec();

        let stranger = schedule_for(&lamp, "stranger");
        let id = stranger.id;
        let err = store.update(stranger).unwrap_err();
        assert!(matches!(err, HomeHubError::ScheduleNotFound(e) if e == id));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_update_rejects_invalid_pairing() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let mut store = ScheduleStore::new();
        store.add(schedule_for(&lamp, "a")).unwrap();
        let before = store.list().to_vec();

        let mut edited = before[0].clone();
        edited.name = "a2".into();
        edited.action = ScheduleAction::default_for(DeviceType::Ac);
        let err = store.update(edited).unwrap_err();
        assert!(matches!(err, HomeHubError::InvalidSchedule(_)));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_set_enabled_unknown_id() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let mut store = ScheduleStore::new();
        store.add(schedule_for(&lamp, "a")).unwrap();

        let id = uuid::Uuid::new_v4();
        let err = store.set_enabled(id, false).unwrap_err();
        assert!(matches!(err, HomeHubError::ScheduleNotFound(e) if e == id));
        assert!(store.list()[0].is_enabled);
    }

    #[test]
    fn test_device_without_schedules() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let tv = Device::new("TV", DeviceType::Television);
        let mut store = ScheduleStore::new();
        assert_eq!(store.schedules_for(tv.id).count(), 0);

        store.add(schedule_for(&lamp, "a")).unwrap();
        assert_eq!(store.schedules_for(tv.id).count(), 0);
    }

    #[test]
    fn test_delete_keeps_others_in_order() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let mut store = ScheduleStore::new();
        for n in ["a", "b", "c", "d"] {
            store.add(schedule_for(&lamp, n)).unwrap();
        }
        let id = store.list()[2].id;
        assert_eq!(store.delete(id).unwrap(), 1);
        assert_eq!(names(store.list().iter()), vec!["a", "b", "d"]);
        assert!(matches!(store.delete(id), Err(HomeHubError::ScheduleNotFound(_))));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let lamp = Device::new("Lamp", DeviceType::Light);
        let mut store = ScheduleStore::new();
        store.add(schedule_for(&lamp, "a")).unwrap();
        let id = store.list()[0].id;

        assert!(!store.toggle_enabled(id).unwrap());
        assert!(store.toggle_enabled(id).unwrap());
        assert!(store.get(id).unwrap().is_enabled);
        assert!(store.toggle_enabled(uuid::Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_morning_lights_scenario() {
        let lamp = Device::new("Smart Lights", DeviceType::Light);
        let mut store = ScheduleStore::new();
        let days: RepeatDays = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ]
        .into_iter()
        .collect();
        let schedule = DeviceSchedule::new(
            "Morning Lights",
            &lamp,
            at(7, 0),
            ScheduleAction::default_for(DeviceType::Light),
        )
        .repeating(days)
        .enabled(true);
        let id = schedule.id;
        store.add(schedule).unwrap();

        assert_eq!(store.get(id).unwrap().repeat_description(), "Weekdays");

        store.toggle_enabled(id).unwrap();
        let for_lamp: Vec<_> = store.schedules_for(lamp.id).collect();
        assert_eq!(for_lamp.len(), 1);
        assert!(!for_lamp[0].is_enabled);
        assert_eq!(store.enabled().count(), 0);
    }
}
