//! Sample home used by the CLI: demo devices plus a few schedules.

use anyhow::Result;
use chrono::NaiveTime;
use homehub_core::{AcMode, DeviceType, FanSpeed, HomeHubConfig};
use homehub_devices::DeviceRegistry;
use homehub_scheduler::{
    AcScheduleSettings, ActionSettings, DeviceSchedule, RepeatDays, ScheduleAction,
    SchedulerEngine, SpeakerScheduleSettings,
};

/// Build the registry and engine described by `config`.
pub fn build_home(config: &HomeHubConfig) -> Result<(DeviceRegistry, SchedulerEngine)> {
    let registry = if config.home.seed_demo_devices {
        DeviceRegistry::with_demo_devices()
    } else {
        DeviceRegistry::new()
    };
    let mut engine = SchedulerEngine::new().with_history_limit(config.scheduler.history_limit);

    if config.home.seed_demo_schedules {
        for schedule in demo_schedules(&registry) {
            engine.store_mut().add(schedule)?;
        }
    }
    Ok((registry, engine))
}

fn demo_schedules(registry: &DeviceRegistry) -> Vec<DeviceSchedule> {
    let mut schedules = Vec::new();

    if let Some(lights) = registry.find_by_name("Smart Lights") {
        schedules.push(
            DeviceSchedule::new(
                "Morning Lights",
                lights,
                time(7, 0),
                ScheduleAction::default_for(DeviceType::Light),
            )
            .repeating(RepeatDays::weekdays()),
        );
    }

    if let Some(ac) = registry.find_by_name("Air Conditioner") {
        let action = ScheduleAction {
            turn_on: true,
            settings: ActionSettings::Ac(AcScheduleSettings {
                temperature: 22.0,
                fan_speed: FanSpeed::High,
                mode: AcMode::Cool,
            }),
        };
        schedules.push(
            DeviceSchedule::new("Cool Down", ac, time(18, 30), action)
                .repeating(RepeatDays::every_day()),
        );
    }

    if let Some(speaker) = registry.find_by_name("Speaker") {
        schedules.push(
            DeviceSchedule::new("Quiet Hours", speaker, time(22, 0), ScheduleAction::power(false))
                .repeating(RepeatDays::every_day()),
        );
    }

    if let Some(music) = registry.find_by_name("Music System") {
        let action = ScheduleAction {
            turn_on: true,
            settings: ActionSettings::Speaker(SpeakerScheduleSettings {
                volume: 40.0,
                play_music: true,
            }),
        };
        schedules.push(
            DeviceSchedule::new("Weekend Playlist", music, time(10, 0), action)
                .repeating(RepeatDays::weekends()),
        );
    }

    schedules
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
