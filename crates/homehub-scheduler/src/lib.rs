//! # HomeHub Scheduler
//!
//! Timed device actions: a schedule pairs a device, a time of day, a set of
//! repeat days and an action. Schedules live in an in-memory store; the
//! engine fires them and applies their actions to the device registry.
//!
//! ## Architecture
//! ```text
//! SchedulerEngine (tokio interval)
//!   ├── ScheduleStore: ordered Vec<DeviceSchedule>
//!   │     ├── "Morning Lights" 7:00 AM Weekdays → Light { 100%, White }
//!   │     └── "Cool Down" 6:30 PM Once → Ac { 24°C, Cool, Medium }
//!   ├── tick(now) → due schedules (once per minute, one-shots retired)
//!   ├── executor::apply_action → DeviceRegistry
//!   └── FiringHistory (ring buffer)
//! ```

pub mod action;
pub mod engine;
pub mod executor;
pub mod history;
pub mod schedule;
pub mod store;
pub mod weekday;

pub use action::{
    AcScheduleSettings, ActionSettings, LightScheduleSettings, ScheduleAction,
    SpeakerScheduleSettings,
};
pub use engine::{FiredSchedule, SchedulerEngine, effective_interval, run_once, spawn_scheduler};
pub use executor::apply_action;
pub use history::{FiringHistory, FiringOutcome, FiringRecord};
pub use schedule::DeviceSchedule;
pub use store::ScheduleStore;
pub use weekday::{RepeatDays, Weekday};
