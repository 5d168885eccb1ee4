//! Scheduler Engine — the loop that checks schedules and fires them.
//! Uses tokio::interval; each tick checks every minute since the previous
//! tick against the enabled schedules' time and weekdays.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, Timelike};
use homehub_core::{DeviceType, Result};
use homehub_devices::DeviceRegistry;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::action::ScheduleAction;
use crate::executor;
use crate::history::{FiringHistory, FiringOutcome, FiringRecord};
use crate::store::ScheduleStore;

/// Longest stretch a single tick looks back over.
pub const MAX_CATCH_UP_MINUTES: i64 = 24 * 60;

/// Upper bound on the loop period; slower loops would fire schedules late.
pub const MAX_CHECK_INTERVAL_SECS: u64 = 60;

/// A schedule that fired during a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FiredSchedule {
    pub schedule_id: Uuid,
    pub name: String,
    pub device_id: Uuid,
    pub device_name: String,
    pub device_type: DeviceType,
    pub action: ScheduleAction,
    /// Start of the minute the schedule fired in.
    pub fired_at: NaiveDateTime,
}

/// The scheduler engine — owns the schedule store and decides what fires.
pub struct SchedulerEngine {
    store: ScheduleStore,
    /// Minute each schedule last fired in, so a schedule fires at most
    /// once per matching minute however often `tick` runs.
    last_fired: HashMap<Uuid, NaiveDateTime>,
    /// Minute of the most recent tick; the next tick resumes after it.
    last_tick: Option<NaiveDateTime>,
    history: FiringHistory,
}

impl SchedulerEngine {
    /// Create an engine with an empty store.
    pub fn new() -> Self {
        Self::with_store(ScheduleStore::new())
    }

    /// Create an engine around an existing store.
    pub fn with_store(store: ScheduleStore) -> Self {
        Self {
            store,
            last_fired: HashMap::new(),
            last_tick: None,
            history: FiringHistory::default(),
        }
    }

    /// Set how many firing records are kept.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = FiringHistory::new(limit);
        self
    }

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ScheduleStore {
        &mut self.store
    }

    pub fn history(&self) -> &FiringHistory {
        &self.history
    }

    /// Tick — called periodically to fire schedules due since the previous
    /// tick, up to and including the minute containing `now`. Minutes a late
    /// or slow tick stepped over are checked too, capped at
    /// `MAX_CATCH_UP_MINUTES`. One-time schedules are disabled after firing.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<FiredSchedule> {
        let minute = truncate_to_minute(now);

        // Forget guards of deleted schedules.
        let store = &self.store;
        self.last_fired.retain(|id, _| store.get(*id).is_some());

        let mut start = match self.last_tick {
            Some(prev) if prev < minute => prev + Duration::minutes(1),
            _ => minute,
        };
        let earliest = minute - Duration::minutes(MAX_CATCH_UP_MINUTES - 1);
        if start < earliest {
            tracing::warn!(
                "⏭️ Scheduler fell behind; skipping checks before {}",
                earliest
            );
            start = earliest;
        }
        if self.last_tick.is_none_or(|prev| prev < minute) {
            self.last_tick = Some(minute);
        }

        let mut fired = Vec::new();
        let mut at = start;
        while at <= minute {
            self.fire_minute(at, &mut fired);
            at += Duration::minutes(1);
        }
        fired
    }

    /// Fire every enabled schedule due in `minute` that has not fired in it yet.
    fn fire_minute(&mut self, minute: NaiveDateTime, fired: &mut Vec<FiredSchedule>) {
        let due: Vec<FiredSchedule> = self
            .store
            .enabled()
            .filter(|s| s.is_due(minute))
            .filter(|s| self.last_fired.get(&s.id) != Some(&minute))
            .map(|s| FiredSchedule {
                schedule_id: s.id,
                name: s.name.clone(),
                device_id: s.device_id,
                device_name: s.device_name.clone(),
                device_type: s.device_type,
                action: s.action.clone(),
                fired_at: minute,
            })
            .collect();

        for f in &due {
            tracing::info!(
                "🔔 Schedule triggered: '{}' → {} ({})",
                f.name,
                f.device_name,
                f.action.summary()
            );
            self.last_fired.insert(f.schedule_id, minute);

            let once = self
                .store
                .get(f.schedule_id)
                .is_some_and(|s| s.is_once());
            if once && self.store.set_enabled(f.schedule_id, false).is_ok() {
                tracing::debug!("⏹️ One-time schedule '{}' retired", f.name);
            }

            self.history.record(FiringRecord {
                schedule_id: f.schedule_id,
                schedule_name: f.name.clone(),
                device_name: f.device_name.clone(),
                fired_at: minute,
                outcome: FiringOutcome::Pending,
            });
        }

        fired.extend(due);
    }

    /// Record the result of applying a fired schedule.
    pub fn record_outcome(&mut self, fired: &FiredSchedule, result: &Result<()>) {
        let outcome = match result {
            Ok(()) => FiringOutcome::Applied,
            Err(e) => FiringOutcome::Failed(e.to_string()),
        };
        self.history.resolve(fired.schedule_id, fired.fired_at, outcome);
    }

    /// Get schedule count.
    pub fn schedule_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for SchedulerEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_to_minute(now: NaiveDateTime) -> NaiveDateTime {
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// Clamp the configured loop period to 1–60 seconds.
pub fn effective_interval(check_interval_secs: u64) -> u64 {
    if check_interval_secs > MAX_CHECK_INTERVAL_SECS {
        tracing::warn!(
            "⚠️ check_interval_secs = {} is above {}s; using {}s",
            check_interval_secs,
            MAX_CHECK_INTERVAL_SECS,
            MAX_CHECK_INTERVAL_SECS
        );
    }
    check_interval_secs.clamp(1, MAX_CHECK_INTERVAL_SECS)
}

/// Run one scheduler pass at `now`: tick the engine, then apply every fired
/// action to the registry. Returns what fired.
pub async fn run_once(
    engine: &Mutex<SchedulerEngine>,
    registry: &Mutex<DeviceRegistry>,
    now: NaiveDateTime,
) -> Vec<FiredSchedule> {
    let fired = {
        let mut eng = engine.lock().await;
        eng.tick(now)
    };
    if fired.is_empty() {
        return fired;
    }

    let results: Vec<Result<()>> = {
        let mut reg = registry.lock().await;
        fired
            .iter()
            .map(|f| executor::apply_action(&mut reg, f.device_id, f.device_type, &f.action))
            .collect()
    };

    let mut eng = engine.lock().await;
    for (f, result) in fired.iter().zip(&results) {
        match result {
            Ok(()) => tracing::info!("✅ Applied '{}' to {}", f.name, f.device_name),
            Err(e) => tracing::warn!("⚠️ Schedule '{}' failed on {}: {}", f.name, f.device_name, e),
        }
        eng.record_outcome(f, result);
    }
    fired
}

/// Spawn-able scheduler loop. Ticks every `check_interval_secs` with local
/// wall-clock time and applies fired actions to the registry.
pub async fn spawn_scheduler(
    engine: Arc<Mutex<SchedulerEngine>>,
    registry: Arc<Mutex<DeviceRegistry>>,
    check_interval_secs: u64,
) {
    let secs = effective_interval(check_interval_secs);
    tracing::info!("⏰ Scheduler started (check every {}s)", secs);

    let mut interval = tokio::time::interval(std::time::Duration::from_secs(secs));

    loop {
        interval.tick().await;
        let now = chrono::Local::now().naive_local();
        run_once(&engine, &registry, now).await;
    }
}
