use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, warn};

use crate::dto::draft_dto::Draft;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DraftTimerConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_channel_capacity() -> usize {
    16
}

impl Default for DraftTimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl DraftTimerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Channel sized for this config, ready to hand to [`spawn_draft_timer`].
    pub fn channel(&self) -> (broadcast::Sender<TimerEvent>, broadcast::Receiver<TimerEvent>) {
        broadcast::channel(self.channel_capacity.max(1))
    }
}

pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// `None` when the limit is too large to represent as a date.
pub fn turn_deadline(start: DateTime<Utc>, limit_minutes: i64) -> Option<DateTime<Utc>> {
    let limit = TimeDelta::try_minutes(limit_minutes)?;
    start.checked_add_signed(limit)
}

/// Time left in the turn, never negative.
pub fn time_remaining(
    start: DateTime<Utc>,
    limit_minutes: i64,
    now: DateTime<Utc>,
) -> Option<TimeDelta> {
    let deadline = turn_deadline(start, limit_minutes)?;
    Some((deadline - now).max(TimeDelta::zero()))
}

/// `HH:MM:SS`, truncating sub-second remainders. Hours are not capped at 24.
pub fn format_remaining(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockTick {
    Running(String),
    /// The deadline passed on this tick. Reported once.
    Expired,
    /// Already expired on an earlier tick.
    Idle,
}

/// Countdown for the player on the clock.
#[derive(Debug, Clone)]
pub struct DraftTimerClock {
    deadline: DateTime<Utc>,
    expired: bool,
}

impl DraftTimerClock {
    pub fn new(start: DateTime<Utc>, limit_minutes: i64) -> Option<Self> {
        Some(Self {
            deadline: turn_deadline(start, limit_minutes)?,
            expired: false,
        })
    }

    /// Only an ongoing draft with a turn start time and a positive limit is timed.
    pub fn from_draft(draft: &Draft) -> Option<Self> {
        if !draft.status.is_active() || draft.turn_time_limit <= 0 {
            return None;
        }
        let start = draft.current_turn_start_time?;
        let clock = Self::new(start, draft.turn_time_limit);
        if clock.is_none() {
            warn!(
                "Turn limit of {} minutes for league {} is out of range, not timing it.",
                draft.turn_time_limit, draft.league_id
            );
        }
        clock
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> ClockTick {
        if self.expired {
            return ClockTick::Idle;
        }

        let diff = self.deadline - now;
        if diff <= TimeDelta::zero() {
            self.expired = true;
            return ClockTick::Expired;
        }

        ClockTick::Running(format_remaining(diff))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerEvent {
    Tick { remaining: String },
    Expired,
}

/// Owns the ticking task. Stopping or dropping the handle cancels it.
#[derive(Debug)]
pub struct DraftTimerHandle {
    task: JoinHandle<()>,
}

impl DraftTimerHandle {
    pub fn stop(&self) {
        if !self.task.is_finished() {
            info!("Stopping draft timer.");
        }
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for DraftTimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Starts ticking for the draft's current turn.
///
/// The first tick fires one interval after the call. Each tick broadcasts the
/// remaining time. Once the deadline passes a final `00:00:00` tick and a
/// single [`TimerEvent::Expired`] are sent and the task ends. Returns `None`
/// when the draft is not timed. Must be called from within a tokio runtime.
pub fn spawn_draft_timer<C: Clock>(
    clock: C,
    draft: &Draft,
    config: &DraftTimerConfig,
    tx: broadcast::Sender<TimerEvent>,
) -> Option<DraftTimerHandle> {
    let Some(mut timer) = DraftTimerClock::from_draft(draft) else {
        debug!("Draft for league {} is not timed, no timer started.", draft.league_id);
        return None;
    };

    let period = config.tick_interval();
    info!(
        "Starting draft timer for league {} (deadline {}).",
        draft.league_id,
        timer.deadline()
    );

    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            match timer.tick(clock.now()) {
                ClockTick::Running(remaining) => {
                    let _ = tx.send(TimerEvent::Tick { remaining });
                }
                ClockTick::Expired => {
                    info!("Draft turn expired.");
                    let _ = tx.send(TimerEvent::Tick {
                        remaining: format_remaining(TimeDelta::zero()),
                    });
                    let _ = tx.send(TimerEvent::Expired);
                    break;
                }
                ClockTick::Idle => break,
            }
        }
    });

    Some(DraftTimerHandle { task })
}
