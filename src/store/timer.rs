//! Per-session countdown timer

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

pub const TIMER_FINISHED_MESSAGE: &str = "Timer finished!";
const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub is_active: bool,
    pub is_paused: bool,
    pub remaining_seconds: u32,
    pub recipe_id: Option<String>,
    pub recipe_title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Paused,
    Running(u32),
    Finished,
}

impl TimerState {
    /// One second of countdown. Reaching zero resets the timer.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_active {
            return TickOutcome::Idle;
        }
        if self.is_paused {
            return TickOutcome::Paused;
        }
        if self.remaining_seconds <= 1 {
            *self = TimerState::default();
            return TickOutcome::Finished;
        }
        self.remaining_seconds -= 1;
        TickOutcome::Running(self.remaining_seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerFinished {
    pub recipe_id: Option<String>,
    pub recipe_title: Option<String>,
    pub message: String,
}

#[derive(Debug)]
pub struct CountdownTimer {
    state: Arc<Mutex<TimerState>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    // latest finish not yet seen by a poller
    unseen_finish: Arc<Mutex<Option<TimerFinished>>>,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TimerState::default())),
            ticker: Mutex::new(None),
            unseen_finish: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn snapshot(&self) -> TimerState {
        self.state.lock().await.clone()
    }

    /// The most recent finish since the last call, if any
    pub async fn take_finished(&self) -> Option<TimerFinished> {
        self.unseen_finish.lock().await.take()
    }

    /// Replaces any running timer
    pub async fn start(&self, recipe_id: &str, recipe_title: &str, seconds: u32) -> TimerState {
        let mut ticker = self.ticker.lock().await;
        if let Some(handle) = ticker.take() {
            handle.abort();
        }

        let started = TimerState {
            is_active: seconds > 0,
            is_paused: false,
            remaining_seconds: seconds,
            recipe_id: Some(recipe_id.to_string()),
            recipe_title: Some(recipe_title.to_string()),
        };

        if seconds == 0 {
            *self.state.lock().await = TimerState::default();
            self.notify_finished(&started).await;
            return TimerState::default();
        }

        *self.state.lock().await = started.clone();
        info!(recipe_id = %recipe_id, seconds = seconds, "Timer started");

        let state = Arc::clone(&self.state);
        let unseen_finish = Arc::clone(&self.unseen_finish);
        *ticker = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK, TICK);
            loop {
                interval.tick().await;
                let mut current = state.lock().await;
                let before = current.clone();
                match current.tick() {
                    TickOutcome::Finished => {
                        drop(current);
                        info!(recipe_id = ?before.recipe_id, "{}", TIMER_FINISHED_MESSAGE);
                        let finished = TimerFinished {
                            recipe_id: before.recipe_id,
                            recipe_title: before.recipe_title,
                            message: TIMER_FINISHED_MESSAGE.to_string(),
                        };
                        *unseen_finish.lock().await = Some(finished);
                        break;
                    }
                    TickOutcome::Idle => break,
                    TickOutcome::Running(_) | TickOutcome::Paused => {}
                }
            }
        }));

        started
    }

    /// Flips pause on an active timer; inactive timers are left alone
    pub async fn toggle_pause(&self) -> TimerState {
        let mut state = self.state.lock().await;
        if state.is_active {
            state.is_paused = !state.is_paused;
            debug!(paused = state.is_paused, "Timer pause toggled");
        }
        state.clone()
    }

    pub async fn stop(&self) -> TimerState {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
        let mut state = self.state.lock().await;
        *state = TimerState::default();
        state.clone()
    }

    async fn notify_finished(&self, timer: &TimerState) {
        info!(recipe_id = ?timer.recipe_id, "{}", TIMER_FINISHED_MESSAGE);
        let finished = TimerFinished {
            recipe_id: timer.recipe_id.clone(),
            recipe_title: timer.recipe_title.clone(),
            message: TIMER_FINISHED_MESSAGE.to_string(),
        };
        *self.unseen_finish.lock().await = Some(finished);
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        if let Ok(mut ticker) = self.ticker.try_lock() {
            if let Some(handle) = ticker.take() {
                handle.abort();
            }
        }
    }
}
