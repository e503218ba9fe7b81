use crate::config::Config;
use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use log::debug;
use shared::clock::{Clock, SystemClock};
use std::time::Duration;
use yew::prelude::*;

/// Owns one periodic browser timer.
///
/// The timer is cancelled on [`Ticker::stop`], when a new one is started, and
/// when the handle is dropped.
#[derive(Default)]
pub struct Ticker {
    interval: Option<Interval>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { interval: None }
    }

    /// Starts calling `callback` every `period`, replacing any running timer
    pub fn start<F>(&mut self, period: Duration, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        debug!("Starting ticker every {}ms", millis);
        self.interval = Some(Interval::new(millis, callback));
    }

    /// Cancels the timer. Safe to call any number of times; returns whether a
    /// timer was actually running.
    pub fn stop(&mut self) -> bool {
        match self.interval.take() {
            Some(interval) => {
                interval.cancel();
                debug!("Ticker stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Current instant, resampled every [`Config::tick_interval_ms`] while the
/// calling component is mounted.
#[hook]
pub fn use_clock() -> DateTime<Utc> {
    let now = use_state(|| SystemClock.now());

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let period = Duration::from_millis(u64::from(Config::tick_interval_ms()));
            let mut ticker = Ticker::new();
            ticker.start(period, move || now.set(SystemClock.now()));
            move || {
                ticker.stop();
            }
        });
    }

    *now
}
