use std::time::{Duration, Instant};

const BASE_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Default)]
pub struct Ticker {
    last_fire: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.last_fire.is_some()
    }

    /// Arms the ticker; the first fire happens one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_fire = Some(now);
    }

    pub fn stop(&mut self) {
        self.last_fire = None;
    }

    pub fn interval(speed: f32) -> Duration {
        BASE_INTERVAL.div_f32(speed)
    }

    /// Returns true at most once per interval and re-arms from `now`.
    pub fn poll(&mut self, now: Instant, speed: f32) -> bool {
        let Some(last) = self.last_fire else {
            return false;
        };
        if now.saturating_duration_since(last) >= Self::interval(speed) {
            self.last_fire = Some(now);
            true
        } else {
            false
        }
    }

    pub fn time_until_next(&self, now: Instant, speed: f32) -> Option<Duration> {
        let last = self.last_fire?;
        Some(Self::interval(speed).saturating_sub(now.saturating_duration_since(last)))
    }
}
