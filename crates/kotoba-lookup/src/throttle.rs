use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleRejection {
    /// A request is still in flight
    Busy,
    /// Previous request started less than one cooldown ago
    TooFrequent,
}

/// Client-side gate: one request in flight, and request starts spaced
/// by at least `cooldown`.
#[derive(Debug, Clone)]
pub struct RequestThrottle {
    cooldown: Duration,
    in_flight: bool,
    last_started: Option<Instant>,
}

impl RequestThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            in_flight: false,
            last_started: None,
        }
    }

    /// Whether a request could start at `now`, without claiming the slot
    pub fn check(&self, now: Instant) -> Result<(), ThrottleRejection> {
        if self.in_flight {
            return Err(ThrottleRejection::Busy);
        }

        if let Some(last) = self.last_started
            && now.saturating_duration_since(last) < self.cooldown
        {
            return Err(ThrottleRejection::TooFrequent);
        }

        Ok(())
    }

    /// Claim the slot for a request starting at `now`.
    ///
    /// On success the cooldown restarts from `now`, not from completion.
    pub fn try_acquire(&mut self, now: Instant) -> Result<(), ThrottleRejection> {
        self.check(now)?;

        self.in_flight = true;
        self.last_started = Some(now);
        Ok(())
    }

    /// Mark the in-flight request as completed
    pub fn release(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}
