//! Autoplay timer model.
//!
//! The host owns the real timer (a browser interval). This type owns the
//! bookkeeping: which timer is current, when it last fired, and how many
//! periods are due at a given instant. Every arm bumps a generation counter
//! and hands out a fresh [`TimerToken`]; ticks carrying any other token are
//! stale and must be dropped. That makes cancellation deterministic even when
//! the host's old timer fires once more after being replaced.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Handle identifying one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    token: TimerToken,
    last_fire_ms: u64,
}

/// Single-slot repeating timer. At most one token is live at any time.
#[derive(Debug, Clone)]
pub struct Autoplay {
    period_ms: u64,
    generation: u64,
    armed: Option<Armed>,
}

impl Autoplay {
    /// A disarmed timer. Periods below 1 ms are raised to 1 ms.
    #[must_use]
    pub fn new(period_ms: u64) -> Self {
        Self { period_ms: period_ms.max(1), generation: 0, armed: None }
    }

    #[must_use]
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Token of the live timer, if any.
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.armed.map(|a| a.token)
    }

    /// Whether a tick carrying `token` belongs to the live timer.
    #[must_use]
    pub fn accepts(&self, token: TimerToken) -> bool {
        self.token() == Some(token)
    }

    /// Arm (or re-arm) the timer starting at `now_ms`. Any previous token becomes stale.
    pub fn arm(&mut self, now_ms: u64) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.armed = Some(Armed { token, last_fire_ms: now_ms });
        token
    }

    /// Cancel the live timer. Returns the token that was cancelled.
    pub fn disarm(&mut self) -> Option<TimerToken> {
        self.armed.take().map(|a| a.token)
    }

    /// Change the period. An armed timer restarts from `now_ms` under a new token.
    ///
    /// Returns `false` when the period is unchanged and nothing was touched.
    pub fn set_period(&mut self, period_ms: u64, now_ms: u64) -> bool {
        let period_ms = period_ms.max(1);
        if period_ms == self.period_ms {
            return false;
        }
        self.period_ms = period_ms;
        if self.armed.is_some() {
            self.arm(now_ms);
        }
        true
    }

    /// Number of whole periods elapsed since the last fire, consuming them.
    ///
    /// A timer armed at `t` fires at `t + p`, `t + 2p`, and so on. Returns 0
    /// when disarmed or when `now_ms` is earlier than the last fire.
    pub fn due(&mut self, now_ms: u64) -> u64 {
        let period = self.period_ms;
        let Some(armed) = self.armed.as_mut() else {
            return 0;
        };
        let ticks = now_ms.saturating_sub(armed.last_fire_ms) / period;
        armed.last_fire_ms += ticks * period;
        ticks
    }

    /// Record a single real-timer fire at `now_ms` for a live `token`.
    ///
    /// Returns `false` (and changes nothing) for stale tokens.
    pub fn fire(&mut self, token: TimerToken, now_ms: u64) -> bool {
        match self.armed.as_mut() {
            Some(armed) if armed.token == token => {
                armed.last_fire_ms = now_ms;
                true
            }
            _ => false,
        }
    }
}
