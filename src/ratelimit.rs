use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
};
use std::time::Duration;

// Keep at least this long between consecutive requests so we don't hammer
// the cricinfo site too much.
const DELAY_BETWEEN_REQ: Duration = Duration::from_secs(1);

type SpecificGovernorRateLimiter =
    GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock, NoOpMiddleware<QuantaInstant>>;

pub struct Throttle {
    delay_between_req: SpecificGovernorRateLimiter,
}

impl Throttle {
    pub fn new() -> Self {
        Self::with_period(DELAY_BETWEEN_REQ)
    }

    /// A throttle with a custom period. The quota allows a burst of one, so
    /// the first caller passes immediately and every later caller waits out
    /// the full period since the previous pass.
    pub fn with_period(period: Duration) -> Self {
        let delay_between_req = GovernorRateLimiter::direct(Quota::with_period(period).unwrap());
        Throttle { delay_between_req }
    }

    pub async fn wait_until_ready(&self) {
        self.delay_between_req.until_ready().await;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn consecutive_waits_are_separated_by_the_period() {
        let throttle = Throttle::with_period(Duration::from_millis(50));
        let start = Instant::now();
        throttle.wait_until_ready().await;
        let first = start.elapsed();
        throttle.wait_until_ready().await;
        let second = start.elapsed();

        // First pass is immediate, second has to wait out the period.
        assert!(first < Duration::from_millis(40));
        assert!(second >= Duration::from_millis(50));
    }
}
