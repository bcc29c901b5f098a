//! Fixed-interval pacing for coin-info lookups.

use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Paces calls so two permits are never issued closer than one period.
///
/// Backed by a periodic tick source. The first permit is issued
/// immediately; every later permit waits for the next tick. Time the
/// caller spends between permits counts toward the wait, so an already-slow
/// caller is not delayed further.
pub struct RequestGate {
  ticker: Interval,
}

impl RequestGate {
  pub fn new(period: Duration) -> Self {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    Self { ticker }
  }

  /// Block until the next call is allowed.
  pub async fn acquire(&mut self) {
    self.ticker.tick().await;
  }
}
