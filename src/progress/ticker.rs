//! Periodic callbacks while a future is pending.

use std::future::Future;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};

/// Tick period used for progress notifications.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Await `future`, calling `on_tick` once per `period` until it resolves.
///
/// No tick fires if the future is already complete on first poll.
pub async fn drive_with_ticks<F, T>(future: F, period: Duration, mut on_tick: impl FnMut()) -> T
where
    F: Future<Output = T>,
{
    tokio::pin!(future);

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            biased;
            out = &mut future => return out,
            _ = ticker.tick() => on_tick(),
        }
    }
}
