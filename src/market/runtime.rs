use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::debug;

use super::sim::MarketSim;
use super::types::PriceBoard;

/// Handle to the ticking simulator task.
///
/// Dropping the runtime aborts the task, so the periodic tick is released
/// exactly once, on teardown.
pub struct MarketRuntime {
    tx: broadcast::Sender<PriceBoard>,
    handle: JoinHandle<()>,
}

impl MarketRuntime {
    pub fn subscribe(&self) -> broadcast::Receiver<PriceBoard> {
        self.tx.subscribe()
    }
}

impl Drop for MarketRuntime {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn the simulator on a repeating timer, broadcasting a fresh board
/// every `tick_every`. Returns the runtime handle and the seed board so the
/// UI has something to draw before the first tick lands.
pub fn start_market(tick_every: Duration) -> (MarketRuntime, PriceBoard) {
    let (tx, _) = broadcast::channel(16);
    let mut sim = MarketSim::new();
    let initial = sim.board().clone();

    let task_tx = tx.clone();
    let handle = tokio::spawn(async move {
        let mut clock = interval(tick_every);
        // the first interval tick completes immediately
        clock.tick().await;

        loop {
            clock.tick().await;
            let board = sim.tick();
            debug!("market tick");
            // no receivers is fine, e.g. before the UI subscribes
            let _ = task_tx.send(board);
        }
    });

    (MarketRuntime { tx, handle }, initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::types::Ticker;

    #[tokio::test]
    async fn runtime_broadcasts_fresh_boards() {
        let (market, initial) = start_market(Duration::from_millis(10));
        let mut rx = market.subscribe();

        let board = rx.recv().await.expect("tick");
        for ticker in Ticker::ALL {
            assert_eq!(
                board.get(ticker).previous_price,
                initial.get(ticker).price
            );
        }
    }

    #[tokio::test]
    async fn drop_stops_the_ticker() {
        let (market, _) = start_market(Duration::from_millis(10));
        let mut rx = market.subscribe();
        drop(market);

        // drain whatever was in flight, then the channel must close
        loop {
            match rx.recv().await {
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}
