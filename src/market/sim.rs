use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::types::{PriceBoard, PriceRecord, Ticker};

/// Random-walk generator behind the live board.
///
/// Each tick moves every ticker independently by a uniform percentage in
/// [-2%, +2%), floored so prices never drop below 1.
#[derive(Debug)]
pub struct MarketSim {
    board: PriceBoard,
    rng: StdRng,
}

impl MarketSim {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic walk for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            board: PriceBoard::seed(),
            rng,
        }
    }

    pub fn board(&self) -> &PriceBoard {
        &self.board
    }

    /// Advance every ticker one step and publish a fresh board.
    pub fn tick(&mut self) -> PriceBoard {
        let mut next = HashMap::with_capacity(Ticker::ALL.len());

        for ticker in Ticker::ALL {
            let prev = self.board.get(ticker);

            let pct = (self.rng.gen::<f64>() - 0.5) * 4.0;
            let pct = Decimal::from_f64(pct).unwrap_or(Decimal::ZERO);

            let change_amount = prev.price * pct / dec!(100);
            let price = (prev.price + change_amount).max(dec!(1));

            next.insert(
                ticker,
                PriceRecord {
                    price: round2(price),
                    change_pct: round2(pct),
                    previous_price: prev.price,
                },
            );
        }

        self.board = PriceBoard::from_records(next);
        self.board.clone()
    }
}

impl Default for MarketSim {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
