use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The listed universe. Fixed at compile time, never grows or shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ticker {
    Goog,
    Tsla,
    Amzn,
    Meta,
    Nvda,
}

impl Ticker {
    pub const ALL: [Ticker; 5] = [
        Ticker::Goog,
        Ticker::Tsla,
        Ticker::Amzn,
        Ticker::Meta,
        Ticker::Nvda,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Ticker::Goog => "GOOG",
            Ticker::Tsla => "TSLA",
            Ticker::Amzn => "AMZN",
            Ticker::Meta => "META",
            Ticker::Nvda => "NVDA",
        }
    }

    pub fn company(&self) -> &'static str {
        match self {
            Ticker::Goog => "Alphabet Inc.",
            Ticker::Tsla => "Tesla Inc.",
            Ticker::Amzn => "Amazon.com Inc.",
            Ticker::Meta => "Meta Platforms Inc.",
            Ticker::Nvda => "NVIDIA Corp.",
        }
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Last quote for one ticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRecord {
    pub price: Decimal,
    /// Signed percentage move of the last tick.
    pub change_pct: Decimal,
    /// Price before the last tick.
    pub previous_price: Decimal,
}

/// A single immutable snapshot of the whole board.
///
/// Total by construction: only built with an entry per ticker, so lookups
/// cannot miss. Replaced wholesale each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBoard {
    prices: HashMap<Ticker, PriceRecord>,
}

impl PriceBoard {
    /// Startup values, before the first tick. Seed `previous_price` equals
    /// the seed price.
    pub fn seed() -> Self {
        let seeds = [
            (Ticker::Goog, dec!(178.34), dec!(-0.5)),
            (Ticker::Tsla, dec!(242.67), dec!(1.8)),
            (Ticker::Amzn, dec!(183.45), dec!(1.2)),
            (Ticker::Meta, dec!(512.89), dec!(0.8)),
            (Ticker::Nvda, dec!(891.25), dec!(3.2)),
        ];

        let prices = seeds
            .into_iter()
            .map(|(ticker, price, change_pct)| {
                (
                    ticker,
                    PriceRecord {
                        price,
                        change_pct,
                        previous_price: price,
                    },
                )
            })
            .collect();

        Self { prices }
    }

    pub(super) fn from_records(prices: HashMap<Ticker, PriceRecord>) -> Self {
        debug_assert_eq!(prices.len(), Ticker::ALL.len());
        Self { prices }
    }

    pub fn get(&self, ticker: Ticker) -> PriceRecord {
        self.prices[&ticker]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_board_covers_every_ticker() {
        let board = PriceBoard::seed();

        for ticker in Ticker::ALL {
            let rec = board.get(ticker);
            assert!(rec.price > dec!(0));
            assert_eq!(rec.previous_price, rec.price);
            assert_ne!(rec.change_pct, dec!(0));
        }
    }

    #[test]
    fn seed_prices_match_listing() {
        let board = PriceBoard::seed();

        assert_eq!(board.get(Ticker::Goog).price, dec!(178.34));
        assert_eq!(board.get(Ticker::Tsla).price, dec!(242.67));
        assert_eq!(board.get(Ticker::Amzn).price, dec!(183.45));
        assert_eq!(board.get(Ticker::Meta).price, dec!(512.89));
        assert_eq!(board.get(Ticker::Nvda).price, dec!(891.25));
    }
}
