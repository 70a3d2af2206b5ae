use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::market::types::{PriceBoard, Ticker};

/// Headline numbers for one user's watched tickers. Recomputed per frame
/// from the latest board; nothing here is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub avg_change: Decimal,
}

pub fn summarize(board: &PriceBoard, subscriptions: &[Ticker]) -> PortfolioSummary {
    if subscriptions.is_empty() {
        return PortfolioSummary {
            total_value: Decimal::ZERO,
            avg_change: Decimal::ZERO,
        };
    }

    let total_value: Decimal = subscriptions.iter().map(|t| board.get(*t).price).sum();
    let change_sum: Decimal = subscriptions.iter().map(|t| board.get(*t).change_pct).sum();
    let avg_change = (change_sum / Decimal::from(subscriptions.len()))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    PortfolioSummary {
        total_value,
        avg_change,
    }
}

pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", value)
}

/// Two decimals, explicit leading `+` for non-negative values.
pub fn format_pct(value: Decimal) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() {
        '-'
    } else {
        '+'
    };
    format!("{}{:.2}%", sign, value.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_subscriptions_summarize_to_zero() {
        let board = PriceBoard::seed();
        let summary = summarize(&board, &[]);

        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.avg_change, Decimal::ZERO);
    }

    #[test]
    fn seed_board_totals_for_preset_user() {
        let board = PriceBoard::seed();
        let subs = [Ticker::Tsla, Ticker::Goog, Ticker::Nvda];

        let summary = summarize(&board, &subs);

        // 242.67 + 178.34 + 891.25
        assert_eq!(summary.total_value, dec!(1312.26));
        // (1.8 - 0.5 + 3.2) / 3
        assert_eq!(summary.avg_change, dec!(1.50));
    }

    #[test]
    fn money_formatting_pads_to_cents() {
        assert_eq!(format_money(dec!(1312.26)), "$1312.26");
        assert_eq!(format_money(dec!(0)), "$0.00");
        assert_eq!(format_money(dec!(5.5)), "$5.50");
    }

    #[test]
    fn pct_formatting_signs_explicitly() {
        assert_eq!(format_pct(dec!(1.5)), "+1.50%");
        assert_eq!(format_pct(dec!(-0.5)), "-0.50%");
        assert_eq!(format_pct(Decimal::ZERO), "+0.00%");
        assert_eq!(format_pct(dec!(-0.00)), "+0.00%");
    }
}
