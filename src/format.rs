#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::calculator::CalculationResult;
use crate::constants::{CURRENCY_LABEL, GROUP_SEPARATOR, PODIUM_MEDALS, RANK_MEDAL};

/// Display settings for rendered amounts.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayOptions {
    /// Thousands separator substituted for the standard comma
    pub separator: char,

    /// Label appended after each amount
    pub currency: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            separator: GROUP_SEPARATOR,
            currency: CURRENCY_LABEL.to_string(),
        }
    }
}

impl DisplayOptions {
    pub fn new(separator: char, currency: String) -> Self {
        DisplayOptions { separator, currency }
    }

    fn money(&self, amount: f64) -> String {
        format!("{} {}", format_amount(amount, self.separator), self.currency)
    }
}

/// Floor `amount` to a whole unit and group thousands with `separator`.
///
/// `format_amount(1234567.9, ',')` is `"1,234,567"`.
pub fn format_amount(amount: f64, separator: char) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let floored = amount.floor();
    // avoid rendering "-0"
    let floored = if floored == 0.0 { 0.0 } else { floored };
    let digits = format!("{:.0}", floored.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if floored < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Share percentage rounded to a whole percent, for display only.
pub fn display_percent(percent: f64) -> i64 {
    percent.round() as i64
}

pub fn medal(rank: u32) -> &'static str {
    match rank {
        1..=3 => PODIUM_MEDALS[(rank - 1) as usize],
        _ => RANK_MEDAL,
    }
}

/// One rendered entry of the per-rank breakdown.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayLine {
    pub rank: u32,
    pub medal: String,
    pub amount: String,
    pub percent: i64,
}

/// The three display regions derived from a calculation result.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct PrizeDisplay {
    pub total_pool: String,
    pub pool_after_commission: String,

    /// Commission actually deducted, shown next to the post-commission pool
    pub commission: String,

    pub breakdown: Vec<DisplayLine>,
}

impl PrizeDisplay {
    pub fn from_result(result: &CalculationResult, options: &DisplayOptions) -> Self {
        let breakdown = result
            .distribution
            .iter()
            .map(|prize| DisplayLine {
                rank: prize.rank,
                medal: medal(prize.rank).to_string(),
                amount: options.money(prize.amount),
                percent: display_percent(prize.share_percent),
            })
            .collect();

        PrizeDisplay {
            total_pool: options.money(result.total_pool),
            pool_after_commission: options.money(result.pool_after_commission),
            commission: options.money(result.commission_amount),
            breakdown,
        }
    }

    /// Plain-text rendering, one line per region followed by one per rank.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.breakdown.len() + 2);
        lines.push(format!("💰 {}", self.total_pool));
        lines.push(format!("💵 {} (-{})", self.pool_after_commission, self.commission));
        for line in &self.breakdown {
            lines.push(format!("{} {}: {} ({}%)", line.medal, line.rank, line.amount, line.percent));
        }
        lines
    }
}
