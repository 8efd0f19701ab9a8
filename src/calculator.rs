#[cfg(feature = "python")]
use pyo3::prelude::*;
use rayon::prelude::*;

use crate::distribution::DistributionTable;
use crate::inputs::CalculationInputs;

/// Prize awarded to one rank, before any display rounding.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrizeShare {
    pub rank: u32,
    pub share_percent: f64,
    pub amount: f64,
}

/// Outcome of one prize calculation.
///
/// Amounts are unrounded; flooring to whole currency units happens only
/// when formatting for display.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResult {
    pub total_pool: f64,
    pub commission_amount: f64,
    pub pool_after_commission: f64,

    /// One entry per ranked place, ascending by rank
    pub distribution: Vec<PrizeShare>,
}

impl CalculationResult {
    /// Sum of all per-rank amounts; equals `pool_after_commission` up to rounding error.
    pub fn total_distributed(&self) -> f64 {
        self.distribution.iter().map(|p| p.amount).sum()
    }
}

/// Calculate the prize pool and its per-rank distribution.
///
/// Returns `None` when the entry fee or participant count is not positive,
/// which callers must treat as "nothing to show" rather than a zero prize.
///
/// # Arguments
/// * `inputs` - Snapshot of the form fields
/// * `table` - Share rules to distribute the post-commission pool with
pub fn compute_with(inputs: &CalculationInputs, table: &DistributionTable) -> Option<CalculationResult> {
    if !inputs.is_sufficient() {
        tracing::debug!(
            entry_fee = inputs.entry_fee,
            max_participants = inputs.max_participants,
            "insufficient input, no prize result"
        );
        return None;
    }

    let total_pool = inputs.entry_fee * inputs.max_participants as f64;
    let commission_amount = total_pool * inputs.commission_percent / 100.0;
    let pool_after_commission = total_pool - commission_amount;

    let distribution = table
        .rule_set_signed(inputs.place_count)
        .iter()
        .map(|share| PrizeShare {
            rank: share.rank,
            share_percent: share.percent,
            amount: pool_after_commission * share.percent / 100.0,
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        total_pool,
        commission_amount,
        pool_after_commission,
        places = distribution.len(),
        "computed prize distribution"
    );

    Some(CalculationResult {
        total_pool,
        commission_amount,
        pool_after_commission,
        distribution,
    })
}

/// Calculate against the process-wide distribution table.
pub fn compute(inputs: &CalculationInputs) -> Option<CalculationResult> {
    compute_with(inputs, DistributionTable::global())
}

/// Calculate many snapshots at once.
///
/// Uses parallel processing; output order matches `inputs`.
pub fn compute_batch(inputs: &[CalculationInputs]) -> Vec<Option<CalculationResult>> {
    let table = DistributionTable::global();
    inputs.par_iter().map(|i| compute_with(i, table)).collect()
}
