#[cfg(feature = "python")]
use pyo3::prelude::*;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::constants::{CURATED_SHARES, DEFAULT_PLACE_COUNT, MAX_PLACE_COUNT};

/// Percentage of the post-commission pool awarded to one rank.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Share {
    pub rank: u32,
    pub percent: f64,
}

/// Ordered shares for a fixed place count.
///
/// Ranks are always the contiguous sequence `1..=place_count`.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSet {
    pub shares: Vec<Share>,
}

impl RuleSet {
    /// Build a rule set from percentages listed in rank order.
    pub fn from_percents(percents: &[f64]) -> Self {
        let shares = percents
            .iter()
            .zip(1..)
            .map(|(&percent, rank)| Share { rank, percent })
            .collect();
        RuleSet { shares }
    }

    /// Equal split of 100% across `place_count` ranks.
    ///
    /// Shares are left as `100 / place_count` without rounding.
    pub fn equal_split(place_count: u32) -> Self {
        let percent = 100.0 / place_count as f64;
        let shares = (1..=place_count).map(|rank| Share { rank, percent }).collect();
        RuleSet { shares }
    }

    pub fn place_count(&self) -> u32 {
        self.shares.len() as u32
    }

    pub fn total_percent(&self) -> f64 {
        self.shares.iter().map(|s| s.percent).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Share> {
        self.shares.iter()
    }
}

/// Lookup from place count to rule set.
///
/// Place counts 1 through 8 come from the curated table; larger counts are
/// synthesized as an equal split on demand.
#[derive(Clone, Debug)]
pub struct DistributionTable {
    curated: HashMap<u32, RuleSet>,
}

static TABLE: OnceLock<DistributionTable> = OnceLock::new();

impl Default for DistributionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DistributionTable {
    pub fn new() -> Self {
        let curated = CURATED_SHARES
            .iter()
            .zip(1..)
            .map(|(percents, place_count)| (place_count, RuleSet::from_percents(percents)))
            .collect();
        DistributionTable { curated }
    }

    /// Process-wide table, built on first use and never mutated.
    pub fn global() -> &'static DistributionTable {
        TABLE.get_or_init(DistributionTable::new)
    }

    /// Rule set for `place_count`.
    ///
    /// Zero is treated as a single winner; counts above `MAX_PLACE_COUNT`
    /// are clamped to it.
    pub fn rule_set(&self, place_count: u32) -> RuleSet {
        let place_count = place_count.clamp(DEFAULT_PLACE_COUNT, MAX_PLACE_COUNT);
        match self.curated.get(&place_count) {
            Some(rules) => rules.clone(),
            None => {
                tracing::trace!(place_count, "synthesizing equal-split rule set");
                RuleSet::equal_split(place_count)
            }
        }
    }

    /// Rule set for a signed place count; anything below 1 becomes 1.
    pub fn rule_set_signed(&self, place_count: i64) -> RuleSet {
        self.rule_set(coerce_place_count(place_count))
    }

    /// Rule set for a real-valued place count.
    ///
    /// Non-finite, non-integral or non-positive values become 1.
    pub fn rule_set_real(&self, place_count: f64) -> RuleSet {
        if !place_count.is_finite() || place_count.fract() != 0.0 {
            return self.rule_set(DEFAULT_PLACE_COUNT);
        }
        // `as` saturates for values beyond the i64 range
        self.rule_set_signed(place_count as i64)
    }
}

/// Clamp a signed place count into `1..=MAX_PLACE_COUNT`.
pub fn coerce_place_count(place_count: i64) -> u32 {
    let clamped = place_count.clamp(DEFAULT_PLACE_COUNT as i64, MAX_PLACE_COUNT as i64);
    u32::try_from(clamped).unwrap_or(MAX_PLACE_COUNT)
}

/// Look up the rule set for `place_count` in the global table.
pub fn get_rule_set(place_count: i64) -> RuleSet {
    DistributionTable::global().rule_set_signed(place_count)
}
