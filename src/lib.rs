//! Prize Core - tournament prize pool calculator.
//!
//! Computes the total prize pool from entry fees, deducts platform commission,
//! and splits the remainder among the top finishers using a fixed share table.
//! Python bindings via PyO3 are available behind the `python` feature.

pub mod calculator;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod format;
pub mod inputs;
pub mod live;

#[cfg(feature = "python")]
mod python;

pub use calculator::{compute, compute_batch, compute_with, CalculationResult, PrizeShare};
pub use constants::{DEFAULT_PLACE_COUNT, MAX_CURATED_PLACES, MAX_PLACE_COUNT};
pub use distribution::{get_rule_set, DistributionTable, RuleSet, Share};
pub use error::PrizeError;
pub use format::{display_percent, format_amount, medal, DisplayLine, DisplayOptions, PrizeDisplay};
pub use inputs::CalculationInputs;
pub use live::LiveCalculator;
