//! Python bindings, exposed as the `prize_core` extension module.

use pyo3::prelude::*;

use crate::calculator::{compute, compute_batch, CalculationResult, PrizeShare};
use crate::constants::{
    CURRENCY_LABEL, DEFAULT_PLACE_COUNT, GROUP_SEPARATOR, MAX_CURATED_PLACES, MAX_PLACE_COUNT,
};
use crate::distribution::{DistributionTable, RuleSet, Share};
use crate::format::{format_amount, DisplayLine, DisplayOptions, PrizeDisplay};
use crate::inputs::CalculationInputs;
use crate::live::LiveCalculator;

#[pymethods]
impl Share {
    fn __repr__(&self) -> String {
        format!("Share(rank={}, percent={})", self.rank, self.percent)
    }
}

#[pymethods]
impl RuleSet {
    #[getter(total_percent)]
    fn py_total_percent(&self) -> f64 {
        self.total_percent()
    }

    fn __len__(&self) -> usize {
        self.shares.len()
    }

    fn __repr__(&self) -> String {
        format!("RuleSet({} places)", self.shares.len())
    }
}

#[pymethods]
impl CalculationInputs {
    #[new]
    #[pyo3(signature = (entry_fee = 0.0, max_participants = 0, commission_percent = 0.0, place_count = 1))]
    fn py_new(entry_fee: f64, max_participants: i64, commission_percent: f64, place_count: i64) -> Self {
        CalculationInputs::new(entry_fee, max_participants, commission_percent, place_count)
    }

    /// Build inputs from raw form strings; missing values may be None.
    #[staticmethod]
    #[pyo3(name = "from_raw", signature = (entry_fee = None, max_participants = None, commission_percent = None, place_count = None))]
    fn py_from_raw(
        entry_fee: Option<&str>,
        max_participants: Option<&str>,
        commission_percent: Option<&str>,
        place_count: Option<&str>,
    ) -> Self {
        CalculationInputs::from_raw(entry_fee, max_participants, commission_percent, place_count)
    }

    #[pyo3(name = "is_sufficient")]
    fn py_is_sufficient(&self) -> bool {
        self.is_sufficient()
    }

    fn __repr__(&self) -> String {
        format!(
            "CalculationInputs(entry_fee={}, max_participants={}, commission_percent={}, place_count={})",
            self.entry_fee, self.max_participants, self.commission_percent, self.place_count
        )
    }
}

#[pymethods]
impl PrizeShare {
    fn __repr__(&self) -> String {
        format!(
            "PrizeShare(rank={}, share_percent={}, amount={})",
            self.rank, self.share_percent, self.amount
        )
    }
}

#[pymethods]
impl CalculationResult {
    #[pyo3(name = "total_distributed")]
    fn py_total_distributed(&self) -> f64 {
        self.total_distributed()
    }

    fn __repr__(&self) -> String {
        format!(
            "CalculationResult(total_pool={}, commission_amount={}, pool_after_commission={}, {} places)",
            self.total_pool,
            self.commission_amount,
            self.pool_after_commission,
            self.distribution.len()
        )
    }
}

#[pymethods]
impl DisplayOptions {
    #[new]
    #[pyo3(signature = (separator = GROUP_SEPARATOR, currency = CURRENCY_LABEL.to_string()))]
    fn py_new(separator: char, currency: String) -> Self {
        DisplayOptions::new(separator, currency)
    }

    fn __repr__(&self) -> String {
        format!("DisplayOptions(separator={:?}, currency={:?})", self.separator, self.currency)
    }
}

#[pymethods]
impl DisplayLine {
    fn __str__(&self) -> String {
        format!("{} {}: {} ({}%)", self.medal, self.rank, self.amount, self.percent)
    }
}

#[pymethods]
impl PrizeDisplay {
    #[staticmethod]
    #[pyo3(name = "from_result", signature = (result, options = None))]
    fn py_from_result(result: &CalculationResult, options: Option<DisplayOptions>) -> Self {
        PrizeDisplay::from_result(result, &options.unwrap_or_default())
    }

    #[pyo3(name = "lines")]
    fn py_lines(&self) -> Vec<String> {
        self.lines()
    }

    fn __str__(&self) -> String {
        self.lines().join("\n")
    }
}

#[pymethods]
impl LiveCalculator {
    #[new]
    #[pyo3(signature = (options = None))]
    fn py_new(options: Option<DisplayOptions>) -> Self {
        LiveCalculator::new(options.unwrap_or_default())
    }

    /// Store a raw field value and return the display now shown.
    ///
    /// Raises KeyError for unknown field names.
    #[pyo3(name = "set_field", signature = (name, raw = None))]
    fn py_set_field(&mut self, name: &str, raw: Option<&str>) -> PyResult<Option<PrizeDisplay>> {
        Ok(self.set_field(name, raw)?.cloned())
    }

    #[pyo3(name = "recalculate")]
    fn py_recalculate(&mut self) -> Option<PrizeDisplay> {
        self.recalculate().cloned()
    }

    #[getter(display)]
    fn py_display(&self) -> Option<PrizeDisplay> {
        self.display().cloned()
    }

    #[getter(inputs)]
    fn py_inputs(&self) -> CalculationInputs {
        self.inputs()
    }

    fn __repr__(&self) -> String {
        format!("LiveCalculator(showing={})", self.display().is_some())
    }
}

/// Rule set for a place count; non-positive or non-integral values mean 1.
#[pyfunction]
#[pyo3(name = "get_rule_set")]
fn py_get_rule_set(place_count: f64) -> RuleSet {
    DistributionTable::global().rule_set_real(place_count)
}

/// Calculate the prize distribution, or None when inputs are insufficient.
#[pyfunction]
#[pyo3(name = "compute")]
fn py_compute(inputs: &CalculationInputs) -> Option<CalculationResult> {
    compute(inputs)
}

/// Calculate many snapshots in parallel, releasing the GIL.
#[pyfunction]
#[pyo3(name = "compute_batch")]
fn py_compute_batch(py: Python<'_>, inputs: Vec<CalculationInputs>) -> Vec<Option<CalculationResult>> {
    py.allow_threads(|| compute_batch(&inputs))
}

#[pyfunction]
#[pyo3(name = "format_amount", signature = (amount, separator = GROUP_SEPARATOR))]
fn py_format_amount(amount: f64, separator: char) -> String {
    format_amount(amount, separator)
}

/// Python module definition
#[pymodule]
fn prize_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<Share>()?;
    m.add_class::<RuleSet>()?;
    m.add_class::<CalculationInputs>()?;
    m.add_class::<PrizeShare>()?;
    m.add_class::<CalculationResult>()?;
    m.add_class::<DisplayOptions>()?;
    m.add_class::<DisplayLine>()?;
    m.add_class::<PrizeDisplay>()?;
    m.add_class::<LiveCalculator>()?;

    // Functions
    m.add_function(wrap_pyfunction!(py_get_rule_set, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_batch, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_amount, m)?)?;

    // Constants
    m.add("MAX_CURATED_PLACES", MAX_CURATED_PLACES)?;
    m.add("DEFAULT_PLACE_COUNT", DEFAULT_PLACE_COUNT)?;
    m.add("MAX_PLACE_COUNT", MAX_PLACE_COUNT)?;

    Ok(())
}
