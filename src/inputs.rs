#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::constants::DEFAULT_PLACE_COUNT;

/// Snapshot of the four form fields driving a calculation.
///
/// Values are taken as given; only the coercion in [`CalculationInputs::from_raw`]
/// is applied. Commission is not clamped to `[0, 100]`.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationInputs {
    /// Currency units paid by each participant
    pub entry_fee: f64,

    pub max_participants: i64,

    /// Platform commission as a percentage of the total pool
    pub commission_percent: f64,

    /// Number of ranked places that receive a share
    pub place_count: i64,
}

impl Default for CalculationInputs {
    fn default() -> Self {
        CalculationInputs {
            entry_fee: 0.0,
            max_participants: 0,
            commission_percent: 0.0,
            place_count: DEFAULT_PLACE_COUNT as i64,
        }
    }
}

impl CalculationInputs {
    pub fn new(entry_fee: f64, max_participants: i64, commission_percent: f64, place_count: i64) -> Self {
        CalculationInputs {
            entry_fee,
            max_participants,
            commission_percent,
            place_count,
        }
    }

    /// Assemble inputs from raw form values.
    ///
    /// Missing or unparseable values become 0, except the place count which
    /// becomes 1. A parsed place count of 0 also becomes 1.
    pub fn from_raw(
        entry_fee: Option<&str>,
        max_participants: Option<&str>,
        commission_percent: Option<&str>,
        place_count: Option<&str>,
    ) -> Self {
        let place_count = match place_count.and_then(parse_int_prefix) {
            Some(0) | None => DEFAULT_PLACE_COUNT as i64,
            Some(n) => n,
        };

        CalculationInputs {
            entry_fee: coerce_float(entry_fee),
            max_participants: max_participants.and_then(parse_int_prefix).unwrap_or(0),
            commission_percent: coerce_float(commission_percent),
            place_count,
        }
    }

    /// Whether the guard lets this snapshot produce a result.
    pub fn is_sufficient(&self) -> bool {
        self.entry_fee > 0.0 && self.max_participants > 0
    }
}

fn coerce_float(raw: Option<&str>) -> f64 {
    raw.and_then(parse_float_prefix)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse the longest leading decimal number in `raw`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with at
/// most one decimal point, and an exponent only when digits follow it.
/// Trailing garbage is ignored: `"12.5kg"` parses as `12.5`.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Parse the leading integer in `raw`, truncating at the first non-digit.
///
/// `"3.9"` parses as `3`. Values past the `i64` range saturate.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = count_digits(&bytes[sign_len..]);
    if digits == 0 {
        return None;
    }

    let text = &s[..sign_len + digits];
    match text.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) if bytes[0] == b'-' => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
