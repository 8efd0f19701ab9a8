#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::calculator::compute;
use crate::constants::{FIELD_COMMISSION, FIELD_ENTRY_FEE, FIELD_MAX_PARTICIPANTS, FIELD_PLACE_COUNT};
use crate::error::PrizeError;
use crate::format::{DisplayOptions, PrizeDisplay};
use crate::inputs::CalculationInputs;

/// Recomputes the prize display every time a form field changes.
///
/// Holds the raw field values as last reported by the form. When a change
/// leaves the inputs insufficient, the previous display stays in place.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, Default)]
pub struct LiveCalculator {
    entry_fee: Option<String>,
    max_participants: Option<String>,
    commission: Option<String>,
    place_count: Option<String>,
    options: DisplayOptions,
    display: Option<PrizeDisplay>,
}

impl LiveCalculator {
    pub fn new(options: DisplayOptions) -> Self {
        LiveCalculator {
            options,
            ..Default::default()
        }
    }

    /// Store a raw field value and recompute.
    ///
    /// `None` clears the field. Returns the display now shown, if any.
    pub fn set_field(&mut self, name: &str, raw: Option<&str>) -> Result<Option<&PrizeDisplay>, PrizeError> {
        let slot = match name {
            FIELD_ENTRY_FEE => &mut self.entry_fee,
            FIELD_MAX_PARTICIPANTS => &mut self.max_participants,
            FIELD_COMMISSION => &mut self.commission,
            FIELD_PLACE_COUNT => &mut self.place_count,
            _ => {
                tracing::warn!(field = name, "ignoring change to unknown prize field");
                return Err(PrizeError::UnknownField(name.to_string()));
            }
        };
        *slot = raw.map(str::to_string);

        Ok(self.recalculate())
    }

    /// Recompute from the stored fields, keeping the old display on no result.
    pub fn recalculate(&mut self) -> Option<&PrizeDisplay> {
        if let Some(result) = compute(&self.inputs()) {
            self.display = Some(PrizeDisplay::from_result(&result, &self.options));
        }
        self.display.as_ref()
    }

    /// Inputs as currently coerced from the stored fields.
    pub fn inputs(&self) -> CalculationInputs {
        CalculationInputs::from_raw(
            self.entry_fee.as_deref(),
            self.max_participants.as_deref(),
            self.commission.as_deref(),
            self.place_count.as_deref(),
        )
    }

    pub fn display(&self) -> Option<&PrizeDisplay> {
        self.display.as_ref()
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PLACE_COUNT;

    fn filled() -> LiveCalculator {
        let mut calc = LiveCalculator::default();
        calc.set_field("entry_fee", Some("100000")).unwrap();
        calc.set_field("max_participants", Some("20")).unwrap();
        calc.set_field("platform_commission", Some("10")).unwrap();
        calc.set_field("best_of", Some("3")).unwrap();
        calc
    }

    #[test]
    fn test_no_display_until_sufficient() {
        let mut calc = LiveCalculator::default();
        assert!(calc.set_field("entry_fee", Some("5000")).unwrap().is_none());
        assert!(calc.display().is_none());

        let shown = calc.set_field("max_participants", Some("4")).unwrap();
        assert_eq!(shown.map(|d| d.total_pool.as_str()), Some("20،000 تومان"));
    }

    #[test]
    fn test_recomputes_on_each_change() {
        let mut calc = filled();
        assert_eq!(calc.display().unwrap().breakdown.len(), 3);
        assert_eq!(calc.display().unwrap().pool_after_commission, "1،800،000 تومان");

        calc.set_field("best_of", Some("12")).unwrap();
        assert_eq!(calc.display().unwrap().breakdown.len(), 12);
    }

    #[test]
    fn test_insufficient_change_keeps_previous_display() {
        let mut calc = filled();
        let before = calc.display().cloned();

        let shown = calc.set_field("entry_fee", Some("")).unwrap().cloned();
        assert_eq!(shown, before);
        assert_eq!(calc.display().cloned(), before);

        calc.set_field("max_participants", None).unwrap();
        assert_eq!(calc.display().cloned(), before);
    }

    #[test]
    fn test_huge_best_of_is_bounded() {
        let mut calc = LiveCalculator::default();
        calc.set_field("entry_fee", Some("1000")).unwrap();
        calc.set_field("max_participants", Some("10")).unwrap();

        let shown = calc.set_field("best_of", Some("99999999999")).unwrap();
        assert_eq!(shown.map(|d| d.breakdown.len()), Some(MAX_PLACE_COUNT as usize));

        calc.set_field("best_of", Some("1e30")).unwrap();
        assert_eq!(calc.display().unwrap().breakdown.len(), 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut calc = filled();
        let before = calc.inputs();

        let err = calc.set_field("prize_pool", Some("1")).unwrap_err();
        assert_eq!(err, PrizeError::UnknownField("prize_pool".to_string()));
        assert_eq!(calc.inputs(), before);
    }

    #[test]
    fn test_custom_options() {
        let mut calc = LiveCalculator::new(DisplayOptions::new(',', "IRT".to_string()));
        calc.set_field("entry_fee", Some("1500")).unwrap();
        calc.set_field("max_participants", Some("1000")).unwrap();
        assert_eq!(calc.display().unwrap().total_pool, "1,500,000 IRT");
        assert_eq!(calc.options().currency, "IRT");
    }
}
