use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrizeError {
    #[error("Unknown prize field: {0}")]
    UnknownField(String),
}

#[cfg(feature = "python")]
impl From<PrizeError> for pyo3::PyErr {
    fn from(err: PrizeError) -> Self {
        pyo3::exceptions::PyKeyError::new_err(err.to_string())
    }
}
