use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchPage {
    pub objects: Vec<Vacancy>,
    pub total: u64,
    pub more: bool,
}

/// Unlike hh there is no nested salary object, unset bounds come back
/// as 0 and are filtered by the estimator.
#[derive(Debug, Deserialize)]
pub(crate) struct Vacancy {
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}
