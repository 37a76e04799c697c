use serde::{Deserialize, Serialize};

/// Tax rate served whenever the backend has no authoritative value.
pub const DEFAULT_TAX_RATE: f64 = 18.0;

/// Payload of the tax rate endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxRatePayload {
    /// Tax rate in percent.
    pub tax_rate: f64,
}

impl TaxRatePayload {
    pub fn new(tax_rate: f64) -> Self {
        Self { tax_rate }
    }
}

// Failure envelopes are built from `Default`, so they still carry the default rate.
impl Default for TaxRatePayload {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE)
    }
}

/// Accept a backend-provided rate only when it is a usable positive number.
pub fn sanitize_tax_rate(rate: Option<f64>) -> f64 {
    rate.filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(DEFAULT_TAX_RATE)
}
