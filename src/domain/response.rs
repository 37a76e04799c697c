use serde::{Deserialize, Serialize};

/// Error text used when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Uniform envelope returned by every JSON endpoint.
///
/// A failed response always carries a non-empty `error` and the payload
/// type's empty form (`T::default()`); a successful one never carries an
/// `error`. `warning` marks a successful response served from fallback data.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a successful envelope.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: true,
            message: Some(message.into()),
            error: None,
            warning: None,
        }
    }

    /// Attach a degraded-data warning to the envelope.
    pub fn with_warning(mut self, warning: Option<impl Into<String>>) -> Self {
        self.warning = warning.map(Into::into);
        self
    }
}

impl<T: Default> ApiResponse<T> {
    /// Build a failed envelope around the payload type's empty value.
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            error
        };

        Self {
            data: T::default(),
            success: false,
            message: None,
            error: Some(error),
            warning: None,
        }
    }
}
