use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform result shape returned by every data-access operation.
///
/// `success == true` carries `data` (except for write-only operations);
/// `success == false` carries `error` unless the failure is a plain miss,
/// such as loading a storage key that was never written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Success with no payload.
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Failure without an error message (nothing there).
    pub fn missing() -> Self {
        Self {
            success: false,
            data: None,
            error: None,
        }
    }

}

/// Outcome of one URL within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub url: String,
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl BatchEntry {
    pub(crate) fn from_response(url: String, response: ApiResponse<Value>) -> Self {
        Self {
            url,
            success: response.success,
            data: response.data,
            error: response.error,
        }
    }

    pub(crate) fn aborted(url: String, reason: String) -> Self {
        Self {
            url,
            success: false,
            data: None,
            error: Some(reason),
        }
    }
}
