//! Shared wire types for the Kraken REST API.

use serde::Deserialize;

use crate::error::AppError;

/// Standard response envelope: every endpoint wraps its payload in
/// `{"error": [...], "result": ...}`. A non-empty error list signals
/// failure regardless of what `result` contains.
#[derive(Debug, Deserialize)]
pub struct KrakenResponse<T> {
    #[serde(default)]
    pub error: Vec<String>,
    pub result: Option<T>,
}

impl<T> KrakenResponse<T> {
    /// Unwrap the envelope, turning exchange errors and a missing result
    /// into terminal failures.
    pub fn into_result(self) -> Result<T, AppError> {
        if !self.error.is_empty() {
            return Err(AppError::Exchange(self.error));
        }
        self.result
            .ok_or_else(|| AppError::Decode("missing result in API response".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_successful_result() {
        let envelope: KrakenResponse<Vec<u32>> =
            serde_json::from_str(r#"{"error":[],"result":[1,2,3]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn nonempty_error_list_wins_over_result() {
        let envelope: KrakenResponse<Vec<u32>> =
            serde_json::from_str(r#"{"error":["EGeneral:Invalid arguments"],"result":[1]}"#)
                .unwrap();
        match envelope.into_result() {
            Err(AppError::Exchange(errors)) => {
                assert_eq!(errors, vec!["EGeneral:Invalid arguments".to_string()]);
            }
            other => panic!("expected exchange error, got {other:?}"),
        }
    }

    #[test]
    fn missing_result_is_a_decode_error() {
        let envelope: KrakenResponse<Vec<u32>> =
            serde_json::from_str(r#"{"error":[]}"#).unwrap();
        assert!(matches!(envelope.into_result(), Err(AppError::Decode(_))));
    }
}
