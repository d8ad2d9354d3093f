//! Clear-history client: one POST to the scoring server, one JSON answer.

use serde::Deserialize;

/// Fixed server endpoint resetting stored analyses. Joined to the page
/// origin at call time since `reqwest` wants absolute URLs on wasm.
pub const CLEAR_HISTORY_PATH: &str = "/clear-history";

/// Wire shape of the server's answer: `{"status": "...", "message": "..."}`
/// with the message optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClearHistoryResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the UI should do with a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ClearOutcome {
    /// Server confirmed; inform the user and reload the page.
    Cleared,
    /// Server declined; surface the carried message.
    Failed(String),
}

/// Map a response onto an outcome. Anything but `status == "success"` is a
/// failure, falling back to a generic message when the server sent none.
pub fn interpret(response: &ClearHistoryResponse) -> ClearOutcome {
    if response.status == "success" {
        ClearOutcome::Cleared
    } else {
        ClearOutcome::Failed(
            response
                .message
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string()),
        )
    }
}

/// Issue the single clear request. Exactly one attempt; the caller owns the
/// confirm dialog and never reaches this when the user declines.
pub async fn request_clear(origin: &str) -> Result<ClearHistoryResponse, String> {
    let url = format!("{origin}{CLEAR_HISTORY_PATH}");
    let response = reqwest::Client::new()
        .post(&url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    response.json().await.map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_clears() {
        let response: ClearHistoryResponse =
            serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert_eq!(interpret(&response), ClearOutcome::Cleared);
    }

    #[test]
    fn failure_carries_server_message() {
        let response: ClearHistoryResponse =
            serde_json::from_str(r#"{"status": "error", "message": "database locked"}"#).unwrap();
        assert_eq!(
            interpret(&response),
            ClearOutcome::Failed("database locked".to_string())
        );
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let response: ClearHistoryResponse =
            serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert_eq!(
            interpret(&response),
            ClearOutcome::Failed("Unknown error".to_string())
        );
    }

    #[test]
    fn success_with_message_still_clears() {
        let response = ClearHistoryResponse {
            status: "success".into(),
            message: Some("12 rows".into()),
        };
        assert_eq!(interpret(&response), ClearOutcome::Cleared);
    }
}
