// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// Classification of a submission's attachment kind, driving backend routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "image+text")]
    ImageText,
    #[serde(rename = "video+text")]
    VideoText,
    #[serde(rename = "article+text")]
    ArticleText,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::ImageText => "image+text",
            InputType::VideoText => "video+text",
            InputType::ArticleText => "article+text",
        }
    }

    /// Classifies a submission by the media type of its attachment, if any.
    /// Unrecognized media types fall back to plain text.
    pub fn classify(media_type: Option<&str>) -> Self {
        match media_type {
            Some(m) if m.starts_with("image/") => InputType::ImageText,
            Some(m) if m.starts_with("video/") => InputType::VideoText,
            Some(m) if m == "text/plain" || m == "application/pdf" || m.contains("word") => {
                InputType::ArticleText
            }
            _ => InputType::Text,
        }
    }
}

/// JSON body of the `payload` multipart field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundPayload {
    pub message: String,
    pub task: String,
    pub lang: String,
    pub input_type: InputType,
}

/// Everything needed for one webhook call: the JSON payload plus the raw
/// file bytes, if a file was attached.
#[derive(Debug, Clone)]
pub struct Submission {
    pub payload: OutboundPayload,
    pub attachment: Option<Attachment>,
}

/// Expected webhook response body.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookReply {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub reply: Option<String>,
}

/// Terminal result of one submission attempt. Every failure mode ends up
/// here; nothing is propagated past the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The webhook answered with a reply (or the fallback literal).
    Reply(String),
    /// The webhook answered with an `error` field.
    BackendError(String),
    /// Network failure or a response body that was not valid JSON.
    TransportFailure,
}

/// Logs details of each webhook call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_no_attachment_is_text() {
        assert_eq!(InputType::classify(None), InputType::Text);
    }

    #[test]
    fn test_classify_image() {
        assert_eq!(InputType::classify(Some("image/png")), InputType::ImageText);
        assert_eq!(
            InputType::classify(Some("image/jpeg")),
            InputType::ImageText
        );
    }

    #[test]
    fn test_classify_video() {
        assert_eq!(InputType::classify(Some("video/mp4")), InputType::VideoText);
    }

    #[test]
    fn test_classify_article() {
        assert_eq!(
            InputType::classify(Some("text/plain")),
            InputType::ArticleText
        );
        assert_eq!(
            InputType::classify(Some("application/pdf")),
            InputType::ArticleText
        );
        assert_eq!(
            InputType::classify(Some("application/msword")),
            InputType::ArticleText
        );
    }

    #[test]
    fn test_classify_unrecognized_falls_back_to_text() {
        assert_eq!(
            InputType::classify(Some("application/octet-stream")),
            InputType::Text
        );
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = OutboundPayload {
            message: "hello".to_string(),
            task: "summarize".to_string(),
            lang: "en".to_string(),
            input_type: InputType::ImageText,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"inputType\":\"image+text\""));
        assert!(json.contains("\"task\":\"summarize\""));
        assert!(json.contains("\"lang\":\"en\""));
    }
}
