use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use log::{info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tokio::sync::Mutex;

use crate::app::App;
use crate::constants::REPLY_FALLBACK;
use crate::logging::log_api_call;
use crate::models::{ApiCallLog, Submission, SubmissionOutcome, WebhookReply};

/// Performs exactly one webhook call for a submission. Every failure mode
/// collapses into a [`SubmissionOutcome`]; nothing is propagated to the
/// caller. No retries, no timeout, no cancellation.
pub async fn submit(webhook_url: &str, submission: Submission) -> SubmissionOutcome {
    let payload_json = match serde_json::to_string(&submission.payload) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize payload: {}", e);
            return SubmissionOutcome::TransportFailure;
        }
    };

    let request_summary = format!(
        "task={} lang={} inputType={}",
        submission.payload.task,
        submission.payload.lang,
        submission.payload.input_type.as_str()
    );

    let mut form = Form::new().text("payload", payload_json);
    if let Some(attachment) = submission.attachment {
        let file_name = attachment.name.clone();
        let part = match Part::bytes(attachment.bytes)
            .file_name(file_name)
            .mime_str(&attachment.media_type)
        {
            Ok(part) => part,
            Err(e) => {
                warn!("Invalid attachment media type {}: {}", attachment.media_type, e);
                return SubmissionOutcome::TransportFailure;
            }
        };
        form = form.part("file", part);
    }

    let client = Client::new();
    let started = Instant::now();
    let response = match client.post(webhook_url).multipart(form).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Webhook request failed: {}", e);
            log_api_call(&ApiCallLog {
                timestamp: Utc::now(),
                endpoint: webhook_url.to_string(),
                request_summary,
                response_status: 0,
                response_time_ms: started.elapsed().as_millis(),
            });
            return SubmissionOutcome::TransportFailure;
        }
    };

    let status = response.status().as_u16();
    log_api_call(&ApiCallLog {
        timestamp: Utc::now(),
        endpoint: webhook_url.to_string(),
        request_summary,
        response_status: status,
        response_time_ms: started.elapsed().as_millis(),
    });

    // The body is interpreted regardless of HTTP status: an error payload on
    // a 4xx/5xx still carries the backend's message.
    let reply: WebhookReply = match response.json().await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Webhook response was not valid JSON: {}", e);
            return SubmissionOutcome::TransportFailure;
        }
    };

    if let Some(error) = reply.error {
        info!("Webhook reported an error: {}", error);
        return SubmissionOutcome::BackendError(error);
    }

    SubmissionOutcome::Reply(reply.reply.unwrap_or_else(|| REPLY_FALLBACK.to_string()))
}

/// Drives one submission to completion against the shared app state. Spawned
/// as a task so the UI stays interactive while the request is in flight.
pub async fn run_submission(app: Arc<Mutex<App>>, webhook_url: String, submission: Submission) {
    {
        let mut guard = app.lock().await;
        guard.logs.add(format!(
            "Sending {} message to webhook...",
            submission.payload.task
        ));
    }

    let outcome = submit(&webhook_url, submission).await;

    let mut guard = app.lock().await;
    match &outcome {
        SubmissionOutcome::Reply(_) => guard.logs.add("Reply received".to_string()),
        SubmissionOutcome::BackendError(message) => {
            guard.logs.add(format!("Webhook error: {}", message));
        }
        SubmissionOutcome::TransportFailure => {
            guard.logs.add("Could not reach the webhook".to_string());
        }
    }
    guard.widget.complete_submission(outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::Attachment;
    use crate::models::{InputType, OutboundPayload};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn text_submission(message: &str) -> Submission {
        Submission {
            payload: OutboundPayload {
                message: message.to_string(),
                task: "summarize".to_string(),
                lang: "en".to_string(),
                input_type: InputType::Text,
            },
            attachment: None,
        }
    }

    #[tokio::test]
    async fn test_submit_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "X" })))
            .mount(&server)
            .await;

        let outcome = submit(&format!("{}/webhook", server.uri()), text_submission("hi")).await;
        assert_eq!(outcome, SubmissionOutcome::Reply("X".to_string()));
    }

    #[tokio::test]
    async fn test_submit_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Y" })))
            .mount(&server)
            .await;

        let outcome = submit(&format!("{}/webhook", server.uri()), text_submission("hi")).await;
        assert_eq!(outcome, SubmissionOutcome::BackendError("Y".to_string()));
    }

    #[tokio::test]
    async fn test_submit_reply_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let outcome = submit(&format!("{}/webhook", server.uri()), text_submission("hi")).await;
        assert_eq!(outcome, SubmissionOutcome::Reply(REPLY_FALLBACK.to_string()));
    }

    #[tokio::test]
    async fn test_submit_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let outcome = submit(&format!("{}/webhook", server.uri()), text_submission("hi")).await;
        assert_eq!(outcome, SubmissionOutcome::TransportFailure);
    }

    #[tokio::test]
    async fn test_submit_unreachable_server() {
        let server = MockServer::start().await;
        let uri = format!("{}/webhook", server.uri());
        drop(server);

        let outcome = submit(&uri, text_submission("hi")).await;
        assert_eq!(outcome, SubmissionOutcome::TransportFailure);
    }

    #[tokio::test]
    async fn test_submit_multipart_carries_payload_and_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .and(body_string_contains("image+text"))
            .and(body_string_contains("cat.png"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let submission = Submission {
            payload: OutboundPayload {
                message: "describe".to_string(),
                task: "explain".to_string(),
                lang: "en".to_string(),
                input_type: InputType::ImageText,
            },
            attachment: Some(Attachment {
                name: "cat.png".to_string(),
                media_type: "image/png".to_string(),
                bytes: b"png bytes".to_vec(),
            }),
        };

        let outcome = submit(&format!("{}/webhook", server.uri()), submission).await;
        assert_eq!(outcome, SubmissionOutcome::Reply("ok".to_string()));
    }
}
