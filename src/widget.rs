use textwrap::wrap;

use crate::attachment::Attachment;
use crate::chat_message::ChatMessage;
use crate::constants::{
    ERR_BUSY, ERR_EMPTY_INPUT, ERR_NO_LANG, ERR_NO_TASK, ERR_TRANSPORT, MAX_COMPOSER_HEIGHT,
};
use crate::errors::CognivoResult;
use crate::mascot::{Mascot, MascotState};
use crate::models::{InputType, OutboundPayload, Submission, SubmissionOutcome};

/// The chat widget controller: selection state, composer draft, message log,
/// error banner and mascot. Holds no terminal handles, so the full
/// submission lifecycle can be driven in tests.
#[derive(Debug)]
pub struct ChatWidget {
    selected_task: Option<String>,
    selected_lang: Option<String>,
    draft: String,
    attachment: Option<Attachment>,
    messages: Vec<ChatMessage>,
    error: Option<String>,
    mascot: Mascot,
    in_flight: bool,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self {
            selected_task: None,
            selected_lang: None,
            draft: String::new(),
            attachment: None,
            messages: Vec::new(),
            error: None,
            mascot: Mascot::new(),
            in_flight: false,
        }
    }

    pub fn selected_task(&self) -> Option<&str> {
        self.selected_task.as_deref()
    }

    pub fn selected_lang(&self) -> Option<&str> {
        self.selected_lang.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mascot(&self) -> &Mascot {
        &self.mascot
    }

    pub fn mascot_mut(&mut self) -> &mut Mascot {
        &mut self.mascot
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Exactly one task is active at a time; picking one clears any
    /// displayed error.
    pub fn select_task(&mut self, tag: &str) {
        self.selected_task = Some(tag.to_string());
        self.hide_error();
    }

    pub fn select_lang(&mut self, code: &str) {
        self.selected_lang = Some(code.to_string());
        self.hide_error();
    }

    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
        self.refresh_mascot();
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
        self.refresh_mascot();
    }

    /// Attaches a file from disk. The filename is echoed into the draft so
    /// the user can see what will be sent; picking another file replaces the
    /// previous one.
    pub fn attach_file(&mut self, path: &str) -> CognivoResult<()> {
        let attachment = Attachment::from_path(path)?;
        self.note_attachment(attachment);
        Ok(())
    }

    /// Image-restricted variant of [`ChatWidget::attach_file`].
    pub fn attach_image(&mut self, path: &str) -> CognivoResult<()> {
        let attachment = Attachment::image_from_path(path)?;
        self.note_attachment(attachment);
        Ok(())
    }

    /// Appends a pasted link to the draft. Links ride along in the message
    /// text; they do not become a file attachment.
    pub fn attach_url(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.draft.push(' ');
            self.draft.push_str(url);
            self.refresh_mascot();
        }
    }

    /// Surfaces an error outside the submission pipeline (e.g. an unreadable
    /// attachment path).
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.mascot.set_state(MascotState::Sad);
    }

    /// Validates the current state and, if everything passes, turns it into
    /// a webhook submission. Validation order: in-flight guard, task,
    /// language, non-empty text; the first failing check wins and is shown
    /// in the banner. On success the user message is appended to the log,
    /// the draft and attachment are cleared, and the mascot starts thinking.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        let text = self.draft.trim().to_string();

        if self.in_flight {
            self.error = Some(ERR_BUSY.to_string());
            return None;
        }

        let task = match &self.selected_task {
            Some(task) => task.clone(),
            None => {
                self.show_error(ERR_NO_TASK);
                return None;
            }
        };

        let lang = match &self.selected_lang {
            Some(lang) => lang.clone(),
            None => {
                self.show_error(ERR_NO_LANG);
                return None;
            }
        };

        if text.is_empty() {
            self.show_error(ERR_EMPTY_INPUT);
            return None;
        }

        self.hide_error();
        self.messages.push(ChatMessage::new(text.clone(), true));

        let attachment = self.attachment.take();
        let input_type = InputType::classify(attachment.as_ref().map(|a| a.media_type.as_str()));

        self.draft.clear();
        self.mascot.set_state(MascotState::Thinking);
        self.in_flight = true;

        Some(Submission {
            payload: OutboundPayload {
                message: text,
                task,
                lang,
                input_type,
            },
            attachment,
        })
    }

    /// Applies the terminal outcome of a submission. The composer stays
    /// cleared no matter how the request ended.
    pub fn complete_submission(&mut self, outcome: SubmissionOutcome) {
        self.in_flight = false;
        match outcome {
            SubmissionOutcome::Reply(reply) => {
                self.messages.push(ChatMessage::new(reply, false));
                self.mascot.set_state(MascotState::Neutral);
            }
            SubmissionOutcome::BackendError(message) => {
                self.error = Some(message);
                self.mascot.set_state(MascotState::Sad);
            }
            SubmissionOutcome::TransportFailure => {
                self.error = Some(ERR_TRANSPORT.to_string());
                self.mascot.set_state(MascotState::Sad);
            }
        }
    }

    /// Number of composer rows needed for the draft at the given inner
    /// width, the terminal analog of an auto-growing textarea.
    pub fn desired_input_height(&self, width: u16) -> u16 {
        let width = width.max(1) as usize;
        let mut rows = 0usize;
        for line in self.draft.split('\n') {
            rows += wrap(line, width).len().max(1);
        }
        (rows.max(1) as u16).min(MAX_COMPOSER_HEIGHT)
    }

    fn note_attachment(&mut self, attachment: Attachment) {
        self.draft.push_str(&format!(" [Attached: {}]", attachment.name));
        self.attachment = Some(attachment);
        self.refresh_mascot();
    }

    fn hide_error(&mut self) {
        self.error = None;
        self.mascot.set_state(MascotState::Neutral);
    }

    fn refresh_mascot(&mut self) {
        if self.draft.trim().is_empty() {
            self.mascot.set_state(MascotState::Neutral);
        } else {
            self.mascot.set_state(MascotState::Thinking);
        }
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REPLY_FALLBACK;
    use std::io::Write;
    use tempfile::tempdir;

    fn ready_widget() -> ChatWidget {
        let mut widget = ChatWidget::new();
        widget.select_task("summarize");
        widget.select_lang("en");
        widget
    }

    fn type_text(widget: &mut ChatWidget, text: &str) {
        for c in text.chars() {
            widget.push_char(c);
        }
    }

    #[test]
    fn test_submit_without_task_is_rejected() {
        let mut widget = ChatWidget::new();
        type_text(&mut widget, "hello");
        assert!(widget.begin_submission().is_none());
        assert_eq!(widget.error(), Some(ERR_NO_TASK));
        assert_eq!(widget.mascot().state(), MascotState::Sad);
        assert!(widget.messages().is_empty());
    }

    #[test]
    fn test_submit_without_language_is_rejected() {
        let mut widget = ChatWidget::new();
        widget.select_task("translate");
        type_text(&mut widget, "hello");
        assert!(widget.begin_submission().is_none());
        assert_eq!(widget.error(), Some(ERR_NO_LANG));
    }

    #[test]
    fn test_submit_with_blank_text_is_rejected() {
        let mut widget = ready_widget();
        type_text(&mut widget, "   ");
        assert!(widget.begin_submission().is_none());
        assert_eq!(widget.error(), Some(ERR_EMPTY_INPUT));
    }

    #[test]
    fn test_successful_submission_builds_payload_and_clears_draft() {
        let mut widget = ready_widget();
        type_text(&mut widget, "condense this");

        let submission = widget.begin_submission().expect("should submit");
        assert_eq!(submission.payload.message, "condense this");
        assert_eq!(submission.payload.task, "summarize");
        assert_eq!(submission.payload.lang, "en");
        assert_eq!(submission.payload.input_type, InputType::Text);
        assert!(submission.attachment.is_none());

        assert_eq!(widget.draft(), "");
        assert!(widget.is_in_flight());
        assert_eq!(widget.mascot().state(), MascotState::Thinking);
        assert_eq!(widget.messages().len(), 1);
        assert!(widget.messages()[0].is_from_user());
    }

    #[test]
    fn test_overlapping_submission_is_rejected() {
        let mut widget = ready_widget();
        type_text(&mut widget, "first");
        assert!(widget.begin_submission().is_some());

        type_text(&mut widget, "second");
        assert!(widget.begin_submission().is_none());
        assert_eq!(widget.error(), Some(ERR_BUSY));
        // the rejected draft is kept; nothing was sent
        assert_eq!(widget.draft(), "second");
    }

    #[test]
    fn test_reply_outcome_appends_one_assistant_message() {
        let mut widget = ready_widget();
        type_text(&mut widget, "hi");
        widget.begin_submission().unwrap();

        widget.complete_submission(SubmissionOutcome::Reply("X".to_string()));
        assert_eq!(widget.messages().len(), 2);
        assert!(!widget.messages()[1].is_from_user());
        assert_eq!(widget.messages()[1].content(), "X");
        assert_eq!(widget.mascot().state(), MascotState::Neutral);
        assert!(!widget.is_in_flight());
    }

    #[test]
    fn test_backend_error_outcome_shows_banner_without_message() {
        let mut widget = ready_widget();
        type_text(&mut widget, "hi");
        widget.begin_submission().unwrap();

        widget.complete_submission(SubmissionOutcome::BackendError("Y".to_string()));
        assert_eq!(widget.error(), Some("Y"));
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.mascot().state(), MascotState::Sad);
        assert_eq!(widget.draft(), "");
    }

    #[test]
    fn test_transport_failure_shows_generic_message() {
        let mut widget = ready_widget();
        type_text(&mut widget, "hi");
        widget.begin_submission().unwrap();

        widget.complete_submission(SubmissionOutcome::TransportFailure);
        assert_eq!(widget.error(), Some(ERR_TRANSPORT));
        assert_eq!(widget.mascot().state(), MascotState::Sad);
        assert_eq!(widget.draft(), "");
    }

    #[test]
    fn test_selection_clears_error_banner() {
        let mut widget = ChatWidget::new();
        type_text(&mut widget, "hello");
        widget.begin_submission();
        assert!(widget.error().is_some());

        widget.select_task("explain");
        assert!(widget.error().is_none());
        assert_eq!(widget.mascot().state(), MascotState::Neutral);
    }

    #[test]
    fn test_mascot_follows_draft_content() {
        let mut widget = ChatWidget::new();
        assert_eq!(widget.mascot().state(), MascotState::Neutral);
        widget.push_char('a');
        assert_eq!(widget.mascot().state(), MascotState::Thinking);
        widget.pop_char();
        assert_eq!(widget.mascot().state(), MascotState::Neutral);
    }

    #[test]
    fn test_image_attachment_classifies_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cat.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"png bytes").unwrap();

        let mut widget = ready_widget();
        widget.attach_file(path.to_str().unwrap()).unwrap();
        assert!(widget.draft().contains("[Attached: cat.png]"));

        type_text(&mut widget, " describe this");
        let submission = widget.begin_submission().unwrap();
        assert_eq!(submission.payload.input_type, InputType::ImageText);
        let attachment = submission.attachment.unwrap();
        assert_eq!(attachment.name, "cat.png");
        assert!(widget.attachment().is_none());
    }

    #[test]
    fn test_url_attachment_only_extends_draft() {
        let mut widget = ready_widget();
        type_text(&mut widget, "look at");
        widget.attach_url("  https://example.com/a  ");
        assert_eq!(widget.draft(), "look at https://example.com/a");
        assert!(widget.attachment().is_none());
    }

    #[test]
    fn test_desired_input_height_grows_and_caps() {
        let mut widget = ChatWidget::new();
        assert_eq!(widget.desired_input_height(10), 1);
        type_text(&mut widget, &"word ".repeat(30));
        assert!(widget.desired_input_height(10) > 1);
        assert!(widget.desired_input_height(10) <= MAX_COMPOSER_HEIGHT);
    }

    #[test]
    fn test_reply_fallback_constant_is_wired() {
        // the fallback literal is produced by the webhook client; the widget
        // treats it like any other reply
        let mut widget = ready_widget();
        type_text(&mut widget, "hi");
        widget.begin_submission().unwrap();
        widget.complete_submission(SubmissionOutcome::Reply(REPLY_FALLBACK.to_string()));
        assert_eq!(widget.messages()[1].content(), REPLY_FALLBACK);
    }
}
