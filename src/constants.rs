// UI Constants
pub const SIDEBAR_WIDTH: u16 = 30;
pub const MAX_COMPOSER_HEIGHT: u16 = 6;

/// Task tags offered in the sidebar, as (tag, label).
pub const TASKS: &[(&str, &str)] = &[
    ("summarize", "Summarize"),
    ("translate", "Translate"),
    ("explain", "Explain"),
    ("extract", "Extract key points"),
];

/// Language choices, as (code, label).
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("hi", "Hindi"),
];

// Webhook Constants
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n-x6rr.onrender.com/webhook-test/text-call";
pub const REPLY_FALLBACK: &str = "File sent!";

// User-visible error messages
pub const ERR_NO_TASK: &str = "Please select a task from the sidebar.";
pub const ERR_NO_LANG: &str = "Please select a language.";
pub const ERR_EMPTY_INPUT: &str = "The input field cannot be empty.";
pub const ERR_BUSY: &str = "Still waiting for the previous message.";
pub const ERR_TRANSPORT: &str = "Failed to connect to AI backend.";
