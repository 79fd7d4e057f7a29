// src/lib.rs

pub mod api;
pub mod app;
pub mod attachment;
pub mod chat_message;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod mascot;
pub mod models;
pub mod ui;
pub mod utils;
pub mod widget;
