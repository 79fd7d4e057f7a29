use crate::app::{App, AppScreen, Focus, PromptKind};
use crate::constants::{LANGUAGES, TASKS};
use crate::models::Submission;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Routes a key event through the active screen. Returns a submission when
/// the composer produced one; the caller spawns the webhook task.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Submission> {
    match app.screen {
        AppScreen::QuitConfirm => {
            handle_quit_confirm_input(key, app);
            None
        }
        AppScreen::Quit => None,
        AppScreen::Chat => handle_chat_input(app, key),
    }
}

fn handle_chat_input(app: &mut App, key: KeyEvent) -> Option<Submission> {
    if app.prompt.is_some() {
        handle_prompt_input(app, key);
        return None;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Enter => match app.focus {
            Focus::Tasks => {
                app.widget.select_task(TASKS[app.task_cursor].0);
            }
            Focus::Language => {
                app.widget.select_lang(LANGUAGES[app.lang_cursor].0);
            }
            Focus::Composer => {
                if key.modifiers.contains(KeyModifiers::ALT) {
                    app.widget.push_char('\n');
                } else {
                    return app.widget.begin_submission();
                }
            }
        },
        KeyCode::Up => match app.focus {
            Focus::Tasks => {
                app.task_cursor = app.task_cursor.saturating_sub(1);
            }
            Focus::Language => {
                app.lang_cursor = app.lang_cursor.saturating_sub(1);
            }
            Focus::Composer => app.scroll_up(),
        },
        KeyCode::Down => match app.focus {
            Focus::Tasks => {
                app.task_cursor = (app.task_cursor + 1).min(TASKS.len() - 1);
            }
            Focus::Language => {
                app.lang_cursor = (app.lang_cursor + 1).min(LANGUAGES.len() - 1);
            }
            Focus::Composer => app.scroll_down(),
        },
        KeyCode::Backspace => {
            if app.focus == Focus::Composer {
                app.widget.pop_char();
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.screen = AppScreen::QuitConfirm,
                    'o' => app.open_prompt(PromptKind::AttachFile),
                    'p' => app.open_prompt(PromptKind::AttachImage),
                    'u' => app.open_prompt(PromptKind::AttachUrl),
                    _ => {}
                }
            } else if app.focus == Focus::Composer {
                app.widget.push_char(c);
            } else if c == ' ' {
                // Space also confirms a sidebar selection
                match app.focus {
                    Focus::Tasks => app.widget.select_task(TASKS[app.task_cursor].0),
                    Focus::Language => app.widget.select_lang(LANGUAGES[app.lang_cursor].0),
                    Focus::Composer => {}
                }
            }
        }
        _ => {}
    }
    None
}

fn handle_prompt_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.prompt = None;
        }
        KeyCode::Enter => {
            if let Some(prompt) = app.prompt.take() {
                let value = prompt.buffer.trim().to_string();
                if value.is_empty() {
                    return;
                }
                match prompt.kind {
                    PromptKind::AttachFile => match app.widget.attach_file(&value) {
                        Ok(()) => app.logs.add(format!("Attached file {}", value)),
                        Err(e) => app.widget.show_error(e.to_string()),
                    },
                    PromptKind::AttachImage => match app.widget.attach_image(&value) {
                        Ok(()) => app.logs.add(format!("Attached image {}", value)),
                        Err(e) => app.widget.show_error(e.to_string()),
                    },
                    PromptKind::AttachUrl => {
                        app.widget.attach_url(&value);
                        app.logs.add(format!("Attached link {}", value));
                    }
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.buffer.push(c);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Chat;
        }
        _ => {}
    }
}
