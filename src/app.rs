use crate::log_view::LogView;
use crate::widget::ChatWidget;
use crossterm::event::{MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Chat,
    QuitConfirm,
    Quit,
}

/// Which sidebar/composer panel receives Up/Down and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tasks,
    Language,
    Composer,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Tasks => Focus::Language,
            Focus::Language => Focus::Composer,
            Focus::Composer => Focus::Tasks,
        }
    }
}

/// What the one-line prompt at the bottom is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    AttachFile,
    AttachImage,
    AttachUrl,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::AttachFile => "Attach file path",
            PromptKind::AttachImage => "Attach image path",
            PromptKind::AttachUrl => "Paste a link to attach",
        }
    }
}

#[derive(Debug)]
pub struct PromptInput {
    pub kind: PromptKind,
    pub buffer: String,
}

pub struct App {
    pub screen: AppScreen,
    pub focus: Focus,
    pub widget: ChatWidget,
    pub logs: LogView,
    pub chat_scroll: u16,
    pub task_cursor: usize,
    pub lang_cursor: usize,
    pub prompt: Option<PromptInput>,
    pub mouse_down: bool,
    /// Terminal height as of the last draw, used to decide whether a drag
    /// sits in the upper half of the viewport.
    pub viewport_height: u16,
}

impl App {
    pub fn new(max_log_entries: usize) -> App {
        App {
            screen: AppScreen::Chat,
            focus: Focus::Composer,
            widget: ChatWidget::new(),
            logs: LogView::new(max_log_entries),
            chat_scroll: 0,
            task_cursor: 0,
            lang_cursor: 0,
            prompt: None,
            mouse_down: false,
            viewport_height: 0,
        }
    }

    // chat_scroll counts lines up from the bottom of the log, so a new
    // message stays in view unless the user has scrolled away.
    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(PromptInput {
            kind,
            buffer: String::new(),
        });
    }

    pub fn tick(&mut self) {
        self.widget.mascot_mut().update_spinner();
    }

    /// Holding the mouse button while in the upper half of the viewport
    /// makes the mascot fly away; release brings it back. Unrelated to
    /// submission state.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(_) => {
                self.mouse_down = true;
            }
            MouseEventKind::Up(_) => {
                self.mouse_down = false;
                self.widget.mascot_mut().set_flying(false);
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                if self.mouse_down && event.row < self.viewport_height / 2 {
                    self.widget.mascot_mut().set_flying(true);
                }
            }
            _ => {}
        }
    }
}
