use crate::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = if app.prompt.is_some() {
        "Type a value and press Enter. Esc to cancel."
    } else {
        match app.focus {
            Focus::Tasks | Focus::Language => {
                "Up/Down to move, Enter to select, Tab to switch panel."
            }
            Focus::Composer => {
                "Enter to send, Alt+Enter for newline. Ctrl+O file, Ctrl+P image, Ctrl+U link, Ctrl+C quit."
            }
        }
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
