use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::constants::{LANGUAGES, TASKS};

pub fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TASKS.len() as u16 + 2),
            Constraint::Length(LANGUAGES.len() as u16 + 2),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .split(area);

    draw_tasks(f, app, chunks[0]);
    draw_languages(f, app, chunks[1]);
    app.widget.mascot().render(f, chunks[2]);
    draw_logs(f, app, chunks[3]);
}

fn draw_tasks(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Tasks;
    let items: Vec<ListItem> = TASKS
        .iter()
        .enumerate()
        .map(|(i, (tag, label))| {
            let active = app.widget.selected_task() == Some(*tag);
            let marker = if active { "● " } else { "○ " };
            let mut style = Style::default().fg(if active {
                Color::LightMagenta
            } else {
                Color::White
            });
            if focused && i == app.task_cursor {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            ListItem::new(format!("{}{}", marker, label)).style(style)
        })
        .collect();

    let list = List::new(items).block(titled_block("Tasks", focused));
    f.render_widget(list, area);
}

fn draw_languages(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Language;
    let items: Vec<ListItem> = LANGUAGES
        .iter()
        .enumerate()
        .map(|(i, (code, label))| {
            let active = app.widget.selected_lang() == Some(*code);
            let marker = if active { "● " } else { "○ " };
            let mut style = Style::default().fg(if active {
                Color::LightMagenta
            } else {
                Color::White
            });
            if focused && i == app.lang_cursor {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            ListItem::new(format!("{}{}", marker, label)).style(style)
        })
        .collect();

    let list = List::new(items).block(titled_block("Language", focused));
    f.render_widget(list, area);
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let log_lines: Vec<Line> = app
        .logs
        .entries
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(titled_block("Activity", false));
    f.render_widget(logs_para, area);
}

fn titled_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { Color::LightYellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color))
}
