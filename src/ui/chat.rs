use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

pub fn draw_chat(f: &mut Frame, app: &App, area: Rect) {
    let banner_height = if app.widget.error().is_some() { 1 } else { 0 };
    let prompt_height = if app.prompt.is_some() { 1 } else { 0 };
    let composer_height = app
        .widget
        .desired_input_height(area.width.saturating_sub(4))
        + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(banner_height),
            Constraint::Length(composer_height),
            Constraint::Length(prompt_height),
        ])
        .split(area);

    draw_messages(f, app, chunks[0]);
    if let Some(error) = app.widget.error() {
        draw_error_banner(f, error, chunks[1]);
    }
    draw_composer(f, app, chunks[2]);
    if app.prompt.is_some() {
        draw_prompt(f, app, chunks[3]);
    }
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.widget.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area));
    }

    let total_lines = lines.len() as u16;
    let available_height = area.height;
    let max_scroll = total_lines.saturating_sub(available_height);
    // chat_scroll is measured up from the bottom; 0 keeps the newest
    // message in view
    let scroll = max_scroll.saturating_sub(app.chat_scroll.min(max_scroll));

    let msgs_para = Paragraph::new(lines)
        .style(Style::default())
        .block(Block::default())
        .wrap(Wrap { trim: true });
    f.render_widget(msgs_para.scroll((scroll, 0)), area);
}

fn draw_error_banner(f: &mut Frame, error: &str, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("✗ ", Style::default().fg(Color::Red)),
        Span::styled(
            error,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(banner, area);
}

fn draw_composer(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    let separator_style = Style::default().fg(Color::DarkGray);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator.clone(), separator_style))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let inner = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height.saturating_sub(2),
    };

    let prefix_style = if app.focus == Focus::Composer {
        Style::default().fg(Color::LightYellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let wrap_width = inner.width.saturating_sub(2).max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, draft_line) in app.widget.draft().split('\n').enumerate() {
        let wrapped = wrap(draft_line, wrap_width);
        if wrapped.is_empty() {
            let prefix = if i == 0 { "→ " } else { "  " };
            lines.push(Line::from(Span::styled(prefix, prefix_style)));
            continue;
        }
        for (j, piece) in wrapped.iter().enumerate() {
            let prefix = if i == 0 && j == 0 { "→ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(prefix, prefix_style),
                Span::styled(piece.to_string(), Style::default().fg(Color::White)),
            ]));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled("→ ", prefix_style)));
    }

    let visible_rows = inner.height.max(1);
    let scroll = (lines.len() as u16).saturating_sub(visible_rows);
    let cursor_row = lines.len() as u16 - 1;
    let cursor_col = lines
        .last()
        .map(|line| line.width() as u16)
        .unwrap_or(2)
        .min(inner.width.saturating_sub(1));

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(separator, separator_style))),
        Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: 1,
        },
    );

    if app.focus == Focus::Composer && app.prompt.is_none() {
        f.set_cursor_position((inner.x + cursor_col, inner.y + cursor_row.saturating_sub(scroll)));
    }
}

fn draw_prompt(f: &mut Frame, app: &App, area: Rect) {
    if let Some(prompt) = &app.prompt {
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", prompt.kind.label()),
                Style::default().fg(Color::LightYellow),
            ),
            Span::styled(prompt.buffer.as_str(), Style::default().fg(Color::White)),
        ]);
        f.render_widget(Paragraph::new(line), area);
        let cursor_x = area.x
            + (prompt.kind.label().len() as u16 + 2 + prompt.buffer.width() as u16)
                .min(area.width.saturating_sub(1));
        f.set_cursor_position((cursor_x, area.y));
    }
}
