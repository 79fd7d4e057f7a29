pub mod chat;
pub mod footer;
pub mod quit_confirm;
pub mod sidebar;

use crate::app::{App, AppScreen};
use crate::constants::SIDEBAR_WIDTH;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    app.viewport_height = size.height;

    if app.screen == AppScreen::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, quit_confirm::centered_rect(size));
        return;
    }

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .margin(1)
        .split(size);

    sidebar::draw_sidebar(f, app, horizontal_chunks[0]);

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(horizontal_chunks[1]);

    chat::draw_chat(f, app, vertical_chunks[0]);
    footer::draw_footer(f, vertical_chunks[1], app);
}
