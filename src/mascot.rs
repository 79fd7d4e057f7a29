use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Visual indicator of assistant attentiveness. The three states are
/// mutually exclusive; the fly-away overlay is independent and may overlap
/// any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MascotState {
    Neutral,
    Thinking,
    Sad,
}

#[derive(Debug)]
pub struct Mascot {
    state: MascotState,
    flying: bool,
    spinner_idx: usize,
}

impl Mascot {
    pub fn new() -> Self {
        Self {
            state: MascotState::Neutral,
            flying: false,
            spinner_idx: 0,
        }
    }

    pub fn state(&self) -> MascotState {
        self.state
    }

    pub fn set_state(&mut self, state: MascotState) {
        self.state = state;
    }

    pub fn is_flying(&self) -> bool {
        self.flying
    }

    pub fn set_flying(&mut self, flying: bool) {
        self.flying = flying;
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let spinner = if self.state == MascotState::Thinking {
            spinner_frames[self.spinner_idx % spinner_frames.len()]
        } else {
            " "
        };

        let (face, caption, color) = match self.state {
            MascotState::Neutral => ("[ •‿• ]", "", Color::Gray),
            MascotState::Thinking => ("[ •_• ]", "thinking...", Color::DarkGray),
            MascotState::Sad => ("[ •︵• ]", "something went wrong", Color::Red),
        };

        // Fly-away overrides the face but not the caption
        let face = if self.flying { "[ ^o^ ]↗" } else { face };

        let lines = vec![
            Line::from(Span::styled(face, Style::default().fg(color))),
            Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::Gray)),
                Span::raw(" "),
                Span::styled(caption, Style::default().fg(color)),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }
}

impl Default for Mascot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flying_is_independent_of_state() {
        let mut mascot = Mascot::new();
        mascot.set_state(MascotState::Sad);
        mascot.set_flying(true);
        assert_eq!(mascot.state(), MascotState::Sad);
        assert!(mascot.is_flying());
        mascot.set_flying(false);
        assert_eq!(mascot.state(), MascotState::Sad);
    }
}
