use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::config::{CONTROLS_HINT, Theme};

/// Draws the score line above the board.
pub fn render_score_line(frame: &mut Frame<'_>, area: Rect, score_line: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(score_line.to_owned()))
            .alignment(Alignment::Left)
            .style(
                Style::default()
                    .fg(theme.hud_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
    );
}

/// Draws the controls hint under the board.
pub fn render_controls_hint(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(CONTROLS_HINT))
            .alignment(Alignment::Left)
            .style(Style::default().fg(theme.hint_fg)),
        area,
    );
}
