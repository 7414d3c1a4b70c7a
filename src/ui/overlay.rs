use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

/// Border plus one column of padding on each side.
const POPUP_CHROME_COLUMNS: u16 = 4;
const POPUP_HEIGHT: u16 = 3;

/// Draws `text` in a bordered popup centered over `area`.
pub fn render_overlay(frame: &mut Frame<'_>, area: Rect, text: &str, theme: &Theme) {
    let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let popup = centered_popup(
        area,
        text_width.saturating_add(POPUP_CHROME_COLUMNS),
        POPUP_HEIGHT,
    );
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(Line::from(text))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.overlay_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().border_style(Style::default().fg(theme.border_fg))),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);

    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_popup;

    #[test]
    fn popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 42, 13);

        let popup = centered_popup(area, 20, 3);
        assert_eq!(popup, Rect::new(11, 5, 20, 3));

        let clamped = centered_popup(Rect::new(2, 1, 10, 2), 30, 3);
        assert_eq!(clamped, Rect::new(2, 1, 10, 2));
    }
}
