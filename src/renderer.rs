use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CHROME_COLUMNS, GridSize, Mode, Theme};
use crate::scene::{CellKind, Scene};
use crate::snake::Position;
use crate::ui::hud::{render_controls_hint, render_score_line};
use crate::ui::overlay::render_overlay;

/// Paints one scene: score line, bordered board, controls hint, overlay.
pub fn render(frame: &mut Frame<'_>, scene: &Scene, bounds: GridSize, mode: Mode) {
    let theme = mode.theme();
    let cell_width = mode.cell_width();
    let area = frame.area();

    let [score_area, board_row, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(bounds.height.saturating_add(2)),
        Constraint::Length(1),
    ])
    .areas(area);

    let board_width = bounds
        .width
        .saturating_mul(cell_width)
        .saturating_add(CHROME_COLUMNS);
    let board_area = Rect {
        width: board_width.min(board_row.width),
        ..board_row
    };

    render_score_line(frame, score_area, &scene.score_line, theme);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, scene, bounds, mode);
    render_controls_hint(frame, hint_area, theme);

    if let Some(text) = scene.overlay {
        render_overlay(frame, board_area, text, theme);
    }
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, scene: &Scene, bounds: GridSize, mode: Mode) {
    let theme = mode.theme();
    let buffer = frame.buffer_mut();

    for cell in &scene.cells {
        let Some((x, y)) = logical_to_terminal(inner, bounds, mode.cell_width(), cell.position)
        else {
            continue;
        };

        let (glyph, style) = cell_look(cell.kind, theme);
        buffer.set_string(x, y, glyph, style.bg(theme.play_bg));
    }
}

fn cell_look(kind: CellKind, theme: &Theme) -> (&'static str, Style) {
    match kind {
        CellKind::Food => (theme.food, Style::new().fg(theme.food_fg)),
        CellKind::Body => (theme.snake_body, Style::new().fg(theme.body_fg)),
        CellKind::Head => (
            theme.snake_head,
            Style::new()
                .fg(theme.head_fg)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn logical_to_terminal(
    inner: Rect,
    bounds: GridSize,
    cell_width: u16,
    position: Position,
) -> Option<(u16, u16)> {
    if !bounds.contains(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(cell_width)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(cell_width) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
