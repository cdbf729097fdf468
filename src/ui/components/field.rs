//! Single-line input field rendering

use crate::ui::view::InputView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Field height in rows (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw an input from the view description
pub fn draw_field(frame: &mut Frame, area: Rect, input: &InputView, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if input.described_by.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if input.value.is_empty() && !is_active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        // Leave room for the cursor and keep the end of long values in sight
        let room = area.width.saturating_sub(3) as usize;
        Line::from(vec![
            Span::styled(visible_tail(&input.value, room), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", input.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Longest suffix of `value` that fits in `room` terminal columns
fn visible_tail(value: &str, room: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > room {
            break;
        }
        start = idx;
    }
    &value[start..]
}
