//! Inline error region shown under the inputs

use crate::ui::view::ErrorRegion;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Rows reserved for the region while it is shown
pub const ERROR_REGION_HEIGHT: u16 = 1;

pub fn render_error_region(frame: &mut Frame, area: Rect, region: &ErrorRegion) {
    let line = Line::from(vec![
        Span::styled(
            "✖ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(region.message.as_str(), Style::default().fg(Color::Red)),
    ]);

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: false }), area);
}
