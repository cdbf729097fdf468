//! Login form rendering

use super::components::{
    draw_field, render_button, render_error_region, BUTTON_HEIGHT, ERROR_REGION_HEIGHT,
    FIELD_HEIGHT,
};
use super::layout::centered_rect;
use crate::app::App;
use crate::state::{FieldId, Focus, Phase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const FORM_WIDTH: u16 = 52;
// borders + two fields + error row + button
const FORM_HEIGHT: u16 = 2 + 2 * FIELD_HEIGHT + ERROR_REGION_HEIGHT + BUTTON_HEIGHT;

/// Draw the centred login form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.form.view(app.mask_password);
    let form_area = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);

    let border_color = match app.form.state().phase() {
        Phase::Clean => Color::Cyan,
        Phase::Invalid => Color::Red,
    };
    let block = Block::default()
        .title(format!(" {} ", view.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),        // Email
            Constraint::Length(FIELD_HEIGHT),        // Password
            Constraint::Length(ERROR_REGION_HEIGHT), // Error region
            Constraint::Length(BUTTON_HEIGHT),       // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    for (field, chunk) in FieldId::ALL.into_iter().zip([chunks[0], chunks[1]]) {
        draw_field(frame, chunk, view.input(field), app.focus.is_field(field));
    }

    if let Some(region) = &view.error {
        render_error_region(frame, chunks[2], region);
    }

    render_button(
        frame,
        chunks[3],
        view.submit_label,
        app.focus == Focus::SubmitButton,
    );
}
