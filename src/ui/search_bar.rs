//! Search box, submit button, and the autocomplete dropdown.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;

const PLACEHOLDER: &str = "Search for a Steam game...";

/// Most suggestions shown at once; the list scrolls with the highlight.
const MAX_DROPDOWN_ROWS: u16 = 8;

const BUTTON_WIDTH: u16 = 16;

/// Draws the input and button, recording both regions for mouse hit-testing.
pub fn render_search_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)]).areas(area);
    app.regions.input = input_area;
    app.regions.button = button_area;

    let loading = app.is_loading();
    let selected = app.search.selected().is_some();

    let border = if loading {
        Style::default().fg(Color::DarkGray)
    } else if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let block = Block::bordered().title(" Game ").border_style(border);
    let inner = block.inner(input_area);

    let query = app.search.query();
    let content = if query.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else if loading {
        Line::from(Span::styled(query.to_string(), Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(query.to_string())
    };

    // Keep the end of long queries (and the cursor) in view
    let text_width = Span::raw(query).width() as u16;
    let overflow = text_width.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(Paragraph::new(content).block(block).scroll((0, overflow)), input_area);

    if !loading && inner.width > 0 {
        frame.set_cursor_position((inner.x + text_width - overflow, inner.y));
    }

    let label = if loading { "Analyzing..." } else { "Summarize" };
    let button_style = if app.can_submit() {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(label).centered())
            .style(button_style)
            .block(Block::bordered().border_style(button_style)),
        button_area,
    );
}

/// Draws the suggestion list directly under the input, on top of whatever is there.
///
/// Must run after the body so it overlays it. Records the dropdown region (or
/// an empty one when hidden).
pub fn render_dropdown(frame: &mut Frame, bounds: Rect, app: &mut App) {
    app.regions.dropdown = Rect::default();
    app.regions.dropdown_offset = 0;
    if !app.search.dropdown_visible() {
        return;
    }

    let input = app.regions.input;
    let rows = (app.search.suggestions().len() as u16).min(MAX_DROPDOWN_ROWS);
    let area = Rect::new(input.x, input.bottom(), input.width, rows + 2).intersection(bounds);
    if area.height < 3 {
        return;
    }

    let items: Vec<ListItem> = app
        .search
        .suggestions()
        .iter()
        .map(|candidate| ListItem::new(candidate.name.clone()))
        .collect();
    let list = List::new(items)
        .block(Block::bordered().border_style(Style::default().fg(Color::Cyan)))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(app.search.highlighted());
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);

    app.regions.dropdown = area;
    app.regions.dropdown_offset = state.offset();
}
