//! Loading indicator shown while a summary is being generated.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Analyzing reviews... this may take a moment";

pub fn frame_symbol(frame: usize) -> &'static str {
    FRAMES[frame % FRAMES.len()]
}

pub fn render_spinner(frame: &mut Frame, area: Rect, tick: usize, game: &str) {
    let accent = Style::default().fg(Color::Cyan);
    let text = Text::from(vec![
        Line::default(),
        Line::from(vec![
            Span::styled(frame_symbol(tick), accent),
            Span::raw(" "),
            Span::raw(LOADING_TEXT),
        ]),
        Line::from(Span::styled(game.to_string(), Style::default().fg(Color::DarkGray))),
    ])
    .centered();
    frame.render_widget(Paragraph::new(text), area);
}
