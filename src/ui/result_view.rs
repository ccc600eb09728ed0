//! Review summary panel.
//!
//! Stateless: the panel is a pure function of the summary payload plus the
//! scroll offset owned by [`crate::app::App`].

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::summary::AppId;

pub const PRAISED_HEADING: &str = "Praised";
pub const CRITICIZED_HEADING: &str = "Criticized";

const BULLET: &str = "  • ";

/// Builds the panel body: links to the store page and banner, then both point lists.
pub fn result_text(
    game: &str,
    app_id: &AppId,
    praised: &[String],
    criticized: &[String],
) -> Text<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let link = Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED);

    let mut lines = vec![
        Line::from(Span::styled(
            game.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Store   ", label),
            Span::styled(app_id.store_url(), link),
        ]),
        Line::from(vec![
            Span::styled("Banner  ", label),
            Span::styled(app_id.banner_url(), link),
        ]),
    ];

    push_section(&mut lines, PRAISED_HEADING, Color::Green, praised);
    push_section(&mut lines, CRITICIZED_HEADING, Color::Red, criticized);
    Text::from(lines)
}

fn push_section(
    lines: &mut Vec<Line<'static>>,
    heading: &'static str,
    color: Color,
    points: &[String],
) {
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        heading,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.extend(points.iter().map(|point| {
        Line::from(vec![
            Span::styled(BULLET, Style::default().fg(color)),
            Span::raw(point.clone()),
        ])
    }));
}

pub fn render_result(
    frame: &mut Frame,
    area: Rect,
    game: &str,
    app_id: &AppId,
    praised: &[String],
    criticized: &[String],
    scroll: u16,
) {
    let block = Block::bordered()
        .title(" Summary ")
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(result_text(game, app_id, praised, criticized))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
