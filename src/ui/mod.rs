//! TUI module using ratatui.
//!
//! `run` owns the event loop; `render` draws one frame from [`App`]. The
//! search bar, result panel and spinner live in their own modules.

pub mod keybindings;
pub mod result_view;
pub mod search_bar;
pub mod spinner;

use std::ops::ControlFlow;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, RequestState};
use crate::client::ApiClient;
use crate::config::Config;
use crate::event::{spawn_event_task, AppEvent, EventHandler};
use crate::runtime::EffectRunner;
use crate::tui;

pub const TITLE: &str = "Steam Review Summarizer";
pub const SUBTITLE: &str = "AI-powered analysis of what players are saying";
pub const PLACEHOLDER: &str = "Search for a Steam game to see what reviewers think";

const KEY_HELP: &str = " Enter select/summarize · ↑↓ navigate · Esc close · Ctrl-U clear · Ctrl-C quit ";

/// Launch the TUI and block until the user quits.
pub async fn run(config: &Config, client: ApiClient) -> anyhow::Result<()> {
    let mut app = App::new(config.ui.min_query_len);

    tui::install_panic_hook();
    let mut terminal = tui::init_tui()?;

    let handler = EventHandler::new();
    spawn_event_task(handler.tx.clone());
    let mut runner = EffectRunner::new(client, handler.tx.clone(), config.debounce());
    let mut rx = handler.rx;

    tracing::info!(backend = %config.api.base_url, "tui started");

    // Exits only via `break` so the terminal is always restored below
    let outcome: std::io::Result<()> = loop {
        let Some(event) = rx.recv().await else {
            break Ok(());
        };

        let effects = match event {
            AppEvent::Render => {
                if let Err(e) = terminal.draw(|frame| render(frame, &mut app)) {
                    break Err(e);
                }
                continue;
            }
            AppEvent::Tick => {
                app.tick();
                continue;
            }
            AppEvent::Resize(_, _) => continue,
            AppEvent::Key(key) => keybindings::map_key(key).map(|action| app.dispatch(action)),
            AppEvent::Mouse(mouse) => {
                keybindings::map_mouse(mouse).map(|action| app.dispatch(action))
            }
            AppEvent::Suggestions { generation, result } => {
                app.on_suggestions(generation, result);
                None
            }
            AppEvent::Summary { seq, result } => {
                app.on_summary(seq, *result);
                None
            }
        };

        if let ControlFlow::Break(()) = runner.execute_all(effects.unwrap_or_default()) {
            break Ok(());
        }
    };

    tui::restore_tui()?;
    tracing::info!("tui stopped");
    Ok(outcome?)
}

/// Renders one complete frame.
///
/// Takes `&mut App` to record the regions used for mouse hit-testing and the
/// result viewport height used for paging.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, search, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    search_bar::render_search_bar(frame, search, app);
    render_body(frame, body, app);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(KEY_HELP, Style::default().fg(Color::DarkGray)))),
        footer,
    );

    // Last, so it sits on top of the body
    search_bar::render_dropdown(frame, body, app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Exactly one of placeholder, spinner, error, or result is drawn.
fn render_body(frame: &mut Frame, area: Rect, app: &mut App) {
    // Border rows of the result panel
    app.result_viewport_height = area.height.saturating_sub(2);

    match app.request() {
        RequestState::Idle => {
            let text = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))),
            ])
            .centered();
            frame.render_widget(text, area);
        }
        RequestState::Loading { name, .. } => {
            spinner::render_spinner(frame, area, app.spinner_frame, name);
        }
        RequestState::Error(message) => {
            let text = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
            ])
            .centered()
            .wrap(Wrap { trim: true });
            frame.render_widget(text, area);
        }
        RequestState::Ready(result) => {
            result_view::render_result(
                frame,
                area,
                &result.game,
                &result.app_id,
                &result.summary.praised,
                &result.summary.criticized,
                app.result_scroll,
            );
        }
    }
}
