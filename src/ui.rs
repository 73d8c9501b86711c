//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

mod art;

pub use art::CoverArt;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap,
        canvas::{Canvas, Circle, Rectangle},
    },
};
use std::{sync::LazyLock, time::Duration};

use crate::app::{App, CANVAS_EXTENT, Chooser, Notice, NoticeLevel, ShapeKind, Visualizer};
use crate::audio::Engine;
use crate::playback::Status;

const VISUALIZER_BACKGROUND: Color = Color::Rgb(30, 30, 30);

static CONTROLS: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    vec![
        ("p/space", "Play"),
        ("s", "Stop"),
        ("r", "Rewind"),
        ("n", "Next Track"),
        ("c", "Choose a Jam!"),
        ("o", "media folder"),
        ("q", "quit"),
    ]
});

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Idle => "Idle",
        Status::Loaded => "Loaded",
        Status::Playing => "Playing",
        Status::Stopped => "Stopped",
    }
}

/// One-line summary of what is playing.
fn status_text<E: Engine>(app: &App<E>) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = app.player.state();
    parts.push(status_label(state.status).to_string());

    match app.current_track() {
        Some(track) => {
            let elapsed = app.player.position().unwrap_or(Duration::ZERO);
            let time = match track.duration {
                Some(total) => format!("{} / {}", format_mmss(elapsed), format_mmss(total)),
                None => format_mmss(elapsed),
            };
            parts.push(format!("Song: {} [{}]", track.name, time));
        }
        None => parts.push("Song: -".to_string()),
    }

    parts.push(format!(
        "Tracks: {} (covers: {})",
        app.catalog.len(),
        app.catalog.covers.len()
    ));
    parts.push(format!("Dir: {}", app.config.media_folder()));

    parts.join(" • ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

fn padded_block<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into `frame`.
pub fn draw<E: Engine>(frame: &mut Frame, app: &App<E>, art: &CoverArt) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(" ~ Enhanced Jukebox ~ ")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" jukebox ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_cover(frame, art, panes[0]);
    draw_visualizer(frame, &app.visualizer, panes[1]);

    let status = Paragraph::new(status_text(app))
        .block(padded_block(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[2]);

    let footer = Paragraph::new(controls_text())
        .block(padded_block(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    // Overlays, topmost last.
    if let Some(input) = app.folder_prompt.as_deref() {
        draw_folder_prompt(frame, input, chunks[1]);
    }
    if let Some(chooser) = app.chooser.as_ref() {
        draw_chooser(frame, chooser, chunks[1]);
    }
    if let Some(notice) = app.current_notice() {
        draw_notice(frame, notice, frame.area());
    }
}

fn draw_cover(frame: &mut Frame, art: &CoverArt, area: Rect) {
    let title = match art.path().and_then(|p| p.file_name()) {
        Some(name) => format!(" cover: {} ", name.to_string_lossy()),
        None => " cover ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = match art.lines(inner.width, inner.height) {
        Some(lines) => Paragraph::new(lines),
        None => {
            let text = match art.path() {
                Some(p) => format!("(cannot display {})", p.display()),
                None => "(no cover)".to_string(),
            };
            Paragraph::new(text).dim().wrap(Wrap { trim: true })
        }
    };
    frame.render_widget(body.alignment(Alignment::Center), inner);
}

fn draw_visualizer(frame: &mut Frame, visualizer: &Visualizer, area: Rect) {
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" visualizer "))
        .background_color(VISUALIZER_BACKGROUND)
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_EXTENT])
        .y_bounds([0.0, CANVAS_EXTENT])
        .paint(|ctx| {
            for shape in visualizer.shapes() {
                let (r, g, b) = shape.color;
                let color = Color::Rgb(r, g, b);
                match shape.kind {
                    ShapeKind::Circle => ctx.draw(&Circle {
                        x: shape.x,
                        y: shape.y,
                        radius: shape.size,
                        color,
                    }),
                    ShapeKind::Square => ctx.draw(&Rectangle {
                        x: shape.x,
                        y: shape.y,
                        width: shape.size,
                        height: shape.size,
                        color,
                    }),
                }
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_chooser(frame: &mut Frame, chooser: &Chooser, area: Rect) {
    let longest = chooser.names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    let popup = centered_rect_sized(
        (longest as u16).saturating_add(6).max(24),
        (chooser.names.len() as u16).saturating_add(2),
        area,
    );
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = chooser
        .names
        .iter()
        .map(|n| ListItem::new(n.as_str()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Choose a Jam! (enter plays, esc cancels) "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !chooser.names.is_empty() {
        state.select(Some(chooser.selected));
    }
    frame.render_stateful_widget(list, popup, &mut state);
}

fn draw_folder_prompt(frame: &mut Frame, input: &str, area: Rect) {
    let popup = centered_rect_sized(72, 3, area);
    frame.render_widget(Clear, popup);
    let prompt = Paragraph::new(Line::from(format!("{input}_")))
        .block(padded_block(" media folder (enter scans, esc cancels) "));
    frame.render_widget(prompt, popup);
}

fn draw_notice(frame: &mut Frame, notice: &Notice, area: Rect) {
    let lines = notice.message.len() as u16 / 50 + 1;
    let popup = centered_rect_sized(60, lines + 4, area);
    frame.render_widget(Clear, popup);

    let style = match notice.level {
        NoticeLevel::Info => Style::default(),
        NoticeLevel::Error => Style::default().fg(Color::LightRed),
    };
    let body = Paragraph::new(vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from("(press any key)").dim(),
    ])
    .style(style)
    .block(padded_block(format!(" {} ", notice.title)))
    .wrap(Wrap { trim: true });
    frame.render_widget(body, popup);
}
