use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Popup};
use crate::slider::SliderView;

/// Rows taken by the slider track
const TRACK_HEIGHT: u16 = 5;

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme.clone();

    f.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Top padding
            Constraint::Length(1),             // Title
            Constraint::Length(if area.height < 16 { 1 } else { 4 }), // Spacer
            Constraint::Length(TRACK_HEIGHT),  // Slider
            Constraint::Min(0),
            Constraint::Length(1),             // Footer
        ])
        .split(area);

    draw_title(f, app, chunks[1]);

    let track = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(2)])
        .split(chunks[3])[1];

    app.slider.on_layout(track);
    let phase = app.slider.shimmer_phase(Instant::now());
    f.render_widget(SliderView::new(&app.slider, &theme, phase), track);

    draw_footer(f, app, chunks[5]);

    match app.popup {
        Popup::None => {}
        Popup::Alert => draw_alert(f, app),
    }
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Terminal",
            Style::default().fg(app.theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" - Swipe to Start", Style::default().fg(app.theme.text)),
    ]);

    f.render_widget(
        Paragraph::new(title).style(Style::default().bg(app.theme.background)),
        Rect {
            x: area.x + 3.min(area.width),
            width: area.width.saturating_sub(3),
            ..area
        },
    );
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(app.theme.text_dim);
    let footer = Line::from(vec![
        Span::styled(" drag", Style::default().fg(app.theme.text)),
        Span::styled(" the handle left  │  ", dim),
        Span::styled("q", Style::default().fg(app.theme.text)),
        Span::styled(" quit", dim),
    ]);

    f.render_widget(
        Paragraph::new(footer).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn draw_alert(f: &mut Frame, app: &App) {
    let area = f.area();
    let popup_area = centered_rect(if area.width < 60 { 80 } else { 40 }, 7, area);

    f.render_widget(Clear, popup_area);

    let alert = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            app.message.as_str(),
            Style::default().fg(app.theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" OK", Style::default().fg(app.theme.text_dim)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.background)),
    )
    .alignment(Alignment::Center);

    f.render_widget(alert, popup_area);
}

/// Horizontally centered by percentage, vertically centered by row count
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
