//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::config::Theme;
use crate::core::Clock;
use crate::features::timer::{format_minutes, format_mmss, Phase};
use crate::storage::ProgressStore;
use crate::tui::app::App;
use crate::tui::event::HELP;

/// Accent color for a theme.
pub const fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Pastel => Color::Rgb(241, 107, 151),
        Theme::Dark => Color::Rgb(60, 131, 246),
        Theme::Ocean => Color::Rgb(34, 196, 196),
        Theme::Forest => Color::Rgb(57, 172, 95),
        Theme::Minimal => Color::White,
    }
}

/// Render the application UI.
pub fn render<S: ProgressStore, C: Clock>(frame: &mut Frame<'_>, app: &App<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Timer
            Constraint::Length(3), // Progress gauge
            Constraint::Min(4),    // Stats and quote
            Constraint::Length(1), // Music
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_gauge(frame, app, chunks[2]);
    render_panels(frame, app, chunks[3]);
    render_music(frame, app, chunks[4]);
    render_status_bar(frame, app, chunks[5]);
}

fn render_header<S: ProgressStore, C: Clock>(frame: &mut Frame<'_>, app: &App<S, C>, area: Rect) {
    let timer = app.driver.timer();
    let config = timer.config();
    let title = format!(
        " {}  (focus {}m / break {}m) ",
        timer.phase().display_name(),
        config.focus_minutes(),
        config.break_minutes()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(accent(app.theme()))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent(app.theme())))
                .title(" studyflow "),
        );

    frame.render_widget(header, area);
}

fn render_timer<S: ProgressStore, C: Clock>(frame: &mut Frame<'_>, app: &App<S, C>, area: Rect) {
    let timer = app.driver.timer();
    let state_label = if timer.is_running() { "running" } else { "paused" };

    let lines = vec![
        Line::from(Span::styled(
            format_mmss(timer.remaining_seconds()),
            Style::default()
                .fg(accent(app.theme()))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state_label,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_gauge<S: ProgressStore, C: Clock>(frame: &mut Frame<'_>, app: &App<S, C>, area: Rect) {
    let timer = app.driver.timer();
    let color = match timer.phase() {
        Phase::Focus => accent(app.theme()),
        Phase::Break => Color::Green,
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(timer.progress().clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}

fn render_panels<S: ProgressStore, C: Clock>(frame: &mut Frame<'_>, app: &App<S, C>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_lines = match &app.profile {
        Some(profile) => {
            let (today_sessions, today_minutes) = app
                .today
                .as_ref()
                .map_or((0, 0), |s| (s.sessions_count, s.total_minutes));
            vec![
                Line::from(format!(
                    "Today: {today_sessions} sessions, {}",
                    format_minutes(today_minutes)
                )),
                Line::from(format!(
                    "Total: {} sessions, {}",
                    profile.total_sessions,
                    format_minutes(profile.total_minutes)
                )),
                Line::from(format!(
                    "Streak: {} (best {})",
                    profile.current_streak, profile.longest_streak
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Stats unavailable",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let stats = Paragraph::new(stats_lines)
        .block(Block::default().borders(Borders::ALL).title(" Progress "));
    frame.render_widget(stats, columns[0]);

    let quote = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("\"{}\"", app.quote.text),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("- {}", app.quote.author),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(quote, columns[1]);
}

fn render_music<S: ProgressStore, C: Clock>(frame: &mut Frame<'_>, app: &App<S, C>, area: Rect) {
    let track = app.player.track();
    let state = if app.player.is_playing() { "▶" } else { "⏸" };
    let text = format!(
        " {state} {} {}  vol {}%",
        track.emoji(),
        track.name(),
        app.player.volume()
    );
    frame.render_widget(Paragraph::new(text), area);
}

fn render_status_bar<S: ProgressStore, C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<S, C>,
    area: Rect,
) {
    let status_text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
