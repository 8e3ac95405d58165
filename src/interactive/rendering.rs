//! TUI rendering with ratatui
//!
//! Board, pegs and game info for the interactive mode.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ABSENT_PEG, EXACT_PEG, Feedback, PRESENT_PEG};
use crate::game::{GameStatus, Round};
use crate::output::formatters::spaced_code;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn peg_spans(feedback: Feedback) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(usize::from(feedback.positions()));
    for _ in 0..feedback.exact() {
        spans.push(Span::styled(
            EXACT_PEG.to_string(),
            Style::default().fg(Color::Green),
        ));
    }
    for _ in 0..feedback.present() {
        spans.push(Span::styled(
            PRESENT_PEG.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }
    for _ in 0..feedback.absent() {
        spans.push(Span::styled(
            ABSENT_PEG.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans
}

fn round_line(round: &Round, positions: usize, current: bool) -> Line<'static> {
    let guess_style = if current {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if round.is_played() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(
            format!("{:>2}  ", round.number()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(spaced_code(round.guess(), positions), guess_style),
        Span::raw("  │ "),
    ];
    spans.extend(peg_spans(round.feedback()));
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let positions = app.engine.positions();
    let current = app.engine.current_round();

    let lines: Vec<Line> = app
        .engine
        .rounds()
        .iter()
        .rev()
        .map(|round| round_line(round, positions, current == Some(round.number())))
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Code and options
            Constraint::Length(3), // Rounds gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_code_info(f, app, chunks[0]);
    render_round_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_code_info(f: &mut Frame, app: &App, area: Rect) {
    let view = app.engine.view();
    let solution_style = match view.status {
        GameStatus::Won(_) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        GameStatus::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Code:    "),
            Span::styled(
                spaced_code(view.solution, app.engine.positions()),
                solution_style,
            ),
        ]),
        Line::from(vec![
            Span::raw("Options: "),
            Span::styled(view.alphabet.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(format!(
            "Length:  {} symbols, no repeats in the code",
            app.engine.positions()
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hidden Code ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_round_progress(f: &mut Frame, app: &App, area: Rect) {
    let used = app.engine.played_rounds().count();
    let total = app.engine.max_rounds();
    let percent = if total > 0 {
        (used * 100 / total).min(100) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Rounds Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{total}"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(
                " Round {} | Type {} letters, Enter to submit, Esc to quit ",
                app.engine.current_round().unwrap_or_default(),
                app.engine.positions()
            ),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Status: {}", app.engine.status()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Backspace: Erase | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
