//! TUI rendering with ratatui
//!
//! Visualizations for the word-guessing interface.

use super::app::{App, InputMode, MESSAGE_LIMIT, MessageStyle};
use crate::core::{Letter, LetterState, MAX_LIVES, Status, WordPool};
use crate::output::formatters::{house_art, lives_hearts};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<P: WordPool>(f: &mut Frame, app: &App<'_, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Lives gauge
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Word and house
            Constraint::Percentage(45), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_word_panel(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Lives gauge
    render_lives(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🏠 BRICK BY BRICK - Word Guessing Game")
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

fn render_word_panel<P: WordPool>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // Masked word and clue
            Constraint::Min(10),    // House
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_house(f, app, chunks[1]);
}

fn render_word<P: WordPool>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let state = app.game.display();

    let word_line = match state.status {
        Status::InProgress => Line::from(Span::styled(
            state.masked_word.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Status::Won => Line::from(Span::styled(
            state.masked_word.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Status::Lost => Line::from(Span::styled(
            app.game
                .target()
                .text()
                .chars()
                .map(|c| format!("{c} "))
                .collect::<String>()
                .trim_end()
                .to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    };

    let mut content = vec![Line::default(), word_line];

    if let Some(clue) = &state.clue {
        content.push(Line::default());
        content.push(Line::from(vec![
            Span::styled("Clue: ", Style::default().fg(Color::Cyan)),
            Span::raw(clue.clone()),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_house<P: WordPool>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let pieces = app.game.mistakes();

    let title = if pieces == 0 {
        " Empty Lot ".to_string()
    } else {
        format!(" House: {pieces}/{MAX_LIVES} pieces ")
    };

    let color = match pieces {
        0..=2 => Color::White,
        3..=4 => Color::Yellow,
        _ => Color::Red,
    };

    let paragraph = Paragraph::new(house_art(pieces))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_side_panel<P: WordPool>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard<P: WordPool>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let lines: Vec<Line> = app
        .layout
        .rows()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .filter_map(|&c| {
                    let letter = Letter::new(c).ok()?;
                    let style = match app.game.letter_state(letter) {
                        LetterState::Untried => Style::default().fg(Color::White),
                        LetterState::Hit => Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        LetterState::Miss => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    Some(Span::styled(format!(" {c} "), style))
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages<P: WordPool>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(MESSAGE_LIMIT)
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

fn render_lives<P: WordPool>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let lives = app.game.lives();
    let pct = (f64::from(lives) / f64::from(MAX_LIVES) * 100.0) as u16;

    let color = match lives {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(pct)
        .label(format!("{} {lives}/{MAX_LIVES}", lives_hearts(lives)));

    f.render_widget(gauge, area);
}

fn render_status<P: WordPool>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let difficulty = app.game.difficulty();
    let difficulty_text = format!("Difficulty: {difficulty} ({} pt)", difficulty.points());
    let difficulty_widget = Paragraph::new(difficulty_text).alignment(Alignment::Center);
    f.render_widget(difficulty_widget, chunks[0]);

    let totals_text = format!(
        "Score: {} | High: {}",
        app.game.score(),
        app.game.high_score()
    );
    let totals = Paragraph::new(totals_text).alignment(Alignment::Center);
    f.render_widget(totals, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Playing => "A-Z: Guess | TAB: Hint | 1/2/3: Difficulty | ESC: Quit",
        InputMode::RoundOver => "n/Enter: New Round | 1/2/3: Difficulty | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
