//! Start scene: title, difficulty selector, and build-info footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::build_info;
use crate::game::Level;

const TITLE: &[&str] = &[
    r"  ___ ___ __  __  ___  _  _   ___   ___   _____",
    r" / __|_ _|  \/  |/ _ \| \| | / __| /_\ \ / / __|",
    r" \__ \| || |\/| | (_) | .` | \__ \/ _ \ V /\__ \",
    r" |___/___|_|  |_|\___/|_|\_| |___/_/ \_\_| |___/",
];

/// Difficulty selector state for the start screen.
pub struct StartScreen {
    pub selected_index: usize,
}

impl StartScreen {
    pub fn new(initial_level: Level) -> Self {
        let selected_index = Level::ALL
            .iter()
            .position(|&l| l == initial_level)
            .unwrap_or(0);
        Self { selected_index }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < Level::ALL.len() {
            self.selected_index += 1;
        }
    }

    pub fn selected_level(&self) -> Level {
        Level::from_index(self.selected_index)
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, last_played: Option<i64>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE.len() as u16 + 2),
                Constraint::Length(2),
                Constraint::Length(Level::ALL.len() as u16 + 2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let title_lines: Vec<Line> = TITLE
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        frame.render_widget(
            Paragraph::new(title_lines).alignment(Alignment::Center),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new("Watch the sequence, then type it back.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            chunks[1],
        );

        let mut level_lines = vec![Line::from(Span::styled(
            "Level",
            Style::default().fg(Color::White),
        ))];
        for (i, level) in Level::ALL.iter().enumerate() {
            let marker = if i == self.selected_index { "> " } else { "  " };
            let style = if i == self.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            level_lines.push(Line::from(Span::styled(
                format!("{}{:<8}{}", marker, level.name(), level_hint(*level)),
                style,
            )));
        }
        frame.render_widget(
            Paragraph::new(level_lines).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[\u{2191}\u{2193}]", Style::default().fg(Color::White)),
                Span::styled(" Level  ", Style::default().fg(Color::DarkGray)),
                Span::styled("[Enter]", Style::default().fg(Color::White)),
                Span::styled(" Start  ", Style::default().fg(Color::DarkGray)),
                Span::styled("[Q]", Style::default().fg(Color::White)),
                Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
            ]))
            .alignment(Alignment::Center),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(footer_text(last_played))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            chunks[4],
        );
    }
}

fn level_hint(level: Level) -> &'static str {
    match level {
        Level::Easy => "digits 0-9",
        Level::Medium => "letters A-Z",
        Level::Hard => "digits + letters",
    }
}

fn footer_text(last_played: Option<i64>) -> String {
    let build = format!("mimic {} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT);
    match last_played.and_then(|ts| chrono::DateTime::from_timestamp(ts, 0)) {
        Some(when) => format!("{}  \u{00B7}  last played {}", build, when.format("%Y-%m-%d")),
        None => build,
    }
}
