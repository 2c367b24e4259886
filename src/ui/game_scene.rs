//! Game scene: symbol board with playback/keypress highlight, input echo,
//! phase-derived message line, and the round info panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::game_common::{create_game_layout, render_game_over_overlay, render_status_bar};
use crate::constants::{ALLOWED_ERRORS_PER_ROUND, MAX_ROUNDS};
use crate::game::{GameOutcome, GameState, Phase};

/// Symbols per board row.
const BOARD_COLUMNS: usize = 10;

/// Render the game scene for the current frame.
pub fn draw_game(frame: &mut Frame, area: Rect, state: &GameState) {
    if let Phase::GameOver(outcome) = state.phase {
        render_game_over_overlay(frame, area, outcome, outcome_message(outcome));
        return;
    }

    let layout = create_game_layout(frame, area, " Simon Says ", Color::Cyan, 10, 24);

    render_board(frame, layout.content, state);
    render_status_bar(
        frame,
        layout.status_bar,
        phase_message(state),
        phase_color(state),
        &phase_controls(state),
    );
    render_info_panel(frame, layout.info_panel, state);
}

fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Won => "Congratulations! You completed all 5 rounds.",
        GameOutcome::Lost => "Game over. Try again!",
    }
}

/// The message line is derived from phase; nothing is stored in core state.
fn phase_message(state: &GameState) -> &'static str {
    match state.phase {
        Phase::Idle => "",
        Phase::ShowingSequence => "Remember the sequence...",
        Phase::AwaitingInput => {
            if state.has_used_repeat {
                "Repeat the sequence."
            } else {
                "Write the sequence."
            }
        }
        Phase::RepeatOffer => "Incorrect. You can repeat the sequence once.",
        Phase::RoundSuccess => "Correct!",
        Phase::GameOver(_) => "",
    }
}

fn phase_color(state: &GameState) -> Color {
    match state.phase {
        Phase::ShowingSequence => Color::Yellow,
        Phase::AwaitingInput => Color::Cyan,
        Phase::RepeatOffer => Color::LightRed,
        Phase::RoundSuccess => Color::Green,
        _ => Color::White,
    }
}

fn phase_controls(state: &GameState) -> Vec<(&'static str, &'static str)> {
    match state.phase {
        Phase::ShowingSequence => vec![("[Esc]", "Quit")],
        Phase::AwaitingInput => {
            if state.has_used_repeat {
                vec![("[Esc]", "Quit")]
            } else {
                vec![("[Tab]", "Repeat"), ("[Esc]", "Quit")]
            }
        }
        Phase::RepeatOffer => vec![("[Tab]", "Repeat"), ("[Esc]", "Quit")],
        Phase::RoundSuccess => vec![("[Enter]", "Next"), ("[Esc]", "Quit")],
        _ => vec![("[Esc]", "Quit")],
    }
}

/// Render the symbol board and the input echo line.
///
/// The board shows every symbol of the current level; the lit cell (from
/// playback or the player's own keypress) gets the highlight style. If
/// the area is too small for every row the tail rows are clipped; playback
/// timing is unaffected.
fn render_board(frame: &mut Frame, area: Rect, state: &GameState) {
    let symbols = state.level.symbols();
    let lit = state.lit_symbol();
    let dimmed = state.is_showing_sequence;

    let mut lines: Vec<Line> = vec![Line::from("")];
    for row in symbols.chunks(BOARD_COLUMNS) {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for &symbol in row {
            let style = if lit == Some(symbol) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if dimmed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", symbol), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Input echo under the board
    let typed: String = state.user_sequence.iter().collect();
    lines.push(Line::from(vec![
        Span::styled("Your input: ", Style::default().fg(Color::DarkGray)),
        Span::styled(typed, Style::default().fg(Color::Cyan)),
    ]));

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, area);
}

/// Round, level, progress, and error budget.
fn render_info_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(" Round ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let repeat_status = if state.has_used_repeat {
        Span::styled("used", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled("available", Style::default().fg(Color::Green))
    };

    let lines = vec![
        Line::from(format!("Round: {} / {}", state.current_round, MAX_ROUNDS)),
        Line::from(format!("Level: {}", state.level.name())),
        Line::from(format!(
            "Symbols: {} / {}",
            state.user_sequence.len(),
            state.sequence.len()
        )),
        Line::from(format!(
            "Errors: {} / {}",
            state.errors_this_round, ALLOWED_ERRORS_PER_ROUND
        )),
        Line::from(vec![Span::raw("Repeat: "), repeat_status]),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(text, inner);
}
