//! Input handling for the Game screen.
//!
//! Maps raw crossterm key events to game actions: level-aware symbol
//! filtering, uppercase normalization, key-repeat suppression, and the
//! phase-based dispatch chain.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

use crate::game::{logic, GameInput, GameState, Level, Phase};

/// Result of handling a game key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Discard the session and start a fresh game at the same difficulty.
    NewGame,
    /// Abandon the session and return to the start screen.
    QuitToStart,
}

/// Map a physical key to a symbol the current level accepts.
///
/// Only plain character presses qualify: key-repeat and release events
/// are dropped, CONTROL/ALT-held keys are rejected, lowercase letters are
/// normalized to uppercase, and anything outside the level alphabet is
/// filtered out before the core sees it.
pub fn map_symbol_key(key: KeyEvent, level: Level) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let upper = c.to_ascii_uppercase();
    level.contains(upper).then_some(upper)
}

/// Dispatcher for Game-screen input. The repeat hotkey is Tab because
/// every letter and digit can be a symbol on Hard; Tab never collides
/// with the alphabet.
pub fn handle_game_input<R: Rng>(
    state: &mut GameState,
    key: KeyEvent,
    rng: &mut R,
) -> InputResult {
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    // 1. Abandoning the session is always available
    if key.code == KeyCode::Esc {
        return InputResult::QuitToStart;
    }

    // 2. Game over: only the new-game affordance remains
    if let Phase::GameOver(_) = state.phase {
        return match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') => InputResult::NewGame,
            _ => InputResult::Continue,
        };
    }

    // 3. Phase actions
    let input = match state.phase {
        Phase::AwaitingInput => {
            if let Some(symbol) = map_symbol_key(key, state.level) {
                GameInput::Symbol(symbol)
            } else if key.code == KeyCode::Tab {
                GameInput::Repeat
            } else {
                GameInput::Other
            }
        }
        Phase::RepeatOffer => match key.code {
            KeyCode::Tab => GameInput::Repeat,
            _ => GameInput::Other,
        },
        Phase::RoundSuccess => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => GameInput::Advance,
            _ => GameInput::Other,
        },
        _ => GameInput::Other,
    };

    logic::process_input(state, input, rng);
    InputResult::Continue
}
