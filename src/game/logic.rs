//! Simon Says round controller: timed sequence playback, input judgment,
//! and round/game flow. UI-agnostic; driven by the main loop's tick.

use rand::Rng;

use super::types::{GameOutcome, GameState, KeyFlash, Phase, Playback};
use crate::constants::{HIGHLIGHT_MS, KEY_DEBOUNCE_MS, KEY_FLASH_MS, MAX_ROUNDS, PLAYBACK_GAP_MS};

/// Input actions for the game (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// A symbol entry, already normalized and filtered by the input layer.
    Symbol(char),
    /// Request the one-time sequence replay.
    Repeat,
    /// Advance past a completed round.
    Advance,
    Other,
}

/// Mark the game active and enter round 1.
pub fn start_game<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.is_game_active = true;
    begin_round(state, rng);
}

/// Generate the current round's sequence and start its playback.
pub fn begin_round<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.generate_sequence(rng);
    enter_playback(state);
}

/// Lock input and install the playback cursor at step 0. Used both for a
/// fresh round and for the one-time replay of an existing sequence.
fn enter_playback(state: &mut GameState) {
    state.clear_user_input();
    state.input_flash = None;
    state.is_showing_sequence = true;
    state.input_locked = true;
    state.playback = Some(Playback::new());
    state.phase = Phase::ShowingSequence;
}

/// Playback finished: unlock input and start accepting symbols.
fn finish_playback(state: &mut GameState) {
    state.playback = None;
    state.is_showing_sequence = false;
    state.input_locked = false;
    state.phase = Phase::AwaitingInput;
}

fn finish_game(state: &mut GameState, outcome: GameOutcome) {
    state.is_game_active = false;
    state.is_showing_sequence = false;
    state.input_locked = true;
    state.playback = None;
    state.phase = Phase::GameOver(outcome);
}

/// Advance timed state. Called from the main game loop.
///
/// `dt_ms` is milliseconds since last call. Steps the playback cursor
/// through its highlight/gap windows and decays the keypress flash and
/// debounce countdown. Returns true if anything visible changed.
pub fn tick_game(state: &mut GameState, dt_ms: u64) -> bool {
    // Clamp dt to keep a stalled terminal from skipping whole steps
    let dt_ms = dt_ms.min(500);
    let mut changed = false;

    if let Some(flash) = &mut state.input_flash {
        if flash.remaining_ms <= dt_ms {
            state.input_flash = None;
        } else {
            flash.remaining_ms -= dt_ms;
        }
        changed = true;
    }
    state.input_debounce_ms = state.input_debounce_ms.saturating_sub(dt_ms);

    changed | tick_playback(state, dt_ms)
}

/// Step the playback cursor. Each sequence position is a `HIGHLIGHT_MS`
/// window followed by a `PLAYBACK_GAP_MS` window, strictly ordered and
/// non-skippable; several windows may elapse in one tick after a stall.
fn tick_playback(state: &mut GameState, dt_ms: u64) -> bool {
    let Some(mut playback) = state.playback else {
        return false;
    };

    playback.elapsed_ms += dt_ms;
    loop {
        let window = if playback.in_gap {
            PLAYBACK_GAP_MS
        } else {
            HIGHLIGHT_MS
        };
        if playback.elapsed_ms < window {
            break;
        }
        playback.elapsed_ms -= window;

        if playback.in_gap {
            playback.step += 1;
            playback.in_gap = false;
            if playback.step >= state.sequence.len() {
                finish_playback(state);
                return true;
            }
        } else {
            playback.in_gap = true;
        }
    }

    state.playback = Some(playback);
    true
}

/// Dispatch a game input action. Symbol input is judged immediately;
/// everything arriving in a phase that does not accept it is ignored.
pub fn process_input<R: Rng>(state: &mut GameState, input: GameInput, rng: &mut R) {
    match input {
        GameInput::Symbol(symbol) => process_symbol(state, symbol),
        GameInput::Repeat => request_repeat(state),
        GameInput::Advance => advance_round(state, rng),
        GameInput::Other => {}
    }
}

/// Append one symbol and judge it against the position it fills.
fn process_symbol(state: &mut GameState, symbol: char) {
    if !state.is_game_active || state.is_showing_sequence || state.input_locked {
        return;
    }
    if state.phase != Phase::AwaitingInput {
        return;
    }
    // Busy window: drops key-repeat double-counts
    if state.input_debounce_ms > 0 {
        return;
    }
    // The input layer filters by alphabet already; re-check so the core
    // never records a symbol the sequence could not contain.
    if !state.level.contains(symbol) {
        return;
    }

    state.input_flash = Some(KeyFlash {
        symbol,
        remaining_ms: KEY_FLASH_MS,
    });
    state.input_debounce_ms = KEY_DEBOUNCE_MS;
    state.add_user_input(symbol);

    if !state.is_current_input_correct() {
        state.errors_this_round += 1;
        state.input_locked = true;
        if !state.within_error_budget() || state.has_used_repeat {
            // Second error, or any error once the replay is spent, ends
            // the whole game, not just the round.
            finish_game(state, GameOutcome::Lost);
        } else {
            state.phase = Phase::RepeatOffer;
        }
        return;
    }

    if state.is_sequence_complete() {
        state.input_locked = true;
        state.phase = Phase::RoundSuccess;
    }
}

/// Replay the current sequence. At most once per round; a request with
/// the allowance spent is a no-op.
fn request_repeat(state: &mut GameState) {
    if !state.is_game_active || state.is_showing_sequence {
        return;
    }
    if !matches!(state.phase, Phase::RepeatOffer | Phase::AwaitingInput) {
        return;
    }
    if state.has_used_repeat {
        return;
    }
    state.has_used_repeat = true;
    enter_playback(state);
}

/// Leave a completed round: finish the game after the last round, or
/// move to the next (longer) sequence.
fn advance_round<R: Rng>(state: &mut GameState, rng: &mut R) {
    if state.phase != Phase::RoundSuccess {
        return;
    }
    if state.current_round >= MAX_ROUNDS {
        finish_game(state, GameOutcome::Won);
        return;
    }
    state.next_round();
    begin_round(state, rng);
}
