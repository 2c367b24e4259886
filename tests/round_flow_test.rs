//! Integration test: round and game flow
//!
//! Drives the round controller through complete games: perfect runs,
//! error/repeat recovery, terminal failures, and new-game resets.

use mimic::constants::{ALLOWED_ERRORS_PER_ROUND, KEY_DEBOUNCE_MS, MAX_ROUNDS};
use mimic::game::logic::{process_input, start_game, tick_game, GameInput};
use mimic::game::types::{GameOutcome, GameState, Level, Phase};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Tick in sub-clamp chunks until the playback cursor is gone.
fn run_playback(state: &mut GameState) {
    let mut guard = 0;
    while state.playback.is_some() {
        tick_game(state, 450);
        guard += 1;
        assert!(guard < 1000, "playback did not terminate");
    }
}

/// Enter symbols one by one, waiting out the debounce window between them.
fn enter_symbols(state: &mut GameState, rng: &mut ChaCha8Rng, symbols: &[char]) {
    for &symbol in symbols {
        process_input(state, GameInput::Symbol(symbol), rng);
        tick_game(state, KEY_DEBOUNCE_MS);
    }
}

/// A symbol from the state's alphabet that is wrong at the given position.
fn wrong_symbol(state: &GameState, position: usize) -> char {
    let expected = state.sequence[position];
    state
        .level
        .symbols()
        .iter()
        .copied()
        .find(|&c| c != expected)
        .expect("alphabet has more than one symbol")
}

fn new_started_game(level: Level, seed: u64) -> (GameState, ChaCha8Rng) {
    let mut rng = seeded_rng(seed);
    let mut state = GameState::new(level);
    start_game(&mut state, &mut rng);
    (state, rng)
}

// =============================================================================
// Sequence generation properties
// =============================================================================

#[test]
fn test_sequence_length_is_twice_the_round_for_all_rounds() {
    let (mut state, mut rng) = new_started_game(Level::Easy, 1);

    for round in 1..=MAX_ROUNDS {
        assert_eq!(state.current_round, round);
        assert_eq!(state.sequence.len(), (round * 2) as usize);

        run_playback(&mut state);
        let seq = state.sequence.clone();
        enter_symbols(&mut state, &mut rng, &seq);
        process_input(&mut state, GameInput::Advance, &mut rng);
    }
}

#[test]
fn test_sequences_only_contain_level_symbols() {
    for (seed, level) in [(2, Level::Easy), (3, Level::Medium), (4, Level::Hard)] {
        let (mut state, mut rng) = new_started_game(level, seed);
        for _ in 1..MAX_ROUNDS {
            assert!(
                state.sequence.iter().all(|&c| level.contains(c)),
                "sequence {:?} escapes the {} alphabet",
                state.sequence,
                level.name()
            );
            run_playback(&mut state);
            let seq = state.sequence.clone();
            enter_symbols(&mut state, &mut rng, &seq);
            process_input(&mut state, GameInput::Advance, &mut rng);
        }
    }
}

// =============================================================================
// Round outcomes
// =============================================================================

#[test]
fn test_perfect_entry_wins_the_round() {
    let (mut state, mut rng) = new_started_game(Level::Easy, 5);
    run_playback(&mut state);

    let seq = state.sequence.clone();
    enter_symbols(&mut state, &mut rng, &seq);

    assert_eq!(state.phase, Phase::RoundSuccess);
    assert_eq!(state.errors_this_round, 0);
}

#[test]
fn test_error_then_repeat_then_perfect_entry_wins_the_round() {
    let (mut state, mut rng) = new_started_game(Level::Easy, 6);
    run_playback(&mut state);
    let seq = state.sequence.clone();

    let ws = wrong_symbol(&state, 0);
    process_input(&mut state, GameInput::Symbol(ws), &mut rng);
    assert_eq!(state.phase, Phase::RepeatOffer);

    process_input(&mut state, GameInput::Repeat, &mut rng);
    assert!(state.has_used_repeat);
    assert_eq!(state.sequence, seq, "repeat replays the same sequence");
    run_playback(&mut state);

    enter_symbols(&mut state, &mut rng, &seq);
    assert_eq!(state.phase, Phase::RoundSuccess);
}

#[test]
fn test_repeat_is_consumed_exactly_once() {
    let (mut state, mut rng) = new_started_game(Level::Easy, 7);
    run_playback(&mut state);

    let ws = wrong_symbol(&state, 0);
    process_input(&mut state, GameInput::Symbol(ws), &mut rng);
    process_input(&mut state, GameInput::Repeat, &mut rng);
    run_playback(&mut state);
    assert_eq!(state.phase, Phase::AwaitingInput);

    // Second request in the same round: no-op
    process_input(&mut state, GameInput::Repeat, &mut rng);
    assert_eq!(state.phase, Phase::AwaitingInput);
    assert!(state.playback.is_none());
}

#[test]
fn test_second_error_after_repeat_loses_the_game() {
    let (mut state, mut rng) = new_started_game(Level::Easy, 8);
    run_playback(&mut state);

    let ws = wrong_symbol(&state, 0);
    process_input(&mut state, GameInput::Symbol(ws), &mut rng);
    process_input(&mut state, GameInput::Repeat, &mut rng);
    run_playback(&mut state);

    let ws = wrong_symbol(&state, 0);
    process_input(&mut state, GameInput::Symbol(ws), &mut rng);

    assert_eq!(state.phase, Phase::GameOver(GameOutcome::Lost));
    assert!(!state.is_game_active);
    assert!(state.input_locked);
}

#[test]
fn test_error_with_repeat_already_spent_is_terminal() {
    // The original left this path stuck with disabled controls: repeat
    // consumed pre-emptively, then a first error while the error count is
    // still within budget. Here it ends the game.
    let (mut state, mut rng) = new_started_game(Level::Easy, 9);
    run_playback(&mut state);

    process_input(&mut state, GameInput::Repeat, &mut rng);
    assert!(state.has_used_repeat);
    run_playback(&mut state);

    let ws = wrong_symbol(&state, 0);
    process_input(&mut state, GameInput::Symbol(ws), &mut rng);

    assert!(
        state.errors_this_round <= ALLOWED_ERRORS_PER_ROUND,
        "still within the nominal error budget"
    );
    assert_eq!(state.phase, Phase::GameOver(GameOutcome::Lost));
}

// =============================================================================
// Game completion
// =============================================================================

#[test]
fn test_completing_all_rounds_wins_the_game() {
    for level in Level::ALL {
        let (mut state, mut rng) = new_started_game(level, 10);

        for _ in 1..=MAX_ROUNDS {
            run_playback(&mut state);
            let seq = state.sequence.clone();
            enter_symbols(&mut state, &mut rng, &seq);
            assert_eq!(state.phase, Phase::RoundSuccess);
            process_input(&mut state, GameInput::Advance, &mut rng);
        }

        assert_eq!(state.phase, Phase::GameOver(GameOutcome::Won));
        assert_eq!(state.current_round, MAX_ROUNDS);
        assert!(!state.is_game_active);
    }
}

#[test]
fn test_advance_grows_the_sequence_strictly() {
    let (mut state, mut rng) = new_started_game(Level::Medium, 11);
    let mut previous_len = 0;

    for _ in 1..=MAX_ROUNDS {
        assert!(state.sequence.len() > previous_len);
        previous_len = state.sequence.len();

        run_playback(&mut state);
        let seq = state.sequence.clone();
        enter_symbols(&mut state, &mut rng, &seq);
        process_input(&mut state, GameInput::Advance, &mut rng);
    }
}

// =============================================================================
// New game
// =============================================================================

#[test]
fn test_new_game_resets_everything_but_the_level() {
    let (mut state, mut rng) = new_started_game(Level::Hard, 12);
    run_playback(&mut state);
    let seq = state.sequence.clone();
    enter_symbols(&mut state, &mut rng, &seq);
    process_input(&mut state, GameInput::Advance, &mut rng);
    run_playback(&mut state);
    let ws = wrong_symbol(&state, 0);
    process_input(&mut state, GameInput::Symbol(ws), &mut rng);

    // The main loop builds a fresh session at the same level
    let mut fresh = GameState::new(state.level);
    assert_eq!(fresh.level, Level::Hard);
    assert_eq!(fresh.current_round, 1);
    assert!(fresh.sequence.is_empty());
    assert!(fresh.user_sequence.is_empty());
    assert_eq!(fresh.errors_this_round, 0);
    assert_eq!(fresh.phase, Phase::Idle);

    start_game(&mut fresh, &mut rng);
    assert_eq!(fresh.sequence.len(), 2);
    assert!(fresh.sequence.iter().all(|&c| Level::Hard.contains(c)));
}

#[test]
fn test_reset_preserves_remembered_level() {
    let mut state = GameState::new(Level::Easy);
    state.set_level(Level::Medium);
    state.current_round = 3;
    state.reset(true);

    assert_eq!(state.level, Level::Medium);
    assert_eq!(state.current_round, 1);
}
