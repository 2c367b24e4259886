//! Simon Says game data structures.
//!
//! `GameState` owns all game data and exposes the small transition methods
//! the round controller in `logic.rs` drives. No I/O here.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{ALLOWED_ERRORS_PER_ROUND, MAX_ROUNDS};

/// Easy alphabet: the ten digits.
pub const EASY_SYMBOLS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Medium alphabet: uppercase A-Z.
pub const MEDIUM_SYMBOLS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Hard alphabet: digits then letters.
pub const HARD_SYMBOLS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Difficulty levels. The level fixes the symbol alphabet sequences are
/// drawn from and keyboard input is filtered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    /// Selector-index lookup. Out-of-range defaults to Easy so a bad
    /// index can never produce an empty alphabet downstream.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Level::Easy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// The symbol alphabet for this level. Never empty.
    pub fn symbols(&self) -> &'static [char] {
        match self {
            Self::Easy => EASY_SYMBOLS,
            Self::Medium => MEDIUM_SYMBOLS,
            Self::Hard => HARD_SYMBOLS,
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols().contains(&symbol)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Easy
    }
}

/// Final game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Round-controller phase. Transitions are owned by `logic.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first round starts.
    Idle,
    /// Timed playback of the sequence. Input is locked for its duration.
    ShowingSequence,
    /// Player is entering symbols.
    AwaitingInput,
    /// First error this round; the one-time replay is on offer.
    RepeatOffer,
    /// Full sequence reproduced; waiting for the advance action.
    RoundSuccess,
    GameOver(GameOutcome),
}

/// Cursor over the sequence during `ShowingSequence`.
///
/// Each step is a highlight window followed by a gap; `tick_playback` in
/// `logic.rs` advances it with accumulated milliseconds from the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    /// Index into `sequence` currently being shown.
    pub step: usize,
    /// False while the symbol is lit, true during the gap after it.
    pub in_gap: bool,
    /// Milliseconds accumulated inside the current sub-step.
    pub elapsed_ms: u64,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            step: 0,
            in_gap: false,
            elapsed_ms: 0,
        }
    }
}

/// Highlight from the player's own keypress (display only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFlash {
    pub symbol: char,
    pub remaining_ms: u64,
}

/// Full game-session state: round counter, sequences, difficulty, error
/// budget, gating flags, and the timed-playback cursor.
#[derive(Debug, Clone)]
pub struct GameState {
    pub current_round: u32,
    pub sequence: Vec<char>,
    pub user_sequence: Vec<char>,
    pub level: Level,
    /// The "remembered" difficulty a reset restores.
    pub initial_level: Level,
    pub errors_this_round: u32,
    pub has_used_repeat: bool,
    pub is_game_active: bool,
    pub is_showing_sequence: bool,
    pub input_locked: bool,
    pub phase: Phase,
    pub playback: Option<Playback>,
    pub input_flash: Option<KeyFlash>,
    /// Fresh symbol input is dropped while this countdown is live.
    pub input_debounce_ms: u64,
}

impl GameState {
    pub fn new(initial_level: Level) -> Self {
        let mut state = Self {
            current_round: 1,
            sequence: Vec::new(),
            user_sequence: Vec::new(),
            level: initial_level,
            initial_level,
            errors_this_round: 0,
            has_used_repeat: false,
            is_game_active: false,
            is_showing_sequence: false,
            input_locked: true,
            phase: Phase::Idle,
            playback: None,
            input_flash: None,
            input_debounce_ms: 0,
        };
        state.reset(true);
        state
    }

    /// Reinitialize for a new game. `keep_level` restores the remembered
    /// difficulty; otherwise the level falls back to Easy.
    pub fn reset(&mut self, keep_level: bool) {
        self.current_round = 1;
        self.sequence.clear();
        self.user_sequence.clear();
        self.level = if keep_level {
            self.initial_level
        } else {
            Level::Easy
        };
        self.errors_this_round = 0;
        self.has_used_repeat = false;
        self.is_game_active = false;
        self.is_showing_sequence = false;
        self.input_locked = true;
        self.phase = Phase::Idle;
        self.playback = None;
        self.input_flash = None;
        self.input_debounce_ms = 0;
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.initial_level = level;
    }

    /// Required sequence length for the current round.
    pub fn sequence_len_for_round(&self) -> usize {
        (self.current_round * 2) as usize
    }

    /// Draw a fresh uniform-random sequence for the current round and
    /// clear all round-scoped progress (input, errors, repeat allowance).
    pub fn generate_sequence<R: Rng>(&mut self, rng: &mut R) {
        let symbols = self.level.symbols();
        self.sequence = (0..self.sequence_len_for_round())
            .map(|_| symbols[rng.gen_range(0..symbols.len())])
            .collect();
        self.user_sequence.clear();
        self.errors_this_round = 0;
        self.has_used_repeat = false;
    }

    pub fn add_user_input(&mut self, symbol: char) {
        self.user_sequence.push(symbol);
    }

    pub fn clear_user_input(&mut self) {
        self.user_sequence.clear();
    }

    /// Judge the most recently entered symbol against the position it
    /// fills. False when nothing has been entered yet.
    pub fn is_current_input_correct(&self) -> bool {
        match self.user_sequence.len().checked_sub(1) {
            Some(i) => self.user_sequence.get(i) == self.sequence.get(i),
            None => false,
        }
    }

    pub fn is_sequence_complete(&self) -> bool {
        self.user_sequence.len() == self.sequence.len()
    }

    pub fn next_round(&mut self) {
        self.current_round += 1;
    }

    pub fn is_game_complete(&self) -> bool {
        self.current_round > MAX_ROUNDS
    }

    /// Whether the round still tolerates another error.
    pub fn within_error_budget(&self) -> bool {
        self.errors_this_round <= ALLOWED_ERRORS_PER_ROUND
    }

    /// The symbol to light on the board this frame, if any: the playback
    /// cursor during ShowingSequence, else the player's own keypress flash.
    pub fn lit_symbol(&self) -> Option<char> {
        if let Some(pb) = &self.playback {
            if !pb.in_gap {
                return self.sequence.get(pb.step).copied();
            }
            return None;
        }
        self.input_flash.map(|f| f.symbol)
    }
}
