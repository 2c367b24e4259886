//! Simon Says core: game data and the round controller.

pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::{process_input, start_game, tick_game, GameInput};
pub use types::{GameOutcome, GameState, Level, Phase};
