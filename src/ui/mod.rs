//! Terminal scenes: stateless render targets over the game state.

pub mod game_common;
pub mod game_scene;
pub mod start_scene;

#[allow(unused_imports)]
pub use game_scene::draw_game;
#[allow(unused_imports)]
pub use start_scene::StartScreen;
