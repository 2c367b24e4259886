//! Mimic - Terminal Simon Says Library
//!
//! Exposes the game core for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod settings;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
