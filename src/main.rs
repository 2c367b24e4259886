mod build_info;
mod constants;
mod game;
mod input;
mod settings;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use constants::TICK_INTERVAL_MS;
use game::{logic, GameState};
use input::InputResult;
use settings::SettingsManager;
use ui::StartScreen;

enum Screen {
    Start,
    Game,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "mimic {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Mimic - Terminal Simon Says\n");
                println!("Usage: mimic [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'mimic --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let settings_manager = SettingsManager::new()?;
    let mut app_settings = settings_manager.load();

    let mut rng = rand::thread_rng();
    let mut start_screen = StartScreen::new(app_settings.preferred_level);
    let mut current_screen = Screen::Start;
    let mut game_state: Option<GameState> = None;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        match current_screen {
            Screen::Start => {
                terminal.draw(|frame| {
                    start_screen.draw(frame, frame.size(), app_settings.last_played);
                })?;

                if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Up => start_screen.select_previous(),
                            KeyCode::Down => start_screen.select_next(),
                            KeyCode::Enter => {
                                let level = start_screen.selected_level();
                                // Best-effort: a failed write must not block play
                                let _ = settings_manager.remember_level(level);
                                app_settings = settings_manager.load();

                                let mut state = GameState::new(level);
                                logic::start_game(&mut state, &mut rng);
                                game_state = Some(state);
                                current_screen = Screen::Game;
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                break;
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                let mut state = game_state
                    .take()
                    .expect("Game state should be initialized when entering Game screen");

                let mut last_tick = Instant::now();

                loop {
                    terminal.draw(|frame| {
                        ui::draw_game(frame, frame.size(), &state);
                    })?;

                    if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
                        if let Event::Key(key_event) = event::read()? {
                            match input::handle_game_input(&mut state, key_event, &mut rng) {
                                InputResult::Continue => {}
                                InputResult::NewGame => {
                                    // Fresh session, same difficulty
                                    let level = state.level;
                                    state = GameState::new(level);
                                    logic::start_game(&mut state, &mut rng);
                                    last_tick = Instant::now();
                                }
                                InputResult::QuitToStart => {
                                    start_screen = StartScreen::new(state.level);
                                    current_screen = Screen::Start;
                                    break;
                                }
                            }
                        }
                    }

                    let elapsed = last_tick.elapsed();
                    if elapsed >= Duration::from_millis(TICK_INTERVAL_MS) {
                        logic::tick_game(&mut state, elapsed.as_millis() as u64);
                        last_tick = Instant::now();
                    }
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}
