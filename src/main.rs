use crossterm::event::{self, Event};
use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use crossterm::ExecutableCommand;
use flappy::audio::AudioSink;
use flappy::clock::Clock;
use flappy::constants::*;
use flappy::game::{FlappyGame, Next};
use flappy::highscore::{FileHighscore, HighscoreStore, MemoryHighscore};
use flappy::input::map_key;
use flappy::preferences::Preferences;
use flappy::settings::Settings;
use flappy::ui::draw_ui;
use flappy::utils::terminal::{install_panic_hook, restore_terminal};
use flappy::utils::{build_info, persistence};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::time::Duration;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy - Terminal Flappy Bird\n");
                println!("Usage: flappy [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls: Space/Up/Enter to flap, q/Esc to quit.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();
    log::info!("{} starting", build_info::version_line());

    let preferences = Preferences::load();
    let mut audio = preferences.audio_sink();
    let mut store: Box<dyn HighscoreStore> = match FileHighscore::new() {
        Ok(file) => Box::new(file),
        Err(e) => {
            log::warn!("No data directory, highscore will not persist: {}", e);
            Box::new(MemoryHighscore::new())
        }
    };

    // Setup terminal
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, audio.as_mut(), store.as_mut());

    // Restore terminal even if the loop failed
    let restored = restore_terminal(terminal.backend_mut());

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    log::info!("flappy exiting");
    result.and(restored)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    audio: &mut dyn AudioSink,
    store: &mut dyn HighscoreStore,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut game = FlappyGame::new(Settings::new(), &mut rng);
    let mut clock = Clock::new(MAX_FRAME_SECONDS);

    loop {
        terminal.draw(|frame| draw_ui(frame, &game))?;

        // Drain all pending input before advancing time
        let mut timeout = Duration::from_millis(FRAME_POLL_MS);
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                if let Some(trigger) = map_key(&key) {
                    if game.handle(trigger, &mut rng, audio, store) == Next::Exit {
                        return Ok(());
                    }
                }
            }
        }

        let dt = clock.tick();
        game.tick(dt, &mut rng, audio, store);
    }
}

/// Send log output to the log file in the data directory. Logging is
/// disabled when the file cannot be opened; the terminal belongs to the game.
fn init_logging() {
    let file = persistence::data_path(LOG_FILE).and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
    });

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_FILTER_ENV, "info"));
    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}
