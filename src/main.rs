mod app;
mod assets;
mod audio;
mod config;
mod entities;
mod event;
mod fleet;
mod game;
mod geometry;
mod scoreboard;
mod settings;
mod stats;
mod ui;

use std::fs::File;
use std::io;
use std::process;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use assets::Images;
use audio::Sounds;
use config::{parse_args, ArgsError, LaunchOptions, USAGE};
use event::{Event, EventHandler};
use game::AlienInvasion;
use settings::Settings;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(ArgsError::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(ArgsError::Invalid(msg)) => {
            eprintln!("error: {}\n\n{}", msg, USAGE);
            process::exit(1);
        }
    };

    if let Err(err) = init_logging(&options) {
        eprintln!("warning: logging disabled: {:#}", err);
    }

    if let Err(err) = run(options) {
        log::error!("{:#}", err);
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn init_logging(options: &LaunchOptions) -> Result<()> {
    let file = File::create(&options.log_file)
        .with_context(|| format!("cannot create {}", options.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(options: LaunchOptions) -> Result<()> {
    let settings = Settings::default();
    let images = Images::load(&options.assets_dir, settings.sprite_scale)
        .with_context(|| format!("cannot load images from {}", options.assets_dir.display()))?;
    let sounds = Sounds::load(&options.assets_dir);
    let rng: Box<dyn RngCore> = match options.seed {
        Some(seed) => {
            log::info!("Alien fire seeded with {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(StdRng::from_entropy()),
    };
    let game = AlienInvasion::new(settings, images, sounds, rng)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        log::info!(
            "Terminal does not report key releases, held keys time out after {} ticks",
            options.key_release_ticks
        );
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(game, !release_events, options.key_release_ticks);
    let result = game_loop(&mut terminal, &mut app, EventHandler::new(options.tick_rate));

    // Restore terminal even when the loop failed
    if release_events {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    let stats = app.game.stats();
    log::info!(
        "Exiting: score {}, high score {}, level {}",
        stats.score,
        stats.high_score,
        stats.level
    );
    result
}

fn game_loop(terminal: &mut Tui, app: &mut App, mut events: EventHandler) -> Result<()> {
    terminal.draw(|frame| ui::render(frame, app))?;
    loop {
        match events.next()? {
            Event::Tick => {
                app.on_tick();
                terminal.draw(|frame| ui::render(frame, app))?;
            }
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Resize => {
                terminal.draw(|frame| ui::render(frame, app))?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
