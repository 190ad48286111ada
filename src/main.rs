use std::fs::{self, File};
use std::io::{self, Write, stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor, event, execute, terminal};
use log::{info, warn};

use flappy_term::audio::{self, Audio};
use flappy_term::config::Config;
use flappy_term::game::{Action, Game, Mode};
use flappy_term::input::action_for_event;
use flappy_term::render::PixelBuf;
use flappy_term::store::{HighScoreStore, JsonFileStore, MemoryStore};
use flappy_term::view;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let config = Config::parse();
    if let Some(path) = config.log_path() {
        init_logging(&path);
    }

    let store: Box<dyn HighScoreStore> = match config.store_path() {
        Some(path) => {
            let store = JsonFileStore::open(path);
            info!("High score file: {}", store.path().display());
            Box::new(store)
        }
        None => {
            warn!("No data directory, high score will not be saved");
            Box::new(MemoryStore::default())
        }
    };
    let audio = Audio::new(audio::open_default_sink(), config.mute);
    let mut game = Game::new(store, audio, config.difficulty, config.tick_interval());

    let mut out = stdout();
    setup_terminal(&mut out).context("failed to prepare the terminal")?;
    let result = run(&mut out, &mut game);
    restore_terminal(&mut out).context("failed to restore the terminal")?;
    result
}

fn init_logging(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Logging disabled, cannot create {}: {err}", parent.display());
            return;
        }
    }
    // The terminal belongs to the game, so logs go to a file or nowhere.
    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Logging disabled, cannot open {}: {err}", path.display());
            return;
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn setup_terminal(out: &mut impl Write) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
        event::EnableMouseCapture,
    )
}

fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    execute!(
        out,
        event::DisableMouseCapture,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()
}

fn run(out: &mut impl Write, game: &mut Game) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut buf = PixelBuf::new(cols as usize, rows as usize * 2);
    let mut rng = rand::thread_rng();
    let mut frame: u64 = 0;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let event::Event::Resize(c, r) = event {
                buf.resize(c as usize, r as usize * 2);
                continue;
            }
            match action_for_event(&event, game.mode()) {
                Some(Action::Quit) => {
                    info!("Quit with high score {}", game.high_score());
                    return Ok(());
                }
                Some(action) => {
                    let before = game.mode();
                    game.handle(action);
                    if run_started(before, game.mode()) {
                        // Time spent before the run must not feed its timers.
                        last = Instant::now();
                    }
                }
                None => {}
            }
        }

        // Update
        let now = Instant::now();
        game.update(now - last, &mut rng);
        last = now;

        // Render
        frame += 1;
        view::draw(game, frame, &mut buf);
        let labels = view::labels(game, &buf);
        buf.render(out, &labels)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

fn run_started(before: Mode, after: Mode) -> bool {
    before != Mode::Playing && after == Mode::Playing
}
