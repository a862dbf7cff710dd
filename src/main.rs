use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::event::{self, Event};
use snake::app::App;
use snake::config::{GameConfig, SpeedPolicy, THEME_SCHEDULE};
use snake::input::{GameInput, SwipeTracker, map_key};
use snake::logging;
use snake::renderer;
use snake::schedule::Language;
use snake::score::{FileScoreStore, ScoreStore};
use snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort};
use snake::ui::hud::HudInfo;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Keep a constant tick interval (milliseconds) instead of speeding up with the score.
    #[arg(long = "fixed-speed", value_name = "MS")]
    fixed_speed: Option<u64>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Language for day labels and messages.
    #[arg(long, value_enum, default_value_t = Language::En)]
    lang: Language,

    /// Do not capture the mouse for swipe input.
    #[arg(long = "no-mouse")]
    no_mouse: bool,

    /// Write logs to this file (defaults to the data directory when RUST_LOG is set).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = logging::init_or_warn(cli.log_file.as_deref()) {
        log::info!("logging to {}", path.display());
    }

    let mouse_capture = !cli.no_mouse;
    install_panic_hook(mouse_capture);

    let mut config = GameConfig::default();
    if let Some(ms) = cli.fixed_speed {
        config.speed = SpeedPolicy::Fixed(Duration::from_millis(ms.max(1)));
    }
    let seed = cli.seed.unwrap_or_else(entropy_seed);
    let store = FileScoreStore::default();
    log::debug!("best score file: {}", store.path().display());

    let mut session = TerminalSession::enter(mouse_capture)?;
    let mut app = App::new(config, seed, store);

    run(&mut session, &mut app, cli.lang, mouse_capture)
}

fn run<S: ScoreStore>(
    session: &mut TerminalSession,
    app: &mut App<S>,
    language: Language,
    mouse_capture: bool,
) -> io::Result<()> {
    let mut swipe = SwipeTracker::from_terminal();

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                &app.state,
                HudInfo {
                    best_score: app.best_score,
                    pause_label: app.pause_label(),
                    overlay_visible: app.overlay_visible,
                    language,
                    theme: &THEME_SCHEDULE,
                },
            )
        })?;

        if event::poll(FRAME_INTERVAL)? {
            let input = match event::read()? {
                Event::Key(key) => map_key(key),
                Event::Mouse(mouse) if mouse_capture => {
                    swipe.handle(mouse).map(GameInput::Direction)
                }
                Event::Resize(_, _) => {
                    swipe = SwipeTracker::from_terminal();
                    None
                }
                _ => None,
            };

            if let Some(input) = input {
                if !app.handle_input(input, Instant::now()) {
                    break;
                }
            }
        }

        app.update(Instant::now());
    }

    Ok(())
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

fn install_panic_hook(mouse_capture: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort(mouse_capture);
        default_hook(panic_info);
    }));
}
