mod app;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod render;
mod util;
use crate::app::App;
use crate::clock::FixedRateClock;
use crate::command::TerminalInput;
use crate::config::Config;
use crate::game::Game;
use crate::render::TerminalRenderer;
use anyhow::Context;
use crossterm::{execute, terminal::SetTitle};
use lexopt::{Arg, Parser};
use log::{info, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = concat!(
    "Usage: gridsnake [-c|--config <FILE>] [--log-file <FILE>]\n",
    "\n",
    "Play snake on a wraparound grid.  Steer with the arrow keys, wasd, or hjkl;\n",
    "quit with q, Esc, or Ctrl-C.\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>   Read configuration from the given file\n",
    "      --log-file <FILE> Write log messages to the given file\n",
    "  -h, --help            Display this help message and exit\n",
    "  -V, --version         Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config, log_file })
    }
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(Cli::Run { config, log_file }) => exit_code(run(config.as_deref(), log_file)),
        Ok(Cli::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<&Path>, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    init_logging(log_file.or(config.log.file).as_deref(), config.log.level)?;
    let game_config = config.game.to_game_config();
    let game = Game::new(game_config);
    let mut clock = FixedRateClock::new(game.config().ticks_per_second);
    info!(
        "Starting game at {} ticks per second ({:?} per tick); food avoids creature: {}",
        game_config.ticks_per_second,
        clock.period(),
        game_config.food_avoids_creature
    );
    execute!(io::stdout(), SetTitle(consts::WINDOW_TITLE))
        .context("failed to set terminal title")?;
    let terminal = ratatui::init();
    let mut renderer = TerminalRenderer::new(terminal, game_config.grid);
    let r = App::new(game).run(&mut clock, &mut TerminalInput, &mut renderer);
    ratatui::restore();
    r.map_err(Into::into)
}

/// Send log messages at or above `level` to the file at `path`.  If `path` is
/// `None`, nothing is logged.
fn init_logging(path: Option<&Path>, level: LevelFilter) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = fs_err::File::create(path).context("failed to open log file")?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
