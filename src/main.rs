mod anomalies;
mod app;
mod command;
mod config;
mod consts;
mod game;
mod render;
mod scene;
mod snapshot;
mod timing;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use lexopt::{Arg, Parser, ValueExt};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Command-line invocation
#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    seed: Option<u64>,
    show_barrier: bool,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("show-barrier") => args.show_barrier = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Cli::Run(args) => args.run(),
            Cli::Help => {
                println!("Usage: snake3d [<options>]");
                println!();
                println!("Tile-grid snake with a deliberately defective core");
                println!();
                println!("Options:");
                println!("  -c, --config <path>     Read configuration from the given file");
                println!("      --log-file <path>   Write logs to the given file");
                println!("      --seed <n>          Seed the random number generator");
                println!("      --show-barrier      Draw the invisible barrier");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Cli::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        if let Some(ref path) = self.log_file {
            init_logging(path)?;
        }
        let config = match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::default_path().and_then(|path| Config::load(&path, true)),
        }
        .context("failed to load configuration")?;
        tracing::info!(?config, seed = ?self.seed, "Starting");
        let show_barrier = self.show_barrier || config.display.show_barrier;
        let terminal = ratatui::init();
        let releases = report_key_releases();
        tracing::debug!(releases, "Terminal initialized");
        let r = match self.seed {
            Some(seed) => App::new(
                Game::new_with_rng(config.anomalies, ChaCha12Rng::seed_from_u64(seed)),
                show_barrier,
            )
            .run(terminal),
            None => App::new(Game::new(config.anomalies), show_barrier).run(terminal),
        };
        if releases {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
        r.map_err(Into::into)
    }
}

/// Ask the terminal to report key releases along with key presses, so that
/// letting go of the pause key can be seen.  Returns whether the request was
/// made.
fn report_key_releases() -> bool {
    if !crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false) {
        return false;
    }
    let flags = KeyboardEnhancementFlags::REPORT_EVENT_TYPES;
    execute!(io::stdout(), PushKeyboardEnhancementFlags(flags)).is_ok()
}

/// Send log events to `path`.  Logging is off unless this is called, as the
/// terminal belongs to the game.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> ExitCode {
    let r = Cli::from_parser(Parser::from_env())
        .map_err(anyhow::Error::from)
        .and_then(Cli::run);
    exit(r)
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("snake3d: {e:?}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_args(args))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).ok(), Some(Cli::Run(Arguments::default())));
    }

    #[test]
    fn all_args() {
        let cli = parse(&[
            "-c",
            "snake.toml",
            "--log-file",
            "snake.log",
            "--seed",
            "42",
            "--show-barrier",
        ]);
        assert_eq!(
            cli.ok(),
            Some(Cli::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
                seed: Some(42),
                show_barrier: true,
            }))
        );
    }

    #[rstest]
    #[case(&["-h"], Cli::Help)]
    #[case(&["--seed", "1", "--help"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    fn info_flags(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).ok(), Some(cli));
    }

    #[rstest]
    #[case(&["--seed", "many"])]
    #[case(&["--seed"])]
    #[case(&["--bogus"])]
    #[case(&["extra"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err(), "{args:?} should be rejected");
    }
}
