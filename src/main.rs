mod app;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake on an 11x11 board that wraps around at the edges.

Options:
  -c, --config <FILE>    Read configuration from <FILE>
      --log-file <FILE>  Write diagnostic logs to <FILE>
  -h, --help             Show this help message and exit
  -V, --version          Show the program version and exit

Move with the arrow keys, wasd, or hjkl.  Quit with q, Esc, or Ctrl-C.
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

impl CliCommand {
    fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    match CliCommand::from_parser(Parser::from_env()) {
        Ok(CliCommand::Run(args)) => report(run(args)),
        Ok(CliCommand::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let (config, config_path) = load_config(args.config.as_deref())?;
    if let Some(log_file) = args.log_file.as_ref().or(config.files.log_file.as_ref()) {
        logging::init_logging(log_file)
            .with_context(|| format!("failed to set up logging to {}", log_file.display()))?;
    }
    if let Some(path) = config_path {
        tracing::info!(path = %path.display(), "Using configuration file");
    } else {
        tracing::info!("Using default configuration");
    }
    let terminal = ratatui::init();
    let r = App::new(&config).run(terminal);
    ratatui::restore();
    r.context("terminal I/O failed")
}

/// Load the configuration from `path` if given, otherwise from the default
/// location if it exists.  Also returns the path of the file actually read,
/// if any.
fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let (path, allow_missing) = match path {
        Some(p) => (p.to_owned(), false),
        None => match Config::default_path() {
            Ok(p) => (p, true),
            Err(_) => return Ok((Config::default(), None)),
        },
    };
    let config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    let used = path.exists().then_some(path);
    Ok((config, used))
}

fn report(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
}
