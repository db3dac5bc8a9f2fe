//! Command-line arguments.

use std::path::PathBuf;

pub const USAGE: &str = "usage: gamemaster-guidance [-c|--cityfile PATH] [-g|--gangfile PATH]

options:
  -c, --cityfile PATH   city YAML document
  -g, --gangfile PATH   guild YAML document
  -h, --help            print this help

environment:
  GG_DATABASES_DIR      word list directory (default: databases)
  GG_SEED               seed for reproducible output
  RUST_LOG              log filter (default: warn)";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub city_file: Option<PathBuf>,
    pub guild_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parse arguments, program name excluded. Paths must name existing files.
pub fn parse<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-c" | "--cityfile" => {
                let path = file_value(&arg, args.next())?;
                options.city_file = Some(path);
            }
            "-g" | "--gangfile" => {
                let path = file_value(&arg, args.next())?;
                options.guild_file = Some(path);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(Command::Run(options))
}

fn file_value(flag: &str, value: Option<String>) -> Result<PathBuf, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a path"))?;
    let path = PathBuf::from(&value);
    if !path.exists() {
        return Err(format!("{value} does not exist"));
    }
    if !path.is_file() {
        return Err(format!("{value} is not a file"));
    }
    Ok(path)
}
