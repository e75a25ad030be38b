use std::path::PathBuf;
use std::time::Duration;

use typed_builder::TypedBuilder;

pub const USAGE: &str = "\
Usage: alien_invasion [OPTIONS]

Options:
  --assets DIR         directory holding ship.txt, alien.txt and the sounds [default: assets]
  --tick-ms N          milliseconds per game tick [default: 16]
  --key-release N      ticks without a repeat before a held key counts as released [default: 32]
  --log FILE           log file [default: alien_invasion.log]
  --seed N             seed for alien fire, for reproducible runs
  -h, --help           print this help

Sound effects play only in builds made with `cargo build --features audio`;
the default build runs silently.";

#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct LaunchOptions {
    #[builder(default = PathBuf::from("assets"))]
    pub assets_dir: PathBuf,
    #[builder(default = Duration::from_millis(16))]
    pub tick_rate: Duration,
    /// Only used when the terminal cannot report key releases.
    #[builder(default = 32)]
    pub key_release_ticks: u64,
    #[builder(default = PathBuf::from("alien_invasion.log"))]
    pub log_file: PathBuf,
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    Help,
    Invalid(String),
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<LaunchOptions, ArgsError> {
    let mut options = LaunchOptions::builder().build();
    let mut args = args.into_iter();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "-h" | "--help" => return Err(ArgsError::Help),
            "--assets" => options.assets_dir = PathBuf::from(value(&flag, args.next())?),
            "--log" => options.log_file = PathBuf::from(value(&flag, args.next())?),
            "--tick-ms" => {
                let ms: u64 = number(&flag, args.next())?;
                if ms == 0 {
                    return Err(ArgsError::Invalid("--tick-ms must be at least 1".to_string()));
                }
                options.tick_rate = Duration::from_millis(ms);
            }
            "--key-release" => options.key_release_ticks = number(&flag, args.next())?,
            "--seed" => options.seed = Some(number(&flag, args.next())?),
            other => return Err(ArgsError::Invalid(format!("unknown argument '{}'", other))),
        }
    }
    Ok(options)
}

fn value(flag: &str, value: Option<String>) -> Result<String, ArgsError> {
    value.ok_or_else(|| ArgsError::Invalid(format!("{} needs a value", flag)))
}

fn number(flag: &str, raw: Option<String>) -> Result<u64, ArgsError> {
    let raw = value(flag, raw)?;
    raw.parse()
        .map_err(|_| ArgsError::Invalid(format!("{} expects a number, got '{}'", flag, raw)))
}
