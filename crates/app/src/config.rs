use std::fmt;

use ui::views::{DEFAULT_SOUND_DIR, SOUND_FILES};

pub const ENV_SEED: &str = "NUMBER_KEYS_SEED";
pub const ENV_MUTE: &str = "NUMBER_KEYS_MUTE";
pub const ENV_SOUNDS: &str = "NUMBER_KEYS_SOUNDS";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidSoundDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidSoundDir { raw } => write!(f, "invalid --sounds value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

pub fn usage() -> String {
    let files = SOUND_FILES.join(", ");
    format!(
        "Usage:
  cargo run -p app -- [--seed <u64>] [--mute] [--sounds <dir>]

Defaults:
  random problems, sounds on, --sounds {DEFAULT_SOUND_DIR}

Sounds:
  The app plays {files} from the sound directory.
  They are not bundled: put them in an `audio/` folder where the webview serves
  files from (the working directory under `cargo run`), or point --sounds elsewhere.
  Missing files are logged as playback warnings and the drill carries on.

Environment:
  {ENV_SEED}, {ENV_MUTE}, {ENV_SOUNDS}, RUST_LOG
"
    )
}

pub fn print_usage() {
    eprint!("{}", usage());
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub seed: Option<u64>,
    pub muted: bool,
    pub sound_dir: String,
}

impl Args {
    /// Parses flags on top of environment defaults. Flags win over the environment.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing values, or values that do not parse.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut parsed = Self::from_env(&env)?;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    parsed.seed = Some(parse_seed(&value)?);
                }
                "--mute" => parsed.muted = true,
                "--sounds" => {
                    let value = require_value(&mut args, "--sounds")?;
                    parsed.sound_dir = parse_sound_dir(value)?;
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(parsed))
    }

    fn from_env(env: &impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        let seed = env(ENV_SEED)
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_seed(&value))
            .transpose()?;
        let muted = env(ENV_MUTE).is_some_and(|value| is_truthy(&value));
        let sound_dir = env(ENV_SOUNDS)
            .map(parse_sound_dir)
            .transpose()?
            .unwrap_or_else(|| DEFAULT_SOUND_DIR.to_string());

        Ok(Self {
            seed,
            muted,
            sound_dir,
        })
    }
}

fn parse_seed(raw: &str) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidSeed {
        raw: raw.to_string(),
    })
}

fn parse_sound_dir(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::InvalidSoundDir { raw });
    }
    Ok(trimmed.to_string())
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| (*arg).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let cmd = Args::parse(args(&[]), no_env).unwrap();
        assert_eq!(
            cmd,
            Command::Run(Args {
                seed: None,
                muted: false,
                sound_dir: "/audio".to_string(),
            })
        );
    }

    #[test]
    fn flags_are_parsed() {
        let cmd = Args::parse(args(&["--seed", "42", "--mute", "--sounds", "/sfx"]), no_env).unwrap();
        assert_eq!(
            cmd,
            Command::Run(Args {
                seed: Some(42),
                muted: true,
                sound_dir: "/sfx".to_string(),
            })
        );
    }

    #[test]
    fn environment_supplies_defaults_and_flags_override() {
        let env = |key: &str| match key {
            ENV_SEED => Some("7".to_string()),
            ENV_MUTE => Some("Yes".to_string()),
            _ => None,
        };
        let Command::Run(parsed) = Args::parse(args(&["--seed", "9"]), env).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(parsed.seed, Some(9));
        assert!(parsed.muted);
    }

    #[test]
    fn bad_values_are_reported() {
        assert_eq!(
            Args::parse(args(&["--seed", "abc"]), no_env),
            Err(ArgsError::InvalidSeed {
                raw: "abc".to_string()
            })
        );
        assert_eq!(
            Args::parse(args(&["--seed"]), no_env),
            Err(ArgsError::MissingValue { flag: "--seed" })
        );
        assert_eq!(
            Args::parse(args(&["--sounds", "  "]), no_env),
            Err(ArgsError::InvalidSoundDir {
                raw: "  ".to_string()
            })
        );
        assert_eq!(
            Args::parse(args(&["--fast"]), no_env),
            Err(ArgsError::UnknownArg("--fast".to_string()))
        );
    }

    #[test]
    fn usage_explains_where_sounds_come_from() {
        let text = usage();
        for file in ["correct.mp3", "incorrect.mp3", "button.mp3"] {
            assert!(text.contains(file), "{text}");
        }
        assert!(text.contains("--sounds /audio"), "{text}");
        assert!(text.contains("not bundled"), "{text}");
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(Args::parse(args(&["-h", "--bogus"]), no_env), Ok(Command::Help));
    }

    #[test]
    fn invalid_env_seed_is_an_error() {
        let env = |key: &str| (key == ENV_SEED).then(|| "-1".to_string());
        assert!(matches!(
            Args::parse(args(&[]), env),
            Err(ArgsError::InvalidSeed { .. })
        ));
    }
}
