use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use quiz_core::model::{QuestionBank, QuizSettings, SettingsError};
use storage::{BankOrigin, JsonFileBank, load_with_fallback};
use ui::{App, UiApp, build_app_context};

const DEFAULT_BANK_PATH: &str = "questions.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBankPath { raw: String },
    InvalidAutoAdvance { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw:?}"),
            ArgsError::InvalidAutoAdvance { raw } => write!(
                f,
                "invalid auto-advance seconds (--auto-advance-secs / QUIZ_AUTO_ADVANCE_SECS): {raw}"
            ),
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

struct DesktopApp {
    bank: QuestionBank,
    settings: QuizSettings,
    bank_label: String,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> QuestionBank {
        self.bank.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn bank_label(&self) -> String {
        self.bank_label.clone()
    }
}

#[derive(Debug)]
struct Args {
    bank_path: PathBuf,
    auto_advance_secs: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path>] [--auto-advance-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank {DEFAULT_BANK_PATH}  (the built-in sample bank is used if it is missing)");
    eprintln!("  --auto-advance-secs 3    (1..=60)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK_PATH, QUIZ_AUTO_ADVANCE_SECS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut bank_path = env("QUIZ_BANK_PATH")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_BANK_PATH), PathBuf::from);
        let mut auto_advance_secs = match env("QUIZ_AUTO_ADVANCE_SECS") {
            Some(value) => parse_auto_advance(value)?,
            None => QuizSettings::default().auto_advance_secs(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBankPath { raw: value });
                    }
                    bank_path = PathBuf::from(value);
                }
                "--auto-advance-secs" => {
                    let value = require_value(args, "--auto-advance-secs")?;
                    auto_advance_secs = parse_auto_advance(value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            bank_path,
            auto_advance_secs,
        })
    }

    fn settings(&self) -> Result<QuizSettings, SettingsError> {
        QuizSettings::new(self.auto_advance_secs)
    }
}

fn parse_auto_advance(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidAutoAdvance { raw })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let settings = parsed.settings()?;

    // Malformed bank files abort here, before any UI exists.
    let loaded = load_with_fallback(&JsonFileBank::new(parsed.bank_path.clone()))?;
    let bank_label = match &loaded.origin {
        BankOrigin::Primary(label) => label.clone(),
        BankOrigin::Fallback => "sample bank".to_string(),
    };
    info!(
        "loaded {} questions from {bank_label}; auto-advance after {}s",
        loaded.bank.len(),
        settings.auto_advance_secs()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank: loaded.bank,
        settings,
        bank_label,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz practice")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        parse_env(args, &[])
    }

    fn parse_env(args: &[&str], vars: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse_with_env(&mut iter, |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        })
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&["--bank", "bank.json", "--auto-advance-secs", "5"]).unwrap();
        assert_eq!(args.bank_path, PathBuf::from("bank.json"));
        assert_eq!(args.settings().unwrap().auto_advance_secs(), 5);
    }

    #[test]
    fn missing_value_is_reported() {
        let err = parse(&["--bank"]).unwrap_err();
        assert_eq!(err.to_string(), "--bank requires a value");
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(parse(&["--deck"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn out_of_range_delay_fails_validation() {
        let args = parse(&["--auto-advance-secs", "0"]).unwrap();
        assert!(args.settings().is_err());
        assert!(matches!(
            parse(&["--auto-advance-secs", "soon"]),
            Err(ArgsError::InvalidAutoAdvance { .. })
        ));
    }

    #[test]
    fn unparsable_env_delay_is_reported_like_the_flag() {
        let err = parse_env(&[], &[("QUIZ_AUTO_ADVANCE_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidAutoAdvance { ref raw } if raw == "soon"));

        let args = parse_env(&[], &[("QUIZ_AUTO_ADVANCE_SECS", " 7 ")]).unwrap();
        assert_eq!(args.auto_advance_secs, 7);
    }

    #[test]
    fn flag_overrides_env() {
        let args = parse_env(
            &["--auto-advance-secs", "4"],
            &[("QUIZ_AUTO_ADVANCE_SECS", "9"), ("QUIZ_BANK_PATH", "env.json")],
        )
        .unwrap();
        assert_eq!(args.auto_advance_secs, 4);
        assert_eq!(args.bank_path, PathBuf::from("env.json"));
    }
}
