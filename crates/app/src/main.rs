use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuestionSet;
use services::{AppServices, Clock, DEFAULT_AUTO_ADVANCE, QuizLoopService, QuizSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    EmptyPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::EmptyPath => write!(f, "--data requires a non-empty path"),
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

fn parse_number(flag: &'static str, raw: &str) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

struct DesktopApp {
    questions: Arc<QuestionSet>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn question_set(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(QuizSettingsArgs),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct QuizSettingsArgs {
    data_path: Option<PathBuf>,
    auto_advance_ms: u64,
    seed: Option<u64>,
}

impl QuizSettingsArgs {
    fn into_settings(self) -> QuizSettings {
        QuizSettings {
            data_path: self.data_path,
            auto_advance: Duration::from_millis(self.auto_advance_ms),
            seed: self.seed,
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--data <path>] [--auto-advance-ms <ms>] [--seed <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data             bundled question set");
    eprintln!("  --auto-advance-ms  {}", DEFAULT_AUTO_ADVANCE.as_millis());
    eprintln!("  --seed             random");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DATA_PATH, QUIZ_AUTO_ADVANCE_MS, QUIZ_SEED, RUST_LOG");
}

/// Flags win over environment variables.
fn parse_args(
    args: &mut impl Iterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Parsed, ArgsError> {
    let mut data_path = env("QUIZ_DATA_PATH")
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from);
    let mut auto_advance_ms = match env("QUIZ_AUTO_ADVANCE_MS") {
        Some(raw) => parse_number("QUIZ_AUTO_ADVANCE_MS", &raw)?,
        None => u64::try_from(DEFAULT_AUTO_ADVANCE.as_millis()).unwrap_or(500),
    };
    let mut seed = env("QUIZ_SEED")
        .map(|raw| parse_number("QUIZ_SEED", &raw))
        .transpose()?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = require_value(args, "--data")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::EmptyPath);
                }
                data_path = Some(PathBuf::from(value));
            }
            "--auto-advance-ms" => {
                let value = require_value(args, "--auto-advance-ms")?;
                auto_advance_ms = parse_number("--auto-advance-ms", &value)?;
            }
            "--seed" => {
                let value = require_value(args, "--seed")?;
                seed = Some(parse_number("--seed", &value)?);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Parsed::Run(QuizSettingsArgs {
        data_path,
        auto_advance_ms,
        seed,
    }))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let parsed = parse_args(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let settings = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args.into_settings(),
    };

    // Document-level failures stop here; per-question problems only degrade that question.
    let services = AppServices::load(&settings, Clock::default_clock())?;
    let questions = services.questions();
    info!(
        source = %services.question_bank().source(),
        auto_advance_ms = settings.auto_advance.as_millis(),
        seed = ?settings.seed,
        "launching quiz"
    );

    let title = questions.title().to_string();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questions,
        quiz_loop: services.quiz_loop(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Parsed, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        parse_args(&mut iter, |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_use_bundled_questions() {
        assert_eq!(
            parse(&[], &[]),
            Ok(Parsed::Run(QuizSettingsArgs {
                data_path: None,
                auto_advance_ms: 500,
                seed: None,
            }))
        );
    }

    #[test]
    fn flags_override_environment() {
        let parsed = parse(
            &["--data", "unit3.json", "--auto-advance-ms", "250", "--seed", "9"],
            &[("QUIZ_DATA_PATH", "env.json"), ("QUIZ_SEED", "1")],
        );
        assert_eq!(
            parsed,
            Ok(Parsed::Run(QuizSettingsArgs {
                data_path: Some(PathBuf::from("unit3.json")),
                auto_advance_ms: 250,
                seed: Some(9),
            }))
        );
    }

    #[test]
    fn environment_fills_missing_flags() {
        let parsed = parse(&[], &[("QUIZ_AUTO_ADVANCE_MS", "800"), ("QUIZ_SEED", "3")]);
        assert_eq!(
            parsed,
            Ok(Parsed::Run(QuizSettingsArgs {
                data_path: None,
                auto_advance_ms: 800,
                seed: Some(3),
            }))
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse(&["--seed"], &[]),
            Err(ArgsError::MissingValue { flag: "--seed" })
        );
        assert_eq!(
            parse(&["--auto-advance-ms", "soon"], &[]),
            Err(ArgsError::InvalidNumber {
                flag: "--auto-advance-ms",
                raw: "soon".into(),
            })
        );
        assert_eq!(parse(&["--data", " "], &[]), Err(ArgsError::EmptyPath));
        assert_eq!(parse(&["--fast"], &[]), Err(ArgsError::UnknownArg("--fast".into())));
        assert_eq!(parse(&["-h"], &[]), Ok(Parsed::Help));
    }
}
