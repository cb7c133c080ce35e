use std::fmt;
use std::sync::Arc;

use buddy_core::Catalog;
use buddy_core::model::{SettingsError, SimulationSettings, SimulationSettingsDraft};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::Clock;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "services=info,ui=info,app=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    Settings(SettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::Settings(err) => Some(err),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

/// Environment fallback; an unparsable value is reported against its variable name.
fn env_number<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ArgsError> {
    env(var).map(|raw| parse_number(var, raw)).transpose()
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    settings: SimulationSettings,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn settings(&self) -> SimulationSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Debug)]
struct Args {
    settings: SimulationSettings,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--scan-delay-ms <ms>] [--reply-delay-ms <ms>]");
    eprintln!("                      [--celebration-ms <ms>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --scan-delay-ms 2000");
    eprintln!("  --reply-delay-ms 1500");
    eprintln!("  --celebration-ms 3000");
    eprintln!("  --seed (random)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BUDDY_SCAN_DELAY_MS, BUDDY_REPLY_DELAY_MS, BUDDY_CELEBRATION_MS, BUDDY_SEED");
    eprintln!("  RUST_LOG (default: {DEFAULT_LOG_FILTER})");
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    /// Flags win over the `BUDDY_*` variables looked up through `env`.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut draft = SimulationSettingsDraft {
            scan_delay_ms: env_number(&env, "BUDDY_SCAN_DELAY_MS")?,
            reply_delay_ms: env_number(&env, "BUDDY_REPLY_DELAY_MS")?,
            celebration_ms: env_number(&env, "BUDDY_CELEBRATION_MS")?,
            ..SimulationSettingsDraft::default()
        };
        let mut seed = env_number::<u64>(&env, "BUDDY_SEED")?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scan-delay-ms" => {
                    let value = require_value(args, "--scan-delay-ms")?;
                    draft.scan_delay_ms = Some(parse_number("--scan-delay-ms", value)?);
                }
                "--reply-delay-ms" => {
                    let value = require_value(args, "--reply-delay-ms")?;
                    draft.reply_delay_ms = Some(parse_number("--reply-delay-ms", value)?);
                }
                "--celebration-ms" => {
                    let value = require_value(args, "--celebration-ms")?;
                    draft.celebration_ms = Some(parse_number("--celebration-ms", value)?);
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    seed = Some(parse_number("--seed", value)?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let settings = draft.validate().map_err(ArgsError::Settings)?;
        Ok(Parsed::Run(Self { settings, seed }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |var| std::env::var(var).ok()) {
        Ok(Parsed::Run(parsed)) => parsed,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing();

    let catalog = Arc::new(Catalog::builtin()?);
    tracing::info!(
        quiz_items = catalog.quiz().len(),
        objects = catalog.objects().len(),
        badges = catalog.badges().len(),
        seed = ?parsed.seed,
        settings = ?parsed.settings,
        "starting Learning Buddy"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        settings: parsed.settings,
        seed: parsed.seed,
    });
    let context = build_app_context(&app);

    // Dioxus/tao may open an always-on-top window on some macOS setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Learning Buddy")
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
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with_env(args: &[&str], vars: &[(&str, &str)]) -> Result<Parsed, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |var| {
            vars.iter()
                .find(|(name, _)| *name == var)
                .map(|(_, value)| (*value).to_string())
        })
    }

    fn parse(args: &[&str]) -> Result<Parsed, ArgsError> {
        parse_with_env(args, &[])
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let Ok(Parsed::Run(args)) = parse(&[]) else {
            panic!("expected run args");
        };
        assert_eq!(args.settings, SimulationSettings::default());
        assert_eq!(args.seed, None);
    }

    #[test]
    fn env_fills_in_and_flags_win() {
        let vars = [("BUDDY_SCAN_DELAY_MS", "800"), ("BUDDY_SEED", "9")];
        let Ok(Parsed::Run(args)) = parse_with_env(&["--seed", "3"], &vars) else {
            panic!("expected run args");
        };
        assert_eq!(args.settings.scan_delay().as_millis(), 800);
        assert_eq!(args.seed, Some(3));

        assert!(matches!(
            parse_with_env(&[], &[("BUDDY_REPLY_DELAY_MS", "later")]),
            Err(ArgsError::InvalidNumber { flag: "BUDDY_REPLY_DELAY_MS", .. })
        ));
    }

    #[test]
    fn flags_override_defaults() {
        let Ok(Parsed::Run(args)) = parse(&[
            "--scan-delay-ms",
            "500",
            "--reply-delay-ms",
            "250",
            "--seed",
            "42",
        ]) else {
            panic!("expected run args");
        };
        assert_eq!(args.settings.scan_delay().as_millis(), 500);
        assert_eq!(args.settings.reply_delay().as_millis(), 250);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn help_flag_short_circuits() {
        assert!(matches!(parse(&["-h", "--bogus"]), Ok(Parsed::Help)));
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            parse(&["--seed"]),
            Err(ArgsError::MissingValue { flag: "--seed" })
        ));
        assert!(matches!(
            parse(&["--scan-delay-ms", "soon"]),
            Err(ArgsError::InvalidNumber { flag: "--scan-delay-ms", .. })
        ));
        assert!(matches!(
            parse(&["--celebration-ms", "0"]),
            Err(ArgsError::Settings(_))
        ));
        assert!(matches!(parse(&["--db"]), Err(ArgsError::UnknownArg(_))));
    }
}
