use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use vimark::{EngineConfig, InputMethod, InputSession};

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Telex,
    Vni,
    Viqr,
    Auto,
}

impl From<Method> for InputMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Telex => InputMethod::Telex,
            Method::Vni => InputMethod::Vni,
            Method::Viqr => InputMethod::Viqr,
            Method::Auto => InputMethod::Auto,
        }
    }
}

/// Types each stdin line through the engine and prints what a text field
/// would end up holding.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Keyboard convention; overrides the config file.
    #[arg(long, value_enum)]
    method: Option<Method>,

    /// Classic tone position (hòa, khỏe, thùy).
    #[arg(long)]
    classic: bool,

    /// Apply marks to the character before the caret only.
    #[arg(long)]
    no_smart_mark: bool,

    /// TOML file with engine settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EngineConfig::from_toml_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(method) = args.method {
        config.input_method = method.into();
    }
    if args.classic {
        config.classic_position = true;
    }
    if args.no_smart_mark {
        config.smart_mark = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;
    tracing::debug!(?config, "engine configured");

    let mut session = InputSession::with_config(config);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    for line in stdin.lines() {
        let line = line.context("reading stdin")?;
        let mut text = String::with_capacity(line.len());
        for key in line.chars() {
            if key.is_whitespace() {
                text.push_str(session.feed(key));
            } else {
                session.feed(key);
            }
        }
        text.push_str(session.word());
        session.clear();
        writeln!(stdout, "{text}")?;
    }
    stdout.flush()?;
    Ok(())
}
