//! # bemify
//!
//! Reads stylesheets, lowers their component, modifier, descendent, utility
//! and state at-rules, and writes the result.
//!
//! ```text
//! bemify [--style suit|bem] [--default-namespace NS] [--config FILE.json]
//!        [--output FILE] [--format text|json] [INPUT]...
//! ```
//!
//! With no inputs, the stylesheet is read from stdin.

use anyhow::{Context, Result};
use bemify::{process, process_inputs, Options, Processed, Style};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Suit,
    Bem,
}

impl From<StyleArg> for Style {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Suit => Style::Suit,
            StyleArg::Bem => Style::Bem,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Transformed CSS
    Text,
    /// `{ "css": ..., "warnings": [...] }`
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "bemify")]
#[command(author, version, about = "Lower SUIT/BEM component at-rules to class selectors", long_about = None)]
struct Cli {
    /// Naming convention (overrides the config file)
    #[arg(short, long, value_enum)]
    style: Option<StyleArg>,

    /// Namespace for components without one (overrides the config file)
    #[arg(short = 'n', long)]
    default_namespace: Option<String>,

    /// JSON options file: style, separators, shortcuts, defaultNamespace
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Input stylesheets, concatenated in order
    inputs: Vec<PathBuf>,
}

/// Options from the config file, then command-line overrides.
fn load_options(cli: &Cli) -> Result<Options> {
    let mut options = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?;
            Options::from_value(&value).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => Options::default(),
    };

    if let Some(style) = cli.style {
        options.style = style.into();
    }
    if let Some(namespace) = &cli.default_namespace {
        options = options.with_default_namespace(namespace.as_str());
    }
    Ok(options)
}

fn run(cli: &Cli) -> Result<Processed> {
    let options = load_options(cli)?;

    if cli.inputs.is_empty() {
        let mut css = String::new();
        std::io::stdin()
            .read_to_string(&mut css)
            .context("reading stdin")?;
        return Ok(process(&css, &options)?);
    }

    let mut sources = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        let css = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        sources.push((path.display().to_string(), css));
    }
    info!(inputs = sources.len(), style = %options.style, "transforming");
    Ok(process_inputs(&sources, &options)?)
}

fn render(processed: &Processed, format: Format) -> Result<String> {
    match format {
        Format::Text => {
            let mut css = processed.css.clone();
            if !css.is_empty() {
                css.push('\n');
            }
            Ok(css)
        }
        Format::Json => Ok(serde_json::to_string_pretty(processed)? + "\n"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let processed = run(&cli)?;

    for warning in &processed.warnings {
        warn!("{}", warning);
    }

    let rendered = render(&processed, cli.format)?;
    match &cli.output {
        Some(path) => std::fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", rendered),
    }
    Ok(())
}
