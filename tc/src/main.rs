//! tplc - render forum views from the command line

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Result, WrapErr};
use tracing::{debug, info};

use tplcache::cli::{Cli, Command};
use tplcache::config::Config;
use tplcache::{Context, Engine, LexiconLoader, Source};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") | None => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
            tracing::Level::WARN
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {}", e))?;
    Ok(())
}

fn build_engine(config: &Config, locale: Option<&str>) -> Result<Engine> {
    let locale = locale.unwrap_or(&config.locale);
    debug!(%locale, lang_dir = ?config.lang_dir, "build_engine: called");

    let cwd = std::env::current_dir().wrap_err("Failed to read working directory")?;
    let loader = match &config.lang_dir {
        Some(dir) => LexiconLoader::with_dirs(Some(cwd.join(".tplcache/lang")), Some(cwd.join(dir))),
        None => LexiconLoader::new(&cwd),
    };
    let lexicon = loader.load(locale)?;
    Ok(Engine::standard(lexicon).with_options(config.render_options()))
}

fn load_context(path: Option<&PathBuf>) -> Result<Context> {
    match path {
        Some(path) => Context::load(path),
        None => Ok(Context::new()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log level first, so problems in the full config load get reported
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref())?;

    let config = Config::load(cli.config.as_ref()).wrap_err("Failed to load configuration")?;

    info!("tplc starting");

    match cli.command {
        Command::Render {
            view,
            context,
            locale,
            output,
        } => {
            let engine = build_engine(&config, locale.as_deref())?;
            let ctx = load_context(context.as_ref())?;
            match output {
                Some(path) => {
                    let html = engine.render(&view, &ctx)?;
                    fs::write(&path, html).wrap_err_with(|| format!("Failed to write output {}", path.display()))?;
                    eprintln!("{} Rendered {} to {}", "✓".green(), view.cyan(), path.display());
                }
                None => {
                    engine.render_to(&view, &ctx, std::io::stdout().lock())?;
                }
            }
        }
        Command::List => {
            let engine = build_engine(&config, None)?;
            for name in engine.view_names() {
                println!("{}", name);
            }
        }
        Command::Lookup { key, context, locale } => {
            let engine = build_engine(&config, locale.as_deref())?;
            let ctx = load_context(context.as_ref())?;
            let resolved = engine.resolve(&key, &ctx);
            let source = match resolved.source {
                Source::Context => resolved.source.to_string().green(),
                Source::Lexicon => resolved.source.to_string().cyan(),
                Source::Placeholder => resolved.source.to_string().yellow(),
            };
            println!("{} [{}] {}", key.bold(), source, resolved);
        }
    }

    Ok(())
}
