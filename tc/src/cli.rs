//! CLI argument parsing for tplc

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tplc")]
#[command(author, version, about = "Render forum views from a context file", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a view to stdout or a file
    Render {
        /// View name (see `tplc list`)
        #[arg(required = true)]
        view: String,

        /// Context file (.yml, .yaml or .json)
        #[arg(short = 'x', long)]
        context: Option<PathBuf>,

        /// Language to use for label fallback
        #[arg(long)]
        locale: Option<String>,

        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registered views
    List,

    /// Show how a single key resolves
    Lookup {
        /// Field key, e.g. SITENAME or L_FAQ
        #[arg(required = true)]
        key: String,

        /// Context file (.yml, .yaml or .json)
        #[arg(short = 'x', long)]
        context: Option<PathBuf>,

        /// Language to use for label fallback
        #[arg(long)]
        locale: Option<String>,
    },
}
