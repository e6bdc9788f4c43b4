//! tplcache - forum view rendering
//!
//! Views are plain Rust code that assemble markup from a per-request
//! [`Context`]: scalar fields, ordered row blocks (optionally nested) and
//! named partials spliced in by [`Renderer::include`].
//!
//! # Fallback chain
//!
//! Every displayed field resolves as
//!
//! 1. the value in the current scope (root context or row record),
//! 2. the active [`Lexicon`] entry (`L_FOO` looks up `FOO`),
//! 3. the visible placeholder `{ FOO }`.
//!
//! Nothing inside a render pass fails: missing fields degrade along the
//! chain, missing blocks render zero rows, and missing partials leave an
//! HTML comment marker.
//!
//! # Example
//!
//! ```
//! use tplcache::{Context, Engine, LexiconLoader, Record};
//!
//! # fn main() -> eyre::Result<()> {
//! let lexicon = LexiconLoader::embedded_only().load("en")?;
//! let engine = Engine::standard(lexicon);
//!
//! let mut ctx = Context::new();
//! ctx.assign_var("SITENAME", "Example Board");
//! ctx.assign_block_vars("faq_block", Record::new().with("BLOCK_TITLE", "General"));
//! ctx.assign_block_vars("faq_block.faq_row", Record::new().with("FAQ_QUESTION", "Why?"));
//!
//! let html = engine.render("faq_body", &ctx)?;
//! assert!(html.contains("<title>Example Board"));
//! assert!(html.contains("Why?"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod resolve;
pub mod rows;
pub mod value;
pub mod view;
pub mod views;

pub use context::{Context, Record};
pub use engine::{DEFAULT_MAX_INCLUDE_DEPTH, Engine, RenderOptions, Renderer};
pub use error::RenderError;
pub use lexicon::{Lexicon, LexiconLoader};
pub use resolve::{Resolved, Source, placeholder};
pub use rows::{RowCursor, Rows};
pub use value::Value;
pub use view::View;

/// Locale used when neither the CLI nor the config names one
pub const DEFAULT_LOCALE: &str = "en";
