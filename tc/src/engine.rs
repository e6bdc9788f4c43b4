//! Engine - view registry, active language table and render entry points

use std::collections::HashMap;
use std::io::Write;

use tracing::{debug, info, warn};

use crate::context::{Context, Record};
use crate::error::RenderError;
use crate::lexicon::Lexicon;
use crate::resolve::{Resolved, resolve};
use crate::rows::Rows;
use crate::view::View;
use crate::views;

/// Default nesting limit for `include`
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 16;

/// Knobs for a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Includes nested deeper than this render a marker instead
    pub max_include_depth: usize,
    /// Emit an HTML comment where a partial could not be spliced in
    pub mark_missing_partials: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            mark_missing_partials: true,
        }
    }
}

/// Holds the registered views and the language table they render with
pub struct Engine {
    views: HashMap<&'static str, Box<dyn View>>,
    lexicon: Lexicon,
    options: RenderOptions,
}

impl Engine {
    /// Create an engine with no views
    pub fn new(lexicon: Lexicon) -> Self {
        debug!(entries = lexicon.len(), "Engine::new: called");
        Self {
            views: HashMap::new(),
            lexicon,
            options: RenderOptions::default(),
        }
    }

    /// Create an engine with every built-in view registered
    pub fn standard(lexicon: Lexicon) -> Self {
        let mut engine = Self::new(lexicon);
        for view in views::builtin() {
            engine.register(view);
        }
        debug!(views = engine.views.len(), "Engine::standard: registered built-in views");
        engine
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Add a view, returning the one it replaced
    pub fn register(&mut self, view: Box<dyn View>) -> Option<Box<dyn View>> {
        self.views.insert(view.name(), view)
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Registered view names, sorted
    pub fn view_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.views.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Render a top-level view
    ///
    /// An unknown view name is the only failure.
    pub fn render(&self, name: &str, context: &Context) -> Result<String, RenderError> {
        let view = self.views.get(name).ok_or_else(|| RenderError::UnknownView {
            name: name.to_string(),
        })?;
        info!("Rendering view '{}'", name);

        let mut r = Renderer::new(self, context);
        r.depth = 1;
        view.render(&mut r);
        debug!(%name, bytes = r.out.len(), "Engine::render: done");
        Ok(r.finish())
    }

    /// Render a top-level view straight into a sink
    pub fn render_to<W: Write>(&self, name: &str, context: &Context, mut sink: W) -> Result<(), RenderError> {
        let html = self.render(name, context)?;
        sink.write_all(html.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Render a partial by name, never failing
    ///
    /// Unknown names produce the missing-partial marker (or nothing).
    pub fn render_partial(&self, name: &str, context: &Context) -> String {
        debug!(%name, "Engine::render_partial: called");
        let mut r = Renderer::new(self, context);
        r.include(name);
        r.finish()
    }

    /// Resolve a root-level key through the fallback chain
    pub fn resolve<'a>(&'a self, key: &str, context: &'a Context) -> Resolved<'a> {
        resolve(context.root(), key, &self.lexicon)
    }
}

/// Output buffer and scope for a single render pass
pub struct Renderer<'a> {
    engine: &'a Engine,
    context: &'a Context,
    out: String,
    depth: usize,
}

impl<'a> Renderer<'a> {
    fn new(engine: &'a Engine, context: &'a Context) -> Self {
        Self {
            engine,
            context,
            out: String::new(),
            depth: 0,
        }
    }

    pub fn context(&self) -> &'a Context {
        self.context
    }

    /// Append fixed markup
    pub fn write(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    /// Append a root-level field through the fallback chain
    pub fn var(&mut self, key: &str) {
        let resolved = resolve(self.context.root(), key, &self.engine.lexicon);
        self.out.push_str(resolved.as_str());
    }

    /// Append a row field through the fallback chain
    pub fn field(&mut self, row: &Record, key: &str) {
        let resolved = resolve(row, key, &self.engine.lexicon);
        self.out.push_str(resolved.as_str());
    }

    /// Truthiness of a root-level field
    pub fn flag(&self, key: &str) -> bool {
        self.context.flag(key)
    }

    /// Rows of a top-level block
    pub fn rows(&self, block: &str) -> Rows<'a> {
        Rows::new(self.context.rows(block))
    }

    /// Splice another view's output in place
    pub fn include(&mut self, name: &str) {
        let engine = self.engine;
        if self.depth >= engine.options.max_include_depth {
            warn!(%name, depth = self.depth, "include: depth limit reached, skipping partial");
            self.marker("include depth exceeded", name);
            return;
        }

        match engine.views.get(name) {
            Some(view) => {
                debug!(%name, depth = self.depth, "include: splicing partial");
                self.depth += 1;
                view.render(self);
                self.depth -= 1;
            }
            None => {
                warn!(%name, "include: partial not registered");
                self.marker("missing partial", name);
            }
        }
    }

    fn marker(&mut self, what: &str, name: &str) {
        if self.engine.options.mark_missing_partials {
            self.out.push_str(&format!("<!-- {}: {} -->", what, name));
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting;

    impl View for Greeting {
        fn name(&self) -> &'static str {
            "greeting"
        }

        fn render(&self, r: &mut Renderer<'_>) {
            r.write("<p>");
            r.var("L_HELLO");
            r.write(", ");
            r.var("USERNAME");
            r.write("</p>");
        }
    }

    struct Page;

    impl View for Page {
        fn name(&self) -> &'static str {
            "page"
        }

        fn render(&self, r: &mut Renderer<'_>) {
            r.include("greeting");
            r.write("<ul>");
            for (cursor, row) in r.rows("item") {
                r.write("<li class=\"");
                r.write(cursor.row_class());
                r.write("\">");
                r.field(row, "NAME");
                r.write("</li>");
            }
            r.write("</ul>");
            r.include("nowhere");
        }
    }

    struct Loop;

    impl View for Loop {
        fn name(&self) -> &'static str {
            "loop"
        }

        fn render(&self, r: &mut Renderer<'_>) {
            r.write("+");
            r.include("loop");
        }
    }

    fn engine() -> Engine {
        let lexicon: Lexicon = [("HELLO", "Hello")].into_iter().collect();
        let mut engine = Engine::new(lexicon);
        engine.register(Box::new(Greeting));
        engine.register(Box::new(Page));
        engine.register(Box::new(Loop));
        engine
    }

    #[test]
    fn test_render_fallback_chain() {
        let mut ctx = Context::new();
        ctx.assign_var("USERNAME", "alice");
        let html = engine().render("greeting", &ctx).unwrap();
        assert_eq!(html, "<p>Hello, alice</p>");
    }

    #[test]
    fn test_render_placeholder() {
        let html = engine().render("greeting", &Context::new()).unwrap();
        assert_eq!(html, "<p>Hello, { USERNAME }</p>");
    }

    #[test]
    fn test_unknown_view_is_error() {
        let result = engine().render("nope", &Context::new());
        assert!(matches!(result, Err(RenderError::UnknownView { .. })));
    }

    #[test]
    fn test_render_partial_unknown_marks() {
        let html = engine().render_partial("nope", &Context::new());
        assert_eq!(html, "<!-- missing partial: nope -->");
    }

    #[test]
    fn test_render_partial_unmarked() {
        let engine = engine().with_options(RenderOptions {
            mark_missing_partials: false,
            ..Default::default()
        });
        assert_eq!(engine.render_partial("nope", &Context::new()), "");
    }

    #[test]
    fn test_include_and_rows() {
        let mut ctx = Context::new();
        ctx.assign_var("USERNAME", "bob");
        ctx.assign_block_vars("item", Record::new().with("NAME", "a"));
        ctx.assign_block_vars("item", Record::new().with("NAME", "b"));
        let html = engine().render("page", &ctx).unwrap();
        assert_eq!(
            html,
            "<p>Hello, bob</p><ul><li class=\"row1\">a</li><li class=\"row2\">b</li></ul>\
             <!-- missing partial: nowhere -->"
        );
    }

    #[test]
    fn test_recursive_include_is_bounded() {
        let engine = engine().with_options(RenderOptions {
            max_include_depth: 4,
            mark_missing_partials: true,
        });
        let html = engine.render("loop", &Context::new()).unwrap();
        assert_eq!(html, "++++<!-- include depth exceeded: loop -->");
    }

    #[test]
    fn test_render_to_sink() {
        let mut sink = Vec::new();
        engine().render_to("greeting", &Context::new(), &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "<p>Hello, { USERNAME }</p>");
    }

    #[test]
    fn test_view_names_sorted() {
        assert_eq!(engine().view_names(), vec!["greeting", "loop", "page"]);
    }
}
