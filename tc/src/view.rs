//! View trait definition

use crate::engine::Renderer;

/// A named page or partial that writes markup into a [`Renderer`]
pub trait View: Send + Sync {
    /// Registry name (also the name used by `include`)
    fn name(&self) -> &'static str;

    /// Emit this view's markup
    ///
    /// Rendering never fails; missing data degrades to placeholders and
    /// empty row blocks.
    fn render(&self, r: &mut Renderer<'_>);
}
