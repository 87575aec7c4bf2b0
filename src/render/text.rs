use std::borrow::Cow;

use crate::foundation::core::Rgba8;
use crate::render::fonts::FontSource;

const FALLBACK_STACK: &str = "sans-serif";

/// Stateful helper for building Parley layouts of single-line key labels.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    stack: String,
}

impl TextLayoutEngine {
    /// Register the probed font (if any) and remember its family for every later layout.
    ///
    /// Bytes that register no family (corrupt or unsupported file) degrade to the system
    /// fallback stack.
    pub(crate) fn new(source: &FontSource) -> Self {
        let mut font_ctx = parley::FontContext::default();
        let stack = match source {
            FontSource::File { path, bytes } => {
                let families = font_ctx
                    .collection
                    .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
                let name = match families.first() {
                    Some((id, _)) => font_ctx.collection.family_name(*id).map(str::to_string),
                    None => None,
                };
                match name {
                    Some(name) => name,
                    None => {
                        tracing::warn!(path = %path.display(), "font file registered no family");
                        FALLBACK_STACK.to_string()
                    }
                }
            }
            FontSource::SystemDefault => FALLBACK_STACK.to_string(),
        };

        Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            stack,
        }
    }

    /// Family stack used for labels.
    pub(crate) fn stack(&self) -> &str {
        &self.stack
    }

    /// Shape `text` on one line at `size_px`.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: Rgba8,
    ) -> parley::Layout<Rgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.stack.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}
