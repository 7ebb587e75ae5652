use std::cell::Cell;

use egui::{Color32, Context, FontId};
use textbox::TextMeasurer;

/// `egui`-backed adapter for the widget's font metrics.
///
/// Widths come from egui's own text layout so caret positions match what
/// gets painted. The font is fixed at construction; the demo renders
/// everything with one proportional face.
pub struct EguiTextMeasurer {
    ctx: Context,
    font_px: f32,
    space_width: Cell<Option<f32>>,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &Context, font_px: f32) -> Self {
        Self {
            ctx: ctx.clone(),
            font_px,
            space_width: Cell::new(None),
        }
    }

    pub fn font_id(&self) -> FontId {
        FontId::proportional(self.font_px)
    }

    /// Advance width of a single space, cached.
    ///
    /// egui galleys give whitespace no glyph quads, so the width is taken
    /// from NBSP, with a difference measurement and a fraction-of-font-size
    /// fallback behind it.
    fn space_width(&self) -> f32 {
        if let Some(w) = self.space_width.get() {
            return w;
        }

        // `Color32` does not affect text metrics.
        let nbsp = "\u{00A0}";
        let w_nbsp = self.galley_width(nbsp);

        let w = if w_nbsp.is_finite() && w_nbsp > 0.0 {
            w_nbsp
        } else {
            // Difference method (chars with low kerning risk), then an
            // absolute fallback.
            let w = (self.galley_width(&format!("x{nbsp}x")) - self.galley_width("xx")).max(0.0);
            if w.is_finite() && w > 0.0 {
                w
            } else {
                (self.font_px * 0.33).max(1.0)
            }
        };

        self.space_width.set(Some(w));
        w
    }

    fn galley_width(&self, text: &str) -> f32 {
        let font_id = self.font_id();
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font_id, Color32::WHITE)
                .rect
                .width()
        })
    }
}

impl TextMeasurer for EguiTextMeasurer {
    fn width(&self, text: &str) -> f32 {
        // Trailing spaces carry no glyph quads; add them in separately so
        // the caret lands right after typing a space.
        let trimmed = text.trim_end_matches(' ');
        let trailing = (text.len() - trimmed.len()) as f32;

        let base = if trimmed.is_empty() {
            0.0
        } else {
            self.galley_width(trimmed)
        };

        base + trailing * self.space_width()
    }

    fn line_height(&self) -> f32 {
        self.font_px * 1.2
    }
}
