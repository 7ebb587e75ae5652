//! The text box widget itself.
//!
//! Wraps an [`Editor`] with everything presentation-side: blink phase,
//! widget area, colors and the pixel geometry derived from a
//! [`TextMeasurer`]. The editing rules all live in `edit_core`; this
//! module only decides where things go on screen.

use draw2d::{Color, Primitives, Rect, Surface, Vec2};
use edit_core::{Editor, InputEvent, SelectionRange, Signal};

use crate::blink::Blink;
use crate::measure::TextMeasurer;

/// Colors used when painting the widget.
///
/// The selection tint is drawn over the glyphs, so it should carry alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextBoxStyle {
    pub text: Color,
    pub caret: Color,
    pub selection: Color,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            text: Color::WHITE,
            caret: Color::LIGHT_GRAY,
            selection: Color::DARK_GREEN.with_alpha(102),
        }
    }
}

/// Snapshot of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderState {
    pub text: String,
    /// Caret position as a character index in `[0, text length]`.
    pub cursor: usize,
    /// Visible selection; collapsed selections are reported as `None`.
    pub selection: Option<SelectionRange>,
    /// Current blink phase. Hosts drawing their own caret still have to
    /// gate on the widget being active.
    pub caret_visible: bool,
}

/// Pixel geometry for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBoxLayout {
    /// Top-left corner of the text run.
    pub text_pos: Vec2,
    /// One-pixel-wide caret rectangle, a full line high.
    pub caret: Rect,
    /// Rectangle covering the visible selection, if there is one.
    pub selection: Option<Rect>,
}

/// Single-line text input widget.
pub struct TextBox {
    editor: Editor,
    area: Rect,
    style: TextBoxStyle,
    blink: Blink,
    prims: Primitives,
}

impl TextBox {
    pub fn new(
        area: Rect,
        max_chars: usize,
        text: &str,
        style: TextBoxStyle,
        ticks_per_toggle: u32,
    ) -> Self {
        Self {
            editor: Editor::new(text, max_chars),
            area,
            style,
            blink: Blink::new(ticks_per_toggle),
            prims: Primitives::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn style(&self) -> TextBoxStyle {
        self.style
    }

    pub fn style_mut(&mut self) -> &mut TextBoxStyle {
        &mut self.style
    }

    pub fn active(&self) -> bool {
        self.editor.active()
    }

    /// Focus or unfocus the widget. Gaining focus restarts the blink so
    /// the caret is visible right away.
    pub fn set_active(&mut self, active: bool) {
        if active && !self.editor.active() {
            self.blink.reset();
        }
        self.editor.set_active(active);
    }

    /// Forward one decoded event to the editor.
    pub fn apply(&mut self, event: InputEvent) -> Option<Signal> {
        self.editor.apply(event)
    }

    /// Advance the blink phase. Call once per host tick.
    pub fn tick(&mut self) {
        self.blink.tick();
    }

    /// Snapshot the state a renderer needs.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            text: self.editor.text(),
            cursor: self.editor.cursor(),
            selection: self.editor.selection().filter(|sel| !sel.is_empty()),
            caret_visible: self.blink.visible(),
        }
    }

    /// Compute this frame's pixel geometry from the host's font metrics.
    pub fn layout(&self, measurer: &dyn TextMeasurer) -> TextBoxLayout {
        let chars = self.editor.buffer().chars();
        let line_h = measurer.line_height();
        let origin = self.area.min();

        let caret_x = origin.x + prefix_width(measurer, chars, self.editor.cursor());
        let caret = Rect::new(caret_x, origin.y, 1.0, line_h);

        let selection = self
            .editor
            .selection()
            .filter(|sel| !sel.is_empty())
            .map(|sel| {
                let x0 = prefix_width(measurer, chars, sel.start);
                let x1 = prefix_width(measurer, chars, sel.end);
                Rect::new(origin.x + x0, origin.y, x1 - x0, line_h)
            });

        TextBoxLayout {
            text_pos: origin,
            caret,
            selection,
        }
    }

    /// Paint the widget: text always, selection tint and blinking caret
    /// only while active.
    pub fn draw(&self, surface: &mut dyn Surface, measurer: &dyn TextMeasurer) {
        let layout = self.layout(measurer);

        surface.text(layout.text_pos, &self.editor.text(), self.style.text);

        if !self.editor.active() {
            return;
        }
        if let Some(rect) = layout.selection {
            self.prims.fill_rect(surface, rect, self.style.selection);
        }
        if self.blink.visible() {
            self.prims.fill_rect(surface, layout.caret, self.style.caret);
        }
    }
}

// --- Internal helper functions ---

fn prefix_width(measurer: &dyn TextMeasurer, chars: &[char], end: usize) -> f32 {
    let prefix: String = chars[..end].iter().collect();
    measurer.width(&prefix)
}
