//! The demo scene: one text box, its outline, and a strip showing off the
//! primitive renderer.

use std::f32::consts::{FRAC_PI_2, PI};
use std::time::Instant;

use draw2d::{Color, Primitives, Rect, Vec2};
use edit_core::{InputEvent, Signal};
use egui::{CentralPanel, Color32, Context, Frame};
use textbox::{Keyboard, TextBox, TextBoxStyle};
use winit::event::{ElementState, KeyEvent, Modifiers as WinitModifiers};
use winit::keyboard::PhysicalKey;

use crate::input::{ModifierState, decode_press};
use crate::measure::EguiTextMeasurer;
use crate::surface::EguiSurface;

const FONT_PX: f32 = 18.0;
const MAX_CHARS: usize = 200;
const BLINK_TICKS: u32 = 30;
/// Red outline drawn around the widget, slightly wider than its area.
const OUTLINE: Rect = Rect::new(50.0, 50.0, 400.0, 200.0);
const BACKDROP: Color32 = Color32::from_rgb(47, 79, 79);

pub struct DemoApp {
    textbox: TextBox,
    keyboard: Keyboard<PhysicalKey>,
    mods: ModifierState,
    pending: Vec<InputEvent>,
    prims: Primitives,
}

impl DemoApp {
    pub fn new() -> Self {
        let margin = 3.0;
        let area = Rect::new(
            OUTLINE.x + margin,
            OUTLINE.y,
            OUTLINE.width - margin,
            OUTLINE.height,
        );
        let mut textbox = TextBox::new(
            area,
            MAX_CHARS,
            "This is a test. Move the cursor, select, delete, write...",
            TextBoxStyle::default(),
            BLINK_TICKS,
        );
        textbox.set_active(true);

        Self {
            textbox,
            keyboard: Keyboard::default(),
            mods: ModifierState::default(),
            pending: Vec::new(),
            prims: Primitives::new(),
        }
    }

    pub fn on_modifiers_changed(&mut self, state: &WinitModifiers) {
        self.mods.update(state);
    }

    /// Feed a winit key event through the repeat gate.
    ///
    /// OS autorepeat is dropped on the floor; the gate synthesizes repeats
    /// on its own schedule instead.
    pub fn on_key_event(&mut self, event: &KeyEvent) {
        match event.state {
            ElementState::Pressed => {
                if event.repeat {
                    return;
                }
                let text = event.text.as_ref().map(|t| t.as_str());
                let Some(decoded) = decode_press(&event.logical_key, text, self.mods.current())
                else {
                    return;
                };
                log::trace!(target: "app.input", "press {decoded:?}");
                self.keyboard
                    .press(event.physical_key, decoded, Instant::now(), &mut self.pending);
            }
            ElementState::Released => self.keyboard.release(event.physical_key),
        }
    }

    /// One ~60 Hz tick: synthesize repeats, apply pending events, advance
    /// the caret blink.
    pub fn tick(&mut self) {
        self.keyboard
            .tick(Instant::now(), self.mods.current(), &mut self.pending);
        for event in self.pending.drain(..) {
            if let Some(Signal::Submit(_)) = self.textbox.apply(event) {
                let text = self.textbox.editor().text();
                log::info!(target: "app.demo", "submitted: {text:?}");
                self.textbox.editor_mut().clear();
            }
        }
        self.textbox.tick();
    }

    /// Declare one egui frame.
    pub fn frame(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::default().fill(BACKDROP))
            .show(ctx, |ui| {
                let measurer = EguiTextMeasurer::new(ui.ctx(), FONT_PX);
                let mut surface = EguiSurface::new(ui.painter(), measurer.font_id());

                self.textbox.draw(&mut surface, &measurer);
                self.prims
                    .draw_rect(&mut surface, OUTLINE, Color::RED, 1.0);
                self.showcase(&mut surface);
            });
    }

    /// A small strip under the box exercising the primitive renderer.
    fn showcase(&mut self, surface: &mut EguiSurface<'_>) {
        let y = OUTLINE.bottom() + 60.0;

        self.prims
            .draw_circle(surface, Vec2::new(90.0, y), 30.0, 24, Color::WHITE, 2.0);
        self.prims.draw_arc(
            surface,
            Vec2::new(170.0, y),
            30.0,
            24,
            FRAC_PI_2,
            PI,
            Color::LIGHT_GRAY,
            2.0,
        );
        self.prims.draw_line(
            surface,
            Vec2::new(230.0, y - 30.0),
            Vec2::new(330.0, y + 30.0),
            Color::RED,
            2.0,
        );
        self.prims.fill_rect_rotated(
            surface,
            Vec2::new(360.0, y - 10.0),
            Vec2::new(40.0, 20.0),
            PI / 8.0,
            Color::DARK_GREEN,
        );
        for i in 0..8 {
            let x = 430.0 + (i as f32) * 3.0;
            self.prims.put_pixel(surface, Vec2::new(x, y), Color::WHITE);
        }
    }
}

impl Default for DemoApp {
    fn default() -> Self {
        Self::new()
    }
}
