//! # textbox
//!
//! Presentation layer for the single-line editor in `edit_core`: the
//! [`TextBox`] widget with caret blink and pixel geometry, the
//! [`TextMeasurer`] font-metrics seam and the [`Keyboard`] repeat gate.
//!
//! ## Design Principles
//!
//! - **Explicit wiring**: nothing registers itself anywhere. The host owns
//!   one `Keyboard` and one `TextBox` and pumps events through them each
//!   frame.
//! - **Backend-agnostic**: drawing goes through `draw2d::Surface`, font
//!   metrics through [`TextMeasurer`]. The widget compiles without any
//!   window or GPU stack.
//!
//! ## Integration
//!
//! Per frame the host: feeds presses/releases and a tick through the
//! [`Keyboard`], applies the resulting events to the [`TextBox`], calls
//! [`TextBox::tick`] to advance the blink, then [`TextBox::draw`].

mod blink;
mod keyboard;
mod measure;
mod widget;

pub use blink::Blink;
pub use keyboard::{DEFAULT_INITIAL_DELAY, DEFAULT_REPEAT_INTERVAL, Keyboard};
pub use measure::TextMeasurer;
pub use widget::{RenderState, TextBox, TextBoxLayout, TextBoxStyle};
