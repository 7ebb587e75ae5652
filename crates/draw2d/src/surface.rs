//! The drawing capability the widget and primitives layer render through.

use crate::geom::{Color, Vec2};

/// One stretched, rotated, tinted unit pixel.
///
/// Every primitive in this crate reduces to sprites of this shape: a line
/// is a unit pixel scaled to (length, thickness) and rotated, a filled
/// rectangle is one scaled to its size, a single pixel is one left alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    /// Top-left corner (the rotation pivot).
    pub position: Vec2,
    /// Stretch factors: (width, height) of the drawn quad.
    pub scale: Vec2,
    /// Rotation about `position`, in radians. 0 points east.
    pub rotation: f32,
    pub color: Color,
}

/// Rendering seam implemented by the host.
///
/// Implementations are free to batch, clip or reorder as long as sprites
/// submitted later paint over sprites submitted earlier.
pub trait Surface {
    /// Draw one stretched unit pixel.
    fn blit(&mut self, sprite: Sprite);

    /// Draw a single line of text with its top-left corner at `position`.
    ///
    /// Font face and size are the implementation's configuration; this
    /// crate never measures text.
    fn text(&mut self, position: Vec2, text: &str, color: Color);
}
