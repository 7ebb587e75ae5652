use draw2d::{Color, Sprite, Surface, Vec2};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

/// `draw2d::Surface` backend over an egui [`Painter`].
///
/// Axis-aligned sprites become filled rects. A rotated sprite is exactly a
/// stroked segment: `scale.x` long in the rotation direction, `scale.y`
/// thick, with the stroke offset so the sprite's origin edge stays at
/// `position` the way a top-left-origin stretched pixel would.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    font_id: FontId,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, font_id: FontId) -> Self {
        Self { painter, font_id }
    }
}

impl Surface for EguiSurface<'_> {
    fn blit(&mut self, sprite: Sprite) {
        let color = to_color32(sprite.color);
        if sprite.rotation == 0.0 {
            let rect = Rect::from_min_size(
                to_pos2(sprite.position),
                egui::Vec2::new(sprite.scale.x, sprite.scale.y),
            );
            self.painter.rect_filled(rect, 0.0, color);
            return;
        }

        let (start, end, thickness) = segment_for(&sprite);
        self.painter
            .line_segment([start, end], Stroke::new(thickness, color));
    }

    fn text(&mut self, position: Vec2, text: &str, color: Color) {
        self.painter.text(
            to_pos2(position),
            Align2::LEFT_TOP,
            text,
            self.font_id.clone(),
            to_color32(color),
        );
    }
}

// --- Internal helper functions ---

fn segment_for(sprite: &Sprite) -> (Pos2, Pos2, f32) {
    let (sin, cos) = sprite.rotation.sin_cos();
    let along = egui::Vec2::new(cos, sin);
    let normal = egui::Vec2::new(-sin, cos);
    // egui centers a stroke on its segment; nudge by half the thickness so
    // the sprite's top edge runs through `position`.
    let start = to_pos2(sprite.position) + normal * (sprite.scale.y * 0.5);
    let end = start + along * sprite.scale.x;
    (start, end, sprite.scale.y)
}

fn to_pos2(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

fn to_color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}
