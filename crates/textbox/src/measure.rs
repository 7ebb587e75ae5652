/// Font metrics seam. The widget can depend on this without knowing about
/// egui, wgpu or whatever else the host renders with.
pub trait TextMeasurer {
    /// Advance width of `text` in px when rendered with the host's font,
    /// including trailing spaces.
    fn width(&self, text: &str) -> f32;

    /// Height of one text line in px for the host's font.
    fn line_height(&self) -> f32;
}
