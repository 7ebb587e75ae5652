//! Primitive drawing: lines, circles, arcs and rectangles.
//!
//! Circle and arc point lists are memoized per instance, keyed by their
//! parameters. Two instances never share cache entries, so tests and
//! widgets stay free of hidden cross-coupling.

use crate::geom::{Color, Rect, Vec2};
use crate::surface::{Sprite, Surface};
use std::collections::HashMap;
use std::f32::consts::TAU;
use std::rc::Rc;

// f32 keys are hashed by bit pattern; the parameters come from call sites
// verbatim, so equal inputs hit the same entry.
type CircleKey = (u32, u32);
type ArcKey = (u32, u32, u32, u32);

/// Primitive renderer with instance-owned geometry caches.
#[derive(Clone, Debug, Default)]
pub struct Primitives {
    circle_cache: HashMap<CircleKey, Rc<[Vec2]>>,
    arc_cache: HashMap<ArcKey, Rc<[Vec2]>>,
}

impl Primitives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a single pixel.
    pub fn put_pixel(&self, surface: &mut dyn Surface, position: Vec2, color: Color) {
        surface.blit(Sprite {
            position,
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            color,
        });
    }

    /// Draw a line from `point1` to `point2`.
    pub fn draw_line(
        &self,
        surface: &mut dyn Surface,
        point1: Vec2,
        point2: Vec2,
        color: Color,
        thickness: f32,
    ) {
        let length = point1.distance(point2);
        let angle = point1.angle_to(point2);
        self.draw_line_polar(surface, point1, length, angle, color, thickness);
    }

    /// Draw a line starting at `origin` with the given length and angle.
    pub fn draw_line_polar(
        &self,
        surface: &mut dyn Surface,
        origin: Vec2,
        length: f32,
        angle: f32,
        color: Color,
        thickness: f32,
    ) {
        surface.blit(Sprite {
            position: origin,
            scale: Vec2::new(length, thickness),
            rotation: angle,
            color,
        });
    }

    /// Connect consecutive points with lines, offset by `position`.
    ///
    /// Fewer than two points draw nothing.
    pub fn draw_points(
        &self,
        surface: &mut dyn Surface,
        position: Vec2,
        points: &[Vec2],
        color: Color,
        thickness: f32,
    ) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.draw_line(surface, pair[0] + position, pair[1] + position, color, thickness);
        }
    }

    /// Draw a filled axis-aligned rectangle.
    pub fn fill_rect(&self, surface: &mut dyn Surface, rect: Rect, color: Color) {
        surface.blit(Sprite {
            position: rect.min(),
            scale: rect.size(),
            rotation: 0.0,
            color,
        });
    }

    /// Draw a filled rectangle rotated by `angle` about its top-left corner.
    pub fn fill_rect_rotated(
        &self,
        surface: &mut dyn Surface,
        origin: Vec2,
        size: Vec2,
        angle: f32,
        color: Color,
    ) {
        surface.blit(Sprite {
            position: origin,
            scale: size,
            rotation: angle,
            color,
        });
    }

    /// Outline a rectangle with four lines of the given thickness.
    pub fn draw_rect(&self, surface: &mut dyn Surface, rect: Rect, color: Color, thickness: f32) {
        // The 1 px nudges on the vertical lines keep the stretched-pixel
        // corners from leaving gaps.
        self.draw_line(
            surface,
            Vec2::new(rect.x, rect.y),
            Vec2::new(rect.right(), rect.y),
            color,
            thickness,
        );
        self.draw_line(
            surface,
            Vec2::new(rect.x + 1.0, rect.y),
            Vec2::new(rect.x + 1.0, rect.bottom() + thickness),
            color,
            thickness,
        );
        self.draw_line(
            surface,
            Vec2::new(rect.x, rect.bottom()),
            Vec2::new(rect.right(), rect.bottom()),
            color,
            thickness,
        );
        self.draw_line(
            surface,
            Vec2::new(rect.right() + 1.0, rect.y),
            Vec2::new(rect.right() + 1.0, rect.bottom() + thickness),
            color,
            thickness,
        );
    }

    /// Draw a circle outline approximated by `sides` line segments.
    pub fn draw_circle(
        &mut self,
        surface: &mut dyn Surface,
        center: Vec2,
        radius: f32,
        sides: u32,
        color: Color,
        thickness: f32,
    ) {
        let points = self.circle_points(radius, sides);
        self.draw_points(surface, center, &points, color, thickness);
    }

    /// Draw an arc cut out of a circle with `sides` segments.
    ///
    /// `start_angle` 0 points east, growing toward positive y (clockwise
    /// on screen); `sweep` is the angle covered from there, in radians.
    pub fn draw_arc(
        &mut self,
        surface: &mut dyn Surface,
        center: Vec2,
        radius: f32,
        sides: u32,
        start_angle: f32,
        sweep: f32,
        color: Color,
        thickness: f32,
    ) {
        let points = self.arc_points(radius, sides, start_angle, sweep);
        self.draw_points(surface, center, &points, color, thickness);
    }

    /// Points of a circle around the origin, closed back to the start.
    fn circle_points(&mut self, radius: f32, sides: u32) -> Rc<[Vec2]> {
        let key = (radius.to_bits(), sides);
        if let Some(points) = self.circle_cache.get(&key) {
            return Rc::clone(points);
        }

        let step = TAU / sides as f32;
        let mut points = Vec::with_capacity(sides as usize + 1);
        for i in 0..sides {
            let theta = step * i as f32;
            points.push(Vec2::new(radius * theta.cos(), radius * theta.sin()));
        }
        // Close the loop with a copy of the starting point.
        points.push(Vec2::new(radius, 0.0));

        let points: Rc<[Vec2]> = points.into();
        self.circle_cache.insert(key, Rc::clone(&points));
        points
    }

    /// Points of an arc around the origin.
    ///
    /// Derived from the cached circle: rotate the point list until the
    /// first point is the side nearest `start_angle`, then trim it down
    /// to the sides the sweep covers.
    fn arc_points(&mut self, radius: f32, sides: u32, start_angle: f32, sweep: f32) -> Rc<[Vec2]> {
        let key = (radius.to_bits(), sides, start_angle.to_bits(), sweep.to_bits());
        if let Some(points) = self.arc_cache.get(&key) {
            return Rc::clone(points);
        }
        if sides == 0 {
            return Vec::new().into();
        }

        let circle = self.circle_points(radius, sides);
        let mut points = circle.to_vec();
        points.pop(); // the closing point duplicates the first

        let angle_per_side = TAU / sides as f32;
        let mut cur_angle = 0.0f32;
        while cur_angle + angle_per_side / 2.0 < start_angle {
            cur_angle += angle_per_side;
            points.rotate_left(1);
        }

        // Re-append the first point in case the sweep is a full circle.
        let first = points[0];
        points.push(first);

        let sides_in_arc = (sweep / angle_per_side + 0.5) as usize;
        points.truncate(sides_in_arc + 1);

        let points: Rc<[Vec2]> = points.into();
        self.arc_cache.insert(key, Rc::clone(&points));
        points
    }
}
