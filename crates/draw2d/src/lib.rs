//! # draw2d
//!
//! Sprite-batch style 2D drawing: lines, circles, arcs and rectangles,
//! all reduced to stretched unit-pixel [`Sprite`]s submitted through the
//! [`Surface`] trait a host implements.
//!
//! ## Design Principles
//!
//! - **No backend dependency**: the crate only produces [`Sprite`] and
//!   text submissions; rasterization is the host's job.
//! - **No global state**: circle and arc point lists are cached on the
//!   [`Primitives`] instance that computed them.
//! - **Screen coordinates**: x grows right, y grows down, angles are in
//!   radians with 0 pointing east.

mod geom;
mod primitives;
mod surface;

pub use geom::{Color, Rect, Vec2};
pub use primitives::Primitives;
pub use surface::{Sprite, Surface};
