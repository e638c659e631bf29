//! Pan/zoom transform for the diagram.
//!
//! `screen = layout * scale + (x, y)`, in coordinates relative to the
//! container's top-left corner.

use crate::geometry::{self, ScaleBounds, Size};
use crate::model::Point;

pub const BUTTON_ZOOM_FACTOR: f32 = 1.2;
/// Wheel delta that corresponds to one 0.9x zoom notch.
const WHEEL_NOTCH: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl Viewport {
    pub fn to_layout(&self, screen: Point) -> Point {
        Point::new((screen.x - self.x) / self.scale, (screen.y - self.y) / self.scale)
    }

    pub fn to_screen(&self, layout: Point) -> Point {
        Point::new(layout.x * self.scale + self.x, layout.y * self.scale + self.y)
    }
}

/// Zoom factor for a wheel delta; scrolling down (positive) zooms out.
pub fn wheel_factor(delta_y: f32) -> f32 {
    0.9_f32.powf(delta_y / WHEEL_NOTCH)
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    viewport: Viewport,
    bounds: ScaleBounds,
    container: Size,
    locked: bool,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ScaleBounds::default())
    }
}

impl ViewportController {
    pub fn new(bounds: ScaleBounds) -> Self {
        Self {
            viewport: Viewport::default(),
            bounds,
            container: Size::default(),
            locked: false,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    pub fn zoom_percent(&self) -> i32 {
        (self.viewport.scale * 100.0).round() as i32
    }

    /// While locked, pointer panning and wheel zoom are ignored.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Zooms keeping the layout point under `pointer` fixed on screen.
    /// Returns false when ignored because of the lock.
    pub fn zoom_at(&mut self, pointer: Point, factor: f32) -> bool {
        if self.locked {
            return false;
        }
        self.zoom_anchored(pointer, factor);
        true
    }

    pub fn zoom_in(&mut self) {
        self.zoom_anchored(self.center(), BUTTON_ZOOM_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_anchored(self.center(), 1.0 / BUTTON_ZOOM_FACTOR);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) -> bool {
        if self.locked {
            return false;
        }
        self.viewport.x += dx;
        self.viewport.y += dy;
        true
    }

    /// Fits the network with the initial scale and centres it.
    pub fn reset_to_fit(&mut self, network: Size, container: Size) {
        self.container = container;
        let scale = geometry::initial_scale(network, container);
        self.viewport = Viewport {
            scale,
            x: (container.width - network.width * scale) / 2.0,
            y: (container.height - network.height * scale) / 2.0,
        };
        // very large or very small networks fit outside the scale bounds
        if !self.bounds.contains(scale) {
            self.zoom_anchored(self.center(), 1.0);
        }
    }

    fn center(&self) -> Point {
        Point::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    fn zoom_anchored(&mut self, anchor: Point, factor: f32) {
        let target = self.viewport.to_layout(anchor);
        let scale = self.bounds.clamp(self.viewport.scale * factor);
        self.viewport = Viewport {
            scale,
            x: anchor.x - target.x * scale,
            y: anchor.y - target.y * scale,
        };
    }
}
