//! Screen-space rectangles and viewport classification.
//!
//! All values are CSS pixels with the origin at the top-left of the viewport,
//! matching what `getBoundingClientRect` and inline `top`/`left` styles use.

use glam::Vec2;

/// Width/height pair of a floating element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Size::new(width, height),
        }
    }

    pub fn at(origin: Vec2, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.size.area()
    }

    /// Area shared by both rectangles; zero when they are disjoint.
    pub fn intersection_area(&self, other: &Rect) -> f32 {
        let w = (self.right().min(other.right()) - self.left().max(other.left())).max(0.0);
        let h = (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0.0);
        w * h
    }

    /// Bounding-box contact test. Shared edges count as touching.
    pub fn touches(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn device_class(&self, mobile_breakpoint: f32) -> DeviceClass {
        if self.width < mobile_breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Top-left that centers `size` in the viewport, clamped to the origin.
    pub fn centered(&self, size: Size) -> Vec2 {
        Vec2::new(
            ((self.width - size.width) / 2.0).max(0.0),
            ((self.height - size.height) / 2.0).max(0.0),
        )
    }
}
