//! Arithmetic behind the gallery arrows and the "current/total" counter.

use crate::constants::{SCROLL_END_TOLERANCE_PX, SLIDE_VISIBLE_THRESHOLD};

/// Horizontal scroll geometry of a gallery, as reported by the element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonVisibility {
    pub prev_hidden: bool,
    pub next_hidden: bool,
}

pub fn button_visibility(m: ScrollMetrics) -> ButtonVisibility {
    ButtonVisibility {
        prev_hidden: m.scroll_left <= 0.0,
        next_hidden: m.scroll_left + m.client_width >= m.scroll_width - SCROLL_END_TOLERANCE_PX,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Prev,
    Next,
}

/// Signed horizontal offset for one arrow click: a full visible width.
#[inline]
pub fn scroll_step(direction: ScrollDirection, client_width: f64) -> f64 {
    match direction {
        ScrollDirection::Prev => -client_width,
        ScrollDirection::Next => client_width,
    }
}

// Observers report ratios like 0.4999 for an exact half crossing.
const RATIO_SLACK: f64 = 1e-3;

/// Tracks which slide is at least half visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideCounter {
    current: usize,
    total: usize,
}

impl SlideCounter {
    /// `None` for an empty gallery, which gets no counter at all.
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self { current: 0, total })
    }

    /// Feed one visibility observation. Returns true when the label changed.
    pub fn observe(&mut self, index: usize, visible_ratio: f64, is_intersecting: bool) -> bool {
        let half_visible = visible_ratio + RATIO_SLACK >= SLIDE_VISIBLE_THRESHOLD;
        if !is_intersecting || !half_visible || index >= self.total {
            return false;
        }
        let changed = self.current != index;
        self.current = index;
        changed
    }

    /// Zero-based index of the visible slide.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.current + 1, self.total)
    }
}
