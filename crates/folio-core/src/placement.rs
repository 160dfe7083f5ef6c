//! Starting positions for the floating cards.
//!
//! Desktop viewports scatter cards by rejection sampling against the cards
//! already placed in the same pass. Mobile viewports stack them in document
//! order below an anchor element with a fixed vertical overlap.

use crate::config::PlacementConfig;
use crate::geometry::{DeviceClass, Rect, Size, Viewport};
use glam::Vec2;
use rand::Rng;

/// Outcome for one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec2,
    /// Explicit stacking value; only the mobile stack assigns one.
    pub z_index: Option<i32>,
    pub attempts: u32,
    /// Every sample collided, so the last one was kept anyway.
    pub budget_exhausted: bool,
}

impl Placement {
    pub fn rect(&self, size: Size) -> Rect {
        Rect::at(self.position, size)
    }
}

#[inline]
pub fn overlap_area(a: &Rect, b: &Rect) -> f32 {
    a.intersection_area(b)
}

/// True when `candidate` covers no more than `fraction` of its own area or
/// of any placed rect's area.
pub fn overlap_acceptable(candidate: &Rect, placed: &[Rect], fraction: f32) -> bool {
    placed.iter().all(|other| {
        let shared = overlap_area(candidate, other);
        shared <= fraction * candidate.area() && shared <= fraction * other.area()
    })
}

fn sample_axis<R: Rng>(rng: &mut R, span: f32) -> f32 {
    if span > 0.0 {
        rng.gen_range(0.0..span).floor()
    } else {
        0.0
    }
}

/// Desktop scatter. Each card gets up to `max_attempts` uniform samples in
/// `[0, viewport - size - margin)` per axis.
pub fn scatter<R: Rng>(
    sizes: &[Size],
    viewport: Viewport,
    config: &PlacementConfig,
    rng: &mut R,
) -> Vec<Placement> {
    let max_attempts = config.max_attempts.max(1);
    let mut placed: Vec<Rect> = Vec::with_capacity(sizes.len());
    let mut out = Vec::with_capacity(sizes.len());

    for (i, size) in sizes.iter().enumerate() {
        let span_x = viewport.width - size.width - config.margin_left;
        let span_y = viewport.height - size.height - config.margin_top;

        let mut candidate = Rect::at(Vec2::ZERO, *size);
        let mut accepted = false;
        let mut attempts = 0;
        while !accepted && attempts < max_attempts {
            attempts += 1;
            let top = sample_axis(rng, span_y).max(0.0);
            let left = sample_axis(rng, span_x).max(0.0);
            candidate = Rect::at(Vec2::new(left, top), *size);
            accepted = overlap_acceptable(&candidate, &placed, config.max_overlap);
        }
        if !accepted {
            log::debug!(
                "[placement] card {} kept an overlapping position after {} attempts",
                i,
                attempts
            );
        }
        placed.push(candidate);
        out.push(Placement {
            position: candidate.origin,
            z_index: None,
            attempts,
            budget_exhausted: !accepted,
        });
    }
    out
}

/// Mobile stack: centered horizontally, starting `stack_gap` below
/// `anchor_bottom`, each card overlapping the previous by `stack_overlap`
/// of the previous card's height.
pub fn stack(
    sizes: &[Size],
    viewport: Viewport,
    anchor_bottom: Option<f32>,
    config: &PlacementConfig,
) -> Vec<Placement> {
    let mut top = anchor_bottom.unwrap_or(0.0).max(0.0) + config.stack_gap;
    sizes
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let left = ((viewport.width - size.width) / 2.0).max(0.0);
            let p = Placement {
                position: Vec2::new(left, top),
                z_index: Some(config.stack_z_base + i as i32),
                attempts: 1,
                budget_exhausted: false,
            };
            top += size.height * (1.0 - config.stack_overlap);
            p
        })
        .collect()
}

/// Pick the layout for the viewport's device class.
pub fn place<R: Rng>(
    sizes: &[Size],
    viewport: Viewport,
    anchor_bottom: Option<f32>,
    config: &PlacementConfig,
    rng: &mut R,
) -> (DeviceClass, Vec<Placement>) {
    let class = viewport.device_class(config.mobile_breakpoint);
    let placements = match class {
        DeviceClass::Mobile => stack(sizes, viewport, anchor_bottom, config),
        DeviceClass::Desktop => scatter(sizes, viewport, config, rng),
    };
    (class, placements)
}
