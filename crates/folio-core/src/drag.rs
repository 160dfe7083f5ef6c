//! Inertial drag for the floating cards.
//!
//! Each card owns a [`DragState`] running `Idle -> Dragging -> Settling ->
//! Idle`. Pointer handlers only move the target; the frame loop calls
//! [`DragController::tick`], which is the sole writer of card positions
//! while a card is active.

use crate::config::DragConfig;
use crate::constants::REFERENCE_FRAME_SEC;
use crate::geometry::Rect;
use crate::zorder::{release_z_index, ZOrder};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// What the frame loop writes to the card for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMotion {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
}

/// Result of lifting the pointer off a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Release {
    pub index: usize,
    pub is_click: bool,
}

/// Pointer travel below `threshold` between press and release is a click.
#[inline]
pub fn is_click(press: Vec2, release: Vec2, threshold: f32) -> bool {
    press.distance(release) < threshold
}

/// Convert a per-60Hz-frame lerp factor into the factor for a frame that
/// lasted `dt_sec`.
#[inline]
pub fn frame_alpha(lerp: f32, dt_sec: f32) -> f32 {
    if dt_sec <= 0.0 {
        return 0.0;
    }
    let frames = dt_sec / REFERENCE_FRAME_SEC;
    (1.0 - (1.0 - lerp).powf(frames)).clamp(0.0, 1.0)
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
    phase: DragPhase,
    current: Vec2,
    target: Vec2,
    grab_offset: Vec2,
    press: Vec2,
    rotation_deg: f32,
    scale: f32,
    settle_frames: u32,
    z_index: i32,
}

impl DragState {
    pub fn new(position: Vec2) -> Self {
        Self {
            current: position,
            target: position,
            scale: 1.0,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }
    pub fn position(&self) -> Vec2 {
        self.current
    }
    pub fn target(&self) -> Vec2 {
        self.target
    }
    pub fn z_index(&self) -> i32 {
        self.z_index
    }
    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// Grab the card whose top-left is `origin` with the pointer at `pointer`.
    pub fn begin(&mut self, origin: Vec2, pointer: Vec2, z_index: i32, config: &DragConfig) {
        // A card grabbed mid-settle continues from where the animator left it.
        let origin = if self.phase == DragPhase::Settling {
            self.current
        } else {
            origin
        };
        self.phase = DragPhase::Dragging;
        self.current = origin;
        self.target = origin;
        self.grab_offset = pointer - origin;
        self.press = pointer;
        self.rotation_deg = 0.0;
        self.scale = config.drag_scale;
        self.settle_frames = 0;
        self.z_index = z_index;
    }

    pub fn pointer_moved(&mut self, pointer: Vec2) {
        if self.phase == DragPhase::Dragging {
            self.target = (pointer - self.grab_offset).max(Vec2::ZERO);
        }
    }

    /// Stop following the pointer. Returns whether the gesture was a click.
    pub fn release(&mut self, pointer: Vec2, config: &DragConfig) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }
        self.phase = DragPhase::Settling;
        self.settle_frames = 0;
        is_click(self.press, pointer, config.click_threshold)
    }

    pub fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    /// Mark inactive without settling; the next tick yields nothing.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
        self.target = self.current;
        self.rotation_deg = 0.0;
        self.scale = 1.0;
    }

    /// Reposition an idle card, e.g. after the layout pass moved it.
    pub fn reset_position(&mut self, position: Vec2) {
        if self.phase == DragPhase::Idle {
            self.current = position;
            self.target = position;
        }
    }

    pub fn tick(&mut self, dt_sec: f32, config: &DragConfig) -> Option<CardMotion> {
        match self.phase {
            DragPhase::Idle => return None,
            DragPhase::Dragging => self.step(dt_sec, config),
            DragPhase::Settling => {
                self.step(dt_sec, config);
                self.settle_frames += 1;
                let converged = self.current.distance(self.target) < config.settle_epsilon;
                if converged || self.settle_frames >= config.max_settle_frames {
                    self.current = self.target;
                    self.rotation_deg = 0.0;
                    self.scale = 1.0;
                    self.phase = DragPhase::Idle;
                }
            }
        }
        Some(self.motion())
    }

    fn step(&mut self, dt_sec: f32, config: &DragConfig) {
        let alpha = frame_alpha(config.lerp, dt_sec);
        let next = self.current + (self.target - self.current) * alpha;
        let dx = if dt_sec > 0.0 {
            (next.x - self.current.x) * (REFERENCE_FRAME_SEC / dt_sec)
        } else {
            0.0
        };
        self.current = next;
        self.rotation_deg =
            (dx * config.sway_factor).clamp(-config.max_rotation_deg, config.max_rotation_deg);
    }

    fn motion(&self) -> CardMotion {
        CardMotion {
            position: self.current,
            rotation_deg: self.rotation_deg,
            scale: self.scale,
        }
    }
}

/// Owns every card's drag state plus the shared stacking counter.
#[derive(Clone, Debug)]
pub struct DragController {
    cards: Vec<DragState>,
    zorder: ZOrder,
    config: DragConfig,
    grabbed: Option<usize>,
}

impl DragController {
    pub fn new(positions: &[Vec2], config: DragConfig) -> Self {
        Self {
            cards: positions.iter().map(|p| DragState::new(*p)).collect(),
            zorder: ZOrder::new(config.z_start),
            config,
            grabbed: None,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn card(&self, index: usize) -> Option<&DragState> {
        self.cards.get(index)
    }
    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    /// Start dragging `index`. Returns the raised stacking value.
    pub fn pointer_down(&mut self, index: usize, origin: Vec2, pointer: Vec2) -> Option<i32> {
        if index >= self.cards.len() {
            return None;
        }
        if let Some(prev) = self.grabbed.take() {
            if prev != index {
                self.cards[prev].release(pointer, &self.config);
            }
        }
        let z = self.zorder.raise();
        self.cards[index].begin(origin, pointer, z, &self.config);
        self.grabbed = Some(index);
        log::debug!("[drag] begin card {} z={}", index, z);
        Some(z)
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        if let Some(i) = self.grabbed {
            self.cards[i].pointer_moved(pointer);
        }
    }

    pub fn pointer_up(&mut self, pointer: Vec2) -> Option<Release> {
        let index = self.grabbed.take()?;
        let is_click = self.cards[index].release(pointer, &self.config);
        log::debug!("[drag] release card {} click={}", index, is_click);
        Some(Release { index, is_click })
    }

    /// Abort the held drag without a release, e.g. when the browser takes
    /// the pointer for panning. The card stays where it is and goes idle.
    pub fn pointer_cancel(&mut self) -> Option<usize> {
        let index = self.grabbed?;
        self.cancel(index);
        log::debug!("[drag] cancel card {}", index);
        Some(index)
    }

    /// Settle the stacking value of a released card against the UI panels.
    pub fn resolve_release_z(&mut self, index: usize, card: &Rect, ui_regions: &[Rect]) -> i32 {
        let Some(state) = self.cards.get_mut(index) else {
            return self.config.z_behind_ui;
        };
        let z = release_z_index(card, ui_regions, state.z_index(), self.config.z_behind_ui);
        state.set_z_index(z);
        z
    }

    pub fn reset_positions(&mut self, positions: &[Vec2]) {
        for (state, p) in self.cards.iter_mut().zip(positions) {
            state.reset_position(*p);
        }
    }

    pub fn cancel(&mut self, index: usize) {
        if let Some(state) = self.cards.get_mut(index) {
            state.cancel();
        }
        if self.grabbed == Some(index) {
            self.grabbed = None;
        }
    }

    /// Advance every active card by one frame.
    pub fn tick(&mut self, dt_sec: f32) -> Vec<(usize, CardMotion)> {
        let config = &self.config;
        self.cards
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.tick(dt_sec, config).map(|m| (i, m)))
            .collect()
    }

    /// Whether the frame loop currently owns card `index`.
    pub fn is_active(&self, index: usize) -> bool {
        self.cards.get(index).map_or(false, DragState::is_active)
    }

    pub fn has_active(&self) -> bool {
        self.cards.iter().any(DragState::is_active)
    }
}
