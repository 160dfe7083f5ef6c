//! Tunable parameters for placement, drag physics and UI timing.
//!
//! Defaults come from [`crate::constants`]. The page may override single
//! values through `data-*` attributes on `<body>`; the web crate feeds each
//! attribute through [`FolioConfig::apply_override`].

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacementConfig {
    pub mobile_breakpoint: f32,
    pub margin_top: f32,
    pub margin_left: f32,
    pub max_overlap: f32,
    pub max_attempts: u32,
    pub stack_gap: f32,
    pub stack_overlap: f32,
    pub stack_z_base: i32,
    pub fallback_size: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            margin_top: SCATTER_MARGIN_TOP_PX,
            margin_left: SCATTER_MARGIN_LEFT_PX,
            max_overlap: MAX_OVERLAP_FRACTION,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            stack_gap: STACK_GAP_BELOW_ANCHOR_PX,
            stack_overlap: STACK_OVERLAP_FACTOR,
            stack_z_base: STACK_Z_BASE,
            fallback_size: FALLBACK_SIZE_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragConfig {
    pub lerp: f32,
    pub sway_factor: f32,
    pub max_rotation_deg: f32,
    pub drag_scale: f32,
    pub click_threshold: f32,
    pub settle_epsilon: f32,
    pub max_settle_frames: u32,
    pub z_start: i32,
    pub z_behind_ui: i32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            lerp: DRAG_LERP,
            sway_factor: SWAY_FACTOR,
            max_rotation_deg: MAX_ROTATION_DEG,
            drag_scale: DRAG_SCALE,
            click_threshold: CLICK_THRESHOLD_PX,
            settle_epsilon: SETTLE_EPSILON_PX,
            max_settle_frames: MAX_SETTLE_FRAMES,
            z_start: Z_START,
            z_behind_ui: Z_BEHIND_UI,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimingConfig {
    pub initial_placement_ms: i32,
    pub resize_debounce_ms: i32,
    pub reposition_animation_ms: i32,
    pub box_hide_ms: i32,
    pub box_reveal_ms: i32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_placement_ms: INITIAL_PLACEMENT_DELAY_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            reposition_animation_ms: REPOSITION_ANIMATION_MS,
            box_hide_ms: BOX_HIDE_DELAY_MS,
            box_reveal_ms: BOX_REVEAL_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FolioConfig {
    pub placement: PlacementConfig,
    pub drag: DragConfig,
    pub timing: TimingConfig,
}

impl FolioConfig {
    /// Apply one override. `key` is the dataset name without the `data-`
    /// prefix, in kebab case (`drag-lerp`, `max-overlap`, ...).
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let float = || {
            value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(invalid)
        };
        match key {
            "drag-lerp" => self.drag.lerp = float()?.clamp(DRAG_LERP_MIN, DRAG_LERP_MAX),
            "max-rotation" => {
                self.drag.max_rotation_deg =
                    float()?.abs().clamp(MAX_ROTATION_DEG_MIN, MAX_ROTATION_DEG_MAX)
            }
            "click-threshold" => self.drag.click_threshold = float()?.max(0.0),
            "max-overlap" => {
                let v = float()?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid());
                }
                self.placement.max_overlap = v;
            }
            "max-attempts" => {
                self.placement.max_attempts = value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(invalid)?
            }
            "mobile-breakpoint" => self.placement.mobile_breakpoint = float()?.max(0.0),
            "resize-debounce-ms" => {
                self.timing.resize_debounce_ms = value
                    .trim()
                    .parse::<i32>()
                    .ok()
                    .filter(|n| *n >= 0)
                    .ok_or_else(invalid)?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply every override, collecting the rejected ones instead of
    /// stopping at the first failure.
    pub fn with_overrides<'a, I>(mut self, pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rejected = Vec::new();
        for (key, value) in pairs {
            if let Err(e) = self.apply_override(key, value) {
                rejected.push(e);
            }
        }
        (self, rejected)
    }
}

/// Keys understood by [`FolioConfig::apply_override`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "drag-lerp",
    "max-rotation",
    "click-threshold",
    "max-overlap",
    "max-attempts",
    "mobile-breakpoint",
    "resize-debounce-ms",
];
