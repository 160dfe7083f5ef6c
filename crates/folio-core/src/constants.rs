// Shared layout/interaction tuning constants used by the web frontend.

// Device classification
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // viewports narrower than this stack vertically

// Element sizing
pub const FALLBACK_SIZE_PX: f32 = 200.0; // used when an element reports no size

// Desktop scatter
pub const SCATTER_MARGIN_TOP_PX: f32 = 50.0;
pub const SCATTER_MARGIN_LEFT_PX: f32 = 50.0;
pub const MAX_OVERLAP_FRACTION: f32 = 0.25; // of either element's area
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;

// Mobile stack
pub const STACK_GAP_BELOW_ANCHOR_PX: f32 = 20.0;
pub const STACK_OVERLAP_FACTOR: f32 = 0.4; // fraction of the previous card's height
pub const STACK_Z_BASE: i32 = 10;

// Drag physics
pub const DRAG_LERP: f32 = 0.1; // per 60 Hz frame
pub const DRAG_LERP_MIN: f32 = 0.1;
pub const DRAG_LERP_MAX: f32 = 0.15;
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;
pub const SWAY_FACTOR: f32 = 0.5; // degrees per px of horizontal frame displacement
pub const MAX_ROTATION_DEG: f32 = 15.0;
pub const MAX_ROTATION_DEG_MIN: f32 = 10.0;
pub const MAX_ROTATION_DEG_MAX: f32 = 15.0;
pub const DRAG_SCALE: f32 = 1.05;
pub const SETTLE_EPSILON_PX: f32 = 0.5;
pub const MAX_SETTLE_FRAMES: u32 = 120;

// Click vs drag
pub const CLICK_THRESHOLD_PX: f32 = 5.0;

// Stacking
pub const Z_START: i32 = 100; // above static page content
pub const Z_BEHIND_UI: i32 = 1000; // below the hero/index panels, above the background

// Timing (milliseconds)
pub const INITIAL_PLACEMENT_DELAY_MS: i32 = 100;
pub const RESIZE_DEBOUNCE_MS: i32 = 200;
pub const REPOSITION_ANIMATION_MS: i32 = 1000;
pub const BOX_HIDE_DELAY_MS: i32 = 10;
pub const BOX_REVEAL_DELAY_MS: i32 = 10;

// Slideshow
pub const SCROLL_END_TOLERANCE_PX: f64 = 1.0;
pub const SLIDE_VISIBLE_THRESHOLD: f64 = 0.5;
