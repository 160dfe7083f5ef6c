use crate::geometry::Rect;

/// Stacking counter shared by every card. `raise` is the only mutation.
#[derive(Clone, Debug)]
pub struct ZOrder {
    highest: i32,
}

impl ZOrder {
    pub fn new(start: i32) -> Self {
        Self { highest: start }
    }

    /// Next value, strictly above everything handed out before.
    pub fn raise(&mut self) -> i32 {
        self.highest = self.highest.saturating_add(1);
        self.highest
    }

    pub fn highest(&self) -> i32 {
        self.highest
    }
}

/// Stacking value a card keeps after release: `behind_ui` when it touches
/// any of the fixed UI regions, otherwise the value raised at drag start.
pub fn release_z_index(card: &Rect, ui_regions: &[Rect], raised: i32, behind_ui: i32) -> i32 {
    if ui_regions.iter().any(|r| card.touches(r)) {
        behind_ui
    } else {
        raised
    }
}
