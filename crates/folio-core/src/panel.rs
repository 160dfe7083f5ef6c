//! Expand/collapse state for the info boxes, the project index and the
//! navigation bar highlight pairing.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxStage {
    #[default]
    Resting,
    /// Content faded out, waiting to flip the layout.
    Hiding,
    /// Layout flipped, waiting to fade content back in.
    Revealing,
}

/// Hide -> toggle -> reveal sequence for one `.box-content` panel.
#[derive(Clone, Debug, Default)]
pub struct BoxToggle {
    expanded: bool,
    stage: BoxStage,
}

impl BoxToggle {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            stage: BoxStage::Resting,
        }
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }
    pub fn stage(&self) -> BoxStage {
        self.stage
    }
    pub fn is_animating(&self) -> bool {
        self.stage != BoxStage::Resting
    }

    /// Start a toggle. Link clicks and clicks during a running sequence are
    /// ignored.
    pub fn click(&mut self, on_link: bool) -> bool {
        if on_link || self.is_animating() {
            return false;
        }
        self.stage = BoxStage::Hiding;
        true
    }

    /// Flip the expanded state. Returns the new state, or `None` when no
    /// sequence is waiting for it.
    pub fn toggle(&mut self) -> Option<bool> {
        if self.stage != BoxStage::Hiding {
            return None;
        }
        self.expanded = !self.expanded;
        self.stage = BoxStage::Revealing;
        Some(self.expanded)
    }

    /// Finish the sequence.
    pub fn reveal(&mut self) -> bool {
        if self.stage != BoxStage::Revealing {
            return false;
        }
        self.stage = BoxStage::Resting;
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexCollapse {
    collapsed: bool,
}

impl IndexCollapse {
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    pub target: Option<String>,
}

/// One nav bar entry per floating card, addressable by target section id.
#[derive(Clone, Debug, Default)]
pub struct NavIndex {
    entries: Vec<NavEntry>,
    by_target: FnvHashMap<String, usize>,
}

impl NavIndex {
    /// Build from `(title, target)` pairs in card order. A card without a
    /// title falls back to its target id, then to its position.
    pub fn new<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, Option<String>)>,
    {
        let mut index = Self::default();
        for (i, (title, target)) in cards.into_iter().enumerate() {
            let title = title
                .filter(|t| !t.trim().is_empty())
                .or_else(|| target.clone())
                .unwrap_or_else(|| format!("Project {}", i + 1));
            if let Some(t) = &target {
                index.by_target.entry(t.clone()).or_insert(i);
            }
            index.entries.push(NavEntry { title, target });
        }
        index
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn card_for_target(&self, target: &str) -> Option<usize> {
        self.by_target.get(target).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hover pairing between nav entries and cards.
#[derive(Clone, Debug, Default)]
pub struct NavHighlight {
    card_highlighted: Vec<bool>,
    entry_active: Vec<bool>,
}

impl NavHighlight {
    pub fn new(len: usize) -> Self {
        Self {
            card_highlighted: vec![false; len],
            entry_active: vec![false; len],
        }
    }

    fn set(flags: &mut [bool], i: usize, on: bool) -> bool {
        match flags.get_mut(i) {
            Some(f) if *f != on => {
                *f = on;
                true
            }
            _ => false,
        }
    }

    /// Pointer entered nav entry `i`: highlight card `i`.
    pub fn enter_entry(&mut self, i: usize) -> bool {
        Self::set(&mut self.card_highlighted, i, true)
    }
    pub fn leave_entry(&mut self, i: usize) -> bool {
        Self::set(&mut self.card_highlighted, i, false)
    }
    /// Pointer entered card `i`: mark nav entry `i` active.
    pub fn enter_card(&mut self, i: usize) -> bool {
        Self::set(&mut self.entry_active, i, true)
    }
    pub fn leave_card(&mut self, i: usize) -> bool {
        Self::set(&mut self.entry_active, i, false)
    }

    pub fn card_highlighted(&self, i: usize) -> bool {
        self.card_highlighted.get(i).copied().unwrap_or(false)
    }
    pub fn entry_active(&self, i: usize) -> bool {
        self.entry_active.get(i).copied().unwrap_or(false)
    }
}
