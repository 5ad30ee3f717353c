use crate::core::sound::CueName;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Unchanged,
    /// First entry into the viewport. `cue` is set for elements that carry an id.
    Activated { cue: Option<CueName> },
}

/// One-way activation state for scroll-revealed elements, keyed by an
/// element key assigned at observe time. Once active, always active.
#[derive(Debug, Default)]
pub struct RevealTracker {
    active: FnvHashSet<u32>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, key: u32, intersecting: bool, has_id: bool) -> Reveal {
        if !intersecting || !self.active.insert(key) {
            return Reveal::Unchanged;
        }
        Reveal::Activated {
            cue: has_id.then_some(CueName::Transition),
        }
    }

    #[inline]
    pub fn is_active(&self, key: u32) -> bool {
        self.active.contains(&key)
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
