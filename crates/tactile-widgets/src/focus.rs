//! Focus cycling across a dynamic set of widgets.

/// Tracks which of `len` slots has keyboard focus.
///
/// Movement wraps around and skips slots the caller reports as unavailable
/// (typically disabled widgets).  When no slot is available focus stays put.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    focused: usize,
}

impl FocusRing {
    /// A ring of `len` slots with focus on slot 0.
    pub fn new(len: usize) -> Self {
        Self { len, focused: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the focused slot, or `None` for an empty ring.
    pub fn focused(&self) -> Option<usize> {
        (self.len > 0).then_some(self.focused)
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused() == Some(index)
    }

    /// Focus `index`, clamped to the last slot.
    pub fn focus(&mut self, index: usize) {
        self.focused = index.min(self.len.saturating_sub(1));
    }

    /// Resize the ring, keeping the focused index in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.focus(self.focused);
    }

    /// Move to the next available slot after the current one.
    pub fn focus_next(&mut self, available: impl Fn(usize) -> bool) -> Option<usize> {
        self.step(1, available)
    }

    /// Move to the previous available slot before the current one.
    pub fn focus_prev(&mut self, available: impl Fn(usize) -> bool) -> Option<usize> {
        self.step(self.len.saturating_sub(1), available)
    }

    /// Focus the first available slot starting from 0.
    pub fn focus_first(&mut self, available: impl Fn(usize) -> bool) -> Option<usize> {
        let found = (0..self.len).find(|&i| available(i))?;
        self.focused = found;
        Some(found)
    }

    fn step(&mut self, delta: usize, available: impl Fn(usize) -> bool) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let mut index = self.focused;
        for _ in 0..self.len {
            index = (index + delta) % self.len;
            if available(index) {
                self.focused = index;
                return Some(index);
            }
        }
        None
    }
}
