// SPDX-License-Identifier: MPL-2.0
//! Active-choice bookkeeping shared by captions and quality.

/// The active entry of a selectable axis plus the last explicit choice.
///
/// `None` means "off" for captions and "auto" for quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackSelection {
    active: Option<usize>,
    last_chosen: usize,
}

impl TrackSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Last explicitly chosen index, restored by [`toggle_target`](Self::toggle_target).
    #[must_use]
    pub fn last_chosen(&self) -> usize {
        self.last_chosen
    }

    /// Sets the active entry. Returns false when `index` is already active.
    pub fn set(&mut self, index: Option<usize>) -> bool {
        if self.active == index {
            return false;
        }
        if let Some(index) = index {
            self.last_chosen = index;
        }
        self.active = index;
        true
    }

    /// Index a single on/off control should switch to.
    #[must_use]
    pub fn toggle_target(&self) -> Option<usize> {
        match self.active {
            Some(_) => None,
            None => Some(self.last_chosen),
        }
    }

    /// Re-points the active entry after the list changed, without
    /// recording it as an explicit choice.
    pub fn revalidate(&mut self, active: Option<usize>) {
        self.active = active;
    }

    /// Like [`revalidate`](Self::revalidate), also moving the last choice
    /// when its entry was found at a new position.
    pub fn follow(&mut self, active: Option<usize>, last_chosen: Option<usize>) {
        self.active = active;
        if let Some(index) = last_chosen {
            self.last_chosen = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_records_last_choice() {
        let mut selection = TrackSelection::new();
        assert!(selection.set(Some(2)));
        assert!(!selection.set(Some(2)));
        assert!(selection.set(None));
        assert_eq!(selection.last_chosen(), 2);
        assert_eq!(selection.toggle_target(), Some(2));
    }

    #[test]
    fn toggle_target_turns_active_off() {
        let mut selection = TrackSelection::new();
        selection.set(Some(1));
        assert_eq!(selection.toggle_target(), None);
    }

    #[test]
    fn revalidate_keeps_last_choice() {
        let mut selection = TrackSelection::new();
        selection.set(Some(3));
        selection.revalidate(None);
        assert_eq!(selection.active(), None);
        assert_eq!(selection.last_chosen(), 3);
    }

    #[test]
    fn follow_moves_last_choice_with_its_entry() {
        let mut selection = TrackSelection::new();
        selection.set(Some(2));
        selection.revalidate(None);
        selection.follow(None, Some(1));
        assert_eq!(selection.active(), None);
        assert_eq!(selection.toggle_target(), Some(1));

        selection.follow(Some(0), None);
        assert_eq!(selection.active(), Some(0));
        assert_eq!(selection.last_chosen(), 1);
    }
}
