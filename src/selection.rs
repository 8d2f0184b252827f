//! Selection State
//!
//! Browse/Select mode and the set of checked item ids.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectMode {
    #[default]
    Browse,
    Select,
}

/// Checked ids are only ever held while in Select mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    mode: SelectMode,
    checked: BTreeSet<u32>,
}

impl Selection {
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode == SelectMode::Select
    }

    /// Flip between Browse and Select; leaving Select clears the set
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            SelectMode::Browse => SelectMode::Select,
            SelectMode::Select => {
                self.checked.clear();
                SelectMode::Browse
            }
        };
    }

    /// Apply a checkbox change. Ignored outside Select mode.
    pub fn set_checked(&mut self, id: u32, checked: bool) {
        if !self.is_active() {
            return;
        }
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }

    pub fn is_checked(&self, id: u32) -> bool {
        self.checked.contains(&id)
    }

    pub fn checked_ids(&self) -> Vec<u32> {
        self.checked.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Text of the mode toggle button
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            SelectMode::Browse => "Select",
            SelectMode::Select => "Done",
        }
    }

    /// Hand over the checked ids and drop back to Browse
    pub fn take_for_delete(&mut self) -> Vec<u32> {
        let ids = std::mem::take(&mut self.checked).into_iter().collect();
        self.mode = SelectMode::Browse;
        ids
    }

    /// Forget checked ids that are no longer in the displayed collection
    pub fn retain_known(&mut self, known: impl IntoIterator<Item = u32>) {
        let known: BTreeSet<u32> = known.into_iter().collect();
        self.checked.retain(|id| known.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selecting(ids: &[u32]) -> Selection {
        let mut selection = Selection::default();
        selection.toggle_mode();
        for &id in ids {
            selection.set_checked(id, true);
        }
        selection
    }

    #[test]
    fn starts_in_browse_with_select_label() {
        let selection = Selection::default();
        assert_eq!(selection.mode(), SelectMode::Browse);
        assert_eq!(selection.toggle_label(), "Select");
        assert!(selection.is_empty());
    }

    #[test]
    fn toggling_off_always_clears() {
        for ids in [&[][..], &[1][..], &[1, 2, 3, 99][..]] {
            let mut selection = selecting(ids);
            assert_eq!(selection.toggle_label(), "Done");
            assert_eq!(selection.len(), ids.len());

            selection.toggle_mode();
            assert_eq!(selection.mode(), SelectMode::Browse);
            assert!(selection.is_empty());
        }
    }

    #[test]
    fn check_then_uncheck_is_idempotent() {
        let mut selection = selecting(&[4]);
        let before = selection.clone();

        selection.set_checked(7, true);
        selection.set_checked(7, false);
        assert_eq!(selection, before);

        selection.set_checked(4, true);
        selection.set_checked(4, false);
        assert!(!selection.is_checked(4));
    }

    #[test]
    fn browse_mode_ignores_checks() {
        let mut selection = Selection::default();
        selection.set_checked(1, true);
        assert!(selection.is_empty());
    }

    #[test]
    fn take_for_delete_resets_to_browse() {
        let mut selection = selecting(&[3, 1, 2]);
        let ids = selection.take_for_delete();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn retain_known_drops_vanished_ids() {
        let mut selection = selecting(&[1, 2, 3]);
        selection.retain_known([2, 3, 4]);
        assert_eq!(selection.checked_ids(), vec![2, 3]);
    }
}
