//! Selection of the two reports to compare.

use crate::comparison::ComparisonTarget;
use crate::error::SelectionError;
use crate::notify::{Notice, Notifier};

pub const MAX_SELECTED: usize = 2;

/// Whether toggling `id` would be rejected: the selection is full and `id`
/// is not part of it. Tables disable such checkboxes.
pub fn is_locked(selected: &[String], id: &str) -> bool {
    selected.len() >= MAX_SELECTED && !selected.iter().any(|s| s == id)
}

/// At most two report ids, in the order they were picked. The first id
/// becomes `report1` of the comparison, the second `report2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Whether exactly two reports are picked.
    pub fn is_complete(&self) -> bool {
        self.ids.len() == MAX_SELECTED
    }

    pub fn is_locked(&self, id: &str) -> bool {
        is_locked(&self.ids, id)
    }

    /// Add or remove `id` without side effects.
    pub fn try_toggle(&mut self, id: &str) -> Result<(), SelectionError> {
        if let Some(index) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(index);
            return Ok(());
        }
        if self.ids.len() >= MAX_SELECTED {
            return Err(SelectionError::LimitReached);
        }
        self.ids.push(id.to_string());
        Ok(())
    }

    /// Add or remove `id`, warning the user when a third report is picked.
    pub fn toggle<N: Notifier + ?Sized>(&mut self, id: &str, notifier: &N) {
        if let Err(e) = self.try_toggle(id) {
            notifier.notify(Notice::warning(e.to_string()));
        }
    }

    /// The comparison to open, if exactly two reports are picked.
    pub fn target(&self) -> Result<ComparisonTarget, SelectionError> {
        match self.ids.as_slice() {
            [first, second] => Ok(ComparisonTarget {
                report1: first.clone(),
                report2: second.clone(),
            }),
            _ => Err(SelectionError::NotReady),
        }
    }

    /// Like [`Selection::target`], warning the user instead of failing.
    pub fn compare<N: Notifier + ?Sized>(&self, notifier: &N) -> Option<ComparisonTarget> {
        match self.target() {
            Ok(target) => Some(target),
            Err(e) => {
                notifier.notify(Notice::warning(e.to_string()));
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
