//! Ordered selection set supplied by the UI.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::zone::{Token, TokenId, Zone};

/// Ordered set of selected token ids. Insertion order is preserved and ids
/// appear at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    ids: Vec<TokenId>,
}

impl SelectionModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` at the end. Returns false if it was already selected.
    pub fn select(&mut self, id: TokenId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`. Returns false if it was not selected.
    pub fn deselect(&mut self, id: &TokenId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.ids.len() != before
    }

    /// Flip the selection state of `id`. Returns the new state.
    pub fn toggle(&mut self, id: TokenId) -> bool {
        if self.deselect(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Replace the whole selection, dropping duplicates.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = TokenId>) {
        self.ids.clear();
        for id in ids {
            self.select(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &TokenId) -> bool {
        self.ids.contains(id)
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn ids(&self) -> &[TokenId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected tokens that still exist in `zone`, in selection order.
    pub fn resolve<'z>(&self, zone: &'z Zone) -> impl Iterator<Item = &'z Token> {
        self.ids.iter().filter_map(move |id| {
            let token = zone.token(id);
            if token.is_none() {
                tracing::trace!(%id, "selected token missing from zone; skipping");
            }
            token
        })
    }
}

impl FromIterator<TokenId> for SelectionModel {
    fn from_iter<I: IntoIterator<Item = TokenId>>(iter: I) -> Self {
        let mut selection = Self::new();
        selection.replace(iter);
        selection
    }
}
