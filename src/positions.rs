//! Visibility filtering and per-token world geometry.
//!
//! For every layer, tokens the viewer may see are kept in zone draw order,
//! each with its footprint and its rotation-adjusted selectable area. The
//! result is indexed two ways: by token id, and as an ordered list per layer.

#[cfg(test)]
#[path = "positions_test.rs"]
mod positions_test;

use std::collections::HashMap;

use serde::Serialize;

use crate::config::Viewer;
use crate::geom::{Area, Rect};
use crate::zone::{Layer, Token, TokenId, Zone};

/// Where one visible token sits this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenPosition {
    pub token: TokenId,
    pub footprint: Rect,
    /// Selectable area after facing rotation.
    pub area: Area,
}

impl TokenPosition {
    #[must_use]
    pub fn of(token: &Token) -> Self {
        Self { token: token.id, footprint: token.footprint(), area: token.selectable_area() }
    }
}

/// Visible token positions, keyed by id and listed per layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenPositions {
    by_id: HashMap<TokenId, TokenPosition>,
    by_layer: [Vec<TokenPosition>; Layer::ALL.len()],
}

impl TokenPositions {
    /// Position of a visible token.
    #[must_use]
    pub fn get(&self, id: &TokenId) -> Option<&TokenPosition> {
        self.by_id.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &TokenId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Visible tokens on `layer`, bottom to top.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> &[TokenPosition] {
        &self.by_layer[layer.index()]
    }

    /// All positions, layer by layer, each layer bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &TokenPosition> {
        self.by_layer.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn push(&mut self, layer: Layer, position: TokenPosition) {
        self.by_id.insert(position.token, position);
        self.by_layer[layer.index()].push(position);
    }
}

/// Whether `viewer` may see `token` in the given view mode.
#[must_use]
pub fn is_visible_to(token: &Token, viewer: &Viewer, gm_view: bool) -> bool {
    if gm_view {
        return true;
    }
    if !token.visible || !token.layer.is_player_visible() {
        return false;
    }
    !token.visible_only_to_owner || viewer.owns(token, gm_view)
}

/// Compute positions for every token `viewer` may see.
#[must_use]
pub fn build_positions(zone: &Zone, viewer: &Viewer, gm_view: bool) -> TokenPositions {
    let mut positions = TokenPositions::default();
    for layer in Layer::ALL {
        for token in zone.tokens_on(layer) {
            if !is_visible_to(token, viewer, gm_view) {
                continue;
            }
            positions.push(layer, TokenPosition::of(token));
        }
    }
    positions
}
