#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::{Point, Rect};
use crate::positions::{TokenPosition, TokenPositions};
use crate::zone::{Layer, TokenId};

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub token: TokenId,
    pub layer: Layer,
}

/// Topmost visible token on `layer` whose selectable area contains `world_pt`.
#[must_use]
pub fn token_at(positions: &TokenPositions, layer: Layer, world_pt: Point) -> Option<TokenId> {
    positions.layer(layer).iter().rev().find(|p| p.area.contains(world_pt)).map(|p| p.token)
}

/// Topmost visible token under `world_pt`, searching layers top to bottom.
#[must_use]
pub fn hit_test(positions: &TokenPositions, world_pt: Point) -> Option<Hit> {
    Layer::ALL
        .iter()
        .rev()
        .find_map(|&layer| token_at(positions, layer, world_pt).map(|token| Hit { token, layer }))
}

/// Positions on `layer` whose selectable area overlaps `rect`, in draw order.
pub fn overlapping<'a>(
    positions: &'a TokenPositions,
    layer: Layer,
    rect: Rect,
) -> impl Iterator<Item = &'a TokenPosition> {
    positions.layer(layer).iter().filter(move |p| p.area.bounds().intersects(&rect))
}
