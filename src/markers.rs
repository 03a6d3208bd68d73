#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use crate::positions::TokenPositions;
use crate::zone::{TokenId, Zone};

/// Visible marker tokens the viewer may read, in layer then draw order.
///
/// Players only get markers that carry notes; GM views get every marker.
#[must_use]
pub fn extract_markers(zone: &Zone, positions: &TokenPositions, gm_view: bool) -> Vec<TokenId> {
    positions
        .iter()
        .filter_map(|p| zone.token(&p.token))
        .filter(|t| t.is_marker && (gm_view || !t.notes.is_empty()))
        .map(|t| t.id)
        .collect()
}
