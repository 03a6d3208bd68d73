//! Recompute orchestrator.
//!
//! [`ZoneView`] is bound to one zone. Each [`ZoneView::update`] runs every
//! pass from scratch, in a fixed order, and publishes the result as a new
//! immutable [`Snapshot`]:
//!
//! 1. viewport
//! 2. player view (reads the selection ids directly)
//! 3. selection
//! 4. positions
//! 5. markers (reads positions)
//! 6. stacks (reads token-layer positions)
//!
//! Nothing is patched incrementally, so a snapshot is always consistent with
//! the zone and selection it was built from. Snapshots are shared through
//! `Arc`; a reader may keep one across later updates.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::sync::Arc;

use tracing::debug;

use crate::camera;
use crate::config::FrameInput;
use crate::error::ViewError;
use crate::geom::Rect;
use crate::hit;
use crate::markers::extract_markers;
use crate::player_view::{PlayerView, build_player_view};
use crate::positions::{TokenPosition, TokenPositions, build_positions};
use crate::selection::SelectionModel;
use crate::stacks::{StackMap, build_stacks};
use crate::zone::{Layer, TokenId, Zone, ZoneId};

/// Everything derived for one viewer in one cycle.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    generation: u64,
    viewport: Rect,
    player_view: PlayerView,
    selected: Vec<TokenId>,
    positions: TokenPositions,
    markers: Vec<TokenId>,
    stacks: StackMap,
}

impl Snapshot {
    /// Number of updates that preceded this snapshot. Zero before the first.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// World-space area covered by the render surface.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    #[must_use]
    pub fn player_view(&self) -> &PlayerView {
        &self.player_view
    }

    /// Selected tokens that exist in the zone, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[TokenId] {
        &self.selected
    }

    #[must_use]
    pub fn positions(&self) -> &TokenPositions {
        &self.positions
    }

    #[must_use]
    pub fn markers(&self) -> &[TokenId] {
        &self.markers
    }

    #[must_use]
    pub fn stacks(&self) -> &StackMap {
        &self.stacks
    }

    /// Positions on `layer` whose selectable area reaches into the viewport.
    pub fn visible_in_viewport(&self, layer: Layer) -> impl Iterator<Item = &TokenPosition> {
        hit::overlapping(&self.positions, layer, self.viewport)
    }

    /// Whether two snapshots carry the same derived state, ignoring generation.
    #[must_use]
    pub fn same_state(&self, other: &Snapshot) -> bool {
        self.viewport == other.viewport
            && self.player_view == other.player_view
            && self.selected == other.selected
            && self.positions == other.positions
            && self.markers == other.markers
            && self.stacks == other.stacks
    }
}

/// Derived view state for one zone.
pub struct ZoneView {
    zone_id: ZoneId,
    current: Arc<Snapshot>,
}

impl ZoneView {
    /// Bind a view to `zone`. The initial snapshot is empty.
    #[must_use]
    pub fn new(zone: &Zone) -> Self {
        Self { zone_id: zone.id(), current: Arc::new(Snapshot::default()) }
    }

    #[must_use]
    pub fn zone_id(&self) -> ZoneId {
        self.zone_id
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Recompute every derived structure and publish a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ZoneMismatch` if `zone` is not the zone this view was
    /// created for. The current snapshot is left untouched.
    pub fn update(
        &mut self,
        zone: &Zone,
        selection: &SelectionModel,
        input: &FrameInput,
    ) -> Result<Arc<Snapshot>, ViewError> {
        if zone.id() != self.zone_id {
            return Err(ViewError::ZoneMismatch { expected: self.zone_id, actual: zone.id() });
        }
        let gm_view = input.is_gm_view();

        let viewport = camera::viewport(input.surface.as_ref());
        let player_view =
            build_player_view(zone, selection, &input.viewer, &input.policy, input.view_role, input.use_selection);
        let selected: Vec<TokenId> = selection.resolve(zone).map(|t| t.id).collect();
        let positions = build_positions(zone, &input.viewer, gm_view);
        let markers = extract_markers(zone, &positions, gm_view);
        let stacks = build_stacks(positions.layer(Layer::Token));

        let snapshot = Snapshot {
            generation: self.current.generation + 1,
            viewport,
            player_view,
            selected,
            positions,
            markers,
            stacks,
        };
        debug!(
            zone = %self.zone_id,
            generation = snapshot.generation,
            gm_view,
            positions = snapshot.positions.len(),
            markers = snapshot.markers.len(),
            stacks = snapshot.stacks.len(),
            "zone view updated"
        );
        self.current = Arc::new(snapshot);
        Ok(self.snapshot())
    }
}
