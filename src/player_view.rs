//! Which tokens provide sight for the current viewer.
//!
//! Selection wins when it is in play: a player who selects some of their own
//! sighted tokens sees only through those. Otherwise the server policy
//! decides between the viewer's own sighted tokens and every sighted player
//! character in the zone.

#[cfg(test)]
#[path = "player_view_test.rs"]
mod player_view_test;

use serde::{Deserialize, Serialize};

use crate::config::{Role, ViewPolicy, Viewer};
use crate::selection::SelectionModel;
use crate::zone::{Token, TokenId, Zone};

/// Role being rendered plus the tokens whose sight defines what is visible.
///
/// No tokens means the consumer should treat the whole zone as visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub role: Role,
    pub tokens: Vec<TokenId>,
}

impl PlayerView {
    #[must_use]
    pub fn is_gm_view(&self) -> bool {
        self.role.is_gm()
    }

    /// Whether sight is restricted to specific tokens.
    #[must_use]
    pub fn has_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// Build the player view for one recompute cycle.
#[must_use]
pub fn build_player_view(
    zone: &Zone,
    selection: &SelectionModel,
    viewer: &Viewer,
    policy: &ViewPolicy,
    role: Role,
    use_selection: bool,
) -> PlayerView {
    let mut tokens: Vec<&Token> = Vec::new();
    if use_selection && !selection.is_empty() {
        tokens = selection.resolve(zone).filter(|t| t.has_sight && viewer.owns(t, role.is_gm())).collect();
    }

    if tokens.is_empty() {
        tokens = if policy.per_player_sight() {
            zone.owned_tokens_with_sight(&viewer.name)
        } else {
            zone.player_tokens_with_sight()
        };
        tracing::trace!(
            per_player = policy.per_player_sight(),
            count = tokens.len(),
            "player view: policy tokens"
        );
    } else {
        tracing::trace!(count = tokens.len(), "player view: selected tokens");
    }

    PlayerView { role, tokens: tokens.iter().map(|t| t.id).collect() }
}
