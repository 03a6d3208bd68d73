//! Zone model: tokens, layers, and the in-memory zone store.
//!
//! This module defines the data the recompute engine reads from. A `Zone`
//! keeps its tokens in canonical draw order (bottom to top) and answers the
//! read-only queries the engine needs: tokens on a layer, lookup by id, and
//! the "tokens with sight" sets used to build a player view.
//!
//! Tokens arrive from the host application as JSON, so every type here is
//! serde (de)serializable. The host owns the authoritative copy; this store
//! is the engine-facing mirror of it.

#[cfg(test)]
#[path = "zone_test.rs"]
mod zone_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::FACING_BASIS_DEG;
use crate::geom::{Area, Point, Rect};

/// Unique identifier for a token.
pub type TokenId = Uuid;

/// Unique identifier for a zone.
pub type ZoneId = Uuid;

/// Draw layer of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Map art and terrain beneath everything else.
    Background,
    /// Static objects such as doors and furniture.
    Object,
    /// GM-only notes and hidden tokens.
    Gm,
    /// The interactive layer players move tokens on.
    #[default]
    Token,
}

impl Layer {
    /// All layers, bottom to top.
    pub const ALL: [Layer; 4] = [Layer::Background, Layer::Object, Layer::Gm, Layer::Token];

    /// Whether players may see tokens on this layer at all.
    #[must_use]
    pub fn is_player_visible(self) -> bool {
        !matches!(self, Self::Gm)
    }

    /// Position of this layer in [`Layer::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Background => 0,
            Self::Object => 1,
            Self::Gm => 2,
            Self::Token => 3,
        }
    }
}

/// Whether a token stands for a player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Player character. Contributes to the shared player view.
    Pc,
    /// Anything else.
    #[default]
    Npc,
}

/// How a token's image is drawn, which decides how facing applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenShape {
    /// Seen from above; the whole image turns with the facing.
    #[default]
    TopDown,
    /// Round token; facing is drawn as an arrow only.
    Circle,
    /// Square token; facing is drawn as an arrow only.
    Square,
    /// Standing figure; always drawn upright.
    Figure,
}

impl TokenShape {
    /// Selectable area for a token of this shape.
    ///
    /// Only top-down tokens with a facing rotate. They turn about
    /// `footprint.center() - anchor` by `-facing + FACING_BASIS_DEG` degrees.
    #[must_use]
    pub fn selectable_area(self, footprint: Rect, anchor: Point, facing: Option<f64>) -> Area {
        match (self, facing) {
            (Self::TopDown, Some(facing)) => {
                let center = footprint.center();
                let pivot = Point::new(center.x - anchor.x, center.y - anchor.y);
                Area::rotated(footprint, pivot, facing_radians(facing))
            }
            _ => Area::from_rect(footprint),
        }
    }
}

/// Rotation in radians applied for a facing given in degrees.
#[must_use]
pub fn facing_radians(facing_deg: f64) -> f64 {
    (-facing_deg + FACING_BASIS_DEG).to_radians()
}

fn default_true() -> bool {
    true
}

/// A token as stored in the zone and on the wire.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Unique identifier for this token.
    pub id: TokenId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub layer: Layer,
    #[serde(default)]
    pub kind: TokenKind,
    #[serde(default)]
    pub shape: TokenShape,
    /// Left edge of the footprint in world coordinates.
    pub x: f64,
    /// Top edge of the footprint in world coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Image anchor offset in world units, shifting the rotation pivot.
    #[serde(default)]
    pub anchor: Point,
    /// Facing in degrees. `None` when the token has no facing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<f64>,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Only owners (and GM views) may see this token.
    #[serde(default)]
    pub visible_only_to_owner: bool,
    #[serde(default)]
    pub is_marker: bool,
    /// Player-facing notes. Markers without notes are GM-only.
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub has_sight: bool,
    /// Names of players who own this token.
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub owned_by_all: bool,
}

impl Token {
    /// A visible, unowned NPC token covering `footprint` on `layer`.
    #[must_use]
    pub fn new(name: impl Into<String>, layer: Layer, footprint: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            layer,
            kind: TokenKind::Npc,
            shape: TokenShape::TopDown,
            x: footprint.x,
            y: footprint.y,
            width: footprint.width,
            height: footprint.height,
            anchor: Point::ORIGIN,
            facing: None,
            visible: true,
            visible_only_to_owner: false,
            is_marker: false,
            notes: String::new(),
            has_sight: false,
            owners: Vec::new(),
            owned_by_all: false,
        }
    }

    /// Axis-aligned rectangle the token occupies in world space.
    #[must_use]
    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Rotation-adjusted area used for selection.
    #[must_use]
    pub fn selectable_area(&self) -> Area {
        self.shape.selectable_area(self.footprint(), self.anchor, self.facing)
    }

    /// Whether `player` is listed as an owner, or the token is owned by all.
    #[must_use]
    pub fn is_owned_by(&self, player: &str) -> bool {
        self.owned_by_all || self.owners.iter().any(|o| o == player)
    }
}

/// In-memory zone: tokens in draw order plus an id index.
#[derive(Debug, Clone)]
pub struct Zone {
    id: ZoneId,
    name: String,
    tokens: Vec<Token>,
    index: HashMap<TokenId, usize>,
}

impl Zone {
    /// Create an empty zone with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Create an empty zone with a known id.
    #[must_use]
    pub fn with_id(id: ZoneId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), tokens: Vec::new(), index: HashMap::new() }
    }

    #[must_use]
    pub fn id(&self) -> ZoneId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or replace a token. A replaced token keeps its draw position;
    /// a new token is drawn on top.
    pub fn insert(&mut self, token: Token) {
        if let Some(&i) = self.index.get(&token.id) {
            self.tokens[i] = token;
            return;
        }
        self.index.insert(token.id, self.tokens.len());
        self.tokens.push(token);
    }

    /// Remove a token by id, returning it if it was present.
    pub fn remove(&mut self, id: &TokenId) -> Option<Token> {
        let i = self.index.remove(id)?;
        let token = self.tokens.remove(i);
        self.reindex();
        Some(token)
    }

    /// Move a token to the top of the draw order. Returns false if absent.
    pub fn move_to_top(&mut self, id: &TokenId) -> bool {
        let Some(&i) = self.index.get(id) else {
            return false;
        };
        let token = self.tokens.remove(i);
        self.tokens.push(token);
        self.reindex();
        true
    }

    /// Replace all tokens with a full snapshot, in the given draw order.
    /// Later duplicates of an id replace earlier ones in place.
    pub fn load_snapshot(&mut self, tokens: Vec<Token>) {
        self.tokens.clear();
        self.index.clear();
        for token in tokens {
            self.insert(token);
        }
    }

    /// Return a reference to a token by id.
    #[must_use]
    pub fn token(&self, id: &TokenId) -> Option<&Token> {
        self.index.get(id).map(|&i| &self.tokens[i])
    }

    /// All tokens in draw order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Tokens on `layer` in draw order.
    pub fn tokens_on(&self, layer: Layer) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.layer == layer)
    }

    /// Tokens with sight that `player` owns, in draw order.
    #[must_use]
    pub fn owned_tokens_with_sight(&self, player: &str) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.has_sight && t.is_owned_by(player)).collect()
    }

    /// Player-character tokens with sight, regardless of owner, in draw order.
    #[must_use]
    pub fn player_tokens_with_sight(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.has_sight && t.kind == TokenKind::Pc).collect()
    }

    /// Smallest rectangle covering every token footprint, or
    /// [`Rect::EMPTY`] for an empty zone.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let mut iter = self.tokens.iter().map(Token::footprint);
        let Some(first) = iter.next() else {
            return Rect::EMPTY;
        };
        let (mut min, mut max) = (Point::new(first.x, first.y), Point::new(first.right(), first.bottom()));
        for r in iter {
            min.x = min.x.min(r.x);
            min.y = min.y.min(r.y);
            max.x = max.x.max(r.right());
            max.y = max.y.max(r.bottom());
        }
        Rect::from_corners(min, max)
    }

    /// Number of tokens in the zone.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the zone holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, token) in self.tokens.iter().enumerate() {
            self.index.insert(token.id, i);
        }
    }
}
