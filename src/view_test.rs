use uuid::Uuid;

use super::*;
use crate::camera::{Camera, RenderSurface};
use crate::config::{Role, ViewPolicy, Viewer};
use crate::zone::{Token, TokenKind};

// =============================================================
// Helpers
// =============================================================

struct Table {
    zone: Zone,
    rug: TokenId,
    goblin: TokenId,
    hero: TokenId,
    trap: TokenId,
    far: TokenId,
}

/// A rug with a goblin and a hero standing on it, a GM-layer trap, and a
/// marker far off to the east.
fn table() -> Table {
    let rug = Token::new("rug", Layer::Token, Rect::new(0.0, 0.0, 200.0, 200.0));
    let goblin = Token::new("goblin", Layer::Token, Rect::new(20.0, 20.0, 50.0, 50.0));
    let mut hero = Token::new("hero", Layer::Token, Rect::new(100.0, 100.0, 50.0, 50.0));
    hero.kind = TokenKind::Pc;
    hero.has_sight = true;
    hero.owners.push("alice".to_owned());
    let trap = Token::new("trap", Layer::Gm, Rect::new(30.0, 30.0, 10.0, 10.0));
    let mut far = Token::new("far", Layer::Object, Rect::new(5000.0, 0.0, 50.0, 50.0));
    far.is_marker = true;
    far.notes = "Ruined tower".to_owned();

    let ids = (rug.id, goblin.id, hero.id, trap.id, far.id);
    let mut zone = Zone::new("table");
    zone.load_snapshot(vec![rug, goblin, hero, trap, far]);
    Table { zone, rug: ids.0, goblin: ids.1, hero: ids.2, trap: ids.3, far: ids.4 }
}

fn player_input() -> FrameInput {
    FrameInput::new(Viewer::player("alice")).with_surface(RenderSurface::new(800.0, 600.0, Camera::default()))
}

// =============================================================
// Binding and generations
// =============================================================

#[test]
fn new_view_starts_empty() {
    let t = table();
    let view = ZoneView::new(&t.zone);
    let snap = view.snapshot();
    assert_eq!(view.zone_id(), t.zone.id());
    assert_eq!(snap.generation(), 0);
    assert!(snap.positions().is_empty());
    assert_eq!(snap.viewport(), Rect::EMPTY);
}

#[test]
fn update_rejects_other_zone() {
    let t = table();
    let other = Zone::new("other");
    let mut view = ZoneView::new(&t.zone);
    let err = view.update(&other, &SelectionModel::new(), &player_input()).unwrap_err();
    assert_eq!(err, ViewError::ZoneMismatch { expected: t.zone.id(), actual: other.id() });
    assert_eq!(view.snapshot().generation(), 0);
}

#[test]
fn generation_increments_and_old_snapshots_survive() {
    let mut t = table();
    let mut view = ZoneView::new(&t.zone);
    let first = view.update(&t.zone, &SelectionModel::new(), &player_input()).unwrap();
    t.zone.remove(&t.goblin);
    let second = view.update(&t.zone, &SelectionModel::new(), &player_input()).unwrap();

    assert_eq!(first.generation(), 1);
    assert_eq!(second.generation(), 2);
    assert!(first.positions().contains(&t.goblin));
    assert!(!second.positions().contains(&t.goblin));
}

// =============================================================
// Passes
// =============================================================

#[test]
fn viewport_follows_surface() {
    let t = table();
    let mut view = ZoneView::new(&t.zone);
    let snap = view.update(&t.zone, &SelectionModel::new(), &player_input()).unwrap();
    assert_eq!(snap.viewport(), Rect::new(0.0, 0.0, 800.0, 600.0));

    let headless = FrameInput::new(Viewer::player("alice"));
    let snap = view.update(&t.zone, &SelectionModel::new(), &headless).unwrap();
    assert_eq!(snap.viewport(), Rect::EMPTY);
}

#[test]
fn selected_list_omits_missing_tokens() {
    let t = table();
    let ghost = Uuid::new_v4();
    let selection: SelectionModel = [t.hero, ghost, t.rug].into_iter().collect();
    let mut view = ZoneView::new(&t.zone);
    let snap = view.update(&t.zone, &selection, &player_input()).unwrap();
    assert_eq!(snap.selected(), &[t.hero, t.rug]);
}

#[test]
fn player_view_uses_selected_hero() {
    let t = table();
    let selection: SelectionModel = [t.hero].into_iter().collect();
    let mut view = ZoneView::new(&t.zone);
    let snap = view.update(&t.zone, &selection, &player_input()).unwrap();
    assert_eq!(snap.player_view().tokens, vec![t.hero]);
    assert_eq!(snap.player_view().role, Role::Player);
}

#[test]
fn player_and_gm_views_differ_on_gm_layer() {
    let t = table();
    let mut view = ZoneView::new(&t.zone);
    let player = view.update(&t.zone, &SelectionModel::new(), &player_input()).unwrap();
    assert!(!player.positions().contains(&t.trap));

    let gm = FrameInput::new(Viewer::gm("gm"));
    let gm = view.update(&t.zone, &SelectionModel::new(), &gm).unwrap();
    assert!(gm.positions().contains(&t.trap));
    assert!(gm.player_view().is_gm_view());
}

#[test]
fn markers_and_stacks_derive_from_positions() {
    let t = table();
    let mut view = ZoneView::new(&t.zone);
    let snap = view.update(&t.zone, &SelectionModel::new(), &player_input()).unwrap();

    assert_eq!(snap.markers(), &[t.far]);
    for id in snap.markers() {
        assert!(snap.positions().contains(id));
    }

    assert_eq!(snap.stacks().len(), 1);
    let group = snap.stacks().group_of(&t.rug).unwrap();
    assert_eq!(group.members(), &[t.rug, t.goblin, t.hero]);
    for group in snap.stacks().groups() {
        for id in group.members() {
            assert!(snap.positions().layer(Layer::Token).iter().any(|p| p.token == *id));
        }
    }
}

#[test]
fn stacks_ignore_tokens_off_the_token_layer() {
    let t = table();
    let mut view = ZoneView::new(&t.zone);
    let snap = view.update(&t.zone, &SelectionModel::new(), &FrameInput::new(Viewer::gm("gm"))).unwrap();
    // The trap sits on the rug but lives on the GM layer.
    assert!(!snap.stacks().is_stacked(&t.trap));
}

#[test]
fn viewport_culling() {
    let t = table();
    let mut view = ZoneView::new(&t.zone);
    let snap = view.update(&t.zone, &SelectionModel::new(), &player_input()).unwrap();
    assert_eq!(snap.visible_in_viewport(Layer::Object).count(), 0);
    assert_eq!(snap.visible_in_viewport(Layer::Token).count(), 3);
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn repeated_updates_yield_same_state() {
    let t = table();
    let selection: SelectionModel = [t.hero].into_iter().collect();
    let input = player_input().with_policy(ViewPolicy { individual_views: true, personal_server: false });
    let mut view = ZoneView::new(&t.zone);
    let a = view.update(&t.zone, &selection, &input).unwrap();
    let b = view.update(&t.zone, &selection, &input).unwrap();
    assert!(a.same_state(&b));
    assert_ne!(a.generation(), b.generation());
}

#[test]
fn changed_input_changes_state() {
    let t = table();
    let mut view = ZoneView::new(&t.zone);
    let a = view.update(&t.zone, &SelectionModel::new(), &player_input()).unwrap();
    let b = view.update(&t.zone, &SelectionModel::new(), &player_input().with_view_role(Role::Gm)).unwrap();
    assert!(!a.same_state(&b));
}
