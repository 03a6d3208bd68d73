//! Per-viewer derived state for a shared virtual tabletop zone.
//!
//! A zone holds tokens on layers. Each viewer sees it differently depending
//! on role, ownership, and sight. This crate sits between the authoritative
//! zone model and the renderer: once per frame, [`view::ZoneView::update`]
//! recomputes everything the renderer draws from and publishes it as an
//! immutable [`view::Snapshot`]. Painting, persistence, and networking all
//! live in the host application.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`view`] | Recompute orchestrator and published snapshots |
//! | [`zone`] | Token and layer types, in-memory zone store |
//! | [`selection`] | Ordered selection set supplied by the UI |
//! | [`config`] | Viewer identity, role, server policy, per-frame input |
//! | [`camera`] | Pan/zoom camera and viewport projection |
//! | [`player_view`] | Which tokens provide sight for the viewer |
//! | [`positions`] | Visibility filtering and token footprints |
//! | [`markers`] | Map markers the viewer may see |
//! | [`stacks`] | Grouping of tokens that cover one another |
//! | [`hit`] | Point queries against derived token areas |
//! | [`geom`] | Points, rectangles, and rotated areas |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod error;
pub mod geom;
pub mod hit;
pub mod markers;
pub mod player_view;
pub mod positions;
pub mod selection;
pub mod stacks;
pub mod view;
pub mod zone;
